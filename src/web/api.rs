use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::algorithm::{reconstruct_path, AllPairsResult, FloydWarshall};
use crate::graph::{label_for, CostMatrix, LabelMap};
use crate::web::models::*;
use crate::web::presenter;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/compute", post(compute))
        .route("/shortest_path_query", post(shortest_path_query))
        .route("/add_node", post(add_node))
        .route("/remove_node", post(remove_node))
        .route("/api/health", get(health_check))
}

/// Run a full all-pairs computation and return the rendered matrices
pub async fn compute(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let (labels, result) = solve(request.num_nodes, &request.edges).map_err(graph_error)?;

    let computation_id = Uuid::new_v4();
    info!(
        "computation {}: {} nodes, {} edges, negative_cycle={}",
        computation_id,
        request.num_nodes,
        request.edges.len(),
        result.has_negative_cycle
    );

    Ok(Json(ComputeResponse {
        computation_id,
        distance_matrix: presenter::distance_matrix(&result),
        negative_edge_warning: result.has_negative_edge,
        negative_cycle: result.has_negative_cycle,
        next_matrix: presenter::next_hop_matrix(&result, &labels),
    }))
}

/// Answer a point-to-point shortest path query
pub async fn shortest_path_query(
    Json(request): Json<PathQueryRequest>,
) -> Result<Json<PathQueryResponse>, ApiError> {
    let (labels, result) = solve(request.num_nodes, &request.edges).map_err(graph_error)?;

    // An unknown endpoint label is a caller error local to this query; the
    // graph itself is still valid, so answer with the N/A token instead of
    // failing the request.
    let (start, end) = match (labels.resolve(&request.start), labels.resolve(&request.end)) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            warn!(
                "query names unknown node ({:?} -> {:?})",
                request.start, request.end
            );
            return Ok(Json(PathQueryResponse {
                path: Vec::new(),
                distance: MatrixCell::token(presenter::UNKNOWN_NODE_TOKEN),
            }));
        }
    };

    let path = reconstruct_path(&result, start, end).map_err(internal_error)?;

    Ok(Json(PathQueryResponse {
        path: presenter::path_labels(&path, &labels),
        distance: presenter::distance_cell(result.distance(start, end)),
    }))
}

/// Acknowledge a node addition (the client owns the graph description)
pub async fn add_node(
    Json(request): Json<AddNodeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(MessageResponse {
        message: format!("Node {} added successfully.", label_for(request.num_nodes)),
    }))
}

/// Remove a node and every edge touching it.
///
/// Only the last-labeled node can be removed; removing an intermediate node
/// would shift every later label, and relabeling is not implemented.
pub async fn remove_node(
    Json(request): Json<RemoveNodeRequest>,
) -> Result<Json<RemoveNodeResponse>, ApiError> {
    let label = request.node_to_remove.to_uppercase();
    let labels = LabelMap::with_node_count(request.num_nodes);

    let index = match labels.resolve(&label) {
        Some(index) => index,
        None => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "node_not_found".to_string(),
                    message: format!("Node {} does not exist.", label),
                    details: None,
                }),
            ));
        }
    };

    if index + 1 != request.num_nodes {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "relabel_required".to_string(),
                message: "Removing intermediate nodes requires full relabeling, which is not implemented.".to_string(),
                details: None,
            }),
        ));
    }

    let edges: Vec<EdgeSpec> = request
        .edges
        .into_iter()
        .filter(|e| e.source != label && e.target != label)
        .collect();

    Ok(Json(RemoveNodeResponse {
        message: format!("Node {} removed successfully.", label),
        num_nodes: request.num_nodes - 1,
        edges,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn solve(
    num_nodes: usize,
    edges: &[EdgeSpec],
) -> crate::Result<(LabelMap, AllPairsResult<OrderedFloat<f64>>)> {
    let labels = LabelMap::with_node_count(num_nodes);
    let costs = CostMatrix::from_labeled_edges(
        &labels,
        edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str(), OrderedFloat(e.weight))),
    )?;
    let result = FloydWarshall::new().run(&costs);
    Ok((labels, result))
}

fn graph_error(err: Error) -> ApiError {
    let code = match err {
        Error::InvalidNodeCount(_) => "invalid_node_count",
        Error::UnknownLabel(_) => "unknown_label",
        Error::InvalidVertex(_) => "invalid_vertex",
        Error::CorruptNextHop { .. } => "internal_error",
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

fn internal_error(err: Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "path_reconstruction_failed".to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}
