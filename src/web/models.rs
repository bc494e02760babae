use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed edge naming its endpoints by node label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Request for a full all-pairs computation
#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub num_nodes: usize,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// A single cell of a rendered matrix: a finite number or a display token
/// such as `"∞"` or `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixCell {
    Number(f64),
    Token(String),
}

impl MatrixCell {
    pub fn token(token: &str) -> Self {
        MatrixCell::Token(token.to_string())
    }
}

/// Response containing the full computation output
#[derive(Debug, Clone, Serialize)]
pub struct ComputeResponse {
    pub computation_id: Uuid,
    pub distance_matrix: Vec<Vec<MatrixCell>>,
    pub negative_edge_warning: bool,
    pub negative_cycle: bool,
    pub next_matrix: Vec<Vec<String>>,
}

/// Request for a point-to-point shortest path query
#[derive(Debug, Deserialize)]
pub struct PathQueryRequest {
    pub num_nodes: usize,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    pub start: String,
    pub end: String,
}

/// Response for a point-to-point query; `path` is empty when no path exists
/// or when either endpoint label is unknown.
#[derive(Debug, Clone, Serialize)]
pub struct PathQueryResponse {
    pub path: Vec<String>,
    pub distance: MatrixCell,
}

/// Request to add a node (bookkeeping acknowledgement only; the client owns
/// the node count and edge list)
#[derive(Debug, Deserialize)]
pub struct AddNodeRequest {
    pub num_nodes: usize,
}

/// Request to remove a node and every edge touching it
#[derive(Debug, Deserialize)]
pub struct RemoveNodeRequest {
    pub num_nodes: usize,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    pub node_to_remove: String,
}

/// Updated graph description after a node removal
#[derive(Debug, Serialize)]
pub struct RemoveNodeResponse {
    pub message: String,
    pub num_nodes: usize,
    pub edges: Vec<EdgeSpec>,
}

/// Simple acknowledgement message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
