//! Boundary translation from internal indices and sentinels to the external
//! label/token vocabulary. No algorithmic logic lives here.

use ordered_float::OrderedFloat;

use crate::algorithm::AllPairsResult;
use crate::graph::LabelMap;
use crate::web::models::MatrixCell;

/// Display token for an infinite distance or an absent next hop
pub const INFINITY_TOKEN: &str = "∞";

/// Display token for a query naming a node that does not exist
pub const UNKNOWN_NODE_TOKEN: &str = "N/A";

/// Renders a distance value as a JSON-safe cell.
pub fn distance_cell(distance: OrderedFloat<f64>) -> MatrixCell {
    if distance.is_infinite() {
        MatrixCell::token(INFINITY_TOKEN)
    } else {
        MatrixCell::Number(distance.into_inner())
    }
}

/// Renders the full distance matrix with infinity tokens substituted.
pub fn distance_matrix(result: &AllPairsResult<OrderedFloat<f64>>) -> Vec<Vec<MatrixCell>> {
    let n = result.node_count();
    (0..n)
        .map(|i| (0..n).map(|j| distance_cell(result.distance(i, j))).collect())
        .collect()
}

/// Renders the next-hop matrix as labels, with the infinity token wherever
/// no next hop exists.
pub fn next_hop_matrix(
    result: &AllPairsResult<OrderedFloat<f64>>,
    labels: &LabelMap,
) -> Vec<Vec<String>> {
    let n = result.node_count();
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| match result.next_hop(i, j) {
                    Some(hop) => labels.label(hop).to_string(),
                    None => INFINITY_TOKEN.to_string(),
                })
                .collect()
        })
        .collect()
}

/// Maps a path of node indices to its label sequence.
pub fn path_labels(path: &[usize], labels: &LabelMap) -> Vec<String> {
    path.iter().map(|&i| labels.label(i).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::FloydWarshall;
    use crate::graph::CostMatrix;

    fn solve(n: usize, edges: &[(&str, &str, f64)]) -> (LabelMap, AllPairsResult<OrderedFloat<f64>>) {
        let labels = LabelMap::with_node_count(n);
        let costs = CostMatrix::from_labeled_edges(
            &labels,
            edges.iter().map(|&(s, t, w)| (s, t, OrderedFloat(w))),
        )
        .unwrap();
        let result = FloydWarshall::new().run(&costs);
        (labels, result)
    }

    #[test]
    fn test_distance_cell_tokens() {
        assert_eq!(
            distance_cell(OrderedFloat(2.5)),
            MatrixCell::Number(2.5)
        );
        assert_eq!(
            distance_cell(OrderedFloat(f64::INFINITY)),
            MatrixCell::token("∞")
        );
    }

    #[test]
    fn test_next_hop_matrix_substitutes_labels() {
        let (labels, result) = solve(2, &[("A", "B", 1.0)]);
        let rendered = next_hop_matrix(&result, &labels);
        assert_eq!(rendered[0][1], "B");
        assert_eq!(rendered[0][0], "∞");
        assert_eq!(rendered[1][0], "∞");
    }

    #[test]
    fn test_path_labels() {
        let labels = LabelMap::with_node_count(3);
        assert_eq!(path_labels(&[0, 1, 2], &labels), vec!["A", "B", "C"]);
        assert!(path_labels(&[], &labels).is_empty());
    }
}
