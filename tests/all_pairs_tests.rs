use dense_apsp::algorithm::{reconstruct_path, AllPairsResult, FloydWarshall};
use dense_apsp::graph::{CostMatrix, LabelMap};
use ordered_float::OrderedFloat;

// Test helper: build and solve a labeled graph in one step
fn solve(
    num_nodes: usize,
    edges: &[(&str, &str, f64)],
) -> (LabelMap, AllPairsResult<OrderedFloat<f64>>) {
    let labels = LabelMap::with_node_count(num_nodes);
    let costs = CostMatrix::from_labeled_edges(
        &labels,
        edges.iter().map(|&(s, t, w)| (s, t, OrderedFloat(w))),
    )
    .unwrap();
    let result = FloydWarshall::new().run(&costs);
    (labels, result)
}

// The documented three-node scenario: the two-hop route beats the direct edge
#[test]
fn test_two_hop_route_beats_direct_edge() {
    let (_, result) = solve(3, &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 10.0)]);

    assert_eq!(result.distance(0, 2), OrderedFloat(3.0));

    let path = reconstruct_path(&result, 0, 2).unwrap();
    assert_eq!(path, vec![0, 1, 2], "path should be A -> B -> C");
}

// Every finite pair's reconstructed path must sum to its distance entry
#[test]
fn test_path_weights_sum_to_distance() {
    let edges = [
        ("A", "B", 2.0),
        ("B", "C", 3.0),
        ("C", "D", 1.0),
        ("A", "D", 9.0),
        ("D", "A", 4.0),
        ("B", "D", 5.0),
    ];
    let (labels, result) = solve(4, &edges);

    let costs = CostMatrix::from_labeled_edges(
        &labels,
        edges.iter().map(|&(s, t, w)| (s, t, OrderedFloat(w))),
    )
    .unwrap();

    for i in 0..4 {
        for j in 0..4 {
            let distance = result.distance(i, j);
            if !distance.is_finite() {
                continue;
            }

            let path = reconstruct_path(&result, i, j).unwrap();
            assert_eq!(path.first(), Some(&i), "path should start at source");
            assert_eq!(path.last(), Some(&j), "path should end at target");

            let total: OrderedFloat<f64> = path
                .windows(2)
                .map(|hop| costs.cost(hop[0], hop[1]))
                .sum();
            assert_eq!(
                total, distance,
                "path weights from {} to {} should sum to the distance entry",
                i, j
            );
        }
    }
}

// A disconnected pair keeps an infinite distance and an empty path
#[test]
fn test_disconnected_pair() {
    let (_, result) = solve(3, &[("A", "B", 1.0)]);

    assert!(result.distance(1, 0).is_infinite());
    assert!(result.distance(0, 2).is_infinite());
    assert!(reconstruct_path(&result, 1, 0).unwrap().is_empty());
    assert!(reconstruct_path(&result, 0, 2).unwrap().is_empty());
}

// A lone negative edge warns but does not flag a cycle
#[test]
fn test_negative_edge_without_cycle() {
    let (_, result) = solve(3, &[("A", "B", -1.0), ("B", "C", 2.0)]);

    assert!(result.has_negative_edge);
    assert!(!result.has_negative_cycle);
    assert_eq!(result.distance(0, 2), OrderedFloat(1.0));
}

// A two-node negative cycle flags the computation and drives the diagonal negative
#[test]
fn test_two_node_negative_cycle() {
    let (_, result) = solve(2, &[("A", "B", -1.0), ("B", "A", -1.0)]);

    assert!(result.has_negative_cycle);
    assert!(result.distance(0, 0) < OrderedFloat(0.0));
    assert!(result.distance(1, 1) < OrderedFloat(0.0));
}

// Diagonal entries never go positive, with or without cycles
#[test]
fn test_diagonal_nonpositive() {
    let (_, result) = solve(
        5,
        &[
            ("A", "B", 1.0),
            ("B", "C", 4.0),
            ("C", "A", 2.0),
            ("D", "E", 3.0),
        ],
    );

    for i in 0..5 {
        assert!(result.distance(i, i) <= OrderedFloat(0.0));
    }
    assert!(!result.has_negative_cycle);
}

// Labels keep working past the single-letter alphabet
#[test]
fn test_graph_larger_than_alphabet() {
    let labels = LabelMap::with_node_count(28);
    let costs = CostMatrix::from_labeled_edges(
        &labels,
        [("A", "AA", OrderedFloat(1.0)), ("AA", "AB", OrderedFloat(2.0))],
    )
    .unwrap();
    let result = FloydWarshall::new().run(&costs);

    assert_eq!(result.distance(0, 27), OrderedFloat(3.0));
    let path = reconstruct_path(&result, 0, 27).unwrap();
    assert_eq!(path, vec![0, 26, 27]);
}
