use log::{debug, warn};
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::CostMatrix;

/// Result of an all-pairs shortest path computation.
///
/// Holds the converged distance matrix, the next-hop matrix used for path
/// reconstruction, and the negative-edge/negative-cycle flags. The result is
/// a pure function of the cost matrix it was computed from and is never
/// mutated after the engine returns.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    node_count: usize,

    /// Shortest known cost for each ordered pair, row-major.
    distances: Vec<W>,

    /// First hop on a shortest path for each ordered pair; `None` on the
    /// diagonal and wherever no path exists.
    next_hops: Vec<Option<usize>>,

    /// True if any input edge carried a negative weight
    pub has_negative_edge: bool,

    /// True if some node can reach itself with negative total cost
    pub has_negative_cycle: bool,
}

impl<W> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of nodes the matrices cover.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Shortest-path cost from `from` to `to` (infinity if unreachable).
    ///
    /// When `has_negative_cycle` is set, entries for pairs that can route
    /// through the cycle are numerically unreliable but still returned.
    pub fn distance(&self, from: usize, to: usize) -> W {
        self.distances[from * self.node_count + to]
    }

    /// The node to move to from `from` on a shortest path toward `to`.
    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        self.next_hops[from * self.node_count + to]
    }
}

/// All-pairs shortest path engine using the Floyd-Warshall relaxation.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new engine instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes shortest paths between every ordered pair of nodes.
    ///
    /// Negative edge weights are supported. If the graph contains a
    /// negative cycle the computation still completes; the cycle is
    /// reported through `has_negative_cycle` and affected distances are
    /// returned as computed rather than masked.
    pub fn run<W>(&self, costs: &CostMatrix<W>) -> AllPairsResult<W>
    where
        W: Float + Zero + Debug + Copy,
    {
        let n = costs.node_count();
        debug!("running Floyd-Warshall over {} nodes", n);

        let mut distances = costs.costs().to_vec();
        let mut next_hops: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            for j in 0..n {
                if i != j && distances[i * n + j] < W::infinity() {
                    next_hops[i * n + j] = Some(j);
                }
            }
        }

        // The outer loop over the intermediate node k must stay outermost:
        // round k establishes optimality for all paths whose interior nodes
        // lie in {0..k}, which round k+1 builds on.
        for k in 0..n {
            for i in 0..n {
                let d_ik = distances[i * n + k];
                if !d_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let d_kj = distances[k * n + j];
                    if !d_kj.is_finite() {
                        continue;
                    }
                    let through_k = d_ik + d_kj;
                    if through_k < distances[i * n + j] {
                        distances[i * n + j] = through_k;
                        // First hop toward k, not k itself, keeps the hop
                        // chain walkable from i.
                        next_hops[i * n + j] = next_hops[i * n + k];
                    }
                }
            }
        }

        let has_negative_cycle = (0..n).any(|i| distances[i * n + i] < W::zero());
        if has_negative_cycle {
            warn!("negative cycle detected; affected distances are unreliable");
        }

        AllPairsResult {
            node_count: n,
            distances,
            next_hops,
            has_negative_edge: costs.has_negative_edge(),
            has_negative_cycle,
        }
    }
}
