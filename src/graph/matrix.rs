use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::LabelMap;
use crate::{Error, Result};

/// A dense `n x n` cost matrix for a directed graph.
///
/// Unset pairs hold positive infinity, the diagonal is initialized to zero
/// (self-distance), and edge weights overwrite whatever was there before, so
/// a duplicate edge for the same ordered pair simply takes the last value
/// and an explicit self-edge can override the zero diagonal.
#[derive(Debug, Clone)]
pub struct CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    node_count: usize,
    costs: Vec<W>,
    has_negative_edge: bool,
}

impl<W> CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a cost matrix for `node_count` nodes with no edges applied.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidNodeCount(node_count));
        }

        let mut costs = vec![W::infinity(); node_count * node_count];
        for i in 0..node_count {
            costs[i * node_count + i] = W::zero();
        }

        Ok(CostMatrix {
            node_count,
            costs,
            has_negative_edge: false,
        })
    }

    /// Builds a cost matrix from edges naming their endpoints by label.
    ///
    /// Every label must resolve against `labels`; an unresolvable label
    /// aborts the build with an error rather than producing a partial
    /// matrix.
    pub fn from_labeled_edges<'a, I>(labels: &LabelMap, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, W)>,
    {
        let mut matrix = CostMatrix::new(labels.node_count())?;

        for (source, target, weight) in edges {
            let from = labels
                .resolve(source)
                .ok_or_else(|| Error::UnknownLabel(source.to_string()))?;
            let to = labels
                .resolve(target)
                .ok_or_else(|| Error::UnknownLabel(target.to_string()))?;
            matrix.set_edge(from, to, weight)?;
        }

        Ok(matrix)
    }

    /// Sets the cost of the directed edge `from -> to`, overwriting any
    /// previous value for that pair.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= self.node_count {
            return Err(Error::InvalidVertex(from));
        }
        if to >= self.node_count {
            return Err(Error::InvalidVertex(to));
        }

        if weight < W::zero() {
            self.has_negative_edge = true;
        }
        self.costs[from * self.node_count + to] = weight;
        Ok(())
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Cost of going from `from` directly to `to` (infinity if no edge).
    pub fn cost(&self, from: usize, to: usize) -> W {
        self.costs[from * self.node_count + to]
    }

    /// True if any applied edge carried a negative weight.
    pub fn has_negative_edge(&self) -> bool {
        self.has_negative_edge
    }

    pub(crate) fn costs(&self) -> &[W] {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LabelMap;

    #[test]
    fn test_new_matrix_diagonal_and_infinity() {
        let matrix: CostMatrix<f64> = CostMatrix::new(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                if i == j {
                    assert_eq!(matrix.cost(i, j), 0.0);
                } else {
                    assert!(matrix.cost(i, j).is_infinite());
                }
            }
        }
        assert!(!matrix.has_negative_edge());
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let result: crate::Result<CostMatrix<f64>> = CostMatrix::new(0);
        assert!(matches!(result, Err(Error::InvalidNodeCount(0))));
    }

    #[test]
    fn test_duplicate_edge_last_write_wins() {
        let labels = LabelMap::with_node_count(2);
        let matrix: CostMatrix<f64> =
            CostMatrix::from_labeled_edges(&labels, [("A", "B", 5.0), ("A", "B", 2.0)]).unwrap();
        assert_eq!(matrix.cost(0, 1), 2.0);
    }

    #[test]
    fn test_self_edge_overrides_diagonal() {
        let labels = LabelMap::with_node_count(2);
        let matrix: CostMatrix<f64> =
            CostMatrix::from_labeled_edges(&labels, [("A", "A", 7.0)]).unwrap();
        assert_eq!(matrix.cost(0, 0), 7.0);
    }

    #[test]
    fn test_negative_edge_flag() {
        let labels = LabelMap::with_node_count(2);
        let matrix: CostMatrix<f64> =
            CostMatrix::from_labeled_edges(&labels, [("A", "B", -1.0)]).unwrap();
        assert!(matrix.has_negative_edge());
    }

    #[test]
    fn test_unknown_label_rejected() {
        let labels = LabelMap::with_node_count(2);
        let result: crate::Result<CostMatrix<f64>> =
            CostMatrix::from_labeled_edges(&labels, [("A", "Q", 1.0)]);
        match result {
            Err(Error::UnknownLabel(label)) => assert_eq!(label, "Q"),
            other => panic!("expected UnknownLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_vertex_rejected() {
        let mut matrix: CostMatrix<f64> = CostMatrix::new(2).unwrap();
        assert!(matches!(
            matrix.set_edge(0, 5, 1.0),
            Err(Error::InvalidVertex(5))
        ));
    }
}
