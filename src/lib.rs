//! Dense APSP - All-Pairs Shortest Paths over small labeled directed graphs
//!
//! This library computes shortest paths between every ordered pair of nodes
//! in a small, densely labeled directed graph using the Floyd-Warshall
//! relaxation, including support for negative edge weights and detection of
//! negative-weight cycles.
//!
//! Nodes are addressed externally by letter labels (`A`, `B`, `C`, ...) and
//! internally by dense indices. Each computation is stateless: a node count
//! and an edge list go in, a distance matrix, a next-hop matrix and the
//! negative-edge/negative-cycle flags come out. Paths between any two nodes
//! can then be reconstructed from the next-hop matrix on demand.

pub mod algorithm;
pub mod graph;
pub mod web;

pub use algorithm::{reconstruct_path, AllPairsResult, FloydWarshall};
/// Re-export main types for convenient use
pub use graph::{CostMatrix, LabelMap};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid node count: {0}")]
    InvalidNodeCount(usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Unknown node label: {0:?}")]
    UnknownLabel(String),

    #[error("Next-hop chain from {from} to {to} is corrupt")]
    CorruptNextHop { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
