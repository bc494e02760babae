pub mod floyd_warshall;
pub mod path;

pub use floyd_warshall::{AllPairsResult, FloydWarshall};
pub use path::reconstruct_path;
