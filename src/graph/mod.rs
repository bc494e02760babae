pub mod labels;
pub mod matrix;

pub use labels::{label_for, LabelMap};
pub use matrix::CostMatrix;
