pub mod error;
pub mod graph;
pub mod types;

pub use error::ModelError;
pub use graph::ModelGraph;
pub use types::{Node, Severity};
