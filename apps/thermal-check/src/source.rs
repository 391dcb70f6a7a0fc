//! Model source reading an exported model from disk

use std::path::{Path, PathBuf};

use model_types::ModelGraph;
use thermal_compliance::{EvaluationError, ModelSource};
use tracing::info;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ModelSource for JsonFileSource {
    fn receive_version(&mut self) -> Result<ModelGraph, EvaluationError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            EvaluationError::Transfer(format!("{}: {}", self.path.display(), e))
        })?;
        let graph = ModelGraph::from_json_str(&text)?;
        info!(objects = graph.len(), root = graph.root_id(), "model received");
        Ok(graph)
    }
}
