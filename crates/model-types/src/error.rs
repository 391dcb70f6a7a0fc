use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Object without a string id (speckle_type: {0})")]
    MissingId(String),

    #[error("Root object '{0}' not found in object store")]
    MissingRoot(String),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(String),

    #[error("Failed to parse model JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
