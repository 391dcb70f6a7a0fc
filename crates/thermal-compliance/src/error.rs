use model_types::ModelError;
use thiserror::Error;

use crate::category::Category;
use crate::climate::ClimateZone;

/// Errors that abort a whole run
///
/// Missing or malformed thermal data on a single element is not an error;
/// it is reported as a failed element instead.
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("No threshold defined for {category} in climate zone {zone}")]
    UnknownZoneOrCategory {
        category: Category,
        zone: ClimateZone,
    },

    #[error("Failed to receive model: {0}")]
    Transfer(String),
}

impl From<ModelError> for EvaluationError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Parse(e) => EvaluationError::Transfer(e.to_string()),
            other => EvaluationError::MalformedInput(other.to_string()),
        }
    }
}
