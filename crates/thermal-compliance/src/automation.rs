//! One automation run against external collaborators
//!
//! The model comes from a [`ModelSource`]; failing elements and the final run
//! status go to a [`ResultSink`]. A run that completes marks the sink exactly
//! once. A run aborted by a fatal error returns the error and leaves the sink
//! unmarked.

use model_types::{ModelGraph, Severity};
use serde::Serialize;
use tracing::info;

use crate::aggregate::{aggregate, RunOutcome};
use crate::config::FunctionInputs;
use crate::error::EvaluationError;
use crate::ThermalComplianceEngine;

/// Supplies the model version to check
pub trait ModelSource {
    fn receive_version(&mut self) -> Result<ModelGraph, EvaluationError>;
}

impl<F> ModelSource for F
where
    F: FnMut() -> Result<ModelGraph, EvaluationError>,
{
    fn receive_version(&mut self) -> Result<ModelGraph, EvaluationError> {
        self()
    }
}

/// Receives per-element results and the final run status
pub trait ResultSink {
    fn attach_result(
        &mut self,
        severity: Severity,
        category: &str,
        object_ids: &[String],
        message: &str,
    );

    fn mark_success(&mut self, message: &str);

    fn mark_failure(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachedResult {
    pub severity: Severity,
    pub category: String,
    pub object_ids: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "message")]
pub enum RunStatus {
    Succeeded(String),
    Failed(String),
}

/// Sink that records everything it is given
#[derive(Debug, Default, Clone, Serialize)]
pub struct MemorySink {
    pub results: Vec<AttachedResult>,
    pub status: Option<RunStatus>,
}

impl ResultSink for MemorySink {
    fn attach_result(
        &mut self,
        severity: Severity,
        category: &str,
        object_ids: &[String],
        message: &str,
    ) {
        self.results.push(AttachedResult {
            severity,
            category: category.to_string(),
            object_ids: object_ids.to_vec(),
            message: message.to_string(),
        });
    }

    fn mark_success(&mut self, message: &str) {
        self.status = Some(RunStatus::Succeeded(message.to_string()));
    }

    fn mark_failure(&mut self, message: &str) {
        self.status = Some(RunStatus::Failed(message.to_string()));
    }
}

/// Validate inputs, receive the model, check it and report to the sink
pub fn run_automation<S, R>(
    source: &mut S,
    sink: &mut R,
    inputs: &FunctionInputs,
) -> Result<RunOutcome, EvaluationError>
where
    S: ModelSource + ?Sized,
    R: ResultSink + ?Sized,
{
    let config = inputs.validate()?;
    info!(
        zone = %config.climate_zone,
        categories = ?config.enabled,
        metric = ?config.metric_model,
        "starting thermal compliance run"
    );

    info!("receiving model version");
    let graph = source.receive_version()?;

    let engine = ThermalComplianceEngine::new(config);
    let reports = engine.check_categories(&graph)?;

    for report in &reports {
        for failure in &report.failures {
            sink.attach_result(
                Severity::Error,
                report.category.label(),
                std::slice::from_ref(&failure.object_id),
                &failure.message(),
            );
        }
    }

    let outcome = aggregate(&reports, &engine.config().enabled);
    if outcome.passed {
        sink.mark_success(&outcome.message);
    } else {
        sink.mark_failure(&outcome.message);
    }
    info!(passed = outcome.passed, failures = outcome.failures.len(), "run finished");

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_types::Node;

    fn single_wall_graph() -> ModelGraph {
        ModelGraph::from_nodes(
            "root",
            vec![
                Node::new("root", "Base").with_children(["w"]),
                Node::new("w", "Objects.BuiltElements.Wall").with_category("Walls"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_failing_element_is_attached_and_run_marked_failed() {
        let mut source = || -> Result<ModelGraph, EvaluationError> { Ok(single_wall_graph()) };
        let mut sink = MemorySink::default();

        let outcome = run_automation(&mut source, &mut sink, &FunctionInputs::default()).unwrap();

        assert!(!outcome.passed);
        assert_eq!(sink.results.len(), 1);
        assert_eq!(sink.results[0].severity, Severity::Error);
        assert_eq!(sink.results[0].category, "Walls");
        assert_eq!(sink.results[0].object_ids, vec!["w".to_string()]);
        assert_eq!(sink.status, Some(RunStatus::Failed(outcome.message)));
    }

    #[test]
    fn test_source_error_aborts_without_marking() {
        let mut source = || -> Result<ModelGraph, EvaluationError> {
            Err(EvaluationError::Transfer("offline".into()))
        };
        let mut sink = MemorySink::default();

        let err = run_automation(&mut source, &mut sink, &FunctionInputs::default()).unwrap_err();
        assert!(matches!(err, EvaluationError::Transfer(_)));
        assert!(sink.status.is_none());
        assert!(sink.results.is_empty());
    }

    #[test]
    fn test_run_status_serializes_tagged() {
        let json = serde_json::to_string(&RunStatus::Succeeded("ok".into())).unwrap();
        assert_eq!(json, r#"{"status":"Succeeded","message":"ok"}"#);
    }
}
