//! JSON report envelope

use serde::Serialize;
use thermal_compliance::{AttachedResult, FunctionInputs, MemorySink, RunOutcome, RunStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationReport {
    pub inputs: FunctionInputs,
    pub outcome: RunOutcome,
    pub results: Vec<AttachedResult>,
    pub status: Option<RunStatus>,
    /// RFC 3339 time of report creation
    pub checked_at: String,
}

impl AutomationReport {
    pub fn new(inputs: FunctionInputs, outcome: RunOutcome, sink: MemorySink) -> Self {
        Self {
            inputs,
            outcome,
            results: sink.results,
            status: sink.status,
            checked_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
