//! Thermal performance compliance for building models
//!
//! Pipeline for one run:
//! 1. Flatten the model graph (depth-first, deduplicated)
//! 2. Classify elements into walls, windows and roofs
//! 3. Extract the analytical thermal metric of each element
//! 4. Compare against the climate-zone limit for its category
//! 5. Aggregate per-category results into a single outcome

pub mod aggregate;
pub mod automation;
pub mod category;
pub mod climate;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod extractors;
pub mod flatten;
pub mod metric;
pub mod thresholds;

pub use aggregate::{aggregate, CategoryReport, RunOutcome, SUCCESS_MESSAGE};
pub use automation::{
    run_automation, AttachedResult, MemorySink, ModelSource, ResultSink, RunStatus,
};
pub use category::{classify, Category};
pub use climate::ClimateZone;
pub use config::{FunctionInputs, RunConfig};
pub use error::EvaluationError;
pub use evaluate::{evaluate, ComplianceResult};
pub use extractors::extract_metric;
pub use flatten::flatten;
pub use metric::{Direction, MetricModel, MetricSpec};
pub use thresholds::threshold_for;

use model_types::ModelGraph;
use tracing::info;

/// ThermalComplianceEngine entry point
pub struct ThermalComplianceEngine {
    config: RunConfig,
}

impl ThermalComplianceEngine {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Evaluate every enabled category, in configuration order
    ///
    /// With no category enabled the model is not traversed at all.
    pub fn check_categories(
        &self,
        graph: &ModelGraph,
    ) -> Result<Vec<CategoryReport>, EvaluationError> {
        if self.config.enabled.is_empty() {
            info!("no categories enabled, skipping model traversal");
            return Ok(Vec::new());
        }

        let nodes = flatten(graph)?;
        info!(objects = nodes.len(), "flattened model");

        let mut reports = Vec::with_capacity(self.config.enabled.len());
        for &category in &self.config.enabled {
            let results = evaluate(
                category,
                &nodes,
                self.config.climate_zone,
                self.config.metric_model,
            )?;
            let report = CategoryReport::from_results(category, results);
            info!(
                %category,
                total = report.total,
                failed = report.failures.len(),
                "evaluated category"
            );
            reports.push(report);
        }

        Ok(reports)
    }

    /// Check a model and aggregate the outcome
    pub fn check_model(&self, graph: &ModelGraph) -> Result<RunOutcome, EvaluationError> {
        let reports = self.check_categories(graph)?;
        Ok(aggregate(&reports, &self.config.enabled))
    }
}
