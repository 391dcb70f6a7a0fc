//! Run configuration
//!
//! `FunctionInputs` is the raw, user-supplied form (camelCase JSON). It is
//! validated into a `RunConfig` before anything else happens in a run.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::climate::ClimateZone;
use crate::error::EvaluationError;
use crate::metric::MetricModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionInputs {
    pub climate_zone: String,
    pub check_walls: bool,
    pub check_windows: bool,
    pub check_roofs: bool,
    pub metric_model: MetricModel,
}

impl Default for FunctionInputs {
    fn default() -> Self {
        Self {
            climate_zone: ClimateZone::DEFAULT.identifier().to_string(),
            check_walls: true,
            check_windows: true,
            check_roofs: true,
            metric_model: MetricModel::default(),
        }
    }
}

impl FunctionInputs {
    pub fn from_json_str(json: &str) -> Result<Self, EvaluationError> {
        serde_json::from_str(json).map_err(|e| {
            EvaluationError::InvalidConfiguration(format!("unreadable function inputs: {}", e))
        })
    }

    pub fn validate(&self) -> Result<RunConfig, EvaluationError> {
        let climate_zone = self.climate_zone.parse::<ClimateZone>()?;

        let enabled = [
            (Category::Wall, self.check_walls),
            (Category::Window, self.check_windows),
            (Category::Roof, self.check_roofs),
        ]
        .into_iter()
        .filter_map(|(category, on)| on.then_some(category))
        .collect();

        Ok(RunConfig {
            climate_zone,
            enabled,
            metric_model: self.metric_model,
        })
    }
}

/// Validated configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub climate_zone: ClimateZone,
    /// Categories to evaluate, in reporting order
    pub enabled: Vec<Category>,
    pub metric_model: MetricModel,
}

impl RunConfig {
    /// All categories, U-value model
    pub fn new(climate_zone: ClimateZone) -> Self {
        Self {
            climate_zone,
            enabled: Category::ALL.to_vec(),
            metric_model: MetricModel::UValue,
        }
    }

    pub fn with_categories(mut self, categories: &[Category]) -> Self {
        self.enabled = Category::ALL
            .into_iter()
            .filter(|category| categories.contains(category))
            .collect();
        self
    }

    pub fn with_metric_model(mut self, metric_model: MetricModel) -> Self {
        self.metric_model = metric_model;
        self
    }
}
