//! Which analytical property is checked, and which way it fails

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::climate::ClimateZone;
use crate::error::EvaluationError;
use crate::thresholds::threshold_for;

/// Comparison direction of a metric against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Fails above the limit (U-value)
    HigherIsWorse,
    /// Fails below the limit (R-value)
    LowerIsWorse,
}

impl Direction {
    pub fn violates(&self, value: f64, limit: f64) -> bool {
        match self {
            Direction::HigherIsWorse => value > limit,
            Direction::LowerIsWorse => value < limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSpec {
    /// Key under "Analytical Properties"
    pub name: &'static str,
    pub symbol: &'static str,
    pub unit: &'static str,
    pub direction: Direction,
}

pub const HEAT_TRANSFER_COEFFICIENT: MetricSpec = MetricSpec {
    name: "Heat Transfer Coefficient (U)",
    symbol: "U-value",
    unit: "W/(m²·K)",
    direction: Direction::HigherIsWorse,
};

pub const THERMAL_RESISTANCE: MetricSpec = MetricSpec {
    name: "Thermal Resistance (R)",
    symbol: "R-value",
    unit: "(m²·K)/W",
    direction: Direction::LowerIsWorse,
};

/// Metric model selected by the run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MetricModel {
    /// Compare the heat transfer coefficient against the U-value maximum
    #[default]
    #[serde(alias = "u-value", alias = "U")]
    UValue,
    /// Compare thermal resistance against the R-value minimum (1 / U maximum)
    #[serde(alias = "r-value", alias = "R")]
    ThermalResistance,
}

impl MetricModel {
    pub fn spec(&self) -> MetricSpec {
        match self {
            MetricModel::UValue => HEAT_TRANSFER_COEFFICIENT,
            MetricModel::ThermalResistance => THERMAL_RESISTANCE,
        }
    }

    /// Limit the metric is compared against for a category in a zone
    pub fn limit_for(&self, category: Category, zone: ClimateZone) -> Result<f64, EvaluationError> {
        let max_u_value = threshold_for(category, zone)?;
        Ok(match self {
            MetricModel::UValue => max_u_value,
            MetricModel::ThermalResistance => 1.0 / max_u_value,
        })
    }

    /// Parse "u-value" / "UValue" / "r-value" / "ThermalResistance" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "u-value" | "uvalue" => Some(MetricModel::UValue),
            "r" | "r-value" | "thermalresistance" | "thermal-resistance" => {
                Some(MetricModel::ThermalResistance)
            }
            _ => None,
        }
    }
}
