//! Per-category compliance evaluation
//!
//! An element fails when its metric is on the wrong side of the zone limit, or
//! when it has no thermal data at all (extracted value of exactly zero).

use model_types::Node;
use serde::Serialize;
use tracing::{debug, warn};

use crate::category::Category;
use crate::climate::ClimateZone;
use crate::error::EvaluationError;
use crate::extractors::{extract_metric, NO_THERMAL_DATA};
use crate::metric::{Direction, MetricModel, MetricSpec};

/// Outcome of checking one element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub object_id: String,
    pub category: Category,
    pub metric: MetricSpec,
    pub measured: f64,
    pub expected: f64,
    pub passed: bool,
}

impl ComplianceResult {
    pub fn has_thermal_data(&self) -> bool {
        self.measured != NO_THERMAL_DATA
    }

    /// Message attached to the element when reporting it
    pub fn message(&self) -> String {
        if !self.has_thermal_data() {
            return format!(
                "No thermal data available: '{}' has no usable value in the element's analytical properties",
                self.metric.name
            );
        }
        let bound = match self.metric.direction {
            Direction::HigherIsWorse => "at most",
            Direction::LowerIsWorse => "at least",
        };
        // measured is printed as read; the limit is shortened only while the
        // shortened limit still gives the same verdict for the measured value
        let direction = self.metric.direction;
        let mut limit = format_value(self.expected);
        let shown: f64 = limit.parse().unwrap_or(self.expected);
        if direction.violates(self.measured, shown)
            != direction.violates(self.measured, self.expected)
        {
            limit = self.expected.to_string();
        }
        format!(
            "Expected {} {} {} {}, actual {}",
            self.metric.symbol, bound, limit, self.metric.unit, self.measured
        )
    }
}

/// Check every node of `category` in flattened order
pub fn evaluate(
    category: Category,
    nodes: &[&Node],
    zone: ClimateZone,
    model: MetricModel,
) -> Result<Vec<ComplianceResult>, EvaluationError> {
    let metric = model.spec();
    let expected = model.limit_for(category, zone)?;

    let results = nodes
        .iter()
        .filter(|node| category.matches(node))
        .map(|node| {
            let measured = extract_metric(node, metric.name);
            let passed =
                measured != NO_THERMAL_DATA && !metric.direction.violates(measured, expected);

            if measured == NO_THERMAL_DATA {
                warn!(object_id = %node.id, %category, "no thermal data");
            } else {
                debug!(object_id = %node.id, %category, measured, expected, passed, "checked element");
            }

            ComplianceResult {
                object_id: node.id.clone(),
                category,
                metric,
                measured,
                expected,
                passed,
            }
        })
        .collect();

    Ok(results)
}

/// Render a value with at most three decimals and no trailing zeros
fn format_value(value: f64) -> String {
    let text = format!("{:.3}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const REVIT_WALL: &str = "Objects.BuiltElements.Wall:Objects.BuiltElements.Revit.RevitWall";

    fn wall(id: &str, u_value: Option<f64>) -> Node {
        let node = Node::new(id, REVIT_WALL).with_category("Walls");
        match u_value {
            Some(value) => node.with_properties(json!({
                "Type Parameters": {
                    "Analytical Properties": {
                        "Heat Transfer Coefficient (U)": { "value": value },
                        "Thermal Resistance (R)": { "value": 1.0 / value }
                    }
                }
            })),
            None => node,
        }
    }

    #[test]
    fn test_humid_subtropical_walls() {
        let a = wall("A", Some(1.2));
        let b = wall("B", Some(1.6));
        let c = wall("C", None);
        let nodes = vec![&a, &b, &c];

        let results = evaluate(Category::Wall, &nodes, ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert_eq!(results.len(), 3);

        assert!(results[0].passed);
        assert_eq!(results[0].measured, 1.2);

        assert!(!results[1].passed);
        assert_eq!(results[1].expected, 1.4);
        assert_eq!(
            results[1].message(),
            "Expected U-value at most 1.4 W/(m²·K), actual 1.6"
        );

        assert!(!results[2].passed);
        assert!(!results[2].has_thermal_data());
        assert!(results[2].message().starts_with("No thermal data"));
    }

    #[test]
    fn test_value_equal_to_threshold_passes() {
        let node = wall("edge", Some(1.4));
        let results =
            evaluate(Category::Wall, &[&node], ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert!(results[0].passed);
    }

    #[test]
    fn test_explicit_zero_is_a_failure() {
        let node = Node::new("z", REVIT_WALL)
            .with_category("Walls")
            .with_properties(json!({
                "Type Parameters": {
                    "Analytical Properties": {
                        "Heat Transfer Coefficient (U)": { "value": 0.0 }
                    }
                }
            }));
        let results =
            evaluate(Category::Wall, &[&node], ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert!(!results[0].passed);
        assert!(results[0].message().starts_with("No thermal data"));
    }

    #[test]
    fn test_other_categories_are_filtered_out() {
        let w = wall("w", Some(1.0));
        let roof = Node::new("r", "Objects.BuiltElements.Roof").with_category("Roofs");
        let mesh = Node::new("m", "Objects.Geometry.Mesh");
        let nodes = vec![&roof, &w, &mesh];

        let walls =
            evaluate(Category::Wall, &nodes, ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].object_id, "w");

        let roofs =
            evaluate(Category::Roof, &nodes, ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert_eq!(roofs.len(), 1);
        assert!(!roofs[0].passed);
    }

    #[test]
    fn test_preserves_input_order() {
        let nodes: Vec<Node> = (0..5).map(|i| wall(&format!("w{}", i), Some(1.0))).collect();
        let refs: Vec<&Node> = nodes.iter().rev().collect();
        let results =
            evaluate(Category::Wall, &refs, ClimateZone::Cfa, MetricModel::UValue).unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.object_id.as_str()).collect();
        assert_eq!(ids, vec!["w4", "w3", "w2", "w1", "w0"]);
    }

    #[test]
    fn test_thermal_resistance_model() {
        // Cfa wall minimum R = 1 / 1.4
        let good = wall("good", Some(1.25));
        let bad = wall("bad", Some(2.0));
        let results = evaluate(
            Category::Wall,
            &[&good, &bad],
            ClimateZone::Cfa,
            MetricModel::ThermalResistance,
        )
        .unwrap();

        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(results[1].measured, 0.5);
        assert_eq!(
            results[1].message(),
            "Expected R-value at least 0.714 (m²·K)/W, actual 0.5"
        );
    }

    #[test]
    fn test_borderline_value_is_reported_unrounded() {
        let node = wall("edge", Some(1.4004));
        let results =
            evaluate(Category::Wall, &[&node], ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert!(!results[0].passed);
        assert_eq!(
            results[0].message(),
            "Expected U-value at most 1.4 W/(m²·K), actual 1.4004"
        );
    }

    #[test]
    fn test_small_resistance_is_not_rounded_to_zero() {
        let node = Node::new("thin", REVIT_WALL)
            .with_category("Walls")
            .with_properties(json!({
                "Type Parameters": {
                    "Analytical Properties": {
                        "Thermal Resistance (R)": { "value": 0.0001 }
                    }
                }
            }));
        let results = evaluate(
            Category::Wall,
            &[&node],
            ClimateZone::Cfa,
            MetricModel::ThermalResistance,
        )
        .unwrap();
        assert!(!results[0].passed);
        assert_eq!(
            results[0].message(),
            "Expected R-value at least 0.714 (m²·K)/W, actual 0.0001"
        );
    }

    #[test]
    fn test_limit_is_widened_when_it_would_match_actual() {
        // 0.714 is below the Cfa wall minimum of 1 / 1.4
        let node = Node::new("r", REVIT_WALL)
            .with_category("Walls")
            .with_properties(json!({
                "Type Parameters": {
                    "Analytical Properties": {
                        "Thermal Resistance (R)": { "value": 0.714 }
                    }
                }
            }));
        let results = evaluate(
            Category::Wall,
            &[&node],
            ClimateZone::Cfa,
            MetricModel::ThermalResistance,
        )
        .unwrap();
        assert!(!results[0].passed);
        assert_eq!(
            results[0].message(),
            format!(
                "Expected R-value at least {} (m²·K)/W, actual 0.714",
                1.0 / 1.4
            )
        );
    }

    #[test]
    fn test_limit_is_widened_when_rounding_flips_the_comparison() {
        let node = Node::new("r", REVIT_WALL)
            .with_category("Walls")
            .with_properties(json!({
                "Type Parameters": {
                    "Analytical Properties": {
                        "Thermal Resistance (R)": { "value": 0.7141 }
                    }
                }
            }));
        let results = evaluate(
            Category::Wall,
            &[&node],
            ClimateZone::Cfa,
            MetricModel::ThermalResistance,
        )
        .unwrap();
        assert!(!results[0].passed);
        assert!(results[0].message().contains(&(1.0 / 1.4).to_string()));
        assert!(results[0].message().ends_with("actual 0.7141"));
    }

    #[test]
    fn test_no_data_message_covers_unusable_values() {
        let node = Node::new("s", REVIT_WALL)
            .with_category("Walls")
            .with_properties(json!({
                "Type Parameters": {
                    "Analytical Properties": {
                        "Heat Transfer Coefficient (U)": { "value": "1.2" }
                    }
                }
            }));
        let results =
            evaluate(Category::Wall, &[&node], ClimateZone::Cfa, MetricModel::UValue).unwrap();
        assert!(!results[0].passed);
        assert_eq!(
            results[0].message(),
            "No thermal data available: 'Heat Transfer Coefficient (U)' has no usable value \
             in the element's analytical properties"
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.4), "1.4");
        assert_eq!(format_value(1.51), "1.51");
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(1.0 / 1.4), "0.714");
    }
}
