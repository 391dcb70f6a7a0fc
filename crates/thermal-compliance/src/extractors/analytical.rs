// Analytical property extraction from schema-less parameter bags
use model_types::Node;
use serde_json::Value;

pub const TYPE_PARAMETERS: &str = "Type Parameters";
pub const ANALYTICAL_PROPERTIES: &str = "Analytical Properties";
pub const VALUE_KEY: &str = "value";

/// Sentinel returned when an element carries no usable thermal data
pub const NO_THERMAL_DATA: f64 = 0.0;

/// Follow `path` through nested maps, stopping at the first missing key or non-map
pub fn try_get<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Read `properties → Type Parameters → Analytical Properties → <metric> → value`
pub fn read_metric(node: &Node, metric_name: &str) -> Option<f64> {
    let properties = node.properties.as_ref()?;
    try_get(
        properties,
        &[TYPE_PARAMETERS, ANALYTICAL_PROPERTIES, metric_name, VALUE_KEY],
    )?
    .as_f64()
}

/// Same as [`read_metric`], collapsing every failure into [`NO_THERMAL_DATA`]
pub fn extract_metric(node: &Node, metric_name: &str) -> f64 {
    read_metric(node, metric_name).unwrap_or(NO_THERMAL_DATA)
}
