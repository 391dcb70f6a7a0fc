use serde_json::Value;

/// Member holding an element's parameter bag; never scanned for child objects
pub const PROPERTIES_KEY: &str = "properties";
/// Member naming the target of a detached-object reference
pub const REFERENCE_KEY: &str = "referencedId";

/// One object of a received model version.
///
/// Only the discriminators the checker needs are lifted out of the raw object;
/// everything else stays in `properties` exactly as received.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: String,
    pub speckle_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    /// Ids of directly nested objects, in member order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, speckle_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            speckle_type: speckle_type.into(),
            category: None,
            properties: None,
            children: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }
}

/// Level attached to a result reported against model objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Error => "ERROR",
        };
        f.write_str(label)
    }
}
