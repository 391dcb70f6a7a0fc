//! In-memory object store for one received model version
//!
//! Two input shapes are accepted:
//! - a nested root object, where child objects are embedded inline
//! - a detached store `{ "rootId": ..., "objects": [...] }`, where members may be
//!   `{ "referencedId": ... }` links to other objects of the store
//!
//! A nested JSON object counts as a child node when it carries a string
//! `speckle_type`. Plain maps without one are searched for nodes but are not
//! nodes themselves. Links are recorded as-is; resolving them (and rejecting
//! dangling or cyclic ones) is left to whoever walks the graph.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::types::{Node, PROPERTIES_KEY, REFERENCE_KEY};

#[derive(Debug, Clone, Default)]
pub struct ModelGraph {
    root_id: String,
    objects: HashMap<String, Node>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectStoreDocument {
    root_id: String,
    objects: Vec<Value>,
}

impl ModelGraph {
    /// Parse either supported JSON shape from text
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Build from a parsed JSON document, detecting its shape
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        if value.get("rootId").is_some() && value.get("objects").is_some() {
            let document = ObjectStoreDocument::deserialize(value)?;
            Self::from_object_store(document.root_id, &document.objects)
        } else {
            Self::from_root_object(value)
        }
    }

    /// Build from a single nested root object
    pub fn from_root_object(root: &Value) -> Result<Self, ModelError> {
        let mut builder = GraphBuilder::default();
        let root_id = builder.ingest(as_object(root)?)?;
        Ok(Self {
            root_id,
            objects: builder.objects,
        })
    }

    /// Build from a detached object store; the first object seen with a given id wins
    pub fn from_object_store(
        root_id: impl Into<String>,
        objects: &[Value],
    ) -> Result<Self, ModelError> {
        let mut builder = GraphBuilder::default();
        for object in objects {
            builder.ingest(as_object(object)?)?;
        }
        let graph = Self {
            root_id: root_id.into(),
            objects: builder.objects,
        };
        graph.ensure_root()?;
        Ok(graph)
    }

    /// Build from already-decomposed nodes
    pub fn from_nodes(
        root_id: impl Into<String>,
        nodes: impl IntoIterator<Item = Node>,
    ) -> Result<Self, ModelError> {
        let mut objects = HashMap::new();
        for node in nodes {
            objects.entry(node.id.clone()).or_insert(node);
        }
        let graph = Self {
            root_id: root_id.into(),
            objects,
        };
        graph.ensure_root()?;
        Ok(graph)
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn root(&self) -> Option<&Node> {
        self.objects.get(&self.root_id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.objects.get(id)
    }

    /// Number of distinct objects held, reachable from the root or not
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn ensure_root(&self) -> Result<(), ModelError> {
        if self.objects.contains_key(&self.root_id) {
            Ok(())
        } else {
            Err(ModelError::MissingRoot(self.root_id.clone()))
        }
    }
}

#[derive(Default)]
struct GraphBuilder {
    objects: HashMap<String, Node>,
    /// Objects whose members are still being decomposed
    pending: HashSet<String>,
}

impl GraphBuilder {
    fn ingest(&mut self, object: &Map<String, Value>) -> Result<String, ModelError> {
        let speckle_type = object
            .get("speckle_type")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let id = object
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ModelError::MissingId(speckle_type.to_string()))?
            .to_string();

        // Same id means same object: an inline copy nested under itself is
        // recorded as a plain edge, which shows up as a cycle when walked.
        if self.objects.contains_key(&id) || self.pending.contains(&id) {
            return Ok(id);
        }
        self.pending.insert(id.clone());

        let mut children = Vec::new();
        for (key, member) in object {
            if key == PROPERTIES_KEY {
                continue;
            }
            self.collect_children(member, &mut children)?;
        }

        let node = Node {
            id: id.clone(),
            speckle_type: speckle_type.to_string(),
            category: object
                .get("category")
                .and_then(Value::as_str)
                .map(str::to_string),
            properties: object.get(PROPERTIES_KEY).cloned(),
            children,
        };
        self.pending.remove(&id);
        self.objects.insert(id.clone(), node);
        Ok(id)
    }

    fn collect_children(
        &mut self,
        member: &Value,
        children: &mut Vec<String>,
    ) -> Result<(), ModelError> {
        match member {
            Value::Object(map) => {
                if let Some(target) = map.get(REFERENCE_KEY).and_then(Value::as_str) {
                    children.push(target.to_string());
                } else if map.get("speckle_type").and_then(Value::as_str).is_some() {
                    children.push(self.ingest(map)?);
                } else {
                    for nested in map.values() {
                        self.collect_children(nested, children)?;
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.collect_children(item, children)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ModelError> {
    value.as_object().ok_or_else(|| {
        let kind = match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        ModelError::NotAnObject(kind.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn nested_model() -> Value {
        json!({
            "id": "root",
            "speckle_type": "Speckle.Core.Models.Collection",
            "elements": [
                {
                    "id": "level-1",
                    "speckle_type": "Objects.BuiltElements.Level",
                    "elements": [
                        {
                            "id": "wall-1",
                            "speckle_type": "Objects.BuiltElements.Wall:Objects.BuiltElements.Revit.RevitWall",
                            "category": "Walls",
                            "properties": {
                                "Nested": { "id": "not-a-child", "speckle_type": "Base" }
                            }
                        }
                    ]
                },
                { "id": "roof-1", "speckle_type": "Objects.BuiltElements.Roof", "category": "Roofs" }
            ]
        })
    }

    #[test]
    fn test_nested_root_object_is_decomposed() {
        let graph = ModelGraph::from_root_object(&nested_model()).unwrap();

        assert_eq!(graph.root_id(), "root");
        assert_eq!(graph.len(), 4);
        assert_eq!(
            graph.root().unwrap().children,
            vec!["level-1".to_string(), "roof-1".to_string()]
        );
        assert_eq!(graph.get("level-1").unwrap().children, vec!["wall-1".to_string()]);

        let wall = graph.get("wall-1").unwrap();
        assert_eq!(wall.category.as_deref(), Some("Walls"));
        assert!(wall.properties.is_some());
    }

    #[test]
    fn test_properties_are_not_scanned_for_children() {
        let graph = ModelGraph::from_root_object(&nested_model()).unwrap();
        assert!(graph.get("not-a-child").is_none());
        assert!(graph.get("wall-1").unwrap().children.is_empty());
    }

    #[test]
    fn test_plain_maps_are_searched_but_not_nodes() {
        let model = json!({
            "id": "root",
            "speckle_type": "Base",
            "parameters": {
                "group": [{ "id": "p1", "speckle_type": "Objects.BuiltElements.Revit.Parameter" }]
            }
        });
        let graph = ModelGraph::from_root_object(&model).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.root().unwrap().children, vec!["p1".to_string()]);
    }

    #[test]
    fn test_detached_store_keeps_references() {
        let store = json!({
            "rootId": "root",
            "objects": [
                {
                    "id": "root",
                    "speckle_type": "Base",
                    "elements": [
                        { "referencedId": "shared", "speckle_type": "reference" },
                        { "referencedId": "shared", "speckle_type": "reference" }
                    ]
                },
                { "id": "shared", "speckle_type": "Objects.BuiltElements.Wall", "category": "Walls" }
            ]
        });
        let graph = ModelGraph::from_json(&store).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.root().unwrap().children,
            vec!["shared".to_string(), "shared".to_string()]
        );
    }

    #[test]
    fn test_duplicate_inline_objects_are_stored_once() {
        let shared = json!({ "id": "w", "speckle_type": "Objects.BuiltElements.Wall" });
        let model = json!({ "id": "root", "speckle_type": "Base", "a": shared.clone(), "b": shared });
        let graph = ModelGraph::from_root_object(&model).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.root().unwrap().children, vec!["w".to_string(), "w".to_string()]);
    }

    #[test]
    fn test_inline_copy_under_itself_becomes_an_edge() {
        let model = json!({
            "id": "root",
            "speckle_type": "Base",
            "inner": { "id": "root", "speckle_type": "Base" }
        });
        let graph = ModelGraph::from_root_object(&model).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.root().unwrap().children, vec!["root".to_string()]);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let model = json!({
            "id": "root",
            "speckle_type": "Base",
            "elements": [{ "speckle_type": "Objects.BuiltElements.Wall" }]
        });
        let err = ModelGraph::from_root_object(&model).unwrap_err();
        assert!(matches!(err, ModelError::MissingId(ref t) if t == "Objects.BuiltElements.Wall"));
    }

    #[test]
    fn test_missing_root_in_store_is_rejected() {
        let store = json!({ "rootId": "nope", "objects": [{ "id": "a", "speckle_type": "Base" }] });
        let err = ModelGraph::from_json(&store).unwrap_err();
        assert!(matches!(err, ModelError::MissingRoot(ref id) if id == "nope"));
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let err = ModelGraph::from_json(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ModelError::NotAnObject(ref kind) if kind == "an array"));
    }

    #[test]
    fn test_invalid_json_text_is_a_parse_error() {
        let err = ModelGraph::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn test_from_nodes_first_wins() {
        let graph = ModelGraph::from_nodes(
            "a",
            vec![
                Node::new("a", "Base").with_children(["b"]),
                Node::new("b", "First"),
                Node::new("b", "Second"),
            ],
        )
        .unwrap();
        assert_eq!(graph.get("b").unwrap().speckle_type, "First");
    }
}
