//! Data model for extracted documentation records.
//!
//! Records are plain owned values. They serialize to the JSON shape consumed
//! by schema generators: `type`, `title`, `description`, `items`, `properties`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Documentation extracted from a single comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationRecord {
    /// `action:` prefix or first `@name`, empty when neither is present
    pub name: String,
    pub description: String,
    /// Top-level `@param` nodes, in order of first appearance
    pub params: Vec<ParamNode>,
    /// First meaningful `@throws` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throws: Option<ThrowsDescriptor>,
}

impl DocumentationRecord {
    /// Look up a top-level parameter by title.
    pub fn param(&self, title: &str) -> Option<&ParamNode> {
        self.params.iter().find(|p| p.title == title)
    }
}

/// Parameter type after alias mapping.
///
/// `Object` becomes `object`, `X[]` becomes `array`, everything else is the
/// lower-cased annotation text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ParamType {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
    /// Any other type name, already lower-cased
    Named(String),
}

impl ParamType {
    /// Map a bare type name (no `[]`, no generics) to a ParamType.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "string" => ParamType::String,
            "number" => ParamType::Number,
            "boolean" => ParamType::Boolean,
            "array" => ParamType::Array,
            "object" => ParamType::Object,
            other => ParamType::Named(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Object => "object",
            ParamType::Named(name) => name,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One node of the nested parameter tree.
///
/// `items` is only kept for `array` nodes and `properties` only for
/// non-array nodes, so a node never carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamNode {
    /// Local name (last path segment, without `[]`); empty for array items
    pub title: String,
    pub ty: ParamType,
    pub description: String,
    /// Element shape of an `array` node
    pub items: Option<Box<ParamNode>>,
    /// Child nodes keyed by local name, in insertion order
    pub properties: Vec<(String, ParamNode)>,
}

impl ParamNode {
    pub fn new(title: impl Into<String>, ty: ParamType) -> Self {
        ParamNode {
            title: title.into(),
            ty,
            ..Default::default()
        }
    }

    /// Look up a direct child property by key.
    pub fn property(&self, key: &str) -> Option<&ParamNode> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }
}

impl Serialize for ParamNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView {
            node: self,
            titled: true,
        }
        .serialize(serializer)
    }
}

/// Serialization view: nested nodes are keyed by their parent, so only
/// top-level params emit `title`.
struct NodeView<'a> {
    node: &'a ParamNode,
    titled: bool,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.node;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &node.ty)?;
        if self.titled && !node.title.is_empty() {
            map.serialize_entry("title", &node.title)?;
        }
        if !node.description.is_empty() {
            map.serialize_entry("description", &node.description)?;
        }
        if let Some(items) = &node.items {
            map.serialize_entry(
                "items",
                &NodeView {
                    node: items,
                    titled: false,
                },
            )?;
        }
        if !node.properties.is_empty() {
            map.serialize_entry("properties", &PropertiesView(&node.properties))?;
        }
        map.end()
    }
}

struct PropertiesView<'a>(&'a [(String, ParamNode)]);

impl Serialize for PropertiesView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, node) in self.0 {
            map.serialize_entry(
                key,
                &NodeView {
                    node,
                    titled: false,
                },
            )?;
        }
        map.end()
    }
}

/// Parsed `@throws` annotation. At least one field is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThrowsDescriptor {
    /// Error type with the braces stripped, case preserved
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names_are_lowercased() {
        assert_eq!(ParamType::from_name("String"), ParamType::String);
        assert_eq!(ParamType::from_name("Object"), ParamType::Object);
        assert_eq!(
            ParamType::from_name("Date"),
            ParamType::Named("date".to_string())
        );
    }

    #[test]
    fn nested_nodes_omit_title() {
        let mut node = ParamNode::new("address", ParamType::Object);
        node.description = "Address of the user".to_string();
        let mut street = ParamNode::new("street", ParamType::String);
        street.description = "Street".to_string();
        node.properties.push(("street".to_string(), street));

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "object",
                "title": "address",
                "description": "Address of the user",
                "properties": {
                    "street": { "type": "string", "description": "Street" }
                }
            })
        );
    }

    #[test]
    fn absent_throws_is_omitted() {
        let record = DocumentationRecord::default();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "name": "", "description": "", "params": [] }));
    }

    #[test]
    fn throws_omits_missing_fields() {
        let throws = ThrowsDescriptor {
            ty: Some("ValidationError".to_string()),
            description: None,
        };
        let value = serde_json::to_value(&throws).unwrap();
        assert_eq!(value, json!({ "type": "ValidationError" }));
    }
}
