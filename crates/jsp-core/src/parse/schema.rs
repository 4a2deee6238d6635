use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed JSON Schema document.
///
/// `definitions` is the dereferencing table for `$ref`; every other root
/// keyword is flattened into `root`, which is itself treated as a schema
/// fragment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Schema>,

    #[serde(flatten)]
    pub root: Schema,
}

/// A JSON Schema fragment restricted to the keywords the converter understands.
///
/// Unknown keywords are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// Kept as a raw value so that unsupported types (`"null"`, type arrays)
    /// reach the type mapper instead of failing the whole parse.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Object properties
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(
        rename = "patternProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub pattern_properties: Option<IndexMap<String, serde_json::Value>>,

    // Array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    // Composition
    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,

    // Enum values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
}

impl Schema {
    /// The `type` keyword as a string, if it is one.
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(|t| t.as_str())
    }

    pub fn is_ref(&self) -> bool {
        self.ref_path.is_some()
    }

    pub fn has_all_of(&self) -> bool {
        !self.all_of.is_empty()
    }
}
