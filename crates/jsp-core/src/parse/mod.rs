pub mod ref_resolve;
pub mod schema;

use crate::error::ParseError;
use schema::SchemaDocument;

/// Parse a JSON Schema document from JSON.
pub fn from_json(input: &str) -> Result<SchemaDocument, ParseError> {
    let document: SchemaDocument = serde_json::from_str(input)?;
    Ok(document)
}

/// Parse a JSON Schema document written as YAML.
pub fn from_yaml(input: &str) -> Result<SchemaDocument, ParseError> {
    let document: SchemaDocument = serde_yaml_ng::from_str(input)?;
    Ok(document)
}
