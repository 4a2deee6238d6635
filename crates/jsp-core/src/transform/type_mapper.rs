use crate::ir::ScalarType;
use crate::parse::schema::Schema;

/// The shape of a resolved schema fragment, decided once from its keywords.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind<'s> {
    /// `string`, `number`, `integer` or `boolean`.
    Scalar(ScalarType),
    /// `type: string` with an `enum` list.
    StringEnum(&'s [serde_json::Value]),
    /// `type: object` with `patternProperties`.
    StringMap,
    /// `type: object` with (possibly no) named properties.
    Object,
    /// `type: array`, with its `items` schema if present.
    Array(Option<&'s Schema>),
    /// No `type` keyword.
    Untyped,
    /// Any other `type` value, as written in the document.
    Unsupported(String),
}

/// Classify a fragment. References and compositions must already be resolved.
pub fn classify(schema: &Schema) -> SchemaKind<'_> {
    let Some(type_value) = &schema.schema_type else {
        return SchemaKind::Untyped;
    };

    match type_value.as_str() {
        Some("array") => SchemaKind::Array(schema.items.as_deref()),
        Some("object") if schema.pattern_properties.is_some() => SchemaKind::StringMap,
        Some("object") => SchemaKind::Object,
        Some("string") => match schema.enum_values.as_deref() {
            Some(values) => SchemaKind::StringEnum(values),
            None => SchemaKind::Scalar(ScalarType::String),
        },
        Some("number") => SchemaKind::Scalar(ScalarType::Double),
        Some("integer") => SchemaKind::Scalar(ScalarType::Int32),
        Some("boolean") => SchemaKind::Scalar(ScalarType::Bool),
        Some(other) => SchemaKind::Unsupported(other.to_string()),
        None => SchemaKind::Unsupported(type_value.to_string()),
    }
}

/// Text of an `enum` entry: strings verbatim, anything else as JSON.
pub fn enum_value_text(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(
            classify(&schema(r#"{"type": "string"}"#)),
            SchemaKind::Scalar(ScalarType::String)
        );
        assert_eq!(
            classify(&schema(r#"{"type": "number"}"#)),
            SchemaKind::Scalar(ScalarType::Double)
        );
        assert_eq!(
            classify(&schema(r#"{"type": "integer"}"#)),
            SchemaKind::Scalar(ScalarType::Int32)
        );
        assert_eq!(
            classify(&schema(r#"{"type": "boolean"}"#)),
            SchemaKind::Scalar(ScalarType::Bool)
        );
    }

    #[test]
    fn test_string_enum() {
        let s = schema(r#"{"type": "string", "enum": ["A", "B"]}"#);
        match classify(&s) {
            SchemaKind::StringEnum(values) => assert_eq!(values.len(), 2),
            other => panic!("expected string enum, got {other:?}"),
        }
    }

    #[test]
    fn test_enum_without_string_type_is_not_an_enum() {
        let s = schema(r#"{"type": "integer", "enum": [1, 2]}"#);
        assert_eq!(classify(&s), SchemaKind::Scalar(ScalarType::Int32));
    }

    #[test]
    fn test_object_and_map() {
        assert_eq!(
            classify(&schema(r#"{"type": "object", "properties": {}}"#)),
            SchemaKind::Object
        );
        assert_eq!(
            classify(&schema(
                r#"{"type": "object", "patternProperties": {"^x-": {"type": "string"}}}"#
            )),
            SchemaKind::StringMap
        );
    }

    #[test]
    fn test_array() {
        let with_items = schema(r#"{"type": "array", "items": {"type": "string"}}"#);
        match classify(&with_items) {
            SchemaKind::Array(Some(items)) => assert_eq!(items.type_name(), Some("string")),
            other => panic!("expected array with items, got {other:?}"),
        }
        assert_eq!(
            classify(&schema(r#"{"type": "array"}"#)),
            SchemaKind::Array(None)
        );
    }

    #[test]
    fn test_untyped_and_unsupported() {
        assert_eq!(classify(&schema(r#"{"properties": {}}"#)), SchemaKind::Untyped);
        assert_eq!(
            classify(&schema(r#"{"type": "null"}"#)),
            SchemaKind::Unsupported("null".to_string())
        );
        assert_eq!(
            classify(&schema(r#"{"type": ["string", "null"]}"#)),
            SchemaKind::Unsupported(r#"["string","null"]"#.to_string())
        );
    }

    #[test]
    fn test_enum_value_text() {
        assert_eq!(enum_value_text(&serde_json::json!("RED")), "RED");
        assert_eq!(enum_value_text(&serde_json::json!(3)), "3");
        assert_eq!(enum_value_text(&serde_json::json!(true)), "true");
    }
}
