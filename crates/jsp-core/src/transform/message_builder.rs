use crate::config::NamingConfig;
use crate::error::TransformError;
use crate::ir::{Enum, Field, FieldType, Message, ScalarType, Subtype};
use crate::parse::ref_resolve::RefResolver;
use crate::parse::schema::{Schema, SchemaDocument};

use super::all_of::merge_all_of;
use super::name_normalizer::{enum_value_name, subtype_name};
use super::type_mapper::{SchemaKind, classify, enum_value_text};

/// Options controlling how the builder names generated types.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub naming: NamingConfig,
}

/// Recursively builds a [`Message`] tree from the object graph of one
/// schema document.
pub struct MessageBuilder<'a> {
    resolver: RefResolver<'a>,
    options: BuildOptions,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(document: &'a SchemaDocument, options: BuildOptions) -> Self {
        Self {
            resolver: RefResolver::new(document),
            options,
        }
    }

    /// Build the message `name` from the `properties` of `schema`.
    ///
    /// `chain` holds the names of the messages enclosing this one. A nested
    /// object whose derived name is already in the chain is treated as a
    /// cycle: the field is kept but no message is built for it. This is
    /// name based, so two unrelated properties with the same name at
    /// different depths also collapse into one reference.
    pub fn build_message(
        &self,
        name: &str,
        schema: &Schema,
        chain: &[String],
    ) -> Result<Message, TransformError> {
        let mut message = Message::new(name);

        for (prop_name, prop) in &schema.properties {
            self.add_property(&mut message, prop_name, prop, chain)?;
        }

        Ok(message)
    }

    fn add_property(
        &self,
        message: &mut Message,
        prop_name: &str,
        prop: &Schema,
        chain: &[String],
    ) -> Result<(), TransformError> {
        let prop = self.resolver.resolve(prop)?;

        match classify(prop) {
            SchemaKind::Array(None) => {
                log::warn!("Cannot process {prop_name}: array without items");
                Ok(())
            }
            SchemaKind::Array(Some(items)) => {
                let items = self.resolver.resolve(items)?;
                let items = merge_all_of(&self.resolver, items)?;
                self.add_typed(message, prop_name, &items, true, chain)
            }
            _ => self.add_typed(message, prop_name, prop, false, chain),
        }
    }

    fn add_typed(
        &self,
        message: &mut Message,
        prop_name: &str,
        schema: &Schema,
        repeated: bool,
        chain: &[String],
    ) -> Result<(), TransformError> {
        match classify(schema) {
            SchemaKind::Scalar(scalar) => {
                push_field(message, prop_name, FieldType::Scalar(scalar), repeated);
            }
            SchemaKind::StringMap => {
                let map = FieldType::Map {
                    key: ScalarType::String,
                    value: ScalarType::String,
                };
                // proto3 does not allow repeated maps
                push_field(message, prop_name, map, false);
            }
            SchemaKind::StringEnum(values) => {
                let enum_name = subtype_name(prop_name, self.options.naming.subtypes);
                let subtype = self.build_enum(&enum_name, values);
                message.subtypes.push(Subtype::Enum(subtype));
                push_field(message, prop_name, FieldType::Named(enum_name), repeated);
            }
            SchemaKind::Object => {
                let type_name = subtype_name(prop_name, self.options.naming.subtypes);
                if chain.contains(&type_name) {
                    log::info!(
                        "Cyclic reference [{type_name}] is already in {}",
                        chain.join("->")
                    );
                } else {
                    log::info!("Add {type_name} to [{}]", chain.join(", "));
                    let mut child_chain = chain.to_vec();
                    child_chain.push(type_name.clone());
                    let nested = self.build_message(&type_name, schema, &child_chain)?;
                    message.subtypes.push(Subtype::Message(nested));
                }
                push_field(message, prop_name, FieldType::Named(type_name), repeated);
            }
            SchemaKind::Untyped => {
                log::warn!("Cannot process {prop_name}: missing type");
            }
            SchemaKind::Array(_) => {
                log::warn!("Unrecognized array for {prop_name}: nested arrays are not supported");
            }
            SchemaKind::Unsupported(type_name) => {
                log::warn!("Unrecognized {type_name} for {prop_name}");
            }
        }
        Ok(())
    }

    fn build_enum(&self, name: &str, values: &[serde_json::Value]) -> Enum {
        let mut rendered: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            let text = enum_value_name(&enum_value_text(value), self.options.naming.enum_values);
            if rendered.contains(&text) {
                log::warn!("Dropping duplicate value {text} in enum {name}");
                continue;
            }
            rendered.push(text);
        }
        Enum {
            name: name.to_string(),
            values: rendered,
        }
    }
}

fn push_field(message: &mut Message, name: &str, field_type: FieldType, repeated: bool) {
    message.fields.push(Field {
        name: name.to_string(),
        field_type,
        repeated,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnumValueCase, SubtypeNaming};

    fn document(json: &str) -> SchemaDocument {
        serde_json::from_str(json).unwrap()
    }

    fn build(json: &str) -> Message {
        let doc = document(json);
        MessageBuilder::new(&doc, BuildOptions::default())
            .build_message("Root", &doc.root, &[])
            .unwrap()
    }

    #[test]
    fn test_new_subtype_created_once() {
        let msg = build(
            r#"{"properties": {
                "address": {"type": "object", "properties": {"city": {"type": "string"}}}
            }}"#,
        );
        assert_eq!(msg.subtypes.len(), 1);
        assert_eq!(msg.subtypes[0].name(), "Address");
        assert_eq!(
            msg.fields[0].field_type,
            FieldType::Named("Address".to_string())
        );
    }

    #[test]
    fn test_name_in_chain_suppresses_subtype() {
        let doc = document(
            r#"{"properties": {
                "node": {"type": "object", "properties": {"id": {"type": "string"}}}
            }}"#,
        );
        let builder = MessageBuilder::new(&doc, BuildOptions::default());
        let msg = builder
            .build_message("Node", &doc.root, &["Node".to_string()])
            .unwrap();
        assert!(msg.subtypes.is_empty());
        assert_eq!(msg.fields.len(), 1);
        assert_eq!(msg.fields[0].field_type, FieldType::Named("Node".to_string()));
    }

    #[test]
    fn test_root_name_is_not_in_chain() {
        // The root starts with an empty chain, so a property named after the
        // root still gets its own nested message.
        let msg = build(
            r#"{"properties": {
                "root": {"type": "object", "properties": {"id": {"type": "string"}}}
            }}"#,
        );
        assert_eq!(msg.subtypes.len(), 1);
        assert_eq!(msg.subtypes[0].name(), "Root");
    }

    #[test]
    fn test_array_of_objects_is_repeated_message() {
        let msg = build(
            r#"{"properties": {
                "items": {"type": "array", "items": {
                    "type": "object", "properties": {"sku": {"type": "string"}}
                }}
            }}"#,
        );
        let field = msg.field("items").unwrap();
        assert!(field.repeated);
        assert_eq!(field.field_type, FieldType::Named("Items".to_string()));
        match msg.subtype("Items") {
            Some(Subtype::Message(m)) => assert_eq!(m.fields[0].name, "sku"),
            other => panic!("expected nested message, got {other:?}"),
        }
    }

    #[test]
    fn test_array_of_pattern_objects_is_plain_map() {
        let msg = build(
            r#"{"properties": {
                "labels": {"type": "array", "items": {
                    "type": "object", "patternProperties": {".*": {"type": "string"}}
                }}
            }}"#,
        );
        let field = msg.field("labels").unwrap();
        assert!(!field.repeated);
        assert!(matches!(field.field_type, FieldType::Map { .. }));
        assert!(msg.subtypes.is_empty());
    }

    #[test]
    fn test_array_items_merged_from_all_of() {
        let msg = build(
            r##"{
                "definitions": {
                    "Base": {"type": "object", "properties": {"id": {"type": "string"}}}
                },
                "properties": {
                    "entries": {"type": "array", "items": {"allOf": [
                        {"$ref": "#/definitions/Base"},
                        {"properties": {"count": {"type": "integer"}}}
                    ]}}
                }
            }"##,
        );
        let field = msg.field("entries").unwrap();
        assert!(field.repeated);
        match msg.subtype("Entries") {
            Some(Subtype::Message(m)) => {
                let names: Vec<&str> = m.fields.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(names, vec!["id", "count"]);
            }
            other => panic!("expected nested message, got {other:?}"),
        }
    }

    #[test]
    fn test_skipped_properties() {
        let msg = build(
            r#"{"properties": {
                "untyped": {"description": "no type"},
                "nothing": {"type": "null"},
                "either": {"type": ["string", "null"]},
                "bare_array": {"type": "array"},
                "untyped_items": {"type": "array", "items": {"description": "?"}},
                "matrix": {"type": "array", "items": {"type": "array", "items": {"type": "number"}}},
                "kept": {"type": "boolean"}
            }}"#,
        );
        assert_eq!(msg.fields.len(), 1);
        assert_eq!(msg.fields[0].name, "kept");
    }

    #[test]
    fn test_naming_options() {
        let doc = document(
            r#"{"properties": {
                "order_status": {"type": "string", "enum": ["inProgress", "done", "DONE"]}
            }}"#,
        );
        let options = BuildOptions {
            naming: NamingConfig {
                subtypes: SubtypeNaming::PascalCase,
                enum_values: EnumValueCase::ScreamingSnake,
            },
        };
        let msg = MessageBuilder::new(&doc, options)
            .build_message("Root", &doc.root, &[])
            .unwrap();
        match msg.subtype("OrderStatus") {
            Some(Subtype::Enum(e)) => assert_eq!(e.values, vec!["IN_PROGRESS", "DONE"]),
            other => panic!("expected enum, got {other:?}"),
        }
        assert_eq!(
            msg.fields[0].field_type,
            FieldType::Named("OrderStatus".to_string())
        );
    }
}
