use jsp_core::ir::{Field, FieldType};

/// Map a `FieldType` to its proto3 type string.
pub fn field_type_to_proto(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Scalar(scalar) => scalar.as_str().to_string(),
        FieldType::Named(name) => name.clone(),
        FieldType::Map { key, value } => format!("map<{key}, {value}>"),
    }
}

/// The left-hand side of a field line: `[repeated ]<type> <name>`.
pub fn field_declaration(field: &Field) -> String {
    let proto_type = field_type_to_proto(&field.field_type);
    if field.repeated {
        format!("repeated {proto_type} {}", field.name)
    } else {
        format!("{proto_type} {}", field.name)
    }
}
