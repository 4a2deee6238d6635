use heck::{ToPascalCase, ToShoutySnakeCase};

use crate::config::{EnumValueCase, SubtypeNaming};

/// Uppercase the first character and leave the rest untouched.
///
/// `userId` becomes `UserId`, `user_id` becomes `User_id`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the nested message or enum name for a property.
pub fn subtype_name(property: &str, naming: SubtypeNaming) -> String {
    match naming {
        SubtypeNaming::Capitalize => capitalize(property),
        SubtypeNaming::PascalCase => property.to_pascal_case(),
    }
}

/// Render an enum value as a proto enum constant.
pub fn enum_value_name(value: &str, case: EnumValueCase) -> String {
    match case {
        EnumValueCase::Preserve => value.to_string(),
        EnumValueCase::ScreamingSnake => value.to_shouty_snake_case(),
    }
}
