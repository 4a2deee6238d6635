use std::fmt;

/// One target message type: a named record with ordered fields and its
/// locally nested message/enum definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub name: String,
    pub fields: Vec<Field>,
    pub subtypes: Vec<Subtype>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            subtypes: Vec::new(),
        }
    }

    /// Fields paired with their tag numbers, assigned positionally from 1.
    pub fn numbered_fields(&self) -> impl Iterator<Item = (u32, &Field)> {
        (1u32..).zip(self.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn subtype(&self, name: &str) -> Option<&Subtype> {
        self.subtypes.iter().find(|s| s.name() == name)
    }
}

/// A target enumerated type. Values keep source order; tags start at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

impl Enum {
    pub fn numbered_values(&self) -> impl Iterator<Item = (u32, &str)> {
        (0u32..).zip(self.values.iter().map(String::as_str))
    }
}

/// A nested definition owned by the enclosing message.
#[derive(Debug, Clone, PartialEq)]
pub enum Subtype {
    Message(Message),
    Enum(Enum),
}

impl Subtype {
    pub fn name(&self) -> &str {
        match self {
            Subtype::Message(m) => &m.name,
            Subtype::Enum(e) => &e.name,
        }
    }
}

/// A field of a message. Subtypes are referenced by name only.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub repeated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// Reference to a sibling message or enum by name.
    Named(String),
    Map { key: ScalarType, value: ScalarType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Double,
    Int32,
    Bool,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Double => "double",
            ScalarType::Int32 => "int32",
            ScalarType::Bool => "bool",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(s) => write!(f, "{s}"),
            FieldType::Named(name) => f.write_str(name),
            FieldType::Map { key, value } => write!(f, "map<{key}, {value}>"),
        }
    }
}
