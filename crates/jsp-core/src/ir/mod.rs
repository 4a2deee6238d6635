pub mod types;

pub use types::{Enum, Field, FieldType, Message, ScalarType, Subtype};
