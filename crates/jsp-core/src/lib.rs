pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

/// Trait for emitters that render a built message tree as target text.
pub trait Emitter {
    type Error: std::error::Error;
    fn emit(&self, root: &ir::Message) -> Result<String, Self::Error>;
}
