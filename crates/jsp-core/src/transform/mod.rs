pub mod all_of;
pub mod message_builder;
pub mod name_normalizer;
pub mod type_mapper;

pub use message_builder::{BuildOptions, MessageBuilder};

use crate::error::TransformError;
use crate::ir::Message;
use crate::parse::schema::SchemaDocument;

/// Build the message tree for a whole document, rooted at `root_name`.
pub fn build(root_name: &str, document: &SchemaDocument) -> Result<Message, TransformError> {
    build_with_options(root_name, document, &BuildOptions::default())
}

/// Build with explicit naming options.
pub fn build_with_options(
    root_name: &str,
    document: &SchemaDocument,
    options: &BuildOptions,
) -> Result<Message, TransformError> {
    let builder = MessageBuilder::new(document, *options);
    builder.build_message(root_name, &document.root, &[])
}
