use jsp_core::Emitter;
use jsp_core::ir::{Enum, Message, Subtype};
use minijinja::{Environment, context};
use thiserror::Error;

use crate::type_mapper::field_declaration;

const INDENT: &str = "  ";

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// proto3 emitter: one `.proto` document per message tree.
pub struct ProtoEmitter;

impl Emitter for ProtoEmitter {
    type Error = EmitError;

    fn emit(&self, root: &Message) -> Result<String, EmitError> {
        emit_proto(root)
    }
}

/// Emit the proto3 text for `root` and everything nested in it.
///
/// Subtypes come before fields in each block. Field tags are assigned from 1
/// and enum values from 0, both in declaration order.
pub fn emit_proto(root: &Message) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "schema.proto.j2",
        include_str!("../templates/schema.proto.j2"),
    )?;
    let tmpl = env.get_template("schema.proto.j2")?;

    log::debug!("rendering message {}", root.name);
    let output = tmpl.render(context! {
        root => message_to_ctx(root, 0),
    })?;
    Ok(output)
}

fn message_to_ctx(message: &Message, depth: usize) -> minijinja::Value {
    let subtypes: Vec<minijinja::Value> = message
        .subtypes
        .iter()
        .map(|s| subtype_to_ctx(s, depth + 1))
        .collect();

    let fields: Vec<minijinja::Value> = message
        .numbered_fields()
        .map(|(number, field)| {
            context! {
                declaration => field_declaration(field),
                number => number,
            }
        })
        .collect();

    context! {
        kind => "message",
        name => message.name.clone(),
        indent => INDENT.repeat(depth),
        subtypes => subtypes,
        fields => fields,
    }
}

fn enum_to_ctx(e: &Enum, depth: usize) -> minijinja::Value {
    let values: Vec<minijinja::Value> = e
        .numbered_values()
        .map(|(number, name)| {
            context! {
                name => name,
                number => number,
            }
        })
        .collect();

    context! {
        kind => "enum",
        name => e.name.clone(),
        indent => INDENT.repeat(depth),
        values => values,
    }
}

fn subtype_to_ctx(subtype: &Subtype, depth: usize) -> minijinja::Value {
    match subtype {
        Subtype::Message(m) => message_to_ctx(m, depth),
        Subtype::Enum(e) => enum_to_ctx(e, depth),
    }
}
