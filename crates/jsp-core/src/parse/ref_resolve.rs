use std::collections::HashSet;

use indexmap::IndexMap;

use super::schema::{Schema, SchemaDocument};
use crate::error::ResolveError;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Dereferences `$ref` pointers against the definition table of one
/// [`SchemaDocument`]. The document is borrowed for the whole conversion.
#[derive(Debug, Clone, Copy)]
pub struct RefResolver<'a> {
    definitions: &'a IndexMap<String, Schema>,
}

impl<'a> RefResolver<'a> {
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self {
            definitions: &document.definitions,
        }
    }

    /// Follow `$ref` pointers until a fragment without one is reached.
    ///
    /// Chains of references (`A -> B -> C`) are followed to the end. A chain
    /// that comes back to a name it already visited is a `CircularRef`.
    pub fn resolve<'s>(&self, schema: &'s Schema) -> Result<&'s Schema, ResolveError>
    where
        'a: 's,
    {
        let mut current = schema;
        let mut visited: HashSet<&str> = HashSet::new();

        while let Some(ref_path) = current.ref_path.as_deref() {
            let name = parse_ref_name(ref_path)?;
            if !visited.insert(name) {
                return Err(ResolveError::CircularRef(ref_path.to_string()));
            }
            log::debug!("resolving {ref_path}");
            current = self.lookup(ref_path)?;
        }

        Ok(current)
    }

    /// Look up the definition a single `$ref` points at, without following
    /// any further references.
    pub fn lookup(&self, ref_path: &str) -> Result<&'a Schema, ResolveError> {
        let name = parse_ref_name(ref_path)?;
        self.definitions
            .get(name)
            .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.to_string()))
    }
}

/// Parse a `$ref` path like `#/definitions/Foo` and extract the name.
pub fn parse_ref_name(ref_path: &str) -> Result<&str, ResolveError> {
    ref_path
        .strip_prefix(DEFINITIONS_PREFIX)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))
}
