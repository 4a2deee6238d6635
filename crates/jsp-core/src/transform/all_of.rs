use std::borrow::Cow;
use std::collections::VecDeque;

use crate::error::ResolveError;
use crate::parse::ref_resolve::RefResolver;
use crate::parse::schema::Schema;

/// Flatten an `allOf` composition into a single effective schema.
///
/// Components are processed in list order. `type` is first-wins (the base
/// schema's own type beats every component), `properties` are last-wins.
/// A component's nested `allOf` is queued behind the current list rather
/// than flattened in place. Only `type` and `properties` are taken from
/// components.
///
/// A schema without `allOf` is returned as is.
pub fn merge_all_of<'a, 's>(
    resolver: &RefResolver<'a>,
    schema: &'s Schema,
) -> Result<Cow<'s, Schema>, ResolveError>
where
    'a: 's,
{
    if !schema.has_all_of() {
        return Ok(Cow::Borrowed(schema));
    }

    let mut merged = schema.clone();
    merged.all_of.clear();

    // Each pending component carries the `$ref`s it was reached through, so a
    // definition that composes itself is caught while diamond reuse is not.
    let mut pending: VecDeque<(&'s Schema, Vec<&'s str>)> = schema
        .all_of
        .iter()
        .map(|part| (part, Vec::new()))
        .collect();

    while let Some((part, mut ancestors)) = pending.pop_front() {
        if let Some(ref_path) = part.ref_path.as_deref() {
            if ancestors.contains(&ref_path) {
                return Err(ResolveError::CircularComposition(ref_path.to_string()));
            }
            ancestors.push(ref_path);
        }
        let part = resolver.resolve(part)?;

        if merged.schema_type.is_none() {
            merged.schema_type = part.schema_type.clone();
        }

        for (name, prop) in &part.properties {
            merged.properties.insert(name.clone(), prop.clone());
        }

        if part.has_all_of() {
            log::debug!("queueing {} nested allOf components", part.all_of.len());
            pending.extend(part.all_of.iter().map(|nested| (nested, ancestors.clone())));
        }
    }

    Ok(Cow::Owned(merged))
}
