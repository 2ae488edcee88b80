use super::{AttributeTag, Field, KeySet};

/// The entity's fields split against the resolved key set, both sides in
/// declaration order.
#[derive(Debug)]
pub(crate) struct Partition<'a> {
    /// Fields forming the composite key
    pub(crate) key_fields: Vec<&'a Field>,

    /// Everything else, kept structurally in the rewritten entity
    pub(crate) carry_over: Vec<&'a Field>,
}

/// Routes each field to exactly one side. A pure fold; no accumulator
/// escapes the function.
pub(crate) fn partition<'a>(fields: &'a [Field], key_set: &KeySet) -> Partition<'a> {
    let (key_fields, carry_over) = fields
        .iter()
        .partition(|field| key_set.contains(&field.ident));

    Partition {
        key_fields,
        carry_over,
    }
}

impl<'a> Partition<'a> {
    /// The narrower carry-over view used for conversion code: only plainly
    /// stored fields are copied between the flat and keyed shapes. Relation
    /// wrappers hold runtime-managed state and stay structural-only.
    pub(crate) fn carry_over_plain(&self) -> impl Iterator<Item = &'a Field> + '_ {
        self.carry_over
            .iter()
            .copied()
            .filter(|field| matches!(field.tag, AttributeTag::Plain))
    }
}
