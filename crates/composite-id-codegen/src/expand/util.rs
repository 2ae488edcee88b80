use crate::schema::{AttributeTag, Field};

use proc_macro2::TokenStream;
use quote::quote;

/// Scalar projection of a key field: relation fields project to the
/// referenced entity's identity (forcing it to be resolved), everything else
/// to the field's own value. Hashing and equality both go through here so
/// the two can never diverge.
pub(crate) fn scalar_projection(
    field: &Field,
    runtime: &TokenStream,
    target: TokenStream,
) -> TokenStream {
    let ident = &field.ident;

    match &field.tag {
        AttributeTag::ScalarRelation { .. } => {
            quote!(#runtime::Relation::require_key(&#target.#ident))
        }
        _ => quote!(&#target.#ident),
    }
}
