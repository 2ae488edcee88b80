//! Composite identity synthesis for entity declarations.
//!
//! Takes one annotated struct and derives a composite-key type with value
//! semantics, plus the keyed representation of the entity and the
//! conversions between the flat and keyed shapes. The transformation is a
//! pure function of the declaration: same tokens in, same tokens out, with
//! any malformed input rejected as a spanned error before anything is
//! generated.

mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(args: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    let item = match syn::parse2::<syn::Item>(input)? {
        syn::Item::Struct(item) => item,
        other => return Err(schema::Diagnostic::NotAnEntity.error_at(&other)),
    };

    let entity = schema::Entity::from_ast(&item, args)?;

    Ok(expand::entity(&entity))
}
