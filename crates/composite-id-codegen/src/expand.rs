mod conversion;
mod identity;
mod util;

use crate::schema::{Entity, Mode, Partition};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Key / carry-over split of the entity's fields
    partition: Partition<'a>,

    /// Path prefix for runtime support types
    runtime: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let key_struct = self.expand_key_struct();
        let key_hash = self.expand_key_hash();
        let key_eq = self.expand_key_eq();
        let key_metadata = self.expand_key_metadata();
        let entity_impl = self.expand_entity_impl();

        match self.entity.mode() {
            Mode::NestedComposite => {
                let flat_struct = self.expand_flat_struct();
                let composite_struct = self.expand_composite_struct();
                let key_constructor = self.expand_key_constructor();
                let conversions = self.expand_conversions();
                let composite_entity_impl = self.expand_composite_entity_impl();

                let impls = wrap_in_const(quote! {
                    #key_constructor
                    #key_hash
                    #key_eq
                    #key_metadata
                    #entity_impl
                    #composite_entity_impl
                    #conversions
                });

                quote! {
                    #flat_struct
                    #composite_struct
                    #key_struct
                    #impls
                }
            }
            Mode::WrapComposite => {
                let rewritten_struct = self.expand_rewritten_struct();

                let impls = wrap_in_const(quote! {
                    #key_hash
                    #key_eq
                    #key_metadata
                    #entity_impl
                });

                quote! {
                    #rewritten_struct
                    #key_struct
                    #impls
                }
            }
        }
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    let runtime = quote!(_composite_id);

    Expand {
        entity,
        partition: entity.partition(),
        runtime,
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use composite_id as _composite_id;
            #code
        };
    }
}
