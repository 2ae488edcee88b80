use super::{util, Expand};
use crate::schema::AttributeTag;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// The synthesized key type: one rewritten field per key-set member, in
    /// declaration order. `Default` stands in for the required empty
    /// constructor; `Hash`/`PartialEq` are generated separately from scalar
    /// projections.
    pub(super) fn expand_key_struct(&self) -> TokenStream {
        let vis = &self.entity.vis;
        let key_ident = &self.entity.key_struct_ident;

        let fields = self.partition.key_fields.iter().map(|field| {
            let attrs = &field.raw.attrs;
            let field_vis = &field.vis;
            let ident = &field.ident;
            let ty = field.key_ty();

            quote! {
                #(#attrs)*
                #field_vis #ident: #ty,
            }
        });

        quote! {
            #[derive(Clone, Default)]
            #vis struct #key_ident {
                #(#fields)*
            }
        }
    }

    pub(super) fn expand_key_hash(&self) -> TokenStream {
        let key_ident = &self.entity.key_struct_ident;

        let combines = self.partition.key_fields.iter().map(|field| {
            let projection = util::scalar_projection(field, &self.runtime, quote!(self));
            quote!(::std::hash::Hash::hash(#projection, state);)
        });

        quote! {
            impl ::std::hash::Hash for #key_ident {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    #(#combines)*
                }
            }
        }
    }

    pub(super) fn expand_key_eq(&self) -> TokenStream {
        let key_ident = &self.entity.key_struct_ident;

        let comparisons = self.partition.key_fields.iter().map(|field| {
            let lhs = util::scalar_projection(field, &self.runtime, quote!(self));
            let rhs = util::scalar_projection(field, &self.runtime, quote!(other));
            quote!(#lhs == #rhs)
        });

        quote! {
            impl ::std::cmp::PartialEq for #key_ident {
                fn eq(&self, other: &Self) -> bool {
                    true #(&& #comparisons)*
                }
            }

            impl ::std::cmp::Eq for #key_ident {}
        }
    }

    /// Storage keys of the key fields, in declaration order, carried as
    /// generated trait metadata.
    pub(super) fn expand_key_metadata(&self) -> TokenStream {
        let runtime = &self.runtime;
        let key_ident = &self.entity.key_struct_ident;

        let keys = self
            .partition
            .key_fields
            .iter()
            .map(|field| field.storage_key());

        quote! {
            impl #runtime::CompositeKey for #key_ident {
                fn storage_keys() -> &'static [&'static str] {
                    &[#(#keys),*]
                }
            }
        }
    }

    /// Convenience constructor, nested mode only. One required positional
    /// parameter per key field, matching declaration order; relation
    /// parameters take the related entity's identity and are assigned to the
    /// relation's identity slot.
    pub(super) fn expand_key_constructor(&self) -> TokenStream {
        let runtime = &self.runtime;
        let vis = &self.entity.vis;
        let key_ident = &self.entity.key_struct_ident;

        let params = self.partition.key_fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = field.key_ty();

            match &field.tag {
                AttributeTag::ScalarRelation { .. } => {
                    quote!(#ident: <#ty as #runtime::Relation>::Key)
                }
                _ => quote!(#ident: #ty),
            }
        });

        let assigns = self.partition.key_fields.iter().map(|field| {
            let ident = &field.ident;

            match &field.tag {
                AttributeTag::ScalarRelation { .. } => quote! {
                    #runtime::Relation::set_key(&mut key.#ident, ::std::option::Option::Some(#ident));
                },
                _ => quote!(key.#ident = #ident;),
            }
        });

        quote! {
            impl #key_ident {
                #vis fn new(#(#params),*) -> Self {
                    let mut key = <Self as ::std::default::Default>::default();
                    #(#assigns)*
                    key
                }
            }
        }
    }

    /// Marks the entity (and, in nested mode, its keyed shape) as
    /// addressable by the synthesized key, so other entities can reference
    /// it through a relation field.
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let runtime = &self.runtime;
        let entity_ident = &self.entity.ident;
        let key_ident = &self.entity.key_struct_ident;

        quote! {
            impl #runtime::Entity for #entity_ident {
                type Key = #key_ident;
            }
        }
    }

    pub(super) fn expand_composite_entity_impl(&self) -> TokenStream {
        let runtime = &self.runtime;
        let composite_ident = &self.entity.composite_struct_ident;
        let key_ident = &self.entity.key_struct_ident;

        quote! {
            impl #runtime::Entity for #composite_ident {
                type Key = #key_ident;
            }
        }
    }
}
