use super::Expand;
use crate::schema::AttributeTag;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Nested mode: the flat entity as declared, with helper attributes
    /// stripped.
    pub(super) fn expand_flat_struct(&self) -> TokenStream {
        let attrs = &self.entity.attrs;
        let vis = &self.entity.vis;
        let entity_ident = &self.entity.ident;
        let fields = self.entity.fields.iter().map(|field| &field.raw);

        quote! {
            #(#attrs)*
            #vis struct #entity_ident {
                #(#fields,)*
            }
        }
    }

    /// Wrap mode: the entity itself, with the scattered key fields replaced
    /// by a single composite identifier field at the position of the first
    /// of them.
    pub(super) fn expand_rewritten_struct(&self) -> TokenStream {
        let attrs = &self.entity.attrs;
        let vis = &self.entity.vis;
        let entity_ident = &self.entity.ident;
        let key_ident = &self.entity.key_struct_ident;

        let id_field = quote!(#vis id: ::std::option::Option<#key_ident>);

        let mut fields: Vec<TokenStream> = vec![];
        let mut id_emitted = false;

        for field in &self.entity.fields {
            if self.partition.key_fields.iter().any(|key| key.id == field.id) {
                if !id_emitted {
                    fields.push(id_field.clone());
                    id_emitted = true;
                }
            } else {
                let raw = &field.raw;
                fields.push(quote!(#raw));
            }
        }

        if !id_emitted {
            fields.insert(0, id_field);
        }

        quote! {
            #(#attrs)*
            #vis struct #entity_ident {
                #(#fields,)*
            }
        }
    }

    /// Nested mode: the derived keyed shape. The composite identifier is
    /// optional so a freshly built instance can exist before its key fields
    /// are known.
    pub(super) fn expand_composite_struct(&self) -> TokenStream {
        let vis = &self.entity.vis;
        let composite_ident = &self.entity.composite_struct_ident;
        let key_ident = &self.entity.key_struct_ident;
        let carry_over = self.partition.carry_over.iter().map(|field| &field.raw);

        quote! {
            #[derive(Default)]
            #vis struct #composite_ident {
                #vis id: ::std::option::Option<#key_ident>,
                #(#carry_over,)*
            }
        }
    }

    /// The three accessors of nested mode. All pure projections; `flat`
    /// tolerates an absent composite identifier by leaving key fields at
    /// their defaults.
    pub(super) fn expand_conversions(&self) -> TokenStream {
        let runtime = &self.runtime;
        let vis = &self.entity.vis;
        let entity_ident = &self.entity.ident;
        let composite_ident = &self.entity.composite_struct_ident;
        let key_ident = &self.entity.key_struct_ident;

        let collect_key = self.partition.key_fields.iter().map(|field| {
            let ident = &field.ident;

            match &field.tag {
                AttributeTag::ScalarRelation { .. } => quote! {
                    #runtime::Relation::set_key(
                        &mut id.#ident,
                        #runtime::Relation::key(&self.#ident).cloned(),
                    );
                },
                _ if field.is_optional() => quote! {
                    if let ::std::option::Option::Some(value) = &self.#ident {
                        id.#ident = ::std::clone::Clone::clone(value);
                    }
                },
                _ => quote! {
                    id.#ident = ::std::clone::Clone::clone(&self.#ident);
                },
            }
        });

        let distribute_key = self.partition.key_fields.iter().map(|field| {
            let ident = &field.ident;

            match &field.tag {
                AttributeTag::ScalarRelation { .. } => quote! {
                    #runtime::Relation::set_key(
                        &mut flat.#ident,
                        #runtime::Relation::key(&id.#ident).cloned(),
                    );
                },
                _ if field.is_optional() => quote! {
                    flat.#ident = ::std::option::Option::Some(
                        ::std::clone::Clone::clone(&id.#ident),
                    );
                },
                _ => quote! {
                    flat.#ident = ::std::clone::Clone::clone(&id.#ident);
                },
            }
        });

        let copy_to_composite = self.partition.carry_over_plain().map(|field| {
            let ident = &field.ident;
            quote!(composite.#ident = ::std::clone::Clone::clone(&self.#ident);)
        });

        let copy_to_flat = self.partition.carry_over_plain().map(|field| {
            let ident = &field.ident;
            quote!(flat.#ident = ::std::clone::Clone::clone(&self.#ident);)
        });

        quote! {
            impl #entity_ident {
                /// Builds a fresh composite identity from the current key
                /// field values.
                #vis fn composite_id(&self) -> #key_ident {
                    let mut id = <#key_ident as ::std::default::Default>::default();
                    #(#collect_key)*
                    id
                }

                /// Projects this instance into its keyed shape.
                #vis fn composite(&self) -> #composite_ident {
                    let mut composite =
                        <#composite_ident as ::std::default::Default>::default();
                    composite.id = ::std::option::Option::Some(self.composite_id());
                    #(#copy_to_composite)*
                    composite
                }
            }

            impl #composite_ident {
                /// Projects this instance back into the flat shape. An
                /// absent composite identifier leaves the key fields at
                /// their defaults.
                #vis fn flat(&self) -> #entity_ident {
                    let mut flat = <#entity_ident as ::std::default::Default>::default();
                    if let ::std::option::Option::Some(id) = &self.id {
                        #(#distribute_key)*
                    }
                    #(#copy_to_flat)*
                    flat
                }
            }
        }
    }
}
