use super::{partition, Diagnostic, ErrorSet, Field, KeySet, Mode, Partition};

use proc_macro2::TokenStream;

/// The normalized entity declaration: everything the expansion needs,
/// validated up front. Created fresh per declaration and discarded after
/// expansion.
#[derive(Debug)]
pub(crate) struct Entity {
    /// Entity name
    pub(crate) ident: syn::Ident,

    /// Entity visibility, propagated to all generated items
    pub(crate) vis: syn::Visibility,

    /// Struct-level attributes, re-emitted unmodified
    pub(crate) attrs: Vec<syn::Attribute>,

    /// Entity fields in declaration order
    pub(crate) fields: Vec<Field>,

    /// Resolved transformation mode and key field names
    pub(crate) key_set: KeySet,

    /// Identifier of the synthesized key type (`{Entity}Id`)
    pub(crate) key_struct_ident: syn::Ident,

    /// Identifier of the derived keyed shape (`{Entity}Composite`)
    pub(crate) composite_struct_ident: syn::Ident,
}

impl Entity {
    pub(crate) fn from_ast(item: &syn::ItemStruct, args: TokenStream) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &item.fields else {
            return Err(Diagnostic::NotAModel.error_at(&item.ident));
        };

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for (id, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, id) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let key_set = KeySet::resolve(args, &fields)?;

        Ok(Self {
            ident: item.ident.clone(),
            vis: item.vis.clone(),
            attrs: item.attrs.clone(),
            key_struct_ident: struct_ident("Id", item),
            composite_struct_ident: struct_ident("Composite", item),
            fields,
            key_set,
        })
    }

    pub(crate) fn mode(&self) -> Mode {
        self.key_set.mode
    }

    pub(crate) fn partition(&self) -> Partition<'_> {
        partition(&self.fields, &self.key_set)
    }
}

fn struct_ident(suffix: &str, entity: &syn::ItemStruct) -> syn::Ident {
    syn::Ident::new(&format!("{}{}", entity.ident, suffix), entity.ident.span())
}
