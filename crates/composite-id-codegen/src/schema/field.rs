use super::{attr, AttributeTag, Diagnostic};

/// One field of the entity being transformed, in declaration order.
#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field in the containing entity
    pub(crate) id: usize,

    /// Field name
    pub(crate) ident: syn::Ident,

    /// Field visibility
    pub(crate) vis: syn::Visibility,

    /// Declared field type
    pub(crate) ty: syn::Type,

    /// Inner type when the declared type is `Option<T>`
    pub(crate) inner_ty: Option<syn::Type>,

    /// Semantic tag derived from the field's attributes
    pub(crate) tag: AttributeTag,

    /// True if the field is annotated with `#[key]` (wrap-mode participant)
    pub(crate) key_marker: bool,

    /// The declaration as written, with helper attributes stripped. Passed
    /// through unmodified wherever the field is copied.
    pub(crate) raw: syn::Field,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(Diagnostic::NotAModel.error_at(field));
        };

        let (tag, key_marker) = attr::classify(ident, &field.attrs)?;

        let mut raw = field.clone();
        raw.attrs.retain(|a| !attr::is_helper(a));

        Ok(Self {
            id,
            ident: ident.clone(),
            vis: field.vis.clone(),
            ty: field.ty.clone(),
            inner_ty: option_inner(&field.ty).cloned(),
            tag,
            key_marker,
            raw,
        })
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.inner_ty.is_some()
    }

    /// The field's type in the synthesized key: identifiers are mandatory
    /// once part of a composite key, so their `Option` is stripped.
    pub(crate) fn key_ty(&self) -> &syn::Type {
        match &self.tag {
            AttributeTag::Identifier { .. } => self.inner_ty.as_ref().unwrap_or(&self.ty),
            _ => &self.ty,
        }
    }

    /// Storage key reported for this field in key metadata.
    pub(crate) fn storage_key(&self) -> String {
        match &self.tag {
            AttributeTag::Identifier { storage_key } => storage_key.clone(),
            AttributeTag::ScalarRelation { storage_key } => storage_key
                .clone()
                .unwrap_or_else(|| format!("{}_id", self.ident)),
            AttributeTag::Plain | AttributeTag::CollectionRelation => self.ident.to_string(),
        }
    }
}

fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;

    if segment.ident != "Option" {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first() {
        Some(syn::GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
