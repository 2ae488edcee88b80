use super::Diagnostic;

/// Semantic behavior of a field, derived from its declared attribute.
/// Exactly one tag per field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AttributeTag {
    /// No special behavior; never key-eligible.
    Plain,

    /// The entity's own primary key field.
    Identifier { storage_key: String },

    /// A to-one reference to another entity, projected to that entity's
    /// identity for key purposes.
    ScalarRelation { storage_key: Option<String> },

    /// A to-many relation; carried structurally, never key-eligible.
    CollectionRelation,
}

impl AttributeTag {
    pub(crate) fn is_key_eligible(&self) -> bool {
        matches!(
            self,
            AttributeTag::Identifier { .. } | AttributeTag::ScalarRelation { .. }
        )
    }

    pub(crate) fn is_identifier(&self) -> bool {
        matches!(self, AttributeTag::Identifier { .. })
    }
}

/// Attribute names consumed by the transformation and stripped from the
/// re-emitted declaration.
const RECOGNIZED: &[&str] = &[
    "id",
    "field",
    "belongs_to",
    "composite_belongs_to",
    "has_many",
    "composite_has_many",
];

pub(crate) fn is_helper(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("key") || RECOGNIZED.iter().any(|name| attr.path().is_ident(name))
}

/// Classifies a field's attributes into its tag and participant marker.
/// Unrecognized attributes pass through as `Plain`.
pub(crate) fn classify(
    ident: &syn::Ident,
    attrs: &[syn::Attribute],
) -> syn::Result<(AttributeTag, bool)> {
    let mut key_marker = false;
    let mut recognized: Vec<(&syn::Attribute, &'static str)> = vec![];

    for attr in attrs {
        if attr.path().is_ident("key") {
            key_marker = true;
        } else if let Some(name) = RECOGNIZED.iter().copied().find(|name| attr.path().is_ident(name)) {
            recognized.push((attr, name));
        }
    }

    if recognized.len() > 1 {
        return Err(Diagnostic::AmbiguousFieldAttribute {
            field: ident.to_string(),
            attrs: recognized
                .iter()
                .map(|(_, name)| format!("#[{name}]"))
                .collect(),
        }
        .error_at(recognized[1].0));
    }

    let tag = match recognized.pop() {
        None => AttributeTag::Plain,
        Some((attr, "id")) => AttributeTag::Identifier {
            storage_key: identifier_storage_key(attr)?,
        },
        Some((attr, "field")) => {
            // Validated for shape; a plain field's storage key is unused.
            storage_key_argument(attr, "field")?;
            AttributeTag::Plain
        }
        Some((attr, name @ ("belongs_to" | "composite_belongs_to"))) => {
            AttributeTag::ScalarRelation {
                storage_key: storage_key_argument(attr, name)?,
            }
        }
        Some((attr, name @ ("has_many" | "composite_has_many"))) => {
            storage_key_argument(attr, name)?;
            AttributeTag::CollectionRelation
        }
        Some((_, name)) => unreachable!("recognized attribute `{name}` has no classification"),
    };

    Ok((tag, key_marker))
}

/// `#[id]` defaults the storage key to `"id"`; `#[id(custom = "..")]`
/// overrides it. Any other argument shape is rejected.
fn identifier_storage_key(attr: &syn::Attribute) -> syn::Result<String> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok("id".to_string()),
        syn::Meta::List(_) => {
            let mut custom = None;

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("custom") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    custom = Some(lit.value());
                    Ok(())
                } else {
                    Err(Diagnostic::UnsupportedAttributeArgument {
                        attr: "id".to_string(),
                    }
                    .error_at(&meta.path))
                }
            })?;

            custom.ok_or_else(|| {
                Diagnostic::UnsupportedAttributeArgument {
                    attr: "id".to_string(),
                }
                .error_at(attr)
            })
        }
        syn::Meta::NameValue(_) => Err(Diagnostic::UnsupportedAttributeArgument {
            attr: "id".to_string(),
        }
        .error_at(attr)),
    }
}

/// Relation and plain-field markers take an optional `key = ".."` argument.
fn storage_key_argument(attr: &syn::Attribute, name: &str) -> syn::Result<Option<String>> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(None),
        syn::Meta::List(_) => {
            let mut key = None;

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    key = Some(lit.value());
                    Ok(())
                } else {
                    Err(Diagnostic::UnsupportedAttributeArgument {
                        attr: name.to_string(),
                    }
                    .error_at(&meta.path))
                }
            })?;

            Ok(key)
        }
        syn::Meta::NameValue(_) => Err(Diagnostic::UnsupportedAttributeArgument {
            attr: name.to_string(),
        }
        .error_at(attr)),
    }
}
