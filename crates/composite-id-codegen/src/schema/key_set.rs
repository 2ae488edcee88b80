use super::{Diagnostic, Field};

use proc_macro2::TokenStream;
use syn::parse::{Parse, ParseStream};

/// How the composite identity is derived for an entity. Decided once from
/// the attribute arguments, immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Mode {
    /// An explicit `using(..)` list names the key fields; the entity keeps
    /// its flat shape and gains a derived keyed shape.
    NestedComposite,

    /// No arguments; every `#[key]`-marked field participates and the entity
    /// itself is rewritten around the composite identifier.
    WrapComposite,
}

/// The validated set of key field names, in declaration-independent
/// reference order, deduplicated. Every name is guaranteed to exist in the
/// entity and to carry a key-eligible tag.
#[derive(Debug)]
pub(crate) struct KeySet {
    pub(crate) mode: Mode,
    names: Vec<syn::Ident>,
}

impl KeySet {
    pub(crate) fn resolve(args: TokenStream, fields: &[Field]) -> syn::Result<Self> {
        let identifier = fields.iter().find(|field| field.tag.is_identifier());

        let (mode, names) = if args.is_empty() {
            if let Some(field) = identifier {
                return Err(Diagnostic::MissingIdentifierConflict.error_at(&field.ident));
            }

            let names = fields
                .iter()
                .filter(|field| field.key_marker)
                .map(|field| field.ident.clone())
                .collect();

            (Mode::WrapComposite, names)
        } else {
            let key_args: KeyArgs = syn::parse2(args.clone())?;

            if identifier.is_none() {
                return Err(Diagnostic::MissingIdentifierField.error_at(&args));
            }

            let mut names: Vec<syn::Ident> = vec![];
            for ident in key_args.refs {
                if !names.contains(&ident) {
                    names.push(ident);
                }
            }

            (Mode::NestedComposite, names)
        };

        let mut unknown: Vec<String> = names
            .iter()
            .filter(|name| !fields.iter().any(|field| &field.ident == *name))
            .map(|name| name.to_string())
            .collect();

        if !unknown.is_empty() {
            unknown.sort();
            return Err(Diagnostic::UnknownKeyField { names: unknown }.error_at(&args));
        }

        let mut ineligible: Vec<String> = fields
            .iter()
            .filter(|field| names.contains(&field.ident) && !field.tag.is_key_eligible())
            .map(|field| field.ident.to_string())
            .collect();

        if !ineligible.is_empty() {
            ineligible.sort();
            return Err(Diagnostic::IneligibleKeyField { names: ineligible }.error_at(&args));
        }

        Ok(Self { mode, names })
    }

    pub(crate) fn contains(&self, ident: &syn::Ident) -> bool {
        self.names.iter().any(|name| name == ident)
    }
}

/// The `using(a, b, ..)` argument list. Each entry is either a bare field
/// ident or a `$`-prefixed string literal naming a field path.
struct KeyArgs {
    refs: Vec<syn::Ident>,
}

impl Parse for KeyArgs {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let label: syn::Ident = input.parse().map_err(|err| {
            syn::Error::new(
                err.span(),
                Diagnostic::InvalidArgumentShape {
                    expected: "a single `using(..)` list",
                }
                .to_string(),
            )
        })?;

        if label != "using" {
            return Err(Diagnostic::InvalidArgumentShape {
                expected: "a single `using(..)` list",
            }
            .error_at(&label));
        }

        let content;
        syn::parenthesized!(content in input);

        let refs = content
            .parse_terminated(parse_key_ref, syn::Token![,])?
            .into_iter()
            .collect();

        if !input.is_empty() {
            return Err(Diagnostic::InvalidArgumentShape {
                expected: "nothing after the `using(..)` list",
            }
            .error_at(input.parse::<TokenStream>()?));
        }

        Ok(Self { refs })
    }
}

fn parse_key_ref(input: ParseStream<'_>) -> syn::Result<syn::Ident> {
    if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        let value = lit.value();

        let Some(name) = value.strip_prefix('$') else {
            return Err(Diagnostic::InvalidArgumentShape {
                expected: "a `$`-prefixed field path string",
            }
            .error_at(&lit));
        };

        return syn::parse_str::<syn::Ident>(name)
            .map(|ident| syn::Ident::new(&ident.to_string(), lit.span()))
            .map_err(|_| {
                Diagnostic::InvalidArgumentShape {
                    expected: "a `$`-prefixed field path string",
                }
                .error_at(&lit)
            });
    }

    let path: syn::Path = input.parse().map_err(|err| {
        syn::Error::new(
            err.span(),
            Diagnostic::InvalidArgumentShape {
                expected: "a field reference or `$`-prefixed string",
            }
            .to_string(),
        )
    })?;

    match path.get_ident() {
        Some(ident) => Ok(ident.clone()),
        None => Err(Diagnostic::InvalidArgumentShape {
            expected: "a top-level field reference",
        }
        .error_at(&path)),
    }
}
