use std::fmt;

/// Accumulates independent field-level errors so a declaration with several
/// faults reports all of them in one pass.
#[derive(Debug)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self { errors: vec![] }
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
    }
}

/// Every way the transformation can reject an entity declaration. Rendered
/// into a spanned `syn::Error` at the offending tokens; there is no partial
/// output once any of these fire.
#[derive(Debug)]
pub(crate) enum Diagnostic {
    /// The annotated item is not a struct.
    NotAnEntity,

    /// The struct does not have named fields.
    NotAModel,

    /// A field carries more than one recognized attribute.
    AmbiguousFieldAttribute { field: String, attrs: Vec<String> },

    /// An explicit key set was requested but no `#[id]` field exists.
    MissingIdentifierField,

    /// Wrap mode was implied but an `#[id]` field exists.
    MissingIdentifierConflict,

    /// The macro arguments are not a single `using(..)` list of field
    /// references.
    InvalidArgumentShape { expected: &'static str },

    /// Requested key names with no matching field, sorted.
    UnknownKeyField { names: Vec<String> },

    /// Requested key names whose fields cannot participate in a composite
    /// key, sorted.
    IneligibleKeyField { names: Vec<String> },

    /// A recognized field attribute with an unrecognized argument shape.
    UnsupportedAttributeArgument { attr: String },
}

impl Diagnostic {
    pub(crate) fn error_at(self, tokens: impl quote::ToTokens) -> syn::Error {
        syn::Error::new_spanned(tokens, self.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotAnEntity => {
                write!(f, "#[composite_id] may only be applied to structs")
            }
            Diagnostic::NotAModel => {
                write!(f, "#[composite_id] requires a struct with named fields")
            }
            Diagnostic::AmbiguousFieldAttribute { field, attrs } => {
                write!(
                    f,
                    "field `{field}` has more than one recognized attribute: {}",
                    attrs.join(", ")
                )
            }
            Diagnostic::MissingIdentifierField => {
                write!(f, "#[composite_id(using(..))] requires an #[id] field")
            }
            Diagnostic::MissingIdentifierConflict => {
                write!(
                    f,
                    "#[composite_id] without arguments requires that no #[id] field is present"
                )
            }
            Diagnostic::InvalidArgumentShape { expected } => {
                write!(f, "invalid #[composite_id] arguments: expected {expected}")
            }
            Diagnostic::UnknownKeyField { names } => {
                write!(f, "unknown key field(s): {}", names.join(", "))
            }
            Diagnostic::IneligibleKeyField { names } => {
                write!(
                    f,
                    "field(s) cannot participate in a composite key: {} \
                     (expected an #[id] or to-one relation field)",
                    names.join(", ")
                )
            }
            Diagnostic::UnsupportedAttributeArgument { attr } => {
                write!(f, "unsupported argument for #[{attr}]")
            }
        }
    }
}
