extern crate proc_macro;

use proc_macro::TokenStream;

/// Synthesizes a composite identity for the annotated entity struct.
///
/// With a `using(..)` list the entity keeps its flat shape and gains a
/// derived keyed shape plus conversions; without arguments, every
/// `#[key]`-marked field is folded into a single composite identifier field
/// on the entity itself.
#[proc_macro_attribute]
pub fn composite_id(args: TokenStream, input: TokenStream) -> TokenStream {
    match composite_id_codegen::generate(args.into(), input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
