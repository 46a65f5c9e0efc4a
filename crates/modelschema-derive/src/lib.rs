use proc_macro::TokenStream;

mod describe;

/// Derive `Describe` for a named-field struct.
///
/// Field annotations live in `#[schema(...)]`:
/// - `key = "name"` sets the output key; a field without one is invisible
///   to the generated document, and `key = "-"` omits it explicitly
/// - `required` marks the output key as required
/// - `min = "0"` attaches a minimum-value annotation, consulted for
///   integer fields at generation time
#[proc_macro_derive(Describe, attributes(schema))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input.into()).into()
}
