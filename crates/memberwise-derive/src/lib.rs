use proc_macro::TokenStream;

mod lower;
mod options;
mod publicly_initializable;

/// Add a public memberwise constructor to a struct with named fields.
///
/// The constructor takes one parameter per field, in declaration order, with
/// the field's declared type, and is always `pub`. Unit structs get a
/// parameterless constructor. Tuple structs, enums and unions expand to
/// nothing.
///
/// The constructor is named `new` unless overridden with
/// `#[memberwise(constructor = "name")]`.
#[proc_macro_derive(PubliclyInitializable, attributes(memberwise))]
pub fn derive_publicly_initializable(input: TokenStream) -> TokenStream {
    publicly_initializable::derive_publicly_initializable(input.into()).into()
}
