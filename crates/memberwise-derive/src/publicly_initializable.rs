use crate::{lower::lower, options::Options};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error};

pub fn derive_publicly_initializable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let options = match Options::from_derive_input(&input) {
        Ok(options) => options,
        Err(err) => return err.write_errors(),
    };

    // Non-records expand to nothing.
    let decl = lower(&input);
    let Some(init) = memberwise_core::expand(&decl) else {
        return TokenStream::new();
    };

    let constructor = options.constructor();
    let ctor = match init.to_tokens_named(&constructor) {
        Ok(tokens) => tokens,
        Err(err) => return Error::new_spanned(&input.ident, err.to_string()).to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let doc = format!("Construct a `{ident}` from every stored field, in declaration order.");

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc = #doc]
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            #ctor
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> String {
        derive_publicly_initializable(input).to_string()
    }

    #[test]
    fn expands_named_struct() {
        let out = expand(quote! {
            pub struct Profile {
                pub id: Uuid,
                pub name: Option<String>,
                pub age: u32,
            }
        });
        let doc = "Construct a `Profile` from every stored field, in declaration order.";
        let expected = quote! {
            impl Profile {
                #[doc = #doc]
                #[must_use]
                #[allow(clippy::too_many_arguments)]
                pub fn new(id: Uuid, name: Option<String>, age: u32) -> Self {
                    Self { id: id, name: name, age: age }
                }
            }
        };

        assert_eq!(out, expected.to_string());
    }

    #[test]
    fn expands_unit_struct_to_parameterless_constructor() {
        let out = expand(quote!(
            struct Marker;
        ));

        assert!(out.contains(&quote!(pub fn new() -> Self { Self {} }).to_string()));
    }

    #[test]
    fn threads_generics_and_where_clause() {
        let out = expand(quote! {
            struct Wrapper<'a, T: Clone, const N: usize> where T: Default {
                items: [&'a T; N],
            }
        });

        assert!(out.starts_with(
            &quote!(impl<'a, T: Clone, const N: usize> Wrapper<'a, T, N> where T: Default)
                .to_string()
        ));
        assert!(out.contains(&quote!(pub fn new(items: [&'a T; N]) -> Self).to_string()));
    }

    #[test]
    fn honours_constructor_option() {
        let out = expand(quote! {
            #[memberwise(constructor = "from_parts")]
            struct Pair {
                a: i32,
                b: String,
            }
        });

        assert!(out.contains(&quote!(pub fn from_parts(a: i32, b: String) -> Self).to_string()));
    }

    #[test]
    fn non_records_expand_to_nothing() {
        for input in [
            quote!(struct Meters(f64);),
            quote!(enum Shape { Circle, Square }),
            quote!(union Bits { a: u32, b: f32 }),
        ] {
            assert!(expand(input).is_empty());
        }
    }

    #[test]
    fn invalid_options_become_compile_errors() {
        let out = expand(quote! {
            #[memberwise(constructor = 7)]
            struct Bad {
                a: u8,
            }
        });

        assert!(out.contains("compile_error"));
    }

    #[test]
    fn unparsable_input_becomes_compile_error() {
        let out = expand(quote!(fn not_a_type() {}));

        assert!(out.contains("compile_error"));
    }
}
