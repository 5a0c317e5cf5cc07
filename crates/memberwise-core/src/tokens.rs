use crate::{
    error::Error,
    node::{SynthesizedAssignment, SynthesizedInitializer},
};
use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};

impl<T: ToTokens> SynthesizedInitializer<T> {
    /// Render the constructor as an associated fn named `constructor`.
    ///
    /// Always `pub`. Commas between parameters are placed from each
    /// parameter's own flag.
    pub fn to_tokens_named(&self, constructor: &Ident) -> Result<TokenStream, Error> {
        let mut params = TokenStream::new();
        for param in self.parameters() {
            let name = parse_ident(&param.name)?;
            let ty = &param.ty;

            params.extend(quote!(#name: #ty));
            if param.trailing_comma {
                params.extend(quote!(,));
            }
        }

        let assigns = self
            .body()
            .iter()
            .map(assignment_tokens)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! {
            pub fn #constructor(#params) -> Self {
                Self { #(#assigns),* }
            }
        })
    }
}

fn assignment_tokens(assign: &SynthesizedAssignment) -> Result<TokenStream, Error> {
    let target = parse_ident(&assign.target)?;
    let source = parse_ident(&assign.source)?;

    Ok(quote!(#target: #source))
}

/// Parse `name` as a Rust identifier. Raw identifiers are accepted, keywords
/// are not.
pub fn parse_ident(name: &str) -> Result<Ident, Error> {
    syn::parse_str::<Ident>(name).map_err(|_| Error::invalid_identifier(name))
}

///
/// TESTS
///
