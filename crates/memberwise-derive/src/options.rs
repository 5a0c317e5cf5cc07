use darling::FromDeriveInput;
use memberwise_core::render::DEFAULT_CONSTRUCTOR;
use proc_macro2::{Ident, Span};

///
/// Options
///
/// Container attributes: `#[memberwise(constructor = "name")]`.
///

#[derive(Debug, Default, FromDeriveInput)]
#[darling(attributes(memberwise), default)]
pub struct Options {
    constructor: Option<Ident>,
}

impl Options {
    pub fn constructor(&self) -> Ident {
        self.constructor
            .clone()
            .unwrap_or_else(|| Ident::new(DEFAULT_CONSTRUCTOR, Span::call_site()))
    }
}

///
/// TESTS
///
