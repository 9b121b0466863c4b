use proc_macro2::TokenStream as TokenStream2;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The contents of `#[flagform(..)]` attributes, before interpretation.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    /// The string literals, in order (ex: `"-x"`, `"--name"`, `"description"`).
    pub literals: Vec<String>,
    /// The `key = value` assignments.
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    /// The identifier the names are resolved from (raw identifiers are unraw'd).
    pub identifier: String,
    pub field_type: DeriveValue,
    /// `T` for both `T` and `Option<T>`.
    pub inner_type: DeriveValue,
    pub text: bool,
    pub tokens: Vec<String>,
    pub default: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program: DeriveValue,
    pub comment: DeriveValue,
    pub parameters: Vec<DeriveParameter>,
}
