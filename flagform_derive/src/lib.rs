extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `flagform::prelude::FlagformParser` on a struct with named fields.
///
/// Each field becomes one option; its type decides the kind.
/// * `T` is a required option, `Option<T>` an optional one.
/// * `bool` (or `Option<bool>`) is a flag; anything else takes a value.
///
/// Field attributes: `#[flagform("-x", "--name", "description", default = ..)]`.
/// * `"-x"`/`"--name"` fix the short/long name, while `"-"`/`"--"` disable that name.
/// * Any other literal is the description.
/// * `default = ..` is only accepted on an `Option<T>` field.
///
/// Struct attributes: `#[flagform(program = "..", comment = "..")]`.
///
/// Name collisions are reported at compile time.
#[proc_macro_derive(FlagformParser, attributes(flagform))]
pub fn flagform_parser(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(ast) {
        Ok(derive_parser) => TokenStream2::from(derive_parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
