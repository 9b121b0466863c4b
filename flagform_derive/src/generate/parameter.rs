use crate::model::{DeriveParameter, DeriveValue};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    /// The `::flagform::Field` expression describing this parameter.
    pub(crate) fn generate_field(&self) -> TokenStream2 {
        let DeriveParameter {
            identifier,
            field_type,
            inner_type,
            text,
            tokens,
            default,
            ..
        } = self;
        let field_type = &field_type.tokens;
        let inner_type = &inner_type.tokens;

        let default = match default {
            Some(DeriveValue { tokens: default }) => {
                // A string literal must be owned before it converts.
                let primitive = if *text {
                    quote! { ::std::string::String::from(#default) }
                } else {
                    quote! { #default }
                };
                quote! {
                    .default(<#inner_type as ::flagform::prelude::Primitive>::into_value(#primitive))
                }
            }
            None => TokenStream2::default(),
        };

        quote! {
            ::flagform::Field::new(#identifier, <#field_type as ::flagform::prelude::OptionType>::KIND)
                #( .token(#tokens) )*
                #default
        }
    }

    /// The `field: value` pair assembling this parameter from the record values.
    pub(crate) fn generate_assignment(&self, values: &syn::Ident) -> TokenStream2 {
        let field_name = &self.field_name;
        let field_type = &self.field_type.tokens;

        quote! {
            #field_name: #values.next_as::<#field_type>()
        }
    }
}
