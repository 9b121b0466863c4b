use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program,
            comment,
            parameters,
        } = value;
        let program = program.tokens;
        let comment = comment.tokens;
        let values = syn::Ident::new("values", proc_macro2::Span::call_site());
        let fields = parameters
            .iter()
            .map(|parameter| parameter.generate_field())
            .collect::<Vec<_>>();

        let from_record = if parameters.is_empty() {
            quote! {
                let _ = record;
                Self {}
            }
        } else {
            let assignments = parameters
                .iter()
                .map(|parameter| parameter.generate_assignment(&values))
                .collect::<Vec<_>>();

            quote! {
                let mut #values = record.into_values();
                Self { #( #assignments ),* }
            }
        };

        quote! {
            impl ::flagform::prelude::FlagformParser for #struct_name {
                fn schema() -> &'static ::flagform::Schema {
                    static SCHEMA: ::std::sync::OnceLock<::flagform::Schema> = ::std::sync::OnceLock::new();
                    SCHEMA.get_or_init(|| match ::flagform::Schema::new(vec![ #( #fields ),* ]) {
                        Ok(schema) => schema,
                        Err(error) => panic!("internal error - derived schema is invalid: {}", error),
                    })
                }

                fn from_record(record: ::flagform::ParsedRecord) -> Self {
                    #from_record
                }

                fn program() -> &'static str {
                    #program
                }

                fn comment() -> &'static str {
                    #comment
                }
            }
        }
    }
}
