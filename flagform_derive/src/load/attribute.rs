use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::HashMap;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut literals = Vec::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(literal),
                    ..
                }) => {
                    literals.push(literal.value());
                }
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                _ => {
                    let expression_string = expression.to_token_stream();
                    return Err(syn::Error::new_spanned(
                        expression,
                        format!("Invalid - unparseable attribute `{expression_string}`; expecting a string literal or `key = value`."),
                    ));
                }
            };
        }

        Ok(Self { literals, pairs })
    }
}
