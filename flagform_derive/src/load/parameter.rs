use crate::load::{flagform_attributes, single_pair};
use crate::model::{DeriveParameter, DeriveValue};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new(
                    value.span(),
                    "Invalid - fields must be named.",
                ))
            }
        };
        let attributes = flagform_attributes(&value.attrs)?;

        if let Some(key) = attributes.pairs.keys().find(|key| key.as_str() != "default") {
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - unknown field attribute `{key} = ..`."),
            ));
        }

        let default = single_pair(&attributes, "default", field_name.span())?;
        let (optional, inner_type) = split_option(&value.ty);

        if default.is_some() && !optional {
            return Err(syn::Error::new(
                field_name.span(),
                format!(
                    "Invalid - field `{}` cannot declare a default, since it is required (declare it as `Option<..>`).",
                    field_name.unraw()
                ),
            ));
        }

        Ok(DeriveParameter {
            identifier: field_name.unraw().to_string(),
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            text: is_ident(inner_type, "String"),
            inner_type: DeriveValue {
                tokens: inner_type.to_token_stream(),
            },
            tokens: attributes.literals,
            default,
        })
    }
}

/// Split `Option<T>` into `(true, T)`; any other type `T` into `(false, T)`.
fn split_option(ty: &syn::Type) -> (bool, &syn::Type) {
    if let syn::Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            if segment.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(arguments) = &segment.arguments {
                    if let Some(syn::GenericArgument::Type(inner)) = arguments.args.first() {
                        return (true, inner);
                    }
                }
            }
        }
    }

    (false, ty)
}

fn is_ident(ty: &syn::Type, name: &str) -> bool {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == name),
        _ => false,
    }
}
