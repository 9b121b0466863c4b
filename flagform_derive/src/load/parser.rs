use crate::load::{flagform_attributes, single_pair};
use crate::model::{DeriveParameter, DeriveParser, DeriveValue};
use flagform_builder::{validate_identities, Identity, NameOverrides};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = flagform_attributes(&value.attrs)?;

        if let Some(literal) = attributes.literals.first() {
            return Err(syn::Error::new(
                value.ident.span(),
                format!("Invalid - unexpected struct attribute \"{literal}\"; expecting `program = ..` or `comment = ..`."),
            ));
        }

        if let Some(key) = attributes
            .pairs
            .keys()
            .find(|key| !matches!(key.as_str(), "program" | "comment"))
        {
            return Err(syn::Error::new(
                value.ident.span(),
                format!("Invalid - unknown struct attribute `{key} = ..`."),
            ));
        }

        let program = single_pair(&attributes, "program", value.ident.span())?.unwrap_or_else(|| {
            DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            }
        });
        let comment = single_pair(&attributes, "comment", value.ident.span())?.unwrap_or_else(|| {
            DeriveValue {
                tokens: quote! { "" },
            }
        });

        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - FlagformParser may only be derived for a struct with named fields.",
                ));
            }
        };

        validate_names(&value.ident, &parameters)?;

        Ok(DeriveParser {
            struct_name: value.ident,
            program,
            comment,
            parameters,
        })
    }
}

/// Resolve the option names at compile time, so a misconfigured struct never builds.
fn validate_names(
    struct_name: &syn::Ident,
    parameters: &[DeriveParameter],
) -> Result<(), syn::Error> {
    let identities = parameters
        .iter()
        .map(|parameter| {
            let overrides = NameOverrides::from_tokens(parameter.tokens.iter().cloned());
            Identity::resolve(&parameter.identifier, &overrides)
                .map_err(|error| syn::Error::new(parameter.field_name.span(), error.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_identities(&identities)
        .map_err(|error| syn::Error::new(struct_name.span(), error.to_string()))
}
