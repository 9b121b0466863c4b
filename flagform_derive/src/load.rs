use crate::model::IntermediateAttributes;

mod attribute;
mod parameter;
mod parser;

/// Read every `#[flagform(..)]` attribute into one set, in order of appearance.
pub(self) fn flagform_attributes(
    attributes: &[syn::Attribute],
) -> Result<IntermediateAttributes, syn::Error> {
    let mut merged = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident("flagform") {
            let IntermediateAttributes { literals, pairs } =
                IntermediateAttributes::try_from(attribute)?;
            merged.literals.extend(literals);

            for (key, values) in pairs {
                merged.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    Ok(merged)
}

/// The single value of the `key = ..` pair, if present.
pub(self) fn single_pair(
    attributes: &IntermediateAttributes,
    key: &str,
    span: proc_macro2::Span,
) -> Result<Option<crate::model::DeriveValue>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.clone())),
        Some(_) => Err(syn::Error::new(
            span,
            format!("Invalid - `{key} = ..` may only be specified once."),
        )),
    }
}
