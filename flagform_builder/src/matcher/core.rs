use crate::api::{Field, Identity};
use crate::matcher::{convert, looks_like_option};
use crate::model::{Kind, Value};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The outcome of matching a field against the tokens.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Match {
    /// Offset of the token which named the option.
    pub flag: usize,
    /// Offset of the following token, when it was taken as the value.
    pub consumed: Option<usize>,
    pub value: Value,
}

/// Find the first token naming the field, and convert its value.
///
/// A token names the field when it equals the short/long name, or starts with either followed by `=`.
/// Only the first such token is considered; any later occurrences are left alone.
///
/// Flags (`bool` and `optional<bool>`) never take the following token: a bare flag is `true`.
/// An explicit value may only be given in the `--flag=value` form.
/// Every other kind takes its value from after the `=`, otherwise from the following token.
/// Only a following token is refused when it looks like another option; the `=` form is taken as is.
///
/// Returns `Ok(None)` when no token names the field.
pub(crate) fn match_and_convert(
    field: &Field,
    identity: &Identity,
    tokens: &[&str],
) -> Result<Option<Match>, ParseError> {
    let found = tokens
        .iter()
        .enumerate()
        .find_map(|(offset, token)| identity.matches(token).map(|m| (offset, m)));
    let (flag, (name, inline)) = match found {
        Some(found) => found,
        None => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No match for '{}'.", field.identifier());
            }

            return Ok(None);
        }
    };
    let kind = field.kind();

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Matched '{}' at offset {flag} by '{name}' (inline={inline:?}).",
            field.identifier()
        );
    }

    let (payload, consumed) = match inline {
        Some(payload) => (payload, None),
        None if kind.is_flag() => {
            return Ok(Some(Match {
                flag,
                consumed: None,
                value: match kind {
                    Kind::Required(_) => Value::Bool(true),
                    Kind::Optional(_) => Value::some(Value::Bool(true)),
                },
            }));
        }
        None => match tokens.get(flag + 1) {
            Some(next) if looks_like_option(kind, next) => {
                return Err(ParseError::WrongOptionType {
                    option: name.to_string(),
                    expected: kind.type_name(),
                    found: next.to_string(),
                });
            }
            Some(next) => (*next, Some(flag + 1)),
            None => {
                return Err(ParseError::WrongOptionType {
                    option: name.to_string(),
                    expected: kind.type_name(),
                    found: String::default(),
                });
            }
        },
    };

    match convert(kind, payload) {
        Some(value) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Converted '{payload}' to {value:?}.");
            }

            Ok(Some(Match {
                flag,
                consumed,
                value,
            }))
        }
        None => Err(ParseError::WrongOptionType {
            option: name.to_string(),
            expected: kind.type_name(),
            found: payload.to_string(),
        }),
    }
}
