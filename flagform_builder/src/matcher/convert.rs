use crate::model::{Kind, Value, ValueKind};

/// Convert a raw `payload` into a value of the `kind`, or `None` if it does not convert.
///
/// * `bool` accepts precisely `true` or `false`.
/// * Numbers must parse from the whole payload (no partial parse, no surrounding whitespace), and fit the declared width.
/// * Text is taken verbatim.
/// * Optionals convert by their inner kind, and wrap the result.
pub(crate) fn convert(kind: Kind, payload: &str) -> Option<Value> {
    let value = convert_primitive(kind.value_kind(), payload)?;

    match kind {
        Kind::Required(_) => Some(value),
        Kind::Optional(_) => Some(Value::some(value)),
    }
}

fn convert_primitive(kind: ValueKind, payload: &str) -> Option<Value> {
    // `str::parse` admits a leading `+` for numbers.
    if kind != ValueKind::Text && payload.starts_with('+') {
        return None;
    }

    let value = match kind {
        ValueKind::Bool => match payload {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return None,
        },
        ValueKind::Signed { .. } => Value::Signed(payload.parse().ok()?),
        ValueKind::Unsigned { .. } => Value::Unsigned(payload.parse().ok()?),
        ValueKind::Float { bits: 32 } => Value::Float(f64::from(payload.parse::<f32>().ok()?)),
        ValueKind::Float { .. } => Value::Float(payload.parse().ok()?),
        ValueKind::Text => Value::Text(payload.to_string()),
    };

    if kind.admits(&value) {
        Some(value)
    } else {
        None
    }
}

/// Whether the `payload` looks like an option flag rather than a value for the `kind`.
///
/// Text rejects anything starting with `-`.
/// Numbers only reject `--`, since a single `-` may be a negative number (anything else fails conversion anyway).
pub(crate) fn looks_like_option(kind: Kind, payload: &str) -> bool {
    match kind.value_kind() {
        ValueKind::Text => payload.starts_with('-'),
        ValueKind::Signed { .. } | ValueKind::Unsigned { .. } | ValueKind::Float { .. } => {
            payload.starts_with("--")
        }
        ValueKind::Bool => false,
    }
}
