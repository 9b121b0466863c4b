/// The primitive kinds an option value may take.
///
/// Numeric kinds carry the bit width of the declared type, so that conversion rejects out of range inputs
/// (ex: `300` for an `i8` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `true`/`false`.
    Bool,
    /// A signed integer of at most 64 bits.
    Signed {
        /// Width of the declared type.
        bits: u32,
    },
    /// An unsigned integer of at most 64 bits.
    Unsigned {
        /// Width of the declared type.
        bits: u32,
    },
    /// A 32 or 64 bit floating point number.
    Float {
        /// Width of the declared type.
        bits: u32,
    },
    /// Free text, taken verbatim.
    Text,
}

impl ValueKind {
    /// `i64`
    pub const SIGNED: ValueKind = ValueKind::Signed { bits: 64 };
    /// `u64`
    pub const UNSIGNED: ValueKind = ValueKind::Unsigned { bits: 64 };
    /// `f64`
    pub const FLOAT: ValueKind = ValueKind::Float { bits: 64 };

    /// The name of this kind, as displayed in help and error messages.
    ///
    /// Widths are not shown: every signed integer is an `int`, every unsigned integer is an `unsigned int`, etc.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Signed { .. } => "int",
            ValueKind::Unsigned { .. } => "unsigned int",
            ValueKind::Float { .. } => "float",
            ValueKind::Text => "string",
        }
    }

    /// Whether `value` is a (non-optional) value of this kind.
    pub(crate) fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueKind::Bool, Value::Bool(_)) => true,
            (ValueKind::Signed { bits }, Value::Signed(v)) => {
                *bits >= 64 || (-(1i64 << (bits - 1))..(1i64 << (bits - 1))).contains(v)
            }
            (ValueKind::Unsigned { bits }, Value::Unsigned(v)) => *bits >= 64 || *v < (1u64 << bits),
            (ValueKind::Float { .. }, Value::Float(_)) => true,
            (ValueKind::Text, Value::Text(_)) => true,
            _ => false,
        }
    }
}

/// The declared kind of an option: either required, or optional of some [`ValueKind`].
///
/// Optionals do not nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The option must be provided on the Cli.
    Required(ValueKind),
    /// The option may be omitted, in which case it takes its default (if any) or `None`.
    Optional(ValueKind),
}

impl Kind {
    /// The underlying primitive kind.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Kind::Required(kind) | Kind::Optional(kind) => *kind,
        }
    }

    /// Whether this is an optional kind.
    pub fn is_optional(&self) -> bool {
        matches!(self, Kind::Optional(_))
    }

    /// Whether the option is a flag (a `bool` or an optional `bool`).
    pub fn is_flag(&self) -> bool {
        self.value_kind() == ValueKind::Bool
    }

    /// The name of this kind, as displayed in help and error messages (ex: `optional<int>`).
    pub fn type_name(&self) -> String {
        match self {
            Kind::Required(kind) => kind.type_name().to_string(),
            Kind::Optional(kind) => format!("optional<{}>", kind.type_name()),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A [`ValueKind::Bool`] value.
    Bool(bool),
    /// A [`ValueKind::Signed`] value, widened to 64 bits.
    Signed(i64),
    /// A [`ValueKind::Unsigned`] value, widened to 64 bits.
    Unsigned(u64),
    /// A [`ValueKind::Float`] value, widened to 64 bits.
    Float(f64),
    /// A [`ValueKind::Text`] value.
    Text(String),
    /// The value of a [`Kind::Optional`] option.
    Optional(Option<Box<Value>>),
}

impl Value {
    /// Wrap a primitive value as the value of an optional option.
    pub fn some(value: Value) -> Self {
        Value::Optional(Some(Box::new(value)))
    }

    /// Whether `self` is a legal value for an option of `kind`.
    pub fn is_kind(&self, kind: &Kind) -> bool {
        match (kind, self) {
            (Kind::Optional(_), Value::Optional(None)) => true,
            (Kind::Optional(inner), Value::Optional(Some(value))) => inner.admits(value),
            (Kind::Required(inner), value) => inner.admits(value),
            _ => false,
        }
    }

    /// Render this value as it would be written on the Cli, or `None` for an absent optional.
    ///
    /// Floats are rendered at the width of `kind` so that a widened `f32` prints as it was written.
    pub(crate) fn render(&self, kind: ValueKind) -> Option<String> {
        match self {
            Value::Bool(v) => Some(v.to_string()),
            Value::Signed(v) => Some(v.to_string()),
            Value::Unsigned(v) => Some(v.to_string()),
            Value::Float(v) => match kind {
                ValueKind::Float { bits: 32 } => Some((*v as f32).to_string()),
                _ => Some(v.to_string()),
            },
            Value::Text(v) => Some(v.clone()),
            Value::Optional(Some(v)) => v.render(kind),
            Value::Optional(None) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Signed(v) => write!(f, "{v}"),
            Value::Unsigned(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::Optional(Some(v)) => write!(f, "{v}"),
            Value::Optional(None) => write!(f, "none"),
        }
    }
}
