//! Traits which, typically, may be imported without concern: `use flagform::prelude::*`.
use crate::model::{Kind, Value, ValueKind};

pub use crate::parser::FlagformParser;

/// Behaviour for a Rust type that maps onto a single [`ValueKind`].
pub trait Primitive: Sized {
    /// The kind this type parses as.
    const KIND: ValueKind;

    /// Convert into the widened [`Value`] representation.
    fn into_value(self) -> Value;

    /// Convert back from a [`Value`], or `None` when the value is of a different kind (or out of range).
    fn from_value(value: Value) -> Option<Self>;
}

/// Behaviour for a Rust type that may be declared as an option field.
///
/// Implemented for every [`Primitive`] `T` (a required option) and for `Option<T>` (an optional option).
// Needs to be in scope for the code generated by `#[derive(FlagformParser)]`.
pub trait OptionType: Sized {
    /// The primitive underneath (`T` for both `T` and `Option<T>`).
    type Inner: Primitive;

    /// The declared kind.
    const KIND: Kind;

    /// Convert back from a parsed [`Value`].
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! primitive_signed {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                const KIND: ValueKind = ValueKind::Signed { bits: <$t>::BITS };

                fn into_value(self) -> Value {
                    Value::Signed(self as i64)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Signed(v) => <$t>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! primitive_unsigned {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                const KIND: ValueKind = ValueKind::Unsigned { bits: <$t>::BITS };

                fn into_value(self) -> Value {
                    Value::Unsigned(self as u64)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Unsigned(v) => <$t>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

primitive_signed!(i8, i16, i32, i64, isize);
primitive_unsigned!(u8, u16, u32, u64, usize);

impl Primitive for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for f32 {
    const KIND: ValueKind = ValueKind::Float { bits: 32 };

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(v as f32),
            _ => None,
        }
    }
}

impl Primitive for f64 {
    const KIND: ValueKind = ValueKind::Float { bits: 64 };

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for String {
    const KIND: ValueKind = ValueKind::Text;

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

// A blanket `impl<T: Primitive> OptionType for T` would overlap with the `Option<T>` impl.
macro_rules! option_type {
    ($($t:ty),*) => {
        $(
            impl OptionType for $t {
                type Inner = $t;
                const KIND: Kind = Kind::Required(<$t as Primitive>::KIND);

                fn from_value(value: Value) -> Option<Self> {
                    <$t as Primitive>::from_value(value)
                }
            }

            impl OptionType for Option<$t> {
                type Inner = $t;
                const KIND: Kind = Kind::Optional(<$t as Primitive>::KIND);

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Optional(Some(inner)) => <$t as Primitive>::from_value(*inner).map(Some),
                        Value::Optional(None) => Some(None),
                        _ => None,
                    }
                }
            }
        )*
    };
}

option_type!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String);
