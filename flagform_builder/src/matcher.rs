mod convert;
mod core;

pub(crate) use self::convert::*;
pub(crate) use self::core::*;
