mod core;
mod field;
mod name;

pub use self::core::*;
pub use self::field::*;
pub use self::name::*;
