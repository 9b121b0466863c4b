//! Builder module for `flagform`.
//! See [documentation root](https://docs.rs/flagform/latest/flagform/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    ConfigError, FlagformParser, GeneralParser, ParseError, ParsedRecord, RecordValues,
    UserInterface,
};

#[cfg(feature = "unit_test")]
pub use parser::BufferInterface;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
