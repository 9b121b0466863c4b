//! Derive Api for `flagform` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(FlagformParser)]`.
//! This implements the [`FlagformParser`](crate::prelude::FlagformParser) trait for `S`, including `S::flagform_parse() -> S` which parses the Cli options fitting `S`.
//! Bring the trait into scope via `use flagform::prelude::*`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ### Parser Configuration
//! * `#[flagform(program = "..")]` sets the program name shown in the help message (default: the crate name).
//! * `#[flagform(comment = "..")]` sets the comment shown at the end of the help message (default: none).
//!
//! ### Field Configuration
//! Each named field is one option, whose kind follows from the field type:
//! ```console
//! Type                  | Kind
//! ------------------------------------------------
//! bool                  | Kind::Required(ValueKind::Bool)          (flag)
//! Option<bool>          | Kind::Optional(ValueKind::Bool)          (flag)
//! i8 .. i64, isize      | Kind::Required(ValueKind::Signed { .. })
//! u8 .. u64, usize      | Kind::Required(ValueKind::Unsigned { .. })
//! f32, f64              | Kind::Required(ValueKind::Float { .. })
//! String                | Kind::Required(ValueKind::Text)
//! Option<T>             | Kind::Optional(..) of the above
//! ```
//!
//! The field attribute `#[flagform(..)]` takes the name override tokens, and a default:
//! * `"-x"`/`"--name"` to fix the short/long name, or `"-"`/`"--"` to disable it.
//! * Any other string literal is the description.
//! * `default = V` for the value of an absent `Option<T>` field, where `V` is an expression of type `T`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_help.rs")]
//! ```
//!
//! ```console
//! $ demo_help
//! Usage: demo_help [flags] [options]
//!
//! FLAGS:
//!     --only-long                                       Only the long name.
//!
//! OPTIONS:
//!     -o:                       optional<unsigned int>  Only the short name.
//!     -b, --both:               optional<int>           Both names fixed. (default: 100)
//!     -n, --name:               string                  The name to greet.
//!
//! Prints its own help message.
//! ```
//!
//! ### Compile Errors
//! Configurations which cannot produce a valid parser fail to compile, for example:
//! ```compile_fail
//! use flagform::{derive::*, prelude::*};
//!
//! #[derive(FlagformParser)]
//! struct Parameters {
//!     verbose: bool,
//!     // Both deduce the short name `-v`.
//!     version: bool,
//! }
//! ```
//!
//! ```compile_fail
//! use flagform::{derive::*, prelude::*};
//!
//! #[derive(FlagformParser)]
//! struct Parameters {
//!     // A required option cannot have a default.
//!     #[flagform(default = 1)]
//!     count: u32,
//! }
//! ```
pub use flagform_derive::*;
