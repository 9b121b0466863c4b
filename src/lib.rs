//! `flagform` is a schema-driven command line option parser for Rust.
//!
//! A program describes its options once, as a struct (or a list of [`Field`]s).
//! From that description `flagform` derives both the help message and a parser which turns the Cli tokens into a fully populated, type-checked record.
//!
//! `flagform` prioritizes the following design concerns:
//! * *Type safe option parsing*:
//! Each option declares a primitive kind (`bool`, integers of a given width, floats, `String`).
//! A token that does not convert to the declared kind is rejected, rather than handed to the program.
//! * *Options only*:
//! Every parameter is specified by name (`--name value`, `--name=value`, `-n value`).
//! There are no positional arguments nor sub-commands; a stray word on the Cli is an error.
//! * *Names by convention*:
//! Option names are deduced from the field identifier (`dry_run` is `-d, --dry-run`), and may be overridden or disabled per side.
//! Name collisions are configuration errors, detected at compile time by the derive Api.
//! * *Detailed yet basic UX*:
//! The help and error output is plain text with a fixed layout.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or similarly via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_builder.rs")]
//! ```
//!
//! ```console
//! $ demo_derived --count 2 -v
//! Parameters { verbose: true, count: 2, greeting: Some("hello"), repetition_rate: Some(1.5), loud: None }
//!
//! $ demo_derived -v
//! Parse error: Required arguments are missing: --count
//! Usage: demo_derived [flags] [options]
//! ..
//!
//! $ demo_derived --count two
//! Parse error: Expected argument of type int for '--count', got 'two'.
//! ..
//! ```
//!
//! # Builder Api
//! Configure `flagform` by starting with a [`CommandLineParser`] and `add`ing [`Field`]s.
//! Each field is made of:
//! * The identifier (ex: `dry_run`), which names the value in the [`ParsedRecord`] and from which the option names are deduced.
//! * The [`Kind`]: `Kind::Required(..)` or `Kind::Optional(..)` of a [`ValueKind`].
//! * Name override tokens, via [`Field::token`].
//! * A default value, via [`Field::default`] (optional fields only).
//!
//! ### Kinds
//! A `bool` kind is a *flag*: the bare option name means `true` (ex: `--verbose`), and it never takes the following token.
//! An explicit value is only accepted in the `=` form (ex: `--verbose=false`).
//! Every other kind takes a value, either as the following token or in the `=` form.
//!
//! A required option must appear on the Cli, except a required flag, which is `false` when absent.
//! An optional option that does not appear takes its default, or is absent (`None`).
//!
//! ### Name override tokens
//! * `"--name"` fixes the long name, while `"--"` disables it.
//! * `"-n"` fixes the short name, while `"-"` disables it.
//! * Any other token is the description shown in the help message.
//!
//! Only the first token of each class applies.
//!
//! ### Parsing
//! The first occurrence of an option is the one parsed; later occurrences are ignored.
//! A value given as the following token may not start with `-` for a text option, nor with `--` for a numeric option (negative numbers are fine).
//! Use the `=` form for such values (ex: `--name=-x`).
//!
//! # Help
//! The help message is printed after any parse error:
//! ```console
//! $ demo_derived --count
//! Parse error: Expected argument of type int for '--count', got ''.
//! Usage: demo_derived [flags] [options]
//!
//! FLAGS:
//!     -v, --verbose                                     Log every step.
//!     -l, --loud                                        Shout the greeting.
//!
//! OPTIONS:
//!     -n, --count:              int                     How many times to repeat.
//!     -g:                       optional<string>        The greeting to use. (default: hello)
//!     -r, --rate:               optional<float>         Repetitions per second. (default: 1.5)
//!
//! Options may appear in any order.
//! ```
//!
//! Notice, there is no built-in `-h, --help` option.
//! A program which wants one declares it like any other flag, and prints [`FlagformParser::help`](prelude::FlagformParser::help).
//!
//! # Features
//! * `tracing_debug`: emit `tracing::debug!` events while parsing.
//! * `unit_test`: direct the parser output to a [`UserInterface`] of your choice (ex: `BufferInterface`).
pub mod derive;
pub use flagform_builder::*;
