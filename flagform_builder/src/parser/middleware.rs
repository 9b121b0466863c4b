use std::borrow::Cow;
use std::env;

use crate::api::Schema;
use crate::parser::{ConsoleInterface, ParseError, ParsedRecord, UserInterface};

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build), or [`GeneralParser::from_schema`].
pub struct GeneralParser<'s> {
    program: String,
    comment: String,
    schema: Cow<'s, Schema>,
    user_interface: Box<dyn UserInterface>,
}

impl GeneralParser<'static> {
    pub(crate) fn owned(
        program: impl Into<String>,
        comment: impl Into<String>,
        schema: Schema,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            comment: comment.into(),
            schema: Cow::Owned(schema),
            user_interface,
        }
    }
}

impl<'s> GeneralParser<'s> {
    /// Wrap an existing (typically cached) schema, printing to the console.
    pub fn from_schema(
        program: impl Into<String>,
        comment: impl Into<String>,
        schema: &'s Schema,
    ) -> Self {
        Self {
            program: program.into(),
            comment: comment.into(),
            schema: Cow::Borrowed(schema),
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Redirect the output of this parser to the `user_interface`.
    #[cfg(any(test, feature = "unit_test"))]
    pub fn with_interface(self, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            user_interface,
            ..self
        }
    }

    /// The schema this parser parses against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The help message.
    pub fn help(&self) -> String {
        self.schema.help(&self.program, &self.comment)
    }

    /// Print the help message.
    pub fn print_help(&self) {
        self.user_interface
            .print(self.help().trim_end_matches('\n').to_string());
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the tokens do not parse (ex: an unknown option, an unconvertible value, a missing required option),
    /// prints the error followed by the help message, and returns with `Err(1)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParsedRecord, i32> {
        match self.schema.parse(tokens) {
            Ok(record) => Ok(record),
            Err(error) => {
                self.user_interface.print_error(error);
                self.print_help();
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the tokens do not parse, prints the error followed by the help message, and exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&self) -> ParsedRecord {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(record) => record,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

/// Behaviour of a struct derived via `#[derive(FlagformParser)]`.
///
/// The derive implements [`FlagformParser::schema`] and [`FlagformParser::from_record`]
/// (along with [`FlagformParser::program`]/[`FlagformParser::comment`]); everything else is provided.
// Needs to be in scope to call the provided methods: `use flagform::prelude::*` or `use flagform::FlagformParser`.
pub trait FlagformParser: Sized {
    /// The schema of the struct, built at most once.
    fn schema() -> &'static Schema;

    /// Assemble the struct from a record parsed by [`FlagformParser::schema`].
    fn from_record(record: ParsedRecord) -> Self;

    /// The program name shown in the help message.
    fn program() -> &'static str;

    /// The comment shown at the end of the help message.
    fn comment() -> &'static str {
        ""
    }

    /// Parse the `tokens` into the struct.
    /// Never prints nor exits.
    fn parse_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        Self::schema().parse(tokens).map(Self::from_record)
    }

    /// The help message.
    fn help() -> String {
        Self::schema().help(Self::program(), Self::comment())
    }

    /// A console parser for the struct.
    fn general_parser() -> GeneralParser<'static> {
        GeneralParser::from_schema(Self::program(), Self::comment(), Self::schema())
    }

    /// Parse the Cli [`env::args`] into the struct.
    /// See [`GeneralParser::parse`].
    fn flagform_parse() -> Self {
        Self::from_record(Self::general_parser().parse())
    }
}
