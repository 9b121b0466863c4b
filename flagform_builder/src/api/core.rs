use crate::api::{Field, Identity};
use crate::model::Kind;
use crate::parser::{
    describe, help, resolve, to_tokens, ConfigError, ConsoleInterface, GeneralParser, ParseError,
    ParsedRecord, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The validated description of every option a program accepts.
///
/// A `Schema` can only be built through [`Schema::new`], so its names are always resolved and free of repeats.
/// It is immutable thereafter, and may be shared freely across threads.
///
/// ### Example
/// ```
/// # use flagform_builder as flagform;
/// use flagform::{Field, Kind, Schema, Value, ValueKind};
///
/// let schema = Schema::new(vec![
///     Field::new("verbose", Kind::Required(ValueKind::Bool)),
///     Field::new("count", Kind::Optional(ValueKind::SIGNED)).default(Value::Signed(10)),
/// ])
/// .unwrap();
///
/// let record = schema.parse(&["-v"]).unwrap();
/// assert_eq!(record.get("verbose"), Some(&Value::Bool(true)));
/// assert_eq!(record.get("count"), Some(&Value::some(Value::Signed(10))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
    identities: Vec<Identity>,
}

impl Schema {
    /// Validate the `fields` (in declaration order) into a schema.
    ///
    /// Fails when:
    /// * a field's names cannot be resolved (see [`Identity::resolve`]),
    /// * a required field declares a default, or a default does not match its field's kind,
    /// * two fields share an identifier,
    /// * any name is shared between options, or between the short and long name of one option.
    pub fn new(fields: Vec<Field>) -> Result<Self, ConfigError> {
        validate_identifiers(&fields)?;
        let mut identities = Vec::with_capacity(fields.len());

        for field in &fields {
            validate_default(field)?;
            identities.push(Identity::resolve(field.identifier(), field.overrides())?);
        }

        validate_identities(&identities)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Schema resolved identities {identities:?}.");
        }

        Ok(Self { fields, identities })
    }

    /// The fields, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The resolved identities, parallel to [`Schema::fields`].
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// The fields paired with their identities.
    pub fn entries(&self) -> impl Iterator<Item = (&Field, &Identity)> {
        self.fields.iter().zip(self.identities.iter())
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse the `tokens` into a record holding a value for every field.
    ///
    /// The first token is treated like any other: pass the Cli tokens *after* the program name.
    ///
    /// 1. Each field, in declaration order, takes its value from the first token naming it.
    /// 2. Any remaining token must be a later (ignored) occurrence of an option; otherwise it is an unknown option or an unexpected argument.
    /// 3. Unspecified optionals take their default, or `None`; unspecified required options are reported together.
    pub fn parse(&self, tokens: &[&str]) -> Result<ParsedRecord, ParseError> {
        resolve(self, tokens)
    }

    /// The help message for the `program`, followed by an optional `comment`.
    ///
    /// ### Example
    /// ```
    /// # use flagform_builder as flagform;
    /// use flagform::{Field, Kind, Schema, ValueKind};
    ///
    /// let schema = Schema::new(vec![
    ///     Field::new("verbose", Kind::Required(ValueKind::Bool)).token("Log more."),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     schema.help("program", ""),
    ///     format!("Usage: program [flags]\n\nFLAGS:\n    {:<50}Log more.\n", "-v, --verbose"),
    /// );
    /// ```
    pub fn help(&self, program: &str, comment: &str) -> String {
        help(self, program, comment)
    }

    /// One line per field of the `record`, in declaration order (ex: `-v, --verbose: true`).
    pub fn describe(&self, record: &ParsedRecord) -> Vec<String> {
        describe(self, record)
    }

    /// The tokens which parse back into the `record`.
    ///
    /// Every option is written under its long name (the short name when the long name is disabled).
    /// Absent optionals are left out.
    pub fn to_tokens(&self, record: &ParsedRecord) -> Vec<String> {
        to_tokens(self, record)
    }
}

fn validate_default(field: &Field) -> Result<(), ConfigError> {
    match (field.kind(), field.default_value()) {
        (_, None) => Ok(()),
        (Kind::Required(_), Some(_)) => Err(ConfigError::DefaultOnRequired {
            field: field.identifier().to_string(),
        }),
        (kind, Some(default)) => {
            if kind.value_kind().admits(default) {
                Ok(())
            } else {
                Err(ConfigError::DefaultMismatch {
                    field: field.identifier().to_string(),
                    expected: kind.type_name(),
                })
            }
        }
    }
}

fn validate_identifiers(fields: &[Field]) -> Result<(), ConfigError> {
    let mut identifiers: Vec<&str> = fields.iter().map(Field::identifier).collect();
    identifiers.sort_unstable();

    match identifiers.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => Err(ConfigError::RepeatedIdentifier {
            field: pair[0].to_string(),
        }),
        None => Ok(()),
    }
}

/// Check that no name is shared amongst the `identities`.
///
/// Every enabled short and long name is checked against all the others, regardless of whether they are short or long.
/// When several names repeat, the lexicographically smallest is reported.
pub fn validate_identities(identities: &[Identity]) -> Result<(), ConfigError> {
    let mut names: Vec<&str> = identities
        .iter()
        .flat_map(|identity| identity.names())
        .collect();
    names.sort_unstable();

    match names.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => Err(ConfigError::RepeatedOption {
            name: pair[0].to_string(),
        }),
        None => Ok(()),
    }
}

/// The base command line parser.
///
/// ### Example
/// ```
/// # use flagform_builder as flagform;
/// use flagform::{CommandLineParser, Field, Kind, ValueKind};
///
/// let parser = CommandLineParser::new("program")
///     .about("My program that does awesome stuff.")
///     .add(Field::new("verbose", Kind::Required(ValueKind::Bool)))
///     .add(Field::new("name", Kind::Required(ValueKind::Text)).token("Who to greet."))
///     .build();
///
/// let record = parser.parse_tokens(&["--name", "abc", "-v"]).unwrap();
/// assert_eq!(record.get_as::<String>("name"), Some("abc".to_string()));
/// ```
pub struct CommandLineParser {
    program: String,
    about: Option<String>,
    fields: Vec<Field>,
}

impl CommandLineParser {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use flagform_builder as flagform;
    /// use flagform::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(&[]).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            fields: Vec::default(),
        }
    }

    /// Document the comment shown at the end of the help message.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option to the command line parser.
    ///
    /// The order of the options determines the order of the parsed record, and of the help message.
    pub fn add(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'static>, ConfigError> {
        let CommandLineParser {
            program,
            about,
            fields,
        } = self;
        let schema = Schema::new(fields)?;
        Ok(GeneralParser::owned(
            program,
            about.unwrap_or_default(),
            schema,
            user_interface,
        ))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build the command line parser, directing its output to the `user_interface`.
    ///
    /// ### Example
    /// ```
    /// # use flagform_builder as flagform;
    /// use flagform::{BufferInterface, CommandLineParser, Field, Kind, ValueKind};
    ///
    /// let buffer = BufferInterface::default();
    /// let parser = CommandLineParser::new("program")
    ///     .add(Field::new("count", Kind::Required(ValueKind::SIGNED)))
    ///     .build_for_test(Box::new(buffer.clone()))
    ///     .unwrap();
    ///
    /// assert_eq!(parser.parse_tokens(&["--count", "x"]).unwrap_err(), 1);
    /// assert!(buffer.errors()[0].starts_with("Parse error:"));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_for_test(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'static>, ConfigError> {
        self.build_with_interface(user_interface)
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'static>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'static> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
