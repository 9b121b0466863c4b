use thiserror::Error;

use crate::api::{Field, Identity, Schema};
use crate::matcher::{looks_like_option, match_and_convert, Match};
use crate::model::{Kind, Value, ValueKind};
use crate::prelude::OptionType;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the definition of a schema.
///
/// These are programming errors: they never depend on the tokens being parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options (or both names of one option) share a name.
    #[error("Config error: option name '{name}' is repeated.")]
    RepeatedOption {
        /// The repeated name (ex: `-v`).
        name: String,
    },
    /// A field disables both its short and long names.
    #[error("Config error: field '{field}' cannot disable both its short and long names.")]
    DisabledNames {
        /// The field identifier.
        field: String,
    },
    /// A field with an empty identifier.
    #[error("Config error: field identifier cannot be empty.")]
    EmptyIdentifier,
    /// Two fields share an identifier, so their values could not be told apart in the record.
    #[error("Config error: field identifier '{field}' is repeated.")]
    RepeatedIdentifier {
        /// The repeated identifier.
        field: String,
    },
    /// A required field declares a default.
    #[error("Config error: required field '{field}' cannot declare a default.")]
    DefaultOnRequired {
        /// The field identifier.
        field: String,
    },
    /// A default which does not match the kind of its field.
    #[error("Config error: default for field '{field}' must be of type {expected}.")]
    DefaultMismatch {
        /// The field identifier.
        field: String,
        /// The type name of the field (ex: `optional<int>`).
        expected: String,
    },
}

/// An error in the tokens being parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// One or more required options were not specified.
    #[error("Parse error: Required arguments are missing: {}", .missing.join(", "))]
    MissingRequiredOption {
        /// The missing options, in declaration order.
        missing: Vec<String>,
    },
    /// The value of an option does not convert to its declared type, looks like another option, or is missing.
    #[error("Parse error: Expected argument of type {expected} for '{option}', got '{found}'.")]
    WrongOptionType {
        /// The name by which the option was specified.
        option: String,
        /// The type name of the option (ex: `int`).
        expected: String,
        /// The offending token (empty when the option was the final token).
        found: String,
    },
    /// A token which looks like an option, but names none.
    #[error("Parse error: Unknown option '{token}'{}.", hint(.suggestion))]
    UnknownOption {
        /// The offending token.
        token: String,
        /// The names of the closest option, if any (ex: `-v, --verbose`).
        suggestion: Option<String>,
    },
    /// A token which is neither an option nor the value of an option.
    #[error("Parse error: Unexpected argument '{token}'.")]
    UnexpectedArgument {
        /// The offending token.
        token: String,
    },
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(names) => format!(" (maybe you meant {names}?)"),
        None => String::default(),
    }
}

/// The values of a successful parse, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    entries: Vec<(String, Value)>,
}

impl ParsedRecord {
    /// The value of the field `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, value)| value)
    }

    /// The value of the field `identifier`, as the Rust type `T`.
    ///
    /// ### Example
    /// ```
    /// # use flagform_builder as flagform;
    /// use flagform::{CommandLineParser, Field, Kind, ValueKind};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Field::new("count", Kind::Optional(ValueKind::SIGNED)))
    ///     .build_parser()
    ///     .unwrap();
    /// let record = parser.parse_tokens(&["--count", "3"]).unwrap();
    ///
    /// assert_eq!(record.get_as::<Option<i32>>("count"), Some(Some(3)));
    /// assert_eq!(record.get_as::<i32>("count"), None);
    /// ```
    pub fn get_as<T: OptionType>(&self, identifier: &str) -> Option<T> {
        self.get(identifier)
            .and_then(|value| T::from_value(value.clone()))
    }

    /// The `(identifier, value)` entries.
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// The number of entries (one per field).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the record into its values, to be taken in declaration order.
    pub fn into_values(self) -> RecordValues {
        RecordValues {
            inner: self.entries.into_iter(),
        }
    }
}

/// The values of a [`ParsedRecord`], taken in declaration order.
///
/// Used by the code generated by `#[derive(FlagformParser)]`.
pub struct RecordValues {
    inner: std::vec::IntoIter<(String, Value)>,
}

impl RecordValues {
    /// Take the next value, as the Rust type `T`.
    ///
    /// Panics when the record does not line up with `T`.
    /// A record parsed by a schema always lines up with the types the schema was declared from.
    pub fn next_as<T: OptionType>(&mut self) -> T {
        let (identifier, value) = self
            .inner
            .next()
            .expect("internal error - record must hold a value for every field");
        T::from_value(value).unwrap_or_else(|| {
            panic!("internal error - value of '{identifier}' must convert to its declared type")
        })
    }
}

/// One slot per field, filled as the tokens are matched.
#[derive(Debug)]
pub(crate) struct ArgumentBuffer {
    slots: Vec<Option<Value>>,
}

impl ArgumentBuffer {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    pub(crate) fn fill(&mut self, index: usize, value: Value) {
        self.slots[index].replace(value);
    }

    /// Resolve every unfilled slot: optionals take their default (or `None`), absent required flags are `false`,
    /// and any other required field is reported missing.
    pub(crate) fn close(
        self,
        fields: &[Field],
        identities: &[Identity],
    ) -> Result<ParsedRecord, ParseError> {
        let mut missing = Vec::default();
        let mut entries = Vec::with_capacity(fields.len());

        for ((slot, field), identity) in self.slots.into_iter().zip(fields).zip(identities) {
            let value = match (slot, field.kind()) {
                (Some(value), _) => value,
                (None, Kind::Optional(_)) => match field.default_value() {
                    Some(default) => Value::some(default.clone()),
                    None => Value::Optional(None),
                },
                (None, Kind::Required(ValueKind::Bool)) => Value::Bool(false),
                (None, Kind::Required(_)) => {
                    missing.push(identity.display_name(field.identifier()).to_string());
                    continue;
                }
            };

            entries.push((field.identifier().to_string(), value));
        }

        if missing.is_empty() {
            Ok(ParsedRecord { entries })
        } else {
            Err(ParseError::MissingRequiredOption { missing })
        }
    }
}

/// Parse the `tokens` against the `schema`.
///
/// The first token is not skipped: pass `std::env::args().skip(1)`, not `std::env::args()`.
pub(crate) fn resolve(schema: &Schema, tokens: &[&str]) -> Result<ParsedRecord, ParseError> {
    let fields = schema.fields();
    let identities = schema.identities();
    let mut buffer = ArgumentBuffer::new(fields.len());
    let mut used = vec![false; tokens.len()];

    for (index, (field, identity)) in fields.iter().zip(identities).enumerate() {
        if let Some(Match {
            flag,
            consumed,
            value,
        }) = match_and_convert(field, identity, tokens)?
        {
            used[flag] = true;

            if let Some(offset) = consumed {
                used[offset] = true;
            }

            buffer.fill(index, value);
        }
    }

    scan_leftovers(fields, identities, tokens, &used)?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Closing buffer {buffer:?}.");
    }

    buffer.close(fields, identities)
}

fn scan_leftovers(
    fields: &[Field],
    identities: &[Identity],
    tokens: &[&str],
    used: &[bool],
) -> Result<(), ParseError> {
    let mut offset = 0;

    while offset < tokens.len() {
        let token = tokens[offset];
        offset += 1;

        if used[offset - 1] {
            continue;
        }

        let repeated = fields
            .iter()
            .zip(identities)
            .find_map(|(field, identity)| identity.matches(token).map(|(_, inline)| (field, inline)));

        match repeated {
            Some((field, inline)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Ignoring repeated '{token}' of '{}'.", field.identifier());
                }

                let payload = tokens.get(offset).copied();

                if inline.is_none()
                    && !field.kind().is_flag()
                    && payload.map_or(false, |payload| !looks_like_option(field.kind(), payload))
                {
                    offset += 1;
                }
            }
            None if token.starts_with('-') => {
                return Err(ParseError::UnknownOption {
                    token: token.to_string(),
                    suggestion: suggest(identities, token),
                });
            }
            None => {
                return Err(ParseError::UnexpectedArgument {
                    token: token.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// The names of the option sharing the longest (dash-less) prefix with the `token`.
fn suggest(identities: &[Identity], token: &str) -> Option<String> {
    let stem = token.trim_start_matches('-');
    let mut best: Option<(usize, &Identity)> = None;

    for identity in identities {
        for name in identity.names() {
            let shared = common_prefix(stem, name.trim_start_matches('-'));

            if shared > 0 && best.map_or(true, |(length, _)| shared > length) {
                best.replace((shared, identity));
            }
        }
    }

    best.map(|(_, identity)| identity.joined())
}

fn common_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueKind;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("verbose", Kind::Required(ValueKind::Bool)),
            Field::new("count", Kind::Required(ValueKind::SIGNED)).token("-n"),
            Field::new("name", Kind::Optional(ValueKind::Text))
                .token("-N")
                .default(Value::Text("anon".to_string())),
            Field::new("ratio", Kind::Optional(ValueKind::FLOAT)).token("-"),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_complete() {
        // Setup
        let tokens = vec!["--ratio=0.5", "-v", "-n", "-3", "--name", "bob"];

        // Execute
        let record = resolve(&schema(), tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(
            record.entries(),
            &[
                ("verbose".to_string(), Value::Bool(true)),
                ("count".to_string(), Value::Signed(-3)),
                ("name".to_string(), Value::some(Value::Text("bob".to_string()))),
                ("ratio".to_string(), Value::some(Value::Float(0.5))),
            ]
        );
    }

    #[test]
    fn resolve_defaults() {
        let record = resolve(&schema(), &["--verbose", "--count", "1"]).unwrap();
        assert_eq!(
            record.get("name"),
            Some(&Value::some(Value::Text("anon".to_string())))
        );
        assert_eq!(record.get("ratio"), Some(&Value::Optional(None)));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 4);
    }

    #[rstest]
    #[case(vec![], vec!["--count", "--level"])]
    #[case(vec!["-v"], vec!["--count", "--level"])]
    #[case(vec!["-n", "1"], vec!["--level"])]
    #[case(vec!["--name", "x", "--level", "1"], vec!["--count"])]
    fn resolve_missing(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let schema = Schema::new(vec![
            Field::new("verbose", Kind::Required(ValueKind::Bool)),
            Field::new("count", Kind::Required(ValueKind::SIGNED)).token("-n"),
            Field::new("name", Kind::Optional(ValueKind::Text)).token("-N"),
            Field::new("level", Kind::Required(ValueKind::UNSIGNED)),
        ])
        .unwrap();

        // Execute
        let error = resolve(&schema, tokens.as_slice()).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::MissingRequiredOption { missing } => {
            assert_eq!(missing, expected);
        });
    }

    #[rstest]
    #[case(vec!["-n", "1"], Value::Bool(false))]
    #[case(vec!["-n", "1", "--verbose=false"], Value::Bool(false))]
    #[case(vec!["-n", "1", "-v"], Value::Bool(true))]
    fn resolve_absent_flag(#[case] tokens: Vec<&str>, #[case] expected: Value) {
        let record = resolve(&schema(), tokens.as_slice()).unwrap();
        assert_eq!(record.get("verbose"), Some(&expected));
    }

    #[test]
    fn resolve_absent_optional_flag() {
        let schema = Schema::new(vec![Field::new("quiet", Kind::Optional(ValueKind::Bool))]).unwrap();
        let record = resolve(&schema, &[]).unwrap();
        assert_eq!(record.get("quiet"), Some(&Value::Optional(None)));
    }

    #[test]
    fn resolve_missing_short_only() {
        let schema = Schema::new(vec![
            Field::new("only_short", Kind::Required(ValueKind::Text)).token("--"),
        ])
        .unwrap();
        let error = resolve(&schema, &[]).unwrap_err();
        assert_eq!(error.to_string(), "Parse error: Required arguments are missing: -o");
    }

    #[rstest]
    #[case(vec!["-v", "-n", "1", "-n", "2"], Value::Signed(1))]
    #[case(vec!["-v", "-n", "1", "--count=2"], Value::Signed(1))]
    #[case(vec!["-v", "--count=1", "-n", "2"], Value::Signed(1))]
    #[case(vec!["-n", "1", "-v", "--verbose"], Value::Signed(1))]
    #[case(vec!["-n", "1", "-v", "--verbose=false"], Value::Signed(1))]
    fn resolve_repeated(#[case] tokens: Vec<&str>, #[case] expected: Value) {
        let record = resolve(&schema(), tokens.as_slice()).unwrap();
        assert_eq!(record.get("count"), Some(&expected));
        assert_eq!(record.get("verbose"), Some(&Value::Bool(true)));
    }

    #[rstest]
    #[case(vec!["-v", "-n", "1", "--verbos"], "--verbos", Some("-v, --verbose"))]
    #[case(vec!["-v", "-n", "1", "--counter"], "--counter", Some("-n, --count"))]
    #[case(vec!["-v", "-n", "1", "--rat"], "--rat", Some("--ratio"))]
    #[case(vec!["-v", "-n", "1", "-x"], "-x", None)]
    #[case(vec!["-v", "-n", "1", "-"], "-", None)]
    #[case(vec!["-v", "-n", "1", "--"], "--", None)]
    fn resolve_unknown_option(
        #[case] tokens: Vec<&str>,
        #[case] expected_token: &str,
        #[case] expected_suggestion: Option<&str>,
    ) {
        // Setup
        let schema = schema();

        // Execute
        let error = resolve(&schema, tokens.as_slice()).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::UnknownOption { token, suggestion } => {
            assert_eq!(token, expected_token);
            assert_eq!(suggestion.as_deref(), expected_suggestion);
        });
    }

    #[rstest]
    #[case(vec!["-n", "1", "-n", "--bogus"], "--bogus")]
    #[case(vec!["-n", "1", "--count", "--bogus=2"], "--bogus=2")]
    fn resolve_repeated_before_unknown(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let schema = schema();

        // Execute
        let error = resolve(&schema, tokens.as_slice()).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::UnknownOption { token, .. } => {
            assert_eq!(token, expected);
        });
    }

    #[test]
    fn resolve_repeated_negative_payload() {
        let record = resolve(&schema(), &["-n", "1", "-n", "-2"]).unwrap();
        assert_eq!(record.get("count"), Some(&Value::Signed(1)));
    }

    #[test]
    fn resolve_unknown_option_message() {
        let error = resolve(&schema(), &["--verbo"]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Parse error: Unknown option '--verbo' (maybe you meant -v, --verbose?)."
        );
    }

    #[rstest]
    #[case(vec!["stray", "-v", "-n", "1"], "stray")]
    #[case(vec!["-v", "stray", "-n", "1"], "stray")]
    #[case(vec!["-v", "-n", "1", "2"], "2")]
    fn resolve_unexpected_argument(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        let error = resolve(&schema(), tokens.as_slice()).unwrap_err();
        assert_matches!(error, ParseError::UnexpectedArgument { token } => {
            assert_eq!(token, expected);
        });
    }

    #[test]
    fn resolve_match_error_first() {
        // The match error surfaces ahead of any missing/unknown checks.
        let error = resolve(&schema(), &["--unknown", "-n", "abc"]).unwrap_err();
        assert_matches!(error, ParseError::WrongOptionType { option, .. } => {
            assert_eq!(option, "-n");
        });
    }

    #[test]
    fn resolve_empty_schema() {
        let schema = Schema::new(vec![]).unwrap();
        let record = resolve(&schema, &[]).unwrap();
        assert!(record.is_empty());

        let error = resolve(&schema, &["--anything"]).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnknownOption {
                token: "--anything".to_string(),
                suggestion: None,
            }
        );
    }

    #[test]
    fn record_values() {
        let record = resolve(&schema(), &["-v", "-n", "7", "--ratio", "2.5"]).unwrap();
        let mut values = record.into_values();

        assert!(values.next_as::<bool>());
        assert_eq!(values.next_as::<i64>(), 7);
        assert_eq!(values.next_as::<Option<String>>(), Some("anon".to_string()));
        assert_eq!(values.next_as::<Option<f64>>(), Some(2.5));
    }

    #[test]
    #[should_panic(expected = "internal error")]
    fn record_values_mismatch() {
        let record = resolve(&schema(), &["-v", "-n", "7"]).unwrap();
        let mut values = record.into_values();
        values.next_as::<String>();
    }

    #[rstest]
    #[case(ParseError::MissingRequiredOption { missing: vec!["--a".to_string(), "-b".to_string()] }, "Required arguments are missing: --a, -b")]
    #[case(ParseError::WrongOptionType { option: "--a".to_string(), expected: "int".to_string(), found: "x".to_string() }, "Expected argument of type int for '--a', got 'x'.")]
    #[case(ParseError::WrongOptionType { option: "--a".to_string(), expected: "string".to_string(), found: String::default() }, "Expected argument of type string for '--a', got ''.")]
    #[case(ParseError::UnknownOption { token: "--b".to_string(), suggestion: None }, "Unknown option '--b'.")]
    #[case(ParseError::UnexpectedArgument { token: "b".to_string() }, "Unexpected argument 'b'.")]
    fn parse_error_display(#[case] error: ParseError, #[case] expected: &str) {
        let message = error.to_string();
        assert!(message.starts_with("Parse error: "));
        assert_contains!(message, expected);
    }

    #[rstest]
    #[case(ConfigError::RepeatedOption { name: "-v".to_string() }, "option name '-v' is repeated")]
    #[case(ConfigError::DisabledNames { field: "abc".to_string() }, "field 'abc' cannot disable both")]
    #[case(ConfigError::EmptyIdentifier, "identifier cannot be empty")]
    #[case(ConfigError::RepeatedIdentifier { field: "abc".to_string() }, "identifier 'abc' is repeated")]
    #[case(ConfigError::DefaultOnRequired { field: "abc".to_string() }, "required field 'abc'")]
    #[case(ConfigError::DefaultMismatch { field: "abc".to_string(), expected: "optional<int>".to_string() }, "must be of type optional<int>")]
    fn config_error_display(#[case] error: ConfigError, #[case] expected: &str) {
        let message = error.to_string();
        assert!(message.starts_with("Config error: "));
        assert_contains!(message, expected);
    }
}
