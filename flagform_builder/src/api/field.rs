use crate::model::{Kind, Value};

/// How a name override token is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOverride {
    /// Exactly `--`: the option has no long name.
    DisableLong,
    /// Starts with `--`: the explicit long name (ex: `--only-long`).
    Long(String),
    /// Exactly `-`: the option has no short name.
    DisableShort,
    /// Starts with a single `-`: the explicit short name (ex: `-o`).
    Short(String),
    /// Anything else: the description shown in the help message.
    Description(String),
}

impl NameOverride {
    /// Classify a token.
    pub fn classify(token: impl Into<String>) -> Self {
        let token = token.into();

        if token == "--" {
            NameOverride::DisableLong
        } else if token.starts_with("--") {
            NameOverride::Long(token)
        } else if token == "-" {
            NameOverride::DisableShort
        } else if token.starts_with('-') {
            NameOverride::Short(token)
        } else {
            NameOverride::Description(token)
        }
    }
}

/// The state of one side (short or long) of an option's name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NameSetting {
    /// Deduce the name from the field identifier.
    #[default]
    Deduced,
    /// Use this exact name.
    Explicit(String),
    /// The option has no name on this side.
    Disabled,
}

/// The name overrides of a field, after classification.
///
/// Only the first explicit name of each side, and the first description, are honoured; later duplicates are ignored.
/// Disabling a side takes precedence over any explicit name for that side, wherever it appears.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameOverrides {
    short: Option<String>,
    short_disabled: bool,
    long: Option<String>,
    long_disabled: bool,
    description: Option<String>,
}

impl NameOverrides {
    /// Classify each of the `tokens`, in order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut overrides = NameOverrides::default();

        for token in tokens {
            overrides.push(token);
        }

        overrides
    }

    /// Classify a single token.
    pub fn push(&mut self, token: impl Into<String>) {
        match NameOverride::classify(token) {
            NameOverride::DisableLong => self.long_disabled = true,
            NameOverride::Long(name) => first(&mut self.long, name),
            NameOverride::DisableShort => self.short_disabled = true,
            NameOverride::Short(name) => first(&mut self.short, name),
            NameOverride::Description(description) => first(&mut self.description, description),
        }
    }

    /// The short name setting.
    pub fn short(&self) -> NameSetting {
        setting(self.short_disabled, &self.short)
    }

    /// The long name setting.
    pub fn long(&self) -> NameSetting {
        setting(self.long_disabled, &self.long)
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn first(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        slot.replace(value);
    }
}

fn setting(disabled: bool, explicit: &Option<String>) -> NameSetting {
    match (disabled, explicit) {
        (true, _) => NameSetting::Disabled,
        (false, Some(name)) => NameSetting::Explicit(name.clone()),
        (false, None) => NameSetting::Deduced,
    }
}

/// The description of a single option: the Field Descriptor.
///
/// ### Example
/// ```
/// # use flagform_builder as flagform;
/// use flagform::{Field, Kind, Value, ValueKind};
///
/// let field = Field::new("set_both", Kind::Optional(ValueKind::SIGNED))
///     .token("-b")
///     .token("--both")
///     .token("both option names fixed")
///     .default(Value::Signed(100));
///
/// assert_eq!(field.identifier(), "set_both");
/// assert_eq!(field.description(), Some("both option names fixed"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    identifier: String,
    kind: Kind,
    overrides: NameOverrides,
    default: Option<Value>,
}

impl Field {
    /// Create a field for the `identifier`, of the declared `kind`.
    pub fn new(identifier: impl Into<String>, kind: Kind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            overrides: NameOverrides::default(),
            default: None,
        }
    }

    /// Add a name override token: `--long`, `-s`, `--` (no long name), `-` (no short name), or a description.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.overrides.push(token);
        self
    }

    /// Set the default value, as a primitive of the field's kind (ex: `Value::Signed(10)` for an `optional<int>`).
    /// If repeated, only the final default will apply.
    ///
    /// Only optional fields may carry a default; this is checked by [`Schema::new`](crate::Schema::new).
    pub fn default(mut self, value: Value) -> Self {
        self.default.replace(value);
        self
    }

    /// The declared identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The declared kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The classified name overrides.
    pub fn overrides(&self) -> &NameOverrides {
        &self.overrides
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.overrides.description()
    }

    /// The declared default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
