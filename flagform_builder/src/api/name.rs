use crate::api::field::{NameOverrides, NameSetting};
use crate::parser::ConfigError;

/// The short and long names an option is matched by.
///
/// A `None` side is disabled: the option cannot be specified by that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    short: Option<String>,
    long: Option<String>,
}

impl Identity {
    /// Resolve the identity of the field `identifier` under its `overrides`.
    ///
    /// Per side: a disabled name yields `None`, an explicit name is used verbatim, otherwise the name is deduced.
    /// * long: `--` followed by the identifier in kebab case (ex: `deduced_long_name` -> `--deduced-long-name`).
    /// * short: `-` followed by the first character of the identifier (ex: `deduced_long_name` -> `-d`).
    ///
    /// ### Example
    /// ```
    /// # use flagform_builder as flagform;
    /// use flagform::{Identity, NameOverrides};
    ///
    /// let identity = Identity::resolve("only_long", &NameOverrides::from_tokens(["-"])).unwrap();
    /// assert_eq!(identity.short(), None);
    /// assert_eq!(identity.long(), Some("--only-long"));
    /// ```
    pub fn resolve(identifier: &str, overrides: &NameOverrides) -> Result<Self, ConfigError> {
        let first = match identifier.chars().next() {
            Some(c) => c,
            None => return Err(ConfigError::EmptyIdentifier),
        };

        let short = match overrides.short() {
            NameSetting::Disabled => None,
            NameSetting::Explicit(name) => Some(name),
            NameSetting::Deduced => Some(format!("-{}", kebab_case(&first.to_string()))),
        };
        let long = match overrides.long() {
            NameSetting::Disabled => None,
            NameSetting::Explicit(name) => Some(name),
            NameSetting::Deduced => Some(format!("--{}", kebab_case(identifier))),
        };

        if short.is_none() && long.is_none() {
            return Err(ConfigError::DisabledNames {
                field: identifier.to_string(),
            });
        }

        Ok(Self { short, long })
    }

    /// The short name (ex: `-v`), if enabled.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long name (ex: `--verbose`), if enabled.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The enabled names, short first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.short().into_iter().chain(self.long())
    }

    /// The name used to refer to the option in messages: the long name, else the short name, else the `identifier`.
    pub fn display_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.long().or(self.short()).unwrap_or(identifier)
    }

    /// The enabled names joined for display, short first (ex: `-v, --verbose`).
    pub fn joined(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }

    /// Whether `token` specifies this option.
    ///
    /// Returns the matched name along with `None` on a bare name (`--name`), or `Some(payload)` for the `--name=payload` form.
    pub(crate) fn matches<'t>(&self, token: &'t str) -> Option<(&str, Option<&'t str>)> {
        self.names().find_map(|name| {
            let rest = token.strip_prefix(name)?;

            if rest.is_empty() {
                Some((name, None))
            } else {
                rest.strip_prefix('=').map(|payload| (name, Some(payload)))
            }
        })
    }
}

/// Replace every `_` with `-`.
pub fn kebab_case(identifier: &str) -> String {
    identifier.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("verbose", vec![], Some("-v"), Some("--verbose"))]
    #[case("this_deduces_both", vec!["both option names are deduced"], Some("-t"), Some("--this-deduces-both"))]
    #[case("deduced_long_name", vec!["-l"], Some("-l"), Some("--deduced-long-name"))]
    #[case("deduce_short_name", vec!["--short"], Some("-d"), Some("--short"))]
    #[case("set_both", vec!["-b", "--both"], Some("-b"), Some("--both"))]
    #[case("only_long", vec!["-", "--only-long"], None, Some("--only-long"))]
    #[case("only_short", vec!["--", "-o"], Some("-o"), None)]
    #[case("only_short", vec!["--"], Some("-o"), None)]
    #[case("CamelCase", vec![], Some("-C"), Some("--CamelCase"))]
    #[case("_hidden", vec![], Some("--"), Some("---hidden"))]
    #[case("a", vec![], Some("-a"), Some("--a"))]
    fn resolve(
        #[case] identifier: &str,
        #[case] tokens: Vec<&str>,
        #[case] short: Option<&str>,
        #[case] long: Option<&str>,
    ) {
        // Setup
        let overrides = NameOverrides::from_tokens(tokens);

        // Execute
        let identity = Identity::resolve(identifier, &overrides).unwrap();

        // Verify
        assert_eq!(identity.short(), short);
        assert_eq!(identity.long(), long);
    }

    #[rstest]
    #[case(vec!["--", "-"])]
    #[case(vec!["-", "--", "-x", "--xyz"])]
    fn resolve_disabled_names(#[case] tokens: Vec<&str>) {
        // Setup
        let overrides = NameOverrides::from_tokens(tokens);

        // Execute
        let error = Identity::resolve("i_wont_compile", &overrides).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::DisabledNames { field } => {
            assert_eq!(field, "i_wont_compile");
        });
    }

    #[test]
    fn resolve_empty() {
        let error = Identity::resolve("", &NameOverrides::default()).unwrap_err();
        assert_matches!(error, ConfigError::EmptyIdentifier);
    }

    #[rstest]
    #[case(vec![], "-v, --verbose", "--verbose")]
    #[case(vec!["-"], "--verbose", "--verbose")]
    #[case(vec!["--"], "-v", "-v")]
    fn display(#[case] tokens: Vec<&str>, #[case] joined: &str, #[case] display_name: &str) {
        let identity = Identity::resolve("verbose", &NameOverrides::from_tokens(tokens)).unwrap();
        assert_eq!(identity.joined(), joined);
        assert_eq!(identity.display_name("verbose"), display_name);
    }

    #[rstest]
    #[case("-c", Some(("-c", None)))]
    #[case("--count", Some(("--count", None)))]
    #[case("-c=5", Some(("-c", Some("5"))))]
    #[case("--count=5", Some(("--count", Some("5"))))]
    #[case("--count=", Some(("--count", Some(""))))]
    #[case("--count=a=b", Some(("--count", Some("a=b"))))]
    #[case("--count5", None)]
    #[case("-c5", None)]
    #[case("--counter", None)]
    #[case("--coun", None)]
    #[case("count", None)]
    #[case("", None)]
    fn matches(#[case] token: &str, #[case] expected: Option<(&str, Option<&str>)>) {
        let identity = Identity::resolve("count", &NameOverrides::default()).unwrap();
        assert_eq!(identity.matches(token), expected);
    }

    #[test]
    fn matches_disabled_side() {
        let identity =
            Identity::resolve("count", &NameOverrides::from_tokens(["-"])).unwrap();
        assert_eq!(identity.matches("-c"), None);
        assert_eq!(identity.matches("--count"), Some(("--count", None)));
    }
}
