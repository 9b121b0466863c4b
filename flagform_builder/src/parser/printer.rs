use crate::api::Schema;
use crate::parser::ParsedRecord;

const INDENT_WIDTH: usize = 4;
const NAMES_WIDTH: usize = 25;
const COLUMN_WIDTH: usize = 50;

/// Layout:
/// ```text
/// Usage: <program> [flags] [options]
///
/// FLAGS:
///     <names, padded to 50><description>[ (default: <value>)]
///
/// OPTIONS:
///     <"names:" padded to 25> <type>, all padded to 50, then <description>[ (default: <value>)]
///
/// <comment>
/// ```
/// Empty sections are left out, along with their tag in the usage line.
pub(crate) fn help(schema: &Schema, program: &str, comment: &str) -> String {
    let mut flags = Vec::default();
    let mut options = Vec::default();

    for (field, identity) in schema.entries() {
        let kind = field.kind();
        let description = field.description().unwrap_or_default();
        let default = match field
            .default_value()
            .and_then(|value| value.render(kind.value_kind()))
        {
            Some(value) => format!(" (default: {value})"),
            None => String::default(),
        };

        if kind.is_flag() {
            flags.push(format!(
                "{:indent$}{:<width$}{description}{default}",
                "",
                identity.joined(),
                indent = INDENT_WIDTH,
                width = COLUMN_WIDTH,
            ));
        } else {
            let with_type = format!(
                "{:<width$} {}",
                format!("{}:", identity.joined()),
                kind.type_name(),
                width = NAMES_WIDTH,
            );
            options.push(format!(
                "{:indent$}{:<width$}{description}{default}",
                "",
                with_type,
                indent = INDENT_WIDTH,
                width = COLUMN_WIDTH,
            ));
        }
    }

    let mut message = format!("Usage: {program}");

    if !flags.is_empty() {
        message.push_str(" [flags]");
    }

    if !options.is_empty() {
        message.push_str(" [options]");
    }

    if !flags.is_empty() {
        message.push_str("\n\nFLAGS:\n");
        message.push_str(&flags.join("\n"));
    }

    if !options.is_empty() {
        message.push_str("\n\nOPTIONS:\n");
        message.push_str(&options.join("\n"));
    }

    if !comment.is_empty() {
        message.push_str("\n\n");
        message.push_str(comment);
    }

    message.push('\n');
    message
}

pub(crate) fn describe(schema: &Schema, record: &ParsedRecord) -> Vec<String> {
    schema
        .entries()
        .filter_map(|(field, identity)| {
            let value = record.get(field.identifier())?;
            let rendered = value
                .render(field.kind().value_kind())
                .unwrap_or_else(|| value.to_string());
            Some(format!("{}: {rendered}", identity.joined()))
        })
        .collect()
}

pub(crate) fn to_tokens(schema: &Schema, record: &ParsedRecord) -> Vec<String> {
    let mut tokens = Vec::default();

    for (field, identity) in schema.entries() {
        let rendered = match record
            .get(field.identifier())
            .and_then(|value| value.render(field.kind().value_kind()))
        {
            Some(rendered) => rendered,
            None => continue,
        };
        let name = identity.display_name(field.identifier());

        // A bare payload starting with `-` may be refused as another option.
        if field.kind().is_flag() && rendered == "true" {
            tokens.push(name.to_string());
        } else if field.kind().is_flag() || rendered.starts_with('-') {
            tokens.push(format!("{name}={rendered}"));
        } else {
            tokens.push(name.to_string());
            tokens.push(rendered);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Field;
    use crate::model::{Kind, Value, ValueKind};
    use rstest::rstest;

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("verbose", Kind::Required(ValueKind::Bool)).token("Log more."),
            Field::new("count", Kind::Optional(ValueKind::SIGNED))
                .token("-n")
                .token("How many.")
                .default(Value::Signed(10)),
            Field::new("name", Kind::Required(ValueKind::Text))
                .token("-")
                .token("Who."),
            Field::new("quiet", Kind::Optional(ValueKind::Bool))
                .token("Log less.")
                .default(Value::Bool(false)),
            Field::new("ratio", Kind::Optional(ValueKind::Float { bits: 32 })).token("--"),
        ])
        .unwrap()
    }

    #[test]
    fn help_empty() {
        let schema = Schema::new(vec![]).unwrap();
        assert_eq!(help(&schema, "program", ""), "Usage: program\n");
        assert_eq!(help(&schema, "program", "Bye."), "Usage: program\n\nBye.\n");
    }

    #[test]
    fn help_flags_only() {
        let schema = Schema::new(vec![Field::new("verbose", Kind::Required(ValueKind::Bool))]).unwrap();
        assert_eq!(
            help(&schema, "program", ""),
            format!("Usage: program [flags]\n\nFLAGS:\n    {:<50}\n", "-v, --verbose")
        );
    }

    #[test]
    fn help_options_only() {
        let schema = Schema::new(vec![Field::new("name", Kind::Optional(ValueKind::Text)).token("-")]).unwrap();
        let message = help(&schema, "program", "");
        assert!(message.starts_with("Usage: program [options]\n\nOPTIONS:\n"));
        assert!(!message.contains("FLAGS"));
        assert!(message.ends_with(&format!("{:<50}\n", format!("{:<25} optional<string>", "--name:"))));
    }

    #[test]
    fn help_full() {
        // Setup
        let schema = schema();

        // Execute
        let message = help(&schema, "program", "Bye.");

        // Verify
        let expected = vec![
            "Usage: program [flags] [options]".to_string(),
            "".to_string(),
            "FLAGS:".to_string(),
            format!("    {:<50}Log more.", "-v, --verbose"),
            format!("    {:<50}Log less. (default: false)", "-q, --quiet"),
            "".to_string(),
            "OPTIONS:".to_string(),
            format!("    {:<50}How many. (default: 10)", format!("{:<25} optional<int>", "-n, --count:")),
            format!("    {:<50}Who.", format!("{:<25} string", "--name:")),
            format!("    {:<50}", format!("{:<25} optional<float>", "-r:")),
            "".to_string(),
            "Bye.".to_string(),
            "".to_string(),
        ];
        assert_eq!(message, expected.join("\n"));
    }

    #[test]
    fn help_long_names() {
        // Names wider than their column push the remainder right.
        let schema = Schema::new(vec![Field::new(
            "an_exceedingly_long_option_name_for_the_help",
            Kind::Required(ValueKind::Text),
        )
        .token("x")])
        .unwrap();
        let message = help(&schema, "program", "");
        assert!(message.ends_with(
            "\n    -a, --an-exceedingly-long-option-name-for-the-help: stringx\n"
        ));
    }

    #[test]
    fn describe_record() {
        // Setup
        let schema = schema();
        let record = schema
            .parse(&["-v", "--name", "bob", "-r", "0.1"])
            .unwrap();

        // Execute
        let lines = describe(&schema, &record);

        // Verify
        assert_eq!(
            lines,
            vec![
                "-v, --verbose: true",
                "-n, --count: 10",
                "--name: bob",
                "-q, --quiet: false",
                "-r: 0.1",
            ]
        );
    }

    #[test]
    fn describe_absent() {
        let schema = Schema::new(vec![Field::new("count", Kind::Optional(ValueKind::SIGNED))]).unwrap();
        let record = schema.parse(&[]).unwrap();
        assert_eq!(describe(&schema, &record), vec!["-c, --count: none"]);
    }

    #[test]
    fn to_tokens_record() {
        // Setup
        let schema = schema();
        let record = schema
            .parse(&["--verbose=false", "--name", "bob", "-q"])
            .unwrap();

        // Execute
        let tokens = to_tokens(&schema, &record);

        // Verify
        assert_eq!(
            tokens,
            vec!["--verbose=false", "--count", "10", "--name", "bob", "--quiet"]
        );
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        assert_eq!(schema.parse(tokens.as_slice()).unwrap(), record);
    }

    #[rstest]
    #[case(vec!["--name=-x"], vec!["--verbose=false", "--count", "10", "--name=-x"])]
    #[case(vec!["--name", "bob", "-n", "-3", "-r", "-0.5"], vec!["--verbose=false", "--count=-3", "--name", "bob", "-r=-0.5"])]
    #[case(vec!["--name=--", "-v"], vec!["--verbose", "--count", "10", "--name=--"])]
    fn to_tokens_dash_payload(#[case] given: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let schema = schema();
        let record = schema.parse(given.as_slice()).unwrap();

        // Execute
        let tokens = to_tokens(&schema, &record);

        // Verify
        assert_eq!(tokens, expected);
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        assert_eq!(schema.parse(tokens.as_slice()).unwrap(), record);
    }

    #[test]
    fn to_tokens_dash_default() {
        // Setup
        let schema = Schema::new(vec![Field::new("name", Kind::Optional(ValueKind::Text))
            .default(Value::Text("-x".to_string()))])
        .unwrap();
        let record = schema.parse(&[]).unwrap();

        // Execute
        let tokens = to_tokens(&schema, &record);

        // Verify
        assert_eq!(tokens, vec!["--name=-x"]);
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        assert_eq!(schema.parse(tokens.as_slice()).unwrap(), record);
    }
}
