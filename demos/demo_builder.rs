use flagform::{CommandLineParser, Field, Kind, Value, ValueKind};

fn main() {
    let parser = CommandLineParser::new("demo_builder")
        .about("Options may appear in any order.")
        .add(Field::new("verbose", Kind::Required(ValueKind::Bool)).token("Log every step."))
        .add(
            Field::new("count", Kind::Required(ValueKind::SIGNED))
                .token("-n")
                .token("How many times to repeat."),
        )
        .add(
            Field::new("greeting", Kind::Optional(ValueKind::Text))
                .token("--")
                .token("The greeting to use.")
                .default(Value::Text("hello".to_string())),
        )
        .build();

    let record = parser.parse();

    for line in parser.schema().describe(&record) {
        println!("{line}");
    }

    let count = record.get_as::<i64>("count").unwrap_or_default();
    let greeting = record
        .get_as::<Option<String>>("greeting")
        .flatten()
        .unwrap_or_default();

    for _ in 0..count {
        println!("{greeting}");
    }
}
