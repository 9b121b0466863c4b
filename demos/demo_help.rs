use flagform::{derive::*, prelude::*};

#[derive(Debug, FlagformParser)]
#[flagform(program = "demo_help", comment = "Prints its own help message.")]
struct Parameters {
    #[flagform("-", "Only the long name.")]
    only_long: Option<bool>,
    #[flagform("--", "Only the short name.")]
    only_short: Option<u8>,
    #[flagform("-b", "--both", "Both names fixed.", default = 100)]
    set_both: Option<i64>,
    #[flagform("The name to greet.")]
    name: String,
}

fn main() {
    print!("{}", Parameters::help());
}
