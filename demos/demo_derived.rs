use flagform::{derive::*, prelude::*};

#[derive(Debug, FlagformParser)]
#[flagform(comment = "Options may appear in any order.")]
struct Parameters {
    #[flagform("Log every step.")]
    verbose: bool,
    #[flagform("-n", "How many times to repeat.")]
    count: i32,
    #[flagform("--", "The greeting to use.", default = "hello")]
    greeting: Option<String>,
    #[flagform("-r", "--rate", "Repetitions per second.", default = 1.5)]
    repetition_rate: Option<f32>,
    #[flagform("Shout the greeting.")]
    loud: Option<bool>,
}

fn main() {
    let parameters = Parameters::flagform_parse();
    println!("{parameters:?}");
}
