pub mod cli;
pub mod config;
pub mod error;
pub mod naming;

pub use config::Config;
pub use error::Error;
pub use naming::{format, format_with, split, to_title, Convention, Preset};

/// One name taken through the splitter and a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub words: Vec<String>,
    pub output: String,
}

impl Conversion {
    pub fn new(input: &str, convention: &Convention) -> Self {
        let words = split(input);
        let output = convention.join(&words);
        Self {
            input: input.to_string(),
            words,
            output,
        }
    }
}
