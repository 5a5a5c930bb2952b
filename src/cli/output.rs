use crate::{Conversion, Convention};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Name shown next to every convention by `list`
pub const LIST_EXAMPLE: &str = "XMLHttpRequest2Handler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSplit {
    input: String,
    words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    words: Vec<String>,
    convention: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConvention {
    name: String,
    separator: String,
    builtin: bool,
    example: String,
}

/// One line per name with its words separated by spaces
pub fn write_splits(
    out: &mut impl Write,
    names: &[String],
    splits: &[Vec<String>],
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for words in splits {
                let line = if colored_output {
                    words
                        .iter()
                        .map(|w| w.cyan().to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                } else {
                    words.join(" ")
                };
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonSplit> = names
                .iter()
                .zip(splits)
                .map(|(input, words)| JsonSplit {
                    input: input.clone(),
                    words: words.clone(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

/// One formatted name per line
pub fn write_conversions(
    out: &mut impl Write,
    conversions: &[Conversion],
    convention: &Convention,
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for conversion in conversions {
                if colored_output {
                    writeln!(out, "{}", conversion.output.green())?;
                } else {
                    writeln!(out, "{}", conversion.output)?;
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonConversion> = conversions
                .iter()
                .map(|c| JsonConversion {
                    input: c.input.clone(),
                    words: c.words.clone(),
                    convention: convention.name().to_string(),
                    output: c.output.clone(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

/// Table of conventions, built-in first, each applied to [`LIST_EXAMPLE`]
pub fn write_conventions(
    out: &mut impl Write,
    builtin: &[&Convention],
    custom: &[Convention],
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    let rows = builtin
        .iter()
        .map(|c| (*c, true))
        .chain(custom.iter().map(|c| (c, false)));

    match format {
        OutputFormat::Text => {
            let width = builtin
                .iter()
                .copied()
                .chain(custom.iter())
                .map(|c| c.name().chars().count())
                .max()
                .unwrap_or(0);

            for (convention, is_builtin) in rows {
                let name = format!("{:width$}", convention.name(), width = width);
                let example = convention.format(LIST_EXAMPLE);
                if colored_output {
                    let name = if is_builtin {
                        name.bold()
                    } else {
                        name.yellow().bold()
                    };
                    writeln!(out, "  {}  {}", name, example.green())?;
                } else {
                    writeln!(out, "  {}  {}", name, example)?;
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonConvention> = rows
                .map(|(c, is_builtin)| JsonConvention {
                    name: c.name().to_string(),
                    separator: c.separator().to_string(),
                    builtin: is_builtin,
                    example: c.format(LIST_EXAMPLE),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}
