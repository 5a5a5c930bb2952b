pub mod output;

use crate::{split, Conversion, Convention};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::BufRead;

/// Names given on the command line, or one per line from `input` when none were given.
pub fn collect_names(args: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut names = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read names from stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            names.push(line.to_string());
        }
    }
    log::debug!("read {} name(s) from stdin", names.len());
    Ok(names)
}

pub fn split_all(names: &[String]) -> Vec<Vec<String>> {
    names.par_iter().map(|name| split(name)).collect()
}

/// Run every name through `convention`. Output order matches input order.
pub fn convert_all(names: &[String], convention: &Convention) -> Vec<Conversion> {
    names
        .par_iter()
        .map(|name| Conversion::new(name, convention))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::presets::UPPER_SNAKE;
    use std::io::Cursor;

    #[test]
    fn test_args_take_precedence() {
        let names = collect_names(vec!["fooBar".to_string()], Cursor::new("ignored\n")).unwrap();
        assert_eq!(names, vec!["fooBar"]);
    }

    #[test]
    fn test_names_from_input() {
        let input = Cursor::new("fooBar\r\n\n   \nthe quick fox\n");
        let names = collect_names(Vec::new(), input).unwrap();
        assert_eq!(names, vec!["fooBar", "the quick fox"]);
    }

    #[test]
    fn test_split_all() {
        let names = vec!["IPAddr".to_string(), "--".to_string()];
        assert_eq!(split_all(&names), vec![vec!["IP", "Addr"], vec![""]]);
    }

    #[test]
    fn test_convert_all_keeps_order() {
        let names: Vec<String> = (0..200).map(|i| format!("name{}Part", i)).collect();
        let conversions = convert_all(&names, &UPPER_SNAKE);
        assert_eq!(conversions.len(), 200);
        for (i, conversion) in conversions.iter().enumerate() {
            assert_eq!(conversion.output, format!("NAME{}_PART", i));
        }
    }
}
