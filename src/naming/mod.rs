pub mod class;
pub mod presets;
pub mod split;
pub mod title;

use crate::Error;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub use class::RuneClass;
pub use presets::Preset;
pub use split::split;
pub use title::to_title;

/// Maps a single word to its formatted form.
pub type WordRule = fn(&str) -> String;

pub fn to_lower(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for c in word.chars() {
        push_mapped(&mut result, c, c.to_lowercase());
    }
    result
}

pub fn to_upper(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for c in word.chars() {
        push_mapped(&mut result, c, c.to_uppercase());
    }
    result
}

/// Push the case mapping of `c`, dropping the combining marks some full
/// mappings expand to (İ => i, ΐ => Ι). A formatted word must split back
/// into the same word, and the splitter throws marks away.
pub(crate) fn push_mapped(out: &mut String, c: char, mapping: impl Iterator<Item = char>) {
    let len = out.len();
    out.extend(mapping.filter(|m| RuneClass::of(*m).is_word()));
    if out.len() == len {
        out.push(c);
    }
}

/// Leave the word exactly as it was split.
pub fn keep(word: &str) -> String {
    word.to_string()
}

/// A naming convention: how to map the first word, how to map every
/// following word, and what to put between them.
#[derive(Debug, Clone)]
pub struct Convention {
    name: Cow<'static, str>,
    first: WordRule,
    rest: WordRule,
    separator: Cow<'static, str>,
}

impl Convention {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        first: WordRule,
        rest: WordRule,
        separator: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            first,
            rest,
            separator: separator.into(),
        }
    }

    /// Const constructor used by the preset table
    pub const fn preset(
        name: &'static str,
        first: WordRule,
        rest: WordRule,
        separator: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            first,
            rest,
            separator: Cow::Borrowed(separator),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Split `name` into words and re-assemble them under this convention.
    pub fn format(&self, name: &str) -> String {
        self.join(&split(name))
    }

    /// Re-assemble already split words under this convention.
    pub fn join(&self, words: &[String]) -> String {
        join_with(words, self.first, self.rest, &self.separator)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Format `name` under `convention`.
pub fn format(name: &str, convention: &Convention) -> String {
    convention.format(name)
}

/// Format `name` with ad hoc rules. `first` maps the first word, `rest`
/// maps the second and following words, and `separator` goes between words.
pub fn format_with<F, R>(name: &str, first: F, rest: R, separator: &str) -> String
where
    F: Fn(&str) -> String,
    R: Fn(&str) -> String,
{
    join_with(&split(name), first, rest, separator)
}

fn join_with<F, R>(words: &[String], first: F, rest: R, separator: &str) -> String
where
    F: Fn(&str) -> String,
    R: Fn(&str) -> String,
{
    let capacity = words.iter().map(|w| w.len() + separator.len()).sum();
    let mut result = String::with_capacity(capacity);

    let mut words = words.iter();
    if let Some(word) = words.next() {
        result.push_str(&first(word));
    }
    for word in words {
        result.push_str(separator);
        result.push_str(&rest(word));
    }
    result
}

/// A word rule that can be named in configuration or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CaseRule {
    Lower,
    Upper,
    Title,
    Keep,
}

impl CaseRule {
    pub fn rule(self) -> WordRule {
        match self {
            CaseRule::Lower => to_lower,
            CaseRule::Upper => to_upper,
            CaseRule::Title => to_title,
            CaseRule::Keep => keep,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaseRule::Lower => "lower",
            CaseRule::Upper => "upper",
            CaseRule::Title => "title",
            CaseRule::Keep => "keep",
        }
    }
}

impl FromStr for CaseRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" => Ok(CaseRule::Lower),
            "upper" => Ok(CaseRule::Upper),
            "title" => Ok(CaseRule::Title),
            "keep" => Ok(CaseRule::Keep),
            _ => Err(Error::UnknownRule(s.to_string())),
        }
    }
}

impl TryFrom<String> for CaseRule {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CaseRule> for String {
    fn from(rule: CaseRule) -> Self {
        rule.as_str().to_string()
    }
}

impl fmt::Display for CaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    const NAMES: &[&str] = &[
        "Alice-WasBeginning",
        "toGetVery",
        "tired-OF sitting",
        "by__herSister",
        "_ONThe bank,",
        "andOfHaving",
        "nothingTo do:",
        "PKCS1v15DecryptOptions",
        "ǆungla ǅungla",
        "İstanbulCity",
        "ΐota_x",
        "straßeName",
        "ǰunctionBox",
        "",
        "__",
    ];

    #[test]
    fn test_presets() {
        assert_eq!(FLAT.format("Alice-WasBeginning"), "alicewasbeginning");
        assert_eq!(UPPER.format("toGetVery"), "TOGETVERY");
        assert_eq!(MIXED.format("tired-OF sitting"), "tiredOfSitting");
        assert_eq!(UPPER_MIXED.format("by__herSister"), "ByHerSister");
        assert_eq!(SNAKE.format("_ONThe bank,"), "on_the_bank");
        assert_eq!(UPPER_SNAKE.format("andOfHaving"), "AND_OF_HAVING");
        assert_eq!(KEBAB.format("nothingTo do:"), "nothing-to-do");
    }

    #[test]
    fn test_expanding_case_mappings() {
        assert_eq!(to_lower("İstanbul"), "istanbul");
        assert_eq!(to_upper("ΐota"), "ΙOTA");
        assert_eq!(to_upper("straße"), "STRASSE");
        assert_eq!(to_upper("ǰ"), "J");
        assert_eq!(to_lower("a_b"), "a_b");
        assert_eq!(SNAKE.format("İstanbulCity"), "istanbul_city");
        assert_eq!(UPPER_SNAKE.format("ΐota_x"), "ΙOTA_X");
    }

    #[test]
    fn test_format_with() {
        let a = |_: &str| "a".to_string();
        let b = |_: &str| "b".to_string();

        assert_eq!(format_with("word_word_word", a, a, ""), "aaa");
        assert_eq!(format_with("word_word_word", a, b, ""), "abb");
        assert_eq!(format_with("word_word_word", a, a, "_"), "a_a_a");
        assert_eq!(format_with("word_word_word", a, b, "_"), "a_b_b");
    }

    #[test]
    fn test_single_word_has_no_separator() {
        assert_eq!(format_with("word", to_upper, to_lower, "::"), "WORD");
        assert_eq!(SNAKE.format("--"), "");
        assert_eq!(KEBAB.format(""), "");
    }

    #[test]
    fn test_presets_are_idempotent() {
        for preset in Preset::ALL {
            let convention = preset.convention();
            for name in NAMES {
                let once = convention.format(name);
                assert_eq!(convention.format(&once), once, "{} of {:?}", convention, name);
            }
        }
    }

    #[test]
    fn test_custom_convention() {
        let dotted = Convention::new("dotted", to_lower, keep, ".".to_string());
        assert_eq!(dotted.name(), "dotted");
        assert_eq!(dotted.separator(), ".");
        assert_eq!(format("ServerHTTPConfig", &dotted), "server.HTTP.Config");
    }

    #[test]
    fn test_join_words() {
        let words = vec!["ip".to_string(), "addr".to_string()];
        assert_eq!(UPPER_MIXED.join(&words), "IpAddr");
        assert_eq!(UPPER_SNAKE.join(&words), "IP_ADDR");
    }

    #[test]
    fn test_case_rule_parsing() {
        assert_eq!("lower".parse::<CaseRule>().unwrap(), CaseRule::Lower);
        assert_eq!("Title".parse::<CaseRule>().unwrap(), CaseRule::Title);
        assert_eq!(
            "sentence".parse::<CaseRule>(),
            Err(Error::UnknownRule("sentence".to_string()))
        );
        assert_eq!((CaseRule::Title.rule())("hELLO"), "Hello");
        assert_eq!((CaseRule::Keep.rule())("hELLO"), "hELLO");
    }
}
