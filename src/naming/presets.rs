use crate::naming::{to_lower, to_title, to_upper, Convention};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// flatcase
pub static FLAT: Convention = Convention::preset("flatcase", to_lower, to_lower, "");
/// UPPERCASE
pub static UPPER: Convention = Convention::preset("UPPERCASE", to_upper, to_upper, "");
/// mixedCase
pub static MIXED: Convention = Convention::preset("mixedCase", to_lower, to_title, "");
/// MixedCase
pub static UPPER_MIXED: Convention = Convention::preset("MixedCase", to_title, to_title, "");
/// snake_case
pub static SNAKE: Convention = Convention::preset("snake_case", to_lower, to_lower, "_");
/// SNAKE_CASE
pub static UPPER_SNAKE: Convention = Convention::preset("SNAKE_CASE", to_upper, to_upper, "_");
/// kebab-case
pub static KEBAB: Convention = Convention::preset("kebab-case", to_lower, to_lower, "-");

/// The built-in naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Flat,
    Upper,
    Mixed,
    UpperMixed,
    Snake,
    UpperSnake,
    Kebab,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Flat,
        Preset::Upper,
        Preset::Mixed,
        Preset::UpperMixed,
        Preset::Snake,
        Preset::UpperSnake,
        Preset::Kebab,
    ];

    pub fn convention(self) -> &'static Convention {
        match self {
            Preset::Flat => &FLAT,
            Preset::Upper => &UPPER,
            Preset::Mixed => &MIXED,
            Preset::UpperMixed => &UPPER_MIXED,
            Preset::Snake => &SNAKE,
            Preset::UpperSnake => &UPPER_SNAKE,
            Preset::Kebab => &KEBAB,
        }
    }

    /// Short, case-insensitive name accepted on the command line
    pub fn alias(self) -> &'static str {
        match self {
            Preset::Flat => "flat",
            Preset::Upper => "upper",
            Preset::Mixed => "mixed",
            Preset::UpperMixed => "upper-mixed",
            Preset::Snake => "snake",
            Preset::UpperSnake => "upper-snake",
            Preset::Kebab => "kebab",
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Accepts the exact convention name (`snake_case`, `SNAKE_CASE`) or a
    /// case-insensitive alias (`snake`, `upper-snake`, `camel`, `pascal`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(preset) = Self::ALL.iter().find(|p| p.convention().name() == s) {
            return Ok(*preset);
        }

        match s.to_lowercase().replace('_', "-").as_str() {
            "flat" => Ok(Preset::Flat),
            "upper" => Ok(Preset::Upper),
            "mixed" | "camel" => Ok(Preset::Mixed),
            "upper-mixed" | "pascal" => Ok(Preset::UpperMixed),
            "snake" => Ok(Preset::Snake),
            "upper-snake" | "screaming-snake" | "constant" => Ok(Preset::UpperSnake),
            "kebab" => Ok(Preset::Kebab),
            _ => Err(Error::UnknownConvention(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.convention().name())
    }
}
