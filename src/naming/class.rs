use unicode_categories::UnicodeCategories;

/// The role a single code point plays in word splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuneClass {
    /// Uppercase letter (Lu)
    Upper,
    /// Lowercase letter (Ll)
    Lower,
    /// Titlecase letter (Lt), e.g. `ǅ`
    Title,
    /// Decimal digit (Nd), or a letter with no case at all (Lm, Lo).
    ///
    /// Caseless letters never start or end a word on their own, they just
    /// extend whatever run they follow, which is exactly how digits behave.
    Digit,
    /// Anything that is not a word character
    Other,
}

impl RuneClass {
    pub fn of(c: char) -> Self {
        if c.is_letter_uppercase() {
            RuneClass::Upper
        } else if c.is_letter_lowercase() {
            RuneClass::Lower
        } else if c.is_letter_titlecase() {
            RuneClass::Title
        } else if c.is_number_decimal_digit() || c.is_letter_modifier() || c.is_letter_other() {
            RuneClass::Digit
        } else {
            RuneClass::Other
        }
    }

    pub fn is_word(self) -> bool {
        self != RuneClass::Other
    }
}
