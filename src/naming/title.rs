use crate::naming::class::RuneClass;
use crate::naming::push_mapped;
use unicode_categories::UnicodeCategories;

/// Return `word` with the first character mapped to title case and every
/// following character mapped to lower case.
pub fn to_title(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(word.len());
    push_title(&mut result, first);
    for c in chars {
        push_mapped(&mut result, c, c.to_lowercase());
    }
    result
}

/// Push the title case mapping of a single character.
fn push_title(out: &mut String, c: char) {
    if let Some(title) = title_char(c) {
        out.push(title);
        return;
    }

    // Expanding upper case mappings (ß => SS) keep only their first
    // character in upper case: ß => Ss, ﬁ => Fi
    let mut upper = c.to_uppercase().filter(|u| RuneClass::of(*u).is_word());
    match upper.next() {
        Some(head) => {
            out.push(head);
            for tail in upper {
                push_mapped(out, tail, tail.to_lowercase());
            }
        }
        None => out.push(c),
    }
}

/// Characters whose title case differs from their upper case.
fn title_char(c: char) -> Option<char> {
    let title = match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}', // DŽ Dž dž
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}', // LJ Lj lj
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}', // NJ Nj nj
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}', // DZ Dz dz

        // Greek with ypogegrammeni => prosgegrammeni
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)?
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',

        c if c.is_letter_titlecase() => c,
        _ => return None,
    };
    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title() {
        assert_eq!(to_title("WORD"), "Word");
        assert_eq!(to_title("word"), "Word");
        assert_eq!(to_title("Word"), "Word");
        assert_eq!(to_title("w"), "W");
        assert_eq!(to_title(""), "");
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(to_title("ǲord"), "ǲord");
        assert_eq!(to_title("ǳord"), "ǲord");
        assert_eq!(to_title("ǱORD"), "ǲord");
        assert_eq!(to_title("ǉubljana"), "ǈubljana");
        assert_eq!(to_title("ǋ"), "ǋ");
    }

    #[test]
    fn test_expanding_mappings() {
        assert_eq!(to_title("ßig"), "Ssig");
        assert_eq!(to_title("ﬁsh"), "Fish");
    }

    #[test]
    fn test_greek() {
        assert_eq!(to_title("ᾳδης"), "ᾼδης");
        assert_eq!(to_title("ᾀ"), "ᾈ");
        assert_eq!(to_title("ΑΘΗΝΑ"), "Αθηνα");
        assert_eq!(to_title("ΐota"), "Ιota");
        assert_eq!(to_title("xΐ"), "Xΐ");
    }

    #[test]
    fn test_multibyte_rest() {
        assert_eq!(to_title("éCOLE"), "École");
        assert_eq!(to_title("1ÉCOLE"), "1école");
        assert_eq!(to_title("中文"), "中文");
        assert_eq!(to_title("İSTANBUL"), "İstanbul");
        assert_eq!(to_title("xİ"), "Xi");
    }
}
