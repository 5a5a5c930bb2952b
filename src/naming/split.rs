use crate::naming::class::RuneClass;

/// Split `name` into distinct words.
///
/// Unicode letters and digits are word characters, every other character is
/// thrown out. Words are split:
/// - at non-word characters: `word_word` => `word`, `word`
/// - before an upper case character that follows a lower case character or
///   a digit: `wordWord` => `word`, `Word`
/// - before the last upper case character of a run of two or more when it is
///   followed by a lower case character: `WORDWord` => `WORD`, `Word`
///
/// The result is never empty. A name without any word characters splits
/// into a single empty word.
pub fn split(name: &str) -> Vec<String> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return vec![String::new()],
        (Some(c), None) => {
            return if RuneClass::of(c).is_word() {
                vec![name.to_string()]
            } else {
                vec![String::new()]
            };
        }
        _ => {}
    }

    let words = Splitter::default().run(name);
    if words.is_empty() {
        vec![String::new()]
    } else {
        words
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    /// Between words, or before the first one
    #[default]
    Boundary,
    /// The buffer holds exactly one upper case character
    WordStart,
    /// The buffer ends in a lower case character or a digit
    Word,
    /// The buffer ends in two or more upper case characters
    Acronym,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Skip,
    Append,
    /// Emit the buffer as a word
    Finish,
    /// Emit the buffer, then start a new word with the current character
    FinishAndStart,
    /// Move the last buffered character into a new word with the current one
    SplitBeforeLast,
}

fn transition(mode: Mode, class: RuneClass) -> (Mode, Action) {
    use Action::*;
    use RuneClass::*;

    match (mode, class) {
        (Mode::Boundary, Other) => (Mode::Boundary, Skip),
        (_, Other) => (Mode::Boundary, Finish),

        (Mode::Boundary, Upper) => (Mode::WordStart, Append),
        (Mode::Boundary, _) => (Mode::Word, Append),

        (Mode::WordStart, Upper) => (Mode::Acronym, Append),
        (Mode::WordStart, Lower | Digit) => (Mode::Word, Append),

        (Mode::Word, Upper) => (Mode::WordStart, FinishAndStart),
        (Mode::Word, Lower | Digit) => (Mode::Word, Append),

        (Mode::Acronym, Upper | Digit) => (Mode::Acronym, Append),
        (Mode::Acronym, Lower) => (Mode::Word, SplitBeforeLast),

        // A title case character can never continue a word
        (_, Title) => (Mode::Word, FinishAndStart),
    }
}

#[derive(Debug, Default)]
struct Splitter {
    mode: Mode,
    buffer: Vec<char>,
    words: Vec<String>,
}

impl Splitter {
    fn run(mut self, name: &str) -> Vec<String> {
        for c in name.chars() {
            self.step(c, RuneClass::of(c));
        }
        // Flush whatever is left as if a non-word character followed
        self.step(' ', RuneClass::Other);
        log::trace!("split {:?} into {:?}", name, self.words);
        self.words
    }

    fn step(&mut self, c: char, class: RuneClass) {
        let (mode, action) = transition(self.mode, class);
        match action {
            Action::Skip => {}
            Action::Append => self.buffer.push(c),
            Action::Finish => self.finish_word(),
            Action::FinishAndStart => {
                self.finish_word();
                self.buffer.push(c);
            }
            Action::SplitBeforeLast => self.split_before_last(c),
        }
        self.mode = mode;
    }

    fn split_before_last(&mut self, c: char) {
        match self.buffer.pop() {
            Some(last) if RuneClass::of(last) == RuneClass::Upper => {
                self.finish_word();
                self.buffer.push(last);
            }
            // Acronym ended in a digit, there is no upper case character to move
            Some(last) => {
                self.buffer.push(last);
                self.finish_word();
            }
            None => {}
        }
        self.buffer.push(c);
    }

    fn finish_word(&mut self) {
        if !self.buffer.is_empty() {
            self.words.push(self.buffer.drain(..).collect());
        }
    }
}
