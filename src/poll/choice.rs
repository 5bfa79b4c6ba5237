use super::{PollChoice, PollContext};
use crate::letters::{is_letter, is_poll_letter, normalize_char, single_char};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Validity of a single poll slot. The first matching rule wins, in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    MissingLetter,
    InvalidLetter,
    AlreadyKnown,
    MissingWord,
    LetterNotInWord,
    TooLong,
    Valid,
}

impl Classification {
    pub fn is_valid(self) -> bool {
        self == Classification::Valid
    }
}

/// Colour hint for the letter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterHint {
    None,
    /// Not a letter, or already revealed
    Rejected,
    /// Occurs in the secret
    Hit,
    Miss,
}

/// Highlight for one character of the answer word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Known,
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedChar {
    pub c: char,
    /// Only set on the first occurrence of a letter within the word, so the
    /// highlighting does not give away how often a letter repeats
    pub highlight: Option<Highlight>,
}

/// Everything derived for one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub classification: Classification,
    pub letter_hint: LetterHint,
    /// Operator feedback, empty when there is nothing to say
    pub message: String,
    /// The alternative as posted, e.g. `(S)onne`
    pub export_text: String,
    pub highlights: Vec<HighlightedChar>,
    pub copy_enabled: bool,
}

/// Classify and render one slot
pub fn classify_choice(choice: &PollChoice, ctx: &PollContext) -> ChoiceView {
    let classification = classification(choice, ctx);
    let letter = choice.normalized_letter();

    let message = match classification {
        Classification::InvalidLetter => format!("\"{}\" ist kein Buchstabe", letter),
        Classification::AlreadyKnown => format!("\"{}\" schon gewählt", letter),
        Classification::LetterNotInWord => format!("\"{}\" nicht im Wort", letter),
        Classification::TooLong => format!(
            "Antwort zu lang ({} Zeichen, max. {})",
            choice.answer_len(),
            ctx.max_answer_chars
        ),
        Classification::MissingLetter | Classification::MissingWord | Classification::Valid => {
            String::new()
        }
    };

    let export_text = if classification == Classification::InvalidLetter {
        choice.answer().to_string()
    } else {
        mark_letter(choice.answer(), &letter)
    };

    ChoiceView {
        classification,
        letter_hint: letter_hint(choice, ctx),
        message,
        export_text,
        highlights: highlight_word(choice.answer(), ctx),
        copy_enabled: classification.is_valid(),
    }
}

fn classification(choice: &PollChoice, ctx: &PollContext) -> Classification {
    if choice.letter.is_empty() {
        return Classification::MissingLetter;
    }
    if !single_char(&choice.letter).is_some_and(is_poll_letter) {
        return Classification::InvalidLetter;
    }
    let letter = choice.normalized_letter();
    if ctx.is_known(&letter) {
        return Classification::AlreadyKnown;
    }
    let word = choice.answer();
    if word.is_empty() {
        return Classification::MissingWord;
    }
    if find_letter(word, &letter).is_none() {
        return Classification::LetterNotInWord;
    }
    if choice.answer_len() > ctx.max_answer_chars {
        return Classification::TooLong;
    }
    Classification::Valid
}

fn letter_hint(choice: &PollChoice, ctx: &PollContext) -> LetterHint {
    if choice.letter.is_empty() {
        return LetterHint::None;
    }
    let letter = choice.normalized_letter();
    let valid = single_char(&choice.letter).is_some_and(is_poll_letter);
    if !valid || ctx.is_known(&letter) {
        LetterHint::Rejected
    } else if ctx.in_secret(&letter) {
        LetterHint::Hit
    } else {
        LetterHint::Miss
    }
}

/// Byte offset and character of the first case-insensitive occurrence of
/// the normalized `letter`.
///
/// Matches whole characters only, so `ﬀ` does not contain `F`.
fn find_letter(word: &str, letter: &str) -> Option<(usize, char)> {
    if letter.is_empty() {
        return None;
    }
    word.char_indices()
        .find(|(_, c)| normalize_char(*c) == letter)
}

/// Wrap the first case-insensitive occurrence of `letter` in parentheses
fn mark_letter(word: &str, letter: &str) -> String {
    match find_letter(word, letter) {
        Some((start, c)) => {
            let end = start + c.len_utf8();
            format!("{}({}){}", &word[..start], c, &word[end..])
        }
        None => word.to_string(),
    }
}

fn highlight_word(word: &str, ctx: &PollContext) -> Vec<HighlightedChar> {
    let mut seen = HashSet::new();
    word.chars()
        .map(|c| {
            let highlight = if is_letter(c) {
                let folded = normalize_char(c);
                if !seen.insert(folded.clone()) {
                    None
                } else if ctx.is_known(&folded) {
                    Some(Highlight::Known)
                } else if ctx.in_secret(&folded) {
                    Some(Highlight::Hit)
                } else {
                    Some(Highlight::Miss)
                }
            } else {
                None
            };
            HighlightedChar { c, highlight }
        })
        .collect()
}
