//! The four-alternative letter poll.
//!
//! Each slot offers one letter together with a word containing it. Slots are
//! classified independently ([`classify_choice`]); cross-slot problems such
//! as a letter offered twice are reported by [`summarize`].

mod choice;
mod summary;

pub use choice::{classify_choice, Classification, ChoiceView, Highlight, HighlightedChar, LetterHint};
pub use summary::{summarize, PollSummary, PollWarning};

use crate::letters::{is_poll_letter, normalize, single_char, KnownLetters};
use serde::{Deserialize, Serialize};

/// Number of alternatives a poll offers
pub const POLL_SLOTS: usize = 4;

/// Longest alternative the platform accepts
pub const MAX_ALTERNATIVE_CHARS: usize = 50;

/// Parentheses added around the guessed letter
pub const LETTER_MARK_CHARS: usize = 2;

/// Longest answer word that still fits an alternative
pub const MAX_ANSWER_CHARS: usize = MAX_ALTERNATIVE_CHARS - LETTER_MARK_CHARS;

/// The game state a poll is checked against
#[derive(Debug, Clone)]
pub struct PollContext {
    pub known: KnownLetters,
    /// Normalized, trimmed secret phrase
    pub secret: String,
    pub max_answer_chars: usize,
}

impl PollContext {
    pub fn new(secret: &str, known: &str) -> Self {
        Self {
            known: KnownLetters::parse(known),
            secret: normalize(secret.trim()),
            max_answer_chars: MAX_ANSWER_CHARS,
        }
    }

    pub fn with_max_answer_chars(mut self, max_answer_chars: usize) -> Self {
        self.max_answer_chars = max_answer_chars;
        self
    }

    /// Whether the normalized letter occurs in the secret
    pub fn in_secret(&self, letter: &str) -> bool {
        !letter.is_empty() && self.secret.contains(letter)
    }

    pub fn is_known(&self, letter: &str) -> bool {
        self.known.contains_all(letter)
    }
}

/// One poll alternative as entered by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollChoice {
    /// Zero or one character; anything else is reported as invalid
    pub letter: String,
    pub word: String,
}

impl PollChoice {
    pub fn new(letter: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            word: word.into(),
        }
    }

    /// Take a typed key as the new letter.
    ///
    /// Only keys from the poll alphabet are accepted, stored in normalized
    /// form. Returns whether the letter changed.
    pub fn accept_key(&mut self, key: &str) -> bool {
        match single_char(key) {
            Some(c) if is_poll_letter(c) => {
                let letter = normalize(key);
                let changed = self.letter != letter;
                self.letter = letter;
                changed
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.letter.clear();
        self.word.clear();
    }

    pub fn normalized_letter(&self) -> String {
        normalize(&self.letter)
    }

    /// Trimmed answer word
    pub fn answer(&self) -> &str {
        self.word.trim()
    }

    pub fn answer_len(&self) -> usize {
        self.answer().chars().count()
    }
}
