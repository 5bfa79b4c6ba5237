//! Secret masking: the public transcript and letter statistics.

use crate::letters::{is_letter, normalize, normalize_char, KnownLetters};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Substituted for every letter that has not been revealed yet
pub const MASK_GLYPH: char = '␣';

/// Emitted for every whitespace character of the secret.
///
/// A run of plain spaces keeps word gaps wider than a single mask glyph, and
/// survives renderers that would collapse an em space.
pub const WIDE_SPACE: &str = "   ";

/// Occurrence count of one letter in the secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
    /// The letter has already been revealed
    pub seen: bool,
}

/// Everything derived from the secret phrase and the known letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskOutput {
    pub transcript: String,
    /// Sorted by code point
    pub frequencies: Vec<LetterCount>,
    /// Known letters that do not occur in the secret, in input order
    pub missing_letters: Vec<char>,
}

impl MaskOutput {
    /// Missing letters as shown in the post, e.g. `X, Y`
    pub fn missing_list(&self) -> String {
        self.missing_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of letters in the secret
    pub fn letter_total(&self) -> usize {
        self.frequencies.iter().map(|f| f.count).sum()
    }
}

/// Mask `secret`, revealing only the letters in `known`.
///
/// Both inputs are trimmed first. Revealed letters keep the case they were
/// typed with; punctuation and digits pass through.
pub fn mask_secret(secret: &str, known: &str) -> MaskOutput {
    let secret = secret.trim();
    let known_raw = known.trim();
    let known = KnownLetters::parse(known_raw);

    let mut transcript = String::with_capacity(secret.len());
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();

    for c in secret.chars() {
        if c.is_whitespace() {
            transcript.push_str(WIDE_SPACE);
        } else if is_letter(c) {
            let folded = normalize_char(c);
            for letter in folded.chars().filter(|l| is_letter(*l)) {
                *counts.entry(letter).or_insert(0) += 1;
            }
            if known.contains_all(&folded) {
                transcript.push(c);
            } else {
                transcript.push(MASK_GLYPH);
            }
        } else {
            transcript.push(c);
        }
    }

    let frequencies = counts
        .into_iter()
        .map(|(letter, count)| LetterCount {
            letter,
            count,
            seen: known.contains(letter),
        })
        .collect();

    let normalized_secret = normalize(secret);
    let missing_letters = normalize(known_raw)
        .chars()
        .filter(|c| is_letter(*c) && !normalized_secret.contains(*c))
        .collect();

    MaskOutput {
        transcript,
        frequencies,
        missing_letters,
    }
}
