//! Letter normalization and alphabet classification.
//!
//! Every letter comparison in the crate goes through [`normalize`] on both
//! operands. Case folding is upper-case, German style, except that `ß` stays
//! `ß`: it is neither expanded to `SS` nor replaced by the capital `ẞ`,
//! which still renders poorly in many fonts.

use std::collections::BTreeSet;

/// Placeholder used to carry `ß` through upper-casing
const SHARP_S_PLACEHOLDER: char = 'ẞ';

/// Poll letters beyond ASCII A-Z, in both cases
const POLL_UMLAUTS: &str = "ÄÖÜäöüßẞ";

/// Upper-case `text`, keeping `ß` as a single character
pub fn normalize(text: &str) -> String {
    text.replace('ß', SHARP_S_PLACEHOLDER.encode_utf8(&mut [0u8; 4]))
        .to_uppercase()
        .replace(SHARP_S_PLACEHOLDER, "ß")
}

/// Normalize a single character
pub fn normalize_char(c: char) -> String {
    let mut buf = [0u8; 4];
    normalize(c.encode_utf8(&mut buf))
}

/// Whether `c` counts as a letter of the secret phrase
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Whether `c` belongs to the poll alphabet (A-Z, Ä, Ö, Ü, ß), ignoring case
pub fn is_poll_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || POLL_UMLAUTS.contains(c)
}

/// Returns the only character of `text`, if it has exactly one
pub fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// The set of revealed letters, built from free-form text.
///
/// Only letters count; separators such as `,` or spaces are ignored, and
/// repeating a letter has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLetters {
    letters: BTreeSet<char>,
}

impl KnownLetters {
    pub fn parse(raw: &str) -> Self {
        let letters = normalize(raw.trim())
            .chars()
            .filter(|c| is_letter(*c))
            .collect();
        Self { letters }
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Whether every character of the normalized `text` is known
    pub fn contains_all(&self, normalized: &str) -> bool {
        !normalized.is_empty() && normalized.chars().all(|c| self.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_german() {
        assert_eq!(normalize("schöne grüße"), "SCHÖNE GRÜßE");
        assert_eq!(normalize("äöü"), "ÄÖÜ");
    }

    #[test]
    fn test_normalize_keeps_sharp_s() {
        assert_eq!(normalize("ß"), "ß");
        assert_eq!(normalize("Straße"), "STRAßE");
        // The capital form folds to the plain one
        assert_eq!(normalize("STRAẞE"), "STRAßE");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["Schöne Grüße", "ẞß ss SS", "123 !?", "", "ǆ ŉ ﬀ", "Ärger über Öl"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_poll_letters() {
        for c in ['a', 'Z', 'ä', 'Ö', 'ü', 'ß', 'ẞ'] {
            assert!(is_poll_letter(c), "{c:?} should be a poll letter");
        }
        // Dotless i and long s upper-case into A-Z but are not poll letters
        for c in ['1', '!', ' ', 'é', 'ø', 'Ω', 'ı', 'ſ', 'ﬀ'] {
            assert!(!is_poll_letter(c), "{c:?} should not be a poll letter");
        }
    }

    #[test]
    fn test_known_letters_ignore_separators() {
        let known = KnownLetters::parse(" s, c ,s ");
        assert_eq!(known.len(), 2);
        assert!(known.contains('S'));
        assert!(known.contains('C'));
        assert!(!known.contains(','));
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("a"), Some('a'));
        assert_eq!(single_char(""), None);
        assert_eq!(single_char("ab"), None);
    }
}
