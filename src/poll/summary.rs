use super::{PollChoice, PollContext};
use crate::letters::{is_poll_letter, single_char};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A consistency problem spanning several slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PollWarning {
    /// Named once per repeated slot
    RepeatedLetter { letter: String },
    /// Every slot offers a letter that cannot win
    NoCorrectChoice,
    AnswerTooLong { longest: usize, limit: usize },
}

impl fmt::Display for PollWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollWarning::RepeatedLetter { letter } => {
                write!(f, "\"{}\" mehrfach gewählt!", letter)
            }
            PollWarning::NoCorrectChoice => write!(f, "Keine richtige Wahlmöglichkeit!"),
            PollWarning::AnswerTooLong { longest, limit } => {
                write!(f, "Antwort zu lang: {} Zeichen (max. {})!", longest, limit)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSummary {
    pub warnings: Vec<PollWarning>,
}

impl PollSummary {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// All warnings on one line
    pub fn text(&self) -> String {
        self.warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Cross-check all slots
pub fn summarize(choices: &[PollChoice], ctx: &PollContext) -> PollSummary {
    let mut warnings = Vec::new();

    let letters: Vec<String> = choices.iter().map(PollChoice::normalized_letter).collect();
    for (i, letter) in letters.iter().enumerate().skip(1) {
        if !letter.is_empty() && letters[..i].contains(letter) {
            warnings.push(PollWarning::RepeatedLetter {
                letter: letter.clone(),
            });
        }
    }

    let all_hopeless = !choices.is_empty()
        && choices.iter().zip(&letters).all(|(choice, letter)| {
            single_char(&choice.letter).is_some_and(is_poll_letter)
                && !ctx.is_known(letter)
                && !ctx.in_secret(letter)
        });
    if all_hopeless {
        warnings.push(PollWarning::NoCorrectChoice);
    }

    let longest = choices.iter().map(PollChoice::answer_len).max().unwrap_or(0);
    if longest > ctx.max_answer_chars {
        warnings.push(PollWarning::AnswerTooLong {
            longest,
            limit: ctx.max_answer_chars,
        });
    }

    PollSummary { warnings }
}
