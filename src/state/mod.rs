mod inputs;
mod store;
mod view;

pub use inputs::{HelperInputs, DEFAULT_TAGS, INPUTS_SCHEMA_VERSION};
pub use store::StateStore;
pub use view::HelperView;

use crate::config::{ConfigError, HelperConfig};
use crate::message::LengthEstimator;
use crate::poll::{PollChoice, POLL_SLOTS};

pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("State file error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted structure cannot be used and has to be reset
    #[error("State needs reset: {0}")]
    NeedsReset(String),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything the operator has entered.
///
/// Derived values are never stored here; [`HelperState::view`] recomputes
/// all of them from scratch.
#[derive(Debug, Clone)]
pub struct HelperState {
    pub inputs: HelperInputs,
    pub poll: [PollChoice; POLL_SLOTS],
    estimator: LengthEstimator,
    max_answer_chars: usize,
}

impl HelperState {
    pub fn new(inputs: HelperInputs, config: &HelperConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inputs,
            poll: Default::default(),
            estimator: config.length_estimator()?,
            max_answer_chars: config.max_answer_chars(),
        })
    }

    /// Set a slot's letter from a typed key; other keys are ignored
    pub fn set_choice_letter(&mut self, slot: usize, key: &str) -> bool {
        self.poll
            .get_mut(slot)
            .is_some_and(|choice| choice.accept_key(key))
    }

    pub fn set_choice_word(&mut self, slot: usize, word: impl Into<String>) {
        if let Some(choice) = self.poll.get_mut(slot) {
            choice.word = word.into();
        }
    }

    pub fn clear_poll(&mut self) {
        self.poll.iter_mut().for_each(PollChoice::clear);
    }
}
