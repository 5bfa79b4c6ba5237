use super::HelperState;
use crate::clipboard::{import_poll, Clipboard, ClipboardError, ImportError};
use crate::mask::{mask_secret, LetterCount};
use crate::message::{compose, missing_annotation};
use crate::poll::{classify_choice, summarize, ChoiceView, PollContext, PollSummary, POLL_SLOTS};
use serde::{Deserialize, Serialize};

/// All derived values for the current inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperView {
    pub transcript: String,
    pub frequencies: Vec<LetterCount>,
    /// e.g. `P, Ä, T`
    pub missing_letters: String,
    /// The post, ready to copy
    pub message: String,
    /// Post length as the platform will count it
    pub estimated_length: usize,
    pub choices: Vec<ChoiceView>,
    pub summary: PollSummary,
}

impl HelperState {
    /// Recompute everything from the current inputs
    pub fn view(&self) -> HelperView {
        let inputs = &self.inputs;
        let masked = mask_secret(&inputs.secret, &inputs.letters);
        let missing_letters = masked.missing_list();

        let message = compose([
            inputs.tags.as_str(),
            inputs.prefix.as_str(),
            masked.transcript.as_str(),
            missing_annotation(&inputs.missing, &missing_letters).as_str(),
            inputs.suffix.as_str(),
            inputs.poll_heading.as_str(),
        ]);
        let estimated_length = self.estimator.estimate(&message);

        let ctx = PollContext::new(&inputs.secret, &inputs.letters)
            .with_max_answer_chars(self.max_answer_chars);
        let choices = self
            .poll
            .iter()
            .map(|choice| classify_choice(choice, &ctx))
            .collect();
        let summary = summarize(&self.poll, &ctx);

        tracing::debug!(
            "Recomputed view: {} letters, {} chars, {} poll warnings",
            masked.letter_total(),
            estimated_length,
            summary.warnings.len()
        );

        HelperView {
            transcript: masked.transcript,
            frequencies: masked.frequencies,
            missing_letters,
            message,
            estimated_length,
            choices,
            summary,
        }
    }

    /// Replace the poll heading and answers with pasted text
    pub fn import_poll_from(&mut self, clipboard: &dyn Clipboard) -> Result<(), ImportError> {
        let text = clipboard.read_text()?;
        let imported = import_poll(&text)?;
        tracing::debug!("Imported poll with heading {:?}", imported.heading);

        self.inputs.poll_heading = imported.heading;
        self.poll = imported.choices;
        Ok(())
    }

    /// Copy the composed post
    pub fn copy_message_to(&self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.view().message)
    }

    /// Copy one alternative in posted form and return the copied text.
    ///
    /// Refuses with `None`, leaving the clipboard alone, unless the slot is
    /// valid.
    pub fn copy_choice_to(
        &self,
        slot: usize,
        clipboard: &dyn Clipboard,
    ) -> Result<Option<String>, ClipboardError> {
        if slot >= POLL_SLOTS {
            return Ok(None);
        }
        let view = self.view();
        let choice = &view.choices[slot];
        if !choice.copy_enabled {
            return Ok(None);
        }
        clipboard.write_text(&choice.export_text)?;
        Ok(Some(choice.export_text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::HelperConfig;
    use crate::poll::{Classification, PollWarning};
    use crate::state::HelperInputs;

    fn state(inputs: HelperInputs) -> HelperState {
        HelperState::new(inputs, &HelperConfig::default()).unwrap()
    }

    #[test]
    fn test_example_view() {
        let view = state(HelperInputs::example()).view();

        assert_eq!(view.transcript, "S␣␣ö␣e   ␣r␣␣e");
        assert_eq!(view.missing_letters, "P, Ä, T");
        assert_eq!(
            view.message,
            "@galgodon@fedigroups.social #galgenmasto #galgenfedi\n\n\
             Das R habt Ihr also gewählt.\nDas ist ein Treffer.\n\n\
             S␣␣ö␣e   ␣r␣␣e\n\n\
             Nicht vorhanden: P, Ä, T\n\n\
             (6 + 5 Zeichen; ÄÖÜß nicht aufgelöst)"
        );
        let mention = "@galgodon@fedigroups.social".chars().count() - "@galgodon".chars().count();
        assert_eq!(view.estimated_length, view.message.chars().count() - mention);
        assert_eq!(view.choices.len(), POLL_SLOTS);
        assert!(view
            .choices
            .iter()
            .all(|c| c.classification == Classification::MissingLetter));
        assert!(view.summary.is_clean());
    }

    #[test]
    fn test_cleared_view_is_only_tags() {
        let view = state(HelperInputs::cleared()).view();
        assert_eq!(view.message, crate::state::DEFAULT_TAGS);
        assert!(view.frequencies.is_empty());
    }

    #[test]
    fn test_missing_label_without_missing_letters() {
        let inputs = HelperInputs {
            letters: "s".to_string(),
            ..HelperInputs::example()
        };
        let view = state(inputs).view();
        assert!(!view.message.contains("Nicht vorhanden"));
    }

    #[test]
    fn test_poll_heading_is_last_segment() {
        let inputs = HelperInputs {
            poll_heading: "Welcher Buchstabe?".to_string(),
            ..HelperInputs::example()
        };
        let view = state(inputs).view();
        assert!(view.message.ends_with("aufgelöst)\n\nWelcher Buchstabe?"));
    }

    #[test]
    fn test_view_follows_letter_changes() {
        let mut state = state(HelperInputs::example());
        state.set_choice_letter(0, "h");
        state.set_choice_word(0, "Haus");
        assert_eq!(state.view().choices[0].classification, Classification::Valid);

        state.inputs.letters.push('h');
        assert_eq!(
            state.view().choices[0].classification,
            Classification::AlreadyKnown
        );
    }

    #[test]
    fn test_summary_flags_repeats() {
        let mut state = state(HelperInputs::example());
        for (slot, (key, word)) in [("a", "Apfel"), ("b", "Bus"), ("a", "Ast"), ("c", "Cent")]
            .into_iter()
            .enumerate()
        {
            state.set_choice_letter(slot, key);
            state.set_choice_word(slot, word);
        }
        assert_eq!(
            state.view().summary.warnings,
            vec![PollWarning::RepeatedLetter {
                letter: "A".to_string()
            }]
        );
    }

    #[test]
    fn test_copy_choice_only_when_valid() {
        let mut state = state(HelperInputs::example());
        let clipboard = MemoryClipboard::default();
        state.set_choice_letter(0, "n");
        state.set_choice_word(0, "Sonne");
        state.set_choice_letter(1, "e");
        state.set_choice_word(1, "Esel");

        assert_eq!(
            state.copy_choice_to(0, &clipboard).unwrap().as_deref(),
            Some("So(n)ne")
        );
        assert_eq!(clipboard.content(), "So(n)ne");

        assert_eq!(state.copy_choice_to(1, &clipboard).unwrap(), None);
        assert_eq!(state.copy_choice_to(POLL_SLOTS, &clipboard).unwrap(), None);
        assert_eq!(clipboard.content(), "So(n)ne");
    }

    #[test]
    fn test_copy_message() {
        let state = state(HelperInputs::cleared());
        let clipboard = MemoryClipboard::default();
        state.copy_message_to(&clipboard).unwrap();
        assert_eq!(clipboard.content(), crate::state::DEFAULT_TAGS);
    }

    #[test]
    fn test_import_poll_from_clipboard() {
        let mut state = state(HelperInputs::example());
        let clipboard = MemoryClipboard::new("Was fehlt?\n(H)aus\nMaus\n(N)ase\nHo(f)\n");

        state.import_poll_from(&clipboard).unwrap();

        assert_eq!(state.inputs.poll_heading, "Was fehlt?");
        assert_eq!(state.poll[1].word, "Maus");
        let view = state.view();
        assert_eq!(view.choices[0].classification, Classification::Valid);
        assert_eq!(view.choices[1].classification, Classification::MissingLetter);
        assert!(view.message.ends_with("Was fehlt?"));
    }

    #[test]
    fn test_import_keeps_state_on_short_paste() {
        let mut state = state(HelperInputs::example());
        state.set_choice_word(0, "Sonne");
        let clipboard = MemoryClipboard::new("nur\nzwei");

        let result = state.import_poll_from(&clipboard);
        assert_eq!(result, Err(ImportError::TooFewLines { found: 2 }));
        assert_eq!(state.poll[0].word, "Sonne");
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn read_text(&self) -> Result<String, ClipboardError> {
            Err(ClipboardError::PermissionDenied)
        }

        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::PermissionDenied)
        }
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let mut state = state(HelperInputs::example());
        assert_eq!(
            state.import_poll_from(&DeniedClipboard),
            Err(ImportError::Clipboard(ClipboardError::PermissionDenied))
        );
        assert_eq!(
            state.copy_message_to(&DeniedClipboard),
            Err(ClipboardError::PermissionDenied)
        );
    }
}
