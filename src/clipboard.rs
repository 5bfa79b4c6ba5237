//! Clipboard boundary: the host supplies the capability, the core only
//! parses what is pasted and decides what may be copied.

use crate::letters::{is_poll_letter, normalize, single_char};
use crate::poll::{PollChoice, POLL_SLOTS};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    Unavailable,

    #[error("Clipboard access denied")]
    PermissionDenied,

    #[error("Clipboard error: {0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Expected a heading and {} answers, found only {found} non-empty lines", POLL_SLOTS)]
    TooFewLines { found: usize },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Text clipboard provided by the host
pub trait Clipboard {
    fn read_text(&self) -> Result<String, ClipboardError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(content.into()),
        }
    }

    pub fn content(&self) -> String {
        self.content
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.content
            .lock()
            .map(|c| c.clone())
            .map_err(|e| ClipboardError::Other(e.to_string()))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut content = self
            .content
            .lock()
            .map_err(|e| ClipboardError::Other(e.to_string()))?;
        *content = text.to_string();
        Ok(())
    }
}

/// A poll as pasted: a heading line followed by one line per alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedPoll {
    pub heading: String,
    pub choices: [PollChoice; POLL_SLOTS],
}

/// Parse pasted poll text.
///
/// Blank lines are skipped. Lines after the fourth answer are ignored. An
/// answer already in posted form, like `(S)onne`, also sets the letter.
pub fn import_poll(text: &str) -> Result<ImportedPoll, ImportError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < POLL_SLOTS + 1 {
        return Err(ImportError::TooFewLines { found: lines.len() });
    }
    if lines.len() > POLL_SLOTS + 1 {
        tracing::debug!("Ignoring {} extra pasted lines", lines.len() - POLL_SLOTS - 1);
    }

    let mut choices: [PollChoice; POLL_SLOTS] = Default::default();
    for (choice, line) in choices.iter_mut().zip(&lines[1..]) {
        *choice = parse_answer(line);
    }

    Ok(ImportedPoll {
        heading: lines[0].to_string(),
        choices,
    })
}

fn parse_answer(line: &str) -> PollChoice {
    if let Some(open) = line.find('(') {
        let rest = &line[open + 1..];
        if let Some(close) = rest.find(')') {
            let inner = &rest[..close];
            if single_char(inner).is_some_and(is_poll_letter) {
                let word = format!("{}{}{}", &line[..open], inner, &rest[close + 1..]);
                return PollChoice::new(normalize(inner), word);
            }
        }
    }
    PollChoice::new("", line)
}
