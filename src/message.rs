//! Post composition and length estimation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Width a link occupies once the platform has shortened it
pub const DEFAULT_URL_LENGTH: usize = 23;

/// Fediverse mentions: `@user@instance` is displayed and counted as `@user`
static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^\w/@])(@[\w.+-]+)@[\w-]+(?:\.[\w-]+)+").expect("valid mention pattern")
});

/// Join the non-empty segments with a blank line between them.
///
/// Segments are trimmed; a segment that is empty after trimming is dropped,
/// so no stray blank lines appear.
pub fn compose<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter_map(|segment| {
            let trimmed = segment.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The "missing letters" line, empty unless both label and list are set
pub fn missing_annotation(label: &str, list: &str) -> String {
    let label = label.trim();
    if label.is_empty() || list.is_empty() {
        String::new()
    } else {
        format!("{} {}", label, list)
    }
}

/// Estimates the displayed length of a post after the platform shortens
/// links and mentions
#[derive(Debug, Clone)]
pub struct LengthEstimator {
    url_pattern: Regex,
    url_length: usize,
}

impl LengthEstimator {
    pub fn new(url_pattern: Regex, url_length: usize) -> Self {
        Self {
            url_pattern,
            url_length,
        }
    }

    /// Count characters after collapsing mentions, then replacing links with
    /// a fixed-width placeholder
    pub fn estimate(&self, message: &str) -> usize {
        let shortened = MENTION_RE.replace_all(message, "$1$2");
        let placeholder = "x".repeat(self.url_length);
        let shortened = self
            .url_pattern
            .replace_all(&shortened, regex::NoExpand(&placeholder));
        shortened.chars().count()
    }
}
