//! Bill entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix of the tag written in front of every appended amendment.
///
/// Decision backends look for it to find prior amendments in the summary.
pub const AMENDMENT_TAG_PREFIX: &str = "[Amendment after round ";

/// A bill moving through the chamber.
///
/// The title is fixed for the run; the summary is an append-only log that
/// grows by one tagged paragraph per amendment. `amendments` holds the same
/// texts untagged and is the only source for counting them, so tag-like text
/// in a source summary never reads as an amendment. `issue_vector` is a
/// legacy field kept for schema compatibility and is never read by any
/// decision policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default)]
    pub issue_vector: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amendments: Vec<String>,
}

impl Bill {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            text_content: None,
            issue_vector: BTreeMap::new(),
            amendments: Vec::new(),
        }
    }

    pub fn with_text_content(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Append an amendment to the summary, tagged with its 0-based round index.
    ///
    /// The tag shows the 1-based round number (`[Amendment after round 1]`).
    /// Tags already leading `text` (a generator echoing the prompt) are
    /// dropped first.
    pub fn append_amendment(&mut self, round_index: usize, text: &str) {
        let text = strip_amendment_tags(text);
        let tagged = format!("{}{}] {}", AMENDMENT_TAG_PREFIX, round_index + 1, text);
        if self.summary.trim().is_empty() {
            self.summary = tagged;
        } else {
            self.summary.push_str("\n\n");
            self.summary.push_str(&tagged);
        }
        self.amendments.push(text.to_string());
    }

    /// Number of amendments appended during the run.
    pub fn amendment_count(&self) -> usize {
        self.amendments.len()
    }
}

fn strip_amendment_tags(text: &str) -> &str {
    let mut rest = text.trim();
    while let Some(after) = rest.strip_prefix(AMENDMENT_TAG_PREFIX) {
        match after.split_once(']') {
            Some((_, tail)) => rest = tail.trim_start(),
            None => break,
        }
    }
    rest
}
