//! Symptom suggestion list with a fixed-size guarantee.

use serde::Serialize;

/// Number of suggestions every response carries, no more, no less.
pub const SUGGESTION_COUNT: usize = 10;

/// Generic symptoms merged in when the corrective request cannot be decoded.
pub const COMMON_SYMPTOMS: [&str; 5] = [
    "fatigue (feeling very tired)",
    "fever (elevated temperature)",
    "pain (general discomfort)",
    "weakness (reduced strength)",
    "dizziness (light headed feeling)",
];

/// Canned suggestions used when the completion service gives nothing usable.
/// The caller's raw input leads the list so the user can always pick what
/// they actually typed.
const FALLBACK_TAIL: [&str; 9] = [
    "fever (high temperature)",
    "pain (general discomfort)",
    "fatigue (feeling tired)",
    "headache (head pain)",
    "nausea (feeling sick)",
    "dizziness (light headed)",
    "weakness (reduced strength)",
    "chills (feeling cold)",
    "sweating (excess moisture)",
];

/// Exactly [`SUGGESTION_COUNT`] symptom suggestions.
///
/// The wire format is a bare JSON array of strings, each shaped
/// `"symptom (brief description)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestionList(Vec<String>);

impl SuggestionList {
    /// Builds the canned list for `input`, used when no upstream reply
    /// could be decoded at all.
    pub fn fallback(input: &str) -> Self {
        Self(fallback_entries(input))
    }

    /// Completes a possibly short or overlong candidate list to exactly
    /// [`SUGGESTION_COUNT`] entries.
    ///
    /// Shortfalls are padded from the canned list, skipping entries already
    /// present; overlong lists are truncated. The first entries of the
    /// candidate list always survive, so upstream relevance ordering is
    /// preserved.
    pub fn from_partial(mut entries: Vec<String>, input: &str) -> Self {
        if entries.len() < SUGGESTION_COUNT {
            merge_unique(&mut entries, fallback_entries(input));
        }
        entries.truncate(SUGGESTION_COUNT);
        Self(entries)
    }

    /// The suggestions in order of relevance.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the inner vector.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Number of suggestions. Always [`SUGGESTION_COUNT`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty. Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Appends each candidate not already present, preserving order.
pub fn merge_unique<I>(entries: &mut Vec<String>, candidates: I)
where
    I: IntoIterator<Item = String>,
{
    for candidate in candidates {
        if !entries.contains(&candidate) {
            entries.push(candidate);
        }
    }
}

fn fallback_entries(input: &str) -> Vec<String> {
    let mut entries = Vec::with_capacity(SUGGESTION_COUNT);
    entries.push(format!("{input} (main symptom)"));
    entries.extend(FALLBACK_TAIL.iter().map(|s| s.to_string()));
    entries
}
