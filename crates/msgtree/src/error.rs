//! Error types for message lookup.

use thiserror::Error;

/// Why a dot-path did not resolve to message text.
///
/// [`Translator::t`](crate::Translator::t) never surfaces these: it returns
/// the key instead. [`Translator::lookup`](crate::Translator::lookup) exposes
/// them for tooling and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A segment of the path does not exist in the active tree.
    #[error("no message for '{key}': segment '{segment}' not found{}", suggestion_hint(suggestions))]
    MissingKey {
        key: String,
        segment: String,
        suggestions: Vec<String>,
    },

    /// The path ends at a group of messages rather than at text.
    #[error("'{key}' names a group of messages, not message text")]
    NotText { key: String },
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}
