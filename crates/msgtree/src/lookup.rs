//! Dot-path traversal over a message tree.

use crate::error::LookupError;
use crate::types::{MessageNode, MessageTree};

/// What the traversal is holding after consuming some segments.
enum Held<'t, 'k> {
    Tree(&'t MessageTree),
    Text(&'t str),
    Missing {
        segment: &'k str,
        parent: &'t MessageTree,
    },
}

/// Walk `key` through `tree`, one `.`-separated segment per level.
///
/// Descent stops as soon as the held value is no longer a tree, without
/// consuming the remaining segments. A path that continues past a text leaf
/// therefore resolves to that leaf.
pub(crate) fn resolve_path<'t>(tree: &'t MessageTree, key: &str) -> Result<&'t str, LookupError> {
    let mut held = Held::Tree(tree);

    for segment in key.split('.') {
        let Held::Tree(current) = held else {
            break;
        };
        held = match current.get(segment) {
            Some(MessageNode::Text(text)) => Held::Text(text),
            Some(MessageNode::Tree(subtree)) => Held::Tree(subtree),
            None => Held::Missing {
                segment,
                parent: current,
            },
        };
    }

    match held {
        Held::Text(text) => Ok(text),
        Held::Tree(_) => Err(LookupError::NotText {
            key: key.to_string(),
        }),
        Held::Missing { segment, parent } => Err(LookupError::MissingKey {
            key: key.to_string(),
            segment: segment.to_string(),
            suggestions: compute_suggestions(segment, parent.iter().map(|(name, _)| name.as_str())),
        }),
    }
}

/// Compute "did you mean" suggestions for a key that was not found.
///
/// Returns up to 3 keys within a small edit distance of `target`, closest
/// first. Short keys (three characters or fewer) allow one edit, longer keys
/// allow two.
pub fn compute_suggestions<'a>(
    target: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };

    let mut candidates: Vec<(usize, &str)> = available
        .into_iter()
        .map(|candidate| (strsim::levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
