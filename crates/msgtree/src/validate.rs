//! Cross-language validation of a message table.
//!
//! Every translation is checked against the default language's tree, which
//! defines the set of keys the application looks up.

use serde::Serialize;
use thiserror::Error;

use crate::template::placeholder_names;
use crate::types::{LanguageCode, MessageNode, MessageTable, MessageTree};

/// A problem found while validating a translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableWarning {
    /// Text present in the default language has no translation.
    #[error("'{path}' is not translated in '{language}'")]
    MissingKey { language: LanguageCode, path: String },

    /// Text present in a translation does not exist in the default language.
    #[error("'{path}' in '{language}' does not exist in the default language")]
    UnknownKey { language: LanguageCode, path: String },

    /// One tree has text where the other has a group of messages.
    #[error("'{path}' in '{language}' is text in one language and a group in the other")]
    ShapeMismatch { language: LanguageCode, path: String },

    /// A translation uses a different set of placeholders than the default text.
    #[error(
        "'{path}' in '{language}' has mismatched placeholders (missing: [{}], extra: [{}])",
        missing.join(", "),
        extra.join(", ")
    )]
    PlaceholderMismatch {
        language: LanguageCode,
        path: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    /// A key contains `.` and can never be reached by a dot-path.
    #[error("key '{path}' in '{language}' contains '.' and cannot be looked up")]
    UnreachableKey { language: LanguageCode, path: String },
}

impl TableWarning {
    /// The dot-path the warning is about.
    pub fn path(&self) -> &str {
        match self {
            TableWarning::MissingKey { path, .. }
            | TableWarning::UnknownKey { path, .. }
            | TableWarning::ShapeMismatch { path, .. }
            | TableWarning::PlaceholderMismatch { path, .. }
            | TableWarning::UnreachableKey { path, .. } => path,
        }
    }

    /// The language the warning is about.
    pub fn language(&self) -> LanguageCode {
        match self {
            TableWarning::MissingKey { language, .. }
            | TableWarning::UnknownKey { language, .. }
            | TableWarning::ShapeMismatch { language, .. }
            | TableWarning::PlaceholderMismatch { language, .. }
            | TableWarning::UnreachableKey { language, .. } => *language,
        }
    }
}

/// How much of the default language a translation covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub language: LanguageCode,
    /// Default-language text paths that resolve to text in this language.
    pub translated: usize,
    /// Text paths in the default language.
    pub total: usize,
    /// Default-language text paths without a translation, sorted.
    pub missing: Vec<String>,
}

impl Coverage {
    /// Returns true if every default-language path is translated.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl MessageTable {
    /// Validate the tree for `language` against the default language.
    ///
    /// Returns warnings sorted by path. The default language itself is only
    /// checked for unreachable keys, and a language without a tree yields no
    /// warnings.
    ///
    /// # Example
    ///
    /// ```
    /// use msgtree::{LanguageCode, MessageTable, MessageTree, TableWarning};
    ///
    /// let table = MessageTable::new(
    ///     MessageTree::new()
    ///         .with_text("hello", "Hello")
    ///         .with_text("bye", "Bye"),
    /// )
    /// .with_locale(LanguageCode::Fr, MessageTree::new().with_text("hello", "Bonjour"));
    ///
    /// let warnings = table.validate(LanguageCode::Fr);
    /// assert_eq!(
    ///     warnings,
    ///     vec![TableWarning::MissingKey {
    ///         language: LanguageCode::Fr,
    ///         path: "bye".to_string(),
    ///     }]
    /// );
    /// ```
    pub fn validate(&self, language: LanguageCode) -> Vec<TableWarning> {
        let mut warnings = Vec::new();
        let Some(target) = self.get(language) else {
            return warnings;
        };

        if !language.is_default() {
            compare_trees(self.default_tree(), target, "", language, &mut warnings);
        }
        find_unreachable(target, "", language, &mut warnings);

        warnings.sort_by(|a, b| a.path().cmp(b.path()));
        warnings
    }

    /// Validate every language in the table, default language first.
    pub fn validate_all(&self) -> Vec<TableWarning> {
        self.languages()
            .flat_map(|language| self.validate(language))
            .collect()
    }

    /// Count how many default-language text paths `language` translates.
    ///
    /// A language without a tree translates nothing. Keys containing `.`
    /// cannot be looked up and are not counted.
    pub fn coverage(&self, language: LanguageCode) -> Coverage {
        let mut leaves = Vec::new();
        reachable_leaves(self.default_tree(), &mut Vec::new(), &mut leaves);
        let target = self.get(language);

        let total = leaves.len();
        let mut missing: Vec<String> = leaves
            .into_iter()
            .filter(|segments| {
                target
                    .and_then(|tree| text_at(tree, segments))
                    .is_none()
            })
            .map(|segments| segments.join("."))
            .collect();
        missing.sort();

        Coverage {
            language,
            translated: total - missing.len(),
            total,
            missing,
        }
    }
}

/// Key segments of every text leaf reachable by a dot-path.
///
/// Keys containing `.` are skipped along with everything below them.
fn reachable_leaves<'t>(
    tree: &'t MessageTree,
    prefix: &mut Vec<&'t str>,
    out: &mut Vec<Vec<&'t str>>,
) {
    for (key, node) in tree {
        if key.contains('.') {
            continue;
        }
        prefix.push(key);
        match node {
            MessageNode::Text(_) => out.push(prefix.clone()),
            MessageNode::Tree(subtree) => reachable_leaves(subtree, prefix, out),
        }
        prefix.pop();
    }
}

/// Text stored under the exact key `segments`, one key per level.
fn text_at<'t>(tree: &'t MessageTree, segments: &[&str]) -> Option<&'t str> {
    let (last, parents) = segments.split_last()?;
    let mut current = tree;
    for segment in parents {
        current = current.get(segment)?.as_tree()?;
    }
    current.get(last)?.as_text()
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Every text path at or below `node`, which lives at `path`.
fn text_paths(node: &MessageNode, path: &str) -> Vec<String> {
    match node {
        MessageNode::Text(_) => vec![path.to_string()],
        MessageNode::Tree(tree) => tree
            .paths()
            .into_iter()
            .map(|child| join_path(path, &child))
            .collect(),
    }
}

fn compare_trees(
    source: &MessageTree,
    target: &MessageTree,
    prefix: &str,
    language: LanguageCode,
    warnings: &mut Vec<TableWarning>,
) {
    for (key, source_node) in source {
        let path = join_path(prefix, key);
        match (source_node, target.get(key)) {
            (_, None) => {
                warnings.extend(
                    text_paths(source_node, &path)
                        .into_iter()
                        .map(|path| TableWarning::MissingKey { language, path }),
                );
            }
            (MessageNode::Text(source_text), Some(MessageNode::Text(target_text))) => {
                compare_placeholders(source_text, target_text, path, language, warnings);
            }
            (MessageNode::Tree(source_tree), Some(MessageNode::Tree(target_tree))) => {
                compare_trees(source_tree, target_tree, &path, language, warnings);
            }
            (_, Some(_)) => warnings.push(TableWarning::ShapeMismatch { language, path }),
        }
    }

    for (key, target_node) in target {
        if source.get(key).is_none() {
            let path = join_path(prefix, key);
            warnings.extend(
                text_paths(target_node, &path)
                    .into_iter()
                    .map(|path| TableWarning::UnknownKey { language, path }),
            );
        }
    }
}

fn compare_placeholders(
    source_text: &str,
    target_text: &str,
    path: String,
    language: LanguageCode,
    warnings: &mut Vec<TableWarning>,
) {
    let expected = placeholder_names(source_text);
    let actual = placeholder_names(target_text);
    if expected == actual {
        return;
    }

    warnings.push(TableWarning::PlaceholderMismatch {
        language,
        path,
        missing: expected
            .difference(&actual)
            .map(|name| (*name).to_string())
            .collect(),
        extra: actual
            .difference(&expected)
            .map(|name| (*name).to_string())
            .collect(),
    });
}

fn find_unreachable(
    tree: &MessageTree,
    prefix: &str,
    language: LanguageCode,
    warnings: &mut Vec<TableWarning>,
) {
    for (key, node) in tree {
        let path = join_path(prefix, key);
        if key.contains('.') {
            warnings.push(TableWarning::UnreachableKey {
                language,
                path: path.clone(),
            });
        }
        if let MessageNode::Tree(subtree) = node {
            find_unreachable(subtree, &path, language, warnings);
        }
    }
}
