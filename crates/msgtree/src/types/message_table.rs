use std::collections::BTreeMap;
use std::sync::Arc;
use std::{iter, mem};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DEFAULT_LANGUAGE, LanguageCode, MessageTree};

/// Errors that occur while assembling a [`MessageTable`] from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table has no tree for the default language.
    #[error("message table has no entry for default language '{}'", DEFAULT_LANGUAGE)]
    MissingDefault,
}

/// Message trees keyed by language.
///
/// The default language always has a tree: the only constructor takes it,
/// and deserialization rejects tables without it. Other languages are
/// optional and are added before the table is handed to a
/// [`Translator`](crate::Translator).
///
/// # Example
///
/// ```
/// use msgtree::{LanguageCode, MessageTable, MessageTree};
///
/// let table = MessageTable::new(MessageTree::new().with_text("hello", "Hello"))
///     .with_locale(LanguageCode::Fr, MessageTree::new().with_text("hello", "Bonjour"));
///
/// assert!(table.contains(LanguageCode::Fr));
/// assert!(!table.contains(LanguageCode::De));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<LanguageCode, MessageTree>",
    into = "BTreeMap<LanguageCode, MessageTree>"
)]
pub struct MessageTable {
    default: Arc<MessageTree>,
    translations: BTreeMap<LanguageCode, Arc<MessageTree>>,
}

impl MessageTable {
    /// Create a table from the default language's tree.
    pub fn new(default: MessageTree) -> Self {
        Self {
            default: Arc::new(default),
            translations: BTreeMap::new(),
        }
    }

    /// Add a tree for `language`, returning the table for chaining.
    pub fn with_locale(mut self, language: LanguageCode, tree: MessageTree) -> Self {
        self.insert(language, tree);
        self
    }

    /// Set the tree for `language`, returning the tree it replaced.
    ///
    /// Inserting the default language replaces the default tree.
    pub fn insert(&mut self, language: LanguageCode, tree: MessageTree) -> Option<Arc<MessageTree>> {
        if language.is_default() {
            Some(mem::replace(&mut self.default, Arc::new(tree)))
        } else {
            self.translations.insert(language, Arc::new(tree))
        }
    }

    /// The default language's tree.
    pub fn default_tree(&self) -> &MessageTree {
        &self.default
    }

    /// The tree for `language`, if the table has one.
    pub fn get(&self, language: LanguageCode) -> Option<&MessageTree> {
        self.shared(language).map(|tree| &**tree)
    }

    /// Returns true if the table has a tree for `language`.
    pub fn contains(&self, language: LanguageCode) -> bool {
        language.is_default() || self.translations.contains_key(&language)
    }

    /// Languages with a tree, default language first.
    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        iter::once(DEFAULT_LANGUAGE).chain(self.translations.keys().copied())
    }

    /// Number of languages in the table, including the default.
    pub fn len(&self) -> usize {
        self.translations.len() + 1
    }

    /// A table always holds the default tree.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pick the tree used for `language`: its own, or the default one.
    ///
    /// Returns the language whose tree was chosen alongside the tree.
    pub(crate) fn resolve(&self, language: LanguageCode) -> (LanguageCode, Arc<MessageTree>) {
        match self.shared(language) {
            Some(tree) => (language, Arc::clone(tree)),
            None => (DEFAULT_LANGUAGE, Arc::clone(&self.default)),
        }
    }

    fn shared(&self, language: LanguageCode) -> Option<&Arc<MessageTree>> {
        if language.is_default() {
            Some(&self.default)
        } else {
            self.translations.get(&language)
        }
    }
}

impl TryFrom<BTreeMap<LanguageCode, MessageTree>> for MessageTable {
    type Error = TableError;

    fn try_from(mut trees: BTreeMap<LanguageCode, MessageTree>) -> Result<Self, Self::Error> {
        let default = trees
            .remove(&DEFAULT_LANGUAGE)
            .ok_or(TableError::MissingDefault)?;
        Ok(Self {
            default: Arc::new(default),
            translations: trees
                .into_iter()
                .map(|(language, tree)| (language, Arc::new(tree)))
                .collect(),
        })
    }
}

impl From<MessageTable> for BTreeMap<LanguageCode, MessageTree> {
    fn from(table: MessageTable) -> Self {
        iter::once((DEFAULT_LANGUAGE, table.default))
            .chain(table.translations)
            .map(|(language, tree)| (language, Arc::unwrap_or_clone(tree)))
            .collect()
    }
}
