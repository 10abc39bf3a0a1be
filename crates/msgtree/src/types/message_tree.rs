use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::{Deserialize, Serialize};

/// A value stored under a key of a [`MessageTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageNode {
    /// A localized string, possibly containing `{name}` placeholders.
    Text(String),

    /// A nested group of messages.
    Tree(MessageTree),
}

impl MessageNode {
    /// Get this node as text, if it is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageNode::Text(text) => Some(text),
            MessageNode::Tree(_) => None,
        }
    }

    /// Get this node as a subtree, if it is one.
    pub fn as_tree(&self) -> Option<&MessageTree> {
        match self {
            MessageNode::Tree(tree) => Some(tree),
            MessageNode::Text(_) => None,
        }
    }
}

impl From<&str> for MessageNode {
    fn from(text: &str) -> Self {
        MessageNode::Text(text.to_string())
    }
}

impl From<String> for MessageNode {
    fn from(text: String) -> Self {
        MessageNode::Text(text)
    }
}

impl From<MessageTree> for MessageNode {
    fn from(tree: MessageTree) -> Self {
        MessageNode::Tree(tree)
    }
}

/// A recursive mapping from keys to localized text or further trees.
///
/// Keys are addressed at lookup time by dot-separated paths, so a key that
/// itself contains `.` can be stored but never reached.
///
/// # Example
///
/// ```
/// use msgtree::MessageTree;
///
/// let tree = MessageTree::new().with_tree(
///     "greeting",
///     MessageTree::new()
///         .with_text("hello", "Hello")
///         .with_text("welcome", "Welcome, {name}!"),
/// );
///
/// assert_eq!(tree.paths(), vec!["greeting.hello", "greeting.welcome"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTree {
    entries: BTreeMap<String, MessageNode>,
}

impl MessageTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text leaf, returning the tree for chaining.
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_text(key, text);
        self
    }

    /// Add a subtree, returning the tree for chaining.
    pub fn with_tree(mut self, key: impl Into<String>, tree: MessageTree) -> Self {
        self.insert_tree(key, tree);
        self
    }

    /// Insert a text leaf, returning the node it replaced.
    pub fn insert_text(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<MessageNode> {
        self.entries
            .insert(key.into(), MessageNode::Text(text.into()))
    }

    /// Insert a subtree, returning the node it replaced.
    pub fn insert_tree(&mut self, key: impl Into<String>, tree: MessageTree) -> Option<MessageNode> {
        self.entries.insert(key.into(), MessageNode::Tree(tree))
    }

    /// Get the node stored directly under `key`.
    pub fn get(&self, key: &str) -> Option<&MessageNode> {
        self.entries.get(key)
    }

    /// Get the node at a dot-separated path.
    ///
    /// Unlike [`Translator::t`](crate::Translator::t), every segment must
    /// resolve: a path that runs past a text leaf yields `None`.
    pub fn node_at(&self, path: &str) -> Option<&MessageNode> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.entries.get(first)?;
        for segment in segments {
            node = node.as_tree()?.entries.get(segment)?;
        }
        Some(node)
    }

    /// Iterate over the direct children in key order.
    pub fn iter(&self) -> Iter<'_, String, MessageNode> {
        self.entries.iter()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every text leaf, as a sorted list of dot-paths.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths.sort();
        paths
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (key, node) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match node {
                MessageNode::Text(_) => out.push(path),
                MessageNode::Tree(tree) => tree.collect_paths(&path, out),
            }
        }
    }
}

impl<'a> IntoIterator for &'a MessageTree {
    type Item = (&'a String, &'a MessageNode);
    type IntoIter = Iter<'a, String, MessageNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, N: Into<MessageNode>> FromIterator<(K, N)> for MessageTree {
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        }
    }
}
