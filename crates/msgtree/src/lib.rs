//! Nested message-tree localization.
//!
//! A [`Translator`] looks up dot-separated keys such as `"greeting.hello"` in
//! a per-language [`MessageTree`], falls back to the default language when a
//! language has no tree, and substitutes `{name}` placeholders with
//! caller-supplied [`Value`]s.

mod error;
#[cfg(feature = "global-translator")]
mod global;
mod lookup;
mod source;
pub mod template;
mod translator;
pub mod types;
mod validate;

pub use error::LookupError;
#[cfg(feature = "global-translator")]
pub use global::{install, set_locale, t, uninstall, with_translator, with_translator_mut};
pub use lookup::compute_suggestions;
pub use source::{FixedLocale, LocaleSource};
pub use translator::{DEFAULT_PLACEHOLDER, Translator, TranslatorBuilder};
pub use types::{
    DEFAULT_LANGUAGE, LanguageCode, MessageNode, MessageTable, MessageTree, Params, TableError,
    UnknownLanguage, Value,
};
pub use validate::{Coverage, TableWarning};

/// Creates a [`Params`] map from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans, strings, or options directly.
///
/// # Example
///
/// ```
/// use msgtree::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Params::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Creates a [`MessageTree`] from nested key-value pairs.
///
/// A value in braces becomes a subtree; any other value becomes text.
///
/// # Example
///
/// ```
/// use msgtree::messages;
///
/// let tree = messages! {
///     "greeting" => {
///         "hello" => "Hello",
///         "welcome" => "Welcome, {name}!",
///     },
///     "farewell" => "Goodbye",
/// };
///
/// assert_eq!(tree.paths(), vec!["farewell", "greeting.hello", "greeting.welcome"]);
/// ```
#[macro_export]
macro_rules! messages {
    (@entries $tree:ident;) => {};
    (@entries $tree:ident; $key:literal => { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $tree.insert_tree($key, $crate::messages! { $($inner)* });
        $crate::messages!(@entries $tree; $($($rest)*)?);
    };
    (@entries $tree:ident; $key:literal => $value:expr $(, $($rest:tt)*)?) => {
        $tree.insert_text($key, $value);
        $crate::messages!(@entries $tree; $($($rest)*)?);
    };
    ($($body:tt)*) => {
        {
            let mut tree = $crate::MessageTree::new();
            $crate::messages!(@entries tree; $($body)*);
            tree
        }
    };
}
