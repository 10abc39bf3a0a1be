//! The user-facing translator.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use bon::Builder;

use crate::error::LookupError;
use crate::lookup::resolve_path;
use crate::source::LocaleSource;
use crate::template::substitute;
use crate::types::{LanguageCode, MessageTable, MessageTree, Params};

/// The placeholder [`Translator::placeholder_tuple`] splits on.
pub const DEFAULT_PLACEHOLDER: &str = "{placeholder}";

/// Resolves dot-paths to localized text for an active language.
///
/// A translator owns an immutable [`MessageTable`] and an active language.
/// The tree for the active language is resolved once, when the translator is
/// built and whenever the language changes: the language's own tree if the
/// table has one, otherwise the default language's tree. Lookups then walk
/// that tree directly.
///
/// Missing translations are not errors here. A key that does not resolve to
/// text comes back unchanged from [`t`](Translator::t), so gaps show up in
/// the UI instead of disappearing.
///
/// # Example
///
/// ```
/// use msgtree::{FixedLocale, LanguageCode, MessageTable, MessageTree, Translator, params};
///
/// let en = MessageTree::new().with_tree(
///     "greeting",
///     MessageTree::new()
///         .with_text("hello", "Hello")
///         .with_text("welcome", "Welcome, {name}!"),
/// );
/// let zh = MessageTree::new().with_tree(
///     "greeting",
///     MessageTree::new().with_text("hello", "你好"),
/// );
/// let table = MessageTable::new(en).with_locale(LanguageCode::Zh, zh);
///
/// let mut translator = Translator::new(table, FixedLocale(LanguageCode::En));
/// assert_eq!(translator.t("greeting.hello"), "Hello");
/// assert_eq!(
///     translator.t_with("greeting.welcome", &params! { "name" => "dragonish" }),
///     "Welcome, dragonish!"
/// );
///
/// translator.set_locale(Some(LanguageCode::Zh));
/// assert_eq!(translator.t("greeting.hello"), "你好");
/// ```
#[derive(Builder)]
#[builder(finish_fn(name = build_unresolved, vis = ""))]
pub struct Translator {
    /// Messages for every language the translator can show.
    table: MessageTable,

    /// Reports the host's language when none is requested explicitly.
    locale_source: Arc<dyn LocaleSource>,

    /// Explicitly requested language. `None` follows the locale source.
    locale: Option<LanguageCode>,

    /// The language currently in effect.
    #[builder(skip)]
    active_locale: LanguageCode,

    /// The language whose tree is in use: `active_locale`, or the default
    /// language when the table has no tree for it.
    #[builder(skip)]
    resolved_locale: LanguageCode,

    /// Cached tree for `resolved_locale`.
    #[builder(skip)]
    active: Arc<MessageTree>,
}

impl<S: translator_builder::IsComplete> TranslatorBuilder<S> {
    /// Build the translator and resolve its active tree.
    pub fn build(self) -> Translator {
        let mut translator = self.build_unresolved();
        translator.resolve_active();
        translator
    }
}

impl Translator {
    /// Create a translator for the language reported by `source`.
    pub fn new(table: MessageTable, source: impl LocaleSource + 'static) -> Self {
        Translator::builder()
            .table(table)
            .locale_source(Arc::new(source))
            .build()
    }

    /// Create a translator for an explicit language.
    ///
    /// `source` is still consulted by later calls to
    /// [`set_locale(None)`](Translator::set_locale).
    pub fn with_locale(
        table: MessageTable,
        source: impl LocaleSource + 'static,
        locale: LanguageCode,
    ) -> Self {
        Translator::builder()
            .table(table)
            .locale_source(Arc::new(source))
            .locale(locale)
            .build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// The language currently in effect.
    pub fn locale(&self) -> LanguageCode {
        self.active_locale
    }

    /// The language whose messages are being shown.
    ///
    /// Differs from [`locale`](Translator::locale) when the table has no tree
    /// for the active language and the default tree is used instead.
    pub fn resolved_locale(&self) -> LanguageCode {
        self.resolved_locale
    }

    /// Returns true if lookups fall back to the default language's tree.
    pub fn is_fallback(&self) -> bool {
        self.active_locale != self.resolved_locale
    }

    /// The explicitly requested language, if any.
    pub fn requested_locale(&self) -> Option<LanguageCode> {
        self.locale
    }

    /// Change the active language.
    ///
    /// `None` asks the locale source for the host's current language. A
    /// language without a tree in the table falls back to the default tree.
    /// Setting the same language again has no observable effect.
    pub fn set_locale(&mut self, locale: Option<LanguageCode>) {
        self.locale = locale;
        self.resolve_active();
    }

    /// Re-query the locale source and switch to its language.
    pub fn set_locale_from_source(&mut self) {
        self.set_locale(None);
    }

    /// The message table.
    pub fn table(&self) -> &MessageTable {
        &self.table
    }

    /// The tree lookups currently walk.
    pub fn active_tree(&self) -> &MessageTree {
        &self.active
    }

    fn resolve_active(&mut self) {
        let requested = self
            .locale
            .unwrap_or_else(|| self.locale_source.current_locale());
        let (resolved, tree) = self.table.resolve(requested);

        if resolved != requested {
            tracing::debug!(
                requested = %requested,
                fallback = %resolved,
                "no messages for language, using default"
            );
        }
        tracing::trace!(locale = %requested, explicit = self.locale.is_some(), "active language set");

        self.active_locale = requested;
        self.resolved_locale = resolved;
        self.active = tree;
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Resolve `key` to its raw message text without fallback.
    ///
    /// Placeholders are left as written.
    pub fn lookup(&self, key: &str) -> Result<&str, LookupError> {
        resolve_path(&self.active, key)
    }

    /// Translate `key`, leaving every placeholder in place.
    ///
    /// Returns `key` itself if it does not name message text in the active
    /// tree, either because a segment is missing or because it names a group
    /// of messages.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None)
    }

    /// Translate `key`, substituting `params` into `{name}` placeholders.
    ///
    /// Placeholders without a non-null value in `params` are kept verbatim.
    pub fn t_with(&self, key: &str, params: &Params) -> String {
        self.translate(key, Some(params))
    }

    fn translate(&self, key: &str, params: Option<&Params>) -> String {
        match self.lookup(key) {
            Ok(text) => substitute(text, params),
            Err(error) => {
                tracing::debug!(locale = %self.resolved_locale, %error, "missing translation");
                key.to_string()
            }
        }
    }

    // =========================================================================
    // Placeholder Tuples
    // =========================================================================

    /// Split the translation of `key` around [`DEFAULT_PLACEHOLDER`].
    ///
    /// See [`placeholder_tuple_with`](Translator::placeholder_tuple_with).
    pub fn placeholder_tuple(&self, key: &str) -> (String, String) {
        self.placeholder_tuple_with(key, DEFAULT_PLACEHOLDER)
    }

    /// Split the translation of `key` around the first `placeholder`.
    ///
    /// Used to place a widget inside a sentence: the first element is the
    /// text before the placeholder, the second the text after it. If the
    /// placeholder does not occur (or is empty) the whole text comes first
    /// and the second element is empty. Text following a second occurrence of
    /// the placeholder is dropped.
    ///
    /// ```
    /// use msgtree::{FixedLocale, MessageTable, MessageTree, Translator};
    ///
    /// let table = MessageTable::new(MessageTree::new().with_text("agree", "I accept the {x} terms"));
    /// let translator = Translator::new(table, FixedLocale::default());
    ///
    /// assert_eq!(
    ///     translator.placeholder_tuple_with("agree", "{x}"),
    ///     ("I accept the ".to_string(), " terms".to_string())
    /// );
    /// ```
    pub fn placeholder_tuple_with(&self, key: &str, placeholder: &str) -> (String, String) {
        let text = self.t(key);
        if placeholder.is_empty() {
            return (text, String::new());
        }

        let mut parts = text.split(placeholder);
        match (parts.next(), parts.next()) {
            (Some(before), Some(after)) => (before.to_string(), after.to_string()),
            (Some(whole), None) => (whole.to_string(), String::new()),
            (None, _) => (String::new(), String::new()),
        }
    }
}

impl Debug for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("active_locale", &self.active_locale)
            .field("resolved_locale", &self.resolved_locale)
            .field("languages", &self.table.languages().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
