//! The host's notion of the current language.

use crate::types::{DEFAULT_LANGUAGE, LanguageCode};

/// Reports the language the host environment is currently using.
///
/// A [`Translator`](crate::Translator) queries its source whenever it is
/// constructed or switched without an explicit language. The result is used
/// for that resolution only and is not remembered as a preference.
///
/// Any `Fn() -> LanguageCode` closure is a source, which keeps tests free of
/// process-wide state:
///
/// ```
/// use msgtree::{LanguageCode, LocaleSource};
///
/// let source = || LanguageCode::Ja;
/// assert_eq!(source.current_locale(), LanguageCode::Ja);
/// ```
pub trait LocaleSource: Send + Sync {
    /// The host's current language.
    fn current_locale(&self) -> LanguageCode;
}

/// A source that always reports the same language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLocale(pub LanguageCode);

impl Default for FixedLocale {
    fn default() -> Self {
        FixedLocale(DEFAULT_LANGUAGE)
    }
}

impl LocaleSource for FixedLocale {
    fn current_locale(&self) -> LanguageCode {
        self.0
    }
}

impl<F> LocaleSource for F
where
    F: Fn() -> LanguageCode + Send + Sync,
{
    fn current_locale(&self) -> LanguageCode {
        self()
    }
}
