//! Global translator storage for the `global-translator` feature.
//!
//! Provides thread-safe access to one shared `Translator`, removing the need
//! to pass `&Translator` to every call site. Writers (installing a translator,
//! switching language) take the lock exclusively, so a language switch never
//! interleaves with a lookup.

use std::sync::{LazyLock, RwLock};

use crate::{LanguageCode, Translator};

static GLOBAL_TRANSLATOR: LazyLock<RwLock<Option<Translator>>> =
    LazyLock::new(|| RwLock::new(None));

/// Install the global translator, returning the one it replaces.
pub fn install(translator: Translator) -> Option<Translator> {
    let mut guard = GLOBAL_TRANSLATOR
        .write()
        .expect("global translator lock poisoned");
    guard.replace(translator)
}

/// Remove the global translator.
pub fn uninstall() -> Option<Translator> {
    let mut guard = GLOBAL_TRANSLATOR
        .write()
        .expect("global translator lock poisoned");
    guard.take()
}

/// Provides read access to the global translator, if one is installed.
pub fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> Option<T> {
    let guard = GLOBAL_TRANSLATOR
        .read()
        .expect("global translator lock poisoned");
    guard.as_ref().map(f)
}

/// Provides write access to the global translator, if one is installed.
pub fn with_translator_mut<T>(f: impl FnOnce(&mut Translator) -> T) -> Option<T> {
    let mut guard = GLOBAL_TRANSLATOR
        .write()
        .expect("global translator lock poisoned");
    guard.as_mut().map(f)
}

/// Sets the active language of the global translator.
///
/// Does nothing when no translator is installed.
pub fn set_locale(locale: Option<LanguageCode>) {
    with_translator_mut(|translator| translator.set_locale(locale));
}

/// Translates `key` with the global translator.
///
/// Returns `key` unchanged when no translator is installed, the same as a
/// missing translation.
pub fn t(key: &str) -> String {
    with_translator(|translator| translator.t(key)).unwrap_or_else(|| key.to_string())
}
