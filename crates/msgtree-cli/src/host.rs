//! Host language detection.
//!
//! The library leaves "what language is the user running?" to its host. The
//! CLI answers it from the operating system locale.

use msgtree::{LanguageCode, LocaleSource, DEFAULT_LANGUAGE};

/// Reports the operating system's language, or the default language when it
/// is unknown or unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostLocale;

impl LocaleSource for HostLocale {
    fn current_locale(&self) -> LanguageCode {
        let detected = sys_locale::get_locale();
        let code = detected
            .as_deref()
            .and_then(match_tag)
            .unwrap_or(DEFAULT_LANGUAGE);
        tracing::debug!(host = ?detected, locale = %code, "detected host language");
        code
    }
}

/// Map an OS locale tag such as `en_US.UTF-8` or `pt-BR` to a supported code.
///
/// Tries the full tag (case-insensitively, `_` read as `-`) and then its
/// primary language subtag.
pub fn match_tag(tag: &str) -> Option<LanguageCode> {
    let tag = tag.split(['.', '@']).next()?.replace('_', "-");
    if tag.is_empty() {
        return None;
    }

    let exact = LanguageCode::ALL
        .iter()
        .copied()
        .find(|code| code.as_str().eq_ignore_ascii_case(&tag));
    exact.or_else(|| {
        let primary = tag.split('-').next()?.to_ascii_lowercase();
        primary.parse().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_codes_match() {
        assert_eq!(match_tag("en"), Some(LanguageCode::En));
        assert_eq!(match_tag("zh-TW"), Some(LanguageCode::ZhTw));
    }

    #[test]
    fn posix_tags_match() {
        assert_eq!(match_tag("pt_BR.UTF-8"), Some(LanguageCode::PtBr));
        assert_eq!(match_tag("en_GB"), Some(LanguageCode::EnGb));
        assert_eq!(match_tag("de_DE@euro"), Some(LanguageCode::De));
    }

    #[test]
    fn region_falls_back_to_primary_subtag() {
        assert_eq!(match_tag("fr-CA"), Some(LanguageCode::Fr));
        assert_eq!(match_tag("ja-JP"), Some(LanguageCode::Ja));
        assert_eq!(match_tag("FI-FI"), Some(LanguageCode::FiFi));
    }

    #[test]
    fn unsupported_tags_do_not_match() {
        assert_eq!(match_tag("xx-YY"), None);
        assert_eq!(match_tag(""), None);
        assert_eq!(match_tag("C"), None);
    }
}
