use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The locale every [`MessageTable`](crate::MessageTable) must carry.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// A language code was not one of the supported [`LanguageCode`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{code}'")]
pub struct UnknownLanguage {
    pub code: String,
}

macro_rules! language_codes {
    ($($(#[$meta:meta])* $variant:ident => $code:literal,)+) => {
        /// A supported language code.
        ///
        /// The set is closed: every code a [`MessageTable`](crate::MessageTable)
        /// can be keyed by appears here. Codes serialize as their wire form
        /// (e.g. `"en-GB"`), not as the variant name.
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum LanguageCode {
            $(
                $(#[$meta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl LanguageCode {
            /// Every supported code, default language first.
            pub const ALL: &'static [LanguageCode] = &[$(LanguageCode::$variant),+];

            /// The wire form of this code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $code,)+
                }
            }
        }

        impl FromStr for LanguageCode {
            type Err = UnknownLanguage;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok(LanguageCode::$variant),)+
                    _ => Err(UnknownLanguage {
                        code: code.to_string(),
                    }),
                }
            }
        }
    };
}

language_codes! {
    #[default]
    En => "en",
    Af => "af",
    Am => "am",
    Ar => "ar",
    Eu => "eu",
    Be => "be",
    Bg => "bg",
    Bn => "bn",
    Ca => "ca",
    Cs => "cs",
    Da => "da",
    De => "de",
    Dv => "dv",
    El => "el",
    EnGb => "en-GB",
    Eo => "eo",
    Es => "es",
    Fa => "fa",
    FiFi => "fi-fi",
    Fr => "fr",
    Gl => "gl",
    He => "he",
    Hi => "hi",
    Hu => "hu",
    Id => "id",
    It => "it",
    Ja => "ja",
    Ko => "ko",
    Lv => "lv",
    Ml => "ml",
    Ms => "ms",
    Ne => "ne",
    Nl => "nl",
    No => "no",
    Oc => "oc",
    Pl => "pl",
    Pt => "pt",
    PtBr => "pt-BR",
    Ro => "ro",
    Ru => "ru",
    Sa => "sa",
    Sr => "sr",
    Sv => "sv",
    Sk => "sk",
    Sq => "sq",
    Ta => "ta",
    Te => "te",
    Th => "th",
    Tl => "tl",
    Tr => "tr",
    Uk => "uk",
    Ur => "ur",
    Vi => "vi",
    Zh => "zh",
    ZhTw => "zh-TW",
}

impl LanguageCode {
    /// Returns true for the language every table must define.
    pub fn is_default(self) -> bool {
        self == DEFAULT_LANGUAGE
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
