//! Locale type: the closed set of languages the site is published in.
//!
//! Every locale code that reaches the switcher is turned into a `Locale`
//! before anything else happens, so an unknown code can never flow into
//! rendering.

use crate::error::SwitchError;
use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Serbian, the language the site opens in.
    #[default]
    #[serde(rename = "sr")]
    Serbian,

    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Every supported locale, in picker order.
    pub const ALL: [Locale; 2] = [Locale::Serbian, Locale::English];

    /// Create a Locale from the code carried by a picker entry.
    ///
    /// Matching is exact: `"EN"` or `" en"` are rejected just like `"xx"`.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code names a supported locale
    /// * `Err(SwitchError::UnknownLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, SwitchError> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| SwitchError::UnknownLocale(code.to_string()))
    }

    /// Short code used in `data-lang` attributes and content block ids.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Serbian => "sr",
            Locale::English => "en",
        }
    }

    /// Static configuration for this locale.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::config(self)
    }

    /// Label shown in the language picker (e.g. "srpski").
    pub fn label(self) -> &'static str {
        self.config().strings.lang_label
    }

    /// Identifier of the content block holding this locale's translation.
    pub fn content_id(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.code())
    }
}

impl FromStr for Locale {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
