use crate::i18n::Locale;
use crate::page::DEFAULT_CONTENT_ID_PREFIX;
use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale the page opens in
    pub default_locale: Locale,

    /// Prefix joined with a locale code to form a content block id
    pub content_id_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            content_id_prefix: DEFAULT_CONTENT_ID_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = match std::env::var("DOCS_DEFAULT_LOCALE") {
            Ok(code) => Locale::from_code(code.trim())
                .with_context(|| format!("DOCS_DEFAULT_LOCALE is not a supported locale: '{}'", code))?,
            Err(_) => Locale::default(),
        };

        Ok(Self {
            default_locale,
            content_id_prefix: std::env::var("DOCS_CONTENT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_CONTENT_ID_PREFIX.to_string()),
        })
    }
}
