//! Locale registry: single source of truth for per-locale configuration.
//!
//! Lookup by `Locale` is an exhaustive match, so adding a variant without a
//! table entry fails to compile. Lookup by raw code goes through
//! `Locale::from_code` and can only ever miss, never return partial data.

use crate::i18n::{Locale, LocaleStrings, ENGLISH_STRINGS, SERBIAN_STRINGS};

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// Picker and navbar strings
    pub strings: LocaleStrings,

    /// Path of the flag icon shown next to the picker label
    pub flag_img_src: &'static str,
}

static SERBIAN: LocaleConfig = LocaleConfig {
    locale: Locale::Serbian,
    strings: SERBIAN_STRINGS,
    flag_img_src: "img/flags/rs.svg",
};

static ENGLISH: LocaleConfig = LocaleConfig {
    locale: Locale::English,
    strings: ENGLISH_STRINGS,
    flag_img_src: "img/flags/gb.svg",
};

/// Read-only view over the static locale table.
pub struct LocaleRegistry;

impl LocaleRegistry {
    /// Get the configuration of a locale. Total for every `Locale`.
    pub fn config(locale: Locale) -> &'static LocaleConfig {
        match locale {
            Locale::Serbian => &SERBIAN,
            Locale::English => &ENGLISH,
        }
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code names a supported locale
    /// * `None` otherwise
    pub fn get_by_code(code: &str) -> Option<&'static LocaleConfig> {
        Locale::from_code(code).ok().map(Self::config)
    }

    /// All locale configurations, in picker order.
    pub fn list_all() -> impl Iterator<Item = &'static LocaleConfig> {
        Locale::ALL.into_iter().map(Self::config)
    }

    /// Check if a code names a supported locale.
    pub fn is_supported(code: &str) -> bool {
        Self::get_by_code(code).is_some()
    }
}
