/// Localized strings shown outside the content blocks: the picker label and
/// the navbar section labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStrings {
    /// Human-readable name of the language, shown in the picker
    pub lang_label: &'static str,

    /// Navbar label of the documentation section
    pub docs_lbl: &'static str,

    /// Navbar label of the getting-started section
    pub getting_started_lbl: &'static str,
}

// ==================== Serbian Strings ====================

/// Serbian strings (the site's default language)
pub const SERBIAN_STRINGS: LocaleStrings = LocaleStrings {
    lang_label: "srpski",
    docs_lbl: "Dokumentacija",
    getting_started_lbl: "Prvi koraci",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    lang_label: "english",
    docs_lbl: "Documentation",
    getting_started_lbl: "Getting started",
};
