//! Page validation module.
//!
//! Checks that page markup agrees with the locale table before a switcher is
//! let loose on it, and that a rendered page shows exactly one selected
//! locale.

use crate::i18n::{Locale, LocaleRegistry};
use crate::page::Page;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break the single-selection invariant
    pub errors: Vec<String>,

    /// Suspicious markup that the switcher can still handle
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for page markup.
pub struct PageValidator;

// Shape of a locale code ("sr", "en", "pt-BR"), whether or not it is supported
static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl PageValidator {
    /// Validate page markup against the locale table.
    ///
    /// Errors:
    /// - a picker entry names a code that is not a supported locale
    /// - a supported locale has no content block
    /// - two content blocks share an id
    /// - two picker entries name the same locale
    ///
    /// Warnings:
    /// - a supported locale has no picker entry
    /// - a content block matches no supported locale (it will always be hidden)
    pub fn validate(page: &Page) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut seen_langs = HashSet::new();
        for entry in &page.picker {
            if !LocaleRegistry::is_supported(&entry.lang) {
                if Self::looks_like_locale_code(&entry.lang) {
                    report.errors.push(format!(
                        "Picker entry names unknown locale '{}'",
                        entry.lang
                    ));
                } else {
                    report.errors.push(format!(
                        "Picker entry has malformed data-lang '{}'",
                        entry.lang
                    ));
                }
            } else if !seen_langs.insert(entry.lang.as_str()) {
                report.errors.push(format!(
                    "Duplicate picker entry for locale '{}'",
                    entry.lang
                ));
            }
        }

        let mut seen_ids = HashSet::new();
        for block in &page.content {
            if !seen_ids.insert(block.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate content block id '{}'", block.id));
            }
        }

        for locale in Locale::ALL {
            if !seen_langs.contains(locale.code()) {
                report
                    .warnings
                    .push(format!("No picker entry for locale '{}'", locale));
            }
            if page.block_for(locale).is_none() {
                report.errors.push(format!(
                    "Missing content block '{}'",
                    locale.content_id(&page.content_id_prefix)
                ));
            }
        }

        for block in &page.content {
            let known = Locale::ALL
                .into_iter()
                .any(|locale| locale.content_id(&page.content_id_prefix) == block.id);
            if !known {
                report.warnings.push(format!(
                    "Content block '{}' matches no supported locale",
                    block.id
                ));
            }
        }

        report
    }

    /// Check that a rendered page shows `locale` and nothing else.
    ///
    /// Exactly one picker entry must be active and exactly one content block
    /// visible, both belonging to `locale`, and the labels must carry the
    /// locale's strings.
    pub fn check_selection(page: &Page, locale: Locale) -> ValidationReport {
        let mut report = ValidationReport::new();
        let config = locale.config();

        let active = page.active_langs();
        if active != [locale.code()] {
            report.errors.push(format!(
                "Expected only picker entry '{}' active, found {:?}",
                locale, active
            ));
        }

        let expected_id = locale.content_id(&page.content_id_prefix);
        let visible = page.visible_block_ids();
        if visible != [expected_id.as_str()] {
            report.errors.push(format!(
                "Expected only content block '{}' visible, found {:?}",
                expected_id, visible
            ));
        }

        if page.selected_lang.text != config.strings.lang_label {
            report.errors.push(format!(
                "Language label is '{}', expected '{}'",
                page.selected_lang.text, config.strings.lang_label
            ));
        }
        if page.selected_lang.flag_src.as_deref() != Some(config.flag_img_src) {
            report.warnings.push(format!(
                "Flag icon is {:?}, expected '{}'",
                page.selected_lang.flag_src, config.flag_img_src
            ));
        }
        if page.nav.docs != config.strings.docs_lbl
            || page.nav.getting_started != config.strings.getting_started_lbl
        {
            report.errors.push(format!(
                "Navbar labels do not match locale '{}'",
                locale
            ));
        }

        report
    }

    fn looks_like_locale_code(code: &str) -> bool {
        let regex = LOCALE_CODE_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z]{2,3}(?:-[A-Z]{2})?$").expect("locale code pattern is valid")
        });
        regex.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ContentBlock, PickerEntry};
    use crate::render::RenderPort;

    fn rendered(locale: Locale) -> Page {
        let mut page = Page::default();
        page.set_active_picker(locale);
        page.set_visible_content(locale);
        page.render_labels(locale);
        page
    }

    // ==================== Locale Code Shape Tests ====================

    #[test]
    fn test_looks_like_locale_code() {
        assert!(PageValidator::looks_like_locale_code("sr"));
        assert!(PageValidator::looks_like_locale_code("fr"));
        assert!(PageValidator::looks_like_locale_code("pt-BR"));
        assert!(!PageValidator::looks_like_locale_code("#content_en"));
        assert!(!PageValidator::looks_like_locale_code(""));
        assert!(!PageValidator::looks_like_locale_code("EN"));
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_default_page_is_clean() {
        let report = PageValidator::validate(&Page::default());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_unknown_picker_locale() {
        let mut page = Page::default();
        page.picker.push(PickerEntry {
            lang: "xx".to_string(),
            active: false,
        });

        let report = PageValidator::validate(&page);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("unknown locale 'xx'"));
    }

    #[test]
    fn test_validate_malformed_picker_lang() {
        let mut page = Page::default();
        page.picker[1].lang = "#content_en".to_string();

        let report = PageValidator::validate(&page);
        assert!(report.errors.iter().any(|e| e.contains("malformed")));
        // "en" now has no picker entry either
        assert!(report.warnings.iter().any(|w| w.contains("'en'")));
    }

    #[test]
    fn test_validate_missing_content_block() {
        let mut page = Page::default();
        page.content.retain(|block| block.id != "content_en");

        let report = PageValidator::validate(&page);
        assert_eq!(report.errors, vec!["Missing content block 'content_en'"]);
    }

    #[test]
    fn test_validate_duplicate_content_id() {
        let mut page = Page::default();
        page.content.push(ContentBlock {
            id: "content_sr".to_string(),
            visible: false,
        });

        let report = PageValidator::validate(&page);
        assert!(report.errors.iter().any(|e| e.contains("Duplicate")));
    }

    #[test]
    fn test_validate_duplicate_picker_entry_is_error() {
        let mut page = Page::default();
        page.picker.push(PickerEntry {
            lang: "en".to_string(),
            active: false,
        });

        let report = PageValidator::validate(&page);
        assert_eq!(report.errors, vec!["Duplicate picker entry for locale 'en'"]);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validate_orphan_content_block_is_warning() {
        let mut page = Page::default();
        page.content.push(ContentBlock {
            id: "content_de".to_string(),
            visible: false,
        });

        let report = PageValidator::validate(&page);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("content_de"));
    }

    // ==================== check_selection Tests ====================

    #[test]
    fn test_check_selection_rendered_page_is_clean() {
        for locale in Locale::ALL {
            let report = PageValidator::check_selection(&rendered(locale), locale);
            assert!(report.is_clean(), "{:?}", report);
        }
    }

    #[test]
    fn test_check_selection_wrong_locale() {
        let page = rendered(Locale::English);
        let report = PageValidator::check_selection(&page, Locale::Serbian);
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn test_check_selection_two_visible_blocks() {
        let mut page = rendered(Locale::English);
        page.content[0].visible = true;

        let report = PageValidator::check_selection(&page, Locale::English);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("content_en"));
    }

    #[test]
    fn test_check_selection_unrendered_page() {
        let report = PageValidator::check_selection(&Page::default(), Locale::Serbian);
        assert!(report.has_errors());
        assert!(report.has_warnings());
    }
}
