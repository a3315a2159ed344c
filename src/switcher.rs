//! Language switcher: the single-selection state machine behind the picker.
//!
//! States are the supported locales. `initialize` enters the default locale
//! once; every picker click then moves unconditionally to the clicked locale.
//! A click naming an unsupported code is rejected before anything is touched.

use crate::error::SwitchError;
use crate::i18n::{Locale, SwitchMetrics};
use crate::render::RenderPort;
use tracing::{debug, info, warn};

/// The currently selected locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLanguage {
    locale: Locale,
}

impl SelectedLanguage {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn get(&self) -> Locale {
        self.locale
    }

    /// Replace the selection, returning the previous locale.
    pub fn set(&mut self, locale: Locale) -> Locale {
        std::mem::replace(&mut self.locale, locale)
    }
}

impl Default for SelectedLanguage {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Keeps the picker, content visibility and labels of a page consistent with
/// one selected locale.
pub struct LanguageSwitcher<R: RenderPort> {
    renderer: R,
    default_locale: Locale,
    selected: SelectedLanguage,
    initialized: bool,
    metrics: SwitchMetrics,
}

impl<R: RenderPort> LanguageSwitcher<R> {
    pub fn new(renderer: R, default_locale: Locale) -> Self {
        Self {
            renderer,
            default_locale,
            selected: SelectedLanguage::new(default_locale),
            initialized: false,
            metrics: SwitchMetrics::new(),
        }
    }

    /// Enter the default locale and render it.
    ///
    /// Marks the default picker entry active and shows its content block as
    /// well as rendering the labels, so the page starts out with exactly one
    /// selection. Only the first call has any effect.
    pub fn initialize(&mut self) {
        if self.initialized {
            debug!("Language switcher already initialized, ignoring");
            return;
        }

        let locale = self.default_locale;
        self.selected.set(locale);
        self.renderer.set_active_picker(locale);
        self.renderer.set_visible_content(locale);
        self.renderer.render_labels(locale);
        self.initialized = true;

        info!(locale = %locale, "Language switcher initialized");
    }

    /// Handle a click on the picker entry carrying `code` in its `data-lang`.
    ///
    /// # Returns
    /// * `Ok(())` once the page shows the requested locale
    /// * `Err(SwitchError::UnknownLocale)` if `code` is not supported; the
    ///   selection and the page are left exactly as they were
    pub fn select_language(&mut self, code: &str) -> Result<(), SwitchError> {
        match Locale::from_code(code) {
            Ok(locale) => {
                self.select(locale);
                Ok(())
            }
            Err(err) => {
                self.metrics.record_rejected();
                warn!(
                    code,
                    current = %self.selected.get(),
                    "Rejected switch to unknown locale"
                );
                Err(err)
            }
        }
    }

    /// Switch to `locale`.
    ///
    /// Selecting the current locale again re-renders the same state.
    pub fn select(&mut self, locale: Locale) {
        // 1. exactly one active picker entry
        self.renderer.set_active_picker(locale);

        // 2. selection
        let previous = self.selected.set(locale);

        // 3. exactly one visible content block
        self.renderer.set_visible_content(locale);

        // 4. labels and flag
        self.renderer.render_labels(locale);

        if previous == locale {
            self.metrics.record_self_transition();
            debug!(locale = %locale, "Locale already selected");
        } else {
            self.metrics.record_transition();
            info!(from = %previous, to = %locale, "Switched locale");
        }
    }

    pub fn selected(&self) -> Locale {
        self.selected.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn metrics(&self) -> &SwitchMetrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{Call, RecordingRenderer};

    fn switcher() -> LanguageSwitcher<RecordingRenderer> {
        LanguageSwitcher::new(RecordingRenderer::default(), Locale::Serbian)
    }

    // ==================== SelectedLanguage Tests ====================

    #[test]
    fn test_selected_language_set_returns_previous() {
        let mut selected = SelectedLanguage::default();
        assert_eq!(selected.get(), Locale::Serbian);

        let previous = selected.set(Locale::English);
        assert_eq!(previous, Locale::Serbian);
        assert_eq!(selected.get(), Locale::English);
    }

    // ==================== initialize Tests ====================

    #[test]
    fn test_initialize_renders_default() {
        let mut switcher = switcher();
        switcher.initialize();

        assert!(switcher.is_initialized());
        assert_eq!(switcher.selected(), Locale::Serbian);
        assert_eq!(
            switcher.renderer().calls,
            vec![
                Call::ActivePicker(Locale::Serbian),
                Call::VisibleContent(Locale::Serbian),
                Call::Labels(Locale::Serbian),
            ]
        );
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut switcher = switcher();
        switcher.initialize();
        switcher.select(Locale::English);
        switcher.initialize();

        assert_eq!(switcher.selected(), Locale::English);
        assert_eq!(switcher.renderer().calls.len(), 6);
    }

    #[test]
    fn test_initialize_uses_configured_default() {
        let mut switcher = LanguageSwitcher::new(RecordingRenderer::default(), Locale::English);
        switcher.initialize();
        assert_eq!(switcher.selected(), Locale::English);
    }

    #[test]
    fn test_initialize_is_not_a_transition() {
        let mut switcher = switcher();
        switcher.initialize();
        assert_eq!(switcher.metrics().report().total_requests, 0);
    }

    // ==================== select Tests ====================

    #[test]
    fn test_select_calls_port_in_order() {
        let mut switcher = switcher();
        switcher.initialize();
        switcher.select(Locale::English);

        assert_eq!(
            &switcher.renderer().calls[3..],
            &[
                Call::ActivePicker(Locale::English),
                Call::VisibleContent(Locale::English),
                Call::Labels(Locale::English),
            ]
        );
        assert_eq!(switcher.metrics().transitions(), 1);
    }

    #[test]
    fn test_select_same_locale_is_self_transition() {
        let mut switcher = switcher();
        switcher.initialize();
        switcher.select(Locale::Serbian);

        assert_eq!(switcher.selected(), Locale::Serbian);
        assert_eq!(switcher.metrics().transitions(), 0);
        assert_eq!(switcher.metrics().self_transitions(), 1);
    }

    // ==================== select_language Tests ====================

    #[test]
    fn test_select_language_known_code() {
        let mut switcher = switcher();
        switcher.initialize();

        assert!(switcher.select_language("en").is_ok());
        assert_eq!(switcher.selected(), Locale::English);
    }

    #[test]
    fn test_select_language_unknown_code_touches_nothing() {
        let mut switcher = switcher();
        switcher.initialize();
        let calls_before = switcher.renderer().calls.len();

        let result = switcher.select_language("xx");

        assert_eq!(result, Err(SwitchError::UnknownLocale("xx".to_string())));
        assert_eq!(switcher.selected(), Locale::Serbian);
        assert_eq!(switcher.renderer().calls.len(), calls_before);
        assert_eq!(switcher.metrics().rejected(), 1);
    }

    #[test]
    fn test_select_language_rejects_content_id() {
        let mut switcher = switcher();
        switcher.initialize();

        assert!(switcher.select_language("#content_en").is_err());
        assert_eq!(switcher.selected(), Locale::Serbian);
    }

    #[test]
    fn test_into_renderer_returns_port() {
        let mut switcher = switcher();
        switcher.initialize();
        let recorder = switcher.into_renderer();
        assert_eq!(recorder.calls.len(), 3);
    }
}
