//! Rendering port used by the language switcher.
//!
//! The switcher never touches markup directly; it drives one of these.
//! `page::Page` is the in-memory implementation used by the binaries and
//! tests.

use crate::i18n::Locale;

/// Capabilities the switcher needs from whatever displays the page.
pub trait RenderPort {
    /// Mark the picker entry for `locale` active and clear every other entry.
    fn set_active_picker(&mut self, locale: Locale);

    /// Show the content block for `locale` and hide all of its siblings.
    fn set_visible_content(&mut self, locale: Locale);

    /// Copy the picker label, flag icon and navbar labels of `locale` into
    /// the page.
    fn render_labels(&mut self, locale: Locale);
}

impl<R: RenderPort + ?Sized> RenderPort for &mut R {
    fn set_active_picker(&mut self, locale: Locale) {
        (**self).set_active_picker(locale);
    }

    fn set_visible_content(&mut self, locale: Locale) {
        (**self).set_visible_content(locale);
    }

    fn render_labels(&mut self, locale: Locale) {
        (**self).render_labels(locale);
    }
}
