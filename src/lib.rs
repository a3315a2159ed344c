//! Language picker for the bilingual (Serbian/English) documentation site.
//!
//! A `LanguageSwitcher` owns the selected locale and drives a `RenderPort`
//! so that exactly one picker entry is active, exactly one content block is
//! visible, and the navbar labels match the selection.

pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod render;
pub mod switcher;
