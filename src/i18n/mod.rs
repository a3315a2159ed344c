//! Internationalization (i18n) module for the documentation site.
//!
//! All locale-related data lives here: the closed set of supported locales,
//! their display strings and flag icons, a validator for page markup, and
//! counters describing how the picker has been used.
//!
//! # Architecture
//!
//! - `locale`: the `Locale` enum, the only way to name a supported language
//! - `registry`: single source of truth for per-locale configuration
//! - `strings`: localized navbar and picker strings
//! - `validator`: checks that page markup agrees with the locale table
//! - `metrics`: transition counters for a switcher
//!
//! # Example
//!
//! ```rust,ignore
//! use docs_lang_switcher::i18n::{Locale, LocaleRegistry};
//!
//! let english = Locale::from_code("en")?;
//! assert_eq!(english.config().strings.docs_lbl, "Documentation");
//!
//! for config in LocaleRegistry::list_all() {
//!     println!("{} -> {}", config.locale, config.flag_img_src);
//! }
//! ```

mod locale;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use locale::Locale;
pub use metrics::{MetricsReport, SwitchMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{LocaleStrings, ENGLISH_STRINGS, SERBIAN_STRINGS};
pub use validator::{PageValidator, ValidationReport};
