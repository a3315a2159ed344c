use thiserror::Error;

/// Errors raised by the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// A picker asked for a locale code that has no entry in the locale table.
    #[error("unknown locale code: '{0}'")]
    UnknownLocale(String),
}
