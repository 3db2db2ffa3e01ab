use smartstring::alias::String as SmartString;

/// Errors raised by the Locale Resolver (`spec.md` §4 Locale Resolver, §7).
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("locale {requested:?} could not be resolved; available: {available:?}")]
    InvalidLocale {
        requested: SmartString,
        available: Vec<SmartString>,
    },
}
