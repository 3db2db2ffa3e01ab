//! Core/facade error taxonomy (`spec.md` §7).

use msgfmt_ast::{ParseError, Span};
use msgfmt_locale::LocaleError;
use smartstring::alias::String as SmartString;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum FormatError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("locale could not be resolved: {0}")]
    Locale(#[from] LocaleError),

    #[error("missing required variable {name:?} at {span:?}")]
    MissingVariable { name: SmartString, span: Span },

    #[error("formatting failed: {reason}")]
    Format { reason: String },

    #[error("select block at {span:?} is missing an `other` case")]
    SelectMissingOther { span: Span },
}

impl FormatError {
    pub fn format(reason: impl Into<String>) -> Self {
        FormatError::Format {
            reason: reason.into(),
        }
    }
}
