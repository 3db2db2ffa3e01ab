//! `FormatContext`: everything an element's `format` needs, threaded by
//! reference through a single format call (`spec.md` §2 Data flow, §9
//! "shared output buffer threaded by reference").

use crate::error::FormatError;
use crate::value::{Args, Value};
use fnv::FnvHashMap;
use msgfmt_ast::Span;
use msgfmt_locale::LocaleData;
use smartstring::alias::String as SmartString;
use std::sync::Arc;

const NULL_VALUE: Value = Value::Null;

pub type TagHandler = dyn Fn(&str) -> String + Send + Sync;
pub type CustomFormatter = dyn Fn(&Value, Option<&str>, &LocaleData) -> String + Send + Sync;

/// Registered handlers plus the strict-variables flag (`spec.md` §6
/// Formatter API, §4.8, §4.9).
#[derive(Default)]
pub struct Handlers {
    pub tag_handlers: FnvHashMap<SmartString, Box<TagHandler>>,
    pub custom_formatters: FnvHashMap<SmartString, Box<CustomFormatter>>,
}

/// Carries locale, the argument map, registered handlers, and the nearest
/// enclosing plural/ordinal substitution value for `#` (`spec.md` §4.5 step 5:
/// "unless shadowed by a deeper plural"). Cheap to clone: everything but
/// `pound` is a borrow or an `Arc`.
#[derive(Clone)]
pub struct FormatContext<'a> {
    pub locale: &'a Arc<LocaleData>,
    pub args: &'a Args,
    pub handlers: &'a Handlers,
    pub strict_variables: bool,
    pound: Option<f64>,
}

impl<'a> FormatContext<'a> {
    pub fn new(locale: &'a Arc<LocaleData>, args: &'a Args, handlers: &'a Handlers, strict_variables: bool) -> Self {
        FormatContext {
            locale,
            args,
            handlers,
            strict_variables,
            pound: None,
        }
    }

    /// A child context for a plural/ordinal case body, shadowing `#` with the
    /// post-offset value for that block.
    pub fn with_pound(&self, value: f64) -> Self {
        FormatContext {
            pound: Some(value),
            ..self.clone()
        }
    }

    pub fn pound(&self) -> Option<f64> {
        self.pound
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.args.get(name)
    }

    /// `spec.md` §7: missing args are absent unless strict-variables is set,
    /// in which case the first direct reference raises `MissingVariable`.
    pub fn require(&self, name: &str, span: Span) -> Result<&'a Value, FormatError> {
        match self.args.get(name) {
            Some(v) => Ok(v),
            None if self.strict_variables => Err(FormatError::MissingVariable {
                name: name.into(),
                span,
            }),
            None => Ok(&NULL_VALUE),
        }
    }

    /// Numeric lookup for `number`/`plural`/`selectordinal`; a missing or
    /// unconvertible argument yields `0.0` when not strict (`spec.md` §7).
    pub fn require_numeric(&self, name: &str, span: Span) -> Result<f64, FormatError> {
        match self.args.get(name) {
            Some(v) => Ok(v.as_f64().unwrap_or(0.0)),
            None if self.strict_variables => Err(FormatError::MissingVariable {
                name: name.into(),
                span,
            }),
            None => Ok(0.0),
        }
    }
}
