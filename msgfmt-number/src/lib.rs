//! ICU number skeleton parser and formatter (`spec.md` §4.3).

pub mod error;
pub mod format;
pub mod options;
pub mod pattern;
pub mod skeleton;

pub use error::NumberError;
pub use format::{format, format_default};
pub use options::*;
pub use pattern::parse_decimal_pattern;
pub use skeleton::parse_skeleton;
