pub mod context;
pub mod datetime_support;
pub mod duration;
pub mod element;
pub mod error;
pub mod facade;
pub mod html;
pub mod list;
pub mod range;
pub mod relative;
pub mod selector;
pub mod value;

pub use context::{FormatContext, Handlers};
pub use error::FormatError;
pub use facade::{Formatter, FormatterOptions};
pub use value::{flatten_args, Args, NestedValue, Value};
