//! The `Formatter` facade (`spec.md` §6 "Formatter API"): the single entry
//! point a host application constructs once per locale and calls repeatedly.

use crate::context::{CustomFormatter, FormatContext, Handlers, TagHandler};
use crate::element::format_message;
use crate::error::FormatError;
use crate::html::make_html_safe;
use crate::value::{flatten_args, Args, NestedValue};
use fnv::FnvHashMap;
use msgfmt_ast::PatternCache;
use msgfmt_locale::{LocaleData, LocaleDataProvider};
use smartstring::alias::String as SmartString;
use std::sync::Arc;

/// Construction-time configuration for a [`Formatter`] (`spec.md` §6).
pub struct FormatterOptions {
    pub provider: Arc<dyn LocaleDataProvider>,
    pub fallback_locale: Option<SmartString>,
    pub strict_variables: bool,
    /// `None` disables the pattern cache entirely.
    pub cache_capacity: Option<usize>,
    pub tag_handlers: FnvHashMap<SmartString, Box<TagHandler>>,
    pub custom_formatters: FnvHashMap<SmartString, Box<CustomFormatter>>,
}

impl FormatterOptions {
    pub fn new(provider: Arc<dyn LocaleDataProvider>) -> Self {
        FormatterOptions {
            provider,
            fallback_locale: None,
            strict_variables: false,
            cache_capacity: Some(1024),
            tag_handlers: FnvHashMap::default(),
            custom_formatters: FnvHashMap::default(),
        }
    }
}

/// A locale-bound formatter. Immutable after construction and safe to share
/// across threads (`spec.md` §5, §6).
pub struct Formatter {
    locale: Arc<LocaleData>,
    handlers: Handlers,
    strict_variables: bool,
    cache: PatternCache,
}

impl Formatter {
    pub fn new(locale_code: &str, options: FormatterOptions) -> Result<Self, FormatError> {
        let locale = msgfmt_locale::resolve(
            locale_code,
            options.provider.as_ref(),
            options.fallback_locale.as_deref(),
        )?;
        let cache = match options.cache_capacity {
            Some(capacity) => PatternCache::new(capacity),
            None => PatternCache::disabled(),
        };
        Ok(Formatter {
            locale,
            handlers: Handlers {
                tag_handlers: options.tag_handlers,
                custom_formatters: options.custom_formatters,
            },
            strict_variables: options.strict_variables,
            cache,
        })
    }

    fn render(&self, pattern: &str, args: &Args, ignore_tag: bool) -> Result<String, FormatError> {
        let msg = self.cache.get_or_parse(pattern, ignore_tag)?;
        let ctx = FormatContext::new(&self.locale, args, &self.handlers, self.strict_variables);
        let mut out = String::new();
        format_message(&msg, &ctx, &mut out)?;
        Ok(out)
    }

    pub fn format(&self, pattern: &str, args: &Args) -> Result<String, FormatError> {
        self.render(pattern, args, false)
    }

    /// Flattens `args` (`spec.md` §9 "Nested argument flattening") before
    /// formatting.
    pub fn format_complex(
        &self,
        pattern: &str,
        args: &FnvHashMap<SmartString, NestedValue>,
    ) -> Result<String, FormatError> {
        self.render(pattern, &flatten_args(args), false)
    }

    /// Parses with tags disabled so literal markup in `pattern` passes
    /// through untouched, then makes the rendered result HTML-safe.
    pub fn format_html(&self, pattern: &str, args: &Args) -> Result<String, FormatError> {
        let rendered = self.render(pattern, args, true)?;
        Ok(make_html_safe(&rendered))
    }

    pub fn locale(&self) -> &LocaleData {
        &self.locale
    }

    pub fn cache_stats(&self) -> msgfmt_ast::CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::value::Value;
    use msgfmt_locale::InMemoryProvider;
    use pretty_assertions::assert_eq;

    fn formatter() -> Formatter {
        let provider: Arc<dyn LocaleDataProvider> = Arc::new(InMemoryProvider::builtin());
        Formatter::new("en", FormatterOptions::new(provider)).unwrap()
    }

    #[test]
    fn formats_a_simple_pattern() {
        let f = formatter();
        let mut args = Args::default();
        args.insert("name".into(), Value::String("Ada".into()));
        assert_eq!(f.format("Hello, {name}!", &args).unwrap(), "Hello, Ada!");
    }

    #[test]
    fn format_complex_flattens_nested_args() {
        let f = formatter();
        let mut inner = FnvHashMap::default();
        inner.insert("first".into(), NestedValue::Leaf(Value::String("Ada".into())));
        let mut tree = FnvHashMap::default();
        tree.insert("user".into(), NestedValue::Map(inner));
        assert_eq!(f.format_complex("Hi, {user__first}!", &tree).unwrap(), "Hi, Ada!");
    }

    #[test]
    fn format_html_escapes_raw_markup_but_passes_through_pattern_tags() {
        let f = formatter();
        let mut args = Args::default();
        args.insert("name".into(), Value::String("<b>Ada</b>".into()));
        let out = f.format_html("<p>Hello, {name}</p>", &args).unwrap();
        assert_eq!(out, "&lt;p&gt;Hello, &lt;b&gt;Ada&lt;/b&gt;&lt;/p&gt;");
    }

    #[test]
    fn repeated_pattern_reuses_cached_parse() {
        let f = formatter();
        let mut args = Args::default();
        args.insert("name".into(), Value::String("Ada".into()));
        f.format("Hello, {name}!", &args).unwrap();
        f.format("Hello, {name}!", &args).unwrap();
        let stats = f.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }
}
