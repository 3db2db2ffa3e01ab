//! ICU datetime skeleton parser, host-pattern translator, and post-processor
//! for msgfmt (`spec.md` §4.4).

pub mod error;
pub mod postprocess;
pub mod render;
pub mod skeleton;
pub mod translate;
pub mod value;

pub use error::DateTimeError;
pub use render::render;
pub use skeleton::{parse_skeleton, SkeletonToken};
pub use translate::{translate, HostField, HostToken, MarkerKind};
pub use value::Instant;

/// Formats `instant` against a raw skeleton or host-pattern string
/// (`spec.md` §4.4), combining [`skeleton::parse_skeleton`], [`translate::translate`]
/// and [`render::render`] in one call. Callers that format the same pattern
/// against many instants (e.g. an interval) should parse and translate once
/// and call [`render::render`] directly instead.
pub fn format_pattern(
    pattern: &str,
    instant: &Instant,
    locale: &msgfmt_locale::LocaleData,
) -> Result<String, DateTimeError> {
    log::trace!("formatting datetime pattern {pattern:?}");
    let tokens = skeleton::parse_skeleton(pattern).map_err(|e| {
        log::debug!("datetime pattern {pattern:?} rejected: {e}");
        e
    })?;
    let host = translate::translate(&tokens, locale);
    Ok(render::render(&host, instant, locale))
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;

    #[test]
    fn format_pattern_uses_style_pattern_string() {
        let provider = InMemoryProvider::builtin();
        let locale = msgfmt_locale::resolve("en", &provider, Some("en")).unwrap();
        let pattern = locale.dates.date.get(&msgfmt_locale::DateStyle::Medium).unwrap();
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(format_pattern(pattern, &instant, &locale).unwrap(), "Jun 15, 2026");
    }
}
