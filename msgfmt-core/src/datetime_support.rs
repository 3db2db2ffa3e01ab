//! Shared resolution of a `DateTimeStyle` against locale style-pattern tables,
//! used by the `date`/`time`/`datetime` elements and by `daterange`
//! (`spec.md` §4.4, §4.7).

use msgfmt_ast::{DateTimeStyle, DateTimeStyleKind};
use msgfmt_datetime::{translate, Instant, SkeletonToken};
use msgfmt_locale::{DateStyle, LocaleData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Time,
    DateTime,
}

fn to_date_style(kind: DateTimeStyleKind) -> DateStyle {
    match kind {
        DateTimeStyleKind::Short => DateStyle::Short,
        DateTimeStyleKind::Medium => DateStyle::Medium,
        DateTimeStyleKind::Long => DateStyle::Long,
        DateTimeStyleKind::Full => DateStyle::Full,
    }
}

fn render_named_pattern(pattern: Option<&smartstring::alias::String>, instant: &Instant, locale: &LocaleData) -> String {
    match pattern {
        Some(p) => msgfmt_datetime::format_pattern(p, instant, locale).unwrap_or_default(),
        None => String::new(),
    }
}

/// Renders `instant` per `style`, honoring the named-style glue pattern
/// (`{0}, {1}` by default) for `FieldKind::DateTime`.
pub fn render_datetime_style(style: &DateTimeStyle, kind: FieldKind, instant: &Instant, locale: &LocaleData) -> String {
    match style {
        DateTimeStyle::Pattern(tokens) => {
            let host = translate(tokens, locale);
            msgfmt_datetime::render(&host, instant, locale)
        }
        DateTimeStyle::Named(named) => {
            let ds = to_date_style(*named);
            match kind {
                FieldKind::Date => render_named_pattern(locale.dates.date.get(&ds), instant, locale),
                FieldKind::Time => render_named_pattern(locale.dates.time.get(&ds), instant, locale),
                FieldKind::DateTime => {
                    let d = render_named_pattern(locale.dates.date.get(&ds), instant, locale);
                    let t = render_named_pattern(locale.dates.time.get(&ds), instant, locale);
                    let glue = locale
                        .dates
                        .datetime
                        .get(&ds)
                        .map(|s| s.as_str())
                        .unwrap_or("{0}, {1}");
                    glue.replace("{0}", &d).replace("{1}", &t)
                }
            }
        }
    }
}

/// The field-letter skeleton text for a `Pattern` style, used to look up a
/// calendar-field-aware interval pattern (`spec.md` §4.7). `Named` styles
/// have no skeleton key; callers fall back to the locale's fallback pattern.
pub fn skeleton_key(style: &DateTimeStyle) -> Option<String> {
    match style {
        DateTimeStyle::Pattern(tokens) => {
            let mut s = String::new();
            for t in tokens {
                if let SkeletonToken::Field { ch, count } = t {
                    for _ in 0..*count {
                        s.push(*ch);
                    }
                }
            }
            Some(s)
        }
        DateTimeStyle::Named(_) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_medium_date() {
        let locale = InMemoryProvider::builtin().try_get_locale("en").unwrap();
        let instant = Instant::from_ymd(2026, 6, 15);
        let out = render_datetime_style(
            &DateTimeStyle::Named(DateTimeStyleKind::Medium),
            FieldKind::Date,
            &instant,
            &locale,
        );
        assert_eq!(out, "Jun 15, 2026");
    }
}
