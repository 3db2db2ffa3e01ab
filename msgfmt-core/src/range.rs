//! `daterange` and `numberRange` (`spec.md` §4.7): format both ends, join by
//! a calendar-field-aware interval pattern when available, else the locale's
//! fallback `{0} – {1}`.

use crate::datetime_support::{render_datetime_style, skeleton_key, FieldKind};
use crate::error::FormatError;
use msgfmt_ast::DateTimeStyle;
use msgfmt_datetime::Instant;
use msgfmt_locale::LocaleData;
use msgfmt_number::NumberFormatOptions;

pub fn format_number_range(
    start: f64,
    end: f64,
    skeleton: Option<&NumberFormatOptions>,
    locale: &LocaleData,
) -> Result<String, FormatError> {
    let default_opts = NumberFormatOptions::default();
    let opts = skeleton.unwrap_or(&default_opts);
    let s = msgfmt_number::format(start, opts, locale).map_err(|e| FormatError::format(e.to_string()))?;
    let e = msgfmt_number::format(end, opts, locale).map_err(|e| FormatError::format(e.to_string()))?;
    Ok(locale.intervals.fallback.replace("{0}", &s).replace("{1}", &e))
}

pub fn format_date_range(start: Instant, end: Instant, style: &DateTimeStyle, locale: &LocaleData) -> String {
    let (start, end) = if start.datetime() > end.datetime() {
        (end, start)
    } else {
        (start, end)
    };
    let s = render_datetime_style(style, FieldKind::Date, &start, locale);
    let e = render_datetime_style(style, FieldKind::Date, &end, locale);
    let pattern = skeleton_key(style)
        .and_then(|k| locale.intervals.by_skeleton.get(k.as_str()))
        .map(|p| p.as_str())
        .unwrap_or_else(|| {
            log::debug!("no skeleton-specific interval pattern for this date range style, using locale fallback");
            locale.intervals.fallback.as_str()
        });
    pattern.replace("{0}", &s).replace("{1}", &e)
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn date_range_swaps_out_of_order_ends() {
        let locale = InMemoryProvider::builtin().try_get_locale("en").unwrap();
        let start = Instant::from_ymd(2026, 6, 20);
        let end = Instant::from_ymd(2026, 6, 10);
        let out = format_date_range(
            start,
            end,
            &DateTimeStyle::Named(msgfmt_ast::DateTimeStyleKind::Short),
            &locale,
        );
        assert_eq!(out, "6/10/26 \u{2013} 6/20/26");
    }

    #[test]
    fn number_range_uses_fallback_pattern() {
        let locale = InMemoryProvider::builtin().try_get_locale("en").unwrap();
        let out = format_number_range(1.0, 5.0, None, &locale).unwrap();
        assert_eq!(out, "1 \u{2013} 5");
    }
}
