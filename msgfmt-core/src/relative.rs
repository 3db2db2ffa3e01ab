//! Relative-time formatting (`spec.md` §4.7): exact-offset phrasing in
//! `auto` numeric mode, else a future/past pattern keyed by plural category.

use crate::error::FormatError;
use msgfmt_locale::{LocaleData, PluralOperands, RelativeField, Width};

fn parse_field(field: &str) -> Option<RelativeField> {
    match field {
        "day" => Some(RelativeField::Day),
        "week" => Some(RelativeField::Week),
        "month" => Some(RelativeField::Month),
        "quarter" => Some(RelativeField::Quarter),
        "year" => Some(RelativeField::Year),
        "hour" => Some(RelativeField::Hour),
        "minute" => Some(RelativeField::Minute),
        "second" => Some(RelativeField::Second),
        _ => None,
    }
}

fn parse_width(width: &str) -> Width {
    match width {
        "short" => Width::Short,
        "narrow" => Width::Narrow,
        _ => Width::Long,
    }
}

/// `value` is a signed offset in `field` units (negative = past, positive =
/// future, zero = present). `numeric_mode` is `"auto"` (prefer an exact-offset
/// phrasing like "yesterday") or `"always"` (always use the numeric pattern).
pub fn format_relative_time(
    value: f64,
    field: &str,
    width: &str,
    numeric_mode: &str,
    locale: &LocaleData,
) -> Result<String, FormatError> {
    let field = parse_field(field)
        .ok_or_else(|| FormatError::format(format!("unknown relative time field {field:?}")))?;
    let width = parse_width(width);
    let data = locale
        .relative
        .fields
        .get(&(field, width))
        .or_else(|| locale.relative.fields.get(&(field, Width::Long)));

    let rounded = value.round() as i64;
    if numeric_mode != "always" {
        if let Some(phrase) = data.and_then(|d| d.exact.get(&rounded)) {
            return Ok(phrase.to_string());
        }
    }

    let number = msgfmt_number::format_default(value.abs(), locale);
    let ops = PluralOperands::from_f64(value.abs());
    let category = locale.plural_category(&ops);
    let table = if value < 0.0 {
        data.map(|d| &d.past)
    } else {
        data.map(|d| &d.future)
    };
    let pattern = table
        .and_then(|t| t.get(&category))
        .or_else(|| table.and_then(|t| t.get(&msgfmt_locale::PluralCategory::Other)));
    match pattern {
        Some(p) => Ok(p.replace("{0}", &number)),
        None => {
            log::warn!("no relative time pattern for {field:?}/{width:?}/{category:?} in locale, falling back to bare number");
            Ok(number)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    fn en() -> std::sync::Arc<LocaleData> {
        InMemoryProvider::builtin().try_get_locale("en").unwrap()
    }

    #[test]
    fn exact_offset_wins_in_auto_mode() {
        let out = format_relative_time(-1.0, "day", "long", "auto", &en()).unwrap();
        assert_eq!(out, "yesterday");
    }

    #[test]
    fn always_mode_skips_exact_offset() {
        let out = format_relative_time(-1.0, "day", "long", "always", &en()).unwrap();
        assert_eq!(out, "1 day ago");
    }

    #[test]
    fn future_plural_pattern() {
        let out = format_relative_time(3.0, "week", "long", "always", &en()).unwrap();
        assert_eq!(out, "in 3 weeks");
    }
}
