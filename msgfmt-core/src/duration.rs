//! Duration formatting (`spec.md` §4.7): numeric seconds or an ISO 8601
//! duration string, decomposed into year/month/day/hour/minute/second
//! buckets (year = 365d, month = 30d).

use crate::error::FormatError;
use crate::value::Value;
use msgfmt_ast::{DurationStyle, DurationStyleKind};
use msgfmt_locale::{ListStyle, LocaleData, PluralOperands, Width};

const YEAR_SECS: u64 = 365 * 24 * 3600;
const MONTH_SECS: u64 = 30 * 24 * 3600;
const DAY_SECS: u64 = 24 * 3600;
const HOUR_SECS: u64 = 3600;
const MINUTE_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, Default)]
struct Parts {
    years: u64,
    months: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

fn decompose(total_seconds: f64) -> Parts {
    let mut secs = total_seconds.abs() as u64;
    let years = secs / YEAR_SECS;
    secs %= YEAR_SECS;
    let months = secs / MONTH_SECS;
    secs %= MONTH_SECS;
    let days = secs / DAY_SECS;
    secs %= DAY_SECS;
    let hours = secs / HOUR_SECS;
    secs %= HOUR_SECS;
    let minutes = secs / MINUTE_SECS;
    secs %= MINUTE_SECS;
    Parts {
        years,
        months,
        days,
        hours,
        minutes,
        seconds: secs,
    }
}

fn duration_seconds(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        Value::Decimal(s) => s.parse().ok(),
        Value::String(s) => parse_iso8601_duration(s),
        _ => None,
    }
}

/// A minimal `PnYnMnDTnHnMnS` parser; unrecognized trailing text is ignored.
fn parse_iso8601_duration(s: &str) -> Option<f64> {
    let rest = s.strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (rest, None),
    };
    let mut total = scan_units(date_part, &[('Y', YEAR_SECS as f64), ('M', MONTH_SECS as f64), ('D', DAY_SECS as f64)]);
    if let Some(t) = time_part {
        total += scan_units(t, &[('H', HOUR_SECS as f64), ('M', MINUTE_SECS as f64), ('S', 1.0)]);
    }
    Some(total)
}

fn scan_units(s: &str, units: &[(char, f64)]) -> f64 {
    let mut total = 0.0;
    let mut num = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            num.push(c);
            continue;
        }
        if let Some((_, mult)) = units.iter().find(|(u, _)| *u == c) {
            if let Ok(n) = num.parse::<f64>() {
                total += n * mult;
            }
        }
        num.clear();
    }
    total
}

fn format_template(template: &str, parts: &Parts) -> String {
    template
        .replace("{years}", &parts.years.to_string())
        .replace("{months}", &parts.months.to_string())
        .replace("{days}", &parts.days.to_string())
        .replace("{hours}", &parts.hours.to_string())
        .replace("{minutes}", &parts.minutes.to_string())
        .replace("{seconds}", &parts.seconds.to_string())
}

fn format_timer(total_seconds: f64) -> String {
    let total = total_seconds.abs() as u64;
    let hours = total / HOUR_SECS;
    let minutes = (total % HOUR_SECS) / MINUTE_SECS;
    let seconds = total % MINUTE_SECS;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

fn format_named(parts: &Parts, width: Width, locale: &LocaleData) -> String {
    let fields: [(&str, u64); 6] = [
        ("year", parts.years),
        ("month", parts.months),
        ("day", parts.days),
        ("hour", parts.hours),
        ("minute", parts.minutes),
        ("second", parts.seconds),
    ];
    let mut pieces = Vec::new();
    for (unit, n) in fields {
        if n == 0 {
            continue;
        }
        let category = locale.plural_category(&PluralOperands::from_i64(n as i64));
        let number = msgfmt_number::format_default(n as f64, locale);
        let phrase = match locale.units.get(unit, width, category) {
            Some(pat) => pat.replace("{0}", &number),
            None => {
                log::warn!("no unit pattern for {unit:?} ({width:?}/{category:?}) in locale, falling back to bare unit id");
                format!("{number} {unit}")
            }
        };
        pieces.push(phrase);
    }
    if pieces.is_empty() {
        let number = msgfmt_number::format_default(0.0, locale);
        return locale
            .units
            .get("second", width, msgfmt_locale::PluralCategory::Other)
            .map(|pat| pat.replace("{0}", &number))
            .unwrap_or_else(|| format!("{number} seconds"));
    }
    crate::list::format_list(&pieces, ListStyle::Unit, width, locale)
}

pub fn format_duration(value: &Value, style: &DurationStyle, locale: &LocaleData) -> Result<String, FormatError> {
    let total_seconds = duration_seconds(value).ok_or_else(|| {
        FormatError::format("duration argument must be a number of seconds or an ISO 8601 duration string")
    })?;
    let parts = decompose(total_seconds);
    match style {
        DurationStyle::Template(t) => Ok(format_template(t, &parts)),
        DurationStyle::Named(DurationStyleKind::Timer) => Ok(format_timer(total_seconds)),
        DurationStyle::Named(kind) => {
            let width = match kind {
                DurationStyleKind::Long => Width::Long,
                DurationStyleKind::Short => Width::Short,
                DurationStyleKind::Narrow => Width::Narrow,
                DurationStyleKind::Timer => unreachable!("handled above"),
            };
            Ok(format_named(&parts, width, locale))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;
    use msgfmt_locale::LocaleDataProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn timer_style_pads_minutes_and_seconds() {
        let out = format_duration(
            &Value::Integer(3725),
            &DurationStyle::Named(DurationStyleKind::Timer),
            &InMemoryProvider::builtin().try_get_locale("en").unwrap(),
        )
        .unwrap();
        assert_eq!(out, "1:02:05");
    }

    #[test]
    fn template_style_substitutes_placeholders() {
        let out = format_duration(
            &Value::Integer(3725),
            &DurationStyle::Template("{hours}h {minutes}m".into()),
            &InMemoryProvider::builtin().try_get_locale("en").unwrap(),
        )
        .unwrap();
        assert_eq!(out, "1h 2m");
    }

    #[test]
    fn iso8601_duration_string_is_parsed() {
        let out = format_duration(
            &Value::String("PT1H30M".into()),
            &DurationStyle::Template("{hours}:{minutes}".into()),
            &InMemoryProvider::builtin().try_get_locale("en").unwrap(),
        )
        .unwrap();
        assert_eq!(out, "1:30");
    }

    #[test]
    fn named_long_joins_with_locale_list() {
        let out = format_duration(
            &Value::Integer(3725),
            &DurationStyle::Named(DurationStyleKind::Long),
            &InMemoryProvider::builtin().try_get_locale("en").unwrap(),
        )
        .unwrap();
        assert_eq!(out, "1 hour, 2 minutes, 5 seconds");
    }
}
