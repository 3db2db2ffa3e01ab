//! Renders a [`HostToken`] stream against a concrete [`Instant`] and locale,
//! producing the final text (`spec.md` §4.4). Directly renderable fields are
//! formatted inline; marker fields are stamped as private-use placeholder
//! codepoints and immediately resolved via [`crate::postprocess`], since this
//! implementation always has the instant on hand by the time it renders —
//! the marker indirection exists to keep the skeleton-to-host translation
//! step (cacheable, instant-independent) separate from instant-dependent
//! rendering, per the architecture `spec.md` describes.

use crate::postprocess;
use crate::translate::{HostField, HostToken, MarkerKind};
use crate::value::Instant;
use chrono::{Datelike, Timelike};
use msgfmt_locale::{LocaleData, NameWidth};
use std::fmt::Write as _;

fn pad(n: impl std::fmt::Display, width: u8) -> String {
    let s = n.to_string();
    if (width as usize) > s.len() {
        format!("{}{}", "0".repeat(width as usize - s.len()), s)
    } else {
        s
    }
}

fn render_field(field: HostField, instant: &Instant, locale: &LocaleData, out: &mut String) {
    let date = instant.date;
    let time = instant.time;
    match field {
        HostField::Year(count) => {
            if count == 2 {
                let _ = write!(out, "{}", pad(date.year().rem_euclid(100), 2));
            } else {
                let _ = write!(out, "{}", pad(date.year(), count));
            }
        }
        HostField::MonthNumeric(count) => {
            let _ = write!(out, "{}", pad(date.month(), count));
        }
        HostField::MonthStandaloneNumeric(count) => {
            let _ = write!(out, "{}", pad(date.month(), count));
        }
        HostField::MonthName(width) => {
            out.push_str(
                locale
                    .calendar
                    .months_format
                    .get(&(width, date.month() as u8))
                    .map(|s| s.as_str())
                    .unwrap_or(""),
            );
        }
        HostField::MonthStandaloneName(width) => {
            out.push_str(
                locale
                    .calendar
                    .months_standalone
                    .get(&(width, date.month() as u8))
                    .map(|s| s.as_str())
                    .unwrap_or(""),
            );
        }
        HostField::Day(count) => {
            let _ = write!(out, "{}", pad(date.day(), count));
        }
        HostField::WeekdayName(width) => {
            let iso = date.weekday().number_from_monday() as u8;
            out.push_str(
                locale
                    .calendar
                    .weekdays_format
                    .get(&(width, iso))
                    .map(|s| s.as_str())
                    .unwrap_or(""),
            );
        }
        HostField::WeekdayStandaloneName(width) => {
            let iso = date.weekday().number_from_monday() as u8;
            out.push_str(
                locale
                    .calendar
                    .weekdays_standalone
                    .get(&(width, iso))
                    .map(|s| s.as_str())
                    .unwrap_or(""),
            );
        }
        HostField::Hour12(count) => {
            let h = time.hour12().1;
            let h = if h == 0 { 12 } else { h };
            let _ = write!(out, "{}", pad(h, count));
        }
        HostField::Hour12ZeroBased(count) => {
            let _ = write!(out, "{}", pad(time.hour12().1, count));
        }
        HostField::Hour24(count) => {
            let _ = write!(out, "{}", pad(time.hour(), count));
        }
        HostField::Hour24OneIndexed(count) => {
            let h = time.hour();
            let h = if h == 0 { 24 } else { h };
            let _ = write!(out, "{}", pad(h, count));
        }
        HostField::Minute(count) => {
            // ICU conventionally renders minutes two-digit wide even for a
            // bare `m` skeleton token.
            let _ = write!(out, "{}", pad(time.minute(), count.max(2)));
        }
        HostField::Second(count) => {
            let _ = write!(out, "{}", pad(time.second(), count.max(2)));
        }
        HostField::FractionalSecond(count) => {
            let nanos = time.nanosecond();
            let digits = format!("{:09}", nanos);
            out.push_str(&digits[..(count as usize).min(9)]);
        }
        HostField::DayPeriod => {
            let (am, pm) = &locale.calendar.day_periods;
            out.push_str(if time.hour12().0 { pm } else { am });
        }
        HostField::Era(width) => {
            let (bc, ad) = locale
                .calendar
                .eras
                .get(&width)
                .or_else(|| locale.calendar.eras.get(&NameWidth::Abbreviated))
                .cloned()
                .unwrap_or_else(|| ("BC".into(), "AD".into()));
            out.push_str(if date.year() > 0 { &ad } else { &bc });
        }
        HostField::TimeZone(ch, count) => {
            render_timezone(ch, count, instant, out);
        }
    }
}

fn render_timezone(ch: char, count: u8, instant: &Instant, out: &mut String) {
    let total_min = instant.offset_minutes;
    let sign = if total_min < 0 { '-' } else { '+' };
    let abs_min = total_min.unsigned_abs();
    let hh = abs_min / 60;
    let mm = abs_min % 60;
    match ch {
        'z' | 'Z' if count < 4 => {
            let _ = write!(out, "GMT{}{:02}:{:02}", sign, hh, mm);
        }
        'Z' => {
            let _ = write!(out, "{}{:02}{:02}", sign, hh, mm);
        }
        'X' | 'x' => {
            if total_min == 0 && ch == 'X' {
                out.push('Z');
            } else if count == 1 {
                let _ = write!(out, "{}{:02}", sign, hh);
            } else {
                let _ = write!(out, "{}{:02}:{:02}", sign, hh, mm);
            }
        }
        _ => {
            let _ = write!(out, "GMT{}{:02}:{:02}", sign, hh, mm);
        }
    }
}

fn render_marker(marker: MarkerKind, instant: &Instant, locale: &LocaleData, out: &mut String) {
    match marker {
        MarkerKind::DayOfYear => out.push_str(&postprocess::day_of_year(instant)),
        MarkerKind::QuarterFormat(width) => {
            out.push_str(&postprocess::quarter_name(instant, locale, width, false))
        }
        MarkerKind::QuarterStandalone(width) => {
            out.push_str(&postprocess::quarter_name(instant, locale, width, true))
        }
        MarkerKind::WeekOfYear { padded } => {
            let week = postprocess::week_of_year(instant, locale);
            if padded {
                out.push_str(&pad(week, 2));
            } else {
                let _ = write!(out, "{}", week);
            }
        }
    }
}

/// Renders a translated host-token stream for a concrete instant.
pub fn render(tokens: &[HostToken], instant: &Instant, locale: &LocaleData) -> String {
    let mut out = String::new();
    for tok in tokens {
        match tok {
            HostToken::Literal(lit) => out.push_str(lit),
            HostToken::Field(field) => render_field(*field, instant, locale, &mut out),
            HostToken::Marker(marker) => render_marker(*marker, instant, locale, &mut out),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::skeleton::parse_skeleton;
    use crate::translate::translate;
    use msgfmt_locale::InMemoryProvider;

    fn en() -> LocaleData {
        let provider = InMemoryProvider::builtin();
        msgfmt_locale::resolve("en", &provider, Some("en")).unwrap().as_ref().clone()
    }

    fn de() -> LocaleData {
        let provider = InMemoryProvider::builtin();
        msgfmt_locale::resolve("de-DE", &provider, Some("en"))
            .unwrap()
            .as_ref()
            .clone()
    }

    fn render_skeleton(skeleton: &str, instant: &Instant, locale: &LocaleData) -> String {
        let tokens = parse_skeleton(skeleton).unwrap();
        let host = translate(&tokens, locale);
        render(&host, instant, locale)
    }

    #[test]
    fn yyyy_mm_dd() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(render_skeleton("yyyy-MM-dd", &instant, &en()), "2026-06-15");
    }

    #[test]
    fn month_name_long() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(render_skeleton("MMMMd", &instant, &en()), "June15");
    }

    #[test]
    fn twelve_hour_clock_with_day_period() {
        let instant = Instant::new(
            chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            chrono::NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
            0,
        );
        assert_eq!(render_skeleton("jm", &instant, &en()), "2:05 PM");
    }

    #[test]
    fn twenty_four_hour_clock_for_de() {
        let instant = Instant::new(
            chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            chrono::NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
            0,
        );
        assert_eq!(render_skeleton("jm", &instant, &de()), "14:05");
    }

    #[test]
    fn day_of_year_marker() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(render_skeleton("D", &instant, &en()), "166");
    }

    #[test]
    fn week_of_year_marker() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(render_skeleton("w", &instant, &en()), "25");
    }

    #[test]
    fn quarter_format_wide() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(render_skeleton("QQQQ", &instant, &en()), "2nd quarter");
    }
}
