//! Resolves the handful of fields a host date/time formatter cannot produce
//! directly: day-of-year, format/standalone quarter names, and week-of-year
//! (`spec.md` §4.4, "DateTime Post-Processor").
//!
//! `spec.md` §9 leaves the week-of-year convention at the calendar-year
//! boundary as an open decision; this implementation reports the week number
//! within the containing calendar year rather than rolling over into
//! "week 1 of next year" the way full ISO 8601 week dates do (documented in
//! `DESIGN.md`).

use crate::value::Instant;
use chrono::{Datelike, Weekday};
use msgfmt_locale::{LocaleData, NameWidth};

pub fn day_of_year(instant: &Instant) -> String {
    instant.day_of_year().to_string()
}

pub fn quarter_name(instant: &Instant, locale: &LocaleData, width: NameWidth, standalone: bool) -> String {
    let q = instant.quarter();
    let table = if standalone {
        &locale.quarters.standalone
    } else {
        &locale.quarters.format
    };
    table.get(&(width, q)).map(|s| s.to_string()).unwrap_or_else(|| {
        log::debug!("no quarter name for width {width:?}, quarter {q} in locale, using bare digit");
        q.to_string()
    })
}

fn iso_weekday_from_first_day(first_day_of_week: u8) -> impl Fn(Weekday) -> i64 {
    move |wd: Weekday| {
        let iso = wd.num_days_from_monday() as i64;
        let first = if first_day_of_week == 0 {
            6
        } else {
            (first_day_of_week as i64) - 1
        };
        (iso - first).rem_euclid(7)
    }
}

/// Week of the containing calendar year, per the locale's `first_day_of_week`
/// and `min_days_in_first_week` (`spec.md` §4.4).
pub fn week_of_year(instant: &Instant, locale: &LocaleData) -> u32 {
    let date = instant.date;
    let offset = iso_weekday_from_first_day(locale.dates.first_day_of_week);
    let jan1 = chrono::NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("valid Jan 1");
    let jan1_week_day = offset(jan1.weekday());
    let days_before_first_week_start = jan1_week_day;
    let first_week_start_ordinal = 1i64 - days_before_first_week_start;
    let days_in_partial_first_week = 7 - days_before_first_week_start;

    let week_if_counted_from_jan1 =
        ((date.ordinal() as i64 - first_week_start_ordinal) / 7) + 1;

    if days_in_partial_first_week >= locale.dates.min_days_in_first_week as i64 {
        week_if_counted_from_jan1.max(1) as u32
    } else {
        (week_if_counted_from_jan1 - 1).max(1) as u32
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::InMemoryProvider;

    fn en() -> LocaleData {
        let provider = InMemoryProvider::builtin();
        msgfmt_locale::resolve("en", &provider, Some("en")).unwrap().as_ref().clone()
    }

    #[test]
    fn day_of_year_mid_june() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(day_of_year(&instant), "166");
    }

    #[test]
    fn quarter_name_q2() {
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(
            quarter_name(&instant, &en(), NameWidth::Wide, false),
            "2nd quarter"
        );
    }

    #[test]
    fn week_of_year_mid_june_2026() {
        // 2026-06-15 is a Monday; en's week starts Sunday, min 1 day.
        let instant = Instant::from_ymd(2026, 6, 15);
        assert_eq!(week_of_year(&instant, &en()), 25);
    }
}
