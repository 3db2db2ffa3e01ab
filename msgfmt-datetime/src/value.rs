use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// A temporal instant, as accepted by the `date`/`time`/`datetime` elements
/// (`spec.md` §3 argument model: "temporal instant"). Carries an optional
/// UTC offset in minutes, used by the `z`/`Z`/`X`/`x`/`V` timezone fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub offset_minutes: i32,
}

impl Instant {
    pub fn new(date: NaiveDate, time: NaiveTime, offset_minutes: i32) -> Self {
        Instant {
            date,
            time,
            offset_minutes,
        }
    }

    pub fn from_ymd(y: i32, m: u32, d: u32) -> Self {
        Instant {
            date: NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date"),
            time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            offset_minutes: 0,
        }
    }

    pub fn datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }

    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    pub fn quarter(&self) -> u8 {
        ((self.date.month() - 1) / 3 + 1) as u8
    }
}
