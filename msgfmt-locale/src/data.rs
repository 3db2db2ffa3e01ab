//! The locale-data record type populated from precompiled CLDR tables
//! (`spec.md` §4 Locale Data Interface, §6 locale data provider interface).
//!
//! Building these tables from raw CLDR JSON is explicitly out of scope
//! (`spec.md` §1); this module only defines the shape and ships two builtin
//! instances (`en`, `de-DE`) so the engine is runnable without an external
//! data build step.

use crate::plural::{PluralCategory, PluralOperands, PluralRuleFn};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Width {
    Long,
    Short,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListStyle {
    Conjunction,
    Disjunction,
    Unit,
}

/// `{start, middle, end, two}` patterns for one (style, width) combination
/// (`spec.md` §4.6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPattern {
    pub two: SmartString,
    pub start: SmartString,
    pub middle: SmartString,
    pub end: SmartString,
}

impl Default for ListPattern {
    fn default() -> Self {
        ListPattern {
            two: "{0} and {1}".into(),
            start: "{0}, {1}".into(),
            middle: "{0}, {1}".into(),
            end: "{0}, and {1}".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyData {
    /// ISO code -> display symbol, e.g. `USD` -> `$`.
    pub symbol: FnvHashMap<SmartString, SmartString>,
    /// ISO code -> narrow symbol.
    pub narrow_symbol: FnvHashMap<SmartString, SmartString>,
    /// (ISO code, plural category) -> plural-aware display name, e.g. ("USD", One) -> "US dollar".
    pub display_name: FnvHashMap<(SmartString, PluralCategory), SmartString>,
    /// Host pattern for placing a formatted (unsigned) number relative to the
    /// currency sign, containing `{0}` for the number and `{1}` for the sign.
    /// Sign display (`spec.md` §4.3 step 5) is applied to the composed result
    /// afterwards, so this pattern never encodes negativity itself.
    pub pattern: SmartString,
    /// ISO code used by the bare `currency` number style (`spec.md` §6), which
    /// names no explicit code of its own.
    pub default_currency: SmartString,
}

impl CurrencyData {
    fn english_default() -> Self {
        CurrencyData {
            symbol: [("USD".into(), "$".into()), ("EUR".into(), "€".into())]
                .into_iter()
                .collect(),
            narrow_symbol: [("USD".into(), "$".into()), ("EUR".into(), "€".into())]
                .into_iter()
                .collect(),
            display_name: [
                (("USD".into(), PluralCategory::One), "US dollar".into()),
                (("USD".into(), PluralCategory::Other), "US dollars".into()),
                (("EUR".into(), PluralCategory::One), "euro".into()),
                (("EUR".into(), PluralCategory::Other), "euros".into()),
            ]
            .into_iter()
            .collect(),
            pattern: "{1}{0}".into(),
            default_currency: "USD".into(),
        }
    }
}

/// Unit pattern for one (unit id, width, plural category) combination, containing
/// a `{0}` placeholder for the number (`spec.md` §4.3 Unit sub-path).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitData {
    pub patterns: FnvHashMap<(SmartString, Width, PluralCategory), SmartString>,
}

impl UnitData {
    pub fn get(&self, unit: &str, width: Width, category: PluralCategory) -> Option<&str> {
        self.patterns
            .get(&(unit.into(), width, category))
            .map(|s| s.as_str())
            .or_else(|| {
                self.patterns
                    .get(&(unit.into(), width, PluralCategory::Other))
                    .map(|s| s.as_str())
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateStyle {
    Short,
    Medium,
    Long,
    Full,
}

/// Host-pattern strings (e.g. `chrono` strftime-ish tokens emitted by
/// `msgfmt-datetime`) for the four standard widths, for dates, times, and the
/// date+time glue (`spec.md` §4.4).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePatterns {
    pub date: FnvHashMap<DateStyle, SmartString>,
    pub time: FnvHashMap<DateStyle, SmartString>,
    /// glue pattern containing `{0}` (formatted date) and `{1}` (formatted time)
    pub datetime: FnvHashMap<DateStyle, SmartString>,
    /// whether the locale's short-time pattern uses a 12-hour clock (drives `j`)
    pub uses_12_hour: bool,
    pub first_day_of_week: u8,
    pub min_days_in_first_week: u8,
}

/// Width of a CLDR calendar field name (month, weekday, quarter, era).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameWidth {
    Wide,
    Abbreviated,
    Narrow,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuarterData {
    /// (format-context, width, quarter 1..=4) -> name
    pub format: FnvHashMap<(NameWidth, u8), SmartString>,
    pub standalone: FnvHashMap<(NameWidth, u8), SmartString>,
}

/// Month and weekday spellouts used by the `M`/`L`/`E`/`c` skeleton fields
/// (`spec.md` §4.4). CLDR carries these alongside the date patterns proper, so
/// they live on `LocaleData` rather than as a separate provider method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarNames {
    /// (format-context, width, month 1..=12) -> name
    pub months_format: FnvHashMap<(NameWidth, u8), SmartString>,
    pub months_standalone: FnvHashMap<(NameWidth, u8), SmartString>,
    /// (format-context, width, ISO weekday 1..=7, Monday=1) -> name
    pub weekdays_format: FnvHashMap<(NameWidth, u8), SmartString>,
    pub weekdays_standalone: FnvHashMap<(NameWidth, u8), SmartString>,
    /// width -> (BC, AD)
    pub eras: FnvHashMap<NameWidth, (SmartString, SmartString)>,
    /// am, pm
    pub day_periods: (SmartString, SmartString),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeField {
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelativeTimeField {
    /// exact-offset phrasings, e.g. -1 -> "yesterday", 0 -> "today", 1 -> "tomorrow"
    pub exact: FnvHashMap<i64, SmartString>,
    /// plural-category -> pattern with `{0}`, for values in the future
    pub future: FnvHashMap<PluralCategory, SmartString>,
    /// plural-category -> pattern with `{0}`, for values in the past
    pub past: FnvHashMap<PluralCategory, SmartString>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelativeTimeData {
    pub fields: FnvHashMap<(RelativeField, Width), RelativeTimeField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalData {
    /// fallback pattern, e.g. `"{0} – {1}"`
    pub fallback: SmartString,
    /// skeleton -> pattern containing `{0}`/`{1}`, for calendar-field-aware joins
    pub by_skeleton: FnvHashMap<SmartString, SmartString>,
}

impl Default for IntervalData {
    fn default() -> Self {
        IntervalData {
            fallback: "{0} \u{2013} {1}".into(),
            by_skeleton: FnvHashMap::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberSymbols {
    pub decimal: SmartString,
    pub group: SmartString,
    pub percent_sign: SmartString,
    pub plus_sign: SmartString,
    pub minus_sign: SmartString,
    pub permille: SmartString,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        NumberSymbols {
            decimal: ".".into(),
            group: ",".into(),
            percent_sign: "%".into(),
            plus_sign: "+".into(),
            minus_sign: "-".into(),
            permille: "\u{2030}".into(),
        }
    }
}

/// Non-Latin numbering system digit table (`spec.md` §4.3 step 7). `None` unless
/// the locale's default numbering system is non-Latin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitTable(pub [char; 10]);

/// A fully resolved locale's formatting tables plus its precompiled plural and
/// ordinal categorizers (`spec.md` §4.5, §6). Immutable and safe to share behind
/// an `Arc` across threads (`spec.md` §5).
#[derive(Debug, Clone)]
pub struct LocaleData {
    pub code: SmartString,
    pub plural_rule: PluralRuleFn,
    pub ordinal_rule: PluralRuleFn,
    pub symbols: NumberSymbols,
    pub digits: Option<DigitTable>,
    pub currency: CurrencyData,
    pub units: UnitData,
    pub list: FnvHashMap<(ListStyle, Width), ListPattern>,
    pub dates: DatePatterns,
    pub quarters: QuarterData,
    pub calendar: CalendarNames,
    pub relative: RelativeTimeData,
    pub intervals: IntervalData,
    /// locale's "and" connector for compact human-readable lists (duration/ordinals)
    pub and_word: SmartString,
}

impl LocaleData {
    pub fn plural_category(&self, ops: &PluralOperands) -> PluralCategory {
        (self.plural_rule)(ops)
    }

    pub fn ordinal_category(&self, ops: &PluralOperands) -> PluralCategory {
        (self.ordinal_rule)(ops)
    }

    pub fn list_pattern(&self, style: ListStyle, width: Width) -> &ListPattern {
        self.list.get(&(style, width)).unwrap_or_else(|| {
            log::debug!("no {style:?}/{width:?} list pattern in locale, using conjunction/long");
            self.list.get(&(ListStyle::Conjunction, Width::Long)).unwrap()
        })
    }
}

pub(crate) fn builtin_en() -> LocaleData {
    use crate::plural::{en_cardinal, en_ordinal};
    use RelativeField::*;

    let mut list = FnvHashMap::default();
    list.insert(
        (ListStyle::Conjunction, Width::Long),
        ListPattern {
            two: "{0} and {1}".into(),
            start: "{0}, {1}".into(),
            middle: "{0}, {1}".into(),
            end: "{0}, and {1}".into(),
        },
    );
    list.insert(
        (ListStyle::Disjunction, Width::Long),
        ListPattern {
            two: "{0} or {1}".into(),
            start: "{0}, {1}".into(),
            middle: "{0}, {1}".into(),
            end: "{0}, or {1}".into(),
        },
    );
    list.insert(
        (ListStyle::Unit, Width::Long),
        ListPattern {
            two: "{0}, {1}".into(),
            start: "{0}, {1}".into(),
            middle: "{0}, {1}".into(),
            end: "{0}, {1}".into(),
        },
    );

    let mut date = FnvHashMap::default();
    date.insert(DateStyle::Short, "M/d/yy".into());
    date.insert(DateStyle::Medium, "MMM d, y".into());
    date.insert(DateStyle::Long, "MMMM d, y".into());
    date.insert(DateStyle::Full, "EEEE, MMMM d, y".into());
    let mut time = FnvHashMap::default();
    time.insert(DateStyle::Short, "h:mm a".into());
    time.insert(DateStyle::Medium, "h:mm:ss a".into());
    time.insert(DateStyle::Long, "h:mm:ss a z".into());
    time.insert(DateStyle::Full, "h:mm:ss a zzzz".into());
    let mut datetime = FnvHashMap::default();
    for s in [DateStyle::Short, DateStyle::Medium, DateStyle::Long, DateStyle::Full] {
        datetime.insert(s, "{0}, {1}".into());
    }

    let mut quarters_format = FnvHashMap::default();
    let mut quarters_standalone = FnvHashMap::default();
    let wide = ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"];
    let abbr = ["Q1", "Q2", "Q3", "Q4"];
    for (i, (w, a)) in wide.iter().zip(abbr.iter()).enumerate() {
        let q = (i + 1) as u8;
        quarters_format.insert((NameWidth::Wide, q), (*w).into());
        quarters_format.insert((NameWidth::Abbreviated, q), (*a).into());
        quarters_format.insert((NameWidth::Narrow, q), q.to_string().into());
        quarters_standalone.insert((NameWidth::Wide, q), (*w).into());
        quarters_standalone.insert((NameWidth::Abbreviated, q), (*a).into());
        quarters_standalone.insert((NameWidth::Narrow, q), q.to_string().into());
    }

    let month_wide = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    let month_abbr = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let mut months_format = FnvHashMap::default();
    for (i, (w, a)) in month_wide.iter().zip(month_abbr.iter()).enumerate() {
        let m = (i + 1) as u8;
        months_format.insert((NameWidth::Wide, m), (*w).into());
        months_format.insert((NameWidth::Abbreviated, m), (*a).into());
        months_format.insert((NameWidth::Narrow, m), w[..1].into());
    }

    let weekday_wide = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ];
    let weekday_abbr = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let mut weekdays_format = FnvHashMap::default();
    for (i, (w, a)) in weekday_wide.iter().zip(weekday_abbr.iter()).enumerate() {
        let d = (i + 1) as u8;
        weekdays_format.insert((NameWidth::Wide, d), (*w).into());
        weekdays_format.insert((NameWidth::Abbreviated, d), (*a).into());
        weekdays_format.insert((NameWidth::Narrow, d), w[..1].into());
    }

    let mut eras = FnvHashMap::default();
    eras.insert(NameWidth::Wide, ("Before Christ".into(), "Anno Domini".into()));
    eras.insert(NameWidth::Abbreviated, ("BC".into(), "AD".into()));
    eras.insert(NameWidth::Narrow, ("B".into(), "A".into()));

    let calendar = CalendarNames {
        months_format: months_format.clone(),
        months_standalone: months_format,
        weekdays_format: weekdays_format.clone(),
        weekdays_standalone: weekdays_format,
        eras,
        day_periods: ("AM".into(), "PM".into()),
    };

    let mut relative_fields = FnvHashMap::default();
    let mut day = RelativeTimeField::default();
    day.exact.insert(-1, "yesterday".into());
    day.exact.insert(0, "today".into());
    day.exact.insert(1, "tomorrow".into());
    day.future.insert(PluralCategory::One, "in {0} day".into());
    day.future
        .insert(PluralCategory::Other, "in {0} days".into());
    day.past.insert(PluralCategory::One, "{0} day ago".into());
    day.past
        .insert(PluralCategory::Other, "{0} days ago".into());
    relative_fields.insert((Day, Width::Long), day);

    let mut week = RelativeTimeField::default();
    week.exact.insert(-1, "last week".into());
    week.exact.insert(0, "this week".into());
    week.exact.insert(1, "next week".into());
    week.future
        .insert(PluralCategory::One, "in {0} week".into());
    week.future
        .insert(PluralCategory::Other, "in {0} weeks".into());
    week.past
        .insert(PluralCategory::One, "{0} week ago".into());
    week.past
        .insert(PluralCategory::Other, "{0} weeks ago".into());
    relative_fields.insert((Week, Width::Long), week);

    let mut month = RelativeTimeField::default();
    month.exact.insert(-1, "last month".into());
    month.exact.insert(0, "this month".into());
    month.exact.insert(1, "next month".into());
    month
        .future
        .insert(PluralCategory::One, "in {0} month".into());
    month
        .future
        .insert(PluralCategory::Other, "in {0} months".into());
    month
        .past
        .insert(PluralCategory::One, "{0} month ago".into());
    month
        .past
        .insert(PluralCategory::Other, "{0} months ago".into());
    relative_fields.insert((Month, Width::Long), month);

    let mut year = RelativeTimeField::default();
    year.exact.insert(-1, "last year".into());
    year.exact.insert(0, "this year".into());
    year.exact.insert(1, "next year".into());
    year.future.insert(PluralCategory::One, "in {0} year".into());
    year.future
        .insert(PluralCategory::Other, "in {0} years".into());
    year.past.insert(PluralCategory::One, "{0} year ago".into());
    year.past
        .insert(PluralCategory::Other, "{0} years ago".into());
    relative_fields.insert((Year, Width::Long), year);

    let mut hour = RelativeTimeField::default();
    hour.future
        .insert(PluralCategory::One, "in {0} hour".into());
    hour.future
        .insert(PluralCategory::Other, "in {0} hours".into());
    hour.past.insert(PluralCategory::One, "{0} hour ago".into());
    hour.past
        .insert(PluralCategory::Other, "{0} hours ago".into());
    relative_fields.insert((Hour, Width::Long), hour);

    let mut minute = RelativeTimeField::default();
    minute
        .future
        .insert(PluralCategory::One, "in {0} minute".into());
    minute
        .future
        .insert(PluralCategory::Other, "in {0} minutes".into());
    minute
        .past
        .insert(PluralCategory::One, "{0} minute ago".into());
    minute
        .past
        .insert(PluralCategory::Other, "{0} minutes ago".into());
    relative_fields.insert((Minute, Width::Long), minute);

    let mut second = RelativeTimeField::default();
    second.exact.insert(0, "now".into());
    second
        .future
        .insert(PluralCategory::One, "in {0} second".into());
    second
        .future
        .insert(PluralCategory::Other, "in {0} seconds".into());
    second
        .past
        .insert(PluralCategory::One, "{0} second ago".into());
    second
        .past
        .insert(PluralCategory::Other, "{0} seconds ago".into());
    relative_fields.insert((Second, Width::Long), second);

    let mut units = UnitData::default();
    for (unit, one, other) in [
        ("hour", "{0} hour", "{0} hours"),
        ("minute", "{0} minute", "{0} minutes"),
        ("second", "{0} second", "{0} seconds"),
        ("year", "{0} year", "{0} years"),
        ("month", "{0} month", "{0} months"),
        ("day", "{0} day", "{0} days"),
    ] {
        units.patterns.insert(
            (unit.into(), Width::Long, PluralCategory::One),
            one.into(),
        );
        units.patterns.insert(
            (unit.into(), Width::Long, PluralCategory::Other),
            other.into(),
        );
        units
            .patterns
            .insert((unit.into(), Width::Short, PluralCategory::One), one.into());
        units.patterns.insert(
            (unit.into(), Width::Short, PluralCategory::Other),
            other.into(),
        );
    }

    LocaleData {
        code: "en".into(),
        plural_rule: en_cardinal,
        ordinal_rule: en_ordinal,
        symbols: NumberSymbols::default(),
        digits: None,
        currency: CurrencyData::english_default(),
        units,
        list,
        dates: DatePatterns {
            date,
            time,
            datetime,
            uses_12_hour: true,
            first_day_of_week: 0,
            min_days_in_first_week: 1,
        },
        quarters: QuarterData {
            format: quarters_format,
            standalone: quarters_standalone,
        },
        calendar,
        relative: RelativeTimeData {
            fields: relative_fields,
        },
        intervals: IntervalData::default(),
        and_word: "and".into(),
    }
}

pub(crate) fn builtin_de_de() -> LocaleData {
    use crate::plural::{de_cardinal, de_ordinal};

    let mut en = builtin_en();
    en.code = "de-DE".into();
    en.plural_rule = de_cardinal;
    en.ordinal_rule = de_ordinal;
    en.symbols = NumberSymbols {
        decimal: ",".into(),
        group: ".".into(),
        percent_sign: "%".into(),
        plus_sign: "+".into(),
        minus_sign: "-".into(),
        permille: "\u{2030}".into(),
    };
    en.and_word = "und".into();
    en.dates.uses_12_hour = false;
    en.dates.first_day_of_week = 1;
    en.dates.min_days_in_first_week = 4;
    en.dates
        .date
        .insert(DateStyle::Short, "dd.MM.yy".into());
    en.dates
        .date
        .insert(DateStyle::Medium, "d. MMM y".into());
    en.dates
        .date
        .insert(DateStyle::Long, "d. MMMM y".into());
    en.dates
        .date
        .insert(DateStyle::Full, "EEEE, d. MMMM y".into());
    en.dates.time.insert(DateStyle::Short, "HH:mm".into());
    en.dates.time.insert(DateStyle::Medium, "HH:mm:ss".into());
    en.dates
        .time
        .insert(DateStyle::Long, "HH:mm:ss z".into());
    en.dates
        .time
        .insert(DateStyle::Full, "HH:mm:ss zzzz".into());

    let wide = ["1. Quartal", "2. Quartal", "3. Quartal", "4. Quartal"];
    for (i, w) in wide.iter().enumerate() {
        let q = (i + 1) as u8;
        en.quarters.format.insert((NameWidth::Wide, q), (*w).into());
        en.quarters
            .standalone
            .insert((NameWidth::Wide, q), (*w).into());
    }
    en.currency.pattern = "{0} {1}".into();
    en.currency.default_currency = "EUR".into();

    let month_wide = [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ];
    let month_abbr = [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
        "Dez.",
    ];
    for (i, (w, a)) in month_wide.iter().zip(month_abbr.iter()).enumerate() {
        let m = (i + 1) as u8;
        en.calendar.months_format.insert((NameWidth::Wide, m), (*w).into());
        en.calendar
            .months_format
            .insert((NameWidth::Abbreviated, m), (*a).into());
        en.calendar
            .months_standalone
            .insert((NameWidth::Wide, m), (*w).into());
        en.calendar
            .months_standalone
            .insert((NameWidth::Abbreviated, m), (*a).into());
    }

    let weekday_wide = [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ];
    let weekday_abbr = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];
    for (i, (w, a)) in weekday_wide.iter().zip(weekday_abbr.iter()).enumerate() {
        let d = (i + 1) as u8;
        en.calendar.weekdays_format.insert((NameWidth::Wide, d), (*w).into());
        en.calendar
            .weekdays_format
            .insert((NameWidth::Abbreviated, d), (*a).into());
        en.calendar
            .weekdays_standalone
            .insert((NameWidth::Wide, d), (*w).into());
        en.calendar
            .weekdays_standalone
            .insert((NameWidth::Abbreviated, d), (*a).into());
    }

    en.calendar.eras.insert(
        NameWidth::Wide,
        ("vor Christus".into(), "nach Christus".into()),
    );
    en.calendar
        .eras
        .insert(NameWidth::Abbreviated, ("v. Chr.".into(), "n. Chr.".into()));

    en
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn en_has_currency_symbol() {
        let en = builtin_en();
        assert_eq!(en.currency.symbol.get("USD").map(|s| s.as_str()), Some("$"));
    }

    #[test]
    fn de_uses_comma_decimal() {
        let de = builtin_de_de();
        assert_eq!(de.symbols.decimal, ",");
    }
}
