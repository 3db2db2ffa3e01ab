//! Resolves the locale-independent [`SkeletonToken`] stream into a
//! [`HostToken`] stream: `j`/`J` hour fields pick a 12- or 24-hour rendering
//! from the locale, and adjacent date/time field groups gain an implicit
//! separator where the skeleton didn't spell one out (`spec.md` §4.4, "the
//! host-pattern translator inserts conventional separators between adjacent
//! field groups that have none").

use crate::skeleton::SkeletonToken;
use msgfmt_locale::{LocaleData, NameWidth};

fn width_from_count(count: u8) -> NameWidth {
    match count {
        1..=3 => NameWidth::Abbreviated,
        4 => NameWidth::Wide,
        _ => NameWidth::Narrow,
    }
}

/// A single directly renderable datetime field, resolved against the
/// locale's 12/24-hour convention but not yet against a concrete [`Instant`]
/// (`spec.md` §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostField {
    Year(u8),
    MonthNumeric(u8),
    MonthName(NameWidth),
    MonthStandaloneNumeric(u8),
    MonthStandaloneName(NameWidth),
    Day(u8),
    WeekdayName(NameWidth),
    WeekdayStandaloneName(NameWidth),
    Hour12(u8),
    Hour24(u8),
    Hour12ZeroBased(u8),
    Hour24OneIndexed(u8),
    Minute(u8),
    Second(u8),
    FractionalSecond(u8),
    DayPeriod,
    Era(NameWidth),
    TimeZone(char, u8),
}

/// A field the host renderer cannot produce directly and instead stamps with
/// a private-use placeholder codepoint for [`crate::postprocess`] to replace
/// once an `Instant` is available (`spec.md` §4.4, "fields the host pattern
/// language cannot express").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    DayOfYear,
    QuarterFormat(NameWidth),
    QuarterStandalone(NameWidth),
    /// `true` when the field should be zero-padded to two digits (`ww`).
    WeekOfYear { padded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostToken {
    Literal(String),
    Field(HostField),
    Marker(MarkerKind),
}

fn is_date_field(ch: char) -> bool {
    matches!(ch, 'y' | 'M' | 'L' | 'd' | 'D' | 'E' | 'c' | 'G' | 'Q' | 'q' | 'w')
}

fn is_time_field(ch: char) -> bool {
    matches!(
        ch,
        'j' | 'J' | 'h' | 'H' | 'k' | 'K' | 'm' | 's' | 'S' | 'a' | 'z' | 'Z' | 'X' | 'x' | 'V'
    )
}

fn is_clock_field(ch: char) -> bool {
    matches!(ch, 'j' | 'J' | 'h' | 'H' | 'k' | 'K' | 'm' | 's')
}

fn translate_field(ch: char, count: u8, locale: &LocaleData, out: &mut Vec<HostToken>) {
    match ch {
        'y' => out.push(HostToken::Field(HostField::Year(count))),
        'M' => out.push(HostToken::Field(if count >= 3 {
            HostField::MonthName(width_from_count(count))
        } else {
            HostField::MonthNumeric(count)
        })),
        'L' => out.push(HostToken::Field(if count >= 3 {
            HostField::MonthStandaloneName(width_from_count(count))
        } else {
            HostField::MonthStandaloneNumeric(count)
        })),
        'd' => out.push(HostToken::Field(HostField::Day(count))),
        'D' => out.push(HostToken::Marker(MarkerKind::DayOfYear)),
        'E' => out.push(HostToken::Field(HostField::WeekdayName(width_from_count(count)))),
        'c' => out.push(HostToken::Field(HostField::WeekdayStandaloneName(
            width_from_count(count),
        ))),
        'j' => {
            if locale.dates.uses_12_hour {
                out.push(HostToken::Field(HostField::Hour12(count)));
            } else {
                out.push(HostToken::Field(HostField::Hour24(count)));
            }
        }
        'J' => out.push(HostToken::Field(HostField::Hour24(count))),
        'h' => out.push(HostToken::Field(HostField::Hour12(count))),
        'H' => out.push(HostToken::Field(HostField::Hour24(count))),
        'k' => out.push(HostToken::Field(HostField::Hour24OneIndexed(count))),
        'K' => out.push(HostToken::Field(HostField::Hour12ZeroBased(count))),
        'm' => out.push(HostToken::Field(HostField::Minute(count))),
        's' => out.push(HostToken::Field(HostField::Second(count))),
        'S' => out.push(HostToken::Field(HostField::FractionalSecond(count))),
        'a' => out.push(HostToken::Field(HostField::DayPeriod)),
        'G' => out.push(HostToken::Field(HostField::Era(width_from_count(count)))),
        'Q' => out.push(HostToken::Marker(MarkerKind::QuarterFormat(width_from_count(
            count,
        )))),
        'q' => out.push(HostToken::Marker(MarkerKind::QuarterStandalone(
            width_from_count(count),
        ))),
        'w' => out.push(HostToken::Marker(MarkerKind::WeekOfYear {
            padded: count >= 2,
        })),
        'z' | 'Z' | 'X' | 'x' | 'V' => out.push(HostToken::Field(HostField::TimeZone(ch, count))),
        _ => unreachable!("skeleton lexer only emits chars from FIELD_CHARS"),
    }
}

/// Resolves a parsed skeleton into a host-renderable token stream.
///
/// `j` fields become `h` or `H` depending on `locale.dates.uses_12_hour`; a
/// resolved `j` that picks 12-hour also gets an implicit trailing day-period
/// field, the same way ICU expands `j` to include `a` (`spec.md` §4.4).
/// Adjacent clock fields with no literal between them in the source skeleton
/// gain an implicit `:`; an adjacent date field followed directly by a time
/// field gains an implicit space.
pub fn translate(tokens: &[SkeletonToken], locale: &LocaleData) -> Vec<HostToken> {
    let mut out = Vec::new();
    let mut needs_day_period = false;
    let mut prev_field_ch: Option<char> = None;

    for tok in tokens {
        match tok {
            SkeletonToken::Literal(lit) => {
                out.push(HostToken::Literal(lit.clone()));
                prev_field_ch = None;
            }
            SkeletonToken::Field { ch, count } => {
                if let Some(prev) = prev_field_ch {
                    if is_clock_field(prev) && is_clock_field(*ch) {
                        out.push(HostToken::Literal(":".to_string()));
                    } else if is_date_field(prev) && is_time_field(*ch) {
                        out.push(HostToken::Literal(" ".to_string()));
                    }
                }
                if *ch == 'j' && locale.dates.uses_12_hour {
                    needs_day_period = true;
                }
                translate_field(*ch, *count, locale, &mut out);
                prev_field_ch = Some(*ch);
            }
        }
    }

    if needs_day_period {
        out.push(HostToken::Literal(" ".to_string()));
        out.push(HostToken::Field(HostField::DayPeriod));
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::skeleton::parse_skeleton;
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

    #[test]
    fn j_resolves_to_12_hour_with_trailing_day_period() {
        let tokens = parse_skeleton("jm").unwrap();
        let host = translate(&tokens, &en());
        assert_eq!(
            host,
            vec![
                HostToken::Field(HostField::Hour12(1)),
                HostToken::Literal(":".into()),
                HostToken::Field(HostField::Minute(1)),
                HostToken::Literal(" ".into()),
                HostToken::Field(HostField::DayPeriod),
            ]
        );
    }

    #[test]
    fn j_resolves_to_24_hour_for_de() {
        let tokens = parse_skeleton("jm").unwrap();
        let host = translate(&tokens, &de());
        assert_eq!(
            host,
            vec![
                HostToken::Field(HostField::Hour24(1)),
                HostToken::Literal(":".into()),
                HostToken::Field(HostField::Minute(1)),
            ]
        );
    }

    #[test]
    fn date_and_time_field_get_implicit_space() {
        let tokens = parse_skeleton("yMd").unwrap();
        let host = translate(&tokens, &en());
        assert_eq!(
            host,
            vec![
                HostToken::Field(HostField::Year(1)),
                HostToken::Field(HostField::MonthNumeric(1)),
                HostToken::Field(HostField::Day(1)),
            ]
        );

        let tokens = parse_skeleton("yMdHm").unwrap();
        let host = translate(&tokens, &en());
        assert!(host.contains(&HostToken::Literal(" ".into())));
    }

    #[test]
    fn explicit_literal_is_not_duplicated() {
        let tokens = parse_skeleton("H:mm").unwrap();
        let host = translate(&tokens, &en());
        assert_eq!(
            host,
            vec![
                HostToken::Field(HostField::Hour24(1)),
                HostToken::Literal(":".into()),
                HostToken::Field(HostField::Minute(2)),
            ]
        );
    }
}
