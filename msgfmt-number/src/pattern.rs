//! A minimal legacy decimal-pattern reader, for the "implementation-defined
//! custom format string" style token named in `spec.md` §6 (For `number`:
//! `integer`, `currency`, `percent`, `::…` (skeleton), or an
//! implementation-defined custom format string).
//!
//! Understands the common subset of ICU `DecimalFormat` patterns:
//! `#`, `0`, `.`, `,`, and a trailing `%`.

use crate::options::NumberFormatOptions;

pub fn parse_decimal_pattern(pattern: &str) -> NumberFormatOptions {
    log::trace!("parsing decimal pattern {pattern:?}");
    let mut opts = NumberFormatOptions::default();
    let is_percent = pattern.ends_with('%');
    let body = pattern.strip_suffix('%').unwrap_or(pattern);
    opts.is_percent = is_percent;
    opts.grouping = if body.contains(',') {
        crate::options::GroupingStrategy::Auto
    } else {
        crate::options::GroupingStrategy::Off
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((a, b)) => (a, b),
        None => (body, ""),
    };
    let min_integer = int_part.chars().filter(|&c| c == '0').count().max(1) as u32;
    let min_fraction = frac_part.chars().take_while(|&c| c == '0').count() as u32;
    let max_fraction = frac_part.chars().filter(|&c| c == '0' || c == '#').count() as u32;
    opts.precision.min_integer = min_integer;
    opts.precision.min_fraction = min_fraction;
    opts.precision.max_fraction = Some(max_fraction.max(min_fraction));
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn grouped_currency_like_pattern() {
        let o = parse_decimal_pattern("#,##0.00");
        assert_eq!(o.precision.min_fraction, 2);
        assert_eq!(o.precision.max_fraction, Some(2));
        assert_eq!(o.grouping, crate::options::GroupingStrategy::Auto);
    }

    #[test]
    fn percent_pattern() {
        let o = parse_decimal_pattern("#,##0%");
        assert!(o.is_percent);
    }
}
