//! The number formatter pipeline (`spec.md` §4.3 steps 1-7).

use crate::error::NumberError;
use crate::options::*;
use msgfmt_locale::{CurrencyData, LocaleData, PluralOperands, Width};

const COMPACT_SHORT_SUFFIX: [&str; 5] = ["", "K", "M", "B", "T"];
const COMPACT_LONG_SUFFIX: [&str; 5] = [
    "",
    " thousand",
    " million",
    " billion",
    " trillion",
];

/// Formats `value` per `opts` for `locale`. `variable_name` identifies the unit
/// variable for plural-aware unit/currency display-name lookups.
pub fn format(value: f64, opts: &NumberFormatOptions, locale: &LocaleData) -> Result<String, NumberError> {
    let mut v = value * opts.scale;
    if opts.is_percent {
        v *= 100.0;
    }
    if opts.is_permille {
        v *= 1000.0;
    }

    let negative = v.is_sign_negative() && v != 0.0;
    let magnitude = v.abs();

    let body = match opts.notation {
        Notation::Scientific => format_scientific(magnitude, opts, locale),
        Notation::Engineering => format_engineering(magnitude, opts, locale),
        Notation::CompactShort if magnitude >= 1000.0 => {
            format_compact(magnitude, opts, locale, &COMPACT_SHORT_SUFFIX)
        }
        Notation::CompactLong if magnitude >= 1000.0 => {
            format_compact(magnitude, opts, locale, &COMPACT_LONG_SUFFIX)
        }
        Notation::CompactShort | Notation::CompactLong | Notation::Standard => {
            format_standard(magnitude, opts, locale)?
        }
    };

    Ok(apply_sign(body, negative, v > 0.0, opts.sign_display))
}

fn format_standard(magnitude: f64, opts: &NumberFormatOptions, locale: &LocaleData) -> Result<String, NumberError> {
    let number = format_magnitude(magnitude, &opts.precision, opts.grouping, locale);
    if let Some(code) = &opts.currency {
        format_currency(&number, magnitude, code, opts, locale)
    } else if let Some(unit) = &opts.unit {
        Ok(format_unit(&number, magnitude, unit, opts, locale))
    } else if opts.is_percent {
        Ok(format!("{number}{}", locale.symbols.percent_sign))
    } else if opts.is_permille {
        Ok(format!("{number}{}", locale.symbols.permille))
    } else {
        Ok(number)
    }
}

fn format_currency(
    number: &str,
    magnitude: f64,
    code: &str,
    opts: &NumberFormatOptions,
    locale: &LocaleData,
) -> Result<String, NumberError> {
    // ISO-code display places the uppercase code before the number with a space,
    // bypassing the locale's currency placement pattern entirely (`spec.md` §4.3 step 3).
    if matches!(opts.currency_display, CurrencyDisplay::Code) {
        return Ok(format!("{} {}", code.to_ascii_uppercase(), number));
    }

    let CurrencyData {
        symbol,
        narrow_symbol,
        display_name,
        pattern,
        ..
    } = &locale.currency;
    let sign = match opts.currency_display {
        CurrencyDisplay::Symbol => symbol
            .get(code)
            .map(|s| s.as_str())
            .ok_or_else(|| NumberError::UnknownCurrency { code: code.into() })?
            .to_string(),
        CurrencyDisplay::NarrowSymbol => narrow_symbol
            .get(code)
            .or_else(|| symbol.get(code))
            .map(|s| s.as_str())
            .ok_or_else(|| NumberError::UnknownCurrency { code: code.into() })?
            .to_string(),
        CurrencyDisplay::Name => {
            let ops = PluralOperands::from_f64(magnitude);
            let category = locale.plural_category(&ops);
            display_name
                .get(&(code.into(), category))
                .or_else(|| display_name.get(&(code.into(), msgfmt_locale::PluralCategory::Other)))
                .map(|s| s.to_string())
                .ok_or_else(|| NumberError::UnknownCurrency { code: code.into() })?
        }
        CurrencyDisplay::Code => unreachable!("handled above"),
    };
    Ok(pattern.replace("{0}", number).replace("{1}", &sign))
}

fn format_unit(number: &str, magnitude: f64, unit: &str, opts: &NumberFormatOptions, locale: &LocaleData) -> String {
    let ops = PluralOperands::from_f64(magnitude);
    let category = locale.plural_category(&ops);
    let width = match opts.unit_width {
        UnitWidth::Long => Width::Long,
        UnitWidth::Narrow => Width::Narrow,
        UnitWidth::Short => Width::Short,
    };
    match locale.units.get(unit, width, category) {
        Some(pat) => pat.replace("{0}", number),
        None => {
            log::warn!("no unit pattern for {unit:?} ({width:?}/{category:?}) in locale, falling back to bare unit id");
            format!("{number} {unit}")
        }
    }
}

fn format_scientific(magnitude: f64, opts: &NumberFormatOptions, locale: &LocaleData) -> String {
    let m_frac = opts.precision.max_fraction.unwrap_or(2);
    if magnitude == 0.0 {
        let mantissa = format_magnitude(0.0, &fixed_precision(m_frac), GroupingStrategy::Off, locale);
        return format!("{mantissa}E+0");
    }
    let exp = magnitude.log10().floor() as i32;
    let mantissa_val = magnitude / 10f64.powi(exp);
    let mantissa = format_magnitude(mantissa_val, &fixed_precision(m_frac), GroupingStrategy::Off, locale);
    let sign = if exp >= 0 { "+" } else { "-" };
    format!("{mantissa}E{sign}{}", exp.abs())
}

fn format_engineering(magnitude: f64, opts: &NumberFormatOptions, locale: &LocaleData) -> String {
    let m_frac = opts.precision.max_fraction.unwrap_or(2);
    if magnitude == 0.0 {
        let mantissa = format_magnitude(0.0, &fixed_precision(m_frac), GroupingStrategy::Off, locale);
        return format!("{mantissa}E+0");
    }
    let raw_exp = magnitude.log10().floor() as i32;
    let exp = (raw_exp.div_euclid(3)) * 3;
    let mantissa_val = magnitude / 10f64.powi(exp);
    let mantissa = format_magnitude(mantissa_val, &fixed_precision(m_frac), GroupingStrategy::Off, locale);
    let sign = if exp >= 0 { "+" } else { "-" };
    format!("{mantissa}E{sign}{}", exp.abs())
}

fn format_compact(magnitude: f64, opts: &NumberFormatOptions, locale: &LocaleData, suffixes: &[&str; 5]) -> String {
    let raw_exp = magnitude.log10().floor() as i32;
    let exp = (raw_exp.div_euclid(3)) * 3;
    let idx = ((exp / 3).max(0) as usize).min(suffixes.len() - 1);
    let scaled = magnitude / 10f64.powi((idx as i32) * 3);
    let max_frac = opts.precision.max_fraction.unwrap_or(1);
    let prec = Precision {
        min_integer: 1,
        min_fraction: opts.precision.min_fraction,
        max_fraction: Some(max_frac),
        significant: None,
    };
    let number = format_magnitude(scaled, &prec, GroupingStrategy::Off, locale);
    format!("{number}{}", suffixes[idx])
}

fn fixed_precision(max_fraction: u32) -> Precision {
    Precision {
        min_integer: 1,
        min_fraction: 0,
        max_fraction: Some(max_fraction),
        significant: None,
    }
}

fn format_magnitude(
    magnitude: f64,
    precision: &Precision,
    grouping: GroupingStrategy,
    locale: &LocaleData,
) -> String {
    let (int_digits, frac_digits) = round_digits(magnitude, precision);
    let int_digits = pad_integer(int_digits, precision.min_integer);
    let grouped = apply_grouping(&int_digits, grouping, &locale.symbols.group);
    let mut out = grouped;
    if !frac_digits.is_empty() {
        out.push_str(&locale.symbols.decimal);
        out.push_str(&frac_digits);
    }
    if let Some(table) = &locale.digits {
        out = shape_digits(&out, table);
    }
    out
}

/// Rounds `magnitude` per `precision` and returns `(integer_digits, fraction_digits)`
/// as plain ASCII digit strings (no separators, no sign).
fn round_digits(magnitude: f64, precision: &Precision) -> (String, String) {
    if let Some((min_sig, max_sig)) = precision.significant {
        return round_significant(magnitude, min_sig, max_sig.unwrap_or(min_sig));
    }
    let max_f = precision.max_fraction.unwrap_or(20).min(20) as usize;
    let s = format!("{magnitude:.*}", max_f);
    let (int_part, frac_part) = match s.split_once('.') {
        Some((a, b)) => (a.to_string(), b.to_string()),
        None => (s, String::new()),
    };
    let trimmed = trim_fraction(&frac_part, precision.min_fraction);
    (int_part, trimmed)
}

fn round_significant(magnitude: f64, min_sig: u32, max_sig: u32) -> (String, String) {
    if magnitude == 0.0 {
        return ("0".to_string(), "0".repeat((min_sig.saturating_sub(1)) as usize));
    }
    let exp = magnitude.log10().floor() as i32;
    let decimals = (max_sig as i32 - 1 - exp).max(0) as usize;
    let s = format!("{magnitude:.*}", decimals);
    let (int_part, frac_part) = match s.split_once('.') {
        Some((a, b)) => (a.to_string(), b.to_string()),
        None => (s, String::new()),
    };
    let total_sig = int_part.trim_start_matches('0').len() as u32 + frac_part.len() as u32;
    let min_frac = if total_sig < min_sig {
        frac_part.len() as u32
    } else {
        0
    };
    let trimmed = trim_fraction(&frac_part, min_frac);
    (int_part, trimmed)
}

fn trim_fraction(frac: &str, min_fraction: u32) -> String {
    let mut end = frac.len();
    while end > min_fraction as usize && frac.as_bytes().get(end.wrapping_sub(1)) == Some(&b'0') {
        end -= 1;
    }
    frac[..end].to_string()
}

fn pad_integer(digits: String, min_integer: u32) -> String {
    let needed = min_integer as usize;
    if digits.len() >= needed {
        digits
    } else {
        format!("{}{}", "0".repeat(needed - digits.len()), digits)
    }
}

fn apply_grouping(int_digits: &str, grouping: GroupingStrategy, separator: &str) -> String {
    let n = int_digits.len();
    let should_group = match grouping {
        GroupingStrategy::Off => false,
        GroupingStrategy::Auto | GroupingStrategy::Always => n > 3,
        GroupingStrategy::Min2 => n > 4,
    };
    if !should_group {
        return int_digits.to_string();
    }
    let bytes = int_digits.as_bytes();
    let mut out = String::with_capacity(n + n / 3);
    for (i, b) in bytes.iter().enumerate() {
        let remaining = n - i;
        if i > 0 && remaining % 3 == 0 {
            out.push_str(separator);
        }
        out.push(*b as char);
    }
    out
}

fn shape_digits(s: &str, table: &msgfmt_locale::DigitTable) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => table.0[d as usize],
            None => c,
        })
        .collect()
}

fn apply_sign(body: String, negative: bool, positive: bool, sign_display: SignDisplay) -> String {
    use SignDisplay::*;
    match sign_display {
        Auto => {
            if negative {
                format!("-{body}")
            } else {
                body
            }
        }
        Always => {
            if negative {
                format!("-{body}")
            } else {
                format!("+{body}")
            }
        }
        Never => body,
        ExceptZero => {
            if negative {
                format!("-{body}")
            } else if positive {
                format!("+{body}")
            } else {
                body
            }
        }
        Accounting => {
            if negative {
                format!("({body})")
            } else {
                body
            }
        }
        // Observed convention (documented as an open question in spec.md §9):
        // both accounting variants prepend `+` for positive values too.
        AccountingAlways => {
            if negative {
                format!("({body})")
            } else {
                format!("+{body}")
            }
        }
        AccountingExceptZero => {
            if negative {
                format!("({body})")
            } else if positive {
                format!("+{body}")
            } else {
                body
            }
        }
    }
}

/// Formats `value` with a locale's default number settings (`spec.md` §4.5 step 5,
/// the `#` substitution inside plural/ordinal children).
pub fn format_default(value: f64, locale: &LocaleData) -> String {
    format(value, &NumberFormatOptions::default(), locale).unwrap_or_else(|e| {
        log::warn!("default number formatting failed ({e}), falling back to Rust's own formatting");
        value.to_string()
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use msgfmt_locale::{InMemoryProvider, LocaleDataProvider};
    use pretty_assertions::assert_eq;

    fn en() -> LocaleData {
        (*InMemoryProvider::builtin().try_get_locale("en").unwrap()).clone()
    }

    #[test]
    fn currency_usd() {
        let locale = en();
        let mut opts = NumberFormatOptions::default();
        opts.currency = Some("USD".into());
        opts.precision.min_fraction = 2;
        opts.precision.max_fraction = Some(2);
        let out = format(99.99, &opts, &locale).unwrap();
        assert_eq!(out, "$99.99");
    }

    #[test]
    fn compact_short_millions() {
        let locale = en();
        let opts = crate::skeleton::parse_skeleton("compact-short").unwrap();
        let out = format(1_500_000.0, &opts, &locale).unwrap();
        assert_eq!(out, "1.5M");
    }

    #[test]
    fn grouping_auto() {
        let locale = en();
        let opts = NumberFormatOptions::default();
        let out = format(1234567.0, &opts, &locale).unwrap();
        assert_eq!(out, "1,234,567");
    }

    #[test]
    fn sign_accounting_wraps_negative() {
        let locale = en();
        let mut opts = NumberFormatOptions::default();
        opts.sign_display = SignDisplay::Accounting;
        opts.precision.max_fraction = Some(0);
        let out = format(-42.0, &opts, &locale).unwrap();
        assert_eq!(out, "(42)");
    }

    #[test]
    fn sign_accounting_always_adds_plus() {
        let locale = en();
        let mut opts = NumberFormatOptions::default();
        opts.sign_display = SignDisplay::AccountingAlways;
        opts.precision.max_fraction = Some(0);
        let out = format(42.0, &opts, &locale).unwrap();
        assert_eq!(out, "+42");
    }

    #[test]
    fn percent_style() {
        let locale = en();
        let mut opts = NumberFormatOptions::default();
        opts.is_percent = true;
        opts.precision.max_fraction = Some(0);
        let out = format(0.5, &opts, &locale).unwrap();
        assert_eq!(out, "50%");
    }
}
