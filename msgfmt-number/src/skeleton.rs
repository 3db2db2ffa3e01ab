//! Number skeleton lexer (`spec.md` §4.3). Splits a whitespace-separated
//! skeleton into tokens and folds them into a `NumberFormatOptions`.

use crate::error::NumberError;
use crate::options::*;

pub fn parse_skeleton(skeleton: &str) -> Result<NumberFormatOptions, NumberError> {
    log::trace!("parsing number skeleton {skeleton:?}");
    let mut opts = NumberFormatOptions::default();
    for token in skeleton.split_whitespace() {
        if let Err(e) = apply_token(&mut opts, token) {
            log::debug!("number skeleton {skeleton:?} rejected at token {token:?}: {e}");
            return Err(e);
        }
    }
    Ok(opts)
}

fn apply_token(opts: &mut NumberFormatOptions, token: &str) -> Result<(), NumberError> {
    match token {
        "percent" | "%" => {
            opts.is_percent = true;
            return Ok(());
        }
        "permille" => {
            opts.is_permille = true;
            return Ok(());
        }
        "ordinal" => {
            opts.is_ordinal = true;
            return Ok(());
        }
        "scientific" => {
            opts.notation = Notation::Scientific;
            return Ok(());
        }
        "engineering" => {
            opts.notation = Notation::Engineering;
            return Ok(());
        }
        "compact-short" | "K" => {
            opts.notation = Notation::CompactShort;
            return Ok(());
        }
        "compact-long" | "KK" => {
            opts.notation = Notation::CompactLong;
            return Ok(());
        }
        "sign-always" | "+!" => {
            opts.sign_display = SignDisplay::Always;
            return Ok(());
        }
        "sign-never" | "+_" => {
            opts.sign_display = SignDisplay::Never;
            return Ok(());
        }
        "sign-except-zero" | "+?" => {
            opts.sign_display = SignDisplay::ExceptZero;
            return Ok(());
        }
        "sign-accounting" | "()" => {
            opts.sign_display = SignDisplay::Accounting;
            return Ok(());
        }
        "sign-accounting-always" => {
            opts.sign_display = SignDisplay::AccountingAlways;
            return Ok(());
        }
        "sign-accounting-except-zero" => {
            opts.sign_display = SignDisplay::AccountingExceptZero;
            return Ok(());
        }
        "group-off" | ",_" => {
            opts.grouping = GroupingStrategy::Off;
            return Ok(());
        }
        "group-min2" | ",?" => {
            opts.grouping = GroupingStrategy::Min2;
            return Ok(());
        }
        "group-auto" => {
            opts.grouping = GroupingStrategy::Auto;
            return Ok(());
        }
        "group-always" | ",!" => {
            opts.grouping = GroupingStrategy::Always;
            return Ok(());
        }
        "unit-width-short" => {
            opts.unit_width = UnitWidth::Short;
            return Ok(());
        }
        "unit-width-narrow" => {
            opts.unit_width = UnitWidth::Narrow;
            return Ok(());
        }
        "unit-width-full-name" => {
            opts.unit_width = UnitWidth::Long;
            return Ok(());
        }
        "unit-width-iso-code" => {
            opts.currency_display = CurrencyDisplay::Code;
            return Ok(());
        }
        "currency-symbol" => {
            opts.currency_display = CurrencyDisplay::Symbol;
            return Ok(());
        }
        "currency-narrow-symbol" => {
            opts.currency_display = CurrencyDisplay::NarrowSymbol;
            return Ok(());
        }
        _ => {}
    }

    if let Some(code) = token.strip_prefix("currency/") {
        opts.currency = Some(code.into());
        return Ok(());
    }
    if let Some(num) = token.strip_prefix("scale/") {
        opts.scale = num
            .parse()
            .map_err(|_| NumberError::MalformedSkeleton { token: token.into(), pos: 0 })?;
        return Ok(());
    }
    if let Some(id) = token.strip_prefix("unit/") {
        opts.unit = Some(id.into());
        return Ok(());
    }
    if let Some(id) = token.strip_prefix("measure-unit/") {
        opts.unit = Some(id.into());
        return Ok(());
    }
    if let Some(rest) = token.strip_prefix("integer-width/") {
        let zeros = rest.strip_prefix('*').unwrap_or(rest);
        if !zeros.chars().all(|c| c == '0') {
            return Err(NumberError::MalformedSkeleton { token: token.into(), pos: 0 });
        }
        opts.precision.min_integer = zeros.len().max(1) as u32;
        return Ok(());
    }

    if let Some(rest) = token.strip_prefix('.') {
        return parse_fraction_precision(opts, token, rest);
    }
    if let Some(rest) = token.strip_prefix('@') {
        return parse_significant_precision(opts, token, rest);
    }
    if !token.is_empty() && token.chars().all(|c| c == '0') {
        opts.precision.min_integer = token.len() as u32;
        return Ok(());
    }

    Err(NumberError::MalformedSkeleton { token: token.into(), pos: 0 })
}

fn parse_fraction_precision(
    opts: &mut NumberFormatOptions,
    whole_token: &str,
    rest: &str,
) -> Result<(), NumberError> {
    if !rest.chars().all(|c| matches!(c, '0' | '#' | '*' | '+')) {
        return Err(NumberError::MalformedSkeleton {
            token: whole_token.into(),
            pos: 0,
        });
    }
    let min_fraction = rest.chars().take_while(|&c| c == '0').count() as u32;
    let after_zeros = &rest[min_fraction as usize..];
    let hashes = after_zeros.chars().filter(|&c| c == '#').count() as u32;
    let unbounded = after_zeros.contains('*') || after_zeros.contains('+');
    opts.precision.min_fraction = min_fraction;
    opts.precision.max_fraction = if unbounded {
        None
    } else {
        Some(min_fraction + hashes)
    };
    opts.precision.significant = None;
    Ok(())
}

fn parse_significant_precision(
    opts: &mut NumberFormatOptions,
    whole_token: &str,
    rest: &str,
) -> Result<(), NumberError> {
    if !rest.chars().all(|c| matches!(c, '@' | '#')) {
        return Err(NumberError::MalformedSkeleton {
            token: whole_token.into(),
            pos: 0,
        });
    }
    let min = rest.chars().filter(|&c| c == '@').count() as u32 + 1;
    let hashes = rest.chars().filter(|&c| c == '#').count() as u32;
    opts.precision.significant = Some((min, if hashes == 0 { Some(min) } else { Some(min + hashes) }));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency_code() {
        let o = parse_skeleton("currency/USD").unwrap();
        assert_eq!(o.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn compact_short() {
        let o = parse_skeleton("compact-short").unwrap();
        assert_eq!(o.notation, Notation::CompactShort);
    }

    #[test]
    fn fraction_precision() {
        let o = parse_skeleton(".00").unwrap();
        assert_eq!(o.precision.min_fraction, 2);
        assert_eq!(o.precision.max_fraction, Some(2));
    }

    #[test]
    fn fraction_precision_unbounded() {
        let o = parse_skeleton(".0*").unwrap();
        assert_eq!(o.precision.min_fraction, 1);
        assert_eq!(o.precision.max_fraction, None);
    }

    #[test]
    fn bare_zeros_set_integer_width() {
        let o = parse_skeleton("000").unwrap();
        assert_eq!(o.precision.min_integer, 3);
    }

    #[test]
    fn sign_accounting_concise() {
        let o = parse_skeleton("()").unwrap();
        assert_eq!(o.sign_display, SignDisplay::Accounting);
    }

    #[test]
    fn malformed_token_errors() {
        assert!(parse_skeleton("not-a-real-stem").is_err());
    }
}
