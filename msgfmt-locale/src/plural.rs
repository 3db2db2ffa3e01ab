//! CLDR plural operand computation and the category enum shared by the plural,
//! ordinal and select cores (`spec.md` §4.5).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "zero" => PluralCategory::Zero,
            "one" => PluralCategory::One,
            "two" => PluralCategory::Two,
            "few" => PluralCategory::Few,
            "many" => PluralCategory::Many,
            "other" => PluralCategory::Other,
            _ => return None,
        })
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The CLDR plural operand set: `n, i, v, w, f, t, c, e` (`spec.md` §4.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    /// absolute value of the source number
    pub n: f64,
    /// integer part of `n`
    pub i: u64,
    /// number of visible fraction digits, with trailing zeros
    pub v: u32,
    /// number of visible fraction digits, without trailing zeros
    pub w: u32,
    /// visible fraction digits as an integer, with trailing zeros
    pub f: u64,
    /// visible fraction digits as an integer, without trailing zeros
    pub t: u64,
    /// compact exponent digits (unused unless supplied by the number formatter)
    pub c: u64,
    /// compact exponent, alias of `c` kept for rules that spell it `e`
    pub e: u64,
}

impl PluralOperands {
    /// Operands for a plain integer.
    pub fn from_i64(n: i64) -> Self {
        PluralOperands {
            n: n.unsigned_abs() as f64,
            i: n.unsigned_abs(),
            v: 0,
            w: 0,
            f: 0,
            t: 0,
            c: 0,
            e: 0,
        }
    }

    /// Operands for a float, via its canonical decimal string, so that `v`/`w`/`f`/`t`
    /// come out consistent with what a human would see formatted (avoids binary-float
    /// noise like `0.1` decoding to dozens of fraction digits).
    pub fn from_f64(n: f64) -> Self {
        Self::from_decimal_str(&format!("{}", n.abs()))
    }

    /// Operands derived lexically from a decimal string (as would arrive from a
    /// currency amount or a pre-formatted decimal argument). Leading `-` is ignored;
    /// the operands only ever see magnitude.
    pub fn from_decimal_str(s: &str) -> Self {
        let s = s.strip_prefix('-').unwrap_or(s);
        let (int_part, frac_part) = match s.split_once('.') {
            Some((a, b)) => (a, b),
            None => (s, ""),
        };
        let i: u64 = int_part.parse().unwrap_or(0);
        let v = frac_part.len() as u32;
        let f: u64 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().unwrap_or(0)
        };
        let trimmed = frac_part.trim_end_matches('0');
        let w = trimmed.len() as u32;
        let t: u64 = if trimmed.is_empty() {
            0
        } else {
            trimmed.parse().unwrap_or(0)
        };
        let n: f64 = format!("{int_part}.{frac_part}")
            .parse()
            .unwrap_or(i as f64);
        PluralOperands {
            n,
            i,
            v,
            w,
            f,
            t,
            c: 0,
            e: 0,
        }
    }
}

/// A precompiled, pure categorizer for one locale's cardinal or ordinal rules.
pub type PluralRuleFn = fn(&PluralOperands) -> PluralCategory;

pub fn other_rule(_ops: &PluralOperands) -> PluralCategory {
    PluralCategory::Other
}

/// English cardinal rule: `one` for `i = 1 and v = 0`, else `other`.
pub fn en_cardinal(ops: &PluralOperands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// English ordinal rule (1st, 2nd, 3rd, 4th, 11th, 21st, ...).
pub fn en_ordinal(ops: &PluralOperands) -> PluralCategory {
    let mod10 = ops.i % 10;
    let mod100 = ops.i % 100;
    match (mod10, mod100) {
        (1, 11) => PluralCategory::Other,
        (2, 12) => PluralCategory::Other,
        (3, 13) => PluralCategory::Other,
        (1, _) => PluralCategory::One,
        (2, _) => PluralCategory::Two,
        (3, _) => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}

/// German cardinal rule: `one` for `i = 1 and v = 0`, else `other`.
pub fn de_cardinal(ops: &PluralOperands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// German has no distinguished ordinal categories; every value is `other`.
pub fn de_ordinal(_ops: &PluralOperands) -> PluralCategory {
    PluralCategory::Other
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn operands_integer() {
        let ops = PluralOperands::from_i64(5);
        assert_eq!(ops.i, 5);
        assert_eq!(ops.v, 0);
    }

    #[test]
    fn operands_decimal_str_trailing_zeros() {
        let ops = PluralOperands::from_decimal_str("1.50");
        assert_eq!(ops.i, 1);
        assert_eq!(ops.v, 2);
        assert_eq!(ops.f, 50);
        assert_eq!(ops.w, 1);
        assert_eq!(ops.t, 5);
    }

    #[test]
    fn en_cardinal_matches_spec_scenarios() {
        assert_eq!(en_cardinal(&PluralOperands::from_i64(1)), PluralCategory::One);
        assert_eq!(en_cardinal(&PluralOperands::from_i64(5)), PluralCategory::Other);
    }

    #[test]
    fn en_ordinal_matches_spec_scenarios() {
        assert_eq!(en_ordinal(&PluralOperands::from_i64(3)), PluralCategory::Few);
        assert_eq!(en_ordinal(&PluralOperands::from_i64(4)), PluralCategory::Other);
        assert_eq!(en_ordinal(&PluralOperands::from_i64(11)), PluralCategory::Other);
        assert_eq!(en_ordinal(&PluralOperands::from_i64(21)), PluralCategory::One);
    }
}
