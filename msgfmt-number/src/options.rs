//! The mutable options record produced by the Number Skeleton Parser
//! (`spec.md` §4.3).

use msgfmt_locale::Width as UnitWidthSource;
use smartstring::alias::String as SmartString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Standard,
    Scientific,
    Engineering,
    CompactShort,
    CompactLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignDisplay {
    Auto,
    Always,
    Never,
    ExceptZero,
    Accounting,
    AccountingAlways,
    AccountingExceptZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStrategy {
    Off,
    /// implemented as `Auto` with a minimum run length of 2 digits before the
    /// first separator kicks in (`spec.md` §4.3 step 6)
    Min2,
    Auto,
    Always,
}

/// Re-exports the shared long/short/narrow axis used for unit display width.
pub type UnitWidth = UnitWidthSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    /// minimum integer digits (a bare run of `0`s sets this)
    pub min_integer: u32,
    /// minimum fraction digits
    pub min_fraction: u32,
    /// maximum fraction digits; `None` means unbounded (`*` was given)
    pub max_fraction: Option<u32>,
    /// `@`-style significant digit bounds, when given, override fraction-digit precision
    pub significant: Option<(u32, Option<u32>)>,
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            min_integer: 1,
            min_fraction: 0,
            max_fraction: Some(3),
            significant: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatOptions {
    pub notation: Notation,
    pub precision: Precision,
    pub sign_display: SignDisplay,
    pub grouping: GroupingStrategy,
    pub unit_width: UnitWidth,
    pub currency_display: CurrencyDisplay,
    pub is_percent: bool,
    pub is_permille: bool,
    pub is_ordinal: bool,
    pub currency: Option<SmartString>,
    pub unit: Option<SmartString>,
    pub scale: f64,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        NumberFormatOptions {
            notation: Notation::Standard,
            precision: Precision::default(),
            sign_display: SignDisplay::Auto,
            grouping: GroupingStrategy::Auto,
            unit_width: UnitWidth::Short,
            currency_display: CurrencyDisplay::Symbol,
            is_percent: false,
            is_permille: false,
            is_ordinal: false,
            currency: None,
            unit: None,
            scale: 1.0,
        }
    }
}
