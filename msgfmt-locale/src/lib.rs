//! Locale Data Interface, Locale Resolver, and CLDR plural/ordinal categorizers
//! for the ICU MessageFormat engine (`spec.md` §4 Locale Data Interface,
//! Locale Resolver, §4.5).

pub mod data;
pub mod error;
pub mod lang;
pub mod plural;
pub mod provider;
pub mod resolver;

pub use data::{
    CalendarNames, CurrencyData, DateStyle, DatePatterns, DigitTable, IntervalData, ListPattern,
    ListStyle, LocaleData, NameWidth, NumberSymbols, QuarterData, RelativeField, RelativeTimeData,
    RelativeTimeField, UnitData, Width,
};
pub use error::LocaleError;
pub use lang::Lang;
pub use plural::{PluralCategory, PluralOperands, PluralRuleFn};
pub use provider::{CachingProvider, InMemoryProvider, LocaleDataProvider, Spellout};
pub use resolver::resolve;
