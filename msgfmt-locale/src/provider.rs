//! The locale data provider interface (`spec.md` §6) and two implementations:
//! a simple in-memory table (`InMemoryProvider`) and a lazily-memoizing wrapper
//! (`CachingProvider`) that satisfies the "process-wide singleton, lazily
//! materialized, idempotent and thread-safe" requirement of `spec.md` §5.

use crate::data::{DigitTable, IntervalData, ListPattern, ListStyle, LocaleData, RelativeField, RelativeTimeField, UnitData, Width};
use fnv::FnvHashMap;
use parking_lot::RwLock;
use smartstring::alias::String as SmartString;
use std::sync::Arc;

/// External collaborator for the `spellout` element's RBNF evaluator
/// (`spec.md` §1 Out of scope). The interface is specified; no implementation
/// ships here.
pub trait Spellout: Send + Sync {
    fn spell(&self, n: f64) -> String;
}

/// CLDR provider handle, as referenced by `Formatter::new`'s `options`
/// (`spec.md` §6 Formatter API).
pub trait LocaleDataProvider: Send + Sync {
    /// Exact-match lookup only; the Locale Resolver composes the fallback chain.
    fn try_get_locale(&self, code: &str) -> Option<Arc<LocaleData>>;

    fn available_locales(&self) -> Vec<SmartString>;

    fn try_get_spellout(&self, _code: &str) -> Option<Arc<dyn Spellout>> {
        None
    }

    fn try_get_number_system_digits(&self, _system_name: &str) -> Option<DigitTable> {
        None
    }

    fn try_get_relative_time(
        &self,
        code: &str,
        field: RelativeField,
        width: Width,
    ) -> Option<RelativeTimeField> {
        self.try_get_locale(code)?
            .relative
            .fields
            .get(&(field, width))
            .cloned()
    }

    fn try_get_list(&self, code: &str, style: ListStyle, width: Width) -> Option<ListPattern> {
        self.try_get_locale(code)?.list.get(&(style, width)).cloned()
    }

    fn try_get_date_range(&self, code: &str) -> Option<IntervalData> {
        Some(self.try_get_locale(code)?.intervals.clone())
    }

    fn try_get_unit(&self, code: &str, _unit_id: &str) -> Option<UnitData> {
        Some(self.try_get_locale(code)?.units.clone())
    }
}

/// A flat table of precompiled locale data, keyed by exact locale code.
#[derive(Default)]
pub struct InMemoryProvider {
    locales: FnvHashMap<SmartString, Arc<LocaleData>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ships with `en` (root fallback) and `de-DE` builtin tables so the crate
    /// is runnable without an external CLDR build step (`SPEC_FULL.md` §2).
    pub fn builtin() -> Self {
        let mut p = Self::new();
        p.insert(Arc::new(crate::data::builtin_en()));
        p.insert(Arc::new(crate::data::builtin_de_de()));
        p
    }

    pub fn insert(&mut self, data: Arc<LocaleData>) {
        self.locales.insert(data.code.clone(), data);
    }
}

impl LocaleDataProvider for InMemoryProvider {
    fn try_get_locale(&self, code: &str) -> Option<Arc<LocaleData>> {
        self.locales.get(code).cloned()
    }

    fn available_locales(&self) -> Vec<SmartString> {
        let mut v: Vec<_> = self.locales.keys().cloned().collect();
        v.sort();
        v
    }
}

/// Wraps any provider with a read-mostly memoization table, so repeat lookups
/// of the same locale code never re-invoke the inner provider
/// (`spec.md` §5 "lazily materialized on first access per locale").
pub struct CachingProvider<P: LocaleDataProvider> {
    inner: P,
    cache: RwLock<FnvHashMap<SmartString, Option<Arc<LocaleData>>>>,
}

impl<P: LocaleDataProvider> CachingProvider<P> {
    pub fn new(inner: P) -> Self {
        CachingProvider {
            inner,
            cache: RwLock::new(FnvHashMap::default()),
        }
    }
}

impl<P: LocaleDataProvider> LocaleDataProvider for CachingProvider<P> {
    fn try_get_locale(&self, code: &str) -> Option<Arc<LocaleData>> {
        if let Some(hit) = self.cache.read().get(code) {
            return hit.clone();
        }
        // Idempotent: if two threads race here, both compute the same value
        // (the inner provider is pure for a given code) and the last write wins,
        // matching the pattern cache's documented tie-break rule.
        let computed = self.inner.try_get_locale(code);
        self.cache.write().insert(code.into(), computed.clone());
        computed
    }

    fn available_locales(&self) -> Vec<SmartString> {
        self.inner.available_locales()
    }

    fn try_get_spellout(&self, code: &str) -> Option<Arc<dyn Spellout>> {
        self.inner.try_get_spellout(code)
    }

    fn try_get_number_system_digits(&self, system_name: &str) -> Option<DigitTable> {
        self.inner.try_get_number_system_digits(system_name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn caching_provider_is_idempotent() {
        let cp = CachingProvider::new(InMemoryProvider::builtin());
        let a = cp.try_get_locale("en");
        let b = cp.try_get_locale("en");
        assert!(a.is_some());
        assert_eq!(a.unwrap().code, b.unwrap().code);
    }
}
