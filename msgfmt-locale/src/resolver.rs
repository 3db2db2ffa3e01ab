//! Locale resolution: exact -> base language -> configured fallback -> error
//! (`spec.md` §4 Locale Resolver, §6 "Locale fallback wire semantics").

use crate::data::LocaleData;
use crate::error::LocaleError;
use crate::lang::Lang;
use crate::provider::LocaleDataProvider;
use std::sync::Arc;

/// Resolves `requested` against `provider`, trying the exact code, then the
/// base language subtag, then `fallback` (if configured), in that order.
pub fn resolve(
    requested: &str,
    provider: &dyn LocaleDataProvider,
    fallback: Option<&str>,
) -> Result<Arc<LocaleData>, LocaleError> {
    let lang = Lang::parse(requested);

    if let Some(data) = provider.try_get_locale(lang.as_str()) {
        return Ok(data);
    }
    if !lang.is_base() {
        if let Some(data) = provider.try_get_locale(lang.base()) {
            debug_log(requested, lang.base());
            return Ok(data);
        }
    }
    if let Some(fb) = fallback {
        if let Some(data) = provider.try_get_locale(fb) {
            log::warn!("locale {requested:?} not found, using fallback {fb:?}");
            return Ok(data);
        }
    }

    Err(LocaleError::InvalidLocale {
        requested: requested.into(),
        available: provider.available_locales(),
    })
}

fn debug_log(requested: &str, base: &str) {
    log::debug!("locale {requested:?} resolved via base language {base:?}");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::provider::InMemoryProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_match() {
        let p = InMemoryProvider::builtin();
        let d = resolve("de-DE", &p, None).unwrap();
        assert_eq!(d.code, "de-DE");
    }

    #[test]
    fn falls_back_to_base_language() {
        let p = InMemoryProvider::builtin();
        // en-GB has no dedicated entry; should resolve to en via base language.
        let d = resolve("en-GB", &p, None).unwrap();
        assert_eq!(d.code, "en");
    }

    #[test]
    fn falls_back_to_configured_fallback() {
        let p = InMemoryProvider::builtin();
        let d = resolve("fr-FR", &p, Some("en")).unwrap();
        assert_eq!(d.code, "en");
    }

    #[test]
    fn errors_with_available_set() {
        let p = InMemoryProvider::builtin();
        let err = resolve("xx-YY", &p, None).unwrap_err();
        match err {
            LocaleError::InvalidLocale { requested, available } => {
                assert_eq!(requested, "xx-YY");
                assert!(available.contains(&"en".into()));
            }
        }
    }
}
