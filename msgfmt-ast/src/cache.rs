//! The AST cache (`spec.md` §4.2): a bounded concurrent map from pattern
//! string to parsed [`Message`]. Grounded on the same
//! `parking_lot::RwLock<FnvHashMap<..>>` memoization shape as
//! `msgfmt-locale`'s `CachingProvider`.

use crate::ast::Message;
use crate::error::ParseError;
use crate::parser;
use fnv::FnvHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Keying is by exact pattern string plus the `ignore_tag` flag: the same
/// text parsed the two ways must not collide (`spec.md` §4.2).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: String,
    ignore_tag: bool,
}

/// Read-only snapshot of cache activity, exposed for operational visibility
/// (`SPEC_FULL.md` Open Questions: pattern cache statistics).
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
}

/// Capacity default 1024 (`spec.md` §4.2).
const DEFAULT_CAPACITY: usize = 1024;

struct Inner {
    entries: FnvHashMap<CacheKey, Arc<Message>>,
    hits: u64,
    misses: u64,
}

/// A bounded concurrent pattern-AST cache. Eviction is deliberately trivial:
/// once at capacity, a new entry is simply not retained. Correctness of
/// parsing never depends on whether a pattern happens to be cached.
pub struct PatternCache {
    capacity: usize,
    enabled: bool,
    state: RwLock<Inner>,
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        PatternCache {
            capacity,
            enabled: true,
            state: RwLock::new(Inner {
                entries: FnvHashMap::default(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// A cache that never retains anything; every call reparses. Used when
    /// the caller disables caching via configuration (`spec.md` §4.2).
    pub fn disabled() -> Self {
        PatternCache {
            capacity: 0,
            enabled: false,
            state: RwLock::new(Inner {
                entries: FnvHashMap::default(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    pub fn with_capacity(capacity: usize, enabled: bool) -> Self {
        if enabled {
            Self::new(capacity)
        } else {
            Self::disabled()
        }
    }

    /// Parses `pattern`, serving a cached AST when available. The `Arc` lets
    /// callers cheaply share a hit without cloning the `Message` tree.
    pub fn get_or_parse(&self, pattern: &str, ignore_tag: bool) -> Result<Arc<Message>, ParseError> {
        if !self.enabled {
            return parser::parse(pattern, ignore_tag).map(Arc::new);
        }

        let key = CacheKey {
            pattern: pattern.to_string(),
            ignore_tag,
        };

        {
            let mut state = self.state.write();
            if let Some(hit) = state.entries.get(&key) {
                let hit = hit.clone();
                state.hits += 1;
                log::trace!("pattern cache hit ({} bytes)", pattern.len());
                return Ok(hit);
            }
            state.misses += 1;
        }
        log::debug!("pattern cache miss ({} bytes), parsing", pattern.len());

        let parsed = Arc::new(parser::parse(pattern, ignore_tag)?);

        let mut state = self.state.write();
        if state.entries.len() < self.capacity || state.entries.contains_key(&key) {
            state.entries.insert(key, parsed.clone());
        }
        Ok(parsed)
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.read();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            len: state.entries.len(),
        }
    }

    pub fn clear(&self) {
        self.state.write().entries.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn repeated_pattern_is_a_cache_hit() {
        let cache = PatternCache::default();
        let a = cache.get_or_parse("Hello, {name}!", false).unwrap();
        let b = cache.get_or_parse("Hello, {name}!", false).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn ignore_tag_variants_are_cached_separately() {
        let cache = PatternCache::default();
        let a = cache.get_or_parse("<b>x</b>", false).unwrap();
        let b = cache.get_or_parse("<b>x</b>", true).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.stats().len, 2);
    }

    #[test]
    fn disabled_cache_never_retains() {
        let cache = PatternCache::disabled();
        cache.get_or_parse("{x}", false).unwrap();
        cache.get_or_parse("{x}", false).unwrap();
        assert_eq!(cache.stats().len, 0);
    }

    #[test]
    fn over_capacity_insert_is_dropped_not_error() {
        let cache = PatternCache::new(1);
        cache.get_or_parse("{a}", false).unwrap();
        let second = cache.get_or_parse("{b}", false);
        assert!(second.is_ok());
        assert!(cache.stats().len <= 1);
    }

    #[test]
    fn parse_error_is_not_cached() {
        let cache = PatternCache::default();
        assert!(cache.get_or_parse("{unterminated", false).is_err());
        assert_eq!(cache.stats().len, 0);
    }
}
