use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::models::balance::BalanceResponse;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: BalanceResponse,
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(data: BalanceResponse) -> Self {
        Self {
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.timestamp < ttl
    }
}

/// Address-keyed response cache with passive expiry.
///
/// Keys are stored exactly as given, so differently-cased spellings of one
/// address are separate entries. Nothing is ever evicted.
#[derive(Clone)]
pub struct BalanceCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl BalanceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the entry for `address` if it is still fresh.
    pub fn get(&self, address: &str) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(address)
            .filter(|entry| entry.is_fresh(self.ttl, Utc::now()))
            .cloned()
    }

    /// Replaces any previous entry for `address`.
    pub fn set(&self, address: &str, entry: CacheEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(address.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::FormattedBalance;

    const ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    fn response(eth: &str) -> BalanceResponse {
        BalanceResponse {
            tokens: vec![FormattedBalance {
                symbol: "ETH".to_string(),
                balance: eth.to_string(),
            }],
            success: true,
        }
    }

    fn aged(data: BalanceResponse, seconds: i64) -> CacheEntry {
        CacheEntry {
            data,
            timestamp: Utc::now() - Duration::seconds(seconds),
        }
    }

    #[test]
    fn returns_fresh_entry() {
        let cache = BalanceCache::new(Duration::seconds(60));
        cache.set(ADDRESS, CacheEntry::new(response("1.5")));

        let entry = cache.get(ADDRESS).expect("entry should be fresh");
        assert_eq!(entry.data, response("1.5"));
    }

    #[test]
    fn missing_key_is_a_miss() {
        let cache = BalanceCache::new(Duration::seconds(60));
        assert!(cache.get(ADDRESS).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn stale_entry_is_ignored_but_kept() {
        let cache = BalanceCache::new(Duration::seconds(60));
        cache.set(ADDRESS, aged(response("1"), 61));

        assert!(cache.get(ADDRESS).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn entry_at_exactly_ttl_is_stale() {
        let entry = aged(response("1"), 0);
        let ttl = Duration::seconds(60);
        assert!(entry.is_fresh(ttl, entry.timestamp + Duration::seconds(59)));
        assert!(!entry.is_fresh(ttl, entry.timestamp + ttl));
    }

    #[test]
    fn set_overwrites_previous_entry() {
        let cache = BalanceCache::new(Duration::seconds(60));
        cache.set(ADDRESS, aged(response("1"), 61));
        cache.set(ADDRESS, CacheEntry::new(response("2")));

        assert_eq!(cache.get(ADDRESS).map(|e| e.data), Some(response("2")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let cache = BalanceCache::new(Duration::seconds(60));
        cache.set(ADDRESS, CacheEntry::new(response("1")));

        assert!(cache.get(&ADDRESS.to_lowercase()).is_none());
    }

    #[test]
    fn clones_share_storage() {
        let cache = BalanceCache::new(Duration::seconds(60));
        let handle = cache.clone();
        handle.set(ADDRESS, CacheEntry::new(response("3")));

        assert!(cache.get(ADDRESS).is_some());
    }
}
