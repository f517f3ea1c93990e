// src/api/cache.rs
//! Revalidation window for the front-page listing.
//!
//! The listing is the only cached data in the process: one cell holding
//! the root page's subpages, valid for a fixed TTL. After the window
//! passes, the next request re-fetches; everything else is always
//! fetched fresh.

use crate::model::PageSummary;
use parking_lot::RwLock;
use std::time::{Duration, Instant};

struct CachedListing {
    fetched_at: Instant,
    pages: Vec<PageSummary>,
}

/// Process-wide TTL cell for listing entries.
pub struct ListingCache {
    entry: RwLock<Option<CachedListing>>,
    ttl: Duration,
}

impl ListingCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Returns the cached listing if it is still inside the window.
    pub fn get(&self) -> Option<Vec<PageSummary>> {
        let guard = self.entry.read();
        let cached = guard.as_ref()?;
        if cached.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        Some(cached.pages.clone())
    }

    /// Stores a freshly fetched listing, restarting the window.
    pub fn put(&self, pages: Vec<PageSummary>) {
        *self.entry.write() = Some(CachedListing {
            fetched_at: Instant::now(),
            pages,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageId;

    fn summary(title: &str) -> PageSummary {
        PageSummary {
            id: PageId::new_v4(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = ListingCache::new(60);
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_put_then_get_within_window() {
        let cache = ListingCache::new(60);
        cache.put(vec![summary("A"), summary("B")]);
        let pages = cache.get().expect("entry should still be valid");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "A");
    }

    #[test]
    fn test_zero_ttl_always_revalidates() {
        let cache = ListingCache::new(0);
        cache.put(vec![summary("A")]);
        assert!(cache.get().is_none());
    }
}
