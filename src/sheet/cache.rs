//! TTL cache for fetched sheet text.
//!
//! The board's refresh model is wholesale: a fetch replaces the whole
//! snapshot. The cache only decides *when* a refetch actually happens; the
//! schedule board and status engine never see it. When a refetch fails and
//! a previous snapshot exists, the stale text is served instead of the
//! error, so a flaky source degrades to slightly-old data rather than an
//! empty board.

use crate::sheet::fetch::FetchError;
use std::time::{Duration, Instant};

pub struct SheetCache {
    ttl: Duration,
    slot: Option<Slot>,
}

struct Slot {
    fetched_at: Instant,
    text: String,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Return the cached text while fresh; otherwise run `refetch` and
    /// replace the slot. A failed refetch keeps and returns the stale text
    /// when there is one, and is fatal only on a cold cache.
    pub fn get<F>(&mut self, refetch: F) -> Result<&str, FetchError>
    where
        F: FnOnce() -> Result<String, FetchError>,
    {
        let fresh = self
            .slot
            .as_ref()
            .is_some_and(|slot| slot.fetched_at.elapsed() < self.ttl);

        if !fresh {
            match refetch() {
                Ok(text) => {
                    self.slot = Some(Slot {
                        fetched_at: Instant::now(),
                        text,
                    });
                }
                Err(err) => {
                    if self.slot.is_none() {
                        return Err(err);
                    }
                    tracing::warn!(error = %err, "sheet refresh failed, keeping previous snapshot");
                }
            }
        }

        // A missing slot with a failed refetch has already returned above.
        Ok(&self.slot.as_ref().expect("slot populated").text)
    }

    /// Drop the snapshot so the next `get` must refetch.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn unavailable() -> FetchError {
        FetchError::SourceUnavailable {
            url: "http://sheet".to_string(),
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn fresh_hit_does_not_refetch() {
        let mut cache = SheetCache::new(Duration::from_secs(3600));
        let fetches = Cell::new(0);
        let fetch = || {
            fetches.set(fetches.get() + 1);
            Ok("v1".to_string())
        };

        assert_eq!(cache.get(fetch).unwrap(), "v1");
        assert_eq!(cache.get(|| panic!("must not refetch")).unwrap(), "v1");
        assert_eq!(fetches.get(), 1);
    }

    #[test]
    fn stale_entry_triggers_refetch() {
        let mut cache = SheetCache::new(Duration::ZERO);
        assert_eq!(cache.get(|| Ok("v1".to_string())).unwrap(), "v1");
        assert_eq!(cache.get(|| Ok("v2".to_string())).unwrap(), "v2");
    }

    #[test]
    fn failed_refresh_falls_back_to_stale_text() {
        let mut cache = SheetCache::new(Duration::ZERO);
        assert_eq!(cache.get(|| Ok("v1".to_string())).unwrap(), "v1");
        assert_eq!(cache.get(|| Err(unavailable())).unwrap(), "v1");
    }

    #[test]
    fn cold_cache_propagates_fetch_errors() {
        let mut cache = SheetCache::new(Duration::from_secs(3600));
        let err = cache.get(|| Err(unavailable())).unwrap_err();
        assert!(err.to_string().contains("schedule source unavailable"));
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let mut cache = SheetCache::new(Duration::from_secs(3600));
        assert_eq!(cache.get(|| Ok("v1".to_string())).unwrap(), "v1");
        cache.invalidate();
        assert_eq!(cache.get(|| Ok("v2".to_string())).unwrap(), "v2");
    }
}
