//! Composed atlas cache using moka
//!
//! Composition is pure, so a view is fully determined by the selection, the
//! layer flags, the timeline window and the dataset revision it was built
//! from. Bumping the revision retires every stale entry; moka evicts them as
//! capacity runs out.

use crate::pipeline::AtlasOutcome;
use crate::selection::{AtlasSelection, DistrictFilter};
use crate::timeline::TimelineWindow;
use fra_core::{MapLayerState, TargetState};
use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Everything a composed atlas depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtlasKey {
    state: TargetState,
    district: DistrictFilter,
    layers: u8,
    window: Option<TimelineWindow>,
    revision: u64,
}

impl AtlasKey {
    /// Build key
    #[must_use]
    pub fn new(
        selection: &AtlasSelection,
        layers: &MapLayerState,
        window: Option<&TimelineWindow>,
        revision: u64,
    ) -> Self {
        Self {
            state: selection.state,
            district: selection.district.clone(),
            layers: layers.bits(),
            window: window.copied(),
            revision,
        }
    }
}

/// Cache of composed atlases
#[derive(Debug, Clone)]
pub struct AtlasCache {
    inner: Cache<AtlasKey, Arc<AtlasOutcome>>,
}

impl AtlasCache {
    /// Create cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Cached outcome for `key`, or the result of `compose` stored under it
    ///
    /// Concurrent misses on one key share a single composition. A failed
    /// composition is not cached.
    ///
    /// # Errors
    ///
    /// Returns the error of `compose`, shared between every caller that was
    /// waiting on it.
    pub async fn try_get_or_compose<Fut, E>(
        &self,
        key: AtlasKey,
        compose: Fut,
    ) -> Result<Arc<AtlasOutcome>, Arc<E>>
    where
        Fut: Future<Output = Result<AtlasOutcome, E>>,
        E: Send + Sync + 'static,
    {
        let revision = key.revision;
        let outcome = self
            .inner
            .try_get_with(key, async move { compose.await.map(Arc::new) })
            .await?;
        tracing::trace!(revision, "atlas cache lookup");
        Ok(outcome)
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for AtlasCache {
    /// Capacity of 1,024 composed views
    fn default() -> Self {
        Self::new(1_024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{OverlayCatalog, StateDataset};
    use crate::pipeline::compose;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn empty_outcome(state: TargetState) -> AtlasOutcome {
        compose(
            &StateDataset::empty(state),
            &OverlayCatalog::default(),
            &AtlasSelection::new(state),
            MapLayerState::default(),
            None,
        )
    }

    fn key(state: TargetState) -> AtlasKey {
        AtlasKey::new(&AtlasSelection::new(state), &MapLayerState::default(), None, 0)
    }

    #[tokio::test]
    async fn second_lookup_hits() {
        let cache = AtlasCache::new(16);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let outcome = cache
                .try_get_or_compose(key(TargetState::Odisha), async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(empty_outcome(TargetState::Odisha))
                })
                .await
                .unwrap();
            assert!(outcome.is_empty());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_misses_compose_once() {
        let cache = AtlasCache::new(16);
        let calls = AtomicUsize::new(0);
        let (cache, calls) = (&cache, &calls);
        let lookup = move || {
            cache.try_get_or_compose(key(TargetState::Tripura), async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok::<_, String>(empty_outcome(TargetState::Tripura))
            })
        };

        let (a, b, c) = tokio::join!(lookup(), lookup(), lookup());
        let a = a.unwrap();
        assert!(Arc::ptr_eq(&a, &b.unwrap()));
        assert!(Arc::ptr_eq(&a, &c.unwrap()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_composition_is_not_cached() {
        let cache = AtlasCache::new(16);
        let err = cache
            .try_get_or_compose(key(TargetState::Telangana), async {
                Err::<AtlasOutcome, _>("backend down".to_string())
            })
            .await
            .unwrap_err();
        assert_eq!(err.as_str(), "backend down");

        let outcome = cache
            .try_get_or_compose(key(TargetState::Telangana), async {
                Ok::<_, String>(empty_outcome(TargetState::Telangana))
            })
            .await
            .unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn keys_differ_by_layers_window_and_revision() {
        let sel = AtlasSelection::new(TargetState::Tripura);
        let base = AtlasKey::new(&sel, &MapLayerState::default(), None, 0);
        assert_ne!(base, AtlasKey::new(&sel, &MapLayerState::all(), None, 0));
        assert_ne!(
            base,
            AtlasKey::new(&sel, &MapLayerState::default(), Some(&TimelineWindow::default()), 0)
        );
        assert_ne!(base, AtlasKey::new(&sel, &MapLayerState::default(), None, 1));
        assert_eq!(base, AtlasKey::new(&sel, &MapLayerState::default(), None, 0));
    }
}
