use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{ScoredDestination, SortKey, TravelPreferences};

/// In-process cache for recommendation results
///
/// The pipeline is deterministic over an immutable catalog, so a computed
/// result stays valid until its TTL expires. Entries are shared behind Arc
/// to keep hits allocation-free.
pub struct RecommendationCache {
    entries: moka::future::Cache<String, Arc<Vec<ScoredDestination>>>,
}

impl RecommendationCache {
    /// Create a cache holding up to `capacity` entries for `ttl_secs` seconds
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get a cached result
    pub async fn get(&self, key: &str) -> Option<Arc<Vec<ScoredDestination>>> {
        let hit = self.entries.get(key).await;
        if hit.is_some() {
            tracing::trace!("Recommendation cache hit: {}", key);
        } else {
            tracing::trace!("Recommendation cache miss: {}", key);
        }
        hit
    }

    /// Store a result
    pub async fn insert(&self, key: String, destinations: Vec<ScoredDestination>) {
        self.entries.insert(key, Arc::new(destinations)).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a canonical key for a recommendation query
    ///
    /// Preference sets iterate in sorted order, so two requests asking for
    /// the same thing produce the same key regardless of tag order on the
    /// wire.
    pub fn recommendations(prefs: &TravelPreferences, sort: SortKey, limit: usize) -> String {
        format!(
            "rec:{}:{}:{}:{}:{}:{}:{}",
            join_tags(&prefs.travel_styles),
            prefs.budget.map(|tier| tier.as_str()).unwrap_or("-"),
            prefs.season.map(|season| season.as_str()).unwrap_or("-"),
            join_tags(&prefs.activities),
            prefs.country.as_deref().unwrap_or("-"),
            sort.as_str(),
            limit,
        )
    }
}

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}
