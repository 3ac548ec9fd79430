//! Wander Algo - Destination recommendation service for the Wander travel planner
//!
//! This library provides the recommendation engine used by the Wander travel
//! planner. It implements a multi-stage pipeline: score every destination,
//! filter by hard constraints, sort stably, truncate to the limit.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_score, filter_catalog, sort_destinations, RecommendResult, Recommender,
    DEFAULT_RESULT_LIMIT,
};
pub use crate::models::{
    BudgetTier, Destination, PriceTiers, RecommendRequest, RecommendResponse, ScoredDestination,
    ScoringWeights, Season, SortKey, TravelPreferences,
};
pub use crate::services::{CatalogError, CatalogStore, RecommendationCache};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let catalog = CatalogStore::embedded().unwrap();
        let recommender = Recommender::with_default_weights();
        let result = recommender.recommend(
            &TravelPreferences::default(),
            catalog.destinations(),
            SortKey::Match,
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(result.total_considered, catalog.len());
    }
}
