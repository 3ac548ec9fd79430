use crate::core::{
    filters::matches_hard_constraints, scoring::calculate_match_score, sorter::sort_destinations,
};
use crate::models::{Destination, ScoredDestination, ScoringWeights, SortKey, TravelPreferences};

/// Result count when the client does not ask for one
pub const DEFAULT_RESULT_LIMIT: usize = 12;

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendResult {
    pub destinations: Vec<ScoredDestination>,
    pub total_considered: usize,
}

/// Main recommendation orchestrator - implements the multi-stage pipeline
///
/// # Pipeline Stages
/// 1. Score every catalog destination against the preferences
/// 2. Filter by hard constraints (country, budget ceiling)
/// 3. Sort by the requested key (stable)
/// 4. Truncate to the limit
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Run the full pipeline over a catalog
    ///
    /// Every destination that passes the hard constraints is kept, however
    /// low it scores; the score is informational, not a cutoff. An empty
    /// catalog or a limit of zero simply yields no destinations.
    ///
    /// # Arguments
    /// * `prefs` - The traveler's preferences
    /// * `catalog` - All destinations under consideration
    /// * `sort_key` - Result ordering
    /// * `limit` - Maximum number of destinations to return
    pub fn recommend(
        &self,
        prefs: &TravelPreferences,
        catalog: &[Destination],
        sort_key: SortKey,
        limit: usize,
    ) -> RecommendResult {
        let total_considered = catalog.len();

        let mut destinations: Vec<ScoredDestination> = catalog
            .iter()
            // Stage 1: score everything
            .map(|dest| {
                let (match_score, matched_tags) =
                    calculate_match_score(dest, prefs, &self.weights);
                ScoredDestination {
                    destination: dest.clone(),
                    match_score,
                    matched_tags,
                }
            })
            // Stage 2: hard constraints
            .filter(|scored| matches_hard_constraints(&scored.destination, prefs))
            .collect();

        // Stage 3: stable sort
        sort_destinations(&mut destinations, sort_key);

        // Stage 4: limit results
        destinations.truncate(limit);

        RecommendResult {
            destinations,
            total_considered,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, PriceTiers, Season};
    use std::collections::BTreeSet;

    fn tag_set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn create_destination(
        id: u32,
        name: &str,
        country: &str,
        budget_price: u32,
        best_time: &[Season],
        styles: &[&str],
    ) -> Destination {
        Destination {
            id,
            name: name.to_string(),
            country: country.to_string(),
            continent: "Asia".to_string(),
            price: PriceTiers {
                budget: budget_price,
                mid: budget_price * 2,
                luxury: budget_price * 4,
            },
            best_time: best_time.iter().copied().collect(),
            rating: 4.5,
            reviews: 1000,
            highlights: vec![],
            activities: tag_set(&["sightseeing"]),
            travel_styles: tag_set(styles),
            flight_price: 40_000,
        }
    }

    fn create_catalog() -> Vec<Destination> {
        vec![
            create_destination(1, "Kyoto", "Japan", 80_000, &[Season::Autumn], &["culture"]),
            create_destination(2, "Paris", "France", 120_000, &[Season::Spring], &["culture"]),
            create_destination(3, "Bali", "Indonesia", 60_000, &[Season::Summer], &["beach"]),
        ]
    }

    #[test]
    fn test_recommend_scores_and_filters() {
        let recommender = Recommender::with_default_weights();
        let prefs = TravelPreferences {
            travel_styles: tag_set(&["culture"]),
            budget: Some(BudgetTier::Budget),
            season: Some(Season::Autumn),
            ..Default::default()
        };

        let result = recommender.recommend(&prefs, &create_catalog(), SortKey::Match, 10);

        // Paris fails the budget ceiling; Kyoto outscores Bali
        assert_eq!(result.total_considered, 3);
        assert_eq!(result.destinations.len(), 2);
        assert_eq!(result.destinations[0].destination.name, "Kyoto");
        assert_eq!(result.destinations[1].destination.name, "Bali");
        assert!(result.destinations[0].match_score > result.destinations[1].match_score);
    }

    #[test]
    fn test_zero_scores_are_kept() {
        let recommender = Recommender::with_default_weights();
        let prefs = TravelPreferences {
            season: Some(Season::Winter),
            ..Default::default()
        };

        let result = recommender.recommend(&prefs, &create_catalog(), SortKey::Match, 10);

        // Nothing fits winter, but nothing is dropped either
        assert_eq!(result.destinations.len(), 3);
        assert!(result.destinations.iter().all(|d| d.match_score == 0));
    }

    #[test]
    fn test_empty_preferences_return_catalog_order() {
        let recommender = Recommender::with_default_weights();

        let result = recommender.recommend(
            &TravelPreferences::default(),
            &create_catalog(),
            SortKey::Match,
            10,
        );

        let ids: Vec<u32> = result.destinations.iter().map(|d| d.destination.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_respects_limit() {
        let recommender = Recommender::with_default_weights();

        let result = recommender.recommend(
            &TravelPreferences::default(),
            &create_catalog(),
            SortKey::Match,
            2,
        );

        assert_eq!(result.destinations.len(), 2);
        assert_eq!(result.total_considered, 3);
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::with_default_weights();
        let prefs = TravelPreferences {
            budget: Some(BudgetTier::Luxury),
            ..Default::default()
        };

        let result = recommender.recommend(&prefs, &[], SortKey::Match, 10);

        assert!(result.destinations.is_empty());
        assert_eq!(result.total_considered, 0);
    }

    #[test]
    fn test_zero_limit() {
        let recommender = Recommender::with_default_weights();

        let result = recommender.recommend(
            &TravelPreferences::default(),
            &create_catalog(),
            SortKey::Match,
            0,
        );

        assert!(result.destinations.is_empty());
    }
}
