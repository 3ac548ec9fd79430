use std::cmp::Ordering;

use crate::models::{ScoredDestination, SortKey};

/// Sort scored destinations in place by the requested key
///
/// All sorts are stable, so destinations tying on the key keep their
/// catalog order. Match, rating and popularity sort best-first; price
/// sorts cheapest-first on the budget tier price.
pub fn sort_destinations(destinations: &mut [ScoredDestination], key: SortKey) {
    match key {
        SortKey::Match => {
            destinations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        }
        SortKey::Price => {
            destinations.sort_by(|a, b| {
                a.destination
                    .price
                    .budget
                    .cmp(&b.destination.price.budget)
            });
        }
        SortKey::Rating => {
            destinations.sort_by(|a, b| {
                b.destination
                    .rating
                    .partial_cmp(&a.destination.rating)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Popular => {
            destinations.sort_by(|a, b| b.destination.reviews.cmp(&a.destination.reviews));
        }
    }
}
