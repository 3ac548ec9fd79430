use std::collections::BTreeSet;

use crate::core::tags::{overlap_ratio, slugify};
use crate::models::{
    BudgetTier, Destination, PriceTiers, ScoringWeights, Season, TravelPreferences, ANY_COUNTRY,
};

/// Fraction of the budget weight awarded when the tier price exceeds the
/// tier's nominal ceiling (15 of 25 points at default weights)
const OVER_BUDGET_FACTOR: f64 = 0.6;

/// Calculate a match score (0-100) for a destination against traveler
/// preferences, plus the tags that drove the overlap factors.
///
/// Scoring formula (default weights):
/// score = (
///     style_overlap    * 30 +     # shared travel styles
///     budget_fit       * 25 +     # tier price within the nominal ceiling
///     season_fit       * 20 +     # trip season in the destination's best times
///     activity_overlap * 15 +     # shared activities
///     country_fit      * 10       # requested country, "any" always fits
/// ) / sum of weights for factors present, * 100
///
/// A factor only enters the formula when the preference side supplies it,
/// so sparse questionnaires are scored against what they actually asked for.
pub fn calculate_match_score(
    dest: &Destination,
    prefs: &TravelPreferences,
    weights: &ScoringWeights,
) -> (u8, Vec<String>) {
    let mut achieved = 0.0;
    let mut potential = 0.0;
    let mut matched_tags: BTreeSet<String> = BTreeSet::new();

    // Stage 3a: travel-style overlap
    if !prefs.travel_styles.is_empty() {
        potential += weights.style;
        achieved += overlap_ratio(&dest.travel_styles, &prefs.travel_styles) * weights.style;
        matched_tags.extend(
            dest.travel_styles
                .intersection(&prefs.travel_styles)
                .cloned(),
        );
    }

    // Stage 3b: budget fit against the nominal ceiling
    if let Some(tier) = prefs.budget {
        potential += weights.budget;
        achieved += budget_fit_score(tier, &dest.price) * weights.budget;
    }

    // Stage 3c: season fit (Flexible fits everywhere)
    if let Some(season) = prefs.season {
        potential += weights.season;
        if season_fits(season, &dest.best_time) {
            achieved += weights.season;
        }
    }

    // Stage 3d: activity overlap
    if !prefs.activities.is_empty() {
        potential += weights.activity;
        achieved += overlap_ratio(&dest.activities, &prefs.activities) * weights.activity;
        matched_tags.extend(dest.activities.intersection(&prefs.activities).cloned());
    }

    // Stage 3e: country fit
    if let Some(country) = prefs.country.as_deref() {
        potential += weights.country;
        if country_fits(country, &dest.country) {
            achieved += weights.country;
        }
    }

    let score = if potential > 0.0 {
        (achieved / potential * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        // Nothing asked for, nothing to judge
        0
    };

    (score, matched_tags.into_iter().collect())
}

/// Budget factor (0-1)
/// Full credit within the tier's nominal ceiling, partial credit above it.
/// Luxury has no ceiling and always gets full credit.
#[inline]
fn budget_fit_score(tier: BudgetTier, price: &PriceTiers) -> f64 {
    match tier.nominal_ceiling() {
        Some(ceiling) if tier.select_price(price) > ceiling => OVER_BUDGET_FACTOR,
        _ => 1.0,
    }
}

#[inline]
fn season_fits(season: Season, best_time: &BTreeSet<Season>) -> bool {
    season == Season::Flexible || best_time.contains(&season)
}

/// Preference countries arrive pre-slugged; destination names are slugged
/// here so "New Zealand" matches "new-zealand".
#[inline]
fn country_fits(pref_country: &str, dest_country: &str) -> bool {
    pref_country == ANY_COUNTRY || slugify(dest_country) == pref_country
}
