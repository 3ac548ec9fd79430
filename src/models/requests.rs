use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::tags::{normalize_tags, slugify};
use crate::models::domain::{BudgetTier, Season, SortKey, TravelPreferences};

/// Request for destination recommendations
///
/// Mirrors the questionnaire payload the frontend submits. Every field is
/// optional; tag fields take free-form strings so an older client can send
/// values this service has never heard of without breaking the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    #[serde(alias = "travel_style", rename = "travelStyle")]
    pub travel_style: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    #[serde(alias = "sort_by", rename = "sortBy")]
    pub sort_by: Option<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl RecommendRequest {
    /// Convert the wire payload into engine preferences
    ///
    /// Tags are trimmed and lowercased, countries are slugged, and enum
    /// tags the engine does not recognize are dropped, degrading to "no
    /// constraint" rather than an error.
    pub fn to_preferences(&self) -> TravelPreferences {
        TravelPreferences {
            travel_styles: normalize_tags(&self.travel_style),
            budget: self.budget.as_deref().and_then(BudgetTier::parse),
            season: self.season.as_deref().and_then(Season::parse),
            interests: normalize_tags(&self.interests),
            activities: normalize_tags(&self.activities),
            country: self
                .country
                .as_deref()
                .map(slugify)
                .filter(|country| !country.is_empty()),
        }
    }

    /// Requested ordering, defaulting to best-match-first
    pub fn sort_key(&self) -> SortKey {
        self.sort_by
            .as_deref()
            .and_then(SortKey::parse)
            .unwrap_or_default()
    }
}
