use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel country value meaning "no country restriction"
pub const ANY_COUNTRY: &str = "any";

/// Traveler budget tier, from the questionnaire's budget question
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Moderate,
    Premium,
    Luxury,
}

impl BudgetTier {
    /// Lenient tag parse; unknown tags yield None so the caller can drop
    /// the constraint instead of failing the request.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "budget" => Some(Self::Budget),
            "moderate" => Some(Self::Moderate),
            "premium" => Some(Self::Premium),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    /// Price point a tier shops at: Budget travelers are judged on the
    /// budget price, Moderate and Premium on the mid price, Luxury on the
    /// luxury price.
    pub fn select_price(self, price: &PriceTiers) -> u32 {
        match self {
            Self::Budget => price.budget,
            Self::Moderate | Self::Premium => price.mid,
            Self::Luxury => price.luxury,
        }
    }

    /// Hard ceiling applied when filtering the catalog. None means no cap.
    pub fn filter_ceiling(self) -> Option<u32> {
        match self {
            Self::Budget => Some(100_000),
            Self::Moderate => Some(200_000),
            Self::Premium => Some(350_000),
            Self::Luxury => None,
        }
    }

    /// Ceiling the scorer judges affordability against. Premium is tighter
    /// here than in `filter_ceiling`, so a destination can survive the
    /// filter yet score as a stretch purchase.
    pub fn nominal_ceiling(self) -> Option<u32> {
        match self {
            Self::Budget => Some(100_000),
            Self::Moderate => Some(200_000),
            Self::Premium => Some(300_000),
            Self::Luxury => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }
}

/// Travel season. Flexible acts as a wildcard that fits every destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    #[serde(alias = "fall")]
    Autumn,
    Winter,
    Flexible,
}

impl Season {
    /// Lenient tag parse; accepts "fall" as an alias for autumn.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            "flexible" => Some(Self::Flexible),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::Flexible => "flexible",
        }
    }
}

/// Per-person price points for the same trip at three spending levels,
/// in rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTiers {
    pub budget: u32,
    pub mid: u32,
    pub luxury: u32,
}

impl PriceTiers {
    /// Catalog invariant: budget <= mid <= luxury
    pub fn is_ordered(&self) -> bool {
        self.budget <= self.mid && self.mid <= self.luxury
    }
}

/// Catalog destination record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub price: PriceTiers,
    #[serde(rename = "bestTime")]
    pub best_time: BTreeSet<Season>,
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub activities: BTreeSet<String>,
    #[serde(rename = "travelStyles", default)]
    pub travel_styles: BTreeSet<String>,
    #[serde(rename = "flightPrice")]
    pub flight_price: u32,
}

/// Structured traveler preferences, the query run against the catalog.
/// Absent fields carry no constraint: they neither filter the catalog nor
/// count toward the score denominator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPreferences {
    #[serde(rename = "travelStyle", default)]
    pub travel_styles: BTreeSet<String>,
    #[serde(default)]
    pub budget: Option<BudgetTier>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub activities: BTreeSet<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl TravelPreferences {
    /// True when no field constrains anything; every destination passes
    /// the filter and scores zero.
    pub fn is_empty(&self) -> bool {
        self.travel_styles.is_empty()
            && self.budget.is_none()
            && self.season.is_none()
            && self.activities.is_empty()
            && self.country.is_none()
    }
}

/// Catalog record with the per-query match score attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedTags")]
    pub matched_tags: Vec<String>,
}

/// Result ordering requested by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Match,
    Price,
    Rating,
    Popular,
}

impl SortKey {
    /// Lenient tag parse; unknown keys fall back to the default ordering.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "match" => Some(Self::Match),
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            "popular" => Some(Self::Popular),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Popular => "popular",
        }
    }
}

/// Scoring weights. Relative values; the scorer renormalizes over the
/// factors actually present in a query.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub style: f64,
    pub budget: f64,
    pub season: f64,
    pub activity: f64,
    pub country: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            style: 30.0,
            budget: 25.0,
            season: 20.0,
            activity: 15.0,
            country: 10.0,
        }
    }
}
