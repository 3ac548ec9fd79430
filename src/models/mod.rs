// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BudgetTier, Destination, PriceTiers, ScoredDestination, ScoringWeights, Season, SortKey, TravelPreferences, ANY_COUNTRY};
pub use requests::RecommendRequest;
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse, RecommendResponse};
