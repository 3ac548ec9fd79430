use serde::{Deserialize, Serialize};

use crate::models::domain::{Destination, ScoredDestination};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub destinations: Vec<ScoredDestination>,
    #[serde(rename = "totalConsidered")]
    pub total_considered: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub destinations: Vec<Destination>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub destinations: usize,
    #[serde(rename = "cachedRecommendations")]
    pub cached_recommendations: u64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
