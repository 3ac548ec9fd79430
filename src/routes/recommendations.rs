use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Recommender;
use crate::models::{
    CatalogResponse, ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse,
};
use crate::services::{CacheKey, CatalogStore, RecommendationCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cache: Arc<RecommendationCache>,
    pub recommender: Recommender,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/destinations", web::get().to(list_destinations))
        .route("/destinations/{id}", web::get().to(get_destination));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        destinations: state.catalog.len(),
        cached_recommendations: state.cache.stats().entries,
    })
}

/// Recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "travelStyle": ["culture"],
///   "budget": "budget",
///   "season": "autumn",
///   "interests": ["history"],
///   "activities": ["sightseeing"],
///   "country": "any",
///   "sortBy": "match",
///   "limit": 12
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let prefs = req.to_preferences();
    let sort_key = req.sort_key();

    // Unknown enum tags degrade to no constraint instead of failing the request
    if req.budget.is_some() && prefs.budget.is_none() {
        tracing::warn!("Unrecognized budget tag {:?}, ignoring", req.budget.as_deref());
    }
    if req.season.is_some() && prefs.season.is_none() {
        tracing::warn!("Unrecognized season tag {:?}, ignoring", req.season.as_deref());
    }

    // Cap limit to keep a single response bounded
    let limit = req
        .limit
        .map(|limit| limit as usize)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    tracing::info!(
        "Finding recommendations: sort={}, limit={}, constrained={}",
        sort_key.as_str(),
        limit,
        !prefs.is_empty()
    );

    let cache_key = CacheKey::recommendations(&prefs, sort_key, limit);
    if let Some(cached) = state.cache.get(&cache_key).await {
        return HttpResponse::Ok().json(RecommendResponse {
            destinations: cached.as_ref().clone(),
            total_considered: state.catalog.len(),
        });
    }

    // Run recommendation pipeline
    let result = state
        .recommender
        .recommend(&prefs, state.catalog.destinations(), sort_key, limit);

    tracing::debug!(
        "Pipeline kept {} of {} destinations",
        result.destinations.len(),
        result.total_considered
    );

    state.cache.insert(cache_key, result.destinations.clone()).await;

    tracing::info!(
        "Returning {} destinations (from {} considered)",
        result.destinations.len(),
        result.total_considered
    );

    HttpResponse::Ok().json(RecommendResponse {
        destinations: result.destinations,
        total_considered: result.total_considered,
    })
}

/// Catalog listing endpoint
///
/// GET /api/v1/destinations
async fn list_destinations(state: web::Data<AppState>) -> impl Responder {
    let destinations = state.catalog.destinations().to_vec();

    HttpResponse::Ok().json(CatalogResponse {
        total: destinations.len(),
        destinations,
    })
}

/// Single destination endpoint
///
/// GET /api/v1/destinations/{id}
async fn get_destination(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(id) {
        Some(dest) => HttpResponse::Ok().json(dest),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Destination not found".to_string(),
            message: format!("No destination with id {}", id),
            status_code: 404,
        }),
    }
}
