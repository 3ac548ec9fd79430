// Core algorithm exports
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod sorter;
pub mod tags;

pub use filters::{filter_catalog, matches_country, matches_hard_constraints, within_budget};
pub use recommender::{RecommendResult, Recommender, DEFAULT_RESULT_LIMIT};
pub use scoring::calculate_match_score;
pub use sorter::sort_destinations;
pub use tags::{normalize_tag, normalize_tags, overlap_ratio, slugify};
