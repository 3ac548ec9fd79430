use std::path::Path;
use thiserror::Error;

use crate::models::Destination;

/// Errors that can occur while loading the destination catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog record '{destination}': {reason}")]
    Invalid { destination: String, reason: String },
}

/// Default catalog, compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("destinations.json");

/// Immutable destination catalog
///
/// Loaded and validated once at startup; the whole catalog fits in memory
/// and every request reads from the same slice.
#[derive(Debug)]
pub struct CatalogStore {
    destinations: Vec<Destination>,
}

impl CatalogStore {
    /// Load the catalog shipped with the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from an operator-supplied JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate catalog JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        validate(&destinations)?;
        Ok(Self { destinations })
    }

    /// All destinations in catalog order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Look up a single destination by id
    pub fn get(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|dest| dest.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

fn validate(destinations: &[Destination]) -> Result<(), CatalogError> {
    for (index, dest) in destinations.iter().enumerate() {
        if dest.name.trim().is_empty() {
            return Err(CatalogError::Invalid {
                destination: format!("#{}", index),
                reason: "name must not be blank".to_string(),
            });
        }
        if !dest.price.is_ordered() {
            return Err(CatalogError::Invalid {
                destination: dest.name.clone(),
                reason: format!(
                    "price tiers must be ordered, got {}/{}/{}",
                    dest.price.budget, dest.price.mid, dest.price.luxury
                ),
            });
        }
        if !(0.0..=5.0).contains(&dest.rating) {
            return Err(CatalogError::Invalid {
                destination: dest.name.clone(),
                reason: format!("rating must be between 0 and 5, got {}", dest.rating),
            });
        }
        if destinations[..index].iter().any(|other| other.id == dest.id) {
            return Err(CatalogError::Invalid {
                destination: dest.name.clone(),
                reason: format!("duplicate id {}", dest.id),
            });
        }
    }
    Ok(())
}
