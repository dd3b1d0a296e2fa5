//! Product catalog state.
//!
//! The store has no backend; the catalog is a fixed, ordered product list
//! embedded at compile time and deserialized once at boot. It is never
//! mutated after startup.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Seed catalog data, embedded as JSON.
const SEED_JSON: &str = include_str!("../../assets/catalog.json");

/// A single product. Immutable once constructed; `price` is non-negative by
/// type and displayed without rounding or locale formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: u32,
    #[serde(rename = "image")]
    pub image_url: String,
}

/// Errors loading the catalog. Boot treats these as fatal.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed seed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The ordered product catalog, populated once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub products: Vec<Product>,
}

impl CatalogState {
    /// Deserialize the embedded seed catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the embedded JSON does not
    /// parse into a product list.
    pub fn seed() -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(SEED_JSON)?;
        Ok(Self { products })
    }
}
