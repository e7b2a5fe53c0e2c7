/// Represents a car tracked by the dealership inventory.
///
/// Records are owned by [`InventoryStore`](crate::inventory::InventoryStore).
/// Every other structure (the price index, ranked candidates, the sale ledger)
/// refers to a car by its [`CarId`] and resolves it through the store.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Cars.
///
/// Identifiers are assigned sequentially from 1 and never reused, even after
/// the car they named has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CarId(pub u32);

impl From<u32> for CarId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "car_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub price: f64,
    /// `true` while the car is for sale, `false` once a sale is recorded.
    pub is_available: bool,
    /// Ranking weight in `0..=9` for seeded data; only used by the recommender.
    pub popularity: u32,
}

impl CarRecord {
    /// Creates a new, available CarRecord.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the inventory)
    /// * `brand` - Manufacturer, e.g. "Toyota"
    /// * `model` - Model name, e.g. "Camry"
    /// * `price` - Asking price
    /// * `popularity` - Ranking weight
    pub fn new(
        id: CarId,
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        popularity: u32,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            model: model.into(),
            price,
            is_available: true,
            popularity,
        }
    }

    /// Display name in the catalog's `Brand_Model` form.
    pub fn catalog_name(&self) -> String {
        format!("{}_{}", self.brand, self.model)
    }
}

/// Payload for adding a car to the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarCreate {
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub popularity: u32,
}

impl CarCreate {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, price: f64, popularity: u32) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
            popularity,
        }
    }
}
