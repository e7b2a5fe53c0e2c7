/// Represents a completed sale.
///
/// Sale records are pushed onto the [`SaleLedger`](crate::sale_ledger::SaleLedger)
/// and popped again by undo.
use crate::model::{CarId, CustomerId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SaleId(pub u32);

impl From<u32> for SaleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sale_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub customer_id: CustomerId,
    pub car_id: CarId,
    pub amount: f64,
    pub sold_at: String,
}

/// Payload for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub customer_id: CustomerId,
    pub car_id: CarId,
    pub amount: f64,
    pub sold_at: String,
}
