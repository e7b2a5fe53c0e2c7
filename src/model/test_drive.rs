use crate::model::{CarId, CustomerId};
use serde::{Deserialize, Serialize};

/// A queued request for a test drive.
///
/// Holds identifiers by value only. Neither the car nor the customer is
/// checked for existence when the request is queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDriveRequest {
    pub customer_id: CustomerId,
    pub car_id: CarId,
    /// Opaque timestamp supplied by the caller.
    pub requested_at: String,
}

impl TestDriveRequest {
    pub fn new(customer_id: CustomerId, car_id: CarId, requested_at: impl Into<String>) -> Self {
        Self {
            customer_id,
            car_id,
            requested_at: requested_at.into(),
        }
    }
}
