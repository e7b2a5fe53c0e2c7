//! Budget and popularity weighted car recommendations.
//!
//! Each call to [`Recommender::generate`] scans the whole inventory, pushes
//! every affordable available car onto a max-heap keyed by score, and drains
//! the heap into a ranked list. Nothing is kept between calls.
//!
//! ```text
//! score = 0.7 * (budget - price) / budget + 0.3 * popularity / 10
//! ```
//!
//! Equal scores rank the lower car identifier first.

use crate::error::DealershipError;
use crate::inventory::InventoryStore;
use crate::model::CarRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

const HEADROOM_WEIGHT: f64 = 0.7;
const POPULARITY_WEIGHT: f64 = 0.3;
const POPULARITY_SCALE: f64 = 10.0;

/// How many recommendations are shown when the caller does not say.
pub const DEFAULT_DEPTH: usize = 5;

/// A car paired with its score for one recommendation pass.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub car: CarRecord,
    pub score: f64,
}

impl Ord for RankedCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.car.id.cmp(&self.car.id))
    }
}

impl PartialOrd for RankedCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedCandidate {}

/// Candidates in descending score order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recommendations {
    ranked: Vec<RankedCandidate>,
}

impl Recommendations {
    /// The first `n` candidates (fewer if not that many qualified).
    pub fn top(&self, n: usize) -> &[RankedCandidate] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedCandidate> {
        self.ranked.iter()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn into_vec(self) -> Vec<RankedCandidate> {
        self.ranked
    }
}

pub struct Recommender;

impl Recommender {
    /// Scores one car against a budget. The budget must already be validated.
    pub fn score(car: &CarRecord, budget: f64) -> f64 {
        let headroom = (budget - car.price) / budget;
        let popularity = f64::from(car.popularity) / POPULARITY_SCALE;
        HEADROOM_WEIGHT * headroom + POPULARITY_WEIGHT * popularity
    }

    /// Ranks every available car priced within `budget`.
    ///
    /// # Errors
    /// [`DealershipError::InvalidBudget`] if `budget` is not a finite number
    /// greater than zero.
    pub fn generate(inventory: &InventoryStore, budget: f64) -> Result<Recommendations, DealershipError> {
        if !(budget.is_finite() && budget > 0.0) {
            return Err(DealershipError::InvalidBudget(budget));
        }

        let mut heap: BinaryHeap<RankedCandidate> = inventory
            .iter()
            .filter(|car| car.is_available && car.price <= budget)
            .map(|car| RankedCandidate {
                car: car.clone(),
                score: Self::score(car, budget),
            })
            .collect();

        let mut ranked = Vec::with_capacity(heap.len());
        while let Some(candidate) = heap.pop() {
            ranked.push(candidate);
        }
        debug!(budget, candidates = ranked.len(), "Recommendations generated");
        Ok(Recommendations { ranked })
    }
}
