//! The dealership context object.
//!
//! [`Dealership`] owns one of every component and is the only thing that
//! mutates them. It is created once at startup and handed (by `&mut`) to
//! whoever drives it; in this crate that is the dealership actor.

use crate::catalog::{self, CatalogEntry};
use crate::customer_directory::CustomerDirectory;
use crate::error::DealershipError;
use crate::inventory::InventoryStore;
use crate::model::{
    CarCreate, CarId, CarRecord, CustomerCreate, CustomerId, CustomerRecord, SaleCreate, SaleId,
    SaleRecord, TestDriveRequest,
};
use crate::recommender::{Recommendations, Recommender};
use crate::sale_ledger::SaleLedger;
use crate::test_drive_queue::TestDriveQueue;
use crate::workflow::WorkflowGraph;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::info;

/// `ctime` layout of request and sale stamps, e.g. `Thu Mar 14 16:05:09 2024`.
pub const STAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Current local time in [`STAMP_FORMAT`].
pub fn now_timestamp() -> String {
    chrono::Local::now().format(STAMP_FORMAT).to_string()
}

#[derive(Debug, Default)]
pub struct Dealership {
    inventory: InventoryStore,
    customers: CustomerDirectory,
    test_drives: TestDriveQueue,
    ledger: SaleLedger,
    workflow: WorkflowGraph,
}

impl Dealership {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Inventory ---

    /// Adds a car to the inventory and the price index.
    ///
    /// # Errors
    /// [`DealershipError::InvalidPrice`] for a negative or non-finite price.
    pub fn add_car(&mut self, params: CarCreate) -> Result<CarId, DealershipError> {
        if !(params.price.is_finite() && params.price >= 0.0) {
            return Err(DealershipError::InvalidPrice(params.price));
        }
        Ok(self.inventory.add_car(params))
    }

    pub fn remove_car(&mut self, id: CarId) -> Option<CarRecord> {
        self.inventory.remove_car(id)
    }

    pub fn find_car(&self, id: CarId) -> Option<&CarRecord> {
        self.inventory.find_car(id)
    }

    /// Cars from most recently added to oldest.
    pub fn cars(&self) -> impl Iterator<Item = &CarRecord> {
        self.inventory.iter()
    }

    /// Cars in ascending price order.
    pub fn cars_by_price(&self) -> impl Iterator<Item = &CarRecord> {
        self.inventory.by_price()
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    // --- Customers ---

    pub fn register_customer(&mut self, params: CustomerCreate) -> CustomerId {
        self.customers.register(params)
    }

    pub fn find_customer(&self, id: CustomerId) -> Option<&CustomerRecord> {
        self.customers.find(id)
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    // --- Test drives ---

    pub fn request_test_drive(&mut self, customer_id: CustomerId, car_id: CarId, requested_at: impl Into<String>) {
        self.test_drives.enqueue(customer_id, car_id, requested_at);
    }

    pub fn process_next_test_drive(&mut self) -> Option<TestDriveRequest> {
        self.test_drives.dequeue_next()
    }

    pub fn test_drives(&self) -> &TestDriveQueue {
        &self.test_drives
    }

    // --- Sales ---

    pub fn record_sale(&mut self, params: SaleCreate) -> SaleId {
        self.ledger.record_sale(&mut self.inventory, params)
    }

    pub fn undo_last_sale(&mut self) -> Option<SaleRecord> {
        self.ledger.undo_last(&mut self.inventory)
    }

    pub fn ledger(&self) -> &SaleLedger {
        &self.ledger
    }

    // --- Workflow & recommendations ---

    pub fn workflow(&self) -> &WorkflowGraph {
        &self.workflow
    }

    pub fn recommend(&self, budget: f64) -> Result<Recommendations, DealershipError> {
        Recommender::generate(&self.inventory, budget)
    }

    // --- Bulk data ---

    /// Adds every catalog entry with a random popularity in `0..=9`.
    pub fn load_catalog<R: Rng + ?Sized>(
        &mut self,
        entries: Vec<CatalogEntry>,
        rng: &mut R,
    ) -> Result<Vec<CarId>, DealershipError> {
        let ids = entries
            .into_iter()
            .map(|entry| {
                self.add_car(CarCreate {
                    brand: entry.brand,
                    model: entry.model,
                    price: entry.price,
                    popularity: catalog::random_popularity(rng),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!(loaded = ids.len(), size = self.inventory.len(), "Catalog loaded");
        Ok(ids)
    }

    /// Demo data: five cars, three customers, two queued test drives.
    pub fn seed_sample_data(&mut self) {
        let cars = [
            ("Toyota", "Camry", 25000.0, 8),
            ("Honda", "Civic", 22000.0, 9),
            ("BMW", "X5", 55000.0, 6),
            ("Mercedes", "C-Class", 45000.0, 7),
            ("Ford", "Focus", 18000.0, 5),
        ];
        for (brand, model, price, popularity) in cars {
            self.inventory.add_car(CarCreate::new(brand, model, price, popularity));
        }

        let customers = [
            ("John Doe", "123-456-7890", "john@email.com", 30000.0),
            ("Jane Smith", "098-765-4321", "jane@email.com", 50000.0),
            ("Bob Johnson", "555-123-4567", "bob@email.com", 20000.0),
        ];
        for (name, phone, email, budget) in customers {
            self.customers.register(CustomerCreate::new(name, phone, email, budget));
        }

        let now = now_timestamp();
        self.test_drives.enqueue(CustomerId(1), CarId(1), now.clone());
        self.test_drives.enqueue(CustomerId(2), CarId(3), now);

        info!(
            cars = self.inventory.len(),
            customers = self.customers.len(),
            test_drives = self.test_drives.size(),
            "Sample data added"
        );
    }

    /// Confirms every stocked car is in the price index and nothing else is.
    ///
    /// # Errors
    /// [`DealershipError::Inconsistent`] describing the first disagreement found.
    pub fn check_consistency(&self) -> Result<(), DealershipError> {
        let stocked: BTreeSet<CarId> = self.inventory.iter().map(|car| car.id).collect();
        let indexed: BTreeSet<CarId> = self.inventory.price_index().in_order().collect();

        if stocked.len() != self.inventory.len() {
            return Err(DealershipError::Inconsistent(format!(
                "list reaches {} cars but {} are stored",
                stocked.len(),
                self.inventory.len()
            )));
        }
        if let Some(id) = stocked.difference(&indexed).next() {
            return Err(DealershipError::Inconsistent(format!("{id} is not price indexed")));
        }
        if let Some(id) = indexed.difference(&stocked).next() {
            return Err(DealershipError::Inconsistent(format!("{id} is indexed but not stocked")));
        }
        if self.inventory.price_index().len() != stocked.len() {
            return Err(DealershipError::Inconsistent(
                "price index holds duplicate entries".to_string(),
            ));
        }
        Ok(())
    }
}
