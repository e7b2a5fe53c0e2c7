//! LIFO ledger of completed sales with single-step undo.
//!
//! Recording a sale is the only `Available -> Sold` transition for a car and
//! undoing it is the only `Sold -> Available` transition the ledger drives.
//! Both take the inventory by `&mut`, so the push/pop and the availability
//! flip happen in the same call and cannot be observed apart.

use crate::inventory::InventoryStore;
use crate::model::{SaleCreate, SaleId, SaleRecord};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct SaleLedger {
    sales: Vec<SaleRecord>,
    next_id: u32,
}

impl Default for SaleLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SaleLedger {
    pub fn new() -> Self {
        Self {
            sales: Vec::new(),
            next_id: 1,
        }
    }

    /// Pushes a sale and marks its car as sold.
    ///
    /// A sale naming a car that is not stocked is still recorded; the ledger
    /// mirrors the order log, which has no notion of inventory.
    pub fn record_sale(&mut self, inventory: &mut InventoryStore, params: SaleCreate) -> SaleId {
        let id = SaleId(self.next_id);
        self.next_id += 1;

        let car_id = params.car_id;
        self.sales.push(SaleRecord {
            id,
            customer_id: params.customer_id,
            car_id,
            amount: params.amount,
            sold_at: params.sold_at,
        });

        if !inventory.set_availability(car_id, false) {
            warn!(sale_id = %id, %car_id, "Sale recorded for a car not in inventory");
        }
        info!(sale_id = %id, %car_id, size = self.sales.len(), "Sale recorded");
        id
    }

    /// Pops the most recent sale and makes its car available again, unless an
    /// older sale of the same car is still on the ledger.
    ///
    /// Returns `None`, changing nothing, when there are no sales to undo.
    /// Repeated calls drain the ledger one sale at a time.
    pub fn undo_last(&mut self, inventory: &mut InventoryStore) -> Option<SaleRecord> {
        let Some(sale) = self.sales.pop() else {
            debug!("No sales to undo");
            return None;
        };

        if self.sales.iter().any(|s| s.car_id == sale.car_id) {
            debug!(sale_id = %sale.id, car_id = %sale.car_id, "Car still sold by an earlier sale");
        } else if !inventory.set_availability(sale.car_id, true) {
            warn!(sale_id = %sale.id, car_id = %sale.car_id, "Undone sale refers to a car not in inventory");
        }
        info!(sale_id = %sale.id, car_id = %sale.car_id, size = self.sales.len(), "Sale undone");
        Some(sale)
    }

    pub fn last(&self) -> Option<&SaleRecord> {
        self.sales.last()
    }

    /// Sales from most recent to oldest, i.e. in undo order.
    pub fn history(&self) -> impl Iterator<Item = &SaleRecord> {
        self.sales.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CarCreate, CarId, CustomerId};

    fn sale(customer: u32, car: u32, amount: f64, at: &str) -> SaleCreate {
        SaleCreate {
            customer_id: CustomerId(customer),
            car_id: CarId(car),
            amount,
            sold_at: at.to_string(),
        }
    }

    fn inventory() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add_car(CarCreate::new("Toyota", "Camry", 25000.0, 8));
        store.add_car(CarCreate::new("Honda", "Civic", 22000.0, 9));
        store
    }

    #[test]
    fn test_record_then_undo_restores_availability() {
        let mut store = inventory();
        let mut ledger = SaleLedger::new();

        let id = ledger.record_sale(&mut store, sale(1, 1, 25000.0, "t1"));
        assert_eq!(id, SaleId(1));
        assert!(!store.find_car(CarId(1)).unwrap().is_available);

        let undone = ledger.undo_last(&mut store).unwrap();
        assert_eq!(undone.id, id);
        assert!(store.find_car(CarId(1)).unwrap().is_available);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_undo_is_strictly_lifo() {
        let mut store = inventory();
        let mut ledger = SaleLedger::new();
        ledger.record_sale(&mut store, sale(1, 1, 25000.0, "t1"));
        ledger.record_sale(&mut store, sale(2, 2, 22000.0, "t2"));

        let history: Vec<u32> = ledger.history().map(|s| s.id.0).collect();
        assert_eq!(history, vec![2, 1]);

        assert_eq!(ledger.undo_last(&mut store).unwrap().car_id, CarId(2));
        assert!(store.find_car(CarId(2)).unwrap().is_available);
        assert!(!store.find_car(CarId(1)).unwrap().is_available);

        assert_eq!(ledger.undo_last(&mut store).unwrap().car_id, CarId(1));
        assert!(ledger.undo_last(&mut store).is_none());
    }

    #[test]
    fn test_car_stays_sold_while_an_earlier_sale_remains() {
        let mut store = inventory();
        let mut ledger = SaleLedger::new();
        ledger.record_sale(&mut store, sale(1, 1, 25000.0, "t1"));
        ledger.record_sale(&mut store, sale(2, 1, 24000.0, "t2"));

        assert_eq!(ledger.undo_last(&mut store).unwrap().id, SaleId(2));
        assert!(!store.find_car(CarId(1)).unwrap().is_available);

        assert_eq!(ledger.undo_last(&mut store).unwrap().id, SaleId(1));
        assert!(store.find_car(CarId(1)).unwrap().is_available);
    }

    #[test]
    fn test_sale_for_unknown_car_is_still_recorded() {
        let mut store = inventory();
        let mut ledger = SaleLedger::new();
        ledger.record_sale(&mut store, sale(1, 42, 1.0, "t1"));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.last().unwrap().car_id, CarId(42));
        assert!(store.iter().all(|car| car.is_available));
        assert!(ledger.undo_last(&mut store).is_some());
    }

    #[test]
    fn test_sale_ids_keep_counting_after_undo() {
        let mut store = inventory();
        let mut ledger = SaleLedger::new();
        ledger.record_sale(&mut store, sale(1, 1, 1.0, "t1"));
        ledger.undo_last(&mut store);
        assert_eq!(ledger.record_sale(&mut store, sale(1, 1, 1.0, "t2")), SaleId(2));
    }
}
