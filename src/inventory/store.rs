//! Car ownership: an arena of slots with a singly linked list threaded through it.
//!
//! Slot `n - 1` holds the car with identifier `n`. Removing a car leaves an
//! empty slot behind, so identifiers stay stable and are never reused. The
//! `next` links run from the most recently added car to the oldest one.

use super::price_index::PriceIndex;
use crate::model::{CarCreate, CarId, CarRecord};
use tracing::{debug, info, warn};

#[derive(Debug)]
struct Slot {
    record: CarRecord,
    next: Option<CarId>,
}

/// Owns every [`CarRecord`] and keeps the [`PriceIndex`] in step with it.
///
/// Adding a car inserts it into both structures; removing a car removes it
/// from both. The index only holds identifiers, so a price-ordered walk always
/// resolves back through this store.
#[derive(Debug)]
pub struct InventoryStore {
    slots: Vec<Option<Slot>>,
    head: Option<CarId>,
    len: usize,
    next_id: u32,
    price_index: PriceIndex,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            len: 0,
            next_id: 1,
            price_index: PriceIndex::new(),
        }
    }

    /// Adds a car at the head of the list and indexes it by price.
    ///
    /// Identifiers are assigned sequentially starting at 1. Always succeeds.
    /// The price must already be validated; `Dealership::add_car` does that.
    pub(crate) fn add_car(&mut self, params: CarCreate) -> CarId {
        debug_assert!(
            params.price.is_finite() && params.price >= 0.0,
            "unvalidated price {}",
            params.price
        );
        let id = CarId(self.next_id);
        self.next_id += 1;

        let record = CarRecord::new(id, params.brand, params.model, params.price, params.popularity);
        self.price_index.insert(record.price, id);
        self.slots.push(Some(Slot {
            record,
            next: self.head,
        }));
        self.head = Some(id);
        self.len += 1;

        info!(%id, size = self.len, "Car added");
        id
    }

    /// Unlinks and returns the car, or `None` if no such car is stocked.
    ///
    /// The list is scanned from the head to find the predecessor link.
    pub(crate) fn remove_car(&mut self, id: CarId) -> Option<CarRecord> {
        let mut prev: Option<CarId> = None;
        let mut cursor = self.head;

        while let Some(current) = cursor {
            let next = self.slot(current)?.next;
            if current == id {
                match prev {
                    None => self.head = next,
                    Some(p) => {
                        if let Some(slot) = self.slot_mut(p) {
                            slot.next = next;
                        }
                    }
                }
                let slot = self.slots.get_mut(Self::index_of(id)?)?.take()?;
                self.len -= 1;
                if !self.price_index.remove(slot.record.price, id) {
                    warn!(%id, "Removed car was missing from the price index");
                }
                info!(%id, size = self.len, "Car removed");
                return Some(slot.record);
            }
            prev = Some(current);
            cursor = next;
        }

        debug!(%id, "Remove of unknown car ignored");
        None
    }

    pub fn find_car(&self, id: CarId) -> Option<&CarRecord> {
        self.slot(id).map(|slot| &slot.record)
    }

    /// Sets the availability flag. Returns `false` if the car does not exist.
    pub(crate) fn set_availability(&mut self, id: CarId, available: bool) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.record.is_available = available;
                true
            }
            None => false,
        }
    }

    /// Walks the list from the most recently added car to the oldest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            cursor: self.head,
        }
    }

    /// Cars in ascending price order, resolved through the price index.
    pub fn by_price(&self) -> impl Iterator<Item = &CarRecord> + '_ {
        self.price_index.in_order().filter_map(move |id| {
            let car = self.find_car(id);
            if car.is_none() {
                warn!(%id, "Price index entry has no matching car");
            }
            car
        })
    }

    pub fn price_index(&self) -> &PriceIndex {
        &self.price_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn index_of(id: CarId) -> Option<usize> {
        (id.0 as usize).checked_sub(1)
    }

    fn slot(&self, id: CarId) -> Option<&Slot> {
        self.slots.get(Self::index_of(id)?)?.as_ref()
    }

    fn slot_mut(&mut self, id: CarId) -> Option<&mut Slot> {
        self.slots.get_mut(Self::index_of(id)?)?.as_mut()
    }
}

/// Iterator over the linked list, head first.
pub struct Iter<'a> {
    store: &'a InventoryStore,
    cursor: Option<CarId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CarRecord;

    fn next(&mut self) -> Option<&'a CarRecord> {
        let slot = self.store.slot(self.cursor?)?;
        self.cursor = slot.next;
        Some(&slot.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(cars: &[(&str, &str, f64, u32)]) -> InventoryStore {
        let mut store = InventoryStore::new();
        for (brand, model, price, popularity) in cars {
            store.add_car(CarCreate::new(*brand, *model, *price, *popularity));
        }
        store
    }

    fn listed(store: &InventoryStore) -> Vec<u32> {
        store.iter().map(|car| car.id.0).collect()
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unvalidated price")]
    fn test_add_rejects_nan_price_in_debug() {
        store_with(&[("Ford", "Focus", f64::NAN, 5)]);
    }

    #[test]
    fn test_add_assigns_sequential_ids_head_first() {
        let store = store_with(&[
            ("Toyota", "Camry", 25000.0, 8),
            ("Honda", "Civic", 22000.0, 9),
            ("BMW", "X5", 55000.0, 6),
        ]);

        assert_eq!(listed(&store), vec![3, 2, 1]);
        assert_eq!(store.len(), 3);

        let camry = store.find_car(CarId(1)).unwrap();
        assert_eq!(camry.brand, "Toyota");
        assert!(camry.is_available);
    }

    #[test]
    fn test_remove_head_middle_and_tail() {
        let mut store = store_with(&[
            ("A", "1", 1.0, 0),
            ("B", "2", 2.0, 0),
            ("C", "3", 3.0, 0),
            ("D", "4", 4.0, 0),
        ]);

        assert_eq!(store.remove_car(CarId(4)).unwrap().brand, "D");
        assert_eq!(listed(&store), vec![3, 2, 1]);

        assert!(store.remove_car(CarId(2)).is_some());
        assert_eq!(listed(&store), vec![3, 1]);

        assert!(store.remove_car(CarId(1)).is_some());
        assert_eq!(listed(&store), vec![3]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_cascades_to_price_index() {
        let mut store = store_with(&[("A", "1", 30.0, 0), ("B", "2", 10.0, 0), ("C", "3", 20.0, 0)]);
        store.remove_car(CarId(3));

        let by_price: Vec<u32> = store.by_price().map(|car| car.id.0).collect();
        assert_eq!(by_price, vec![2, 1]);
        assert_eq!(store.price_index().len(), 2);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = store_with(&[("A", "1", 1.0, 0)]);
        assert!(store.remove_car(CarId(7)).is_none());
        assert!(store.remove_car(CarId(0)).is_none());
        assert!(store.remove_car(CarId(1)).is_some());
        assert!(store.remove_car(CarId(1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = store_with(&[("A", "1", 1.0, 0), ("B", "2", 2.0, 0)]);
        store.remove_car(CarId(2));
        let id = store.add_car(CarCreate::new("C", "3", 3.0, 0));
        assert_eq!(id, CarId(3));
        assert!(store.find_car(CarId(2)).is_none());
    }

    #[test]
    fn test_set_availability() {
        let mut store = store_with(&[("A", "1", 1.0, 0)]);
        assert!(store.set_availability(CarId(1), false));
        assert!(!store.find_car(CarId(1)).unwrap().is_available);
        assert!(!store.set_availability(CarId(5), false));
    }
}
