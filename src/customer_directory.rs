//! Keyed customer lookup.

use crate::model::{CustomerCreate, CustomerId, CustomerRecord};
use std::collections::HashMap;
use tracing::info;

#[derive(Debug)]
pub struct CustomerDirectory {
    customers: HashMap<CustomerId, CustomerRecord>,
    next_id: u32,
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
            next_id: 1,
        }
    }

    /// Registers a customer under the next sequential identifier.
    pub fn register(&mut self, params: CustomerCreate) -> CustomerId {
        let id = CustomerId(self.next_id);
        self.next_id += 1;
        self.customers.insert(
            id,
            CustomerRecord {
                id,
                name: params.name,
                phone: params.phone,
                email: params.email,
                budget: params.budget,
            },
        );
        info!(%id, size = self.customers.len(), "Customer registered");
        id
    }

    pub fn find(&self, id: CustomerId) -> Option<&CustomerRecord> {
        self.customers.get(&id)
    }

    /// All customers, ordered by identifier.
    pub fn list(&self) -> Vec<&CustomerRecord> {
        let mut all: Vec<_> = self.customers.values().collect();
        all.sort_by_key(|customer| customer.id);
        all
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_find() {
        let mut directory = CustomerDirectory::new();
        let john = directory.register(CustomerCreate::new("John Doe", "123-456-7890", "john@email.com", 30000.0));
        let jane = directory.register(CustomerCreate::new("Jane Smith", "098-765-4321", "jane@email.com", 50000.0));

        assert_eq!(john, CustomerId(1));
        assert_eq!(jane, CustomerId(2));
        assert_eq!(directory.find(jane).unwrap().budget, 50000.0);
        assert!(directory.find(CustomerId(3)).is_none());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut directory = CustomerDirectory::new();
        for name in ["a", "b", "c", "d", "e"] {
            directory.register(CustomerCreate::new(name, "", "", 1.0));
        }
        let ids: Vec<u32> = directory.list().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(directory.len(), 5);
    }
}
