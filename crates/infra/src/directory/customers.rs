use orderdesk_parties::{Customer, CustomerDirectory, CustomerId};

use crate::directory::name_starts_with;
use crate::store::{InMemoryStore, KeyedStore};

#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    store: InMemoryStore<CustomerId, Customer>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let directory = Self::new();
        for customer in customers {
            directory.upsert(customer);
        }
        directory
    }

    pub fn upsert(&self, customer: Customer) {
        self.store.upsert(customer.id_typed(), customer);
    }

    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.store.get(&id)
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn search_by_name(&self, prefix: &str) -> Vec<Customer> {
        let mut found: Vec<Customer> = self
            .store
            .list()
            .into_iter()
            .filter(|c| name_starts_with(c.name(), prefix))
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        found
    }
}
