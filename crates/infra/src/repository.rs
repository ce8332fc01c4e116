//! In-memory persistence boundary for orders.

use chrono::Utc;
use tracing::debug;

use orderdesk_core::{DomainError, DomainResult};
use orderdesk_sales::{Order, OrderId, OrderRepository};

use crate::store::{InMemoryStore, KeyedStore};

/// Stores orders by id.
///
/// A new order gets its id and creation time here. Updating an order this
/// store has never seen is rejected with `NotFound`. Orders carrying a line
/// without a product are rejected.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    store: InMemoryStore<OrderId, Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.store.get(&id)
    }

    pub fn len(&self) -> usize {
        self.store.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &Order) -> DomainResult<Order> {
        if order.items().iter().any(|item| item.is_empty()) {
            return Err(DomainError::validation("order contains a line without a product"));
        }

        let mut stored = order.clone();
        match stored.id() {
            Some(id) if !self.store.contains(&id) => return Err(DomainError::not_found()),
            Some(_) => {}
            None => stored.assign_identity(OrderId::generate(), Utc::now()),
        }
        stored.recalculate_total();

        let id = stored.id().ok_or_else(|| DomainError::invariant("order has no id after save"))?;
        self.store.upsert(id, stored.clone());
        debug!(order_id = %id, lines = stored.items().len(), "order stored");
        Ok(stored)
    }
}
