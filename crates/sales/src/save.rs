//! Save workflow: strip the blank row, persist, re-arm.
//!
//! The blank row is put back by a guard that runs on every exit path,
//! including unwinding out of the persistence call.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tracing::{info, warn};

use orderdesk_core::{DomainError, DomainResult};

use crate::config::SessionConfig;
use crate::notify::Notifier;
use crate::order::{Order, OrderId};
use crate::pricing::format_amount;
use crate::validation::validate_for_save;

/// Persistence boundary.
///
/// Returns the stored order (with identity and server-assigned fields) or a
/// business rejection carrying a human-readable message.
pub trait OrderRepository: Send + Sync {
    fn save(&self, order: &Order) -> DomainResult<Order>;
}

impl<R> OrderRepository for Arc<R>
where
    R: OrderRepository + ?Sized,
{
    fn save(&self, order: &Order) -> DomainResult<Order> {
        (**self).save(order)
    }
}

/// Result of one save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { id: OrderId },
    Rejected { reason: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

/// Appends the blank row back when dropped.
struct Rearm<'a> {
    order: &'a mut Order,
    quantity: i64,
}

impl<'a> Rearm<'a> {
    fn new(order: &'a mut Order, quantity: i64) -> Self {
        Self { order, quantity }
    }
}

impl Deref for Rearm<'_> {
    type Target = Order;

    fn deref(&self) -> &Order {
        self.order
    }
}

impl DerefMut for Rearm<'_> {
    fn deref_mut(&mut self) -> &mut Order {
        self.order
    }
}

impl Drop for Rearm<'_> {
    fn drop(&mut self) {
        if self.order.editable_row().is_none() {
            self.order.append_empty_line_with_quantity(self.quantity);
        }
        self.order.recalculate_total();
    }
}

/// Save `order` through `repository`.
///
/// On success `order` is replaced by the persisted value and an info
/// notification is sent. On rejection `order` keeps its pre-save content and
/// the rejection message is sent as an error. Either way the order ends with
/// exactly one blank row.
pub fn save_order<R, N>(
    order: &mut Order,
    repository: &R,
    notifier: &N,
    config: &SessionConfig,
) -> SaveOutcome
where
    R: OrderRepository + ?Sized,
    N: Notifier + ?Sized,
{
    let mut order = Rearm::new(order, config.blank_row_quantity());
    order.remove_empty_line();

    let attempt = validate_for_save(&order)
        .into_result()
        .and_then(|()| repository.save(&order))
        .and_then(|saved| match saved.id() {
            Some(id) => Ok((id, saved)),
            None => Err(DomainError::invariant("persisted order carries no identity")),
        });

    match attempt {
        Ok((id, saved)) => {
            *order = saved;
            info!(order_id = %id, total = %format_amount(order.total()), "order saved");
            notifier.info(&config.messages.saved);
            SaveOutcome::Saved { id }
        }
        Err(err) => {
            let reason = err.reason();
            warn!(order_id = ?order.id(), error = %err, "order save rejected");
            notifier.error(&reason);
            SaveOutcome::Rejected { reason }
        }
    }
}
