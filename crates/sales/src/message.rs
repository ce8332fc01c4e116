//! Messages exchanged with collaborators that replace the edited order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_events::Event;

use crate::order::Order;

/// Another collaborator produced a new version of an order (e.g. after issuing
/// or cancelling it). Editing sessions load it via `receive_changes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChanged {
    pub order: Order,
    pub occurred_at: DateTime<Utc>,
}

impl OrderChanged {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for OrderChanged {
    fn event_type(&self) -> &'static str {
        "sales.order.changed"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
