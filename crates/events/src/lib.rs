//! Messages passed between collaborators and editing sessions.
//!
//! A collaborator that replaces an order publishes a message on a bus; the
//! editing session drains its own subscription explicitly. Nothing here
//! subscribes implicitly.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
