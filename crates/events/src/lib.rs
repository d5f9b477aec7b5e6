//! Notification channel for domain events (pub/sub mechanics only).
//!
//! Zero or more observers subscribe to a bus; publishing delivers each
//! message to every live subscriber, synchronously, in registration order.
//! The bus distributes — it does not store.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
