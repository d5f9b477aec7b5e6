//! Orders domain module.
//!
//! This crate contains business rules for order placement and pricing,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Placement publishes an [`OrderPlaced`] event through the
//! notification channel in `bookshop-events`.

pub mod allocator;
pub mod order;
pub mod pricing;

pub use allocator::OrderIdAllocator;
pub use order::{Order, OrderPlaced, PlacementReceipt};
pub use pricing::{SubscriptionTerm, order_total};
