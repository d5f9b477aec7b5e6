//! Catalog domain module.
//!
//! This crate contains business rules for sellable publications, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod item;
pub mod publication;

pub use catalog::Catalog;
pub use item::{CatalogItem, Recurring, Sellable};
pub use publication::{PRICE_CEILING, PRICE_FLOOR, Periodical, Publication, Recurrence};
