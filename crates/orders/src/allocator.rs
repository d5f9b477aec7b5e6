//! Order identifier allocation.

use std::sync::atomic::{AtomicU64, Ordering};

use bookshop_core::OrderId;

/// Hands out order identifiers: 1, 2, 3, … strictly increasing, never
/// reused within the process lifetime.
///
/// The allocator is passed explicitly into order constructors rather than
/// living in global state, so tests can run independent sequences. The
/// counter is atomic; uniqueness holds even if order construction ever
/// moves off a single thread. Under the sequential use this crate assumes,
/// `n` calls return exactly `1..=n`.
#[derive(Debug, Default)]
pub struct OrderIdAllocator {
    last: AtomicU64,
}

impl OrderIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier in the sequence. The first call returns 1.
    pub fn next(&self) -> OrderId {
        OrderId::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
