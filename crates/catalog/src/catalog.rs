//! Ordered catalog collection.

use std::sync::Arc;

use crate::item::CatalogItem;
use crate::publication::Periodical;

/// Ordered collection of catalog entries.
///
/// Insertion order is significant: the selection menu numbers items by
/// position. Entries are shared with outstanding orders via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: CatalogItem) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Entries eligible for subscription orders, with their catalog
    /// positions (subscription selection lists only periodicals).
    pub fn periodicals(&self) -> impl Iterator<Item = (usize, &Arc<Periodical>)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.as_periodical().map(|p| (index, p)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
