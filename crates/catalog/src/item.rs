//! Item capabilities and the catalog entry sum type.

use std::sync::Arc;

use bookshop_core::{CatalogCode, Money};

use crate::publication::{Periodical, Publication, Recurrence};

/// Capability: anything the shop can sell a quantity of.
pub trait Sellable {
    fn code(&self) -> &CatalogCode;
    fn title(&self) -> &str;
    fn publisher(&self) -> &str;
    fn unit_price(&self) -> Money;
}

impl Sellable for Publication {
    fn code(&self) -> &CatalogCode {
        self.code()
    }

    fn title(&self) -> &str {
        self.title()
    }

    fn publisher(&self) -> &str {
        self.publisher()
    }

    fn unit_price(&self) -> Money {
        self.unit_price()
    }
}

impl Sellable for Periodical {
    fn code(&self) -> &CatalogCode {
        self.publication().code()
    }

    fn title(&self) -> &str {
        self.publication().title()
    }

    fn publisher(&self) -> &str {
        self.publication().publisher()
    }

    fn unit_price(&self) -> Money {
        self.publication().unit_price()
    }
}

/// Capability: a sellable item that ships on a schedule and can therefore
/// carry a subscription. Subscription order construction is bounded by this
/// trait, so "subscription on a plain book" cannot be expressed.
pub trait Recurring: Sellable {
    fn recurrence(&self) -> Recurrence;

    fn deliveries_per_month(&self) -> u32 {
        self.recurrence().deliveries_per_month()
    }
}

impl Recurring for Periodical {
    fn recurrence(&self) -> Recurrence {
        self.recurrence()
    }
}

/// One entry in the catalog.
///
/// Items are shared (`Arc`) between the catalog and any outstanding orders;
/// an order references the item without owning its lifecycle.
#[derive(Debug, Clone)]
pub enum CatalogItem {
    Book(Arc<Publication>),
    Periodical(Arc<Periodical>),
}

impl CatalogItem {
    pub fn book(publication: Publication) -> Self {
        Self::Book(Arc::new(publication))
    }

    pub fn periodical(periodical: Periodical) -> Self {
        Self::Periodical(Arc::new(periodical))
    }

    pub fn code(&self) -> &CatalogCode {
        match self {
            Self::Book(p) => p.code(),
            Self::Periodical(p) => p.publication().code(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Book(p) => p.title(),
            Self::Periodical(p) => p.publication().title(),
        }
    }

    pub fn unit_price(&self) -> Money {
        match self {
            Self::Book(p) => p.unit_price(),
            Self::Periodical(p) => p.publication().unit_price(),
        }
    }

    /// Capability query: `Some` when this entry can take a subscription.
    pub fn as_periodical(&self) -> Option<&Arc<Periodical>> {
        match self {
            Self::Periodical(p) => Some(p),
            Self::Book(_) => None,
        }
    }
}
