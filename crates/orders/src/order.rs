use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookshop_catalog::{Recurring, Sellable};
use bookshop_core::{CatalogCode, DomainError, DomainResult, Entity, Money, OrderId};
use bookshop_events::{Event, EventBus};

use crate::allocator::OrderIdAllocator;
use crate::pricing::{SubscriptionTerm, order_total};

/// Result of placing an order: catalog code, quantity, computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReceipt {
    pub code: CatalogCode,
    pub quantity: u32,
    pub total: Money,
}

/// Event: an order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub code: CatalogCode,
    pub quantity: u32,
    pub total: Money,
    /// Human-readable summary for display/logging subscribers, which own
    /// any locale-specific rendering.
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
}

impl Event for OrderPlaced {
    fn event_type(&self) -> &'static str {
        "orders.order.placed"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// An order for a quantity of one catalog item, optionally as a recurring
/// subscription.
///
/// The item is shared with the catalog (`Arc`); the order references it
/// without owning its lifecycle. The identifier comes from the injected
/// allocator at construction and is never reassigned.
#[derive(Debug, Clone)]
pub struct Order<T: Sellable> {
    id: OrderId,
    item: Arc<T>,
    placed_at: DateTime<Utc>,
    quantity: u32,
    term: Option<SubscriptionTerm>,
}

impl<T: Sellable> Order<T> {
    /// One-off purchase of `quantity` units.
    pub fn new(ids: &OrderIdAllocator, item: Arc<T>, quantity: u32) -> DomainResult<Self> {
        Self::build(ids, item, quantity, None)
    }

    fn build(
        ids: &OrderIdAllocator,
        item: Arc<T>,
        quantity: u32,
        term: Option<SubscriptionTerm>,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        Ok(Self {
            id: ids.next(),
            item,
            placed_at: Utc::now(),
            quantity,
            term,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn item(&self) -> &Arc<T> {
        &self.item
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn term(&self) -> Option<&SubscriptionTerm> {
        self.term.as_ref()
    }

    /// Total charge for this order.
    pub fn total(&self) -> Money {
        order_total(self.item.unit_price(), self.quantity, self.term.as_ref())
    }

    /// Finalize and announce the order.
    ///
    /// Computes the total, publishes an [`OrderPlaced`] event to every
    /// current subscriber (synchronously, in subscription order, before this
    /// call returns), and returns the receipt whether or not anyone is
    /// listening. Publishing is fire-and-forget: a failed publish is logged
    /// and never blocks the order.
    ///
    /// Calling `place` again recomputes the same total and notifies again
    /// under the same identifier; the id is never reassigned.
    pub fn place<B>(&self, channel: &B) -> PlacementReceipt
    where
        B: EventBus<OrderPlaced>,
    {
        let total = self.total();
        let receipt = PlacementReceipt {
            code: self.item.code().clone(),
            quantity: self.quantity,
            total,
        };

        tracing::info!(order_id = %self.id, code = %receipt.code, %total, "order placed");

        let event = OrderPlaced {
            order_id: self.id,
            code: receipt.code.clone(),
            quantity: self.quantity,
            total,
            summary: self.summary(total),
            occurred_at: Utc::now(),
        };
        if let Err(err) = channel.publish(event) {
            tracing::warn!(?err, order_id = %self.id, "order notification dropped");
        }

        receipt
    }

    fn summary(&self, total: Money) -> String {
        match &self.term {
            Some(term) => format!(
                "Order #{}: subscription to \"{}\" ({}), {} months, {} copies per delivery. Total: {}.",
                self.id,
                self.item.title(),
                term.recurrence(),
                term.months(),
                self.quantity,
                total,
            ),
            None => format!(
                "Order #{}: \"{}\" (code {}), quantity {}. Total: {}.",
                self.id,
                self.item.title(),
                self.item.code(),
                self.quantity,
                total,
            ),
        }
    }
}

impl<T: Recurring> Order<T> {
    /// Subscription order: `quantity` units per delivery, for `months`
    /// months.
    ///
    /// Only available for items that ship on a schedule; a subscription on a
    /// plain publication cannot be expressed.
    pub fn subscription(
        ids: &OrderIdAllocator,
        item: Arc<T>,
        quantity: u32,
        months: u32,
    ) -> DomainResult<Self> {
        let term = SubscriptionTerm::new(months, item.recurrence())?;
        Self::build(ids, item, quantity, Some(term))
    }
}

impl<T: Sellable> Entity for Order<T> {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
