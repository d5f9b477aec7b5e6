//! Total-price computation.

use serde::{Deserialize, Serialize};

use bookshop_catalog::Recurrence;
use bookshop_core::{DomainError, DomainResult, Money, ValueObject};

/// Length and cadence of a subscription.
///
/// The recurrence is captured from the item at construction, which keeps the
/// total computation independent of the item type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTerm {
    months: u32,
    recurrence: Recurrence,
}

impl SubscriptionTerm {
    pub fn new(months: u32, recurrence: Recurrence) -> DomainResult<Self> {
        if months == 0 {
            return Err(DomainError::validation(
                "subscription must run for at least one month",
            ));
        }
        Ok(Self { months, recurrence })
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    /// Total deliveries over the subscription span.
    pub fn deliveries(&self) -> u64 {
        u64::from(self.months) * u64::from(self.recurrence.deliveries_per_month())
    }
}

impl ValueObject for SubscriptionTerm {}

/// Compute the charge for one order.
///
/// `quantity` means units per delivery when a term is present, so the term
/// multiplies the base price by the total number of deliveries over its
/// span — not by a flat per-month charge. Without a term the charge is the
/// plain `unit_price * quantity`.
///
/// Trusts `quantity >= 1`; both order constructors enforce it.
pub fn order_total(unit_price: Money, quantity: u32, term: Option<&SubscriptionTerm>) -> Money {
    let base = unit_price.scale(u64::from(quantity));
    match term {
        Some(term) => base.scale(term.deliveries()),
        None => base,
    }
}
