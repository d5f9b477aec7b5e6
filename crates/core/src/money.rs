//! Money as an amount in minor currency units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Monetary amount in minor units (cents).
///
/// The shop trades in a single currency; locale/currency formatting is the
/// display collaborator's job, so `Money` carries no currency dimension and
/// its `Display` is the plain `units.cc` form. Cent arithmetic keeps catalog
/// prices and order totals exact.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Multiply by a unitless factor (quantities, delivery counts).
    /// Saturates instead of wrapping on overflow.
    pub const fn scale(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Restrict the amount to the inclusive range [`floor`, `ceiling`].
    pub const fn clamp(self, floor: Money, ceiling: Money) -> Money {
        if self.0 < floor.0 {
            floor
        } else if self.0 > ceiling.0 {
            ceiling
        } else {
            self
        }
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_units_dot_cents() {
        assert_eq!(Money::from_cents(3995).to_string(), "39.95");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn scale_multiplies_cents() {
        assert_eq!(Money::from_cents(3995).scale(3), Money::from_cents(11985));
        assert_eq!(Money::from_cents(600).scale(24), Money::from_cents(14400));
    }

    #[test]
    fn scale_saturates_on_overflow() {
        assert_eq!(Money::from_cents(u64::MAX).scale(2).cents(), u64::MAX);
    }

    #[test]
    fn clamp_respects_bounds() {
        let floor = Money::from_cents(500);
        let ceiling = Money::from_cents(5_000);
        assert_eq!(Money::from_cents(300).clamp(floor, ceiling), floor);
        assert_eq!(Money::from_cents(5_500).clamp(floor, ceiling), ceiling);
        assert_eq!(
            Money::from_cents(3_995).clamp(floor, ceiling),
            Money::from_cents(3_995)
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: clamp output always lies inside the range, and
            /// in-range input passes through unchanged.
            #[test]
            fn clamp_stays_in_range(cents in 0u64..20_000) {
                let floor = Money::from_cents(500);
                let ceiling = Money::from_cents(5_000);
                let clamped = Money::from_cents(cents).clamp(floor, ceiling);

                prop_assert!(clamped >= floor);
                prop_assert!(clamped <= ceiling);
                if (500..=5_000).contains(&cents) {
                    prop_assert_eq!(clamped.cents(), cents);
                }
            }
        }
    }
}
