use serde::{Deserialize, Serialize};

use bookshop_core::{CatalogCode, DomainError, DomainResult, Entity, Money, ValueObject};

/// Lowest unit price the shop lists a publication at.
pub const PRICE_FLOOR: Money = Money::from_cents(500);
/// Highest unit price the shop lists a publication at.
pub const PRICE_CEILING: Money = Money::from_cents(5_000);

/// How often a periodical ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Deliveries over one subscription month.
    pub fn deliveries_per_month(self) -> u32 {
        match self {
            Recurrence::Daily => 30,
            Recurrence::Weekly => 4,
            Recurrence::Monthly => 1,
        }
    }
}

impl ValueObject for Recurrence {}

impl core::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

/// A sellable catalog entry.
///
/// The unit price is clamped to [`PRICE_FLOOR`, `PRICE_CEILING`] on every
/// assignment: construction and reassignment alike. Out-of-range prices are
/// adjusted silently, never rejected — shop policy, distinct from the
/// reject-and-re-prompt validation the input collaborator applies to the
/// text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    code: CatalogCode,
    title: String,
    publisher: String,
    unit_price: Money,
}

impl Publication {
    pub fn new(
        code: CatalogCode,
        title: impl Into<String>,
        publisher: impl Into<String>,
        unit_price: Money,
    ) -> DomainResult<Self> {
        let title = title.into();
        let publisher = publisher.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if publisher.trim().is_empty() {
            return Err(DomainError::validation("publisher cannot be empty"));
        }

        Ok(Self {
            code,
            title,
            publisher,
            unit_price: unit_price.clamp(PRICE_FLOOR, PRICE_CEILING),
        })
    }

    pub fn code(&self) -> &CatalogCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Reassign the unit price. The clamp applies here as well.
    pub fn set_unit_price(&mut self, price: Money) {
        self.unit_price = price.clamp(PRICE_FLOOR, PRICE_CEILING);
    }
}

impl Entity for Publication {
    type Id = CatalogCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// A publication that ships on a recurring schedule.
///
/// All [`Publication`] invariants apply; the recurrence is required and has
/// no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodical {
    publication: Publication,
    recurrence: Recurrence,
}

impl Periodical {
    pub fn new(publication: Publication, recurrence: Recurrence) -> Self {
        Self {
            publication,
            recurrence,
        }
    }

    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    pub fn deliveries_per_month(&self) -> u32 {
        self.recurrence.deliveries_per_month()
    }

    pub fn set_unit_price(&mut self, price: Money) {
        self.publication.set_unit_price(price);
    }
}

impl Entity for Periodical {
    type Id = CatalogCode;

    fn id(&self) -> &Self::Id {
        self.publication.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CatalogCode {
        CatalogCode::new(s).unwrap()
    }

    #[test]
    fn publication_keeps_in_range_price() {
        let book = Publication::new(
            code("978-90-01-00001"),
            "Systems Basics",
            "NorthPress",
            Money::from_cents(3_995),
        )
        .unwrap();
        assert_eq!(book.unit_price(), Money::from_cents(3_995));
    }

    #[test]
    fn publication_clamps_price_above_ceiling() {
        let book = Publication::new(
            code("978-90-01-00002"),
            "Patterns in Practice",
            "SouthHouse",
            Money::from_cents(5_500),
        )
        .unwrap();
        assert_eq!(book.unit_price(), PRICE_CEILING);
    }

    #[test]
    fn publication_clamps_price_below_floor() {
        let book = Publication::new(
            code("977-12-34-00002"),
            "Tech Monthly",
            "BitHouse",
            Money::from_cents(300),
        )
        .unwrap();
        assert_eq!(book.unit_price(), PRICE_FLOOR);
    }

    #[test]
    fn clamp_applies_on_every_reassignment() {
        let mut book = Publication::new(
            code("978-90-01-00001"),
            "Systems Basics",
            "NorthPress",
            Money::from_cents(2_000),
        )
        .unwrap();

        book.set_unit_price(Money::from_cents(9_999));
        assert_eq!(book.unit_price(), PRICE_CEILING);

        book.set_unit_price(Money::from_cents(1));
        assert_eq!(book.unit_price(), PRICE_FLOOR);

        book.set_unit_price(Money::from_cents(1_250));
        assert_eq!(book.unit_price(), Money::from_cents(1_250));
    }

    #[test]
    fn publication_rejects_blank_title() {
        let err = Publication::new(
            code("978-90-01-00001"),
            "   ",
            "NorthPress",
            Money::from_cents(1_000),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn publication_rejects_blank_publisher() {
        let err = Publication::new(
            code("978-90-01-00001"),
            "Systems Basics",
            "",
            Money::from_cents(1_000),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deliveries_per_month_matches_schedule() {
        assert_eq!(Recurrence::Daily.deliveries_per_month(), 30);
        assert_eq!(Recurrence::Weekly.deliveries_per_month(), 4);
        assert_eq!(Recurrence::Monthly.deliveries_per_month(), 1);
    }

    #[test]
    fn periodical_inherits_publication_invariants() {
        let weekly = Periodical::new(
            Publication::new(
                code("977-12-34-00001"),
                "Dev Weekly",
                "CodePress",
                Money::from_cents(100),
            )
            .unwrap(),
            Recurrence::Weekly,
        );
        assert_eq!(weekly.publication().unit_price(), PRICE_FLOOR);
        assert_eq!(weekly.deliveries_per_month(), 4);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any constructed publication holds a price inside
            /// the listing range, and in-range prices survive unchanged.
            #[test]
            fn stored_price_always_in_range(cents in 0u64..100_000) {
                let book = Publication::new(
                    CatalogCode::new("978-90-01-00001").unwrap(),
                    "Systems Basics",
                    "NorthPress",
                    Money::from_cents(cents),
                )
                .unwrap();

                prop_assert!(book.unit_price() >= PRICE_FLOOR);
                prop_assert!(book.unit_price() <= PRICE_CEILING);
                if (500..=5_000).contains(&cents) {
                    prop_assert_eq!(book.unit_price().cents(), cents);
                }
            }

            /// Property: reassignment clamps exactly like construction.
            #[test]
            fn reassignment_clamps_like_construction(
                initial in 0u64..100_000,
                reassigned in 0u64..100_000,
            ) {
                let mut book = Publication::new(
                    CatalogCode::new("978-90-01-00001").unwrap(),
                    "Systems Basics",
                    "NorthPress",
                    Money::from_cents(initial),
                )
                .unwrap();
                book.set_unit_price(Money::from_cents(reassigned));

                let fresh = Publication::new(
                    CatalogCode::new("978-90-01-00001").unwrap(),
                    "Systems Basics",
                    "NorthPress",
                    Money::from_cents(reassigned),
                )
                .unwrap();
                prop_assert_eq!(book.unit_price(), fresh.unit_price());
            }
        }
    }
}
