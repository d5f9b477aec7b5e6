//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; they are defined entirely by their
/// attribute values and should be treated as immutable. To "change" one,
/// build a new one. Contrast with [`crate::Entity`], where identity persists
/// across attribute changes.
///
/// ```ignore
/// let a = Money::from_cents(500);
/// let b = Money::from_cents(500);
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
