//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two of them with the same attribute
/// values are equal and interchangeable. They are immutable; "changing" one
/// means building a new value.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Money::from_cents(2_500)` equals any other 25.00
/// - **Entity**: two products with code `P001` are the same product even if
///   their stock differs
///
/// ```ignore
/// let a = Money::from_cents(2_500);
/// let b = Money::from_units(25);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
