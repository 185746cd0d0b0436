//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two with the
/// same attribute values are the same thing. `Amount` is the canonical case
/// here: two amounts of the same number of cents are interchangeable, there
/// is no "which one" to ask about. To "modify" a value object, build a new
/// one.
///
/// The bounds keep value objects cheap to pass around and easy to assert on:
///
/// - **Clone**: values copy like primitives;
/// - **PartialEq**: compared by attribute values;
/// - **Debug**: printable in logs and test failures.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
