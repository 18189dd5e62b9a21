//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; constructors are the only place validation happens.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Discount(f64);
///
/// impl ValueObject for Discount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
