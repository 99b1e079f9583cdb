//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Business details, client details, line items and totals have no identity
/// of their own: two line items with the same description, quantity and price
/// are the same line item. They are replaced wholesale on commit, never
/// patched field by field.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
