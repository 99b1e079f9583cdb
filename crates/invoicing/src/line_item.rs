use serde::{Deserialize, Serialize};

use apex_core::ValueObject;

/// One billable line: description × quantity × unit price.
///
/// Line items have no id. They are addressed by their position in the
/// draft, which is also the order they are printed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl ValueObject for LineItem {}

impl LineItem {
    /// The blank row a new invoice starts with.
    pub fn create() -> Self {
        Self {
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
        }
    }

    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity × unit_price`, unrounded.
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Invariant: only items with a positive, finite quantity and price count
    /// towards the invoice totals.
    pub fn is_billable(&self) -> bool {
        self.quantity.is_finite()
            && self.unit_price.is_finite()
            && self.quantity > 0.0
            && self.unit_price > 0.0
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::create()
    }
}
