//! Totals calculator.
//!
//! Totals are a projection of the line items and the invoice metadata. The
//! draft caches the last result, but nothing ever edits a `Totals` value
//! directly: it is recomputed whenever the items or the rates change.

use serde::{Deserialize, Serialize};

use apex_core::ValueObject;

use crate::line_item::LineItem;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of billable line totals.
    pub subtotal: f64,
    /// Flat discount as entered; drives the conditional discount row.
    pub discount: f64,
    /// `max(0, subtotal - discount)`.
    pub discounted_subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl ValueObject for Totals {}

impl Totals {
    /// Whether documents should show a discount row.
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

/// Derive the totals for a set of items.
///
/// Total over its whole input domain: items that are not billable are left
/// out of the subtotal, and a negative or non-finite rate or discount counts
/// as zero.
pub fn compute(items: &[LineItem], tax_rate_percent: f64, discount_amount: f64) -> Totals {
    let subtotal: f64 = items
        .iter()
        .filter(|item| item.is_billable())
        .map(LineItem::total)
        .sum();

    let discount = non_negative(discount_amount);
    let tax_rate = non_negative(tax_rate_percent);

    let discounted_subtotal = (subtotal - discount).max(0.0);
    // inf * 0 is NaN
    let tax = if tax_rate > 0.0 {
        discounted_subtotal * (tax_rate / 100.0)
    } else {
        0.0
    };
    let total = discounted_subtotal + tax;

    Totals {
        subtotal,
        discount,
        discounted_subtotal,
        tax,
        total,
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_invoice_is_all_zero() {
        let totals = compute(&[], 0.0, 0.0);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn discount_without_items_clamps_to_zero() {
        let totals = compute(&[], 8.0, 25.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.discount, 25.0);
        assert_eq!(totals.discounted_subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn discount_applies_before_tax() {
        let items = vec![LineItem::new("Widget", 2.0, 10.0)];
        let totals = compute(&items, 10.0, 5.0);
        assert!(approx(totals.subtotal, 20.0));
        assert!(approx(totals.discounted_subtotal, 15.0));
        assert!(approx(totals.tax, 1.5));
        assert!(approx(totals.total, 16.5));
        assert!(totals.has_discount());
    }

    #[test]
    fn non_billable_items_are_excluded() {
        let items = vec![
            LineItem::new("Widget", 2.0, 10.0),
            LineItem::new("Free sample", 1.0, 0.0),
            LineItem::new("Returned", -1.0, 10.0),
        ];
        let totals = compute(&items, 0.0, 0.0);
        assert!(approx(totals.subtotal, 20.0));
    }

    #[test]
    fn malformed_rates_count_as_zero() {
        let items = vec![LineItem::new("Widget", 1.0, 100.0)];
        let totals = compute(&items, f64::NAN, -3.0);
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert!(approx(totals.total, 100.0));
        assert!(!totals.has_discount());
    }

    #[test]
    fn overflowing_amounts_never_produce_nan() {
        let before = compute(&[LineItem::new("Big", 1.0, 1e300)], 0.0, 0.0);
        let after = compute(&[LineItem::new("Big", 1e10, 1e300)], 0.0, 0.0);

        assert_eq!(after.tax, 0.0);
        assert!(!after.total.is_nan());
        assert!(after.total >= before.total);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn item() -> impl Strategy<Value = LineItem> {
            (0.0f64..1_000.0, 0.0f64..10_000.0)
                .prop_map(|(quantity, unit_price)| LineItem::new("item", quantity, unit_price))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: raising one item's quantity never lowers the total.
            #[test]
            fn total_monotonic_in_quantity(
                items in prop::collection::vec(item(), 1..8),
                index in any::<prop::sample::Index>(),
                bump in 0.0f64..500.0,
                tax in 0.0f64..50.0,
                discount in 0.0f64..5_000.0,
            ) {
                let before = compute(&items, tax, discount);
                let mut raised = items.clone();
                let i = index.index(raised.len());
                raised[i].quantity += bump;
                let after = compute(&raised, tax, discount);
                prop_assert!(after.total >= before.total);
            }

            /// Property: raising one item's price never lowers the total.
            #[test]
            fn total_monotonic_in_price(
                items in prop::collection::vec(item(), 1..8),
                index in any::<prop::sample::Index>(),
                bump in 0.0f64..500.0,
                tax in 0.0f64..50.0,
                discount in 0.0f64..5_000.0,
            ) {
                let before = compute(&items, tax, discount);
                let mut raised = items.clone();
                let i = index.index(raised.len());
                raised[i].unit_price += bump;
                let after = compute(&raised, tax, discount);
                prop_assert!(after.total >= before.total);
            }

            /// Property: a discount covering the subtotal zeroes tax and total.
            #[test]
            fn discount_at_or_above_subtotal_zeroes_everything(
                items in prop::collection::vec(item(), 0..8),
                extra in 0.0f64..1_000.0,
            ) {
                let subtotal = compute(&items, 0.0, 0.0).subtotal;
                let totals = compute(&items, 0.0, subtotal + extra);
                prop_assert_eq!(totals.tax, 0.0);
                prop_assert_eq!(totals.total, 0.0);
            }
        }
    }
}
