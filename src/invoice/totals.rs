use serde::Serialize;

use super::LineItem;

/// Figures derived from an invoice's items and discount; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub subtotal: f64,
    pub total_tax: f64,
    pub discount_amount: f64,
    /// Not clamped: a discount above subtotal + tax drives this negative.
    pub grand_total: f64,
}

/// Sum the items and apply the discount to the pre-tax subtotal only.
///
/// Inputs are not validated; negative or out-of-range values are computed
/// arithmetically.
pub fn compute_totals(items: &[LineItem], discount_percent: f64) -> Totals {
    // f64's `Sum` starts from -0.0, which would print as "-0.00"
    let subtotal = items.iter().map(LineItem::net_amount).fold(0.0, |acc, x| acc + x);
    let total_tax = items.iter().map(LineItem::tax_amount).fold(0.0, |acc, x| acc + x);
    let discount_amount = subtotal * (discount_percent / 100.0) + 0.0;
    let grand_total = subtotal + total_tax - discount_amount;

    Totals {
        subtotal,
        total_tax,
        discount_amount,
        grand_total,
    }
}
