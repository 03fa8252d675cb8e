//! # Money
//!
//! Price arithmetic and display formatting for the order screen.
//!
//! Amounts stay in [`Decimal`] from the wire to the total line; floats only
//! exist at the JSON boundary. Display follows Brazilian conventions:
//! `R$ 1.234,56` with `.` grouping thousands and `,` before the cents.

use rust_decimal::prelude::*;

use crate::api::Extra;

/// Computes the order total:
/// `(item price + sum of extra value x extra quantity) x order quantity`.
///
/// Zero-quantity extras contribute nothing but are still welcome in the
/// slice; callers pass the whole ledger as-is.
pub fn order_total(price: Decimal, extras: &[Extra], quantity: u32) -> Decimal {
    let extras_total: Decimal = extras
        .iter()
        .map(|extra| extra.value * Decimal::from(extra.quantity))
        .sum();
    (price + extras_total) * Decimal::from(quantity)
}

/// Formats an amount as Brazilian currency, always with two cent digits.
///
/// Midpoints round away from zero, so `R$ 2,005` displays as `R$ 2,01`.
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (units, cents) = text
        .split_once('.')
        .unwrap_or((text.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(units))
}

/// Inserts `.` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
