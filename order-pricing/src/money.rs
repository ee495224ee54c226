//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts cross the API as `f64`. Each operation is carried out in
//! `Decimal` when both operands fit, which keeps `0.1 + 0.2 == 0.3`. When a
//! value is outside Decimal's range or the result would overflow, the same
//! operation is done in `f64` instead. Nothing here panics.
//!
//! Every loosely typed input goes through [`parse_amount`] or
//! [`finite_or_zero`]: anything that is not a finite number counts as zero.

use rust_decimal::prelude::*;
use shared::order::{Amount, OrderItem};

/// NaN and infinities count as zero
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Run `op` in Decimal, `None` when an operand or the result does not fit
fn exact(a: f64, b: f64, op: impl FnOnce(Decimal, Decimal) -> Option<Decimal>) -> Option<f64> {
    let a = Decimal::from_f64(a)?;
    let b = Decimal::from_f64(b)?;
    op(a, b)?.to_f64()
}

/// a + b
pub fn add(a: f64, b: f64) -> f64 {
    let (a, b) = (finite_or_zero(a), finite_or_zero(b));
    exact(a, b, |x, y| x.checked_add(y)).unwrap_or(a + b)
}

/// a - b
pub fn sub(a: f64, b: f64) -> f64 {
    let (a, b) = (finite_or_zero(a), finite_or_zero(b));
    exact(a, b, |x, y| x.checked_sub(y)).unwrap_or(a - b)
}

/// a x b
pub fn mul(a: f64, b: f64) -> f64 {
    let (a, b) = (finite_or_zero(a), finite_or_zero(b));
    exact(a, b, |x, y| x.checked_mul(y)).unwrap_or(a * b)
}

/// a / b, zero when dividing by zero
pub fn div(a: f64, b: f64) -> f64 {
    let (a, b) = (finite_or_zero(a), finite_or_zero(b));
    if b == 0.0 {
        return 0.0;
    }
    exact(a, b, |x, y| x.checked_div(y)).unwrap_or(a / b)
}

/// Parse a numeric string the way the backend emits them ("300000.00", " 5e4 ")
fn parse_text(text: &str) -> f64 {
    text.trim().parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Coerce an optional backend amount to a number, defaulting to zero
pub fn parse_amount(amount: Option<&Amount>) -> f64 {
    match amount {
        Some(Amount::Number(n)) => finite_or_zero(*n),
        Some(Amount::Text(s)) => parse_text(s),
        Some(Amount::Other(_)) | None => 0.0,
    }
}

/// price x quantity for one cart line
#[inline]
pub fn line_total(item: &OrderItem) -> f64 {
    mul(item.price, f64::from(item.quantity))
}

/// Sum of line totals over a cart
pub fn sum_items(items: &[OrderItem]) -> f64 {
    items.iter().map(line_total).fold(0.0, add)
}

/// Round to whole currency units, half away from zero
pub fn round_whole(value: f64) -> f64 {
    let value = finite_or_zero(value);
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| value.round())
}
