//! Voucher discounts and the payable summary shown at checkout
//!
//! Unlike [`crate::calculator`], amounts here are clamped: a discount never
//! exceeds the subtotal and the amount due never drops below zero.

use serde::{Deserialize, Serialize};
use shared::order::{DiscountType, ExistingOrderData, OrderItem, Voucher};

use crate::money::{div, mul, parse_amount, round_whole, sub, sum_items};

/// Amounts shown on the checkout panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentSummary {
    /// Sum of the cart lines
    pub subtotal: f64,
    pub voucher_discount: f64,
    pub deposit_amount: f64,
    /// subtotal - voucher_discount - deposit_amount, never below zero
    pub total: f64,
}

/// Discount a voucher grants on `subtotal`
///
/// - Missing voucher, unknown type or zero value: no discount
/// - Subtotal below a set `min_price`: no discount
/// - Percentage: rounded to whole currency units
/// - Never more than the subtotal
pub fn calculate_voucher_discount(subtotal: f64, voucher: Option<&Voucher>) -> f64 {
    let Some(voucher) = voucher else {
        return 0.0;
    };
    let Some(kind) = voucher.discount_kind() else {
        return 0.0;
    };
    let value = parse_amount(voucher.discount_value.as_ref());
    if value == 0.0 {
        return 0.0;
    }

    let min_price = parse_amount(voucher.min_price.as_ref());
    if min_price != 0.0 && subtotal < min_price {
        tracing::debug!(subtotal, min_price, "Voucher minimum not reached");
        return 0.0;
    }

    let discount = match kind {
        DiscountType::Percentage => round_whole(div(mul(subtotal, value), 100.0)),
        DiscountType::FixedAmount => value,
    };
    discount.min(subtotal)
}

/// Discount to apply for an order: the amount the backend already recorded,
/// otherwise computed from the attached voucher
fn order_voucher_discount(subtotal: f64, order: &ExistingOrderData) -> f64 {
    let recorded = parse_amount(order.voucher_discount_amount.as_ref());
    if recorded != 0.0 {
        return recorded;
    }
    if order.id_voucher.is_some() {
        return calculate_voucher_discount(subtotal, order.voucher.as_ref());
    }
    0.0
}

/// Checkout summary for the cart against an optional recorded order
pub fn summarize_payment(items: &[OrderItem], order: Option<&ExistingOrderData>) -> PaymentSummary {
    let subtotal = sum_items(items);
    let (voucher_discount, deposit_amount) = match order {
        Some(order) => (
            order_voucher_discount(subtotal, order),
            parse_amount(order.deposit_amount.as_ref()),
        ),
        None => (0.0, 0.0),
    };
    let total = sub(sub(subtotal, voucher_discount), deposit_amount).max(0.0);

    PaymentSummary {
        subtotal,
        voucher_discount,
        deposit_amount,
        total,
    }
}

/// What is still owed on a recorded order, from its stored totals alone
///
/// original_total_payment - voucher_discount_amount - deposit_amount,
/// never below zero.
pub fn outstanding_balance(order: &ExistingOrderData) -> f64 {
    let original = parse_amount(order.original_total_payment.as_ref());
    let voucher = parse_amount(order.voucher_discount_amount.as_ref());
    let deposit = parse_amount(order.deposit_amount.as_ref());

    sub(sub(original, voucher), deposit).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{Amount, RecordId};

    fn cart() -> Vec<OrderItem> {
        vec![
            OrderItem::new(1, "Phở", 2, 50000.0),
            OrderItem::new(2, "Bún chả", 1, 60000.0),
        ]
    }

    #[test]
    fn test_no_voucher() {
        assert_eq!(calculate_voucher_discount(160000.0, None), 0.0);
        assert_eq!(calculate_voucher_discount(160000.0, Some(&Voucher::default())), 0.0);
        assert_eq!(calculate_voucher_discount(160000.0, Some(&Voucher::fixed(0.0))), 0.0);
    }

    #[test]
    fn test_percentage_voucher_rounds_to_whole_units() {
        assert_eq!(calculate_voucher_discount(160000.0, Some(&Voucher::percentage(10.0))), 16000.0);
        assert_eq!(calculate_voucher_discount(12345.0, Some(&Voucher::percentage(10.0))), 1235.0);
    }

    #[test]
    fn test_fixed_voucher() {
        assert_eq!(calculate_voucher_discount(160000.0, Some(&Voucher::fixed(30000.0))), 30000.0);
    }

    #[test]
    fn test_discount_capped_at_subtotal() {
        assert_eq!(calculate_voucher_discount(20000.0, Some(&Voucher::fixed(50000.0))), 20000.0);
        assert_eq!(calculate_voucher_discount(20000.0, Some(&Voucher::percentage(150.0))), 20000.0);
    }

    #[test]
    fn test_min_price_not_reached() {
        let voucher = Voucher::fixed(30000.0).with_min_price(200000.0);
        assert_eq!(calculate_voucher_discount(160000.0, Some(&voucher)), 0.0);
        assert_eq!(calculate_voucher_discount(200000.0, Some(&voucher)), 30000.0);
    }

    #[test]
    fn test_string_discount_value() {
        let voucher = Voucher {
            discount_value: Some(Amount::from("25000.00")),
            ..Voucher::fixed(0.0)
        };
        assert_eq!(calculate_voucher_discount(160000.0, Some(&voucher)), 25000.0);
    }

    #[test]
    fn test_voucher_on_huge_subtotal() {
        assert_eq!(
            calculate_voucher_discount(1e30, Some(&Voucher::percentage(10.0))),
            1e30 * 10.0 / 100.0
        );
        assert_eq!(calculate_voucher_discount(1e30, Some(&Voucher::fixed(30000.0))), 30000.0);
    }

    #[test]
    fn test_summary_without_order() {
        let summary = summarize_payment(&cart(), None);
        assert_eq!(
            summary,
            PaymentSummary {
                subtotal: 160000.0,
                voucher_discount: 0.0,
                deposit_amount: 0.0,
                total: 160000.0,
            }
        );
    }

    #[test]
    fn test_summary_uses_recorded_discount_and_deposit() {
        let order = ExistingOrderData {
            voucher_discount_amount: Some(Amount::from("20000.00")),
            deposit_amount: Some(Amount::from("40000.00")),
            id_voucher: Some(RecordId::from(5)),
            voucher: Some(Voucher::percentage(50.0)),
            ..Default::default()
        };
        let summary = summarize_payment(&cart(), Some(&order));

        assert_eq!(summary.voucher_discount, 20000.0);
        assert_eq!(summary.deposit_amount, 40000.0);
        assert_eq!(summary.total, 100000.0);
    }

    #[test]
    fn test_summary_falls_back_to_attached_voucher() {
        let order = ExistingOrderData {
            id_voucher: Some(RecordId::from(5)),
            voucher: Some(Voucher::percentage(10.0)),
            ..Default::default()
        };
        let summary = summarize_payment(&cart(), Some(&order));
        assert_eq!(summary.voucher_discount, 16000.0);
        assert_eq!(summary.total, 144000.0);

        let without_id = ExistingOrderData {
            id_voucher: None,
            ..order
        };
        assert_eq!(summarize_payment(&cart(), Some(&without_id)).voucher_discount, 0.0);
    }

    #[test]
    fn test_summary_total_never_negative() {
        let order = ExistingOrderData {
            deposit_amount: Some(Amount::from(500000)),
            ..Default::default()
        };
        assert_eq!(summarize_payment(&cart(), Some(&order)).total, 0.0);
    }

    #[test]
    fn test_outstanding_balance() {
        let order = ExistingOrderData {
            original_total_payment: Some(Amount::from(800000)),
            voucher_discount_amount: Some(Amount::from(500000)),
            deposit_amount: Some(Amount::from("90000.00")),
            ..Default::default()
        };
        assert_eq!(outstanding_balance(&order), 210000.0);

        let overpaid = ExistingOrderData {
            deposit_amount: Some(Amount::from(900000)),
            ..order
        };
        assert_eq!(outstanding_balance(&overpaid), 0.0);
        assert_eq!(outstanding_balance(&ExistingOrderData::default()), 0.0);
    }
}
