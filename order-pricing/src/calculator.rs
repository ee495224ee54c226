//! Order total calculator
//!
//! Prices the current cart, either as a brand-new order or as an addition
//! to an order the backend has already confirmed.
//!
//! The cart is summed as given. When topping up a confirmed order, callers
//! pass only the quantities that are not yet recorded (see
//! [`crate::reconcile::incremental_items`]); the calculator never nets
//! against `order_items` itself.

use shared::order::{CalculationType, ExistingOrderData, OrderItem, OrderTotalResult};

use crate::money::{add, parse_amount, sum_items, sub};

/// An order counts as confirmed when its status is 1 or it already carries
/// a positive total payment. Either condition is enough.
pub fn is_order_confirmed(order: Option<&ExistingOrderData>) -> bool {
    let Some(order) = order else {
        return false;
    };
    order.has_confirmed_status() || parse_amount(order.total_payment.as_ref()) > 0.0
}

/// Calculate the priced breakdown for `items`
///
/// - Not confirmed (or no order): the cart is the whole bill.
/// - Confirmed: base = total_payment - deposit_amount, final = base + cart.
///
/// Nothing is clamped or rounded here; negative bases pass through unchanged.
pub fn calculate_order_total(
    items: &[OrderItem],
    existing_order: Option<&ExistingOrderData>,
) -> OrderTotalResult {
    let new_items_total = sum_items(items);

    let result = match existing_order.filter(|&order| is_order_confirmed(Some(order))) {
        None => OrderTotalResult {
            base_amount: 0.0,
            deposit_amount: 0.0,
            new_items_total,
            final_total: new_items_total,
            is_existing_order: false,
            calculation_type: CalculationType::NewOrder,
        },
        Some(order) => {
            let deposit = parse_amount(order.deposit_amount.as_ref());
            let base = sub(parse_amount(order.total_payment.as_ref()), deposit);

            OrderTotalResult {
                base_amount: base,
                deposit_amount: deposit,
                new_items_total,
                final_total: add(base, new_items_total),
                is_existing_order: true,
                calculation_type: CalculationType::ExistingOrder,
            }
        }
    };

    tracing::debug!(
        items = items.len(),
        calculation_type = ?result.calculation_type,
        base_amount = result.base_amount,
        new_items_total = result.new_items_total,
        final_total = result.final_total,
        "Calculated order total"
    );

    result
}
