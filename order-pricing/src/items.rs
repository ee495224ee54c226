//! Cart item list operations
//!
//! Immutable helpers over a caller-owned cart, keyed by item id. Every
//! function returns a fresh `Vec` (even when nothing changed) and leaves the
//! input untouched, so ids stay unique and insertion order is preserved.

use shared::order::{NewOrderItem, OrderItem, RecordId};

/// Find the cart line with exactly this id
pub fn find_order_item<'a>(items: &'a [OrderItem], id: &RecordId) -> Option<&'a OrderItem> {
    items.iter().find(|item| &item.id == id)
}

/// Change a line's quantity by `delta`, dropping it once it reaches zero
///
/// Unknown ids leave the cart unchanged.
pub fn update_item_quantity(items: &[OrderItem], id: &RecordId, delta: i32) -> Vec<OrderItem> {
    if find_order_item(items, id).is_none() {
        tracing::trace!(%id, delta, "quantity update for item not in cart");
        return items.to_vec();
    }

    items
        .iter()
        .filter_map(|item| {
            if &item.id != id {
                return Some(item.clone());
            }
            let quantity = item.quantity.saturating_add(delta);
            (quantity > 0).then(|| OrderItem {
                quantity,
                ..item.clone()
            })
        })
        .collect()
}

/// Add `quantity_to_add` of a product to the cart
///
/// An existing line keeps its position, name and price and only its
/// quantity changes; a new product is appended at the end with exactly
/// `quantity_to_add`.
pub fn add_new_item(items: &[OrderItem], new_item: &NewOrderItem, quantity_to_add: i32) -> Vec<OrderItem> {
    if find_order_item(items, &new_item.id).is_none() {
        let mut result = items.to_vec();
        result.push(new_item.with_quantity(quantity_to_add));
        return result;
    }

    items
        .iter()
        .map(|item| {
            if item.id == new_item.id {
                OrderItem {
                    quantity: item.quantity.saturating_add(quantity_to_add),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop every line with this id
pub fn remove_item(items: &[OrderItem], id: &RecordId) -> Vec<OrderItem> {
    items.iter().filter(|item| &item.id != id).cloned().collect()
}
