//! Cart reconciliation against a recorded order
//!
//! Builds the item list that [`crate::calculator::calculate_order_total`]
//! should see when the table already has an order on the backend.

use shared::order::{ExistingOrderData, NewOrderItem, OrderItem};

use crate::items::add_new_item;

/// Merge a pending (not yet sent) cart onto the recorded lines
///
/// Recorded lines come first; a pending line with a known id adds to that
/// line's quantity, otherwise it is appended.
pub fn merge_pending_items(recorded: &[OrderItem], pending: &[OrderItem]) -> Vec<OrderItem> {
    pending.iter().fold(recorded.to_vec(), |merged, item| {
        let fields = NewOrderItem {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
        };
        add_new_item(&merged, &fields, item.quantity)
    })
}

/// Quantities of `cart` that are not yet recorded on `order`
///
/// For each line, the `quantity_sold` of recorded lines with the same
/// product id is subtracted; lines with nothing new are dropped. Without an
/// order the cart is returned as is.
pub fn incremental_items(cart: &[OrderItem], order: Option<&ExistingOrderData>) -> Vec<OrderItem> {
    let Some(order) = order else {
        return cart.to_vec();
    };

    cart.iter()
        .filter_map(|item| {
            let recorded: i32 = order
                .order_items
                .iter()
                .filter(|line| line.id_product == item.id)
                .map(|line| line.quantity_sold)
                .sum();
            let quantity = item.quantity.saturating_sub(recorded);
            (quantity > 0).then(|| OrderItem {
                quantity,
                ..item.clone()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::RecordedOrderItem;

    #[test]
    fn test_merge_adds_to_recorded_lines() {
        let recorded = vec![
            OrderItem::new(1, "Phở", 2, 50000.0),
            OrderItem::new(2, "Bún chả", 1, 60000.0),
        ];
        let pending = vec![
            OrderItem::new(2, "Bún chả", 1, 60000.0),
            OrderItem::new(3, "Chả cá", 1, 80000.0),
        ];

        let merged = merge_pending_items(&recorded, &pending);
        assert_eq!(
            merged,
            vec![
                OrderItem::new(1, "Phở", 2, 50000.0),
                OrderItem::new(2, "Bún chả", 2, 60000.0),
                OrderItem::new(3, "Chả cá", 1, 80000.0),
            ]
        );
    }

    #[test]
    fn test_merge_with_nothing_recorded() {
        let pending = vec![OrderItem::new(3, "Chả cá", 1, 80000.0)];
        assert_eq!(merge_pending_items(&[], &pending), pending);
    }

    #[test]
    fn test_incremental_without_order() {
        let cart = vec![OrderItem::new(21, "Súp", 3, 50000.0)];
        assert_eq!(incremental_items(&cart, None), cart);
    }

    #[test]
    fn test_incremental_subtracts_recorded_quantities() {
        let cart = vec![
            OrderItem::new(21, "Súp cà chua basil", 3, 50000.0),
            OrderItem::new(22, "Món mới", 1, 80000.0),
        ];
        let order = ExistingOrderData::new(1, "300000.00", "90000.00")
            .with_order_items(vec![RecordedOrderItem::new(21, 2, 50000.0)]);

        assert_eq!(
            incremental_items(&cart, Some(&order)),
            vec![
                OrderItem::new(21, "Súp cà chua basil", 1, 50000.0),
                OrderItem::new(22, "Món mới", 1, 80000.0),
            ]
        );
    }

    #[test]
    fn test_incremental_drops_fully_recorded_lines() {
        let cart = vec![OrderItem::new(1, "Phở", 2, 50000.0)];
        let order = ExistingOrderData::new(1, 100000, 0)
            .with_order_items(vec![RecordedOrderItem::new(1, 3, 50000.0)]);

        assert!(incremental_items(&cart, Some(&order)).is_empty());
    }

    #[test]
    fn test_incremental_sums_split_recorded_lines() {
        let cart = vec![OrderItem::new(1, "Phở", 5, 50000.0)];
        let order = ExistingOrderData::default().with_order_items(vec![
            RecordedOrderItem::new(1, 1, 50000.0),
            RecordedOrderItem::new(1, 2, 50000.0),
        ]);

        assert_eq!(incremental_items(&cart, Some(&order))[0].quantity, 2);
    }

    #[test]
    fn test_incremental_matches_ids_exactly() {
        let cart = vec![OrderItem::new(1, "Phở", 2, 50000.0)];
        let order = ExistingOrderData::default()
            .with_order_items(vec![RecordedOrderItem::new("1", 2, 50000.0)]);

        assert_eq!(incremental_items(&cart, Some(&order)), cart);
    }
}
