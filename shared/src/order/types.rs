//! Cart line items and the priced breakdown derived from them

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers and loosely typed numbers
// ============================================================================

/// Identifier that the backend sends either as a JSON number or a string.
///
/// Equality is exact: `Number(1)` and `Text("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Monetary or numeric field as received from the backend.
///
/// Decimal columns are serialized as strings (`"300000.00"`), everything
/// else as plain numbers. Anything else is kept verbatim and counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Amount {
    /// True when this is a JSON number exactly equal to `value`
    pub fn is_number(&self, value: f64) -> bool {
        matches!(self, Self::Number(n) if *n == value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ============================================================================
// Cart Item Types
// ============================================================================

/// Cart line item, owned by the caller and never mutated in place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product ID, unique within a cart
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Quantity ordered
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

impl OrderItem {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Fields of a product being added to the cart (quantity supplied separately)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
}

impl NewOrderItem {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Build a cart line from these fields
    pub fn with_quantity(&self, quantity: i32) -> OrderItem {
        OrderItem {
            id: self.id.clone(),
            name: self.name.clone(),
            quantity,
            price: self.price,
        }
    }
}

// ============================================================================
// Calculation Result
// ============================================================================

/// Which pricing branch produced a result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// No confirmed order yet: the cart is the whole bill
    #[default]
    NewOrder,
    /// Cart is added on top of a confirmed order
    ExistingOrder,
}

/// Priced breakdown of a cart, optionally on top of a confirmed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderTotalResult {
    /// Confirmed total payment minus its deposit (0 for new orders)
    pub base_amount: f64,
    /// Deposit already collected (0 for new orders)
    pub deposit_amount: f64,
    /// Sum of price x quantity over the cart passed in
    pub new_items_total: f64,
    /// base_amount + new_items_total
    pub final_total: f64,
    pub is_existing_order: bool,
    pub calculation_type: CalculationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_untagged() {
        let id: RecordId = serde_json::from_str("21").unwrap();
        assert_eq!(id, RecordId::Number(21));

        let id: RecordId = serde_json::from_str("\"21\"").unwrap();
        assert_eq!(id, RecordId::Text("21".to_string()));

        assert_ne!(RecordId::from(21), RecordId::from("21"));
        assert_eq!(RecordId::from(21).to_string(), "21");
    }

    #[test]
    fn test_amount_accepts_numbers_strings_and_junk() {
        let amounts: Vec<Amount> =
            serde_json::from_str(r#"[300000, "90000.00", true, {"x": 1}]"#).unwrap();

        assert_eq!(amounts[0], Amount::Number(300000.0));
        assert_eq!(amounts[1], Amount::Text("90000.00".to_string()));
        assert!(matches!(amounts[2], Amount::Other(_)));
        assert!(matches!(amounts[3], Amount::Other(_)));
    }

    #[test]
    fn test_amount_is_number() {
        assert!(Amount::from(1).is_number(1.0));
        assert!(!Amount::from("1").is_number(1.0));
        assert!(!Amount::from(0).is_number(1.0));
    }

    #[test]
    fn test_order_item_json() {
        let item: OrderItem =
            serde_json::from_str(r#"{"id": 1, "name": "Phở", "quantity": 2, "price": 50000}"#)
                .unwrap();
        assert_eq!(item, OrderItem::new(1, "Phở", 2, 50000.0));
    }

    #[test]
    fn test_new_item_with_quantity() {
        let fields = NewOrderItem::new(3, "Chả cá", 80000.0);
        assert_eq!(fields.with_quantity(2), OrderItem::new(3, "Chả cá", 2, 80000.0));
    }

    #[test]
    fn test_calculation_type_serde() {
        let result = OrderTotalResult {
            calculation_type: CalculationType::ExistingOrder,
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["calculation_type"], "existing_order");

        let json = serde_json::to_string(&CalculationType::NewOrder).unwrap();
        assert_eq!(json, "\"new_order\"");
    }
}
