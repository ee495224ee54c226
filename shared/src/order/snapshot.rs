//! Persisted order snapshot as returned by the order-detail endpoint
//!
//! Every field is optional on the wire. Numeric fields stay as [`Amount`]
//! so the pricing code decides how to coerce them.

use super::types::{Amount, RecordId};
use serde::{Deserialize, Serialize};

/// Order status code meaning "confirmed / deposit taken"
pub const STATUS_CONFIRMED: f64 = 1.0;

/// Line item already recorded against an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedOrderItem {
    /// Row ID of the recorded line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Product the line refers to (matches `OrderItem::id`)
    pub id_product: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quantity already accounted for in `total_payment`
    #[serde(default)]
    pub quantity_sold: i32,
    #[serde(default)]
    pub price: f64,
}

impl RecordedOrderItem {
    pub fn new(id_product: impl Into<RecordId>, quantity_sold: i32, price: f64) -> Self {
        Self {
            id: None,
            id_product: id_product.into(),
            name: None,
            quantity_sold,
            price,
        }
    }
}

/// Voucher discount kind, encoded by the backend as 1 / 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    /// `discount_value` is a percentage of the subtotal
    Percentage,
    /// `discount_value` is a fixed amount
    FixedAmount,
}

impl DiscountType {
    pub fn code(&self) -> u8 {
        match self {
            Self::Percentage => 1,
            Self::FixedAmount => 2,
        }
    }
}

/// Voucher attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Voucher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<Amount>,
    /// Minimum subtotal for the voucher to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Amount>,
}

impl Voucher {
    pub fn percentage(value: f64) -> Self {
        Self {
            discount_type: Some(Amount::Number(1.0)),
            discount_value: Some(Amount::Number(value)),
            ..Default::default()
        }
    }

    pub fn fixed(value: f64) -> Self {
        Self {
            discount_type: Some(Amount::Number(2.0)),
            discount_value: Some(Amount::Number(value)),
            ..Default::default()
        }
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(Amount::Number(min_price));
        self
    }

    /// Decode `discount_type`; only the numbers 1 and 2 are recognised
    pub fn discount_kind(&self) -> Option<DiscountType> {
        match self.discount_type.as_ref()? {
            t if t.is_number(1.0) => Some(DiscountType::Percentage),
            t if t.is_number(2.0) => Some(DiscountType::FixedAmount),
            _ => None,
        }
    }
}

/// Order already recorded by the backend, possibly confirmed for payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExistingOrderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Status code, `1` = confirmed / deposited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Amount>,
    /// Gross amount already agreed for this order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_payment: Option<Amount>,
    /// Deposit already collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<Amount>,
    /// Total before the voucher discount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_total_payment: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_discount_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_voucher: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher: Option<Voucher>,
    /// Lines already accounted for in `total_payment`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_items: Vec<RecordedOrderItem>,
}

impl ExistingOrderData {
    /// Snapshot with the three fields the total calculation looks at
    pub fn new(status: impl Into<Amount>, total_payment: impl Into<Amount>, deposit_amount: impl Into<Amount>) -> Self {
        Self {
            status: Some(status.into()),
            total_payment: Some(total_payment.into()),
            deposit_amount: Some(deposit_amount.into()),
            ..Default::default()
        }
    }

    pub fn with_order_items(mut self, items: Vec<RecordedOrderItem>) -> Self {
        self.order_items = items;
        self
    }

    /// True when `status` is the JSON number 1 (a string "1" does not count)
    pub fn has_confirmed_status(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.is_number(STATUS_CONFIRMED))
    }
}
