//! Quote assembly
//!
//! One request in, one fully priced quote out. This is what the binary
//! reads from disk or stdin and prints back as JSON.

use serde::{Deserialize, Serialize};
use shared::order::{ExistingOrderData, OrderItem, OrderTotalResult};
use shared::{AppError, AppResult};
use std::io::Read;
use std::path::Path;

use crate::calculator::calculate_order_total;
use crate::format::format_price;
use crate::reconcile::incremental_items;
use crate::voucher::{PaymentSummary, summarize_payment};

/// Pricing request for one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Current cart
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Order already recorded for the table, if any
    #[serde(default)]
    pub existing_order: Option<ExistingOrderData>,
    /// Subtract quantities already recorded on `existing_order` before pricing
    #[serde(default)]
    pub net_recorded_items: bool,
}

impl QuoteRequest {
    /// Parse a request from JSON text
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a request from a file
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_detail("path", path.display().to_string())
        })?;
        Self::from_json(&json)
    }

    /// Read a request from any reader (stdin in the binary)
    pub fn from_reader(mut reader: impl Read) -> AppResult<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|e| AppError::invalid_request(format!("failed to read request: {}", e)))?;
        Self::from_json(&json)
    }
}

/// Priced quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Lines actually priced (after netting, when requested)
    pub priced_items: Vec<OrderItem>,
    pub totals: OrderTotalResult,
    pub payment: PaymentSummary,
    /// `totals.final_total` for display
    pub final_total_display: String,
    /// `payment.total` for display
    pub amount_due_display: String,
}

/// Price a request
pub fn build_quote(request: &QuoteRequest) -> Quote {
    let order = request.existing_order.as_ref();
    let priced_items = if request.net_recorded_items {
        incremental_items(&request.items, order)
    } else {
        request.items.clone()
    };

    let totals = calculate_order_total(&priced_items, order);
    let payment = summarize_payment(&priced_items, order);

    tracing::info!(
        items = priced_items.len(),
        final_total = totals.final_total,
        amount_due = payment.total,
        "Quote built"
    );

    Quote {
        final_total_display: format_price(totals.final_total),
        amount_due_display: format_price(payment.total),
        priced_items,
        totals,
        payment,
    }
}
