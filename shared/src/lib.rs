//! Shared types for the order pricing workspace
//!
//! Data model for carts and recorded orders, plus the unified error types
//! used at the I/O edge.

pub mod error;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use order::{
    Amount, CalculationType, ExistingOrderData, NewOrderItem, OrderItem, OrderTotalResult,
    RecordId, RecordedOrderItem, Voucher,
};
