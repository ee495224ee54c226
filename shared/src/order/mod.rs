//! Order data model
//!
//! - Cart items: caller-owned line items the pricing functions operate on
//! - Snapshots: orders already recorded by the backend
//! - Results: priced breakdowns derived from the two

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{DiscountType, ExistingOrderData, RecordedOrderItem, STATUS_CONFIRMED, Voucher};
pub use types::*;
