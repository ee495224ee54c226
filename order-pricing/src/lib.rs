//! Order pricing for the restaurant admin
//!
//! Pure functions over a caller-held cart and an optional order snapshot
//! from the backend. Nothing here keeps state or performs I/O, apart from
//! the request loading in `core` used by the `order-quote` binary.
//!
//! # Module layout
//!
//! ```text
//! order-pricing/src/
//! ├── money.rs       # checked Decimal arithmetic, parse-or-zero coercion
//! ├── items.rs       # find / update quantity / add / remove
//! ├── calculator.rs  # is_order_confirmed, calculate_order_total
//! ├── format.rs      # format_price ("100,000đ")
//! ├── voucher.rs     # voucher discount, checkout summary
//! ├── reconcile.rs   # pending-cart merge, netting against recorded lines
//! ├── quote.rs       # request -> quote assembly
//! ├── core/          # config, request loading
//! └── utils/         # logging
//! ```

pub mod calculator;
pub mod core;
pub mod format;
pub mod items;
pub mod money;
pub mod quote;
pub mod reconcile;
pub mod utils;
pub mod voucher;

// Re-exports
pub use calculator::{calculate_order_total, is_order_confirmed};
pub use self::core::Config;
pub use format::format_price;
pub use items::{add_new_item, find_order_item, remove_item, update_item_quantity};
pub use quote::{Quote, QuoteRequest, build_quote};
pub use reconcile::{incremental_items, merge_pending_items};
pub use voucher::{PaymentSummary, calculate_voucher_discount, outstanding_balance, summarize_payment};

pub use utils::logger::init_logger_with_file;
