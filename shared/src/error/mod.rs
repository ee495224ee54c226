//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::InvalidFormat, "expected a JSON object")
//!     .with_detail("line", 1);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(6));
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult};
