//! Runtime plumbing for the binary: configuration and request loading

pub mod config;

pub use config::Config;

use crate::quote::QuoteRequest;
use shared::AppResult;

/// Load the quote request named by the config (file, or stdin when unset)
pub fn load_request(config: &Config) -> AppResult<QuoteRequest> {
    match &config.input_path {
        Some(path) => {
            tracing::debug!(path = %path, "Reading quote request from file");
            QuoteRequest::from_path(path)
        }
        None => {
            tracing::debug!("Reading quote request from stdin");
            QuoteRequest::from_reader(std::io::stdin().lock())
        }
    }
}
