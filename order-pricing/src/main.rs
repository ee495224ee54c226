use order_pricing::core::load_request;
use order_pricing::{Config, build_quote, init_logger_with_file};
use shared::ApiResponse;

fn main() -> anyhow::Result<()> {
    // 1. .env and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(?config, "order-quote starting");

    // 3. Load the request and price it
    let response = match load_request(&config) {
        Ok(request) => ApiResponse::success(build_quote(&request)),
        Err(e) => {
            tracing::error!(code = %e.code, message = %e.message, "Failed to load quote request");
            ApiResponse::from(e)
        }
    };

    // 4. Print the envelope
    let output = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
