/// Runtime configuration for the `order-quote` binary
///
/// # Environment variables
///
/// | Variable     | Default | Meaning |
/// |--------------|---------|---------|
/// | LOG_LEVEL    | info    | tracing level (`RUST_LOG` takes precedence) |
/// | LOG_JSON     | false   | emit JSON log lines |
/// | LOG_DIR      | unset   | directory for daily rolling log files |
/// | QUOTE_INPUT  | unset   | request file; stdin when unset |
/// | QUOTE_PRETTY | true    | pretty-print the quote JSON |
///
/// # Example
///
/// ```ignore
/// QUOTE_INPUT=table-7.json LOG_LEVEL=debug cargo run --bin order-quote
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Request file path, `None` reads stdin
    pub input_path: Option<String>,
    pub pretty: bool,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            input_path: std::env::var("QUOTE_INPUT").ok().filter(|p| !p.is_empty()),
            pretty: std::env::var("QUOTE_PRETTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            input_path: None,
            pretty: true,
        }
    }
}
