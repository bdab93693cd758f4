//! Build-time Configuration
//!
//! Values baked into the WASM bundle. Override at build time with
//! `SSD_API_BASE_URL` and `SSD_LOG_LEVEL`.

/// REST backend root (no trailing slash)
pub const API_BASE_URL: &str = match option_env!("SSD_API_BASE_URL") {
    Some(url) => url,
    None => "https://localhost:44350/api",
};

/// localStorage key holding the JSON-encoded bearer token
pub const TOKEN_STORAGE_KEY: &str = "SSD_TOKEN_AUTH_KEY";

/// Rows shown per page in the results table
pub const PAGE_SIZE: usize = 5;

/// Maximum length of a change justification
pub const JUSTIFICATION_MAX_LEN: usize = 500;

/// Pause between a successful registration and signing the user in (ms)
pub const REGISTER_LOGIN_DELAY_MS: u32 = 2_000;

/// Console log level, parsed from `SSD_LOG_LEVEL` (defaults to info)
pub fn log_level() -> log::Level {
    option_env!("SSD_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}
