//! Constants used throughout the adyen library

use std::path::PathBuf;

/// Application name, used for the config directory
pub const APP_NAME: &str = "adyen";

/// Config file name
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "ADYEN_CONFIG_DIR";

/// Environment variable holding the API password, so it can stay out of the config file
pub const API_PASSWORD_ENV: &str = "ADYEN_API_PASSWORD";

/// Default HTTP request timeout in seconds (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Content type sent with every JSON request body
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Payment service version used to build endpoint URLs
pub const PAYMENT_API_VERSION: u32 = 12;

/// Base URL of the payment service on the test platform
pub const TEST_PAYMENT_BASE_URL: &str = "https://pal-test.adyen.com/pal/servlet/Payment";

/// Host suffix of the payment service on the live platform, after the merchant prefix
pub const LIVE_PAYMENT_HOST_SUFFIX: &str = "pal-live.adyenpayments.com";

/// Factor between major and minor currency units
pub const MINOR_UNIT_FACTOR: i64 = 100;

/// Get the adyen home directory (`~/.adyen/`)
///
/// `ADYEN_CONFIG_DIR` takes precedence over the home directory lookup.
///
/// # Returns
///
/// - `Some(PathBuf)` if the directory can be determined
/// - `None` if the home directory cannot be determined
pub fn adyen_home_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|h| h.join(format!(".{APP_NAME}")))
}

/// Get the default config file path (`~/.adyen/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    adyen_home_dir().map(|p| p.join(CONFIG_FILE))
}
