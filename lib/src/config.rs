//! Configuration management for adyen.

use crate::constants::{
    API_PASSWORD_ENV, LIVE_PAYMENT_HOST_SUFFIX, PAYMENT_API_VERSION, TEST_PAYMENT_BASE_URL,
};
use crate::error::{AdyenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Processor platform to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Test,
    Live,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = AdyenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "live" => Ok(Environment::Live),
            _ => Err(AdyenError::invalid_config(format!(
                "Unknown environment '{s}'. Expected 'test' or 'live'."
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Web service user (e.g. `ws@Company.MyCompany`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_user: Option<String>,
    /// Web service password. Prefer the `ADYEN_API_PASSWORD` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
    /// Merchant account used when a request does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_account: Option<String>,
    #[serde(default)]
    pub environment: Environment,
    /// Unique live URL prefix, required for the live environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_endpoint_prefix: Option<String>,
    /// Explicit base URL; overrides the environment when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// HTTP timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Runtime-only password from `ADYEN_API_PASSWORD`.
    /// This is not persisted to the config file
    #[serde(skip)]
    pub env_api_password: Option<String>,
}

/// Builder for creating Config instances
///
/// # Examples
///
/// ```
/// use adyen_lib::config::{Config, Environment};
///
/// let config = Config::builder()
///     .with_api_user("ws@Company.Example")
///     .with_api_password("secret")
///     .with_merchant_account("ExampleECOM")
///     .with_environment(Environment::Test)
///     .build()
///     .unwrap();
/// assert_eq!(config.merchant_account.as_deref(), Some("ExampleECOM"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

/// Macro to reduce builder pattern boilerplate
macro_rules! builder_method {
    ($name:ident, $field:ident, $value_type:ty) => {
        pub fn $name(mut self, value: impl Into<$value_type>) -> Self {
            self.config.$field = Some(value.into());
            self
        }
    };
}

impl ConfigBuilder {
    /// Create a new config builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    builder_method!(with_api_user, api_user, String);
    builder_method!(with_api_password, api_password, String);
    builder_method!(with_merchant_account, merchant_account, String);
    builder_method!(with_live_endpoint_prefix, live_endpoint_prefix, String);
    builder_method!(with_endpoint, endpoint, String);
    builder_method!(with_timeout_secs, timeout_secs, u64);

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Config {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load config from the specified path or default location (~/.adyen/config.toml)
    ///
    /// The API password is taken from `ADYEN_API_PASSWORD` when that variable is set.
    pub fn load_from(config_path: Option<impl AsRef<Path>>) -> Result<Self> {
        let config_path = Self::resolve_path(config_path)?;

        if !config_path.exists() {
            return Err(AdyenError::ConfigMissing(format!(
                "Config file not found at {}. Run 'adyen config init' to create one.",
                config_path.display()
            )));
        }

        let mut config = Self::read_file(&config_path)?;
        config.apply_env_overrides();

        config.validate().map_err(|e| {
            AdyenError::ConfigMissing(format!(
                "Invalid configuration in {}: {}",
                config_path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %config_path.display(),
            environment = %config.environment,
            "loaded configuration"
        );

        Ok(config)
    }

    /// Load config from the default location (~/.adyen/config.toml)
    pub fn load() -> Result<Self> {
        Self::load_from(None::<&str>)
    }

    /// Load config without validation or environment overrides.
    ///
    /// This is useful when you want to inspect a potentially invalid config
    /// file. Use `load_from` for normal usage.
    pub fn load_unchecked(config_path: Option<impl AsRef<Path>>) -> Result<Self> {
        let config_path = Self::resolve_path(config_path)?;

        if !config_path.exists() {
            return Err(AdyenError::ConfigMissing(format!(
                "Config file not found at {}. Run 'adyen config init' to create one.",
                config_path.display()
            )));
        }

        Self::read_file(&config_path)
    }

    /// Load config, returning default if file doesn't exist.
    ///
    /// Errors for invalid or unreadable config files are propagated.
    pub fn load_or_default(config_path: Option<impl AsRef<Path>>) -> Result<Self> {
        let config_path = Self::resolve_path(config_path)?;

        let mut config = if config_path.exists() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Get the default config file path (~/.adyen/config.toml)
    pub fn default_config_path() -> Result<PathBuf> {
        crate::constants::default_config_path().ok_or(AdyenError::NoConfigDir)
    }

    /// Save config to the given path (or the default location) with validation
    pub fn save_to(&self, config_path: Option<impl AsRef<Path>>) -> Result<PathBuf> {
        self.validate()?;

        let config_path = Self::resolve_path(config_path)?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, &content)?;
        set_secure_file_permissions(&config_path)?;

        Ok(config_path)
    }

    /// Save config to the default location with validation
    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(None::<&str>)
    }

    /// Check that the configuration can produce an endpoint URL.
    ///
    /// Credentials are not required here; a config may legitimately rely on
    /// the environment or per-request parameters for them.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(AdyenError::invalid_config(
                "'timeout_secs' must be greater than zero",
            ));
        }

        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(AdyenError::invalid_config(format!(
                    "Endpoint '{endpoint}' must start with http:// or https://"
                )));
            }
            return Ok(());
        }

        if self.environment == Environment::Live
            && self
                .live_endpoint_prefix
                .as_deref()
                .map_or(true, |p| p.trim().is_empty())
        {
            return Err(AdyenError::config_missing(
                "The live environment requires 'live_endpoint_prefix' to be set",
            ));
        }

        Ok(())
    }

    /// Base URL that action names are appended to.
    pub fn base_url(&self) -> Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.trim_end_matches('/').to_string());
        }

        match self.environment {
            Environment::Test => Ok(format!("{TEST_PAYMENT_BASE_URL}/v{PAYMENT_API_VERSION}")),
            Environment::Live => {
                let prefix = self.live_endpoint_prefix.as_deref().ok_or_else(|| {
                    AdyenError::config_missing(
                        "The live environment requires 'live_endpoint_prefix' to be set",
                    )
                })?;
                Ok(format!(
                    "https://{prefix}-{LIVE_PAYMENT_HOST_SUFFIX}/pal/servlet/Payment/v{PAYMENT_API_VERSION}"
                ))
            }
        }
    }

    /// Full URL of a processor action such as `authorise`.
    pub fn endpoint_for(&self, method_name: &str) -> Result<String> {
        Ok(format!("{}/{method_name}", self.base_url()?))
    }

    /// Get the API user, returning an error if not configured.
    pub fn require_api_user(&self) -> Result<&str> {
        self.api_user.as_deref().ok_or_else(|| {
            AdyenError::config_missing(
                "No API user configured. Set 'api_user' in the config file.",
            )
        })
    }

    /// API password, preferring `ADYEN_API_PASSWORD` over the file.
    pub fn resolved_api_password(&self) -> Option<&str> {
        self.env_api_password
            .as_deref()
            .or(self.api_password.as_deref())
    }

    fn apply_env_overrides(&mut self) {
        self.env_api_password = std::env::var(API_PASSWORD_ENV)
            .ok()
            .filter(|password| !password.is_empty());
    }

    fn resolve_path(config_path: Option<impl AsRef<Path>>) -> Result<PathBuf> {
        match config_path {
            Some(path) => Ok(PathBuf::from(path.as_ref())),
            None => Self::default_config_path(),
        }
    }

    fn read_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            AdyenError::ConfigMissing(format!(
                "Failed to read config file at {}: {}",
                config_path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            AdyenError::InvalidConfig(format!(
                "Failed to parse config file at {}: {}",
                config_path.display(),
                e
            ))
        })
    }
}

/// Restrict a file holding credentials to its owner (0600).
#[cfg(unix)]
fn set_secure_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_secure_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            api_user = "ws@Company.Example"
            api_password = "secret"
            merchant_account = "ExampleECOM"
            environment = "live"
            live_endpoint_prefix = "1797a841fbb37ca7-AdyenDemo"
            timeout_secs = 15
        "#;

        let config: Config = toml::from_str(toml).expect("should parse");
        assert_eq!(config.api_user.as_deref(), Some("ws@Company.Example"));
        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.timeout_secs, Some(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config_defaults_to_test() {
        let config: Config = toml::from_str("").expect("should parse");
        assert_eq!(config.environment, Environment::Test);
        assert!(config.api_user.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config_rejects_unknown_fields() {
        let toml = r#"
            api_key = "abcdef"
        "#;

        let result: std::result::Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Should reject unknown field 'api_key'");
    }

    #[test]
    fn test_test_endpoint() {
        let config = Config::default();
        assert_eq!(
            config.endpoint_for("authorise").unwrap(),
            "https://pal-test.adyen.com/pal/servlet/Payment/v12/authorise"
        );
    }

    #[test]
    fn test_live_endpoint() {
        let config = Config {
            environment: Environment::Live,
            live_endpoint_prefix: Some("abc123-Company".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_for("authorise").unwrap(),
            "https://abc123-Company-pal-live.adyenpayments.com/pal/servlet/Payment/v12/authorise"
        );
    }

    #[test]
    fn test_live_without_prefix_is_invalid() {
        let config = Config {
            environment: Environment::Live,
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            AdyenError::ConfigMissing(_)
        ));
        assert!(config.endpoint_for("authorise").is_err());
    }

    #[test]
    fn test_endpoint_override_wins() {
        let config = Config {
            environment: Environment::Live,
            endpoint: Some("http://127.0.0.1:8080/pal/".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(
            config.endpoint_for("authorise").unwrap(),
            "http://127.0.0.1:8080/pal/authorise"
        );
    }

    #[test]
    fn test_endpoint_override_must_be_http() {
        let config = Config {
            endpoint: Some("ftp://example.test".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            AdyenError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let result = Config::builder().with_timeout_secs(0u64).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("LIVE".parse::<Environment>().unwrap(), Environment::Live);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_env_password_takes_precedence_and_is_not_serialized() {
        let config = Config {
            api_password: Some("from-file".to_string()),
            env_api_password: Some("from-env".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_api_password(), Some("from-env"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("from-file"));
        assert!(!toml_str.contains("from-env"));
    }

    #[test]
    fn test_require_api_user() {
        let config = Config::default();
        assert!(config.require_api_user().is_err());

        let config = Config::builder().with_api_user("USER").build().unwrap();
        assert_eq!(config.require_api_user().unwrap(), "USER");
    }
}
