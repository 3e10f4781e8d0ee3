//! Common test utilities for adyen CLI tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub const TEST_API_USER: &str = "ws@Company.Example";
pub const TEST_API_PASSWORD: &str = "s3cr3t-password";
pub const TEST_MERCHANT: &str = "ExampleECOM";

/// Builder for creating test configurations under `$HOME/.adyen/`
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            lines: Vec::new(),
        }
    }

    /// Add a raw `key = value` line; `value` is written verbatim.
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{key} = {value}"));
        self
    }

    /// Add a string setting
    pub fn with(self, key: &str, value: &str) -> Self {
        self.with_raw(key, &format!("\"{value}\""))
    }

    /// Credentials and merchant account used by most tests
    pub fn with_defaults(self) -> Self {
        self.with("api_user", TEST_API_USER)
            .with("api_password", TEST_API_PASSWORD)
            .with("merchant_account", TEST_MERCHANT)
    }

    pub fn build(self) -> TempDir {
        let adyen_dir = self.temp_dir.path().join(".adyen");
        fs::create_dir_all(&adyen_dir).expect("Failed to create adyen directory");

        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(adyen_dir.join("config.toml"), content).expect("Failed to write config");

        self.temp_dir
    }
}

/// Temp home with the default credentials configured
pub fn setup_test_config() -> TempDir {
    TestConfigBuilder::new().with_defaults().build()
}

/// Temp home without any config file
pub fn empty_home() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

pub fn config_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join(".adyen").join("config.toml")
}

/// Create a test command whose config lives inside `temp_dir`.
///
/// Environment variables that would leak settings from the developer's
/// shell are cleared.
pub fn test_command(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("adyen"));

    cmd.env("HOME", temp_dir.path())
        .env_remove("ADYEN_CONFIG_DIR")
        .env_remove("ADYEN_API_PASSWORD")
        .env_remove("ADYEN_API_USER")
        .env_remove("ADYEN_ENCRYPTED_FORM")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");

    cmd
}

/// `adyen authorise` with the required flags filled in
pub fn authorise_command(temp_dir: &TempDir) -> Command {
    let mut cmd = test_command(temp_dir);
    cmd.args([
        "authorise",
        "--amount",
        "10",
        "--currency",
        "EUR",
        "--reference",
        "order-1",
        "--encrypted-form",
        "adyenjs_0_1_18$FORM",
    ]);
    cmd
}
