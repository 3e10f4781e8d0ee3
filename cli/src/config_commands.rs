use crate::cli::{Cli, EnvironmentArg, OutputFormat};
use crate::colors::Colors;
use crate::config_utils::{load_config, resolve_config_path};
use crate::output::{build_config_display, print_structured, print_value_as_text, toml_value_to_json};
use adyen_lib::{AuthoriseRequest, Config};
use anyhow::{Context, Result};

/// Show the whole configuration
pub fn show_command(cli: &Cli, output_format: OutputFormat) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let config_path = resolve_config_path(cli.config.as_ref())?;
    let display = build_config_display(&config, &config_path);

    match output_format.resolve() {
        OutputFormat::Text => {
            println!(
                "Config file: {}",
                Colors::path(&config_path.display().to_string())
            );
            println!();
            if let Some(fields) = display.as_object() {
                let mut fields = fields.clone();
                fields.remove("config_path");
                print_value_as_text(&serde_json::Value::Object(fields));
            }
        }
        format => print_structured(&display, format)?,
    }

    Ok(())
}

/// Get a specific configuration value by key
pub fn get_command(cli: &Cli, key: &str, output_format: OutputFormat) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let config_path = resolve_config_path(cli.config.as_ref())?;

    let output_value = match key {
        "endpoint_url" => serde_json::Value::String(
            config.endpoint_for(AuthoriseRequest::METHOD_NAME)?,
        ),
        "environment" => serde_json::Value::String(config.environment.to_string()),
        "api_password" => {
            anyhow::bail!("Refusing to print 'api_password'. Read the config file directly.")
        }
        _ => {
            let toml_content = std::fs::read_to_string(&config_path)
                .context("Failed to read configuration file")?;
            let toml_value: toml::Value =
                toml::from_str(&toml_content).context("Failed to parse TOML configuration")?;

            let value = toml_value
                .get(key)
                .with_context(|| format!("Key '{key}' not found in configuration"))?;
            toml_value_to_json(value)
        }
    };

    match output_format.resolve() {
        OutputFormat::Text => print_value_as_text(&output_value),
        format => print_structured(&output_value, format)?,
    }

    Ok(())
}

/// Validate the configuration file
pub fn validate_command(cli: &Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_ref())?;

    if !config_path.exists() {
        return Err(adyen_lib::AdyenError::config_missing(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let config = load_config(Some(&config_path))?;
    let endpoint = config.endpoint_for(AuthoriseRequest::METHOD_NAME)?;

    println!(
        "{} Configuration is valid: {}",
        Colors::ok_marker(),
        Colors::path(&config_path.display().to_string())
    );
    println!("{} {}", Colors::key("Environment:"), config.environment);
    println!("{} {endpoint}", Colors::key("Endpoint:"));

    let warnings = [
        (config.api_user.is_none(), "No 'api_user' set; requests will send empty credentials"),
        (
            config.resolved_api_password().is_none(),
            "No API password; set ADYEN_API_PASSWORD or 'api_password'",
        ),
        (
            config.merchant_account.is_none(),
            "No 'merchant_account' set; pass --merchant-account on each request",
        ),
    ];
    for (applies, message) in warnings {
        if applies {
            println!("{} {}", Colors::warn_marker(), Colors::dim(message));
        }
    }

    Ok(())
}

/// Write a fresh configuration file
pub fn init_command(
    cli: &Cli,
    api_user: &str,
    merchant_account: Option<&str>,
    environment: EnvironmentArg,
    live_endpoint_prefix: Option<&str>,
    force: bool,
) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_ref())?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}",
            config_path.display()
        );
    }

    let mut builder = Config::builder()
        .with_api_user(api_user)
        .with_environment(environment.into());
    if let Some(account) = merchant_account {
        builder = builder.with_merchant_account(account);
    }
    if let Some(prefix) = live_endpoint_prefix {
        builder = builder.with_live_endpoint_prefix(prefix);
    }

    let saved = builder.build()?.save_to(Some(&config_path))?;
    tracing::info!(path = %saved.display(), "wrote configuration");

    println!(
        "{} Wrote {}",
        Colors::ok_marker(),
        Colors::path(&saved.display().to_string())
    );
    println!(
        "Set the password with {} or add 'api_password' to the file.",
        Colors::command("ADYEN_API_PASSWORD")
    );

    Ok(())
}
