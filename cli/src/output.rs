//! Output formatting and display utilities for the CLI

use adyen_lib::{AuthoriseResponse, Config};
use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::colors::Colors;

const REDACTED: &str = "********";

/// Print any serializable value as pretty JSON or YAML.
///
/// `Text` falls back to pretty JSON; callers with a nicer text rendering
/// handle that format themselves.
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format.resolve() {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print the decoded processor reply.
pub fn print_authorise_response(response: &AuthoriseResponse, format: OutputFormat) -> Result<()> {
    let format = format.resolve();
    if format != OutputFormat::Text {
        return print_structured(response.data(), format);
    }

    if let Some(result_code) = response.result_code() {
        let colored = match result_code {
            "Authorised" => Colors::success(result_code),
            "Refused" | "Error" | "Cancelled" => Colors::error(result_code),
            _ => Colors::warning(result_code),
        };
        println!("{} {colored}", Colors::key("Result:"));
    }

    let fields = [
        ("PSP reference:", response.psp_reference()),
        ("Auth code:", response.auth_code()),
        ("Refusal reason:", response.refusal_reason()),
    ];
    let mut printed = response.result_code().is_some();
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{} {value}", Colors::key(label));
            printed = true;
        }
    }

    if !printed {
        // Not a payment result (e.g. an error reply); show it whole.
        println!("{} {}", Colors::key("HTTP status:"), response.status_code());
        println!("{}", serde_json::to_string_pretty(response.data())?);
    }

    Ok(())
}

/// Configuration view shared by every output format. Secrets are masked.
pub fn build_config_display(config: &Config, config_path: &Path) -> Value {
    json!({
        "config_path": config_path.display().to_string(),
        "environment": config.environment.as_str(),
        "endpoint": config.endpoint_for(adyen_lib::AuthoriseRequest::METHOD_NAME).ok(),
        "api_user": config.api_user,
        "api_password": config.resolved_api_password().map(|_| REDACTED),
        "merchant_account": config.merchant_account,
        "live_endpoint_prefix": config.live_endpoint_prefix,
        "timeout_secs": config.timeout_secs,
    })
}

/// Print a JSON value as plain text
pub fn print_value_as_text(value: &Value) {
    match value {
        Value::String(s) => println!("{s}"),
        Value::Number(n) => println!("{n}"),
        Value::Bool(b) => println!("{b}"),
        Value::Null => println!("null"),
        Value::Array(arr) => {
            for item in arr {
                print_value_as_text(item);
            }
        }
        Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    Value::Null => {}
                    Value::String(s) => println!("{} = \"{s}\"", Colors::key(key)),
                    other => println!("{} = {other}", Colors::key(key)),
                }
            }
        }
    }
}

/// Convert TOML value to JSON value
pub fn toml_value_to_json(toml: &toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number((*i).into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Array(arr) => Value::Array(arr.iter().map(toml_value_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), toml_value_to_json(value)))
                .collect(),
        ),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
    }
}
