//! Error display helpers with actionable suggestions.

use crate::colors::Colors;
use adyen_lib::AdyenError;

/// Get a suggestion for how to fix an error, if available.
pub fn get_suggestion(err: &anyhow::Error) -> Option<String> {
    if let Some(adyen_err) = err.downcast_ref::<AdyenError>() {
        return get_adyen_error_suggestion(adyen_err);
    }

    let msg = err.to_string().to_lowercase();

    if msg.contains("already exists") {
        return Some("Pass --force to overwrite the existing file.".into());
    }

    if msg.contains("permission denied") {
        return Some("Check file permissions or run with appropriate privileges.".into());
    }

    None
}

/// Get suggestion for a specific AdyenError variant.
fn get_adyen_error_suggestion(err: &AdyenError) -> Option<String> {
    match err {
        AdyenError::ConfigMissing(msg) => {
            if msg.contains("live_endpoint_prefix") {
                Some(
                    "Find your live URL prefix in the Customer Area and set \
                     'live_endpoint_prefix' in the config file."
                        .into(),
                )
            } else {
                Some(format!(
                    "Run '{}' to create a config file.",
                    Colors::command("adyen config init --api-user <USER>")
                ))
            }
        }

        AdyenError::NoConfigDir => {
            Some("Could not determine home directory. Set ADYEN_CONFIG_DIR or HOME.".into())
        }

        AdyenError::InvalidConfig(_) | AdyenError::TomlParse(_) => Some(format!(
            "Run '{}' to check your configuration.",
            Colors::command("adyen config validate")
        )),

        AdyenError::InvalidAmount(_) => Some(
            "Amounts are given in major units, e.g. '10' or '12.34' for EUR 12.34.".into(),
        ),

        AdyenError::Transport(msg) => {
            if msg.to_lowercase().contains("timed out") {
                Some("The request timed out. Increase the timeout with --timeout.".into())
            } else {
                Some("Check your network connection and the configured endpoint.".into())
            }
        }

        AdyenError::Curl(e) if e.is_operation_timedout() => {
            Some("The request timed out. Increase the timeout with --timeout.".into())
        }

        AdyenError::Decode(_) => Some(
            "The endpoint did not answer with JSON. Check that 'endpoint' or \
             'environment' points at the payment API."
                .into(),
        ),

        _ => None,
    }
}

/// Format an error with its suggestion for display.
pub fn format_error_with_suggestion(err: &anyhow::Error) -> String {
    let mut output = format!("{} {err:#}", Colors::error("Error:"));

    if let Some(suggestion) = get_suggestion(err) {
        output.push_str(&format!("\n\n{}:\n", Colors::info("Suggestion")));
        output.push_str(&suggestion);
    }

    output
}
