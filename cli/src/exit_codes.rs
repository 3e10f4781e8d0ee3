//! Exit codes for the adyen CLI.
//!
//! Specific codes per error category make the tool easy to script around.

/// Exit codes for the adyen CLI.
///
/// These codes follow Unix conventions where possible:
/// - 0: Success
/// - 1: General error
/// - 2: Misuse of shell command (e.g., invalid arguments)
/// - 130: Script terminated by Ctrl+C (128 + SIGINT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution
    #[allow(dead_code)]
    Success = 0,

    /// General/unknown error
    GeneralError = 1,

    /// Invalid usage (bad arguments, malformed amounts)
    InvalidUsage = 2,

    /// Configuration error (missing config, invalid config)
    ConfigError = 3,

    /// The request never produced a response (connection, TLS, timeout)
    NetworkError = 4,

    /// The processor answered with something that is not JSON
    DecodeError = 5,

    /// Interrupted by signal (Ctrl+C)
    /// Standard Unix convention: 128 + signal number (SIGINT = 2)
    Interrupted = 130,
}

impl ExitCode {
    /// Convert to process exit code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit the process with this code
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl From<&anyhow::Error> for ExitCode {
    fn from(err: &anyhow::Error) -> Self {
        if let Some(adyen_err) = err.downcast_ref::<adyen_lib::AdyenError>() {
            return ExitCode::from(adyen_err);
        }

        let msg = err.to_string().to_lowercase();

        if msg.contains("timed out") || msg.contains("connection") {
            ExitCode::NetworkError
        } else if msg.contains("config") {
            ExitCode::ConfigError
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&adyen_lib::AdyenError> for ExitCode {
    fn from(err: &adyen_lib::AdyenError) -> Self {
        use adyen_lib::AdyenError;

        match err {
            AdyenError::ConfigMissing(_)
            | AdyenError::InvalidConfig(_)
            | AdyenError::NoConfigDir
            | AdyenError::TomlParse(_)
            | AdyenError::TomlSerialize(_) => ExitCode::ConfigError,

            AdyenError::InvalidAmount(_) | AdyenError::UnsupportedHttpMethod(_) => {
                ExitCode::InvalidUsage
            }

            AdyenError::Transport(_) | AdyenError::Curl(_) => ExitCode::NetworkError,

            AdyenError::Decode(_) | AdyenError::InvalidUtf8(_) => ExitCode::DecodeError,

            AdyenError::Json(_) | AdyenError::Io(_) => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adyen_lib::AdyenError;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::GeneralError.code(), 1);
        assert_eq!(ExitCode::DecodeError.code(), 5);
        assert_eq!(ExitCode::Interrupted.code(), 130);
    }

    #[test]
    fn test_exit_code_from_adyen_error() {
        assert_eq!(
            ExitCode::from(&AdyenError::config_missing("test")),
            ExitCode::ConfigError
        );
        assert_eq!(
            ExitCode::from(&AdyenError::InvalidAmount("ten".into())),
            ExitCode::InvalidUsage
        );
        assert_eq!(
            ExitCode::from(&AdyenError::transport("Connection refused")),
            ExitCode::NetworkError
        );

        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(
            ExitCode::from(&AdyenError::Decode(json_err)),
            ExitCode::DecodeError
        );
    }

    #[test]
    fn test_exit_code_survives_context() {
        use anyhow::Context;

        let result: Result<(), AdyenError> = Err(AdyenError::config_missing("no file"));
        let err = result.context("Failed to load configuration").unwrap_err();
        assert_eq!(ExitCode::from(&err), ExitCode::ConfigError);
    }
}
