use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Custom styles for CLI help output
fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Output format for CLI commands.
///
/// - `Auto`: Automatically detect based on terminal (text for TTY, JSON for pipes)
/// - `Text`: Human-readable text output
/// - `Json`: JSON output for scripting and agents
/// - `Yaml`: YAML output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Auto-detect: JSON if piped, text if terminal
    #[default]
    Auto,
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
    /// YAML output
    Yaml,
}

impl OutputFormat {
    /// Resolve `Auto` to a concrete format based on terminal detection.
    ///
    /// Returns `Text` if stdout is a terminal (interactive use),
    /// returns `Json` if stdout is not a terminal (piped/scripted use).
    pub fn resolve(self) -> Self {
        match self {
            OutputFormat::Auto => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "adyen")]
#[command(about = "Authorise card payments against the Adyen payment API", long_about = None)]
#[command(version)]
#[command(styles = styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short = 'C', long = "config", value_name = "PATH", global = true)]
    pub config: Option<String>,

    // Display Options
    /// Verbosity level (can be used multiple times: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbosity", action = clap::ArgAction::Count, global = true, help_heading = "Display Options")]
    pub verbosity: u8,

    /// Control color output
    #[arg(
        long,
        value_name = "MODE",
        default_value = "auto",
        global = true,
        help_heading = "Display Options"
    )]
    pub color: ColorMode,

    /// Do not print log messages (aliases: -s, --silent)
    #[arg(
        short = 'q',
        long = "quiet",
        visible_short_alias = 's',
        visible_alias = "silent",
        global = true,
        help_heading = "Display Options"
    )]
    pub quiet: bool,
}

impl Cli {
    /// Default `tracing` filter for the chosen verbosity; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbosity {
            0 => "warn",
            1 => "adyen_lib=info,adyen=info",
            2 => "adyen_lib=debug,adyen=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authorise a payment
    #[command(
        alias = "a",
        after_help = "\
Examples:
  adyen authorise --amount 10 --currency EUR --reference order-1 --encrypted-form \"$FORM\"
  adyen authorise --amount 10 --currency EUR --reference order-1 --encrypted-form \"$FORM\" --dry-run
  adyen authorise ... --recurring-contract RECURRING --shopper-reference shopper-42"
    )]
    Authorise(AuthoriseArgs),

    /// Manage configuration
    #[command(
        alias = "c",
        args_conflicts_with_subcommands = true,
        after_help = "\
Examples:
  adyen config                         # Show current config
  adyen config get merchant_account    # Get specific value
  adyen config validate                # Check config is valid
  adyen config init --api-user ws@Company.Example --merchant-account ExampleECOM"
    )]
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,

        /// Output format for config display (when no subcommand is given)
        #[arg(long, value_name = "FORMAT", default_value = "text")]
        output_format: OutputFormat,
    },

    /// Show version information
    #[command(alias = "v")]
    Version,

    /// Generate shell completions script
    #[command(alias = "com")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AuthoriseArgs {
    /// Amount in major currency units (e.g. 10 or 12.34)
    #[arg(long, value_name = "AMOUNT", help_heading = "Payment")]
    pub amount: String,

    /// ISO 4217 currency code
    #[arg(long, value_name = "CODE", help_heading = "Payment")]
    pub currency: String,

    /// Your unique reference for this payment
    #[arg(long, value_name = "REFERENCE", help_heading = "Payment")]
    pub reference: String,

    /// Client-side encrypted card data
    #[arg(
        long,
        value_name = "DATA",
        env = "ADYEN_ENCRYPTED_FORM",
        hide_env_values = true,
        help_heading = "Payment"
    )]
    pub encrypted_form: String,

    /// Merchant account (defaults to the configured one)
    #[arg(long, value_name = "ACCOUNT", help_heading = "Payment")]
    pub merchant_account: Option<String>,

    /// Additional amount in major currency units
    #[arg(long, value_name = "AMOUNT", help_heading = "Optional Sections")]
    pub additional_amount: Option<String>,

    /// Currency of the additional amount
    #[arg(long, value_name = "CODE", help_heading = "Optional Sections")]
    pub additional_currency: Option<String>,

    /// Recurring contract type (e.g. ONECLICK, RECURRING)
    #[arg(long, value_name = "CONTRACT", help_heading = "Optional Sections")]
    pub recurring_contract: Option<String>,

    /// Name of a stored recurring detail
    #[arg(long, value_name = "NAME", help_heading = "Optional Sections")]
    pub recurring_detail_name: Option<String>,

    /// Your reference for the shopper
    #[arg(long, value_name = "REFERENCE", help_heading = "Optional Sections")]
    pub shopper_reference: Option<String>,

    /// Web service user (overrides the config file)
    #[arg(
        long,
        value_name = "USER",
        env = "ADYEN_API_USER",
        help_heading = "Connection"
    )]
    pub api_user: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", help_heading = "Connection")]
    pub timeout: Option<u64>,

    /// Print the request document without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (auto detects: text for terminal, json for pipes)
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub output_format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g. merchant_account, environment)
        key: String,
        /// Output format
        #[arg(long, value_name = "FORMAT", default_value = "text")]
        output_format: OutputFormat,
    },
    /// Validate the configuration file
    Validate,
    /// Write a new configuration file
    Init {
        /// Web service user
        #[arg(long, value_name = "USER")]
        api_user: String,
        /// Default merchant account
        #[arg(long, value_name = "ACCOUNT")]
        merchant_account: Option<String>,
        /// Platform to use
        #[arg(long, value_enum, default_value = "test")]
        environment: EnvironmentArg,
        /// Live URL prefix (required with --environment live)
        #[arg(long, value_name = "PREFIX")]
        live_endpoint_prefix: Option<String>,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentArg {
    Test,
    Live,
}

impl From<EnvironmentArg> for adyen_lib::Environment {
    fn from(env: EnvironmentArg) -> Self {
        match env {
            EnvironmentArg::Test => adyen_lib::Environment::Test,
            EnvironmentArg::Live => adyen_lib::Environment::Live,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
