//! adyen CLI - authorise card payments from the command line

mod authorise_command;
mod cli;
mod colors;
mod config_commands;
mod config_utils;
mod errors;
mod exit_codes;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use cli::{Cli, ColorMode, Commands, ConfigCommands, Shell};
use colored::control;
use exit_codes::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() {
    // Ctrl+C during a blocking curl transfer should still exit promptly
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("Interrupted");
        std::process::exit(ExitCode::Interrupted.code());
    }) {
        eprintln!("Warning: failed to set Ctrl+C handler: {e}");
    }

    if let Err(e) = run() {
        eprintln!("{}", errors::format_error_with_suggestion(&e));
        ExitCode::from(&e).exit();
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);
    init_color_support(&cli);

    handle_command(&cli)
}

/// Handle CLI subcommands
fn handle_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Authorise(args) => authorise_command::authorise_command(cli, args),

        Commands::Config {
            command,
            output_format,
        } => match command {
            Some(ConfigCommands::Get { key, output_format }) => {
                config_commands::get_command(cli, key, *output_format)
            }
            Some(ConfigCommands::Validate) => config_commands::validate_command(cli),
            Some(ConfigCommands::Init {
                api_user,
                merchant_account,
                environment,
                live_endpoint_prefix,
                force,
            }) => config_commands::init_command(
                cli,
                api_user,
                merchant_account.as_deref(),
                *environment,
                live_endpoint_prefix.as_deref(),
                *force,
            ),
            None => config_commands::show_command(cli, *output_format),
        },

        Commands::Version => show_version(),

        Commands::Completions { shell } => generate_completions(*shell),
    }
}

/// Show version information
fn show_version() -> Result<()> {
    const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("adyen CLI: v{CLI_VERSION}");
    println!("adyen-lib: v{}", adyen_lib::VERSION);

    Ok(())
}

/// Generate shell completions
fn generate_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut stdout = std::io::stdout();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin_name, &mut stdout),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin_name, &mut stdout),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin_name, &mut stdout),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, bin_name, &mut stdout),
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for piped output. `RUST_LOG` wins over `-v`.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize color support based on user preference and NO_COLOR env var
fn init_color_support(cli: &Cli) {
    use std::io::IsTerminal;
    let no_color_env = std::env::var("NO_COLOR").is_ok();

    match cli.color {
        ColorMode::Always => control::set_override(true),
        ColorMode::Never => control::set_override(false),
        ColorMode::Auto => {
            if no_color_env || !std::io::stdout().is_terminal() {
                control::set_override(false);
            }
        }
    }
}
