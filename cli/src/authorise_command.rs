//! The `authorise` subcommand

use crate::cli::{AuthoriseArgs, Cli, OutputFormat};
use crate::colors::Colors;
use crate::config_utils::load_config;
use crate::output::{print_authorise_response, print_structured};
use adyen_lib::amount::parse_amount;
use adyen_lib::{AdyenClient, AuthoriseParameters, Config, GatewayRequest};
use anyhow::{Context, Result};

/// Turn command-line flags into a parameter bag.
///
/// Credentials and merchant account left unset here are filled from the
/// config by the client.
pub fn build_parameters(args: &AuthoriseArgs) -> Result<AuthoriseParameters> {
    let mut params = AuthoriseParameters::new()
        .with_amount_value(parse_amount(&args.amount)?)
        .with_amount_currency(&args.currency)
        .with_reference(&args.reference)
        .with_encrypted_form(&args.encrypted_form);

    if let Some(amount) = &args.additional_amount {
        params.set_additional_amount_value(parse_amount(amount)?);
    }

    if let Some(currency) = &args.additional_currency {
        params.set_additional_amount_currency(currency);
    }
    if let Some(account) = &args.merchant_account {
        params.set_merchant_account(account);
    }
    if let Some(contract) = &args.recurring_contract {
        params.set_recurring_contract(contract);
    }
    if let Some(name) = &args.recurring_detail_name {
        params.set_recurring_detail_name(name);
    }
    if let Some(shopper) = &args.shopper_reference {
        params.set_shopper_reference(shopper);
    }
    if let Some(user) = &args.api_user {
        params.set_api_user(user);
    }

    Ok(params)
}

pub fn authorise_command(cli: &Cli, args: &AuthoriseArgs) -> Result<()> {
    // A dry run only renders the document, so it works without a config file.
    let config = if args.dry_run {
        Config::load_or_default(cli.config.as_ref()).context("Failed to load configuration")?
    } else {
        load_config(cli.config.as_ref())?
    };

    let mut client = AdyenClient::with_config(config)
        .user_agent(format!("adyen-cli/{}", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = args.timeout {
        client = client.timeout(timeout);
    }
    if cli.verbosity >= 3 {
        client = client.verbose();
    }

    let params = build_parameters(args)?;

    if args.dry_run {
        let request = client.prepare_authorise(params)?;
        let data = request.data()?;
        let format = args.output_format.resolve();
        if format == OutputFormat::Text {
            println!("{} {}", Colors::key("POST"), request.endpoint());
            println!();
        }
        return print_structured(&data, format);
    }

    let response = client.authorise(params)?;
    tracing::info!(status = response.status_code(), "authorise completed");

    print_authorise_response(&response, args.output_format)
}
