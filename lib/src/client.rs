//! Library API - high-level client for authorising payments
//!
//! This module ties configuration, the request builder and the curl transport
//! together. Lower-level pieces stay usable on their own: build an
//! [`AuthoriseRequest`] directly and send it over any [`Transport`].

use crate::config::Config;
use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientBuilder, Transport};
use crate::message::{AuthoriseParameters, AuthoriseRequest, AuthoriseResponse, GatewayRequest};

/// Entry point for authorising payments with settings from a [`Config`].
///
/// Credentials and merchant account come from the config unless the
/// parameter bag already carries them.
///
/// # Example
/// ```no_run
/// # use adyen_lib::{AdyenClient, AuthoriseParameters};
/// # fn example() -> adyen_lib::Result<()> {
/// let client = AdyenClient::new()?.timeout(10);
///
/// let response = client.authorise(
///     AuthoriseParameters::new()
///         .with_amount_value(10)
///         .with_amount_currency("EUR")
///         .with_reference("order-1")
///         .with_encrypted_form("adyenjs_0_1_18$..."),
/// )?;
/// println!("{:?}", response.result_code());
/// # Ok(())
/// # }
/// ```
pub struct AdyenClient {
    config: Config,
    timeout: Option<u64>,
    user_agent: Option<String>,
    verbose: bool,
}

impl AdyenClient {
    /// Create a new AdyenClient by loading configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be found or parsed.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Create a new AdyenClient with the provided configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            timeout: None,
            user_agent: None,
            verbose: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the HTTP request timeout in seconds. Overrides the config value.
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set a custom User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Enable verbose curl output for debugging.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Build the authorise request for `params` without sending it.
    ///
    /// Missing credentials and merchant account are filled from the config.
    pub fn prepare_authorise(&self, mut params: AuthoriseParameters) -> Result<AuthoriseRequest> {
        params.fill_defaults(
            self.config.api_user.as_deref(),
            self.config.resolved_api_password(),
            self.config.merchant_account.as_deref(),
        );

        let mut request = AuthoriseRequest::from_config(&self.config)?;
        request.initialize(params);
        Ok(request)
    }

    /// Authorise a payment over a fresh curl transport.
    pub fn authorise(&self, params: AuthoriseParameters) -> Result<AuthoriseResponse> {
        let mut transport = self.configure_transport()?;
        self.authorise_with(params, &mut transport)
    }

    /// Authorise a payment over the given transport.
    pub fn authorise_with<T: Transport + ?Sized>(
        &self,
        params: AuthoriseParameters,
        transport: &mut T,
    ) -> Result<AuthoriseResponse> {
        let request = self.prepare_authorise(params)?;
        request.send(transport)
    }

    /// Configure a new HttpClient with the common settings
    fn configure_transport(&self) -> Result<HttpClient> {
        let timeout = self
            .timeout
            .or(self.config.timeout_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let mut builder = HttpClientBuilder::new()
            .verbose(self.verbose)
            .timeout(timeout);

        if let Some(ref ua) = self.user_agent {
            builder = builder.user_agent(ua);
        }

        builder.build()
    }
}
