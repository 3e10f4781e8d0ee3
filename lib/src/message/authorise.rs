//! The `authorise` action.

use super::parameters::{authorise_parameter_accessors, AuthoriseParameters};
use super::response::AuthoriseResponse;
use super::GatewayRequest;
use crate::amount::to_minor_units;
use crate::config::Config;
use crate::constants::JSON_CONTENT_TYPE;
use crate::error::{AdyenError, Result};
use crate::http::{HttpRequest, Transport};
use rust_decimal::Decimal;
use serde::Serialize;

/// Amount in minor units, e.g. `{"value": 1000, "currency": "EUR"}` for 10.00 EUR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount {
    pub value: i64,
    pub currency: Option<String>,
}

impl Amount {
    fn from_major(value: Option<Decimal>, currency: Option<&str>) -> Result<Self> {
        Ok(Self {
            value: to_minor_units(value.unwrap_or_default())?,
            currency: currency.map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdditionalData {
    /// Client-side encrypted card data
    #[serde(rename = "card.encrypted.json")]
    pub card_encrypted_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurring {
    pub contract: Option<String>,
    pub recurring_detail_name: Option<String>,
}

/// The document posted to the `authorise` endpoint.
///
/// `amount`, `reference`, `merchantAccount` and `additionalData` are always
/// present (as `null` when unset); the other sections only appear when one of
/// their inputs was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseData {
    pub amount: Amount,
    pub reference: Option<String>,
    pub merchant_account: Option<String>,
    pub additional_data: AdditionalData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
}

impl AuthoriseData {
    /// Map a parameter bag to the request document.
    ///
    /// A missing amount value counts as zero. Either half of a pair is enough
    /// to emit `additionalAmount` or `recurring`.
    pub fn from_parameters(params: &AuthoriseParameters) -> Result<Self> {
        let amount = Amount::from_major(params.amount_value(), params.amount_currency())?;

        let additional_amount = if params.additional_amount_value().is_some()
            || params.additional_amount_currency().is_some()
        {
            Some(Amount::from_major(
                params.additional_amount_value(),
                params.additional_amount_currency(),
            )?)
        } else {
            None
        };

        let recurring = if params.recurring_contract().is_some()
            || params.recurring_detail_name().is_some()
        {
            Some(Recurring {
                contract: params.recurring_contract().map(str::to_string),
                recurring_detail_name: params.recurring_detail_name().map(str::to_string),
            })
        } else {
            None
        };

        Ok(Self {
            amount,
            reference: params.reference().map(str::to_string),
            merchant_account: params.merchant_account().map(str::to_string),
            additional_data: AdditionalData {
                card_encrypted_json: params.encrypted_form().map(str::to_string),
            },
            additional_amount,
            recurring,
            shopper_reference: params.shopper_reference().map(str::to_string),
        })
    }
}

/// Builder and sender for one authorise call.
///
/// An instance serves a single request/response cycle. It is not meant to be
/// shared between threads while parameters are still being set.
///
/// # Example
/// ```
/// use adyen_lib::{AuthoriseParameters, AuthoriseRequest, GatewayRequest};
/// use serde_json::json;
///
/// let mut request = AuthoriseRequest::new("https://pal-test.adyen.com/pal/servlet/Payment/v12/authorise");
/// request.initialize(
///     AuthoriseParameters::new()
///         .with_amount_value(10)
///         .with_amount_currency("EUR")
///         .with_reference("order-1")
///         .with_merchant_account("ExampleECOM")
///         .with_encrypted_form("adyenjs_0_1_18$..."),
/// );
///
/// let data = serde_json::to_value(request.data().unwrap()).unwrap();
/// assert_eq!(data["amount"], json!({"value": 1000, "currency": "EUR"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoriseRequest {
    endpoint: String,
    parameters: AuthoriseParameters,
}

impl AuthoriseRequest {
    pub const METHOD_NAME: &'static str = "authorise";

    /// Create a request that will post to `endpoint`, with an empty parameter bag.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            parameters: AuthoriseParameters::default(),
        }
    }

    /// Create a request against the authorise endpoint of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.endpoint_for(Self::METHOD_NAME)?))
    }

    /// Replace the whole parameter bag.
    pub fn initialize(&mut self, parameters: AuthoriseParameters) -> &mut Self {
        self.parameters = parameters;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn parameters(&self) -> &AuthoriseParameters {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut AuthoriseParameters {
        &mut self.parameters
    }

    authorise_parameter_accessors!(.parameters);
}

impl GatewayRequest for AuthoriseRequest {
    type Data = AuthoriseData;
    type Response = AuthoriseResponse;

    fn method_name(&self) -> &'static str {
        Self::METHOD_NAME
    }

    fn data(&self) -> Result<AuthoriseData> {
        AuthoriseData::from_parameters(&self.parameters)
    }

    fn send_data<T: Transport + ?Sized>(
        &self,
        data: &AuthoriseData,
        transport: &mut T,
    ) -> Result<AuthoriseResponse> {
        let body = serde_json::to_vec(data).map_err(AdyenError::Json)?;

        if self.parameters.api_user().is_none() {
            tracing::warn!("sending authorise request without an API user");
        }

        let request = HttpRequest::post(&self.endpoint)
            .basic_auth(
                self.parameters.api_user().unwrap_or_default(),
                self.parameters.api_password().unwrap_or_default(),
            )
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body);

        tracing::debug!(
            endpoint = %self.endpoint,
            reference = data.reference.as_deref().unwrap_or("-"),
            amount = data.amount.value,
            "posting authorise request"
        );

        let response = transport.send(request)?;

        tracing::debug!(status = response.status_code, "authorise response received");

        AuthoriseResponse::from_http(&response)
    }
}
