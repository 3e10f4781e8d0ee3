//! The parameter bag an authorise request is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Generates a getter, a setter and a consuming builder for each parameter.
///
/// `[$($path)*]` is the field path from `self` to the bag, so the same
/// accessors can be emitted on the bag and on types that wrap it.
macro_rules! parameter_accessors {
    ([$($path:tt)*] string $field:ident, $setter:ident, $builder:ident) => {
        pub fn $field(&self) -> Option<&str> {
            self$($path)*.$field.as_deref()
        }

        pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
            self$($path)*.$field = Some(value.into());
            self
        }

        #[must_use]
        pub fn $builder(mut self, value: impl Into<String>) -> Self {
            self$($path)*.$field = Some(value.into());
            self
        }
    };
    ([$($path:tt)*] decimal $field:ident, $setter:ident, $builder:ident) => {
        pub fn $field(&self) -> Option<rust_decimal::Decimal> {
            self$($path)*.$field
        }

        pub fn $setter(&mut self, value: impl Into<rust_decimal::Decimal>) -> &mut Self {
            self$($path)*.$field = Some(value.into());
            self
        }

        #[must_use]
        pub fn $builder(mut self, value: impl Into<rust_decimal::Decimal>) -> Self {
            self$($path)*.$field = Some(value.into());
            self
        }
    };
}

/// Accessors for every authorise parameter, emitted against the bag at `[$($path)*]`.
macro_rules! authorise_parameter_accessors {
    ($($path:tt)*) => {
        $crate::message::parameters::parameter_accessors!([$($path)*] decimal amount_value, set_amount_value, with_amount_value);
        $crate::message::parameters::parameter_accessors!([$($path)*] string amount_currency, set_amount_currency, with_amount_currency);
        $crate::message::parameters::parameter_accessors!([$($path)*] string reference, set_reference, with_reference);
        $crate::message::parameters::parameter_accessors!([$($path)*] string merchant_account, set_merchant_account, with_merchant_account);
        $crate::message::parameters::parameter_accessors!([$($path)*] string encrypted_form, set_encrypted_form, with_encrypted_form);
        $crate::message::parameters::parameter_accessors!([$($path)*] decimal additional_amount_value, set_additional_amount_value, with_additional_amount_value);
        $crate::message::parameters::parameter_accessors!([$($path)*] string additional_amount_currency, set_additional_amount_currency, with_additional_amount_currency);
        $crate::message::parameters::parameter_accessors!([$($path)*] string recurring_contract, set_recurring_contract, with_recurring_contract);
        $crate::message::parameters::parameter_accessors!([$($path)*] string recurring_detail_name, set_recurring_detail_name, with_recurring_detail_name);
        $crate::message::parameters::parameter_accessors!([$($path)*] string shopper_reference, set_shopper_reference, with_shopper_reference);
        $crate::message::parameters::parameter_accessors!([$($path)*] string api_user, set_api_user, with_api_user);
        $crate::message::parameters::parameter_accessors!([$($path)*] string api_password, set_api_password, with_api_password);
    };
}

pub(crate) use authorise_parameter_accessors;
pub(crate) use parameter_accessors;

/// Named inputs of an authorise call.
///
/// Every parameter is optional; nothing is validated here. The field names
/// deserialize from the processor's camelCase names, so a flat JSON or TOML
/// mapping such as `{"amountValue": 10, "reference": "R1"}` loads directly.
///
/// ```
/// use adyen_lib::AuthoriseParameters;
///
/// let params = AuthoriseParameters::new()
///     .with_amount_value(10)
///     .with_amount_currency("EUR")
///     .with_reference("order-1");
/// assert_eq!(params.amount_currency(), Some("EUR"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthoriseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) amount_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) amount_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) merchant_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) encrypted_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) additional_amount_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) additional_amount_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) recurring_contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) recurring_detail_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) shopper_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) api_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) api_password: Option<String>,
}

impl AuthoriseParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    authorise_parameter_accessors!();

    /// Fill credentials and merchant account from defaults where this bag has none.
    pub fn fill_defaults(
        &mut self,
        api_user: Option<&str>,
        api_password: Option<&str>,
        merchant_account: Option<&str>,
    ) -> &mut Self {
        fn fill(slot: &mut Option<String>, default: Option<&str>) {
            if slot.is_none() {
                *slot = default.map(str::to_string);
            }
        }

        fill(&mut self.api_user, api_user);
        fill(&mut self.api_password, api_password);
        fill(&mut self.merchant_account, merchant_account);
        self
    }
}

// The card payload and password stay out of logs and panic messages.
impl std::fmt::Debug for AuthoriseParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &str = "<redacted>";
        f.debug_struct("AuthoriseParameters")
            .field("amount_value", &self.amount_value)
            .field("amount_currency", &self.amount_currency)
            .field("reference", &self.reference)
            .field("merchant_account", &self.merchant_account)
            .field("encrypted_form", &self.encrypted_form.as_ref().map(|_| REDACTED))
            .field("additional_amount_value", &self.additional_amount_value)
            .field("additional_amount_currency", &self.additional_amount_currency)
            .field("recurring_contract", &self.recurring_contract)
            .field("recurring_detail_name", &self.recurring_detail_name)
            .field("shopper_reference", &self.shopper_reference)
            .field("api_user", &self.api_user)
            .field("api_password", &self.api_password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_mapping() {
        let params: AuthoriseParameters = serde_json::from_value(serde_json::json!({
            "amountValue": 10,
            "amountCurrency": "CURRENCY",
            "reference": "REFERENCE",
            "merchantAccount": "MERCHANT",
            "encryptedForm": "FORM",
            "apiUser": "USER",
        }))
        .unwrap();

        assert_eq!(params.amount_value(), Some(Decimal::from(10)));
        assert_eq!(params.amount_currency(), Some("CURRENCY"));
        assert_eq!(params.merchant_account(), Some("MERCHANT"));
        assert_eq!(params.api_user(), Some("USER"));
        assert_eq!(params.shopper_reference(), None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_parameter() {
        let result = serde_json::from_value::<AuthoriseParameters>(serde_json::json!({
            "amountVal": 10,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_setter_chaining() {
        let mut params = AuthoriseParameters::new();
        params
            .set_amount_value(Decimal::new(1250, 2))
            .set_amount_currency("EUR")
            .set_shopper_reference("shopper-42");

        assert_eq!(params.amount_value(), Some(Decimal::new(1250, 2)));
        assert_eq!(params.amount_currency(), Some("EUR"));
        assert_eq!(params.shopper_reference(), Some("shopper-42"));
    }

    #[test]
    fn test_fill_defaults_keeps_explicit_values() {
        let mut params = AuthoriseParameters::new().with_merchant_account("Explicit");
        params.fill_defaults(Some("USER"), Some("PASSWORD"), Some("FromConfig"));

        assert_eq!(params.merchant_account(), Some("Explicit"));
        assert_eq!(params.api_user(), Some("USER"));
        assert_eq!(params.api_password(), Some("PASSWORD"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let params = AuthoriseParameters::new()
            .with_encrypted_form("adyenjs_0_1_18$secret")
            .with_api_password("hunter2");
        let debug = format!("{params:?}");
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
