//! Integration tests for building authorise request documents

use adyen_lib::{AuthoriseParameters, AuthoriseRequest, GatewayRequest};
use rust_decimal::Decimal;
use serde_json::{json, Value};

const ENDPOINT: &str = "https://pal-test.adyen.com/pal/servlet/Payment/v12/authorise";

fn basic_parameters() -> AuthoriseParameters {
    AuthoriseParameters::new()
        .with_amount_value(10)
        .with_amount_currency("CURRENCY")
        .with_reference("REFERENCE")
        .with_merchant_account("MERCHANT")
        .with_encrypted_form("FORM")
}

fn basic_document() -> Value {
    json!({
        "amount": {"value": 1000, "currency": "CURRENCY"},
        "reference": "REFERENCE",
        "merchantAccount": "MERCHANT",
        "additionalData": {"card.encrypted.json": "FORM"},
    })
}

fn document_for(params: AuthoriseParameters) -> Value {
    let mut request = AuthoriseRequest::new(ENDPOINT);
    request.initialize(params);
    serde_json::to_value(request.data().expect("data should build")).unwrap()
}

fn with_fields(mut base: Value, extra: Value) -> Value {
    let target = base.as_object_mut().unwrap();
    for (key, value) in extra.as_object().unwrap() {
        target.insert(key.clone(), value.clone());
    }
    base
}

#[test]
fn test_data_with_basic_parameters() {
    assert_eq!(document_for(basic_parameters()), basic_document());
}

#[test]
fn test_data_with_optional_sections() {
    struct TestCase {
        name: &'static str,
        params: AuthoriseParameters,
        expected: Value,
    }

    let test_cases = vec![
        TestCase {
            name: "additional amount",
            params: basic_parameters()
                .with_amount_value(0)
                .with_additional_amount_value(200)
                .with_additional_amount_currency("CURRENCY2"),
            expected: with_fields(
                basic_document(),
                json!({
                    "amount": {"value": 0, "currency": "CURRENCY"},
                    "additionalAmount": {"value": 20000, "currency": "CURRENCY2"},
                }),
            ),
        },
        TestCase {
            name: "recurring",
            params: basic_parameters()
                .with_recurring_contract("RecurringContract")
                .with_recurring_detail_name("RecurringDetailName"),
            expected: with_fields(
                basic_document(),
                json!({
                    "recurring": {
                        "contract": "RecurringContract",
                        "recurringDetailName": "RecurringDetailName",
                    },
                }),
            ),
        },
        TestCase {
            name: "shopper reference",
            params: basic_parameters().with_shopper_reference("ShopperReference"),
            expected: with_fields(
                basic_document(),
                json!({"shopperReference": "ShopperReference"}),
            ),
        },
        TestCase {
            name: "all sections",
            params: basic_parameters()
                .with_additional_amount_value(200)
                .with_additional_amount_currency("CURRENCY2")
                .with_recurring_contract("RecurringContract")
                .with_recurring_detail_name("RecurringDetailName")
                .with_shopper_reference("ShopperReference"),
            expected: with_fields(
                basic_document(),
                json!({
                    "additionalAmount": {"value": 20000, "currency": "CURRENCY2"},
                    "recurring": {
                        "contract": "RecurringContract",
                        "recurringDetailName": "RecurringDetailName",
                    },
                    "shopperReference": "ShopperReference",
                }),
            ),
        },
    ];

    for case in test_cases {
        assert_eq!(
            document_for(case.params),
            case.expected,
            "case '{}' produced an unexpected document",
            case.name
        );
    }
}

#[test]
fn test_credentials_never_appear_in_document() {
    let document = document_for(
        basic_parameters()
            .with_api_user("USER")
            .with_api_password("PASSWORD"),
    );
    assert_eq!(document, basic_document());
}

#[test]
fn test_data_is_repeatable() {
    let mut request = AuthoriseRequest::new(ENDPOINT);
    request.initialize(basic_parameters().with_shopper_reference("ShopperReference"));

    let first = request.data().unwrap();
    let second = request.data().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_initialize_replaces_previous_parameters() {
    let mut request = AuthoriseRequest::new(ENDPOINT);
    request.initialize(basic_parameters().with_shopper_reference("ShopperReference"));
    request.initialize(basic_parameters());

    assert_eq!(request.shopper_reference(), None);
    assert_eq!(
        serde_json::to_value(request.data().unwrap()).unwrap(),
        basic_document()
    );
}

#[test]
fn test_amount_scaling() {
    let cases: [(Decimal, i64); 5] = [
        (Decimal::from(10), 1000),
        (Decimal::ZERO, 0),
        (Decimal::new(1050, 2), 1050),
        (Decimal::new(1, 2), 1),
        (Decimal::from(123_456_789), 12_345_678_900),
    ];

    for (major, minor) in cases {
        let document = document_for(basic_parameters().with_amount_value(major));
        assert_eq!(document["amount"]["value"], json!(minor), "scaling {major}");
    }
}

/// `set_x(v)` followed by `x()` hands back exactly `v`.
macro_rules! assert_set_get_identity {
    ($setter:ident, $getter:ident, $value:expr) => {{
        let mut request = AuthoriseRequest::new(ENDPOINT);
        assert_eq!(request.$getter(), None, "{} should start unset", stringify!($getter));
        request.$setter($value);
        assert_eq!(request.$getter(), Some($value), "{} should round-trip", stringify!($getter));
    }};
}

#[test]
fn test_string_parameters_set_get_identity() {
    assert_set_get_identity!(set_amount_currency, amount_currency, "MyAmountCurrency");
    assert_set_get_identity!(set_reference, reference, "MyReference");
    assert_set_get_identity!(set_merchant_account, merchant_account, "MyMerchantAccount");
    assert_set_get_identity!(set_encrypted_form, encrypted_form, "MyEncryptedForm");
    assert_set_get_identity!(
        set_additional_amount_currency,
        additional_amount_currency,
        "MyAmountCurrency"
    );
    assert_set_get_identity!(set_recurring_contract, recurring_contract, "MyRecurringContract");
    assert_set_get_identity!(
        set_recurring_detail_name,
        recurring_detail_name,
        "MyRecurringDetailName"
    );
    assert_set_get_identity!(set_shopper_reference, shopper_reference, "MyShopperReference");
    assert_set_get_identity!(set_api_user, api_user, "MyApiUser");
    assert_set_get_identity!(set_api_password, api_password, "MyApiPassword");
}

#[test]
fn test_decimal_parameters_set_get_identity() {
    let values = [
        Decimal::ZERO,
        Decimal::from(10),
        Decimal::new(1999, 2),
        Decimal::new(-5, 1),
        Decimal::new(10005, 3),
    ];

    for value in values {
        let mut request = AuthoriseRequest::new(ENDPOINT);
        request.set_amount_value(value);
        request.set_additional_amount_value(value);
        assert_eq!(request.amount_value(), Some(value));
        assert_eq!(request.additional_amount_value(), Some(value));
        // scale is preserved, not normalised
        assert_eq!(request.amount_value().unwrap().scale(), value.scale());
    }
}

#[test]
fn test_parameters_after_initialize() {
    let params: AuthoriseParameters = serde_json::from_value(json!({
        "amountValue": "12.50",
        "amountCurrency": "MyAmountCurrency",
        "additionalAmountValue": 3,
        "additionalAmountCurrency": "MyAdditionalAmountCurrency",
        "recurringContract": "MyRecurringContract",
        "recurringDetailName": "MyRecurringDetailName",
        "shopperReference": "MyShopperReference",
        "reference": "MyReference",
        "encryptedForm": "MyEncryptedForm",
    }))
    .unwrap();

    let mut request = AuthoriseRequest::new(ENDPOINT);
    request.initialize(params);

    assert_eq!(request.amount_value(), Some(Decimal::new(1250, 2)));
    assert_eq!(request.amount_currency(), Some("MyAmountCurrency"));
    assert_eq!(request.additional_amount_value(), Some(Decimal::from(3)));
    assert_eq!(
        request.additional_amount_currency(),
        Some("MyAdditionalAmountCurrency")
    );
    assert_eq!(request.recurring_contract(), Some("MyRecurringContract"));
    assert_eq!(request.recurring_detail_name(), Some("MyRecurringDetailName"));
    assert_eq!(request.shopper_reference(), Some("MyShopperReference"));
    assert_eq!(request.reference(), Some("MyReference"));
    assert_eq!(request.encrypted_form(), Some("MyEncryptedForm"));
}

#[test]
fn test_method_name_is_constant() {
    let empty = AuthoriseRequest::new(ENDPOINT);
    assert_eq!(empty.method_name(), "authorise");

    let mut full = AuthoriseRequest::new(ENDPOINT);
    full.initialize(basic_parameters().with_shopper_reference("ShopperReference"));
    assert_eq!(full.method_name(), "authorise");
    assert_eq!(AuthoriseRequest::METHOD_NAME, "authorise");
}
