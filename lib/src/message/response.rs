//! Decoded processor replies.

use crate::error::{AdyenError, Result};
use crate::http::HttpResponse;
use serde_json::Value;

/// Reply to an authorise call.
///
/// Holds the decoded JSON body as-is. Whether the payment was authorised is
/// for the caller to judge from the fields; nothing here interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoriseResponse {
    status_code: u32,
    data: Value,
}

impl AuthoriseResponse {
    pub fn new(status_code: u32, data: Value) -> Self {
        Self { status_code, data }
    }

    /// Decode an HTTP reply. The status code is kept but not checked.
    ///
    /// # Errors
    /// Returns `AdyenError::Decode` if the body is not valid JSON.
    pub fn from_http(response: &HttpResponse) -> Result<Self> {
        let data = serde_json::from_slice(&response.body).map_err(AdyenError::Decode)?;
        Ok(Self::new(response.status_code, data))
    }

    /// The decoded body.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn status_code(&self) -> u32 {
        self.status_code
    }

    /// Top-level field of the body, if the body is an object and has it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Processor's unique reference for this payment
    pub fn psp_reference(&self) -> Option<&str> {
        self.get_str("pspReference")
    }

    /// e.g. `Authorised`, `Refused`, `Error`
    pub fn result_code(&self) -> Option<&str> {
        self.get_str("resultCode")
    }

    pub fn refusal_reason(&self) -> Option<&str> {
        self.get_str("refusalReason")
    }

    pub fn auth_code(&self) -> Option<&str> {
        self.get_str("authCode")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn http(status_code: u32, body: &str) -> HttpResponse {
        HttpResponse {
            status_code,
            body: body.as_bytes().to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_decodes_body() {
        let response = AuthoriseResponse::from_http(&http(200, r#"{"ok": true}"#)).unwrap();
        assert_eq!(response.data()["ok"], json!(true));
        assert_eq!(response.status_code(), 200);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = AuthoriseResponse::from_http(&http(200, "<html>oops</html>")).unwrap_err();
        assert!(matches!(err, AdyenError::Decode(_)));
    }

    #[test]
    fn test_empty_body_is_decode_error() {
        let err = AuthoriseResponse::from_http(&http(500, "")).unwrap_err();
        assert!(matches!(err, AdyenError::Decode(_)));
    }

    #[test]
    fn test_error_status_is_not_interpreted() {
        let body = r#"{"status":422,"errorCode":"101","message":"Invalid card number"}"#;
        let response = AuthoriseResponse::from_http(&http(422, body)).unwrap();
        assert_eq!(response.status_code(), 422);
        assert_eq!(response.get("errorCode"), Some(&json!("101")));
    }

    #[test]
    fn test_field_lookups() {
        let response = AuthoriseResponse::new(
            200,
            json!({
                "pspReference": "8815329842815468",
                "resultCode": "Refused",
                "refusalReason": "CVC Declined",
            }),
        );
        assert_eq!(response.psp_reference(), Some("8815329842815468"));
        assert_eq!(response.result_code(), Some("Refused"));
        assert_eq!(response.refusal_reason(), Some("CVC Declined"));
        assert_eq!(response.auth_code(), None);
    }

    #[test]
    fn test_lookups_on_non_object_body() {
        let response = AuthoriseResponse::new(200, json!([1, 2, 3]));
        assert_eq!(response.get("resultCode"), None);
        assert_eq!(response.result_code(), None);
    }
}
