//! HTTP transport abstraction and its curl implementation.

use crate::error::{AdyenError, Result};
use base64::Engine;
use curl::easy::{Easy2, Handler, WriteError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns the method as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Returns true if this method typically has a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = AdyenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(AdyenError::UnsupportedHttpMethod(s.to_string())),
        }
    }
}

/// A fully described outbound request, independent of the transport that sends it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Add a header. Names are kept as given; lookups are case-insensitive.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add an `Authorization: Basic` header for the given credentials.
    #[must_use]
    pub fn basic_auth(self, user: &str, password: &str) -> Self {
        let token = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
        self.header("Authorization", format!("Basic {token}"))
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get a header value by name (case-insensitive). The last one set wins.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the `Authorization: Basic` header back into `(user, password)`.
    pub fn basic_auth_credentials(&self) -> Option<(String, String)> {
        let token = self.get_header("Authorization")?.strip_prefix("Basic ")?;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(token)
            .ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (user, password) = decoded.split_once(':')?;
        Some((user.to_string(), password.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    pub status_code: u32,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Convert the response body to a UTF-8 string.
    ///
    /// # Errors
    /// Returns an error if the body is not valid UTF-8.
    pub fn body_string(&self) -> Result<String> {
        Ok(String::from_utf8(self.body.clone())?)
    }

    /// Get a header value by name (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.get(&name.to_lowercase())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Something that can perform one HTTP exchange.
///
/// Senders borrow a transport for the duration of a call. The curl-backed
/// [`HttpClient`] is the production implementation; tests substitute doubles.
pub trait Transport {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

struct ResponseHandler {
    data: Vec<u8>,
    headers: HashMap<String, String>,
}

impl ResponseHandler {
    fn new() -> Self {
        Self {
            data: Vec::new(),
            headers: HashMap::new(),
        }
    }
}

impl Handler for ResponseHandler {
    fn write(&mut self, data: &[u8]) -> std::result::Result<usize, WriteError> {
        self.data.extend_from_slice(data);
        Ok(data.len())
    }

    fn header(&mut self, header: &[u8]) -> bool {
        if let Ok(header_str) = std::str::from_utf8(header) {
            if let Some((key, value)) = header_str.split_once(':') {
                self.headers
                    .insert(key.trim().to_lowercase(), value.trim().to_string());
            }
        }
        true
    }
}

/// Builder for configuring HTTP clients.
///
/// This provides a fluent API for setting up an HttpClient with various options.
#[must_use]
pub struct HttpClientBuilder {
    verbose: bool,
    timeout: Option<u64>,
    follow_redirects: bool,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
}

impl HttpClientBuilder {
    /// Create a new HTTP client builder with default settings.
    pub fn new() -> Self {
        Self {
            verbose: false,
            timeout: None,
            follow_redirects: false,
            user_agent: None,
            headers: Vec::new(),
        }
    }

    /// Enable verbose curl output for debugging.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set request timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Enable following HTTP redirects.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Set custom User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add multiple headers at once.
    pub fn headers(mut self, headers: &[(String, String)]) -> Self {
        self.headers.extend_from_slice(headers);
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<HttpClient> {
        let mut client = HttpClient::new()?;

        if self.verbose {
            client.curl.verbose(true)?;
        }

        if let Some(timeout) = self.timeout {
            client
                .curl
                .timeout(std::time::Duration::from_secs(timeout))?;
        }

        if self.follow_redirects {
            client.curl.follow_location(true)?;
        }

        if let Some(ref ua) = self.user_agent {
            client.curl.useragent(ua)?;
        }

        client.default_headers = self.headers;

        Ok(client)
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking HTTP client over a single curl handle.
pub struct HttpClient {
    curl: Easy2<ResponseHandler>,
    default_headers: Vec<(String, String)>,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            curl: Easy2::new(ResponseHandler::new()),
            default_headers: Vec::new(),
        })
    }

    fn apply_headers(&mut self, request_headers: &[(String, String)]) -> Result<()> {
        let mut list = curl::easy::List::new();
        for (name, value) in self.default_headers.iter().chain(request_headers) {
            list.append(&format!("{name}: {value}"))?;
        }
        self.curl.http_headers(list)?;
        Ok(())
    }

    fn apply_body(&mut self, body: Option<&[u8]>) -> Result<()> {
        if let Some(data) = body {
            self.curl.post_field_size(data.len() as u64)?;
            self.curl.post_fields_copy(data)?;
        }
        Ok(())
    }

    /// Perform the request and return the response
    fn perform(&mut self) -> Result<HttpResponse> {
        self.curl.perform()?;

        let status_code = self.curl.response_code()?;

        let handler = self.curl.get_mut();

        Ok(HttpResponse {
            status_code,
            headers: std::mem::take(&mut handler.headers),
            body: std::mem::take(&mut handler.data),
        })
    }
}

impl Transport for HttpClient {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse> {
        self.curl.url(&request.url)?;
        self.apply_headers(&request.headers)?;

        match request.method {
            HttpMethod::Get => {
                self.curl.get(true)?;
            }
            HttpMethod::Post => {
                self.curl.post(true)?;
                self.apply_body(request.body.as_deref())?;
            }
            HttpMethod::Put => {
                self.curl.custom_request("PUT")?;
                self.apply_body(request.body.as_deref())?;
            }
            HttpMethod::Delete => {
                self.curl.custom_request("DELETE")?;
            }
        }

        self.perform()
    }
}
