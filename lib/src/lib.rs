//! adyen-lib - Library for authorising payments with the Adyen payment API
//!
//! This library builds the JSON document for the `authorise` action from a
//! typed parameter bag, posts it with basic authentication over an injectable
//! transport, and decodes the reply.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod message;

pub use config::{Config, ConfigBuilder, Environment};
pub use error::{AdyenError, Result};

pub mod client;
pub use client::AdyenClient;

pub use http::{HttpClient, HttpClientBuilder, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use message::{
    AuthoriseData, AuthoriseParameters, AuthoriseRequest, AuthoriseResponse, GatewayRequest,
};
