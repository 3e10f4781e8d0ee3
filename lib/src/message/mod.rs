//! Processor messages: building request documents and sending them.
//!
//! Each processor action is a [`GatewayRequest`]. Building the document
//! ([`GatewayRequest::data`]) never touches the network; sending it
//! ([`GatewayRequest::send_data`]) performs exactly one exchange over a
//! borrowed [`Transport`].

pub mod authorise;
pub mod parameters;
pub mod response;

use crate::error::Result;
use crate::http::Transport;
use serde::Serialize;

pub use authorise::{AdditionalData, Amount, AuthoriseData, AuthoriseRequest, Recurring};
pub use parameters::AuthoriseParameters;
pub use response::AuthoriseResponse;

/// A single processor action.
pub trait GatewayRequest {
    /// The JSON document posted to the processor
    type Data: Serialize;
    /// What a decoded reply looks like
    type Response;

    /// Action name, also the last path segment of the endpoint URL.
    fn method_name(&self) -> &'static str;

    /// Build the request document from the current parameters.
    fn data(&self) -> Result<Self::Data>;

    /// Post an already built document and decode the reply.
    fn send_data<T: Transport + ?Sized>(
        &self,
        data: &Self::Data,
        transport: &mut T,
    ) -> Result<Self::Response>;

    /// Build the document and send it.
    fn send<T: Transport + ?Sized>(&self, transport: &mut T) -> Result<Self::Response> {
        let data = self.data()?;
        self.send_data(&data, transport)
    }
}
