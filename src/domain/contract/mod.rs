//! Contract domain - call encoding and request construction

mod call_data;
mod endpoints;
mod request_builder;

pub use call_data::{CallData, SEPARATOR};
pub use endpoints::{CallKind, ContractEndpoint};
pub use request_builder::{RequestBuilder, MAX_GAS_LIMIT, MIN_GAS_LIMIT};

use serde::Serialize;

use crate::shared::errors::RequestError;
use crate::shared::types::Address;

/// A single contract invocation, built fresh per call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRequest {
    pub value: String,
    pub data: String,
    pub receiver: Address,
    pub gas_limit: u64,
}

impl ContractRequest {
    pub fn builder(receiver: Address) -> RequestBuilder {
        RequestBuilder::new(receiver)
    }

    pub fn call_data(&self) -> Result<CallData, RequestError> {
        CallData::parse(&self.data)
    }
}
