//! Validating construction of contract requests

use crate::shared::errors::RequestError;
use crate::shared::types::Address;
use super::{CallData, ContractEndpoint, ContractRequest};

pub const MIN_GAS_LIMIT: u64 = 50_000;
pub const MAX_GAS_LIMIT: u64 = 600_000_000;

/// Builds [`ContractRequest`]s, checking every field before dispatch
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    receiver: Address,
    value: String,
    call: Option<CallData>,
    gas_limit: u64,
}

impl RequestBuilder {
    pub fn new(receiver: Address) -> Self {
        Self {
            receiver,
            value: "0".to_string(),
            call: None,
            gas_limit: 0,
        }
    }

    /// Preset call data and gas limit for a known endpoint
    pub fn for_endpoint<I, S>(receiver: Address, endpoint: ContractEndpoint, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(receiver)
            .call(CallData::new(endpoint.function_name()).args(args))
            .gas_limit(endpoint.gas_limit())
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn call(mut self, call: CallData) -> Self {
        self.call = Some(call);
        self
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn build(self) -> Result<ContractRequest, RequestError> {
        if self.receiver.as_str().trim().is_empty() {
            return Err(RequestError::MissingReceiver);
        }
        if self.value.is_empty() || !self.value.chars().all(|c| c.is_ascii_digit()) {
            return Err(RequestError::InvalidValue(self.value));
        }
        let call = self.call.ok_or(RequestError::MissingFunction)?;
        call.validate()?;
        if !(MIN_GAS_LIMIT..=MAX_GAS_LIMIT).contains(&self.gas_limit) {
            return Err(RequestError::GasLimitOutOfBounds {
                gas_limit: self.gas_limit,
                min: MIN_GAS_LIMIT,
                max: MAX_GAS_LIMIT,
            });
        }

        Ok(ContractRequest {
            value: self.value,
            data: call.encode(),
            receiver: self.receiver,
            gas_limit: self.gas_limit,
        })
    }
}
