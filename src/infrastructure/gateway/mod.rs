//! Remote provider capability and its gateway implementation

pub mod encoding;
pub mod proxy_provider;

pub use proxy_provider::ProxyProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::contract::ContractRequest;
use crate::shared::errors::ProviderError;
use crate::shared::types::{QueryPayload, TxHash};

/// Relays contract calls to the network
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Read-only call, no signature required
    async fn query_contract(&self, request: &ContractRequest) -> Result<QueryPayload, ProviderError>;

    /// Signed, state-changing call
    async fn send_transaction(&self, request: &ContractRequest) -> Result<TxHash, ProviderError>;
}

/// Transaction in the gateway's canonical field order, which is also the signing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayTransaction {
    pub nonce: u64,
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl GatewayTransaction {
    /// Bytes the wallet signs: the serialized transaction without its signature
    pub fn signing_payload(&self) -> Result<Vec<u8>, ProviderError> {
        let unsigned = GatewayTransaction {
            signature: None,
            ..self.clone()
        };
        serde_json::to_vec(&unsigned).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
