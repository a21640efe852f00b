use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::contract::ContractRequest;
use crate::infrastructure::wallet::TransactionSigner;
use crate::shared::config::ClientConfig;
use crate::shared::errors::ProviderError;
use crate::shared::types::{QueryPayload, TxHash};
use super::encoding::{encode_argument, encode_call_data, encode_data_field};
use super::{GatewayTransaction, NetworkProvider};

const GAS_PRICE: u64 = 1_000_000_000;
const TX_VERSION: u32 = 1;

/// Envelope shared by every gateway response
#[derive(Debug, Deserialize)]
struct GatewayResponse<T> {
    data: Option<T>,
    #[serde(default)]
    error: String,
    code: String,
}

impl<T> GatewayResponse<T> {
    fn into_data(self) -> Result<T, ProviderError> {
        if self.code != "successful" {
            let message = if self.error.is_empty() { self.code } else { self.error };
            return Err(ProviderError::Gateway(message));
        }
        self.data
            .ok_or_else(|| ProviderError::Decode("response without data".to_string()))
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct VmQueryRequest {
    sc_address: String,
    func_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caller: Option<String>,
    value: String,
    args: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VmQueryData {
    data: VmOutput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VmOutput {
    #[serde(default)]
    return_data: Option<Vec<String>>,
    return_code: String,
    #[serde(default)]
    return_message: String,
}

#[derive(Debug, Deserialize)]
struct NonceData {
    nonce: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendData {
    tx_hash: String,
}

/// Gateway-backed provider
pub struct ProxyProvider {
    http_client: Client,
    base_url: String,
    chain_id: String,
    signer: Option<Arc<dyn TransactionSigner>>,
}

impl ProxyProvider {
    pub fn new(base_url: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            chain_id: chain_id.into(),
            signer: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.gateway_url.clone(), config.chain_id.clone())
    }

    /// Attach the wallet that signs outgoing transactions
    pub fn with_signer(mut self, signer: Arc<dyn TransactionSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    async fn account_nonce(&self, address: &str) -> Result<u64, ProviderError> {
        let url = format!("{}/address/{}/nonce", self.base_url, address);
        debug!("🔍 Fetching nonce from: {}", url);

        let response: GatewayResponse<NonceData> =
            self.http_client.get(&url).send().await?.json().await?;
        Ok(response.into_data()?.nonce)
    }

    fn query_body(request: &ContractRequest) -> Result<VmQueryRequest, ProviderError> {
        let call = request
            .call_data()
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(VmQueryRequest {
            sc_address: request.receiver.to_string(),
            func_name: call.function().to_string(),
            caller: None,
            value: request.value.clone(),
            args: call.arguments().iter().map(|a| encode_argument(a)).collect(),
        })
    }

    fn query_payload(response: GatewayResponse<VmQueryData>) -> Result<QueryPayload, ProviderError> {
        let output = response.into_data()?.data;
        if output.return_code != "ok" {
            return Err(ProviderError::QueryFailed {
                code: output.return_code,
                message: output.return_message,
            });
        }
        Ok(QueryPayload::new(output.return_data.unwrap_or_default()))
    }

    fn transaction(
        &self,
        request: &ContractRequest,
        sender: &str,
        nonce: u64,
    ) -> Result<GatewayTransaction, ProviderError> {
        let call = request
            .call_data()
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(GatewayTransaction {
            nonce,
            value: request.value.clone(),
            receiver: request.receiver.to_string(),
            sender: sender.to_string(),
            gas_price: GAS_PRICE,
            gas_limit: request.gas_limit,
            data: encode_data_field(&encode_call_data(&call)),
            chain_id: self.chain_id.clone(),
            version: TX_VERSION,
            signature: None,
        })
    }
}

#[async_trait]
impl NetworkProvider for ProxyProvider {
    async fn query_contract(&self, request: &ContractRequest) -> Result<QueryPayload, ProviderError> {
        let url = format!("{}/vm-values/query", self.base_url);
        let body = Self::query_body(request)?;
        debug!("🔍 Querying {} on {}", body.func_name, body.sc_address);

        let response: GatewayResponse<VmQueryData> = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        Self::query_payload(response)
    }

    async fn send_transaction(&self, request: &ContractRequest) -> Result<TxHash, ProviderError> {
        let signer = self.signer.as_ref().ok_or(ProviderError::NotAuthenticated)?;
        let sender = signer.address().await?;
        let nonce = self.account_nonce(sender.as_str()).await?;

        let mut transaction = self.transaction(request, sender.as_str(), nonce)?;
        let signature = signer.sign(&transaction.signing_payload()?).await?;
        transaction.signature = Some(signature);

        let url = format!("{}/transaction/send", self.base_url);
        let response: GatewayResponse<SendData> = self
            .http_client
            .post(&url)
            .json(&transaction)
            .send()
            .await?
            .json()
            .await?;

        let tx_hash = response
            .into_data()
            .map_err(|e| ProviderError::Rejected(e.to_string()))?
            .tx_hash;
        info!("🚀 Transaction sent: {}", tx_hash);
        Ok(TxHash(tx_hash))
    }
}
