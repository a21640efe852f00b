//! Test doubles for the remote collaborators

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::application::ExchangeClient;
use crate::domain::contract::ContractRequest;
use crate::infrastructure::gateway::NetworkProvider;
use crate::infrastructure::surface::MemorySurface;
use crate::infrastructure::wallet::WalletConnector;
use crate::shared::config::ClientConfig;
use crate::shared::errors::{ProviderError, WalletError};
use crate::shared::types::{Address, QueryPayload, TxHash};

pub const CONTRACT: &str = "erd1qqqqqqqqqqqqqpgqd77fnev2sthnczp2lnfx0y5jdycynjfhzzgq6p3rax";
pub const ACCOUNT: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

pub fn config() -> ClientConfig {
    ClientConfig {
        contract_address: CONTRACT.to_string(),
        ..ClientConfig::default()
    }
}

/// Client wired to a recording provider and an in-memory surface
pub fn fixture(wallet: StaticWallet) -> (Arc<ExchangeClient>, Arc<RecordingProvider>, Arc<MemorySurface>) {
    let provider = Arc::new(RecordingProvider::new());
    let surface = Arc::new(MemorySurface::new());
    let client = Arc::new(ExchangeClient::new(
        &config(),
        provider.clone(),
        Arc::new(wallet),
        surface.clone(),
    ));
    (client, provider, surface)
}

/// Records every request and answers with a configurable payload or failure
#[derive(Default)]
pub struct RecordingProvider {
    queries: Mutex<Vec<ContractRequest>>,
    transactions: Mutex<Vec<ContractRequest>>,
    payload: Mutex<QueryPayload>,
    failure: Mutex<Option<String>>,
    gate: Option<Arc<Notify>>,
    pending: AtomicUsize,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions block until `gate` is notified
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn set_payload(&self, return_data: &[&str]) {
        *self.payload.lock().unwrap() =
            QueryPayload::new(return_data.iter().map(|s| s.to_string()).collect());
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn queries(&self) -> Vec<ContractRequest> {
        self.queries.lock().unwrap().clone()
    }

    pub fn transactions(&self) -> Vec<ContractRequest> {
        self.transactions.lock().unwrap().clone()
    }

    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkProvider for RecordingProvider {
    async fn query_contract(&self, request: &ContractRequest) -> Result<QueryPayload, ProviderError> {
        self.queries.lock().unwrap().push(request.clone());
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::Gateway(message));
        }
        Ok(self.payload.lock().unwrap().clone())
    }

    async fn send_transaction(&self, request: &ContractRequest) -> Result<TxHash, ProviderError> {
        let count = {
            let mut transactions = self.transactions.lock().unwrap();
            transactions.push(request.clone());
            transactions.len()
        };
        if let Some(gate) = &self.gate {
            self.pending.fetch_add(1, Ordering::SeqCst);
            gate.notified().await;
            self.pending.fetch_sub(1, Ordering::SeqCst);
        }
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::Rejected(message));
        }
        Ok(TxHash(format!("txhash-{}", count)))
    }
}

/// Wallet answering logins from a script; the last outcome repeats
pub struct StaticWallet {
    logins: Mutex<Vec<Result<Address, WalletError>>>,
}

impl StaticWallet {
    fn scripted(mut logins: Vec<Result<Address, WalletError>>) -> Self {
        logins.reverse();
        Self {
            logins: Mutex::new(logins),
        }
    }

    pub fn ok() -> Self {
        Self::scripted(vec![Ok(Address::new(ACCOUNT))])
    }

    pub fn failing(error: WalletError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    /// First login succeeds, every later one fails
    pub fn ok_then_failing(error: WalletError) -> Self {
        Self::scripted(vec![Ok(Address::new(ACCOUNT)), Err(error)])
    }
}

#[async_trait]
impl WalletConnector for StaticWallet {
    async fn login(&self) -> Result<Address, WalletError> {
        let mut logins = self.logins.lock().unwrap();
        if logins.len() > 1 {
            logins.pop().unwrap()
        } else {
            logins[0].clone()
        }
    }

    async fn logout(&self) -> Result<(), WalletError> {
        Ok(())
    }
}

/// Helpers for tests running on tokio's paused clock
pub mod paused {
    use std::time::Duration;

    /// Advance the clock and let woken tasks run
    pub async fn advance(duration: Duration) {
        tokio::time::advance(duration).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }
}
