//! Watch-only wallet backed by a configured address

use async_trait::async_trait;
use tracing::{info, warn};

use crate::shared::errors::WalletError;
use crate::shared::types::Address;
use super::{TransactionSigner, WalletConnector};

/// Logs in with a fixed bech32 address. It holds no keys, so signing is refused
/// and transactions have to go through an external signer.
pub struct AddressWallet {
    address: Option<String>,
}

impl AddressWallet {
    pub fn new(address: Option<String>) -> Self {
        Self { address }
    }

    fn resolve(&self) -> Result<Address, WalletError> {
        let raw = self.address.as_deref().ok_or(WalletError::NoAddress)?;
        Address::parse(raw)
    }
}

#[async_trait]
impl WalletConnector for AddressWallet {
    async fn login(&self) -> Result<Address, WalletError> {
        let address = self.resolve()?;
        info!("🔑 Logged in as {}", address);
        Ok(address)
    }

    async fn logout(&self) -> Result<(), WalletError> {
        Ok(())
    }
}

#[async_trait]
impl TransactionSigner for AddressWallet {
    async fn address(&self) -> Result<Address, WalletError> {
        self.resolve()
    }

    async fn sign(&self, _payload: &[u8]) -> Result<String, WalletError> {
        warn!("⚠️ Watch-only wallet cannot sign transactions");
        Err(WalletError::SigningUnsupported)
    }
}
