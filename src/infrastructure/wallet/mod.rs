//! Wallet capabilities: login and transaction signing

pub mod address_wallet;

pub use address_wallet::AddressWallet;

use async_trait::async_trait;

use crate::shared::errors::WalletError;
use crate::shared::types::Address;

/// Authenticates the user and yields their account address
#[async_trait]
pub trait WalletConnector: Send + Sync {
    async fn login(&self) -> Result<Address, WalletError>;

    async fn logout(&self) -> Result<(), WalletError>;
}

/// Signs serialized transactions on behalf of the logged-in account
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn address(&self) -> Result<Address, WalletError>;

    /// Hex-encoded signature over `payload`
    async fn sign(&self, payload: &[u8]) -> Result<String, WalletError>;
}
