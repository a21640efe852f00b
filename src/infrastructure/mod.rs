//! Infrastructure layer - gateway, wallet and display adapters

pub mod gateway;
pub mod surface;
pub mod wallet;

pub use gateway::{NetworkProvider, ProxyProvider};
pub use surface::{ConsoleSurface, DisplaySurface, MemorySurface};
pub use wallet::{AddressWallet, TransactionSigner, WalletConnector};
