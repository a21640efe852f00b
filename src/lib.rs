//! mxswap - client for the MultiversX swap contract
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use application::{Bindings, ExchangeClient, PauseMonitor};
pub use domain::contract::{ContractRequest, RequestBuilder};
pub use infrastructure::{NetworkProvider, ProxyProvider};
pub use shared::config::ClientConfig;
