//! Error handling for the application

use thiserror::Error;

/// Request construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Receiver address is missing")]
    MissingReceiver,

    #[error("Function name is missing")]
    MissingFunction,

    #[error("Argument contains the reserved separator '@': {0}")]
    ReservedSeparator(String),

    #[error("Invalid value, expected a numeric string: {0}")]
    InvalidValue(String),

    #[error("Gas limit {gas_limit} outside of [{min}, {max}]")]
    GasLimitOutOfBounds { gas_limit: u64, min: u64, max: u64 },
}

/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("No wallet address configured")]
    NoAddress,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Wallet does not support signing")]
    SigningUnsupported,

    #[error("Login rejected: {0}")]
    Rejected(String),
}

/// Remote provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Query failed ({code}): {message}")]
    QueryFailed { code: String, message: String },

    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("No signer attached, authenticate first")]
    NotAuthenticated,

    #[error("Failed to decode gateway response: {0}")]
    Decode(String),

    #[error("Signing failed: {0}")]
    Signing(#[from] WalletError),
}

/// Errors surfaced by the exchange client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Unexpected outcome for {0}")]
    UnexpectedOutcome(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}
