//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::WalletError;

const BECH32_HRP: &str = "erd1";
const BECH32_ADDRESS_LEN: usize = 62;
const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Bech32 account or contract address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap an address without checking its shape
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse and check the `erd1` prefix, length and charset
    pub fn parse(value: &str) -> Result<Self, WalletError> {
        let value = value.trim();
        if !value.starts_with(BECH32_HRP) || value.len() != BECH32_ADDRESS_LEN {
            return Err(WalletError::InvalidAddress(value.to_string()));
        }
        if !value[BECH32_HRP.len()..].chars().all(|c| BECH32_CHARSET.contains(c)) {
            return Err(WalletError::InvalidAddress(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash of a transaction accepted by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw return data of a read-only contract call, base64 entries as sent by the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPayload {
    pub return_data: Vec<String>,
}

impl QueryPayload {
    pub fn new(return_data: Vec<String>) -> Self {
        Self { return_data }
    }

    /// A payload is truthy when its first entry carries a non-zero byte.
    /// Booleans are top-encoded, so `false` comes back as an empty entry.
    pub fn is_truthy(&self) -> bool {
        use base64::Engine;

        let Some(first) = self.return_data.first() else {
            return false;
        };
        match base64::engine::general_purpose::STANDARD.decode(first) {
            Ok(bytes) => bytes.iter().any(|b| *b != 0),
            Err(_) => !first.is_empty(),
        }
    }
}

impl fmt::Display for QueryPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.return_data.join("@"))
    }
}

/// Result of dispatching a contract request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Query(QueryPayload),
    Transaction(TxHash),
}
