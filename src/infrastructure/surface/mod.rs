//! Rendering surfaces the client pushes results to

pub mod console_surface;
pub mod memory_surface;

pub use console_surface::ConsoleSurface;
pub use memory_surface::MemorySurface;

use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::session::ControlState;

/// Display element ids
pub mod elements {
    pub const WALLET_INFO: &str = "wallet-info";
    pub const SWAP_RATE: &str = "swap-rate";
    pub const STATUS_MESSAGE: &str = "status-message";

    pub fn balance(token: &str) -> String {
        format!("balance-{}", token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::Success => f.write_str("success"),
            NoticeKind::Error => f.write_str("error"),
        }
    }
}

/// Transient message shown for a fixed duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id: crate::shared::utils::generate_id(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Named elements, trigger controls and notices
pub trait DisplaySurface: Send + Sync {
    fn set_text(&self, element: &str, text: &str);

    fn set_control(&self, control: &str, state: &ControlState);

    fn append_notice(&self, notice: &Notice);

    fn remove_notice(&self, id: &str);
}
