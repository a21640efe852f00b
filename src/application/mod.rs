//! Application layer - exchange client, trigger bindings and CLI commands

pub mod bindings;
pub mod commands;
pub mod exchange_client;
pub mod pause_monitor;

#[cfg(test)]
pub(crate) mod testing;

pub use bindings::{Bindings, FormInputs, InputSource, Trigger};
pub use exchange_client::ExchangeClient;
pub use pause_monitor::PauseMonitor;
