//! Session domain - connected account and trigger control state

mod control_state;

pub use control_state::{ControlState, controls, labels};

use std::collections::HashMap;

use crate::shared::types::Address;

/// State owned by the exchange client: the session and every trigger's control state
#[derive(Debug, Clone)]
pub struct ClientState {
    account: Option<Address>,
    controls: HashMap<&'static str, ControlState>,
}

impl ClientState {
    pub fn new() -> Self {
        let controls = [
            (controls::CONNECT_WALLET, ControlState::enabled(labels::CONNECT)),
            (controls::SWAP_BUTTON, ControlState::disabled(labels::SWAP)),
            (controls::ADD_LIQUIDITY_BUTTON, ControlState::enabled(labels::ADD_LIQUIDITY)),
            (controls::REMOVE_LIQUIDITY_BUTTON, ControlState::enabled(labels::REMOVE_LIQUIDITY)),
            (controls::CLAIM_REWARDS_BUTTON, ControlState::enabled(labels::CLAIM_REWARDS)),
        ]
        .into_iter()
        .collect();

        Self {
            account: None,
            controls,
        }
    }

    pub fn account(&self) -> Option<&Address> {
        self.account.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn sign_in(&mut self, account: Address) {
        self.account = Some(account);
    }

    pub fn sign_out(&mut self) {
        self.account = None;
    }

    pub fn control(&self, id: &str) -> Option<&ControlState> {
        self.controls.get(id)
    }

    /// Update a control and return its new state; unknown ids are ignored
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> Option<ControlState> {
        let control = self.controls.get_mut(id)?;
        control.enabled = enabled;
        Some(control.clone())
    }

    pub fn set_label(&mut self, id: &str, label: &str) -> Option<ControlState> {
        let control = self.controls.get_mut(id)?;
        control.label = label.to_string();
        Some(control.clone())
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}
