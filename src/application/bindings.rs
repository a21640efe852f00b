//! Trigger wiring: maps named UI triggers to client actions, reading input fields at call time

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::session::controls;
use super::{ExchangeClient, PauseMonitor};

/// Input field ids
pub mod fields {
    pub const TOKEN_IN: &str = "token-in";
    pub const AMOUNT_IN: &str = "amount-in";
    pub const TOKEN_OUT: &str = "token-out";
    pub const MIN_AMOUNT_OUT: &str = "amount-out";
    pub const SLIPPAGE: &str = "slippage-rate";
    pub const TOKEN_A: &str = "token-a";
    pub const AMOUNT_A: &str = "amount-a";
    pub const TOKEN_B: &str = "token-b";
    pub const AMOUNT_B: &str = "amount-b";
    pub const REMOVE_TOKEN_A: &str = "remove-token-a";
    pub const REMOVE_TOKEN_B: &str = "remove-token-b";
    pub const LP_AMOUNT: &str = "lp-amount";
    pub const FEE_TOKEN: &str = "fee-token";
    pub const DEPOSIT_TOKEN: &str = "deposit-token";
    pub const DEPOSIT_AMOUNT: &str = "deposit-amount";
}

/// Read access to named input fields
pub trait InputSource: Send + Sync {
    /// Current value of `field`, empty when unset
    fn value(&self, field: &str) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    values: HashMap<String, String>,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }
}

impl InputSource for FormInputs {
    fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ConnectWallet,
    Swap,
    /// Input event on the amount-in field
    AmountInChanged,
    AddLiquidity,
    RemoveLiquidity,
    ClaimRewards,
    WithdrawFees,
    DepositToken,
}

impl Trigger {
    /// Resolve the trigger bound to a control or input element
    pub fn from_element(id: &str) -> Option<Self> {
        match id {
            controls::CONNECT_WALLET => Some(Trigger::ConnectWallet),
            controls::SWAP_BUTTON => Some(Trigger::Swap),
            fields::AMOUNT_IN => Some(Trigger::AmountInChanged),
            controls::ADD_LIQUIDITY_BUTTON => Some(Trigger::AddLiquidity),
            controls::REMOVE_LIQUIDITY_BUTTON => Some(Trigger::RemoveLiquidity),
            controls::CLAIM_REWARDS_BUTTON => Some(Trigger::ClaimRewards),
            controls::WITHDRAW_FEES_BUTTON => Some(Trigger::WithdrawFees),
            controls::DEPOSIT_BUTTON => Some(Trigger::DepositToken),
            _ => None,
        }
    }
}

pub struct Bindings {
    client: Arc<ExchangeClient>,
}

impl Bindings {
    pub fn new(client: Arc<ExchangeClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<ExchangeClient> {
        &self.client
    }

    /// Start the pause-state polling that runs for the lifetime of the bindings' owner
    pub fn start(&self, pause_check_interval: Duration) -> PauseMonitor {
        PauseMonitor::spawn(self.client.clone(), pause_check_interval)
    }

    pub async fn dispatch(&self, trigger: Trigger, inputs: &dyn InputSource) {
        debug!("trigger {:?}", trigger);
        let client = &self.client;

        match trigger {
            Trigger::ConnectWallet => client.connect().await,
            Trigger::AmountInChanged => {
                client
                    .quote(&inputs.value(fields::TOKEN_IN), &inputs.value(fields::AMOUNT_IN))
                    .await
            }
            Trigger::Swap => {
                client
                    .swap(
                        &inputs.value(fields::TOKEN_IN),
                        &inputs.value(fields::AMOUNT_IN),
                        &inputs.value(fields::TOKEN_OUT),
                        &inputs.value(fields::MIN_AMOUNT_OUT),
                        &inputs.value(fields::SLIPPAGE),
                    )
                    .await
            }
            Trigger::AddLiquidity => {
                client
                    .add_liquidity(
                        &inputs.value(fields::TOKEN_A),
                        &inputs.value(fields::AMOUNT_A),
                        &inputs.value(fields::TOKEN_B),
                        &inputs.value(fields::AMOUNT_B),
                    )
                    .await
            }
            Trigger::RemoveLiquidity => {
                client
                    .remove_liquidity(
                        &inputs.value(fields::REMOVE_TOKEN_A),
                        &inputs.value(fields::REMOVE_TOKEN_B),
                        &inputs.value(fields::LP_AMOUNT),
                    )
                    .await
            }
            Trigger::ClaimRewards => client.claim_rewards().await,
            Trigger::WithdrawFees => {
                client
                    .withdraw_protocol_fees(&inputs.value(fields::FEE_TOKEN))
                    .await
            }
            Trigger::DepositToken => {
                client
                    .deposit_token(
                        &inputs.value(fields::DEPOSIT_TOKEN),
                        &inputs.value(fields::DEPOSIT_AMOUNT),
                    )
                    .await
            }
        }
    }
}
