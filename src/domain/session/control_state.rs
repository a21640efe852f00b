/// Enabled flag and label of a trigger control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    pub fn enabled(label: &str) -> Self {
        Self {
            enabled: true,
            label: label.to_string(),
        }
    }

    pub fn disabled(label: &str) -> Self {
        Self {
            enabled: false,
            label: label.to_string(),
        }
    }
}

/// Trigger control ids
pub mod controls {
    pub const CONNECT_WALLET: &str = "connect-wallet";
    pub const SWAP_BUTTON: &str = "swap-button";
    pub const ADD_LIQUIDITY_BUTTON: &str = "add-liquidity-button";
    pub const REMOVE_LIQUIDITY_BUTTON: &str = "remove-liquidity-button";
    pub const CLAIM_REWARDS_BUTTON: &str = "claim-rewards-button";
    pub const WITHDRAW_FEES_BUTTON: &str = "withdraw-fees-button";
    pub const DEPOSIT_BUTTON: &str = "deposit-button";
}

/// Default control labels
pub mod labels {
    pub const CONNECT: &str = "Connect Wallet";
    pub const SWAP: &str = "Swap";
    pub const PROCESSING: &str = "Processing...";
    pub const ADD_LIQUIDITY: &str = "Add Liquidity";
    pub const REMOVE_LIQUIDITY: &str = "Remove Liquidity";
    pub const CLAIM_REWARDS: &str = "Claim Rewards";
}
