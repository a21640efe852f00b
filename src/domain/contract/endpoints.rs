//! Swap contract endpoints and their gas ceilings

/// Whether an endpoint is a read-only query or a signed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Query,
    Transaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractEndpoint {
    GetSwapRate,
    GetBalance,
    IsContractPaused,
    SwapTokens,
    AddLiquidity,
    RemoveLiquidity,
    ClaimRewards,
    WithdrawProtocolFees,
    DepositToken,
}

impl ContractEndpoint {
    pub fn function_name(&self) -> &'static str {
        match self {
            ContractEndpoint::GetSwapRate => "getSwapRate",
            ContractEndpoint::GetBalance => "getBalance",
            ContractEndpoint::IsContractPaused => "isContractPaused",
            ContractEndpoint::SwapTokens => "swapTokens",
            ContractEndpoint::AddLiquidity => "addLiquidity",
            ContractEndpoint::RemoveLiquidity => "removeLiquidity",
            ContractEndpoint::ClaimRewards => "claimRewards",
            ContractEndpoint::WithdrawProtocolFees => "withdrawProtocolFees",
            ContractEndpoint::DepositToken => "depositToken",
        }
    }

    pub fn gas_limit(&self) -> u64 {
        match self {
            ContractEndpoint::GetSwapRate
            | ContractEndpoint::GetBalance
            | ContractEndpoint::IsContractPaused => 5_000_000,
            ContractEndpoint::SwapTokens | ContractEndpoint::AddLiquidity => 10_000_000,
            ContractEndpoint::RemoveLiquidity => 8_000_000,
            ContractEndpoint::ClaimRewards
            | ContractEndpoint::WithdrawProtocolFees
            | ContractEndpoint::DepositToken => 6_000_000,
        }
    }

    pub fn kind(&self) -> CallKind {
        match self {
            ContractEndpoint::GetSwapRate
            | ContractEndpoint::GetBalance
            | ContractEndpoint::IsContractPaused => CallKind::Query,
            _ => CallKind::Transaction,
        }
    }
}
