//! CLI commands and handlers
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::application::bindings::{fields, Bindings, FormInputs, Trigger};
use crate::application::ExchangeClient;
use crate::infrastructure::{AddressWallet, ConsoleSurface, ProxyProvider};
use crate::shared::config::ClientConfig;
use crate::shared::errors::AppError;

#[derive(Parser)]
#[command(name = "mxswap")]
#[command(version, about = "MultiversX swap contract client")]
pub struct Cli {
    /// Path to config file (optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Swap contract address (overrides config and CONTRACT_ADDRESS)
    #[arg(long, global = true)]
    pub contract_address: Option<String>,

    /// Gateway URL (overrides config and PROXY_URL)
    #[arg(long, global = true)]
    pub gateway_url: Option<String>,

    /// Chain ID (overrides config and CHAIN_ID)
    #[arg(long, global = true)]
    pub chain_id: Option<String>,

    /// Wallet address to log in with (overrides config and WALLET_ADDRESS)
    #[arg(long, global = true)]
    pub wallet_address: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// CLI flags take priority over the loaded configuration
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(address) = &self.contract_address {
            config.contract_address = address.clone();
        }
        if let Some(url) = &self.gateway_url {
            config.gateway_url = url.clone();
        }
        if let Some(chain_id) = &self.chain_id {
            config.chain_id = chain_id.clone();
        }
        if let Some(wallet) = &self.wallet_address {
            config.wallet_address = Some(wallet.clone());
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in with the configured wallet
    Connect,

    /// Query the swap rate for an input amount
    Quote {
        #[arg(long)]
        token_in: String,
        #[arg(long)]
        amount_in: String,
    },

    /// Swap tokens
    Swap {
        #[arg(long)]
        token_in: String,
        #[arg(long)]
        amount_in: String,
        #[arg(long)]
        token_out: String,
        /// Minimum acceptable output amount
        #[arg(long)]
        min_amount_out: String,
        /// Slippage tolerance in percent
        #[arg(long, default_value = "1")]
        slippage: String,
    },

    /// Add liquidity to a pair
    AddLiquidity {
        #[arg(long)]
        token_a: String,
        #[arg(long)]
        amount_a: String,
        #[arg(long)]
        token_b: String,
        #[arg(long)]
        amount_b: String,
    },

    /// Burn LP tokens for the underlying pair
    RemoveLiquidity {
        #[arg(long)]
        token_a: String,
        #[arg(long)]
        token_b: String,
        #[arg(long)]
        lp_amount: String,
    },

    /// Claim LP rewards
    ClaimRewards,

    /// Withdraw accumulated protocol fees (owner only)
    WithdrawFees {
        #[arg(long)]
        token: String,
    },

    /// Deposit a token into the contract
    Deposit {
        #[arg(long)]
        token: String,
        #[arg(long)]
        amount: String,
    },

    /// Show the contract's pool balance of each token
    Balance {
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Check once whether the contract is paused
    PauseStatus,

    /// Poll the pause state until Ctrl-C
    Watch {
        /// Stop after this many seconds
        #[arg(short, long)]
        duration: Option<u64>,
    },

    /// Show the effective configuration
    Status,
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(command: Commands, config: ClientConfig) -> Result<(), AppError> {
        let bindings = Self::bindings(&config);
        let mut inputs = FormInputs::new();

        let trigger = match command {
            Commands::Connect => Trigger::ConnectWallet,
            Commands::Quote { token_in, amount_in } => {
                inputs.set(fields::TOKEN_IN, token_in);
                inputs.set(fields::AMOUNT_IN, amount_in);
                Trigger::AmountInChanged
            }
            Commands::Swap { token_in, amount_in, token_out, min_amount_out, slippage } => {
                inputs.set(fields::TOKEN_IN, token_in);
                inputs.set(fields::AMOUNT_IN, amount_in);
                inputs.set(fields::TOKEN_OUT, token_out);
                inputs.set(fields::MIN_AMOUNT_OUT, min_amount_out);
                inputs.set(fields::SLIPPAGE, slippage);
                Trigger::Swap
            }
            Commands::AddLiquidity { token_a, amount_a, token_b, amount_b } => {
                inputs.set(fields::TOKEN_A, token_a);
                inputs.set(fields::AMOUNT_A, amount_a);
                inputs.set(fields::TOKEN_B, token_b);
                inputs.set(fields::AMOUNT_B, amount_b);
                Trigger::AddLiquidity
            }
            Commands::RemoveLiquidity { token_a, token_b, lp_amount } => {
                inputs.set(fields::REMOVE_TOKEN_A, token_a);
                inputs.set(fields::REMOVE_TOKEN_B, token_b);
                inputs.set(fields::LP_AMOUNT, lp_amount);
                Trigger::RemoveLiquidity
            }
            Commands::ClaimRewards => Trigger::ClaimRewards,
            Commands::WithdrawFees { token } => {
                inputs.set(fields::FEE_TOKEN, token);
                Trigger::WithdrawFees
            }
            Commands::Deposit { token, amount } => {
                inputs.set(fields::DEPOSIT_TOKEN, token);
                inputs.set(fields::DEPOSIT_AMOUNT, amount);
                Trigger::DepositToken
            }
            Commands::Balance { tokens } => {
                let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
                bindings.client().refresh_balances(&tokens).await;
                return Ok(());
            }
            Commands::PauseStatus => {
                bindings.client().check_pause_state().await;
                return Ok(());
            }
            Commands::Watch { duration } => {
                return Self::execute_watch_command(&bindings, &config, duration).await;
            }
            Commands::Status => return Self::execute_status_command(&config),
        };

        // state-changing actions need a session first
        if !matches!(trigger, Trigger::ConnectWallet | Trigger::AmountInChanged) {
            bindings.dispatch(Trigger::ConnectWallet, &inputs).await;
        }
        bindings.dispatch(trigger, &inputs).await;
        Ok(())
    }

    fn bindings(config: &ClientConfig) -> Bindings {
        let wallet = Arc::new(AddressWallet::new(config.wallet_address.clone()));
        let provider = Arc::new(ProxyProvider::from_config(config).with_signer(wallet.clone()));
        let client = ExchangeClient::new(config, provider, wallet, Arc::new(ConsoleSurface::new()));
        Bindings::new(Arc::new(client))
    }

    async fn execute_watch_command(
        bindings: &Bindings,
        config: &ClientConfig,
        duration: Option<u64>,
    ) -> Result<(), AppError> {
        info!("🚀 Watching pause state of {}", config.contract_address);
        let monitor = bindings.start(config.pause_check_interval());

        match duration {
            Some(secs) => {
                info!("⏱️  Watching for {} seconds", secs);
                tokio::select! {
                    _ = tokio::time::sleep(Duration::from_secs(secs)) => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            None => {
                tokio::signal::ctrl_c().await?;
            }
        }

        monitor.stop().await;
        info!("✅ Watch finished");
        Ok(())
    }

    fn execute_status_command(config: &ClientConfig) -> Result<(), AppError> {
        info!("📊 Client status:");
        info!("   Version: {}", env!("CARGO_PKG_VERSION"));
        info!("   Contract: {}", config.contract_address);
        info!("   Gateway: {}", config.gateway_url);
        info!("   Chain ID: {}", config.chain_id);
        info!(
            "   Wallet: {}",
            config.wallet_address.as_deref().unwrap_or("not configured")
        );
        info!("   Pause check interval: {}s", config.pause_check_interval_secs);
        Ok(())
    }
}
