//! Exchange client façade: one method per user-facing action

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::domain::contract::{CallKind, ContractEndpoint, ContractRequest, RequestBuilder};
use crate::domain::session::{controls, labels, ClientState, ControlState};
use crate::infrastructure::gateway::NetworkProvider;
use crate::infrastructure::surface::{elements, DisplaySurface, Notice, NoticeKind};
use crate::infrastructure::wallet::WalletConnector;
use crate::shared::config::ClientConfig;
use crate::shared::errors::{ClientError, RequestError};
use crate::shared::types::{Address, Outcome, QueryPayload, TxHash};
use crate::shared::utils::shorten_address;

pub const PAUSED_MESSAGE: &str = "Contract is paused";

/// Translates UI intents into contract calls and renders the results
pub struct ExchangeClient {
    contract: Address,
    notice_duration: Duration,
    provider: Arc<dyn NetworkProvider>,
    wallet: Arc<dyn WalletConnector>,
    surface: Arc<dyn DisplaySurface>,
    state: Arc<RwLock<ClientState>>,
}

impl ExchangeClient {
    pub fn new(
        config: &ClientConfig,
        provider: Arc<dyn NetworkProvider>,
        wallet: Arc<dyn WalletConnector>,
        surface: Arc<dyn DisplaySurface>,
    ) -> Self {
        let state = ClientState::new();
        for id in [
            controls::CONNECT_WALLET,
            controls::SWAP_BUTTON,
            controls::ADD_LIQUIDITY_BUTTON,
            controls::REMOVE_LIQUIDITY_BUTTON,
            controls::CLAIM_REWARDS_BUTTON,
        ] {
            if let Some(control) = state.control(id) {
                surface.set_control(id, control);
            }
        }

        Self {
            contract: config.contract(),
            notice_duration: config.notice_duration(),
            provider,
            wallet,
            surface,
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn account(&self) -> Option<Address> {
        self.state.read().await.account().cloned()
    }

    pub async fn control(&self, id: &str) -> Option<ControlState> {
        self.state.read().await.control(id).cloned()
    }

    /// Log in through the wallet. Failures leave the session empty.
    pub async fn connect(&self) {
        match self.wallet.login().await {
            Ok(address) => {
                self.surface.set_text(
                    elements::WALLET_INFO,
                    &format!("Connected: {}", shorten_address(address.as_str())),
                );
                self.state.write().await.sign_in(address);
                self.set_enabled(controls::SWAP_BUTTON, true).await;
            }
            Err(e) => {
                error!("Failed to connect wallet: {}", e);
                self.clear_session().await;
            }
        }
    }

    pub async fn disconnect(&self) {
        if let Err(e) = self.wallet.logout().await {
            error!("Failed to disconnect wallet: {}", e);
        }
        self.clear_session().await;
    }

    /// Query and display the swap rate; empty inputs are a no-op
    pub async fn quote(&self, token_in: &str, amount_in: &str) {
        if token_in.is_empty() || amount_in.is_empty() {
            return;
        }

        match self.query(ContractEndpoint::GetSwapRate, [token_in, amount_in]).await {
            Ok(payload) => self.surface.set_text(elements::SWAP_RATE, &payload.to_string()),
            Err(e) => error!("Failed to get swap rate: {}", e),
        }
    }

    pub async fn swap(
        &self,
        token_in: &str,
        amount_in: &str,
        token_out: &str,
        min_amount_out: &str,
        slippage: &str,
    ) {
        self.set_enabled(controls::SWAP_BUTTON, false).await;
        self.set_label(controls::SWAP_BUTTON, labels::PROCESSING).await;

        let result = self
            .submit(
                ContractEndpoint::SwapTokens,
                [token_in, amount_in, token_out, min_amount_out, slippage],
            )
            .await;

        match result {
            Ok(_) => {
                self.notify(NoticeKind::Success, "Swap successful!");
                self.refresh_balances(&[token_in, token_out]).await;
            }
            Err(e) => self.notify(NoticeKind::Error, format!("Swap failed: {}", e)),
        }

        self.set_enabled(controls::SWAP_BUTTON, true).await;
        self.set_label(controls::SWAP_BUTTON, labels::SWAP).await;
    }

    pub async fn add_liquidity(&self, token_a: &str, amount_a: &str, token_b: &str, amount_b: &str) {
        if let Err(e) = self
            .submit(ContractEndpoint::AddLiquidity, [token_a, amount_a, token_b, amount_b])
            .await
        {
            error!("Failed to add liquidity: {}", e);
        }
    }

    pub async fn remove_liquidity(&self, token_a: &str, token_b: &str, lp_amount: &str) {
        if let Err(e) = self
            .submit(ContractEndpoint::RemoveLiquidity, [token_a, token_b, lp_amount])
            .await
        {
            error!("Failed to remove liquidity: {}", e);
        }
    }

    pub async fn claim_rewards(&self) {
        if let Err(e) = self.submit(ContractEndpoint::ClaimRewards, Vec::<String>::new()).await {
            error!("Failed to claim rewards: {}", e);
        }
    }

    pub async fn withdraw_protocol_fees(&self, token_id: &str) {
        if let Err(e) = self.submit(ContractEndpoint::WithdrawProtocolFees, [token_id]).await {
            error!("Failed to withdraw fees: {}", e);
        }
    }

    pub async fn deposit_token(&self, token_id: &str, amount: &str) {
        if let Err(e) = self.submit(ContractEndpoint::DepositToken, [token_id, amount]).await {
            error!("Failed to deposit token: {}", e);
        }
    }

    /// Query the contract's pool balance of each token and render it raw
    pub async fn refresh_balances(&self, tokens: &[&str]) {
        let queries = tokens
            .iter()
            .filter(|token| !token.is_empty())
            .map(move |token| async move {
                (*token, self.query(ContractEndpoint::GetBalance, [*token]).await)
            });

        for (token, result) in futures::future::join_all(queries).await {
            match result {
                Ok(payload) => self
                    .surface
                    .set_text(&elements::balance(token), &payload.to_string()),
                Err(e) => error!("Failed to refresh {} balance: {}", token, e),
            }
        }
    }

    /// Disable swapping and show the status message when the contract is paused
    pub async fn check_pause_state(&self) {
        match self.query(ContractEndpoint::IsContractPaused, Vec::<String>::new()).await {
            Ok(payload) if payload.is_truthy() => {
                self.set_enabled(controls::SWAP_BUTTON, false).await;
                self.surface.set_text(elements::STATUS_MESSAGE, PAUSED_MESSAGE);
            }
            Ok(_) => debug!("Contract is active"),
            Err(e) => error!("Failed to check contract status: {}", e),
        }
    }

    fn request<I, S>(&self, endpoint: ContractEndpoint, args: I) -> Result<ContractRequest, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RequestBuilder::for_endpoint(self.contract.clone(), endpoint, args).build()
    }

    async fn call<I, S>(&self, endpoint: ContractEndpoint, args: I) -> Result<Outcome, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = self.request(endpoint, args)?;
        debug!("📝 {} (gas {})", request.data, request.gas_limit);

        match endpoint.kind() {
            CallKind::Query => Ok(Outcome::Query(self.provider.query_contract(&request).await?)),
            CallKind::Transaction => {
                if !self.state.read().await.is_connected() {
                    return Err(ClientError::NotConnected);
                }
                let tx_hash = self.provider.send_transaction(&request).await?;
                info!("🚀 {} sent: {}", endpoint.function_name(), tx_hash);
                Ok(Outcome::Transaction(tx_hash))
            }
        }
    }

    async fn query<I, S>(&self, endpoint: ContractEndpoint, args: I) -> Result<QueryPayload, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.call(endpoint, args).await? {
            Outcome::Query(payload) => Ok(payload),
            Outcome::Transaction(_) => {
                Err(ClientError::UnexpectedOutcome(endpoint.function_name().to_string()))
            }
        }
    }

    async fn submit<I, S>(&self, endpoint: ContractEndpoint, args: I) -> Result<TxHash, ClientError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.call(endpoint, args).await? {
            Outcome::Transaction(tx_hash) => Ok(tx_hash),
            Outcome::Query(_) => {
                Err(ClientError::UnexpectedOutcome(endpoint.function_name().to_string()))
            }
        }
    }

    async fn clear_session(&self) {
        self.state.write().await.sign_out();
        self.surface.set_text(elements::WALLET_INFO, "");
        self.set_enabled(controls::SWAP_BUTTON, false).await;
    }

    async fn set_enabled(&self, id: &str, enabled: bool) {
        let updated = self.state.write().await.set_enabled(id, enabled);
        if let Some(control) = updated {
            self.surface.set_control(id, &control);
        }
    }

    async fn set_label(&self, id: &str, label: &str) {
        let updated = self.state.write().await.set_label(id, label);
        if let Some(control) = updated {
            self.surface.set_control(id, &control);
        }
    }

    /// Show a notice and remove it once the display duration has passed
    fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice::new(kind, message);
        self.surface.append_notice(&notice);

        let surface = self.surface.clone();
        let duration = self.notice_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            surface.remove_notice(&notice.id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{fixture, paused, RecordingProvider, StaticWallet, ACCOUNT, CONTRACT};
    use crate::infrastructure::surface::MemorySurface;
    use crate::shared::errors::WalletError;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_connect_enables_swap() {
        let (client, _provider, surface) = fixture(StaticWallet::ok());
        assert!(!client.control(controls::SWAP_BUTTON).await.unwrap().enabled);

        client.connect().await;

        assert_eq!(client.account().await.unwrap().as_str(), ACCOUNT);
        assert!(client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert_eq!(surface.text(elements::WALLET_INFO).unwrap(), "Connected: erd1qy...r6th");
        assert!(surface.control(controls::SWAP_BUTTON).unwrap().enabled);
    }

    #[tokio::test]
    async fn test_connect_failure_leaves_session_empty() {
        let (client, _provider, surface) =
            fixture(StaticWallet::failing(WalletError::Rejected("user closed popup".into())));

        client.connect().await;

        assert!(client.account().await.is_none());
        assert!(!client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert_eq!(surface.text(elements::WALLET_INFO).unwrap_or_default(), "");
        assert!(surface.notices().is_empty());
    }

    #[tokio::test]
    async fn test_failed_reconnect_resets_ui() {
        let (client, _provider, surface) =
            fixture(StaticWallet::ok_then_failing(WalletError::Rejected("session expired".into())));

        client.connect().await;
        assert!(client.control(controls::SWAP_BUTTON).await.unwrap().enabled);

        client.connect().await;

        assert!(client.account().await.is_none());
        assert!(!client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert!(!surface.control(controls::SWAP_BUTTON).unwrap().enabled);
        assert_eq!(surface.text(elements::WALLET_INFO).unwrap(), "");
        assert!(surface.notices().is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_clears_session() {
        let (client, _provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        client.disconnect().await;

        assert!(client.account().await.is_none());
        assert!(!client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert_eq!(surface.text(elements::WALLET_INFO).unwrap(), "");
    }

    #[tokio::test]
    async fn test_quote_requires_both_inputs() {
        for (token_in, amount_in, expect_call) in [
            ("", "", false),
            ("WEGLD", "", false),
            ("", "100", false),
            ("WEGLD", "100", true),
        ] {
            let (client, provider, _surface) = fixture(StaticWallet::ok());
            client.quote(token_in, amount_in).await;
            assert_eq!(provider.queries().len(), expect_call as usize, "{:?}", (token_in, amount_in));
        }
    }

    #[tokio::test]
    async fn test_quote_renders_payload_verbatim() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        provider.set_payload(&["Dg==", "AQ=="]);

        client.quote("WEGLD", "100").await;

        let request = &provider.queries()[0];
        assert_eq!(request.data, "getSwapRate@WEGLD@100");
        assert_eq!(request.gas_limit, 5_000_000);
        assert_eq!(surface.text(elements::SWAP_RATE).unwrap(), "Dg==@AQ==");
    }

    #[tokio::test]
    async fn test_quote_failure_is_logged_only() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        provider.fail_with("Insufficient liquidity");

        client.quote("WEGLD", "100").await;

        assert!(surface.text(elements::SWAP_RATE).is_none());
        assert!(surface.notices().is_empty());
    }

    #[tokio::test]
    async fn test_swap_success() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;

        client.swap("WEGLD", "100", "USDC", "95", "1").await;

        let sent = provider.transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].data, "swapTokens@WEGLD@100@USDC@95@1");
        assert_eq!(sent[0].gas_limit, 10_000_000);

        let notices = surface.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].message, "Swap successful!");

        let balance_queries: Vec<String> = provider.queries().into_iter().map(|r| r.data).collect();
        assert_eq!(balance_queries, vec!["getBalance@WEGLD", "getBalance@USDC"]);
        assert!(surface.text(&elements::balance("USDC")).is_some());

        assert_eq!(
            client.control(controls::SWAP_BUTTON).await.unwrap(),
            ControlState::enabled(labels::SWAP)
        );
    }

    #[tokio::test]
    async fn test_swap_failure_restores_control() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.fail_with("Slippage too high");

        client.swap("WEGLD", "100", "USDC", "95", "1").await;

        let notices = surface.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].message, "Swap failed: Transaction rejected: Slippage too high");
        assert!(provider.queries().is_empty());
        assert_eq!(
            surface.control(controls::SWAP_BUTTON).unwrap(),
            ControlState::enabled(labels::SWAP)
        );
    }

    #[tokio::test]
    async fn test_swap_without_session_notifies() {
        let (client, provider, surface) = fixture(StaticWallet::ok());

        client.swap("WEGLD", "100", "USDC", "95", "1").await;

        assert!(provider.transactions().is_empty());
        assert_eq!(surface.notices()[0].message, "Swap failed: Wallet not connected");
        assert_eq!(
            client.control(controls::SWAP_BUTTON).await.unwrap(),
            ControlState::enabled(labels::SWAP)
        );
    }

    #[tokio::test]
    async fn test_swap_in_flight_shows_processing() {
        let gate = Arc::new(Notify::new());
        let provider = Arc::new(RecordingProvider::gated(gate.clone()));
        let surface = Arc::new(MemorySurface::new());
        let client = Arc::new(ExchangeClient::new(
            &crate::application::testing::config(),
            provider.clone(),
            Arc::new(StaticWallet::ok()),
            surface.clone(),
        ));
        client.connect().await;

        let task = {
            let client = client.clone();
            tokio::spawn(async move { client.swap("WEGLD", "100", "USDC", "95", "1").await })
        };
        while provider.pending() == 0 {
            tokio::task::yield_now().await;
        }

        assert_eq!(
            surface.control(controls::SWAP_BUTTON).unwrap(),
            ControlState::disabled(labels::PROCESSING)
        );

        gate.notify_one();
        task.await.unwrap();
        assert_eq!(
            surface.control(controls::SWAP_BUTTON).unwrap(),
            ControlState::enabled(labels::SWAP)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_removed_after_display_duration() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.fail_with("boom");

        client.swap("WEGLD", "100", "USDC", "95", "1").await;
        assert_eq!(surface.notices().len(), 1);

        paused::advance(Duration::from_millis(2_999)).await;
        assert_eq!(surface.notices().len(), 1);

        paused::advance(Duration::from_millis(2)).await;
        assert!(surface.notices().is_empty());
    }

    #[tokio::test]
    async fn test_transactions_use_expected_data_and_gas() {
        let (client, provider, _surface) = fixture(StaticWallet::ok());
        client.connect().await;

        client.add_liquidity("WEGLD", "10", "USDC", "300").await;
        client.remove_liquidity("WEGLD", "USDC", "5").await;
        client.claim_rewards().await;
        client.withdraw_protocol_fees("WEGLD").await;
        client.deposit_token("USDC", "42").await;

        let sent: Vec<(String, u64)> = provider
            .transactions()
            .into_iter()
            .map(|r| (r.data, r.gas_limit))
            .collect();
        assert_eq!(
            sent,
            vec![
                ("addLiquidity@WEGLD@10@USDC@300".to_string(), 10_000_000),
                ("removeLiquidity@WEGLD@USDC@5".to_string(), 8_000_000),
                ("claimRewards".to_string(), 6_000_000),
                ("withdrawProtocolFees@WEGLD".to_string(), 6_000_000),
                ("depositToken@USDC@42".to_string(), 6_000_000),
            ]
        );
    }

    #[tokio::test]
    async fn test_every_request_targets_contract_with_zero_value() {
        let (client, provider, _surface) = fixture(StaticWallet::ok());
        client.connect().await;

        client.quote("WEGLD", "1").await;
        client.swap("WEGLD", "1", "USDC", "1", "1").await;
        client.add_liquidity("WEGLD", "1", "USDC", "1").await;
        client.remove_liquidity("WEGLD", "USDC", "1").await;
        client.claim_rewards().await;
        client.withdraw_protocol_fees("WEGLD").await;
        client.check_pause_state().await;

        let all: Vec<ContractRequest> = provider
            .queries()
            .into_iter()
            .chain(provider.transactions())
            .collect();
        assert_eq!(all.len(), 9);
        assert!(all.iter().all(|r| r.receiver.as_str() == CONTRACT && r.value == "0"));
    }

    #[tokio::test]
    async fn test_logged_failures_leave_ui_untouched() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.fail_with("Insufficient LP tokens");

        client.add_liquidity("WEGLD", "10", "USDC", "300").await;
        client.remove_liquidity("WEGLD", "USDC", "5").await;
        client.claim_rewards().await;
        client.withdraw_protocol_fees("WEGLD").await;

        assert!(surface.notices().is_empty());
        assert!(client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
    }

    #[tokio::test]
    async fn test_balance_refresh_failure_is_logged_only() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.fail_with("node unavailable");

        client.refresh_balances(&["WEGLD", "", "USDC"]).await;

        let queried: Vec<String> = provider.queries().into_iter().map(|r| r.data).collect();
        assert_eq!(queried, vec!["getBalance@WEGLD", "getBalance@USDC"]);
        assert!(surface.text(&elements::balance("WEGLD")).is_none());
        assert!(surface.text(&elements::balance("USDC")).is_none());
        assert!(surface.notices().is_empty());
        assert!(client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
    }

    #[tokio::test]
    async fn test_transactions_require_session() {
        let (client, provider, _surface) = fixture(StaticWallet::ok());

        client.claim_rewards().await;

        assert!(provider.transactions().is_empty());
    }

    #[tokio::test]
    async fn test_pause_state_truthy() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.set_payload(&["AQ=="]);

        client.check_pause_state().await;

        assert_eq!(provider.queries()[0].data, "isContractPaused");
        assert!(!client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert_eq!(surface.text(elements::STATUS_MESSAGE).unwrap(), PAUSED_MESSAGE);
    }

    #[tokio::test]
    async fn test_pause_state_falsy_leaves_ui() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.set_payload(&[""]);

        client.check_pause_state().await;

        assert!(client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert!(surface.text(elements::STATUS_MESSAGE).is_none());
    }

    #[tokio::test]
    async fn test_pause_state_failure_leaves_ui() {
        let (client, provider, surface) = fixture(StaticWallet::ok());
        client.connect().await;
        provider.fail_with("gateway down");

        client.check_pause_state().await;

        assert!(client.control(controls::SWAP_BUTTON).await.unwrap().enabled);
        assert!(surface.text(elements::STATUS_MESSAGE).is_none());
    }
}
