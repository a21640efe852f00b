//! Periodic contract pause-state polling

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use super::ExchangeClient;

/// Background task running `check_pause_state` once immediately and then every interval.
/// Stopped by [`PauseMonitor::stop`]; dropping the monitor aborts the task.
pub struct PauseMonitor {
    shutdown: Arc<Notify>,
    handle: Option<JoinHandle<()>>,
}

impl PauseMonitor {
    pub fn spawn(client: Arc<ExchangeClient>, every: Duration) -> Self {
        let shutdown = Arc::new(Notify::new());
        let signal = shutdown.clone();

        let handle = tokio::spawn(async move {
            info!("⏱️ Pause monitor started, checking every {:?}", every);
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = signal.notified() => {
                        info!("Pause monitor shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        client.check_pause_state().await;
                    }
                }
            }
        });

        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the task and wait for the check in progress, if any, to finish
    pub async fn stop(mut self) {
        self.shutdown.notify_one();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Pause monitor task failed: {}", e);
            }
        }
    }
}

impl Drop for PauseMonitor {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
