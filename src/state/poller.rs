//! Periodic market snapshot refresh.
//!
//! A [`MarketPoller`] is owned by the detail page it serves. Dropping it
//! aborts the background task, so a page never leaves a timer behind.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::AppMessage;
use super::detail::DetailEvent;
use super::fetch::RequestToken;
use crate::client::ExplorerClient;
use crate::domain::{ApiError, EthereumData};

#[derive(Debug)]
pub struct MarketPoller {
    handle: JoinHandle<()>,
}

impl MarketPoller {
    /// Poll the explorer's market endpoint every `period`, starting now.
    #[must_use]
    pub fn spawn(
        client: ExplorerClient,
        token: RequestToken,
        period: Duration,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self::spawn_with(
            move || {
                let client = client.clone();
                async move { client.get_ethereum_data().await }
            },
            token,
            period,
            message_tx,
        )
    }

    /// Poll an arbitrary snapshot source.
    #[must_use]
    pub fn spawn_with<F, Fut>(
        fetch: F,
        token: RequestToken,
        period: Duration,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<EthereumData, ApiError>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let result = fetch().await;
                let message = AppMessage::Detail(DetailEvent::MarketUpdated { token, result });
                if message_tx.send(message).is_err() {
                    // App loop is gone.
                    break;
                }
            }
        });

        Self { handle }
    }
}

impl Drop for MarketPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
