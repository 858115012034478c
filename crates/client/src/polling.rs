//! Cancellable fixed-interval polling.
//!
//! [`spawn_poller`] runs a fetch on a fixed cadence and hands each success
//! to a callback. Failures are logged and retried at the same cadence; there
//! is no backoff. The returned [`Subscription`] stops the task when
//! cancelled or dropped, including while a fetch is in flight, so a torn
//! down view never receives a late update.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::error::ClientResult;

/// Handle to a running poller.
#[derive(Debug)]
pub struct Subscription {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel and wait for the task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Poll `fetch` every `interval`, starting immediately.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_poller<F, Fut, T, S>(
    name: &'static str,
    interval: Duration,
    mut fetch: F,
    mut on_update: S,
) -> Subscription
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ClientResult<T>> + Send + 'static,
    T: Send + 'static,
    S: FnMut(T) + Send + 'static,
{
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(
            poller = name,
            interval_ms = interval.as_millis() as u64,
            "Poller started",
        );

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                _ = token.cancelled() => break,
                result = fetch() => result,
            };

            match result {
                Ok(value) => {
                    tracing::debug!(poller = name, "Poll succeeded");
                    on_update(value);
                }
                Err(e) => {
                    tracing::warn!(poller = name, error = %e, "Poll failed, retrying next tick");
                }
            }
        }

        tracing::info!(poller = name, "Poller stopped");
    });

    Subscription {
        cancel,
        handle: Some(handle),
    }
}
