//! Polling scheduler
//!
//! Mounted views re-fetch on a fixed one-second period. Each poller owns
//! its cancellation token, released on every exit path from the view, and
//! a tick is honored only after the previous fetch completes, so a slow
//! fetch skips ticks instead of stacking overlapping requests.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use comanda_client::OrderingApi;
use futures::FutureExt;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::actions;
use crate::catalog::CatalogView;
use crate::management::ManagementView;

/// Fixed refresh period for mounted views
pub const POLL_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running poll loop
///
/// Dropping the handle cancels the loop, so an unmounted view cannot
/// leave an orphaned timer behind.
#[derive(Debug)]
pub struct PollHandle {
    name: &'static str,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Signal the loop to stop without waiting
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Stop the loop and wait for the task to wind down
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            match handle.await {
                Ok(()) => tracing::debug!(poller = %self.name, "Poller stopped"),
                Err(e) if e.is_cancelled() => {
                    tracing::debug!(poller = %self.name, "Poller cancelled")
                }
                Err(e) => tracing::error!(poller = %self.name, error = ?e, "Poller panicked"),
            }
        }
    }

    /// Whether the loop has already exited
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Polling scheduler
pub struct Poller;

impl Poller {
    /// Spawn a fixed-interval poll loop
    ///
    /// `tick` runs immediately on spawn and then once per period. The
    /// closure is awaited to completion before the next tick is honored;
    /// intervals missed during a slow fetch are skipped. A panic inside a
    /// tick is caught, logged, and stops the loop.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> PollHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let loop_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = loop_token.cancelled() => {
                        tracing::debug!(poller = %name, "Poller received cancel signal");
                        return;
                    }
                }

                let result: Result<(), Box<dyn std::any::Any + Send>> =
                    AssertUnwindSafe(tick()).catch_unwind().await;
                if let Err(panic_info) = result {
                    let panic_msg: String = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        (*s).to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    tracing::error!(
                        poller = %name,
                        panic = %panic_msg,
                        "Poll tick panicked! This is a bug that should be reported."
                    );
                    return;
                }
            }
        });

        tracing::debug!(poller = %name, "Registered poller");
        PollHandle {
            name,
            token,
            handle: Some(handle),
        }
    }
}

/// Start the catalog poller: products, once per period
pub fn spawn_catalog_poller(
    api: Arc<dyn OrderingApi>,
    view: Arc<RwLock<CatalogView>>,
) -> PollHandle {
    spawn_catalog_poller_with_period(api, view, POLL_PERIOD)
}

pub fn spawn_catalog_poller_with_period(
    api: Arc<dyn OrderingApi>,
    view: Arc<RwLock<CatalogView>>,
    period: Duration,
) -> PollHandle {
    Poller::spawn("catalog", period, move || {
        let api = api.clone();
        let view = view.clone();
        async move {
            let mut view = view.write().await;
            actions::refresh_catalog(api.as_ref(), &mut view).await;
        }
    })
}

/// Start the management poller: orders and stocks, once per period
pub fn spawn_management_poller(
    api: Arc<dyn OrderingApi>,
    view: Arc<RwLock<ManagementView>>,
) -> PollHandle {
    spawn_management_poller_with_period(api, view, POLL_PERIOD)
}

pub fn spawn_management_poller_with_period(
    api: Arc<dyn OrderingApi>,
    view: Arc<RwLock<ManagementView>>,
    period: Duration,
) -> PollHandle {
    Poller::spawn("management", period, move || {
        let api = api.clone();
        let view = view.clone();
        async move {
            let mut view = view.write().await;
            actions::refresh_management(api.as_ref(), &mut view).await;
        }
    })
}
