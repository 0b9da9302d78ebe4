//! Supervised polling for server-owned state.
//!
//! Each poller repeats one remote task on a fixed cadence. A failing tick
//! backs off instead of hammering the backend: retriable failures double
//! the delay up to a ceiling, terminal ones (auth, shape mismatch) jump
//! straight to the ceiling since they cannot heal on their own. The next
//! success restores the base cadence. Stopping waits for an in-flight
//! tick, so nothing fires after `stop` returns.

use crate::error::ApiError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A unit of remote work the poller repeats
#[async_trait]
pub trait PollTask: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    async fn run(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    max_backoff: Duration,
}

impl Poller {
    pub fn new(interval: Duration, max_backoff: Duration) -> Self {
        Self {
            interval,
            max_backoff: max_backoff.max(interval),
        }
    }

    pub fn spawn(&self, task: Arc<dyn PollTask>) -> PollHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let interval = self.interval;
        let max_backoff = self.max_backoff;

        let handle = tokio::spawn(async move {
            let mut delay = interval;
            loop {
                match task.run().await {
                    Ok(()) => {
                        delay = interval;
                    }
                    Err(err) if err.is_retriable() => {
                        delay = (delay * 2).min(max_backoff);
                        warn!(
                            "Poll '{}' failed ({}), backing off for {:?}",
                            task.name(),
                            err,
                            delay
                        );
                    }
                    Err(err) => {
                        delay = max_backoff;
                        warn!(
                            "Poll '{}' hit a terminal error ({}), suspending for {:?}",
                            task.name(),
                            err,
                            delay
                        );
                    }
                }

                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = stop_rx.changed() => {
                        debug!("Poll '{}' stopped", task.name());
                        break;
                    }
                }
            }
        });

        PollHandle {
            stop: stop_tx,
            task: handle,
        }
    }
}

/// Cancellation handle for a running poller
pub struct PollHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Signal shutdown and wait for the in-flight tick to finish
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }
}
