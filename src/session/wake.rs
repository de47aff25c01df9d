//! Background wake-up loop for a cold backend
//!
//! Hosted backends are often asleep when the app starts. The loop probes the
//! root endpoint until it answers, pausing a fixed delay after every failure.
//! It never gives up; the only way out besides success is cancellation.

use crate::api::traits::VideoBackend;
use crate::session::state::ServerReadiness;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Handle to a running wake-up loop
///
/// Dropping the handle cancels the loop.
pub struct WakeUpTask {
    cancel: CancellationToken,
    readiness: watch::Receiver<ServerReadiness>,
    handle: Option<JoinHandle<u64>>,
}

impl WakeUpTask {
    /// Spawn the loop on the given runtime
    pub fn spawn(
        runtime: &tokio::runtime::Handle,
        backend: Arc<dyn VideoBackend>,
        retry_delay: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(ServerReadiness::Sleeping);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = runtime.spawn(async move {
            run_until_ready(backend.as_ref(), retry_delay, &tx, &token).await
        });

        Self {
            cancel,
            readiness: rx,
            handle: Some(handle),
        }
    }

    /// Latest readiness published by the loop
    pub fn readiness(&self) -> ServerReadiness {
        *self.readiness.borrow()
    }

    /// Receiver for callers that want to await changes
    pub fn subscribe(&self) -> watch::Receiver<ServerReadiness> {
        self.readiness.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the loop to end and return how many probes it sent
    pub async fn join(mut self) -> Option<u64> {
        let handle = self.handle.take()?;
        handle.await.ok()
    }
}

impl Drop for WakeUpTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Probe `backend` until it answers or `cancel` fires
///
/// Publishes `Waking` before the first probe and `Ready` after the first
/// success. Returns the number of probes sent.
pub async fn run_until_ready(
    backend: &dyn VideoBackend,
    retry_delay: Duration,
    readiness: &watch::Sender<ServerReadiness>,
    cancel: &CancellationToken,
) -> u64 {
    let mut attempts: u64 = 0;
    let _ = readiness.send(ServerReadiness::Waking);

    loop {
        attempts += 1;
        let probe = tokio::select! {
            _ = cancel.cancelled() => {
                info!("Wake-up loop cancelled after {} probes", attempts - 1);
                return attempts - 1;
            }
            result = backend.ping() => result,
        };

        match probe {
            Ok(()) => {
                info!("Backend is awake after {} probe(s)", attempts);
                let _ = readiness.send(ServerReadiness::Ready);
                return attempts;
            }
            Err(e) => {
                warn!(
                    "Backend not ready (probe {}): {}. Retrying in {:?}",
                    attempts, e, retry_delay
                );
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Wake-up loop cancelled after {} probes", attempts);
                return attempts;
            }
            _ = tokio::time::sleep(retry_delay) => {}
        }
    }
}
