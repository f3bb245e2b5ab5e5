//! Stop signal for the store loop.

use tokio::sync::watch;

/// Owns the stop flag. Dropping it without signalling also releases waiters.
pub struct ShutdownCoordinator {
    stopped: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self { stopped }
    }

    /// Raises the flag. Idempotent.
    pub fn signal(&self) {
        if !self.stopped.send_replace(true) {
            tracing::info!("Graceful shutdown initiated");
        }
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            stopped: self.stopped.subscribe(),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Waiting side of the stop flag, handed to the store loop.
pub struct ShutdownHandle {
    stopped: watch::Receiver<bool>,
}

impl ShutdownHandle {
    /// Resolves once the flag is raised, immediately if it already is.
    /// Cancel-safe, so it can sit in a `select!` loop.
    pub async fn wait(&mut self) {
        // Err means the coordinator is gone; nobody is left to keep us running.
        let _ = self.stopped.wait_for(|stopped| *stopped).await;
    }
}
