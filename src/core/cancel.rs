//! Call cancellation module.
//!
//! This module provides [`CancellationTask`] which lets a caller withdraw
//! interest in a call which is still in flight, and [`Canceller`] which
//! triggers it.
use async_channel::{Receiver, Sender};

/// Create a connected [`Canceller`] / [`CancellationTask`] pair.
pub fn cancellation() -> (Canceller, CancellationTask) {
    let (cancel_tx, cancel_rx) = async_channel::bounded(1);

    (Canceller { cancel_tx }, CancellationTask { cancel_rx })
}

/// Triggers cancellation of the call which received the paired
/// [`CancellationTask`].
#[derive(Debug, Clone)]
pub struct Canceller {
    cancel_tx: Sender<()>,
}

impl Canceller {
    /// Cancel the call.
    ///
    /// Repeated calls have no additional effect.
    pub fn cancel(&self) {
        // Full or closed pipe means cancellation is already pending or the
        // call is gone.
        let _ = self.cancel_tx.try_send(());
    }
}

/// Awaitable side of the cancellation pipe.
#[derive(Debug)]
pub struct CancellationTask {
    cancel_rx: Receiver<()>,
}

impl CancellationTask {
    /// Resolves once the paired [`Canceller`] cancels.
    ///
    /// Never resolves if every [`Canceller`] is dropped without cancelling.
    pub async fn wait_for_cancel(&self) {
        if self.cancel_rx.recv().await.is_err() {
            futures::future::pending::<()>().await;
        }
    }
}
