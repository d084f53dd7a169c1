//! Cancellable background work owned by a view.
//!
//! A [`ViewScope`] is the async boundary of one view controller: work is
//! spawned through [`ViewScope::perform`], and its output comes back as a
//! view message on the scope's queue. The owner drains the queue and applies
//! messages one at a time, so view state is only ever touched from the
//! owner's loop. Cancelling the scope (or dropping it) stops every task it
//! spawned and discards anything still queued.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to one task spawned through a [`ViewScope`].
///
/// Dropping the handle detaches the task; call [`TaskHandle::cancel`] to
/// stop it.
#[derive(Debug)]
pub struct TaskHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.token.cancel();
        self.join.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

#[derive(Debug)]
pub struct ViewScope<M> {
    token: CancellationToken,
    tx: mpsc::UnboundedSender<M>,
    rx: mpsc::UnboundedReceiver<M>,
}

impl<M: Send + 'static> Default for ViewScope<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Send + 'static> ViewScope<M> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            token: CancellationToken::new(),
            tx,
            rx,
        }
    }

    /// Runs `future` on the runtime and queues `map(output)` for the owner.
    /// Must be called from within a Tokio runtime.
    pub fn perform<F, T, Map>(&self, future: F, map: Map) -> TaskHandle
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        Map: FnOnce(T) -> M + Send + 'static,
    {
        let token = self.token.child_token();
        let task_token = token.clone();
        let tx = self.tx.clone();

        let join = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {}
                output = future => {
                    if !task_token.is_cancelled() {
                        // Receiver gone means the view is gone.
                        let _ = tx.send(map(output));
                    }
                }
            }
        });

        TaskHandle { token, join }
    }

    /// Waits for the next queued message. Returns `None` once the scope has
    /// been cancelled.
    pub async fn next(&mut self) -> Option<M> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            message = self.rx.recv() => message,
        }
    }

    /// Next message if one is already queued.
    pub fn try_next(&mut self) -> Option<M> {
        if self.token.is_cancelled() {
            return None;
        }
        self.rx.try_recv().ok()
    }

    /// Stops all spawned work and discards anything queued.
    pub fn cancel(&mut self) {
        self.token.cancel();
        while self.rx.try_recv().is_ok() {}
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl<M> Drop for ViewScope<M> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
