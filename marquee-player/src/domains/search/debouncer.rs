use std::time::Duration;

use tracing::trace;

use super::error::SearchError;
use crate::common::{TaskHandle, ViewScope};

/// Coalesces query edits into one delayed lookup.
///
/// Every [`push`](Self::push) cancels the pending timer and schedules a new
/// one `interval` from now. When a timer fires, its message carries the
/// generation it was scheduled under; only the latest generation may
/// [`settle`](Self::settle).
#[derive(Debug)]
pub struct SearchDebouncer {
    interval: Duration,
    generation: u64,
    pending: Option<TaskHandle>,
}

impl SearchDebouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reschedules the lookup for `query`. A blank query only cancels the
    /// pending timer and reports [`SearchError::EmptyQuery`].
    pub fn push<M, F>(
        &mut self,
        query: &str,
        scope: &ViewScope<M>,
        on_settle: F,
    ) -> Result<u64, SearchError>
    where
        M: Send + 'static,
        F: FnOnce(u64, String) -> M + Send + 'static,
    {
        self.cancel();
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let interval = self.interval;
        let query = query.to_string();

        self.pending = Some(scope.perform(
            async move {
                tokio::time::sleep(interval).await;
                query
            },
            move |query| on_settle(generation, query),
        ));
        trace!(generation, "search timer scheduled");
        Ok(generation)
    }

    /// Drops the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some() && self.generation == generation
    }

    /// Consumes the timer for `generation`. Returns `false` for a timer that
    /// was superseded after it fired.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.is_current(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
