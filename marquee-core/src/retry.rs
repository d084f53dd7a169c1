//! Bounded retry with exponential backoff for transport failures.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use marquee_model::{Actor, Genre, Movie, MovieDetails, MovieId, Video};
use tracing::{debug, warn};

use crate::catalog::CatalogService;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Delay before the first retry; doubled for every retry after it.
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2_u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor).min(self.max_backoff)
    }

    /// Runs `call` until it succeeds, fails with a non-retryable error, or
    /// the attempt budget is spent. The last error is returned as-is.
    pub async fn run<T, F, Fut>(
        &self,
        operation: &str,
        mut call: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < attempts => {
                    let delay = self.delay_for(attempt);
                    warn!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "catalog call failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    debug!(
                        operation,
                        attempt,
                        error = %err,
                        "catalog call failed"
                    );
                    return Err(err);
                }
            }
        }
    }
}

/// Wraps a [`CatalogService`] and retries transport failures according to a
/// [`RetryPolicy`]. Upstream errors pass through on the first attempt.
#[derive(Debug)]
pub struct RetryingCatalog<C> {
    inner: C,
    policy: RetryPolicy,
}

impl<C> RetryingCatalog<C> {
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

#[async_trait]
impl<C: CatalogService> CatalogService for RetryingCatalog<C> {
    async fn popular_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.policy
            .run("popular_movies", || self.inner.popular_movies(page))
            .await
    }

    async fn top_rated_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.policy
            .run("top_rated_movies", || self.inner.top_rated_movies(page))
            .await
    }

    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<Movie>> {
        self.policy
            .run("search_movies", || self.inner.search_movies(query, page))
            .await
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        self.policy
            .run("movie_details", || self.inner.movie_details(id))
            .await
    }

    async fn recommendations(&self, id: MovieId) -> Result<Vec<Movie>> {
        self.policy
            .run("recommendations", || self.inner.recommendations(id))
            .await
    }

    async fn movie_cast(&self, id: MovieId) -> Result<Vec<Actor>> {
        self.policy
            .run("movie_cast", || self.inner.movie_cast(id))
            .await
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.policy.run("genres", || self.inner.genres()).await
    }

    async fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>> {
        self.policy
            .run("movie_videos", || self.inner.movie_videos(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn delays_double_and_cap() {
        let policy = RetryPolicy {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_millis(350),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(350));
    }

    #[tokio::test(start_paused = true)]
    async fn transport_failures_are_retried_until_success() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result = RetryPolicy::default()
            .run("probe", || async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(CatalogError::transport("connection reset"))
                } else {
                    Ok(7)
                }
            })
            .await;

        assert_eq!(result.expect("third attempt succeeds"), 7);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn upstream_failures_are_not_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = RetryPolicy::default()
            .run("probe", || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(CatalogError::from_status(500, "boom"))
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Upstream { .. })));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_budget_bounds_transport_retries() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = RetryPolicy::default()
            .run("probe", || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(CatalogError::transport("unreachable"))
            })
            .await;

        assert!(result.is_err_and(|err| err.is_transport()));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
}
