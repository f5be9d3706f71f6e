use std::future::Future;

use crate::{
    i18n::{keys, Catalog, Localize},
    time, FetchError, Result, RetryError, RetryPolicy,
};

/// Re-invokes a fallible async operation until it succeeds, fails fatally,
/// or spends its retry budget.
///
/// The first attempt runs immediately; every further attempt runs only after
/// an [`RetryPolicy::interval_ms`] wait. Attempts never overlap: the next
/// wait starts only after the previous attempt has settled.
///
/// The runner owns no shared state. Each [`Retrier::run`] call drives its own
/// loop and settles exactly once; there is no external cancellation surface.
#[derive(Clone, Debug)]
pub struct Retrier<L = Catalog> {
    policy: RetryPolicy,
    catalog: L,
}

impl Retrier<Catalog> {
    /// Creates a runner with the default policy and the built-in English
    /// catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::default())
    }
}

impl Default for Retrier<Catalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Localize> Retrier<L> {
    /// Creates a runner with the default policy and an injected translation
    /// capability for the fatal-error message.
    pub fn with_catalog(catalog: L) -> Self {
        Self {
            policy: RetryPolicy::default(),
            catalog,
        }
    }

    /// Applies a retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Runs `fetcher` until it succeeds, fails with [`FetchError::Fatal`],
    /// or the budget of [`RetryPolicy::retry_count`] retried attempts is
    /// spent.
    ///
    /// A failure on the initial attempt only decides whether the loop starts;
    /// fatal classification applies to retried attempts.
    pub async fn run<T, F, Fut>(&self, fetcher: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, FetchError>>,
    {
        self.drive(fetcher, None::<fn()>).await
    }

    /// [`Retrier::run`] with a hook invoked at most once, just before the run
    /// settles on either failure path.
    pub async fn run_with_hook<T, F, Fut, H>(&self, fetcher: F, on_error: H) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, FetchError>>,
        H: FnOnce(),
    {
        self.drive(fetcher, Some(on_error)).await
    }

    async fn drive<T, F, Fut, H>(&self, mut fetcher: F, mut on_error: Option<H>) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, FetchError>>,
        H: FnOnce(),
    {
        match fetcher().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("initial attempt failed: {err}; entering retry loop");
                #[cfg(not(feature = "tracing"))]
                let _ = err;
            }
        }

        let mut attempts = 0usize;
        loop {
            time::sleep_ms(self.policy.interval_ms).await;
            attempts += 1;

            if attempts > self.policy.retry_count {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "retry budget of {} attempts spent; giving up",
                    self.policy.retry_count
                );
                if let Some(hook) = on_error.take() {
                    hook();
                }
                return Err(RetryError::Exhausted {
                    message: self.policy.error_msg.clone(),
                });
            }

            match fetcher().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_fatal() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("attempt {attempts} failed fatally: {err}");
                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                    if let Some(hook) = on_error.take() {
                        hook();
                    }
                    return Err(RetryError::Fatal {
                        message: self.fatal_message(),
                    });
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("attempt {attempts} failed: {err}; retrying");
                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                }
            }
        }
    }

    fn fatal_message(&self) -> String {
        format!(
            "{} {}",
            self.catalog.translate(keys::TRANSACTION_TITLE),
            self.catalog.translate(keys::TRANSACTION_FAILED)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use crate::{Catalog, FetchError, Retrier, RetryError, RetryPolicy};

    fn quick_policy(retry_count: usize) -> RetryPolicy {
        RetryPolicy {
            retry_count,
            interval_ms: 10,
            ..RetryPolicy::default()
        }
    }

    #[tokio::test]
    async fn first_success_resolves_without_waiting() {
        let calls = AtomicUsize::new(0);
        let runner = Retrier::new().with_policy(RetryPolicy {
            interval_ms: 60_000,
            ..RetryPolicy::default()
        });

        let started = Instant::now();
        let value = runner
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, FetchError>(7) }
            })
            .await
            .expect("first attempt must resolve");

        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // A 60 s interval would be observable if any wait had been scheduled.
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let calls = AtomicUsize::new(0);
        let hook_calls = AtomicUsize::new(0);
        let runner = Retrier::new().with_policy(quick_policy(10));

        let value = runner
            .run_with_hook(
                || {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if n < 2 {
                            Err(FetchError::transient("boom"))
                        } else {
                            Ok(n)
                        }
                    }
                },
                || {
                    hook_calls.fetch_add(1, Ordering::SeqCst);
                },
            )
            .await
            .expect("third attempt must resolve");

        assert_eq!(value, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exhaustion_surfaces_default_message_and_fires_hook_once() {
        let calls = AtomicUsize::new(0);
        let hook_calls = AtomicUsize::new(0);
        let runner = Retrier::new().with_policy(quick_policy(2));

        let err = runner
            .run_with_hook(
                || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    async { Err::<(), _>(FetchError::transient("boom")) }
                },
                || {
                    hook_calls.fetch_add(1, Ordering::SeqCst);
                },
            )
            .await
            .expect_err("budget must run out");

        assert_eq!(
            err,
            RetryError::Exhausted {
                message: "request failed".to_owned()
            }
        );
        assert_eq!(err.to_string(), "request failed");
        // Initial attempt plus two retried attempts.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(hook_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhaustion_carries_configured_message() {
        let runner = Retrier::new().with_policy(RetryPolicy {
            retry_count: 1,
            interval_ms: 10,
            error_msg: "price feed unavailable".to_owned(),
        });

        let err = runner
            .run(|| async { Err::<(), _>(FetchError::transient("boom")) })
            .await
            .expect_err("budget must run out");

        assert_eq!(err.to_string(), "price feed unavailable");
    }

    #[tokio::test]
    async fn fatal_failure_stops_retrying_immediately() {
        let calls = AtomicUsize::new(0);
        let hook_calls = AtomicUsize::new(0);
        let runner = Retrier::new().with_policy(quick_policy(10));

        let err = runner
            .run_with_hook(
                || {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if n == 0 {
                            Err::<(), _>(FetchError::transient("network hiccup"))
                        } else {
                            Err(FetchError::fatal("tx failed"))
                        }
                    }
                },
                || {
                    hook_calls.fetch_add(1, Ordering::SeqCst);
                },
            )
            .await
            .expect_err("fatal error must stop the run");

        assert_eq!(err.to_string(), "Transaction failed");
        assert!(matches!(err, RetryError::Fatal { .. }));
        // Initial attempt plus the single fatal retried attempt.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(hook_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fatal_on_initial_attempt_still_starts_the_loop() {
        let calls = AtomicUsize::new(0);
        let runner = Retrier::new().with_policy(quick_policy(10));

        let err = runner
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(FetchError::fatal("tx failed")) }
            })
            .await
            .expect_err("must fail");

        assert!(matches!(err, RetryError::Fatal { .. }));
        // The initial failure only starts the loop; classification applies to
        // the retried attempt.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fatal_message_uses_injected_catalog() {
        let catalog =
            Catalog::from_json(r#"{"transaction": {"title": "Transaksi", "failed": "gagal"}}"#)
                .expect("must load catalog");
        let runner = Retrier::with_catalog(catalog).with_policy(quick_policy(3));

        let err = runner
            .run(|| async { Err::<(), _>(FetchError::fatal("tx failed")) })
            .await
            .expect_err("must fail");

        assert_eq!(err.to_string(), "Transaksi gagal");
    }

    #[tokio::test]
    async fn zero_retry_budget_fails_after_one_wait() {
        let calls = AtomicUsize::new(0);
        let runner = Retrier::new().with_policy(quick_policy(0));

        let err = runner
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(FetchError::transient("boom")) }
            })
            .await
            .expect_err("must fail");

        assert!(matches!(err, RetryError::Exhausted { .. }));
        // Only the initial attempt ran; the budget check fires before the
        // first retried attempt.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
