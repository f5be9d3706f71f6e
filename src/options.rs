use serde::{Deserialize, Serialize};

/// Configures retry behavior for one [`crate::Retrier`] run.
///
/// Values are not validated: `interval_ms = 0` re-attempts without waiting,
/// and `retry_count = 0` fails after a single wait without ever re-invoking
/// the fetcher.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum number of retried attempts after the initial one.
    pub retry_count: usize,
    /// Wait between attempts in milliseconds.
    pub interval_ms: u64,
    /// Message carried by the exhaustion error.
    pub error_msg: String,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_count: 10,
            interval_ms: 1_000,
            error_msg: "request failed".to_owned(),
        }
    }
}
