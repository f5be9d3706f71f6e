//! Cross-target sleep.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Default wait for [`sleep`], in milliseconds.
pub const DEFAULT_SLEEP_MS: u64 = 1_000;

/// Resolves after `ms` milliseconds. Never fails.
///
/// Native targets wait on the tokio timer; wasm32 targets wait on a browser
/// timeout via `gloo-timers`.
pub async fn sleep_ms(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;

    // Browser timeouts take an i32 under the hood; clamp rather than wrap.
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms.min(u64::from(u32::MAX)) as u32).await;
}

/// [`sleep_ms`] with the one-second default.
pub async fn sleep() {
    sleep_ms(DEFAULT_SLEEP_MS).await;
}
