//! `dapp-util` is a small async utility toolkit for wallet and dapp
//! front-ends, usable from native hosts and `wasm32` browser builds.
//!
//! - [`Retrier`] re-invokes a fallible async operation until it succeeds,
//!   fails fatally, or spends its retry budget
//! - [`HostEnv`] probes the hosting page (browser context, host, visibility)
//! - [`mask`] shortens addresses and keys for display
//! - [`is_valid_public_key`] probes SEC1 public key validity
//! - [`sleep_ms`] waits on the right timer for the build target

mod error;
mod host;
mod i18n;
mod key;
mod mask;
mod options;
mod retry;
mod time;

pub use error::{FetchError, RetryError};
#[cfg(target_arch = "wasm32")]
pub use host::BrowserHost;
pub use host::{
    is_client, is_document_visible, is_local, is_prod_env, DetachedHost, HostEnv, StaticHost,
    Visibility, PROD_HOST,
};
pub use i18n::{keys, Catalog, CatalogError, Localize};
pub use key::{is_valid_public_key, parse_public_key, KeyError};
pub use mask::{mask, mask_with, DEFAULT_DOTS, DEFAULT_SHOW};
pub use options::RetryPolicy;
pub use retry::Retrier;
pub use time::{sleep, sleep_ms, DEFAULT_SLEEP_MS};

pub type Result<T> = std::result::Result<T, RetryError>;
