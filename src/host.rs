//! Host environment probes.
//!
//! Page state is consumed through the [`HostEnv`] capability instead of
//! ambient globals, so headless hosts and tests can substitute fixed values.
//! The zero-argument probes at the bottom of this module keep the convenient
//! surface for callers that only ever run against the real host.

/// Exact host (`host[:port]`) of the production deployment.
pub const PROD_HOST: &str = "app.dapp.example";

/// Page visibility as reported by the host.
///
/// Anything the host does not report as visible collapses to [`Visibility::Hidden`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

/// Read-only view of the hosting page.
///
/// The three required capabilities mirror what a browser exposes; the derived
/// queries are all false without a browser context.
pub trait HostEnv {
    /// True when a browser-like global context is present.
    fn has_browser_context(&self) -> bool;

    /// Host of the current page (`host[:port]`), when a page exists.
    fn current_host(&self) -> Option<String>;

    /// Current document visibility.
    fn visibility(&self) -> Visibility;

    /// True when the page is served from a host containing `localhost`.
    fn is_local(&self) -> bool {
        self.has_browser_context()
            && self
                .current_host()
                .is_some_and(|host| host.contains("localhost"))
    }

    /// True when the document is currently visible.
    fn is_document_visible(&self) -> bool {
        self.has_browser_context() && self.visibility() == Visibility::Visible
    }

    /// True when the page is served from exactly [`PROD_HOST`].
    fn is_prod(&self) -> bool {
        self.has_browser_context() && self.current_host().as_deref() == Some(PROD_HOST)
    }
}

/// Live browser page, read through `web-sys`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
impl HostEnv for BrowserHost {
    fn has_browser_context(&self) -> bool {
        web_sys::window().is_some()
    }

    fn current_host(&self) -> Option<String> {
        web_sys::window()?.location().host().ok()
    }

    fn visibility(&self) -> Visibility {
        let visible = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.visibility_state() == web_sys::VisibilityState::Visible)
            .unwrap_or(false);
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Host with no browser context; every probe reports absence.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedHost;

impl HostEnv for DetachedHost {
    fn has_browser_context(&self) -> bool {
        false
    }

    fn current_host(&self) -> Option<String> {
        None
    }

    fn visibility(&self) -> Visibility {
        Visibility::Hidden
    }
}

/// Host with fixed values, for tests and non-browser embedders.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    /// Host reported to [`HostEnv::current_host`].
    pub host: Option<String>,
    /// Visibility reported to [`HostEnv::visibility`].
    pub visibility: Visibility,
}

impl StaticHost {
    /// Creates a visible page served from `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            visibility: Visibility::Visible,
        }
    }
}

impl HostEnv for StaticHost {
    fn has_browser_context(&self) -> bool {
        true
    }

    fn current_host(&self) -> Option<String> {
        self.host.clone()
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

fn ambient() -> impl HostEnv {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserHost
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DetachedHost
    }
}

/// True only when running inside a browser page.
pub fn is_client() -> bool {
    ambient().has_browser_context()
}

/// True only when the ambient page is served from a `localhost` host.
pub fn is_local() -> bool {
    ambient().is_local()
}

/// True only when the ambient document is visible.
pub fn is_document_visible() -> bool {
    ambient().is_document_visible()
}

/// True only when the ambient page is served from [`PROD_HOST`].
pub fn is_prod_env() -> bool {
    ambient().is_prod()
}
