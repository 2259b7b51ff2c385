/// Proxied navigation: input → URL → configured transport → encoded frame target
use crate::address::format_url;
use crate::error::ProxyError;
use crate::settings::TransportConfig;
use futures::lock::Mutex;
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

/// Option object handed to the transport alongside its module path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TunnelOption {
    pub wisp: String,
}

/// The external proxy stack as seen from this crate
#[allow(async_fn_in_trait)]
pub trait ProxyBackend {
    /// Register the proxy service worker at `path`
    async fn register_service_worker(&self, path: &str) -> Result<(), ProxyError>;

    /// Module path of the transport currently in use, if any
    async fn current_transport(&self) -> Result<Option<String>, ProxyError>;

    async fn set_transport(&self, module: &str, options: &[TunnelOption]) -> Result<(), ProxyError>;

    /// Prefix the encoded URL is appended to
    fn prefix(&self) -> Result<String, ProxyError>;

    fn encode_url(&self, url: &str) -> Result<String, ProxyError>;
}

/// Cancellation flag for one navigation. Once cancelled, its result is dropped.
#[derive(Debug, Clone, Default)]
pub struct NavigationToken(Rc<Cell<bool>>);

impl NavigationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Turns address input into frame targets, configuring the transport on first use
pub struct ProxyLoader<B> {
    backend: B,
    transport: TransportConfig,
    tunnel_endpoint: String,
    ready: Cell<bool>,
    /// Held for the whole setup so overlapping navigations wait for the first one
    setup: Mutex<()>,
}

impl<B: ProxyBackend> ProxyLoader<B> {
    pub fn new(backend: B, transport: TransportConfig, tunnel_endpoint: String) -> Self {
        ProxyLoader {
            backend,
            transport,
            tunnel_endpoint,
            ready: Cell::new(false),
            setup: Mutex::new(()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Make sure the service worker is registered and the transport points at the
    /// tunnelling endpoint. Only the first successful call does any work.
    pub async fn ensure_ready(&self) -> Result<(), ProxyError> {
        if self.ready.get() {
            return Ok(());
        }

        let _setup = self.setup.lock().await;
        if self.ready.get() {
            return Ok(());
        }

        self.backend
            .register_service_worker(&self.transport.service_worker)
            .await?;

        let current = self.backend.current_transport().await?;
        if current.as_deref() != Some(self.transport.module.as_str()) {
            log::info!(
                "configuring transport {} via {}",
                self.transport.module,
                self.tunnel_endpoint
            );
            let options = [TunnelOption {
                wisp: self.tunnel_endpoint.clone(),
            }];
            self.backend
                .set_transport(&self.transport.module, &options)
                .await?;
        }

        self.ready.set(true);
        Ok(())
    }

    /// Frame target for `input`: the proxy prefix followed by the encoded URL
    pub async fn resolve(&self, input: &str, search_template: &str) -> Result<String, ProxyError> {
        let url = format_url(input, search_template);
        self.ensure_ready().await?;

        let encoded = self.backend.encode_url(&url)?;
        let prefix = self.backend.prefix()?;
        log::info!("navigating to {}", url);
        Ok(format!("{}{}", prefix, encoded))
    }

    /// Like [`resolve`](Self::resolve), but yields `None` when `token` was
    /// cancelled while the navigation was in flight.
    pub async fn navigate(
        &self,
        input: &str,
        search_template: &str,
        token: &NavigationToken,
    ) -> Option<Result<String, ProxyError>> {
        let result = self.resolve(input, search_template).await;
        if token.is_cancelled() {
            log::debug!("dropping superseded navigation to {}", input);
            return None;
        }
        Some(result)
    }
}
