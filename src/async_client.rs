//! Async wrapper around [`ApiClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every call on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP exchange is in flight.
//!
//! # Example
//!
//! ```no_run
//! use uda_sdk::{ApiClient, AsyncApiClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncApiClient::build(ApiClient::builder().authorization_token("my-token"))
//!         .await
//!         .unwrap();
//!
//!     let cadastre = client.cadastre("9872023VH5797S0001WX", None).await.unwrap();
//!
//!     // Any sync client method via closure
//!     let req = client
//!         .run(|c| c.build_cadastre_request("9872023VH5797S0001WX", Some("local-only")))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::models::{Asset, Cadastre, Indicator, Valuation};
use crate::{ApiClient, ApiClientBuilder};

/// Async wrapper around [`ApiClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client is shared through an [`Arc`];
/// it holds no mutable state, so concurrent calls do not contend.
#[derive(Debug, Clone)]
pub struct AsyncApiClient {
    inner: Arc<ApiClient>,
}

impl AsyncApiClient {
    /// Wrap an already-built client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Build the underlying client on the blocking pool.
    ///
    /// The default transport owns a blocking HTTP client, which must not be
    /// created on an async worker thread.
    pub async fn build(builder: ApiClientBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || builder.build().map(Self::new))
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ApiClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?
    }

    /// Async version of [`ApiClient::valuation`].
    pub async fn valuation(
        &self,
        asset: Asset,
        indicators: Vec<Indicator>,
        price_type: Option<String>,
    ) -> Result<Valuation> {
        self.run(move |c| c.valuation(&asset, &indicators, price_type.as_deref()))
            .await
    }

    /// Async version of [`ApiClient::cadastre`].
    pub async fn cadastre(&self, reference: &str, mode: Option<&str>) -> Result<Cadastre> {
        let reference = reference.to_string();
        let mode = mode.map(str::to_string);
        self.run(move |c| c.cadastre(&reference, mode.as_deref()))
            .await
    }

    /// Return a reference to the wrapped [`ApiClient`].
    pub fn client(&self) -> &ApiClient {
        &self.inner
    }
}
