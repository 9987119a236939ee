//! urbanDATAanalytics SDK for Rust.
//!
//! A blocking client for the uDA valuation and cadastre APIs. Domain records
//! are validated and serialized into requests; responses, including the
//! service's `{"error": {...}}` envelopes, are decoded into typed results.
//!
//! # Quick start
//!
//! ```no_run
//! use uda_sdk::{AdminLevel, ApiClient, Asset, Indicator, Operation};
//! use uda_sdk::models::indicator::AVG_PRICE;
//!
//! let client = ApiClient::new("my-token").unwrap();
//!
//! let mut asset = Asset::new(1, 42, 40, 40.45454062568134, -3.7071921786304336);
//! asset.operation = Some(Operation::Sale);
//!
//! let indicators = [Indicator::new(AVG_PRICE, AdminLevel::Neighborhood)];
//! let valuation = client.valuation(&asset, &indicators, None).unwrap();
//! println!("{:?}", valuation.indicator(AVG_PRICE));
//!
//! let cadastre = client.cadastre("9872023VH5797S0001WX", Some("local-first")).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncApiClient;
pub use error::{ApiError, ApplicationError, ErrorLine, Result, TransportError};
pub use models::{
    AdminLevel, Asset, Cadastre, Competitor, ConstructionType, EnergyCert, Floor, Furnished,
    Indicator, Model, Operation, PropertyType, Status, Usage, Valuation,
};
pub use response::ApiResponse;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use request::RequestBuilder;

// ---------------------------------------------------------------------------
// ApiClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`ApiClient`].
///
/// Use [`ApiClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ApiClientBuilder::build).
pub struct ApiClientBuilder {
    authorization_token: Option<String>,
    valuation_host: String,
    geocoder_host: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            authorization_token: None,
            valuation_host: config::DEFAULT_VALUATION_HOST.to_string(),
            geocoder_host: config::DEFAULT_GEOCODER_HOST.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl ApiClientBuilder {
    /// Set the token sent as `Authorization: Token <token>`. Required.
    pub fn authorization_token(mut self, token: impl Into<String>) -> Self {
        self.authorization_token = Some(token.into());
        self
    }

    /// Override the scheme and host of the valuation service.
    pub fn valuation_host(mut self, host: impl Into<String>) -> Self {
        self.valuation_host = host.into();
        self
    }

    /// Override the scheme and host of the geocoder (cadastre) service.
    pub fn geocoder_host(mut self, host: impl Into<String>) -> Self {
        self.geocoder_host = host.into();
        self
    }

    /// Set the HTTP request timeout of the default transport.
    ///
    /// Defaults to 30 seconds. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the default `reqwest` transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let authorization_token = self
            .authorization_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::InvalidArgument("authorization token not set".into()))?;
        let valuation_host = parse_host(&self.valuation_host)?;
        let geocoder_host = parse_host(&self.geocoder_host)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };
        Ok(ApiClient {
            authorization_token,
            valuation_host,
            geocoder_host,
            transport,
        })
    }
}

fn parse_host(host: &str) -> Result<Url> {
    let url = Url::parse(host)
        .map_err(|e| ApiError::InvalidArgument(format!("invalid host URL '{host}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidArgument(format!(
            "host URL '{host}' cannot carry a path"
        )));
    }
    Ok(url)
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Client for the uDA valuation and cadastre endpoints.
///
/// Holds only configuration; every call builds one request, performs exactly
/// one HTTP exchange, and hands its result back through the return value.
/// Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    authorization_token: String,
    valuation_host: Url,
    geocoder_host: Url,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Client with default hosts and transport.
    pub fn new(authorization_token: impl Into<String>) -> Result<Self> {
        Self::builder()
            .authorization_token(authorization_token)
            .build()
    }

    // -- Valuation ---------------------------------------------------------

    /// Value `asset`, optionally requesting market `indicators` and a
    /// `price_type` (`"asking"` or `"closing"`).
    ///
    /// Results are keyed by indicator code, so each code may be requested
    /// once per call; asking for the same code at two admin levels fails with
    /// [`ApiError::InvalidArgument`]. Issue one call per level instead.
    pub fn valuation(
        &self,
        asset: &Asset,
        indicators: &[Indicator],
        price_type: Option<&str>,
    ) -> Result<Valuation> {
        Ok(self.valuation_call(asset, indicators, price_type)?.data)
    }

    /// Like [`valuation`](Self::valuation), also returning the request URL,
    /// status and raw body.
    pub fn valuation_call(
        &self,
        asset: &Asset,
        indicators: &[Indicator],
        price_type: Option<&str>,
    ) -> Result<ApiResponse<Valuation>> {
        let request = self.build_valuation_request(asset, indicators, price_type)?;
        let response = self.send(&request)?;
        let data = response::parse_valuation(&response, indicators)?;
        Ok(ApiResponse {
            url: request.url,
            status: response.status,
            raw_body: response.body,
            data,
        })
    }

    /// Validate the inputs and build the valuation request without sending it.
    pub fn build_valuation_request(
        &self,
        asset: &Asset,
        indicators: &[Indicator],
        price_type: Option<&str>,
    ) -> Result<HttpRequest> {
        asset.validate()?;
        let body = asset.to_json()?;

        let mut seen = HashSet::new();
        let mut encoded = Vec::with_capacity(indicators.len());
        for (position, indicator) in indicators.iter().enumerate() {
            indicator.validate().map_err(|e| match e {
                ApiError::Validation { record, field, .. } => ApiError::Validation {
                    record,
                    field,
                    position: Some(position),
                },
                other => other,
            })?;
            let fields = indicator.to_json()?;
            if let Some(code) = &indicator.indicator {
                if !seen.insert(code.as_str()) {
                    return Err(ApiError::InvalidArgument(format!(
                        "indicator '{code}' requested more than once (position {position})"
                    )));
                }
            }
            encoded.push(serde_json::Value::Object(fields));
        }

        let price_type = request::check_price_type(price_type)?;

        // Checked by validate() above.
        let portfolio_id = asset.portfolio_id.unwrap_or_default();
        let mut builder =
            RequestBuilder::post(&self.valuation_host, request::valuation_path(portfolio_id))?;
        if !encoded.is_empty() {
            let json = serde_json::to_string(&encoded).map_err(ApiError::Serialization)?;
            builder.query("indicators", &json);
        }
        if let Some(price_type) = price_type {
            builder.query("price_type", price_type);
        }
        builder.body(serde_json::to_string(&body).map_err(ApiError::Serialization)?);
        Ok(builder.build(&self.authorization_token))
    }

    // -- Cadastre ----------------------------------------------------------

    /// Look up a cadastre `reference`. `mode` selects the data source:
    /// `local-only`, `remote-only`, `local-first` or `remote-first`.
    pub fn cadastre(&self, reference: &str, mode: Option<&str>) -> Result<Cadastre> {
        Ok(self.cadastre_call(reference, mode)?.data)
    }

    /// Like [`cadastre`](Self::cadastre), also returning the request URL,
    /// status and raw body.
    pub fn cadastre_call(
        &self,
        reference: &str,
        mode: Option<&str>,
    ) -> Result<ApiResponse<Cadastre>> {
        let request = self.build_cadastre_request(reference, mode)?;
        let response = self.send(&request)?;
        let data = response::parse_cadastre(&response)?;
        Ok(ApiResponse {
            url: request.url,
            status: response.status,
            raw_body: response.body,
            data,
        })
    }

    /// Validate the inputs and build the cadastre request without sending it.
    pub fn build_cadastre_request(
        &self,
        reference: &str,
        mode: Option<&str>,
    ) -> Result<HttpRequest> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ApiError::InvalidArgument(
                "cadastre reference is empty".into(),
            ));
        }
        let mode = request::check_cadastre_mode(mode)?;

        let mut builder =
            RequestBuilder::get(&self.geocoder_host, request::cadastre_path(reference))?;
        if let Some(mode) = mode {
            builder.query("mode", mode);
        }
        Ok(builder.build(&self.authorization_token))
    }

    // -- Transport ---------------------------------------------------------

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(method = ?request.method, url = %request.url, "sending request");
        let response = self
            .transport
            .execute(request)
            .map_err(ApiError::Transport)?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Debug / Display
// ---------------------------------------------------------------------------

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("authorization_token", &"<redacted>")
            .field("valuation_host", &self.valuation_host.as_str())
            .field("geocoder_host", &self.geocoder_host.as_str())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiClient(valuation_host={}, geocoder_host={}, version={})",
            self.valuation_host,
            self.geocoder_host,
            config::API_VERSION
        )
    }
}
