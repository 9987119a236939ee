//! Request construction for the uDA endpoints.
//!
//! Path segments and query values are percent-encoded by `url`, never spliced
//! into the URL string. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use uda_sdk::request::RequestBuilder;
//! use url::Url;
//!
//! let host = Url::parse("https://geocoder.example.com").unwrap();
//! let request = RequestBuilder::get(&host, &["geocoder", "api", "v1.0", "cadastre", "1234"])
//!     .unwrap()
//!     .query("mode", "local-only")
//!     .build("secret");
//! assert_eq!(
//!     request.url.as_str(),
//!     "https://geocoder.example.com/geocoder/api/v1.0/cadastre/1234?mode=local-only"
//! );
//! ```

use url::Url;

use crate::config;
use crate::error::{ApiError, Result};
use crate::transport::{HttpMethod, HttpRequest};

/// Builds an [`HttpRequest`] carrying the service's auth and JSON headers.
pub struct RequestBuilder {
    method: HttpMethod,
    url: Url,
    query: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestBuilder {
    pub fn get<I>(host: &Url, segments: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(HttpMethod::Get, host, segments)
    }

    pub fn post<I>(host: &Url, segments: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(HttpMethod::Post, host, segments)
    }

    /// Start a request at `host` with `segments` appended to its path.
    fn new<I>(method: HttpMethod, host: &Url, segments: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = host.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidArgument(format!("{host} cannot be used as a base URL"))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(Self {
            method,
            url,
            query: Vec::new(),
            body: None,
        })
    }

    /// Append a query parameter.
    pub fn query(&mut self, key: &str, value: &str) -> &mut Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Set the request body (already-encoded JSON).
    pub fn body(&mut self, json: String) -> &mut Self {
        self.body = Some(json);
        self
    }

    /// Produce the request, signed with `token`.
    pub fn build(&self, token: &str) -> HttpRequest {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        HttpRequest {
            method: self.method,
            url,
            headers: vec![
                ("Authorization".to_string(), format!("Token {token}")),
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: self.body.clone(),
        }
    }
}

/// Path segments of the valuation endpoint for a portfolio.
pub fn valuation_path(portfolio_id: i64) -> Vec<String> {
    let [service, api] = config::VALUATION_PREFIX;
    vec![
        service.to_string(),
        api.to_string(),
        config::API_VERSION.to_string(),
        "portfolio".to_string(),
        portfolio_id.to_string(),
        "asset".to_string(),
    ]
}

/// Path segments of the cadastre lookup for a reference.
pub fn cadastre_path(reference: &str) -> Vec<String> {
    let [service, api] = config::GEOCODER_PREFIX;
    vec![
        service.to_string(),
        api.to_string(),
        config::API_VERSION.to_string(),
        "cadastre".to_string(),
        reference.to_string(),
    ]
}

/// Accept `price_type` only if it is one of the supported values.
pub fn check_price_type(price_type: Option<&str>) -> Result<Option<&str>> {
    check_allowed("price_type", price_type, &config::ALLOWED_PRICE_TYPES)
}

/// Accept a cadastre `mode` only if it is one of the supported values.
pub fn check_cadastre_mode(mode: Option<&str>) -> Result<Option<&str>> {
    check_allowed("mode", mode, &config::ALLOWED_CADASTRE_MODES)
}

fn check_allowed<'a>(
    name: &str,
    value: Option<&'a str>,
    allowed: &[&str],
) -> Result<Option<&'a str>> {
    match value {
        Some(v) if !allowed.contains(&v) => Err(ApiError::InvalidArgument(format!(
            "{name} value '{v}' is not allowed (expected one of: {})",
            allowed.join(", ")
        ))),
        other => Ok(other),
    }
}
