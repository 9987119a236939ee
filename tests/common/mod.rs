//! Shared test fixtures for the uDA SDK integration tests.
//!
//! Provides `RecordingTransport`, an in-memory `Transport` that answers every
//! request with a canned response and keeps a log of what was sent, plus
//! sample records and a client wired to the fake transport.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use uda_sdk::{
    ApiClient, Asset, HttpRequest, HttpResponse, Operation, Transport, TransportError,
};

pub const TOKEN: &str = "test-token";
pub const VALUATION_HOST: &str = "https://reds.test";
pub const GEOCODER_HOST: &str = "https://geo.test";

/// Canned reply of a `RecordingTransport`.
#[derive(Clone)]
pub enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

/// Fake transport: records every request and replies with a fixed answer.
///
/// Clones share the same log, so a test can keep one handle and move the
/// other into the client.
#[derive(Clone)]
pub struct RecordingTransport {
    reply: Reply,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Respond(HttpResponse {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.to_string(),
            }),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::responding(status, &body.to_string())
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let sent = self.requests();
        assert_eq!(sent.len(), 1, "expected exactly one request, got {}", sent.len());
        sent.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(message.clone().into()),
        }
    }
}

/// Client pointed at the test hosts, using `transport`.
pub fn client(transport: &RecordingTransport) -> ApiClient {
    ApiClient::builder()
        .authorization_token(TOKEN)
        .valuation_host(VALUATION_HOST)
        .geocoder_host(GEOCODER_HOST)
        .transport(transport.clone())
        .build()
        .unwrap()
}

/// The asset used throughout the uDA documentation examples.
pub fn sample_asset() -> Asset {
    Asset {
        operation: Some(Operation::Sale),
        ..Asset::new(7, 1234, 40, 40.45454062568134, -3.7071921786304336)
    }
}

/// A minimal successful valuation body.
pub fn valuation_body(indicators: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "best_score": {"price": 250000, "price_range": [230000, 270000]},
        "forecast": null,
        "indicators": indicators,
        "competitors": [
            {
                "id": 991,
                "area": 42,
                "lat": 40.4551,
                "lon": -3.7069,
                "operation": 1,
                "price": 240000,
                "admin0": "Spain",
                "admin3": "Madrid",
                "distance": 120.5,
                "rank": 1.0,
                "is_stock": true,
                "images": [{"url": "https://img.test/1.jpg", "capture_date": "2020-01-01"}]
            }
        ],
        "attributes": {
            "id": 7,
            "portfolio_id": 1234,
            "area": 40,
            "lat": 40.45454062568134,
            "lon": -3.7071921786304336,
            "operation": 1,
            "boundary_id": 28079,
            "boundary_code": "28079"
        }
    })
}
