//! End-to-end tests of the default reqwest transport against a mock server.
//!
//! The blocking client owns its own runtime, so it is created, used and
//! dropped inside `spawn_blocking` rather than on the async test thread.

use serde_json::json;
use uda_sdk::{AdminLevel, ApiClient, ApiError, Asset, Indicator, Operation};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn asset() -> Asset {
    Asset {
        operation: Some(Operation::Sale),
        ..Asset::new(7, 1234, 40, 40.45454062568134, -3.7071921786304336)
    }
}

fn client(uri: &str) -> ApiClient {
    ApiClient::builder()
        .authorization_token("secret")
        .valuation_host(uri)
        .geocoder_host(uri)
        .build()
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn valuation_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/assets/api/v1.0/portfolio/1234/asset"))
        .and(header("Authorization", "Token secret"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(query_param(
            "indicators",
            r#"[{"indicator":"o_pm","admin_level":5}]"#,
        ))
        .and(query_param("price_type", "asking"))
        .and(body_json(json!({
            "area": 40,
            "id": 7,
            "lat": 40.45454062568134,
            "lon": -3.7071921786304336,
            "operation": 1,
            "portfolio_id": 1234
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "indicators": [2150.0],
            "competitors": [],
            "best_score": {"price": 250000}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let valuation = tokio::task::spawn_blocking(move || {
        let indicators = [Indicator::new("o_pm", AdminLevel::Neighborhood)];
        client(&uri).valuation(&asset(), &indicators, Some("asking"))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(valuation.id, 7);
    assert_eq!(valuation.indicator("o_pm"), Some(&json!(2150.0)));
    assert_eq!(valuation.best_score, Some(json!({"price": 250000})));
    assert!(valuation.competitors.is_empty());
    assert!(valuation.attributes.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn cadastre_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/api/v1.0/cadastre/9872023VH5797S0001WX"))
        .and(query_param("mode", "local-only"))
        .and(header("Authorization", "Token secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reference": "9872023VH5797S0001WX",
            "area": 85,
            "origin": "local"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let cadastre = tokio::task::spawn_blocking(move || {
        client(&uri).cadastre("9872023VH5797S0001WX", Some("local-only"))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(cadastre.area, Some(85));
    assert_eq!(cadastre.origin.as_deref(), Some("local"));
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_returned_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || client(&uri).cadastre("1234", None))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Http {
            status: 429,
            reason: "Too Many Requests",
            ..
        }
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn redirects_are_followed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/api/v1.0/cadastre/old"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "/geocoder/api/v1.0/cadastre/new"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/geocoder/api/v1.0/cadastre/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reference": "new"})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let cadastre = tokio::task::spawn_blocking(move || client(&uri).cadastre("old", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cadastre.reference.as_deref(), Some("new"));
}

#[tokio::test(flavor = "multi_thread")]
async fn redirect_loop_stops_at_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoder/api/v1.0/cadastre/loop"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "/geocoder/api/v1.0/cadastre/loop"),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || client(&uri).cadastre("loop", None))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    // The first request plus at most ten redirects.
    let received = server.received_requests().await.unwrap();
    assert!(received.len() > 1 && received.len() <= 11, "{} requests", received.len());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_host_is_transport_error() {
    // Bind and drop a listener to get a port nobody is serving.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{port}");

    let err = tokio::task::spawn_blocking(move || client(&uri).cadastre("1234", None))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
