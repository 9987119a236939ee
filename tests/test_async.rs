//! Async wrapper tests. Run with `--features async`.
#![cfg(feature = "async")]

mod common;

use common::{client, sample_asset, valuation_body, RecordingTransport};
use serde_json::json;
use uda_sdk::{AdminLevel, ApiError, AsyncApiClient, Indicator};

#[tokio::test]
async fn valuation_runs_on_blocking_pool() {
    let transport = RecordingTransport::json(200, valuation_body(json!([3.2])));
    let client = AsyncApiClient::new(client(&transport));

    let valuation = client
        .valuation(
            sample_asset(),
            vec![Indicator::new("s_t", AdminLevel::City)],
            Some("asking".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(valuation.indicator("s_t"), Some(&json!(3.2)));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn cadastre_errors_propagate() {
    let transport = RecordingTransport::responding(404, "");
    let client = AsyncApiClient::new(client(&transport));

    let err = client.cadastre("1234", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[tokio::test]
async fn run_exposes_sync_client() {
    let transport = RecordingTransport::responding(200, "{}");
    let client = AsyncApiClient::new(client(&transport));

    let request = client
        .run(|c| c.build_cadastre_request("1234", Some("remote-only")))
        .await
        .unwrap();
    assert!(request.url.as_str().ends_with("/cadastre/1234?mode=remote-only"));
    assert!(transport.requests().is_empty());
}
