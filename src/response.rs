//! Response interpretation: status table, error envelope, and body decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, ApplicationError, Result};
use crate::models::{Cadastre, Indicator, Valuation};
use crate::transport::HttpResponse;

/// A decoded result together with the exchange that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// URL the request was sent to, query string included.
    pub url: Url,
    pub status: u16,
    /// Body exactly as received.
    pub raw_body: String,
    pub data: T,
}

/// Reason phrase for a status that is not a success.
pub fn reason(status: u16) -> &'static str {
    match status {
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unexpected HTTP code",
    }
}

/// Map any status other than 200/201 to [`ApiError::Http`].
///
/// When the body carries an error envelope it is attached to the error.
pub fn check_status(response: &HttpResponse) -> Result<()> {
    if matches!(response.status, 200 | 201) {
        return Ok(());
    }
    let application = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| envelope(&body))
        .map(Box::new);
    tracing::warn!(status = response.status, "unsuccessful response from uDA API");
    Err(ApiError::Http {
        status: response.status,
        reason: reason(response.status),
        application,
    })
}

/// Extract the `{"error": {...}}` envelope, if present.
fn envelope(body: &Value) -> Option<ApplicationError> {
    let error = body.get("error")?;
    if !error.is_object() {
        return None;
    }
    serde_json::from_value(error.clone()).ok()
}

/// Check the status, parse the body as JSON, and surface error envelopes.
pub fn decode_body(response: &HttpResponse) -> Result<Value> {
    check_status(response)?;
    let body: Value = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Decode(format!("response is not valid JSON: {e}")))?;
    if let Some(application) = envelope(&body) {
        tracing::warn!(error = %application, "uDA API returned an application error");
        return Err(ApiError::Application(application));
    }
    if body.get("error").is_some() {
        return Err(ApiError::Decode(
            "response carries a malformed error envelope".to_string(),
        ));
    }
    Ok(body)
}

/// Decode a successful body into a single record.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    let body = decode_body(response)?;
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a valuation response, keying indicator values by the codes in
/// `requested`.
pub fn parse_valuation(response: &HttpResponse, requested: &[Indicator]) -> Result<Valuation> {
    let body = decode_body(response)?;
    Valuation::from_body(body, requested)
}

pub fn parse_cadastre(response: &HttpResponse) -> Result<Cadastre> {
    decode(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn status_table() {
        for (status, expected) in [
            (204, "No Content"),
            (400, "Bad Request"),
            (401, "Unauthorized"),
            (404, "Not Found"),
            (429, "Too Many Requests"),
            (500, "Internal Server Error"),
            (202, "Unexpected HTTP code"),
            (503, "Unexpected HTTP code"),
        ] {
            match check_status(&response(status, "")) {
                Err(ApiError::Http {
                    status: s, reason, ..
                }) => {
                    assert_eq!(s, status);
                    assert_eq!(reason, expected);
                }
                other => panic!("status {status}: unexpected {other:?}"),
            }
        }
        assert!(check_status(&response(200, "")).is_ok());
        assert!(check_status(&response(201, "")).is_ok());
    }

    #[test]
    fn error_envelope_is_attached_to_http_errors() {
        let body = r#"{"error":{"type":"auth","instance":"/x","title":"Denied","detail":"bad token"}}"#;
        match check_status(&response(401, body)) {
            Err(ApiError::Http {
                application: Some(app),
                ..
            }) => assert_eq!(app.title, "Denied"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = decode_body(&response(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn malformed_envelope_is_decode_error() {
        let err = decode_body(&response(200, r#"{"error":"boom"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
