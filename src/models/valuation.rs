use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::asset::Asset;
use super::competitor::Competitor;
use super::indicator::Indicator;
use crate::error::{ApiError, Result};

// ---------------------------------------------------------------------------
// Valuation
// ---------------------------------------------------------------------------

/// Result of a valuation call.
///
/// `indicators` maps each requested indicator code to the value the service
/// returned for it, in request order. `best_score` and `forecast` are kept as
/// the service sent them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Valuation {
    pub id: i64,
    pub competitors: Vec<Competitor>,
    pub indicators: Map<String, Value>,
    pub attributes: Option<Asset>,
    pub best_score: Option<Value>,
    pub forecast: Option<Value>,
}

impl Valuation {
    /// Value returned for an indicator code, if it was requested.
    pub fn indicator(&self, code: &str) -> Option<&Value> {
        self.indicators.get(code)
    }

    /// Decode a successful response body.
    ///
    /// The response's `indicators` array carries bare values in the order the
    /// indicators were requested; each is keyed by the code at the same
    /// position in `requested`.
    pub(crate) fn from_body(body: Value, requested: &[Indicator]) -> Result<Self> {
        let body: ValuationBody =
            serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        // Missing and null lists are both read as empty.
        let values = body.indicators.unwrap_or_default();
        if values.len() != requested.len() {
            return Err(ApiError::Decode(format!(
                "expected {} indicator values, got {}",
                requested.len(),
                values.len()
            )));
        }

        let mut indicators = Map::with_capacity(requested.len());
        for (position, (request, value)) in requested.iter().zip(values).enumerate() {
            let code = request.indicator.clone().ok_or(ApiError::Validation {
                record: "Indicator",
                field: "indicator",
                position: Some(position),
            })?;
            indicators.insert(code, value);
        }

        Ok(Valuation {
            id: body.id,
            competitors: body.competitors.unwrap_or_default(),
            indicators,
            attributes: body.attributes,
            best_score: body.best_score,
            forecast: body.forecast,
        })
    }
}

/// Wire shape of a successful valuation response.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ValuationBody {
    id: i64,
    #[serde(default)]
    competitors: Option<Vec<Competitor>>,
    #[serde(default)]
    indicators: Option<Vec<Value>>,
    #[serde(default)]
    attributes: Option<Asset>,
    #[serde(default)]
    best_score: Option<Value>,
    #[serde(default)]
    forecast: Option<Value>,
}
