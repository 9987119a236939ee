use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codes::{PropertyType, Usage};
use super::model::Model;

/// A property registry record returned by the cadastre lookup.
///
/// `origin` is `local` when the data comes from uDA's own database and
/// `remote` when it was fetched from the registry service named in `domain`
/// (e.g. `catastro`), whose raw answer is kept in `payload`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cadastre {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::model::finite_float"
    )]
    pub lon: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::model::finite_float"
    )]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Model for Cadastre {
    const NAME: &'static str = "Cadastre";
    const MANDATORY_FIELDS: &'static [&'static str] = &[];
}
