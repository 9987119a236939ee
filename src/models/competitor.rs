use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::asset::Floor;
use super::codes::{
    ConstructionType, EnergyCert, Furnished, Operation, PropertyType, Status, Usage,
};
use super::model::Model;

// ---------------------------------------------------------------------------
// Competitor -- a comparable property returned with a valuation
// ---------------------------------------------------------------------------

/// A comparable property the service selected to support a valuation.
///
/// Carries every [`Asset`](super::Asset) field plus read-only descriptive
/// data. Only ever decoded from a response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Competitor {
    // -- Asset fields --
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avm: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_zones: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors_geom: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_type: Option<ConstructionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attrs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_cert: Option<EnergyCert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<Floor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnished: Option<Furnished>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gymn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::model::finite_float"
    )]
    pub lat: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::model::finite_float"
    )]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_east: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_north: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_south: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_west: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outside: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_sale: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_rent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sports_area: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    // -- Competitor fields --
    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin2: Option<String>,
    /// Municipality name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin3: Option<String>,
    /// District name or code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin4: Option<String>,
    /// Neighborhood name or code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// Days between `date_in` and `date_out`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    /// Meters from the valued asset.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::model::finite_float"
    )]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    /// Found in the stock market rather than the closed market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stock: Option<bool>,
    /// Subsidized housing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vpo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant: Option<bool>,
    /// Similarity: 1.0 very similar, 0.5 somewhat similar, 0.0 not necessarily similar.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::model::finite_float"
    )]
    pub rank: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Model for Competitor {
    const NAME: &'static str = "Competitor";
    const MANDATORY_FIELDS: &'static [&'static str] =
        &["area", "id", "lat", "lon", "portfolio_id"];
}
