//! The asset record sent to the valuation endpoint.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::codes::{
    ConstructionType, EnergyCert, Furnished, Operation, PropertyType, Status, Usage,
};
use super::model::{serialize_finite, Model};

// ---------------------------------------------------------------------------
// Floor
// ---------------------------------------------------------------------------

/// Floor, level or story. Any positive integer is a regular floor; the
/// fractional values below have a fixed meaning.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Floor(pub f64);

impl Serialize for Floor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_finite(self.0, serializer)
    }
}

impl Floor {
    pub const LOWER_GROUND: Floor = Floor(-0.5);
    pub const GROUND: Floor = Floor(0.0);
    pub const MEZZANINE: Floor = Floor(0.5);

    pub fn level(n: u32) -> Self {
        Floor(f64::from(n))
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// A real-estate unit.
///
/// Every field is optional so the record can be filled in incrementally;
/// [`Model::validate`] checks the mandatory ones before a request is built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Asset {
    /// Air conditioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<bool>,
    /// Postal address (street name, number, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Operation managed by a real estate agency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<bool>,
    /// Size in m². Decimal values are not supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<i64>,
    /// Initial valuation, same shape as `best_score`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avm: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i64>,
    /// Computed by the service from lat/lon. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_id: Option<i64>,
    /// Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_zones: Option<bool>,
    /// GeoJSON restricting where competitors are searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors_geom: Option<Value>,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_in: Option<String>,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
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
    /// Caller identifier, unique within the portfolio.
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
    /// Asking price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Asking price for a sale. Takes precedence over `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_sale: Option<i64>,
    /// Asking price for a rental. Takes precedence over `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_rent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    /// External reference, e.g. the Spanish "Referencia Catastral".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Last requested report. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i64>,
    /// Whether this is a simulated valuation rather than a physical property.
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
}

impl Asset {
    /// An asset with only its mandatory fields set.
    pub fn new(id: i64, portfolio_id: i64, area: i64, lat: f64, lon: f64) -> Self {
        Self {
            id: Some(id),
            portfolio_id: Some(portfolio_id),
            area: Some(area),
            lat: Some(lat),
            lon: Some(lon),
            ..Default::default()
        }
    }
}

impl Model for Asset {
    const NAME: &'static str = "Asset";
    const MANDATORY_FIELDS: &'static [&'static str] =
        &["area", "id", "lat", "lon", "portfolio_id"];
}
