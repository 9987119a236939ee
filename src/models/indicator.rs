use serde::{Deserialize, Serialize};

use super::codes::AdminLevel;
use super::model::Model;

// ---------------------------------------------------------------------------
// Indicator codes
// ---------------------------------------------------------------------------

/// Units for sale/rent in a quarter divided by the housing stock (%).
pub const STOCK_RATIO: &str = "s_p";
/// Units for sale/rent in a quarter.
pub const STOCK_UNITS: &str = "s_u";
/// Quarter-on-quarter change of `s_u` (%).
pub const STOCK_UNITS_QOQ: &str = "s_u_qq";
/// Percentile of `s_u_qq`.
pub const STOCK_UNITS_QOQ_RANK: &str = "s_u_qq_rk";
/// Quarter-on-quarter change of units sold/leased (%).
pub const OUTPUT_UNITS_QOQ: &str = "o_u_qq";
/// Percentile of `o_u_qq`.
pub const OUTPUT_UNITS_QOQ_RANK: &str = "o_u_qq_rk";
/// Percentile of the quarter-on-quarter change of new stock.
pub const INPUT_UNITS_QOQ_RANK: &str = "i_u_qq_rk";
/// Absorption: outputs of the period over units in stock (%).
pub const ABSORPTION: &str = "o_a";
/// Average price of properties sold/rented in a quarter (€).
pub const AVG_PRICE: &str = "o_pm";
/// Average unit price of properties sold/rented in a quarter (€/m²).
pub const AVG_UNIT_PRICE: &str = "o_pu";
/// Quarter-on-quarter change of `o_pu` (%).
pub const AVG_UNIT_PRICE_QOQ: &str = "o_pu_qq";
/// Estimated weeks to sell/rent.
pub const TIME_TO_SELL: &str = "s_t";
/// Quarter-on-quarter change of `s_t` (%).
pub const TIME_TO_SELL_QOQ: &str = "s_t_qq";
/// Gross rental yield (%).
pub const RENT_YIELD: &str = "y_r";
/// Gross sale yield after 12 months (%).
pub const SALE_YIELD: &str = "y_s";
/// uDA investment grade (0-10).
pub const RED_GRADE: &str = "r_g";
/// Negotiation factor between asking and closing prices (%).
pub const NEGOTIATION_FACTOR: &str = "s_fn";

// ---------------------------------------------------------------------------
// Indicator
// ---------------------------------------------------------------------------

/// A market metric requested alongside a valuation.
///
/// `taxonomy` segments the result (currently only `"P"`, by area); `period`
/// is `YYYY` or `YYYYQn` and defaults to the latest available period.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Indicator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<AdminLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl Indicator {
    pub fn new(code: impl Into<String>, admin_level: AdminLevel) -> Self {
        Self {
            indicator: Some(code.into()),
            admin_level: Some(admin_level),
            ..Default::default()
        }
    }

    pub fn taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomy = Some(taxonomy.into());
        self
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }
}

impl Model for Indicator {
    const NAME: &'static str = "Indicator";
    const MANDATORY_FIELDS: &'static [&'static str] = &["indicator", "admin_level"];
}
