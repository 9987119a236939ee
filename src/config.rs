use std::time::Duration;

pub const DEFAULT_VALUATION_HOST: &str = "https://reds.urbandataanalytics.com";
pub const DEFAULT_GEOCODER_HOST: &str = "https://geocoder.urbandataanalytics.com";

pub const API_VERSION: &str = "v1.0";

/// Path segments preceding the version for the valuation service.
pub const VALUATION_PREFIX: [&str; 2] = ["assets", "api"];
/// Path segments preceding the version for the geocoder service.
pub const GEOCODER_PREFIX: [&str; 2] = ["geocoder", "api"];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_REDIRECTS: usize = 10;

pub const ALLOWED_PRICE_TYPES: [&str; 2] = ["asking", "closing"];
pub const ALLOWED_CADASTRE_MODES: [&str; 4] =
    ["local-only", "remote-only", "local-first", "remote-first"];
