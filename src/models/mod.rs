pub mod asset;
pub mod cadastre;
pub mod codes;
pub mod competitor;
pub mod indicator;
pub mod model;
pub mod valuation;

pub use asset::*;
pub use cadastre::*;
pub use codes::*;
pub use competitor::*;
pub use indicator::Indicator;
pub use model::*;
pub use valuation::*;
