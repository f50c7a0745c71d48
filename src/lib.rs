//! *Conversion from the French Lambert conformal conic zones to WGS84*.
//!
//! Lambert I, II, III, IV, II étendu and Lambert-93 coordinates are turned
//! into WGS84 longitude, latitude and ellipsoidal height. For the historical
//! zones (all but Lambert-93) this involves a trip through the geocentric
//! cartesian space, where the NTF (Clarke IGN) to WGS84 datum shift is applied.
//!
//! ```rust
//! use lambert::prelude::*;
//! # fn main() -> Result<(), Error> {
//! let geo = convert_to_wgs84_deg(668832.5384, 6950138.7285, LambertZone::Lambert93)?;
//! assert!((geo[0] - 2.5686536326).abs() < 1e-8);
//! assert!((geo[1] - 49.6496109858).abs() < 1e-8);
//! # Ok(())
//! # }
//! ```
//!
//! The great circle distance between two WGS84 points is available from
//! [`distance::between_wgs84_degree`].

pub mod conformal;
pub mod converter;
pub mod datum;
pub mod distance;
pub mod ellipsoid;
pub mod meridians;
pub mod point;
pub mod settings;
pub mod zone;

use thiserror::Error;

/// Preamble for users of the library
pub mod prelude {
    pub use crate::converter::convert_to_wgs84;
    pub use crate::converter::convert_to_wgs84_deg;
    pub use crate::converter::convert_xy_to_wgs84;
    pub use crate::converter::Converter;
    pub use crate::datum::DatumShift;
    pub use crate::distance::haversine_distance_km;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::point::GeoPoint;
    pub use crate::settings::Settings;
    pub use crate::zone::LambertZone;
    pub use crate::zone::ZoneParameters;
    pub use crate::Direction;
    pub use crate::Error;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::point::GeoPoint;
    pub use crate::settings::Settings;
    pub use crate::zone::LambertZone;
    pub use crate::zone::ZoneParameters;
    pub use crate::Direction;
    pub use crate::Error;
}

pub use converter::convert_to_wgs84;
pub use converter::convert_to_wgs84_deg;
pub use converter::convert_xy_to_wgs84;
pub use distance::haversine_distance_km;
pub use point::GeoPoint;
pub use zone::LambertZone;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{solver}: no convergence after {iterations} iterations")]
    ConvergenceFailure {
        solver: &'static str,
        iterations: usize,
    },

    #[error("invalid Lambert zone: {0}")]
    InvalidZone(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// `Fwd`: Indicate that a two-way operation should run in the *forward* direction.
/// `Inv`: Indicate that a two-way operation should run in the *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}
