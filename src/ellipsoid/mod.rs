mod cartesians;
pub(crate) mod latitudes;

use crate::internal::*;

pub use latitudes::latitude_from_isometric;

/// The Clarke 1880 IGN ellipsoid, underlying the NTF datum of Lambert I-IV
/// and II étendu
pub const CLARKE_IGN: Ellipsoid = Ellipsoid {
    a: 6_378_249.2,
    e: 0.08248325676,
};

/// The WGS84 ellipsoid, as used by Lambert-93 and for all output
pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6_378_137.0,
    e: 0.08181919106,
};

/// An ellipsoid of revolution, given by its semimajor axis and (first)
/// eccentricity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    e: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        WGS84
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, eccentricity: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            e: eccentricity,
        }
    }

    /// Predefined ellipsoid
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        match name.to_lowercase().as_str() {
            "wgs84" => Ok(WGS84),
            "clarke_ign" | "clrk80ign" | "clarke_1880_ign" => Ok(CLARKE_IGN),
            _ => Err(Error::NotFound(format!("ellipsoid {name}"))),
        }
    }

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.e
    }

    /// The squared eccentricity *e²*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.e * self.e
    }

    /// The radius of curvature in the prime vertical, *N*
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.a / (1. - self.e * self.e * latitude.sin() * latitude.sin()).sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------
