//! Three parameter datum shifts: plain translations in the geocentric
//! cartesian space.
use crate::internal::*;

/// NTF (Clarke 1880 IGN) to WGS84, in meters
pub const NTF_TO_WGS84: DatumShift = DatumShift {
    dx: -168.,
    dy: -60.,
    dz: 320.,
};

/// A geocentric translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatumShift {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl DatumShift {
    #[must_use]
    pub fn new(dx: f64, dy: f64, dz: f64) -> DatumShift {
        DatumShift { dx, dy, dz }
    }

    /// Translate a geocentric cartesian point. `Fwd` adds the shift,
    /// `Inv` subtracts it.
    #[must_use]
    pub fn apply(&self, cartesian: &GeoPoint, direction: Direction) -> GeoPoint {
        match direction {
            Direction::Fwd => cartesian.translate(self.dx, self.dy, self.dz),
            Direction::Inv => cartesian.translate(-self.dx, -self.dy, -self.dz),
        }
    }
}
