//! Reference meridians, as longitudes in radians.
//!
//! The Lambert I-IV and II étendu zones are inverted relative to [`PARIS`],
//! and their WGS84 output is then offset by [`GREENWICH`]. Lambert-93 is
//! centered on the 3°E meridian of the IERS reference frame.

/// Origin meridian for the NTF based zones
pub const PARIS: f64 = 0.;

/// Offset applied when recovering WGS84 longitudes from NTF based zones.
/// Numerically, this is the longitude of Paris east of Greenwich
/// (2°20'14.025").
pub const GREENWICH: f64 = 0.04079234433;

/// Central meridian of Lambert-93
pub const IERS: f64 = 3.0 * std::f64::consts::PI / 180.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(PARIS, 0.);
        assert!((IERS.to_degrees() - 3.).abs() < 1e-14);
        // 2°20'14.025" east of Greenwich
        let paris = 2. + (20. + 14.025 / 60.) / 60.;
        assert!((GREENWICH.to_degrees() - paris).abs() < 1e-8);
    }
}
