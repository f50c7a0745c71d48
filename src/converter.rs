//! Lambert to WGS84 conversion
//!
//! Lambert-93 is defined on RGF93, which for this purpose coincides with
//! WGS84, so it only takes an inverse projection. The other zones are
//! defined on NTF (Clarke 1880 IGN, Paris meridian), and go through
//!
//! 1. inverse projection to NTF geographic coordinates,
//! 2. conversion to NTF geocentric cartesian coordinates,
//! 3. the NTF to WGS84 translation,
//! 4. conversion to WGS84 geographic coordinates.
use crate::conformal::lambert_to_geographic;
use crate::datum::NTF_TO_WGS84;
use crate::ellipsoid::{CLARKE_IGN, WGS84};
use crate::internal::*;
use crate::meridians;

/// Lambert to WGS84 converter, carrying the settings of the iterative
/// latitude solvers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Converter {
    settings: Settings,
}

impl Converter {
    #[must_use]
    pub fn new(settings: Settings) -> Converter {
        Converter { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Convert a Lambert point, `(easting, northing, _)`, to WGS84
    /// `(longitude, latitude, height)` in radians and meters.
    ///
    /// The third element of the input is ignored. For Lambert-93 the
    /// height is always 0, for the other zones it is the ellipsoidal
    /// height picked up through the datum shift.
    pub fn convert_to_wgs84(&self, planar: &GeoPoint, zone: LambertZone) -> Result<GeoPoint, Error> {
        let parameters = zone.parameters();

        if zone.is_wgs84_native() {
            debug!("{zone}: inverse projection on WGS84");
            return lambert_to_geographic(
                planar,
                &parameters,
                meridians::IERS,
                WGS84.eccentricity(),
                &self.settings,
            );
        }

        debug!("{zone}: inverse projection on Clarke IGN, then NTF to WGS84");
        let ntf = lambert_to_geographic(
            planar,
            &parameters,
            meridians::PARIS,
            CLARKE_IGN.eccentricity(),
            &self.settings,
        )?;
        let cartesian = CLARKE_IGN.cartesian(&ntf);
        let cartesian = NTF_TO_WGS84.apply(&cartesian, Direction::Fwd);
        WGS84.geographic(&cartesian, meridians::GREENWICH, &self.settings)
    }

    /// Convert Lambert coordinates `(x, y)` to WGS84 in radians
    pub fn convert_xy_to_wgs84(&self, x: f64, y: f64, zone: LambertZone) -> Result<GeoPoint, Error> {
        self.convert_to_wgs84(&GeoPoint::planar(x, y), zone)
    }

    /// Convert Lambert coordinates `(x, y)` to WGS84 in degrees.
    ///
    /// All three elements of the result are multiplied by `180/π`,
    /// *including the height*. Divide `result[2]` by
    /// [`RADIAN_TO_DEGREE`](crate::point::RADIAN_TO_DEGREE) to get meters back,
    /// or use [`convert_xy_to_wgs84`](Converter::convert_xy_to_wgs84) followed
    /// by [`GeoPoint::to_degrees`] to keep the height unscaled.
    pub fn convert_to_wgs84_deg(&self, x: f64, y: f64, zone: LambertZone) -> Result<GeoPoint, Error> {
        Ok(self.convert_xy_to_wgs84(x, y, zone)?.to_degree())
    }

    /// Convert a slice of Lambert points in place, to WGS84 radians.
    ///
    /// Returns the number of successful conversions. Points that fail to
    /// convert are replaced by [`GeoPoint::nan`].
    pub fn apply(&self, zone: LambertZone, operands: &mut [GeoPoint]) -> usize {
        let mut successes = 0_usize;
        for (i, coord) in operands.iter_mut().enumerate() {
            match self.convert_to_wgs84(coord, zone) {
                Ok(geo) => {
                    *coord = geo;
                    successes += 1;
                }
                Err(err) => {
                    warn!("{zone}: point #{i} {:?} rejected: {err}", coord.0);
                    *coord = GeoPoint::nan();
                }
            }
        }
        successes
    }
}

// ----- Convenience functions using the default settings ------------------------------

/// Convert a Lambert point to WGS84 in radians, using the default [`Settings`]
pub fn convert_to_wgs84(planar: &GeoPoint, zone: LambertZone) -> Result<GeoPoint, Error> {
    Converter::default().convert_to_wgs84(planar, zone)
}

/// Convert Lambert coordinates to WGS84 in radians, using the default [`Settings`]
pub fn convert_xy_to_wgs84(x: f64, y: f64, zone: LambertZone) -> Result<GeoPoint, Error> {
    Converter::default().convert_xy_to_wgs84(x, y, zone)
}

/// Convert Lambert coordinates to WGS84 in degrees, using the default [`Settings`].
/// See [`Converter::convert_to_wgs84_deg`] regarding the scaled height.
pub fn convert_to_wgs84_deg(x: f64, y: f64, zone: LambertZone) -> Result<GeoPoint, Error> {
    Converter::default().convert_to_wgs84_deg(x, y, zone)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::RADIAN_TO_DEGREE;
    use float_eq::assert_float_eq;

    const X: f64 = 668832.5384;
    const Y: f64 = 6950138.7285;

    #[test]
    fn lambert93() -> Result<(), Error> {
        let geo = convert_xy_to_wgs84(X, Y, LambertZone::Lambert93)?;
        assert_float_eq!(geo.0, [0.044831463232273064, 0.866549184037456, 0.], abs_all <= 1e-14);

        let deg = convert_to_wgs84_deg(X, Y, LambertZone::Lambert93)?;
        assert_float_eq!(deg.0, [2.5686536326051743, 49.649610985851474, 0.], abs_all <= 1e-12);
        Ok(())
    }

    #[test]
    fn lambert_iv() -> Result<(), Error> {
        let geo = convert_xy_to_wgs84(X, Y, LambertZone::LambertIV)?;
        assert_float_eq!(geo[0], -1.3676823532281193, abs <= 1e-12);
        assert_float_eq!(geo[1], 1.5407374270761811, abs <= 1e-12);
        assert_float_eq!(geo[2], 81.892038438469172, abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn degree_height_is_scaled() -> Result<(), Error> {
        let rad = convert_xy_to_wgs84(X, Y, LambertZone::LambertIV)?;
        let deg = convert_to_wgs84_deg(X, Y, LambertZone::LambertIV)?;
        assert_eq!(deg[0], rad[0] * RADIAN_TO_DEGREE);
        assert_eq!(deg[1], rad[1] * RADIAN_TO_DEGREE);
        assert_eq!(deg[2], rad[2] * RADIAN_TO_DEGREE);
        assert_eq!(rad.to_degrees()[2], rad[2]);
        Ok(())
    }

    #[test]
    fn point_and_xy_forms_agree() -> Result<(), Error> {
        for zone in LambertZone::ALL {
            let a = convert_xy_to_wgs84(X, Y, zone)?;
            // The third input element is ignored
            let b = convert_to_wgs84(&GeoPoint::raw(X, Y, 1234.), zone)?;
            assert_eq!(a, b);
        }
        Ok(())
    }

    #[test]
    fn paris() -> Result<(), Error> {
        // Roughly the same spot in Paris, given in Lambert-93 and Lambert II étendu
        let l93 = convert_to_wgs84_deg(652381.0, 6862047.0, LambertZone::Lambert93)?;
        let l2e = convert_to_wgs84_deg(601000.0, 2429000.0, LambertZone::LambertIIExtended)?;
        for geo in [l93, l2e] {
            assert_float_eq!(geo[0], 2.35, abs <= 0.01);
            assert_float_eq!(geo[1], 48.857, abs <= 0.01);
        }
        Ok(())
    }

    #[test]
    fn batch() -> Result<(), Error> {
        let converter = Converter::default();
        let mut operands = [
            GeoPoint::planar(X, Y),
            GeoPoint::planar(652381.0, 6862047.0),
        ];
        let expected = [
            converter.convert_xy_to_wgs84(X, Y, LambertZone::Lambert93)?,
            converter.convert_xy_to_wgs84(652381.0, 6862047.0, LambertZone::Lambert93)?,
        ];
        assert_eq!(converter.apply(LambertZone::Lambert93, &mut operands), 2);
        assert_eq!(operands, expected);
        Ok(())
    }

    #[test]
    fn batch_failures_become_nan() -> Result<(), Error> {
        let converter = Converter::new(Settings::new(1e-15, 1)?);
        let mut operands = [GeoPoint::planar(X, Y)];
        assert_eq!(converter.apply(LambertZone::Lambert93, &mut operands), 0);
        assert!(operands[0].is_nan());
        Ok(())
    }

    #[test]
    fn convergence_failure() -> Result<(), Error> {
        let converter = Converter::new(Settings::new(1e-15, 1)?);
        for zone in LambertZone::ALL {
            let result = converter.convert_xy_to_wgs84(X, Y, zone);
            assert!(matches!(result, Err(Error::ConvergenceFailure { .. })));
        }
        assert_eq!(converter.settings().max_iterations(), 1);
        Ok(())
    }
}
