//! Inverse Lambert conformal conic, from the zone constants (n, c, xs, ys)
use crate::ellipsoid::latitude_from_isometric;
use crate::internal::*;

/// Planar Lambert coordinates to geographic `(longitude, latitude, 0)` in
/// radians, on the ellipsoid of eccentricity `e`, with longitudes reckoned
/// from `meridian`.
///
/// Points on the pole of the cone (r = 0) or on its central meridian
/// (x = xs) are not special cased.
pub fn lambert_to_geographic(
    planar: &GeoPoint,
    zone: &ZoneParameters,
    meridian: f64,
    e: f64,
    settings: &Settings,
) -> Result<GeoPoint, Error> {
    let ZoneParameters { n, c, xs, ys } = *zone;
    let x = planar[0];
    let y = planar[1];

    // Distance from the pole of the cone, and the convergence of meridians
    let r = ((x - xs) * (x - xs) + (y - ys) * (y - ys)).sqrt();
    let gamma = ((x - xs) / (ys - y)).atan();

    let lon = meridian + gamma / n;
    let isometric = -1. / n * (r / c).abs().ln();
    let lat = latitude_from_isometric(isometric, e, settings)?;

    Ok(GeoPoint::raw(lon, lat, 0.))
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::WGS84;
    use crate::meridians::IERS;
    use float_eq::assert_float_eq;

    #[test]
    fn lambert93() -> Result<(), Error> {
        let zone = LambertZone::Lambert93.parameters();
        let planar = GeoPoint::planar(668832.5384, 6950138.7285);
        let geo = lambert_to_geographic(&planar, &zone, IERS, WGS84.eccentricity(), &Settings::default())?;
        assert_float_eq!(geo[0], 0.044831463232273064, abs <= 1e-14);
        assert_float_eq!(geo[1], 0.866549184037456, abs <= 1e-14);
        assert_eq!(geo[2], 0.);
        Ok(())
    }

    #[test]
    fn central_meridian() -> Result<(), Error> {
        // On the central meridian, the longitude is the meridian itself
        let zone = LambertZone::Lambert93.parameters();
        let planar = GeoPoint::planar(zone.xs, 6_600_000.);
        let geo = lambert_to_geographic(&planar, &zone, IERS, WGS84.eccentricity(), &Settings::default())?;
        assert_eq!(geo[0], IERS);
        // Latitude of origin of Lambert-93 is 46°30'N, at northing 6 600 000
        assert_float_eq!(geo[1].to_degrees(), 46.5, abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn cone_pole() -> Result<(), Error> {
        // r = 0 gives an infinite isometric latitude, i.e. the North Pole
        let zone = LambertZone::Lambert93.parameters();
        let planar = GeoPoint::planar(zone.xs + 1e-3, zone.ys);
        let geo = lambert_to_geographic(&planar, &zone, IERS, WGS84.eccentricity(), &Settings::default())?;
        assert_float_eq!(geo[1], std::f64::consts::FRAC_PI_2, abs <= 1e-9);
        Ok(())
    }
}
