//! Great circle distances between WGS84 points, using the haversine formula
//! on a sphere of radius [`EARTH_RADIUS_KM`].

/// Mean earth radius, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// Degrees to radians, as `π · degree / 180`
#[must_use]
pub fn to_radian(degree: f64) -> f64 {
    std::f64::consts::PI * degree / 180.0
}

/// Great circle distance in kilometers between two WGS84 points given as
/// longitude/latitude in degrees. The input is not range checked.
#[must_use]
pub fn between_wgs84_degree(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let dlon = to_radian(lon2 - lon1);
    let dlat = to_radian(lat2 - lat1);

    let a = (dlat / 2.).sin() * (dlat / 2.).sin()
        + to_radian(lat1).cos() * to_radian(lat2).cos() * ((dlon / 2.).sin() * (dlon / 2.).sin());
    let angle = 2. * a.sqrt().atan2((1. - a).sqrt());

    angle * EARTH_RADIUS_KM
}

/// Alias of [`between_wgs84_degree`]
#[must_use]
pub fn haversine_distance_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    between_wgs84_degree(lon1, lat1, lon2, lat2)
}
