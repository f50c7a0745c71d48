use super::*;

impl Ellipsoid {
    // ----- Cartesian <--> Geographic conversion ----------------------------------

    /// Geographic to cartesian conversion.
    ///
    /// The input is `(longitude, latitude, height)` in radians and meters,
    /// the output is geocentric `(X, Y, Z)` in meters.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation
    pub fn cartesian(&self, geographic: &GeoPoint) -> GeoPoint {
        let lam = geographic[0];
        let phi = geographic[1];
        let h = geographic[2];

        let N = self.prime_vertical_radius_of_curvature(phi);
        let cosphi = phi.cos();
        let sinphi = phi.sin();
        let coslam = lam.cos();
        let sinlam = lam.sin();

        let X = (N + h) * cosphi * coslam;
        let Y = (N + h) * cosphi * sinlam;
        let Z = (N * (1. - self.e * self.e) + h) * sinphi;

        GeoPoint::raw(X, Y, Z)
    }

    /// Cartesian to geographic conversion, with longitudes reckoned from
    /// `meridian`.
    ///
    /// The latitude is found by fixed point iteration on
    ///
    ///   𝜙ᵢ₊₁ = atan( Z/p / (1 - a e² cos 𝜙ᵢ / (p sqrt(1 - e² sin² 𝜙ᵢ))) )
    ///
    /// where p is the distance from the Z axis. Note that the longitude is
    /// computed as `atan(Y/X)`, so points with X = 0 are degenerate, and
    /// points with X < 0 come out in the opposite half plane.
    #[allow(non_snake_case)] // make it possible to mimic math notation
    pub fn geographic(
        &self,
        cartesian: &GeoPoint,
        meridian: f64,
        settings: &Settings,
    ) -> Result<GeoPoint, Error> {
        let X = cartesian[0];
        let Y = cartesian[1];
        let Z = cartesian[2];

        let a = self.a;
        let e = self.e;

        let lam = meridian + (Y / X).atan();

        // The perpendicular distance from the point coordinate to the Z-axis
        let p = (X * X + Y * Y).sqrt();

        let step = |phi: f64| {
            (Z / p / (1. - a * e * e * phi.cos() / (p * (1. - e * e * phi.sin() * phi.sin()).sqrt())))
                .atan()
        };

        let mut phi0 = (Z / (p * (1. - (a * e * e) / (X * X + Y * Y + Z * Z).sqrt()))).atan();
        let mut phi = step(phi0);
        let mut iterations = 1;

        while (phi - phi0).abs() > settings.epsilon() {
            if iterations >= settings.max_iterations() {
                warn!("geographic: no convergence for ({X}, {Y}, {Z})");
                return Err(Error::ConvergenceFailure {
                    solver: "geographic",
                    iterations,
                });
            }
            phi0 = phi;
            phi = step(phi0);
            iterations += 1;
        }
        trace!("geographic: converged after {iterations} iterations");

        let h = p / phi.cos() - a / (1. - e * e * phi.sin() * phi.sin()).sqrt();

        Ok(GeoPoint::raw(lam, phi, h))
    }
}
