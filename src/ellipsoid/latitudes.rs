use crate::internal::*;
use std::f64::consts::FRAC_PI_2;

// ----- Latitudes -------------------------------------------------------------

/// Isometric latitude, 𝜓, to geographic latitude, 𝜙, on an ellipsoid of
/// eccentricity `e`.
///
/// Starting from the spherical solution, 𝜙₀ = 2 atan(exp 𝜓) - 𝜋/2, the
/// fixed point iteration
///
///   𝜙ᵢ₊₁ = 2 atan( ((1 + e sin 𝜙ᵢ) / (1 - e sin 𝜙ᵢ))^(e/2) · exp 𝜓 ) - 𝜋/2
///
/// is run until two consecutive values differ by at most
/// `settings.epsilon()`. The last computed value is returned.
pub fn latitude_from_isometric(
    isometric: f64,
    e: f64,
    settings: &Settings,
) -> Result<f64, Error> {
    let exp_psi = isometric.exp();
    let step = |phi: f64| {
        let esinphi = e * phi.sin();
        2. * (((1. + esinphi) / (1. - esinphi)).powf(e / 2.) * exp_psi).atan() - FRAC_PI_2
    };

    let mut phi0 = 2. * exp_psi.atan() - FRAC_PI_2;
    let mut phi = step(phi0);
    let mut iterations = 1;

    // A NaN delta ends the loop: degenerate input propagates as NaN
    while (phi - phi0).abs() > settings.epsilon() {
        if iterations >= settings.max_iterations() {
            warn!("latitude_from_isometric: no convergence for 𝜓 = {isometric}");
            return Err(Error::ConvergenceFailure {
                solver: "latitude_from_isometric",
                iterations,
            });
        }
        phi0 = phi;
        phi = step(phi0);
        iterations += 1;
    }

    trace!("latitude_from_isometric: converged after {iterations} iterations");
    Ok(phi)
}

// ----- Tests ---------------------------------------------------------------------
