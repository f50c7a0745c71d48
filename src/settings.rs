use crate::internal::*;

/// Default convergence threshold of the fixed-point latitude solvers (radians)
pub const DEFAULT_EPS: f64 = 1e-10;

/// Default iteration cap of the fixed-point latitude solvers
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Tuning of the two fixed-point latitude solvers (isometric to geographic
/// latitude, and cartesian to geographic).
///
/// The solvers stop when two consecutive latitudes differ by at most
/// `epsilon`, and give up with [`Error::ConvergenceFailure`] after
/// `max_iterations` refinements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    epsilon: f64,
    max_iterations: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            epsilon: DEFAULT_EPS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Settings {
    /// User defined settings. `epsilon` must be a positive finite number,
    /// and at least one iteration must be allowed.
    pub fn new(epsilon: f64, max_iterations: usize) -> Result<Settings, Error> {
        if !(epsilon.is_finite() && epsilon > 0.) {
            return Err(Error::InvalidSettings(format!(
                "epsilon must be positive and finite, got {epsilon}"
            )));
        }
        if max_iterations == 0 {
            return Err(Error::InvalidSettings(String::from(
                "max_iterations must be at least 1",
            )));
        }
        Ok(Settings {
            epsilon,
            max_iterations,
        })
    }

    pub fn with_epsilon(self, epsilon: f64) -> Result<Settings, Error> {
        Settings::new(epsilon, self.max_iterations)
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> Result<Settings, Error> {
        Settings::new(self.epsilon, max_iterations)
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.epsilon(), 1e-10);
        assert_eq!(settings.max_iterations(), 100);
    }

    #[test]
    fn builders() -> Result<(), Error> {
        let settings = Settings::default().with_epsilon(1e-12)?.with_max_iterations(7)?;
        assert_eq!(settings, Settings::new(1e-12, 7)?);
        Ok(())
    }

    #[test]
    fn rejects_nonsense() {
        assert!(matches!(
            Settings::new(0., 10),
            Err(Error::InvalidSettings(_))
        ));
        assert!(Settings::new(-1e-10, 10).is_err());
        assert!(Settings::new(f64::NAN, 10).is_err());
        assert!(Settings::new(f64::INFINITY, 10).is_err());
        assert!(Settings::new(1e-10, 0).is_err());
    }
}
