use std::ops::{Add, Index, Sub};

/// Radians to degrees, computed as `180 / π` rather than taken from
/// `f64::to_degrees`, so degree output is exactly the radian output times
/// this factor.
pub const RADIAN_TO_DEGREE: f64 = 180.0 / std::f64::consts::PI;

/// Generic 3D coordinate tuple, with no fixed interpretation of the elements.
///
/// Lambert input is `(easting, northing, 0)`, geographic output is
/// `(longitude, latitude, height)`, and geocentric cartesian coordinates
/// are `(X, Y, Z)`. Which one a given `GeoPoint` holds is up to the caller.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeoPoint(pub [f64; 3]);

// ----- O P E R A T O R   T R A I T S -------------------------------------------------

impl Index<usize> for GeoPoint {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl Add for GeoPoint {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        GeoPoint([
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
        ])
    }
}

impl Sub for GeoPoint {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        GeoPoint([
            self.0[0] - other.0[0],
            self.0[1] - other.0[1],
            self.0[2] - other.0[2],
        ])
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from(xy: (f64, f64)) -> Self {
        GeoPoint([xy.0, xy.1, 0.])
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl GeoPoint {
    /// A `GeoPoint` from its three elements, taken as is
    #[must_use]
    pub fn raw(first: f64, second: f64, third: f64) -> GeoPoint {
        GeoPoint([first, second, third])
    }

    /// A planar `GeoPoint`, i.e. easting/northing with a zero third element
    #[must_use]
    pub fn planar(easting: f64, northing: f64) -> GeoPoint {
        GeoPoint([easting, northing, 0.])
    }

    /// A `GeoPoint` consisting of 3 `NaN`s
    #[must_use]
    pub fn nan() -> GeoPoint {
        GeoPoint([f64::NAN; 3])
    }

    /// A `GeoPoint` consisting of 3 `0`s
    #[must_use]
    pub fn origin() -> GeoPoint {
        GeoPoint([0., 0., 0.])
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl GeoPoint {
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// True if any element is `NaN`
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }
}

// ----- T R A N S F O R M S -------------------------------------------------

impl GeoPoint {
    /// Translate by `(dx, dy, dz)`
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> GeoPoint {
        GeoPoint([self.0[0] + dx, self.0[1] + dy, self.0[2] + dz])
    }

    /// Multiply all three elements by a scalar
    #[must_use]
    pub fn scale(&self, factor: f64) -> GeoPoint {
        GeoPoint([self.0[0] * factor, self.0[1] * factor, self.0[2] * factor])
    }

    /// Scale all three elements from radians to degrees.
    ///
    /// Note that the third element is scaled too: for a geographic point,
    /// the height comes out multiplied by `180/π`. Use
    /// [`to_degrees`](GeoPoint::to_degrees) to keep the height in meters.
    #[must_use]
    pub fn to_degree(&self) -> GeoPoint {
        self.scale(RADIAN_TO_DEGREE)
    }

    /// Transform the first two elements from radians to degrees, leaving
    /// the third untouched
    #[must_use]
    pub fn to_degrees(&self) -> GeoPoint {
        GeoPoint([
            self.0[0] * RADIAN_TO_DEGREE,
            self.0[1] * RADIAN_TO_DEGREE,
            self.0[2],
        ])
    }

    /// Euclidean distance between two points in the 3D space
    #[must_use]
    pub fn hypot3(&self, other: &Self) -> f64 {
        (self.0[0] - other.0[0])
            .hypot(self.0[1] - other.0[1])
            .hypot(self.0[2] - other.0[2])
    }
}

// ----- T E S T S ---------------------------------------------------
