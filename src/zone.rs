use crate::internal::*;
use std::fmt;
use std::str::FromStr;

/// The projection constants of a Lambert zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneParameters {
    /// Exponent of the projection (the sine of the latitude of origin)
    pub n: f64,
    /// Projection constant, in meters
    pub c: f64,
    /// False easting of the pole, in meters
    pub xs: f64,
    /// False northing of the pole, in meters
    pub ys: f64,
}

/// The six French Lambert conformal conic zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LambertZone {
    LambertI,
    LambertII,
    LambertIII,
    LambertIV,
    LambertIIExtended,
    Lambert93,
}

impl LambertZone {
    /// All zones, in their historical numbering order (cf. `TryFrom<usize>`)
    pub const ALL: [LambertZone; 6] = [
        LambertZone::LambertI,
        LambertZone::LambertII,
        LambertZone::LambertIII,
        LambertZone::LambertIV,
        LambertZone::LambertIIExtended,
        LambertZone::Lambert93,
    ];

    #[rustfmt::skip]
    #[must_use]
    pub fn parameters(&self) -> ZoneParameters {
        use LambertZone::*;
        match self {
            LambertI          => ZoneParameters { n: 0.7604059656, c: 11603796.98,  xs: 600000.0, ys: 5657616.674 },
            LambertII         => ZoneParameters { n: 0.7289686274, c: 11745793.39,  xs: 600000.0, ys: 6199695.768 },
            LambertIII        => ZoneParameters { n: 0.6959127966, c: 11947992.52,  xs: 600000.0, ys: 6791905.085 },
            LambertIV         => ZoneParameters { n: 0.6712679322, c: 12136281.99,  xs: 234.358,  ys: 7239161.542 },
            LambertIIExtended => ZoneParameters { n: 0.7289686274, c: 11745793.39,  xs: 600000.0, ys: 8199695.768 },
            Lambert93         => ZoneParameters { n: 0.7256077650, c: 11754255.426, xs: 700000.0, ys: 12655612.050 },
        }
    }

    /// Lambert-93 is defined directly on WGS84 (RGF93), so it needs no datum shift
    #[must_use]
    pub fn is_wgs84_native(&self) -> bool {
        *self == LambertZone::Lambert93
    }
}

impl TryFrom<usize> for LambertZone {
    type Error = Error;
    fn try_from(ordinal: usize) -> Result<Self, Self::Error> {
        LambertZone::ALL
            .get(ordinal)
            .copied()
            .ok_or_else(|| Error::InvalidZone(format!("ordinal {ordinal} out of range 0..=5")))
    }
}

impl FromStr for LambertZone {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "lambert1" | "lamberti" | "l1" => Ok(LambertZone::LambertI),
            "lambert2" | "lambertii" | "l2" => Ok(LambertZone::LambertII),
            "lambert3" | "lambertiii" | "l3" => Ok(LambertZone::LambertIII),
            "lambert4" | "lambertiv" | "l4" => Ok(LambertZone::LambertIV),
            "lambert2e" | "lambertiie" | "lambertiiextended" | "lambert2extended"
            | "lambert2etendu" | "lambertiiétendu" | "lambert2étendu" | "l2e" => {
                Ok(LambertZone::LambertIIExtended)
            }
            "lambert93" | "l93" | "rgf93" => Ok(LambertZone::Lambert93),
            _ => Err(Error::InvalidZone(String::from(name))),
        }
    }
}

impl fmt::Display for LambertZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LambertZone::LambertI => "Lambert I",
            LambertZone::LambertII => "Lambert II",
            LambertZone::LambertIII => "Lambert III",
            LambertZone::LambertIV => "Lambert IV",
            LambertZone::LambertIIExtended => "Lambert II étendu",
            LambertZone::Lambert93 => "Lambert 93",
        };
        f.write_str(name)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
