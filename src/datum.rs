use std::{fmt::Display, str::FromStr};

use crate::{constants::{CGCS2000_F, WGS84_F}, Error};

/// Reference datum selecting the ellipsoid used for a projection.
///
/// Both datums share the semi-major axis `6378137 m` and differ only in
/// their flattening.
///
/// # Usage
///
/// ```
/// use gausskruger::Datum;
///
/// let datum: Datum = "cgcs2000".parse().unwrap();
/// assert_eq!(datum, Datum::CGCS2000);
/// assert_eq!(datum.to_string(), "CGCS2000");
///
/// assert!("GRS80".parse::<Datum>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datum {
    #[default]
    WGS84,
    CGCS2000,
}

impl Datum {
    /// Returns the flattening `(a - b) / a` of the datum's ellipsoid.
    pub fn flattening(self) -> f64 {
        match self {
            Datum::WGS84 => WGS84_F,
            Datum::CGCS2000 => CGCS2000_F,
        }
    }
}

impl FromStr for Datum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "WGS 84", "wgs-84", "CGCS_2000" and friends
        let name = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();

        match name.as_str() {
            "WGS84" => Ok(Datum::WGS84),
            "CGCS2000" => Ok(Datum::CGCS2000),
            _ => Err(Error::UnsupportedDatum(s.trim().to_string())),
        }
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datum::WGS84 => write!(f, "WGS84"),
            Datum::CGCS2000 => write!(f, "CGCS2000"),
        }
    }
}
