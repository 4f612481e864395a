use std::fmt::Display;

use crate::{constants::BAND_WIDTH, datum::Datum, latlon::LatLon, projections::gauss_kruger::GaussKruger, Error};

/// A point on the Gauss-Krüger plane.
///
/// `x` is the northing, measured along the central meridian from the
/// equator. `y` is the easting including the 500 km false easting, with the
/// band number written in front of its digits: `20210474.53` is band `20`,
/// easting `210474.53`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarPoint {
    #[cfg_attr(feature = "serde", serde(alias = "northing"))]
    pub(crate) x: f64,
    #[cfg_attr(feature = "serde", serde(alias = "easting"))]
    pub(crate) y: f64,
}

impl PlanarPoint {
    pub(crate) fn new(x: f64, y: f64) -> PlanarPoint {
        Self { x, y }
    }

    /// Returns the northing.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the band-prefixed easting.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Converts from [`LatLon`] to [`PlanarPoint`] on the given datum.
    ///
    /// # Errors
    ///
    /// See [`GaussKruger::project`].
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::{Datum, LatLon, PlanarPoint};
    ///
    /// let coord = LatLon::create(30.0, 114.0).unwrap();
    /// let point = PlanarPoint::from_latlon(&coord, Datum::WGS84).unwrap();
    ///
    /// assert!((point.x() - 3323774.1327).abs() < 1e-3);
    /// assert!((point.y() - 20210474.5365).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon, datum: Datum) -> Result<PlanarPoint, Error> {
        GaussKruger::new(datum).project(value)
    }
}

/// Number of the 6° band containing `lon`.
///
/// The quotient is truncated toward zero, not floored, so every longitude in
/// `(-6, 6)` lands in band 1 and western longitudes get bands `0, -1, ...`.
///
/// ```
/// use gausskruger::band_order;
///
/// assert_eq!(band_order(114.0), 20);
/// assert_eq!(band_order(6.0), 2);
/// assert_eq!(band_order(-3.0), 1);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn band_order(lon: f64) -> i32 {
    (lon / BAND_WIDTH) as i32 + 1
}

/// Longitude of the central meridian of `band`, in degrees.
pub fn central_meridian(band: i32) -> f64 {
    f64::from(band) * BAND_WIDTH - 3.
}

impl Display for PlanarPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        write!(
            f,
            "{x} {y}",
        )
    }
}
