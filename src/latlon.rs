use std::{fmt::Display, str::FromStr};

use crate::{datum::Datum, gauss::PlanarPoint, utility::dms, Error};

/// Representation of a geodetic Latitude/Longitude point, in degrees.
/// Can be projected to a [`PlanarPoint`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range (-90,90)
    /// * Longitude must be in range (-180,180)
    ///
    /// The poles are excluded since the projection series divide by their
    /// cosine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(30.0, 114.0);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 30.0);
    /// assert_eq!(coord.longitude(), 114.0);
    ///
    /// let invalid_coord_lat = LatLon::create(90.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if !(lat > -qd && lat < qd) {
            Err(Error::DegenerateInput(format!("Latitude {lat} outside of valid range (-90, 90).")))
        } else if !(lon > -hd && lon < hd) {
            Err(Error::DegenerateInput(format!("Longitude {lon} outside of valid range (-180, 180).")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(39.9042, 116.4074).unwrap();
    /// assert_eq!(coord.latitude(), 39.9042);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    ///
    /// # Example
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(39.9042, 116.4074).unwrap();
    /// assert_eq!(coord.longitude(), 116.4074);
    /// ```
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(39.9042, 116.4074).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-33.8688, 151.2093).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Projects onto the Gauss-Krüger plane of `datum`.
    ///
    /// # Errors
    ///
    /// See [`GaussKruger::project`](crate::GaussKruger::project).
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::{Datum, LatLon};
    ///
    /// let coord = LatLon::create(39.9042, 116.4074).unwrap();
    /// let point = coord.to_gauss(Datum::CGCS2000).unwrap();
    ///
    /// assert!((point.x() - 4418903.4020).abs() < 1e-3);
    /// assert!((point.y() - 20449324.7914).abs() < 1e-3);
    /// ```
    pub fn to_gauss(&self, datum: Datum) -> Result<PlanarPoint, Error> {
        PlanarPoint::from_latlon(self, datum)
    }
}

/// Parses `"<latitude> <longitude>"`, separated by whitespace. Anything
/// after the longitude is an error.
impl FromStr for LatLon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();

        let mut next = |name: &str| -> Result<f64, Error> {
            let field = fields
                .next()
                .ok_or_else(|| Error::InvalidCoord(format!("Missing {name} in \"{s}\"")))?;
            field
                .parse()
                .map_err(|_| Error::InvalidCoord(format!("Invalid {name} \"{field}\"")))
        };

        let lat = next("latitude")?;
        let lon = next("longitude")?;

        if let Some(extra) = fields.next() {
            return Err(Error::InvalidCoord(format!("Unexpected field \"{extra}\" after longitude in \"{s}\"")));
        }

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
