use log::trace;

use crate::{
    constants::FALSE_EASTING,
    datum::Datum,
    ellipsoid::{derive_parameters, EllipsoidParameters},
    gauss::{band_order, central_meridian, PlanarPoint},
    latlon::LatLon,
    quadrature::{integrate, Tolerance},
    utility::polyval,
    Error,
};

/// Gauss-Krüger projection engine for one datum.
///
/// Projects onto the 6° band whose number is `trunc(lon / 6) + 1`, with a
/// false easting of 500 km and the band number packed in front of the
/// easting digits.
///
/// # Usage
///
/// ```
/// use gausskruger::{Datum, GaussKruger, LatLon};
///
/// let engine = GaussKruger::new(Datum::WGS84);
/// let coord = LatLon::create(30.0, 117.0).unwrap();
///
/// let point = engine.project(&coord).unwrap();
///
/// // On the central meridian of band 20 the easting is just the false
/// // easting with the band number in front
/// assert!((point.y() - 20_500_000.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GaussKruger {
    datum: Datum,
    params: EllipsoidParameters,
    tolerance: Tolerance,
}

impl GaussKruger {
    pub fn new(datum: Datum) -> GaussKruger {
        Self {
            datum,
            params: derive_parameters(datum),
            tolerance: Tolerance::default(),
        }
    }

    /// Replaces the absolute and relative error tolerances of the meridian
    /// arc integration (both `1e-11` by default).
    pub fn with_tolerance(mut self, abs: f64, rel: f64) -> GaussKruger {
        self.tolerance.abs = abs;
        self.tolerance.rel = rel;
        self
    }

    /// Returns the datum this engine projects for.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Returns the ellipsoid parameters derived from the datum.
    ///
    /// ```
    /// use gausskruger::{Datum, GaussKruger};
    ///
    /// let engine = GaussKruger::new(Datum::CGCS2000);
    /// let params = engine.parameters();
    ///
    /// assert_eq!(params.semi_major_axis(), 6378137.0);
    /// assert!((params.semi_minor_axis() - 6356752.314140).abs() < 1e-3);
    /// ```
    pub fn parameters(&self) -> &EllipsoidParameters {
        &self.params
    }

    /// Length of the meridian arc from the equator to `lat` (radians), by
    /// numerical integration of the meridian curvature radius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QuadratureNonConvergence`] if the integral cannot be
    /// evaluated to the configured tolerance.
    pub fn meridian_arc(&self, lat: f64) -> Result<f64, Error> {
        let params = self.params;
        let integral = integrate(
            move |phi| params.meridian_arc_integrand(phi),
            0.,
            lat,
            &self.tolerance,
        )?;

        trace!(
            "meridian arc to {lat} rad: {} ± {} ({} evaluations)",
            integral.value,
            integral.abs_error,
            integral.evaluations
        );

        Ok(integral.value)
    }

    /// Projects `coord` onto the Gauss-Krüger plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QuadratureNonConvergence`] if the meridian arc does
    /// not converge, and [`Error::DegenerateInput`] if the easting is not
    /// positive before the band number is folded in.
    pub fn project(&self, coord: &LatLon) -> Result<PlanarPoint, Error> {
        let (x, y) = self.from_latlon(coord.latitude, coord.longitude)?;

        Ok(PlanarPoint::new(x, y))
    }

    #[allow(clippy::wrong_self_convention, clippy::similar_names)]
    pub(crate) fn from_latlon(&self, lat: f64, lon: f64) -> Result<(f64, f64), Error> {
        let lat_rad = lat / 180. * std::f64::consts::PI;

        let band = band_order(lon);
        let l = (lon - central_meridian(band)) / 180. * std::f64::consts::PI;

        let arc = self.meridian_arc(lat_rad)?;

        let n = self.params.prime_vertical_radius(lat_rad);
        let (sin, cos) = lat_rad.sin_cos();
        let t2 = lat_rad.tan().powi(2);
        let eta2 = self.params.eccentricity_squared_2 * cos.powi(2);
        let l2 = l * l;

        // Northing: arc + a2 l² + a4 l⁴ + a6 l⁶
        let a2 = n / 2. * sin * cos;
        let a4 = n / 24. * sin * cos.powi(3) * polyval(&[4., 9., 5. - t2], eta2);
        let a6 = n / 720. * sin * cos.powi(5) * polyval(&[1., -58., 61.], t2);
        let x = arc + polyval(&[a6, a4, a2, 0.], l2);

        // Easting: b1 l + b3 l³ + b5 l⁵
        let b1 = n * cos;
        let b3 = n / 6. * cos.powi(3) * (1. - t2 + eta2);
        let b5 = n / 120. * cos.powi(5) * (polyval(&[1., -18., 5.], t2) + eta2 * (14. - 58. * t2));
        let y = l * polyval(&[b5, b3, b1], l2) + FALSE_EASTING;

        if y <= 0. || !y.is_finite() {
            return Err(Error::DegenerateInput(format!(
                "Easting {y} at ({lat}, {lon}) is not positive, {:.3}° from the central meridian of band {band}",
                lon - central_meridian(band)
            )));
        }

        let y = encode_band(y, band);
        trace!("({lat}, {lon}) -> band {band}, x {x}, y {y}");

        Ok((x, y))
    }
}

/// Put the band number in front of the digits of the easting `y`.
#[allow(clippy::cast_possible_truncation)]
fn encode_band(y: f64, band: i32) -> f64 {
    let digits = (y.log10().floor() + 1.) as i32;
    y + f64::from(band) * 10_f64.powi(digits)
}
