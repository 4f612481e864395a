#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Projection of WGS84 / CGCS2000 geodetic coordinates onto the 6° band
//! Gauss-Krüger plane.
//!
//! ```
//! use gausskruger::{project, Datum};
//!
//! let point = project(30.0, 114.0, Datum::WGS84).unwrap();
//!
//! // Band 20, about 289.5 km west of its central meridian at 117°E
//! assert!((point.y() - 20_210_474.5365).abs() < 1e-3);
//! ```

use thiserror::Error;

pub mod datum;
pub mod ellipsoid;
pub mod gauss;
pub mod latlon;

pub use datum::Datum;
pub use ellipsoid::{derive_parameters, EllipsoidParameters};
pub use gauss::{band_order, central_meridian, PlanarPoint};
pub use latlon::LatLon;
pub use projections::gauss_kruger::GaussKruger;

pub(crate) mod projections {
    pub mod gauss_kruger;
}

pub(crate) mod constants;
pub(crate) mod quadrature;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Datum is not supported: {0}")]
    UnsupportedDatum(String),
    #[error("Meridian arc integration did not converge: error estimate {abs_error:e} exceeds {tolerance:e}")]
    QuadratureNonConvergence {
        abs_error: f64,
        tolerance: f64,
    },
    #[error("Input cannot be projected: {0}")]
    DegenerateInput(String),
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
}

/// Projects a latitude/longitude pair (degrees) onto the Gauss-Krüger plane
/// of `datum`.
///
/// # Errors
///
/// Returns [`Error::DegenerateInput`] if the coordinate is outside the valid
/// range or lands too far west of its band's central meridian, and
/// [`Error::QuadratureNonConvergence`] if the meridian arc cannot be
/// integrated.
pub fn project(latitude: f64, longitude: f64, datum: Datum) -> Result<PlanarPoint, Error> {
    LatLon::create(latitude, longitude)?.to_gauss(datum)
}
