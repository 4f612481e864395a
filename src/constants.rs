// Semi-major axis a, shared by both supported datums
pub(crate) const SEMI_MAJOR_AXIS: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;
#[allow(clippy::unreadable_literal)]
pub(crate) const CGCS2000_F: f64 = 1.0 / 298.257222101;

// Gauss-Krüger false easting in meters
pub(crate) const FALSE_EASTING: f64 = 500_000.;
// Width of a longitude band in degrees
pub(crate) const BAND_WIDTH: f64 = 6.;

// Meridian arc integration tolerances
pub(crate) const QUADRATURE_ABS_TOL: f64 = 1e-11;
pub(crate) const QUADRATURE_REL_TOL: f64 = 1e-11;
// Maximum number of subintervals the integrator may split into
pub(crate) const QUADRATURE_LIMIT: usize = 50;
