use log::{debug, trace, warn};

use crate::{constants::{QUADRATURE_ABS_TOL, QUADRATURE_LIMIT, QUADRATURE_REL_TOL}, Error};

// ================================
// Gauss-Kronrod 7/15 point rule
// ================================

// Kronrod abscissae, xgk[1], xgk[3], xgk[5] are the Gauss abscissae
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

const EVALS_PER_SEGMENT: usize = 15;

/// Error bounds and subdivision budget for [`integrate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tolerance {
    pub abs: f64,
    pub rel: f64,
    pub limit: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: QUADRATURE_ABS_TOL,
            rel: QUADRATURE_REL_TOL,
            limit: QUADRATURE_LIMIT,
        }
    }
}

impl Tolerance {
    /// The error bound a result of magnitude `value` has to meet.
    fn bound(&self, value: f64) -> f64 {
        self.abs.max(self.rel * value.abs())
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Integral {
    pub value: f64,
    pub abs_error: f64,
    pub evaluations: usize,
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Integrate `f` over `[a, b]` by adaptive bisection with the 15 point
/// Gauss-Kronrod rule, until the summed error estimate is within
/// `max(tol.abs, tol.rel * |value|)`.
///
/// `b < a` is allowed and flips the sign of the result. An empty interval
/// integrates to exactly zero without evaluating `f`.
///
/// # Errors
///
/// Returns [`Error::QuadratureNonConvergence`] if the tolerance is not met
/// within `tol.limit` subintervals, or if `f` produces non-finite values.
#[allow(clippy::float_cmp)]
pub(crate) fn integrate<F>(f: F, a: f64, b: f64, tol: &Tolerance) -> Result<Integral, Error>
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return Ok(Integral { value: 0., abs_error: 0., evaluations: 0 });
    }

    let mut segments = Vec::with_capacity(tol.limit.max(1));
    segments.push(kronrod15(&f, a, b));

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let error: f64 = segments.iter().map(|s| s.error).sum();
        // Every bisection retires one segment and evaluates two new ones
        let evaluations = (2 * segments.len() - 1) * EVALS_PER_SEGMENT;

        if error.is_finite() && value.is_finite() && error <= tol.bound(value) {
            trace!("quadrature over [{a}, {b}]: {value} ± {error} after {} segment(s)", segments.len());
            return Ok(Integral { value, abs_error: error, evaluations });
        }

        if segments.len() >= tol.limit || !error.is_finite() || !value.is_finite() {
            warn!(
                "quadrature over [{a}, {b}] did not converge: error {error} after {} segment(s)",
                segments.len()
            );
            return Err(Error::QuadratureNonConvergence {
                abs_error: error,
                tolerance: tol.bound(value),
            });
        }

        // Bisect the segment carrying the largest error
        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, l), (_, r)| l.error.total_cmp(&r.error))
            .map_or(0, |(i, _)| i);
        let segment = segments.swap_remove(worst);
        let mid = 0.5 * (segment.a + segment.b);
        debug!("quadrature: bisecting [{}, {}] (error {})", segment.a, segment.b, segment.error);

        segments.push(kronrod15(&f, segment.a, mid));
        segments.push(kronrod15(&f, mid, segment.b));
    }
}

/// A single application of the 15 point Kronrod rule, with the QUADPACK
/// error estimate from the embedded 7 point Gauss rule.
#[allow(clippy::float_cmp)]
fn kronrod15<F>(f: &F, a: f64, b: f64) -> Segment
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let abs_half = half.abs();

    let fc = f(center);
    let mut res_gauss = fc * WG[3];
    let mut res_kronrod = fc * WGK[7];
    let mut res_abs = res_kronrod.abs();

    let mut fv1 = [0_f64; 7];
    let mut fv2 = [0_f64; 7];

    for (j, x) in XGK.iter().take(7).enumerate() {
        let abscissa = half * x;
        let f1 = f(center - abscissa);
        let f2 = f(center + abscissa);
        fv1[j] = f1;
        fv2[j] = f2;

        res_kronrod += WGK[j] * (f1 + f2);
        res_abs += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            res_gauss += WG[j / 2] * (f1 + f2);
        }
    }

    let mean = 0.5 * res_kronrod;
    let mut res_asc = WGK[7] * (fc - mean).abs();
    for ((w, f1), f2) in WGK.iter().zip(&fv1).zip(&fv2) {
        res_asc += w * ((f1 - mean).abs() + (f2 - mean).abs());
    }

    let value = res_kronrod * half;
    res_abs *= abs_half;
    res_asc *= abs_half;

    let mut error = ((res_kronrod - res_gauss) * half).abs();
    if res_asc != 0. && error != 0. {
        error = res_asc * 1_f64.min((200. * error / res_asc).powf(1.5));
    }
    if res_abs > f64::MIN_POSITIVE / (50. * f64::EPSILON) {
        error = error.max(50. * f64::EPSILON * res_abs);
    }

    Segment { a, b, value, error }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use float_eq::assert_float_eq;

    use super::*;

    #[test]
    fn empty_interval_is_exactly_zero() {
        let res = integrate(|x| x.exp(), 0.3, 0.3, &Tolerance::default()).unwrap();
        assert_eq!(res.value, 0.);
        assert_eq!(res.abs_error, 0.);
        assert_eq!(res.evaluations, 0);
    }

    #[test]
    fn polynomial_is_exact() {
        // K15 integrates polynomials up to degree 22 exactly
        let res = integrate(|x| 3. * x * x + 2. * x + 1., 0., 2., &Tolerance::default()).unwrap();
        assert_float_eq!(res.value, 14., abs <= 1e-12);
        assert_eq!(res.evaluations, 15);
    }

    #[test]
    fn smooth_functions() {
        let tol = Tolerance::default();

        let res = integrate(f64::sin, 0., PI, &tol).unwrap();
        assert_float_eq!(res.value, 2., abs <= 1e-12);

        let res = integrate(f64::exp, 0., 1., &tol).unwrap();
        assert_float_eq!(res.value, 1_f64.exp() - 1., abs <= 1e-12);
    }

    #[test]
    fn reversed_bounds_flip_sign() {
        let tol = Tolerance::default();
        let fwd = integrate(f64::cos, 0., 1., &tol).unwrap();
        let rev = integrate(f64::cos, 1., 0., &tol).unwrap();
        assert_float_eq!(fwd.value, -rev.value, abs <= 1e-14);
    }

    #[test]
    fn subdivides_peaked_integrand() {
        // Sharp peak at 0.5, needs bisection to resolve
        let f = |x: f64| 1. / (1e-4 + (x - 0.5).powi(2));
        let exact = 2. * (0.5_f64 / 1e-2).atan() / 1e-2;

        let tol = Tolerance { limit: 200, ..Tolerance::default() };
        let res = integrate(f, 0., 1., &tol).unwrap();
        assert!(res.evaluations > 15);
        assert_eq!(res.evaluations % 15, 0);
        assert_float_eq!(res.value, exact, rmax <= 1e-10);
    }

    #[test]
    fn exhausted_budget_does_not_converge() {
        let f = |x: f64| 1. / (1e-4 + (x - 0.5).powi(2));
        let tol = Tolerance { limit: 1, ..Tolerance::default() };

        match integrate(f, 0., 1., &tol).unwrap_err() {
            Error::QuadratureNonConvergence { abs_error, tolerance } => assert!(abs_error > tolerance),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn singular_integrand_does_not_converge() {
        let tol = Tolerance { limit: 10, ..Tolerance::default() };
        let err = integrate(|x: f64| 1. / x.abs().sqrt().powi(3), -1., 1., &tol).unwrap_err();
        assert!(matches!(err, Error::QuadratureNonConvergence { .. }));
    }

    #[test]
    fn nan_integrand_does_not_converge() {
        let err = integrate(|_| f64::NAN, 0., 1., &Tolerance::default()).unwrap_err();
        assert!(matches!(err, Error::QuadratureNonConvergence { .. }));
    }
}
