use num::Float;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval<T: Float>(p: &[T], x: T) -> T {
    p
        .iter()
        .fold(T::zero(), |acc, &val| acc*x + val)
}
