//! Floating-point utilities for the operator core.
//!
//! Two concerns live here:
//!
//! - [`KahanSum`]: order-stable, cancellation-resistant summation
//!   (Neumaier's variant of Kahan's compensated algorithm). Used wherever
//!   a large number of doubles with widely different magnitudes must be
//!   added without losing low-order bits.
//! - [`ulp_distance`]: the number of representable `f64` values between
//!   two doubles. Used to decide whether a computed sum is distinguishable
//!   from zero at all, which is a far more robust test than comparing
//!   against an absolute epsilon.
//!
//! # References
//!
//! - Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren zur
//!   Summation endlicher Summen"
//! - Goldberg (1991), "What Every Computer Scientist Should Know About
//!   Floating-Point Arithmetic"

/// Compensated (Kahan–Neumaier) accumulator for `f64` sums.
///
/// Keeps a running error term so that adding many values of mixed
/// magnitude loses far less precision than a naive `iter().sum()`.
///
/// # Examples
///
/// ```
/// use evo_operators::math::KahanSum;
///
/// let mut sum = KahanSum::new();
/// sum.add(1.0e16);
/// sum.add(1.0);
/// sum.add(-1.0e16);
/// assert_eq!(sum.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the running sum.
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Returns the compensated sum.
    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl FromIterator<f64> for KahanSum {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut sum = Self::new();
        for value in iter {
            sum.add(value);
        }
        sum
    }
}

/// Compensated sum of a slice of doubles.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().copied().collect::<KahanSum>().value()
}

/// Maps an `f64` to a signed integer such that consecutive representable
/// doubles map to consecutive integers (lexicographic bit ordering).
///
/// `-0.0` and `+0.0` both map to `0`.
fn ulp_position(value: f64) -> i64 {
    let bits = value.to_bits() as i64;
    if bits >= 0 {
        bits
    } else {
        i64::MIN - bits
    }
}

/// Returns the number of representable `f64` steps between `a` and `b`.
///
/// The result is positive when `a > b`, negative when `a < b` and zero
/// when the values are bit-identical (treating `-0.0 == +0.0`). Saturates
/// instead of overflowing for operands near the extremes of the range.
///
/// The behaviour for NaN operands is unspecified; callers are expected to
/// have rejected NaN beforehand.
///
/// # Examples
///
/// ```
/// use evo_operators::math::ulp_distance;
///
/// assert_eq!(ulp_distance(1.0, 1.0), 0);
/// assert_eq!(ulp_distance(1.0 + f64::EPSILON, 1.0), 1);
/// assert_eq!(ulp_distance(0.0, -0.0), 0);
/// ```
pub fn ulp_distance(a: f64, b: f64) -> i64 {
    ulp_position(a).saturating_sub(ulp_position(b))
}
