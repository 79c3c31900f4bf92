//! Online variance (Welford's algorithm).

/// Incremental sample variance of a stream of values.
///
/// Carries `(count, mean, m2)` where `m2` is the running sum of squared
/// deviations from the current mean; `m2 ≥ 0` always holds. The update is
/// Welford's one-pass recurrence:
///
/// ```text
/// delta = x − mean
/// count += 1
/// mean  += delta / count
/// m2    += delta · (x − mean)
/// ```
///
/// Queries return the unbiased sample variance `m2 / (count − 1)`
/// (`m2` itself for a single sample, NaN for none).
///
/// # Examples
///
/// ```
/// use evo_operators::stats::Variance;
///
/// let stats: Variance = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
///     .into_iter()
///     .collect();
/// assert_eq!(stats.mean(), 5.0);
/// assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variance {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Variance {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accumulated samples.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The running mean, or NaN if no samples have been accumulated.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// The unbiased sample variance.
    ///
    /// Returns NaN for zero samples and `m2` (zero) for a single sample.
    pub fn variance(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => self.m2,
            n => self.m2 / (n - 1) as f64,
        }
    }

    /// The standard error of the mean, `sqrt(variance / count)`.
    pub fn standard_error(&self) -> f64 {
        (self.variance() / self.count as f64).sqrt()
    }

    /// Accumulates one value.
    pub fn accumulate(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Combines two independently accumulated variances into a new one.
    ///
    /// Uses the Chan–Golub–LeVeque pairwise combination:
    ///
    /// ```text
    /// r     = mean_b − mean_a
    /// count = count_a + count_b
    /// mean  = mean_a + r · count_b / count
    /// m2    = m2_a + m2_b + r² · count_a · count_b / count
    /// ```
    ///
    /// Non-mutating; associative and commutative up to floating-point
    /// rounding, which makes tree-structured parallel reduction safe.
    /// Merging with an empty accumulator returns the other operand's
    /// state; merging two empties yields an empty accumulator.
    #[must_use]
    pub fn merge(&self, other: &Variance) -> Variance {
        let count = self.count + other.count;
        if count == 0 {
            return Variance::new();
        }

        let r = other.mean - self.mean;
        let weight = self.count as f64 * other.count as f64 / count as f64;
        Variance {
            count,
            mean: self.mean + r * (other.count as f64 / count as f64),
            m2: self.m2 + other.m2 + r * r * weight,
        }
    }
}

impl FromIterator<f64> for Variance {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut stats = Variance::new();
        stats.extend(iter);
        stats
    }
}

impl Extend<f64> for Variance {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.accumulate(value);
        }
    }
}
