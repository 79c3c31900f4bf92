//! Online arithmetic mean.

/// Incremental mean of a stream of values.
///
/// Updating via `mean += delta / count` avoids the precision loss of
/// summing all values first and dividing at the end.
///
/// # Examples
///
/// ```
/// use evo_operators::stats::Mean;
///
/// let mean: Mean = [2.0, 4.0, 6.0].into_iter().collect();
/// assert_eq!(mean.mean(), 4.0);
/// assert_eq!(mean.count(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mean {
    count: u64,
    mean: f64,
}

impl Mean {
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

    /// Accumulates one value.
    pub fn accumulate(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
    }

    /// Combines two independently accumulated means into a new one.
    ///
    /// Non-mutating; associative and commutative up to floating-point
    /// rounding. Merging with an empty accumulator returns the other
    /// operand's state.
    #[must_use]
    pub fn merge(&self, other: &Mean) -> Mean {
        let count = self.count + other.count;
        if count == 0 {
            return Mean::new();
        }

        let r = other.mean - self.mean;
        Mean {
            count,
            mean: self.mean + r * (other.count as f64 / count as f64),
        }
    }
}

impl FromIterator<f64> for Mean {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut mean = Mean::new();
        mean.extend(iter);
        mean
    }
}

impl Extend<f64> for Mean {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.accumulate(value);
        }
    }
}
