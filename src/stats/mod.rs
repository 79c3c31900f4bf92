//! Online (streaming) statistics accumulators.
//!
//! [`Mean`] and [`Variance`] compute their aggregates incrementally, one
//! value at a time, without storing the sample. Both carry an associative,
//! commutative (up to floating-point rounding) [`merge`](Variance::merge)
//! operation, so statistics gathered independently — per population
//! shard, per worker thread — combine into one result by tree-structured
//! reduction instead of lock-protected shared counters.
//!
//! Variance uses Welford's update, the canonical numerically stable
//! one-pass estimator; naive sum-of-squares formulas suffer catastrophic
//! cancellation on large or narrowly distributed samples.
//!
//! # References
//!
//! - Welford (1962), "Note on a Method for Calculating Corrected Sums of
//!   Squares and Products"
//! - Chan, Golub & LeVeque (1983), "Algorithms for Computing the Sample
//!   Variance"

mod mean;
mod variance;

pub use mean::Mean;
pub use variance::Variance;

/// Moments of a slice computed by parallel shard accumulation.
///
/// Splits the work across rayon's pool, accumulates one [`Variance`] per
/// shard, and merges them. Equivalent to a single sequential pass within
/// floating-point rounding.
#[cfg(feature = "parallel")]
pub fn par_moments(values: &[f64]) -> Variance {
    use rayon::prelude::*;

    values
        .par_iter()
        .fold(Variance::new, |mut acc, &value| {
            acc.accumulate(value);
            acc
        })
        .reduce(Variance::new, |a, b| a.merge(&b))
}

#[cfg(all(test, feature = "parallel"))]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_sequential() {
        let values: Vec<f64> = (0..10_000).map(|i| (i as f64).sin() * 100.0).collect();
        let sequential: Variance = values.iter().copied().collect();
        let parallel = par_moments(&values);

        assert_eq!(parallel.count(), sequential.count());
        assert!((parallel.mean() - sequential.mean()).abs() < 1e-9);
        assert!(
            (parallel.variance() - sequential.variance()).abs()
                / sequential.variance().abs()
                < 1e-9
        );
    }

    #[test]
    fn parallel_empty_slice() {
        let stats = par_moments(&[]);
        assert_eq!(stats.count(), 0);
        assert!(stats.mean().is_nan());
    }
}
