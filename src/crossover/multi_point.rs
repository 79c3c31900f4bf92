//! Multi-point crossover.

use super::Crossover;
use crate::error::OperatorError;
use rand::Rng;

/// N-point crossover.
///
/// Draws `points` distinct cut indices in `[0, length)` (sorted
/// ascending, sampled without replacement) and alternately swaps the
/// segments between consecutive boundaries. More cut points mix genetic
/// material faster than [`SinglePointCrossover`](super::SinglePointCrossover)
/// at the cost of disrupting longer schemata.
///
/// When `points` exceeds the sequence length it is clamped to the length,
/// since at most one distinct cut fits per index.
///
/// # Examples
///
/// ```
/// use evo_operators::crossover::{Crossover, MultiPointCrossover};
/// use evo_operators::random;
///
/// let op = MultiPointCrossover::new(1.0, 3).unwrap();
/// let mut a = vec![1, 2, 3, 4, 5, 6];
/// let mut b = vec![7, 8, 9, 10, 11, 12];
/// let offspring = op.crossover(&mut a, &mut b, &mut random::create_rng(42)).unwrap();
/// assert_eq!(offspring, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPointCrossover {
    probability: f64,
    points: usize,
}

impl MultiPointCrossover {
    /// Creates an n-point crossover operator.
    ///
    /// # Errors
    ///
    /// - [`OperatorError::InvalidProbability`] if `probability` is outside
    ///   `[0, 1]` (or NaN)
    /// - [`OperatorError::ZeroCrossoverPoints`] if `points == 0`
    pub fn new(probability: f64, points: usize) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(OperatorError::InvalidProbability(probability));
        }
        if points == 0 {
            return Err(OperatorError::ZeroCrossoverPoints);
        }
        Ok(Self {
            probability,
            points,
        })
    }

    /// The configured number of cut points.
    pub fn points(&self) -> usize {
        self.points
    }
}

impl<G> Crossover<G> for MultiPointCrossover {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn cut_points<R: Rng>(&self, length: usize, rng: &mut R) -> Vec<usize> {
        let n = self.points.min(length);
        let mut cuts = rand::seq::index::sample(rng, length, n).into_vec();
        cuts.sort_unstable();
        cuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn multiset(values: &[i32]) -> HashMap<i32, usize> {
        let mut counts = HashMap::new();
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn invalid_probability_is_rejected() {
        assert_eq!(
            MultiPointCrossover::new(1.5, 2).unwrap_err(),
            OperatorError::InvalidProbability(1.5)
        );
        assert!(MultiPointCrossover::new(-0.1, 2).is_err());
        assert!(MultiPointCrossover::new(f64::NAN, 2).is_err());
    }

    #[test]
    fn zero_points_is_rejected() {
        assert_eq!(
            MultiPointCrossover::new(0.5, 0).unwrap_err(),
            OperatorError::ZeroCrossoverPoints
        );
    }

    #[test]
    fn length_mismatch_is_rejected_before_mutation() {
        let op = MultiPointCrossover::new(1.0, 2).unwrap();
        let mut a = vec![1, 2, 3];
        let mut b = vec![4, 5];
        let err = op.crossover(&mut a, &mut b, &mut create_rng(42)).unwrap_err();
        assert_eq!(
            err,
            OperatorError::SequenceLengthMismatch { left: 3, right: 2 }
        );
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(b, vec![4, 5]);
    }

    #[test]
    fn zero_probability_never_recombines() {
        let op = MultiPointCrossover::new(0.0, 2).unwrap();
        let mut rng = create_rng(42);
        let mut a = vec![1, 2, 3, 4];
        let mut b = vec![5, 6, 7, 8];
        for _ in 0..50 {
            assert_eq!(op.crossover(&mut a, &mut b, &mut rng).unwrap(), 0);
        }
        assert_eq!(a, vec![1, 2, 3, 4]);
        assert_eq!(b, vec![5, 6, 7, 8]);
    }

    #[test]
    fn unit_probability_always_produces_two_offspring() {
        let op = MultiPointCrossover::new(1.0, 3).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
            let mut b = vec![11, 12, 13, 14, 15, 16, 17, 18];
            assert_eq!(op.crossover(&mut a, &mut b, &mut rng).unwrap(), 2);
        }
    }

    #[test]
    fn cut_points_are_distinct_sorted_and_in_range() {
        let op = MultiPointCrossover::new(1.0, 4).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let cuts = Crossover::<i32>::cut_points(&op, 10, &mut rng);
            assert_eq!(cuts.len(), 4);
            assert!(cuts.windows(2).all(|w| w[0] < w[1]), "cuts: {cuts:?}");
            assert!(cuts.iter().all(|&c| c < 10));
        }
    }

    #[test]
    fn points_clamp_to_sequence_length() {
        let op = MultiPointCrossover::new(1.0, 100).unwrap();
        let mut rng = create_rng(42);
        let cuts = Crossover::<i32>::cut_points(&op, 5, &mut rng);
        assert_eq!(cuts.len(), 5);
    }

    #[test]
    fn empty_sequences_are_legal() {
        let op = MultiPointCrossover::new(1.0, 2).unwrap();
        let mut a: Vec<i32> = vec![];
        let mut b: Vec<i32> = vec![];
        assert_eq!(op.crossover(&mut a, &mut b, &mut create_rng(42)).unwrap(), 2);
    }

    proptest! {
        /// Every gene stays in exactly one of the two sequences.
        #[test]
        fn gene_multiset_is_preserved(
            len in 1usize..64,
            points in 1usize..8,
            seed in 0u64..1000,
        ) {
            let op = MultiPointCrossover::new(1.0, points).unwrap();
            let mut a: Vec<i32> = (0..len as i32).collect();
            let mut b: Vec<i32> = (len as i32..2 * len as i32).collect();

            let before: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
            op.crossover(&mut a, &mut b, &mut create_rng(seed)).unwrap();
            let after: Vec<i32> = a.iter().chain(b.iter()).copied().collect();

            prop_assert_eq!(multiset(&before), multiset(&after));
            prop_assert_eq!(a.len(), len);
            prop_assert_eq!(b.len(), len);
        }
    }
}
