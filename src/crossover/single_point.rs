//! Single-point crossover.

use super::{swap_range, Crossover};
use crate::error::OperatorError;
use rand::Rng;

/// Single-point crossover.
///
/// Cuts both parents at one uniformly drawn index `k ∈ [0, length]` and
/// exchanges the tails `[k, length)` in place. Producing the child
/// together with its complement keeps the total gene multiset of the pair
/// intact, preventing genetic drift. `k == 0` swaps the entire sequences
/// and `k == length` swaps nothing; both are legal outcomes, not errors.
///
/// This is the classic form of crossover. It mixes slowly compared with
/// [`MultiPointCrossover`](super::MultiPointCrossover), but disrupts less
/// when gene position carries meaning for the problem.
///
/// # Examples
///
/// ```
/// use evo_operators::crossover::SinglePointCrossover;
///
/// let mut a = vec![1, 2, 3, 4, 5];
/// let mut b = vec![6, 7, 8, 9, 10];
/// SinglePointCrossover::crossover_at(&mut a, &mut b, 2).unwrap();
/// assert_eq!(a, vec![1, 2, 8, 9, 10]);
/// assert_eq!(b, vec![6, 7, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinglePointCrossover {
    probability: f64,
}

impl SinglePointCrossover {
    /// Creates a single-point crossover operator.
    ///
    /// # Errors
    ///
    /// [`OperatorError::InvalidProbability`] if `probability` is outside
    /// `[0, 1]` (or NaN).
    pub fn new(probability: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(OperatorError::InvalidProbability(probability));
        }
        Ok(Self { probability })
    }

    /// Deterministic crossover at a caller-chosen cut index.
    ///
    /// Exchanges `[index, length)` between the two sequences. No
    /// Bernoulli trial is involved; callers that manage their own cut
    /// choice (or tests) use this entry point directly.
    ///
    /// # Errors
    ///
    /// - [`OperatorError::SequenceLengthMismatch`] if lengths differ
    /// - [`OperatorError::IndexOutOfBounds`] if `index > length`
    ///
    /// Both are detected before any mutation.
    pub fn crossover_at<G>(a: &mut [G], b: &mut [G], index: usize) -> Result<(), OperatorError> {
        if a.len() != b.len() {
            return Err(OperatorError::SequenceLengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if index > a.len() {
            return Err(OperatorError::IndexOutOfBounds {
                index,
                length: a.len(),
            });
        }
        swap_range(a, b, index..a.len());
        Ok(())
    }
}

impl<G> Crossover<G> for SinglePointCrossover {
    fn probability(&self) -> f64 {
        self.probability
    }

    /// One cut drawn uniformly from `[0, length]` inclusive.
    fn cut_points<R: Rng>(&self, length: usize, rng: &mut R) -> Vec<usize> {
        vec![rng.random_range(0..=length)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn crossover_at_known_cut() {
        let mut a = vec![1, 2, 3, 4, 5];
        let mut b = vec![6, 7, 8, 9, 10];
        SinglePointCrossover::crossover_at(&mut a, &mut b, 2).unwrap();
        assert_eq!(a, vec![1, 2, 8, 9, 10]);
        assert_eq!(b, vec![6, 7, 3, 4, 5]);

        // Complementary: the multiset across the pair is unchanged.
        let mut all: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn cut_at_zero_swaps_everything() {
        let mut a = vec![1, 2, 3];
        let mut b = vec![4, 5, 6];
        SinglePointCrossover::crossover_at(&mut a, &mut b, 0).unwrap();
        assert_eq!(a, vec![4, 5, 6]);
        assert_eq!(b, vec![1, 2, 3]);
    }

    #[test]
    fn cut_at_length_swaps_nothing() {
        let mut a = vec![1, 2, 3];
        let mut b = vec![4, 5, 6];
        SinglePointCrossover::crossover_at(&mut a, &mut b, 3).unwrap();
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(b, vec![4, 5, 6]);
    }

    #[test]
    fn cut_past_length_is_an_error() {
        let mut a = vec![1, 2, 3];
        let mut b = vec![4, 5, 6];
        let err = SinglePointCrossover::crossover_at(&mut a, &mut b, 4).unwrap_err();
        assert_eq!(err, OperatorError::IndexOutOfBounds { index: 4, length: 3 });
        assert_eq!(a, vec![1, 2, 3]);
    }

    #[test]
    fn length_mismatch_is_an_error_before_mutation() {
        let mut a = vec![1, 2, 3];
        let mut b = vec![4, 5];
        let err = SinglePointCrossover::crossover_at(&mut a, &mut b, 1).unwrap_err();
        assert_eq!(
            err,
            OperatorError::SequenceLengthMismatch { left: 3, right: 2 }
        );
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(b, vec![4, 5]);
    }

    #[test]
    fn stochastic_crossover_reports_offspring_count() {
        let op = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = create_rng(42);
        let mut a = vec![1, 2, 3, 4];
        let mut b = vec![5, 6, 7, 8];
        assert_eq!(op.crossover(&mut a, &mut b, &mut rng).unwrap(), 2);

        let op = SinglePointCrossover::new(0.0).unwrap();
        assert_eq!(op.crossover(&mut a, &mut b, &mut rng).unwrap(), 0);
    }

    #[test]
    fn cut_index_covers_the_inclusive_range() {
        let op = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = create_rng(42);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let cuts = Crossover::<i32>::cut_points(&op, 4, &mut rng);
            assert_eq!(cuts.len(), 1);
            assert!(cuts[0] <= 4);
            seen[cuts[0]] = true;
        }
        assert!(seen.iter().all(|&s| s), "uncovered cut indices: {seen:?}");
    }

    #[test]
    fn multiset_preserved_across_random_cuts() {
        let op = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut a: Vec<i32> = (0..10).collect();
            let mut b: Vec<i32> = (10..20).collect();
            op.crossover(&mut a, &mut b, &mut rng).unwrap();

            let mut all: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
            all.sort_unstable();
            assert_eq!(all, (0..20).collect::<Vec<i32>>());
        }
    }
}
