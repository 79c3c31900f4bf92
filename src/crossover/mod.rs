//! Crossover (recombination) operators for equal-length gene sequences.
//!
//! Crossover exchanges contiguous segments between two parents *in
//! place*, producing two complementary offspring. Because every exchange
//! is a pairwise swap, the multiset of genes held by the pair is exactly
//! preserved — no gene is duplicated or lost, which prevents genetic
//! drift at the operator level.
//!
//! The varying step per strategy is cut-point choice; the Bernoulli gate,
//! length validation, and segment swapping are a shared template
//! implemented once on [`Crossover`].
//!
//! Taking two `&mut [G]` arguments makes the two-distinct-buffers
//! requirement a compile-time guarantee: the borrow checker rejects
//! aliasing a sequence with itself.
//!
//! # Strategies
//!
//! - [`SinglePointCrossover`]: one cut, classic slow-mixing crossover
//! - [`MultiPointCrossover`]: n cuts, faster mixing
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod multi_point;
mod single_point;

pub use multi_point::MultiPointCrossover;
pub use single_point::SinglePointCrossover;

use crate::error::OperatorError;
use rand::Rng;

/// A recombination strategy over two equal-length gene sequences.
///
/// The provided [`crossover`](Self::crossover) method implements the
/// shared template: validate lengths before touching anything, run one
/// Bernoulli trial with [`probability`](Self::probability) to decide
/// whether this pair recombines at all, then swap the segments delimited
/// by the strategy's [`cut_points`](Self::cut_points).
pub trait Crossover<G> {
    /// Probability that a call recombines the pair at all.
    ///
    /// The trial happens once per call, not per cut point.
    fn probability(&self) -> f64;

    /// Chooses the cut indices for sequences of the given length,
    /// sorted ascending.
    fn cut_points<R: Rng>(&self, length: usize, rng: &mut R) -> Vec<usize>;

    /// Recombines `a` and `b` in place.
    ///
    /// Returns the number of offspring produced: 2 when the Bernoulli
    /// trial fires, 0 otherwise. Callers accumulate this into an
    /// alteration-rate tracker for the generation.
    ///
    /// # Errors
    ///
    /// [`OperatorError::SequenceLengthMismatch`] if the sequences differ
    /// in length; detected before any mutation.
    fn crossover<R: Rng>(&self, a: &mut [G], b: &mut [G], rng: &mut R) -> Result<u32, OperatorError> {
        if a.len() != b.len() {
            return Err(OperatorError::SequenceLengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if !rng.random_bool(self.probability()) {
            return Ok(0);
        }

        let cuts = self.cut_points(a.len(), rng);
        swap_segments(a, b, &cuts);
        Ok(2)
    }
}

/// Pairwise in-place exchange of `range` between two distinct sequences.
///
/// O(range length) element swaps, no allocation.
///
/// # Panics
///
/// Panics if the range is out of bounds for either slice.
pub fn swap_range<G>(a: &mut [G], b: &mut [G], range: std::ops::Range<usize>) {
    for i in range {
        std::mem::swap(&mut a[i], &mut b[i]);
    }
}

/// Alternately swaps the segments between consecutive cut boundaries.
///
/// Cut indices must be sorted ascending and lie within `[0, len]`. The
/// segment `[cuts[0], cuts[1])` is swapped, `[cuts[1], cuts[2])` is kept,
/// and so on; an odd final cut swaps the tail `[cuts[last], len)`.
pub(crate) fn swap_segments<G>(a: &mut [G], b: &mut [G], cuts: &[usize]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(cuts.windows(2).all(|w| w[0] < w[1]));

    let mut i = 0;
    while i + 1 < cuts.len() {
        swap_range(a, b, cuts[i]..cuts[i + 1]);
        i += 2;
    }
    if cuts.len() % 2 == 1 {
        let start = cuts[cuts.len() - 1];
        swap_range(a, b, start..a.len());
    }
}
