//! Selection strategies for choosing parents from a scored population.
//!
//! Selection converts a population into a probability vector and then
//! draws a fixed-size parent set by sampling the cumulative distribution
//! with replacement. The vector computation is the varying step; the
//! validation, cumulative build, and sampling loop are a shared template
//! implemented once on [`ProbabilitySelector`].
//!
//! # Strategies
//!
//! - [`RouletteWheelSelector`]: fitness-proportional selection — the
//!   shifted-fitness probability vector is used unmodified.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

mod probability;
mod roulette;

pub use probability::{ProbabilitySelector, MAX_ULP_DISTANCE};
pub use roulette::RouletteWheelSelector;

use crate::error::OperatorError;
use crate::types::{Individual, Optimize};
use rand::Rng;

/// A parent-selection strategy.
///
/// `select` draws exactly `count` individuals *with replacement* — the
/// same individual may appear multiple times in the parent set. The
/// population is read-only for the duration of the call; the caller must
/// not mutate it concurrently.
pub trait Selector<I: Individual> {
    /// Selects `count` parents from `population`.
    ///
    /// # Errors
    ///
    /// - [`OperatorError::EmptyPopulation`] if `population` is empty
    /// - [`OperatorError::ZeroSelectionCount`] if `count == 0`
    /// - [`OperatorError::NonFiniteFitness`] if any fitness is NaN or ±∞
    fn select<R: Rng>(
        &self,
        population: &[I],
        count: usize,
        opt: Optimize,
        rng: &mut R,
    ) -> Result<Vec<I>, OperatorError>;
}
