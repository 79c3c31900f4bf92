//! Shared probability template for probability-based selectors.
//!
//! The pipeline every strategy shares:
//!
//! 1. validate arguments and reject non-finite fitness,
//! 2. project fitness so larger is better ([`Optimize`]),
//! 3. strategy-specific shaping into a probability vector,
//! 4. build the cumulative distribution,
//! 5. draw `count` i.i.d. uniforms and locate each by binary search.
//!
//! Step 3 is the only part a strategy supplies; everything else is a
//! provided method on [`ProbabilitySelector`].

use super::Selector;
use crate::error::OperatorError;
use crate::math::{self, ulp_distance, KahanSum};
use crate::types::{Fitness, Individual, Optimize};
use rand::Rng;

/// Maximum ULP distance at which a fitness sum still counts as zero.
///
/// If the shifted-fitness sum lies within this many representable `f64`
/// steps of `0.0`, the whole population has converged to (numerically)
/// equal fitness and the selector falls back to the uniform distribution.
/// The value is empirically chosen and load-bearing: it fixes the exact
/// boundary between proportional and uniform selection, which statistical
/// regression tests depend on. Do not re-derive it.
pub const MAX_ULP_DISTANCE: u64 = 1_000_000_000;

/// Tolerance for the Σpᵢ = 1 postcondition.
const SUM_TOLERANCE: f64 = 1e-9;

/// A selector that works through an explicit probability vector.
///
/// Implementors supply [`probabilities`](Self::probabilities); the
/// blanket [`Selector`] implementation adds validation and cumulative
/// sampling on top.
pub trait ProbabilitySelector {
    /// Returns the selection probability of each individual.
    ///
    /// `fitness` is already projected so that larger values are better
    /// and validated to be finite. The result must have the same length,
    /// contain only values in `[0, 1]`, and sum to one within `1e-9`.
    fn probabilities(&self, fitness: &[f64]) -> Vec<f64>;
}

impl<I, S> Selector<I> for S
where
    I: Individual,
    S: ProbabilitySelector,
{
    fn select<R: Rng>(
        &self,
        population: &[I],
        count: usize,
        opt: Optimize,
        rng: &mut R,
    ) -> Result<Vec<I>, OperatorError> {
        if population.is_empty() {
            return Err(OperatorError::EmptyPopulation);
        }
        if count == 0 {
            return Err(OperatorError::ZeroSelectionCount);
        }

        let fitness = projected_fitness(population, opt)?;
        let probabilities = self.probabilities(&fitness);
        debug_assert!(
            sums_to_one(&probabilities),
            "probabilities do not sum to one: {probabilities:?}"
        );

        let cumulative = incremental(probabilities);
        let selected = (0..count)
            .map(|_| population[index_of(&cumulative, rng.random::<f64>())].clone())
            .collect();
        Ok(selected)
    }
}

/// Projects every fitness value onto an ascending `f64` scale, rejecting
/// NaN and infinite values before any further work.
fn projected_fitness<I: Individual>(
    population: &[I],
    opt: Optimize,
) -> Result<Vec<f64>, OperatorError> {
    population
        .iter()
        .enumerate()
        .map(|(index, individual)| {
            let value = individual.fitness().to_f64();
            if !value.is_finite() {
                return Err(OperatorError::NonFiniteFitness { index, value });
            }
            Ok(opt.ascending(value))
        })
        .collect()
}

/// Fitness-proportional probabilities over an ascending fitness slice.
///
/// Anchors the distribution at `worst = min(min(f), 0)` so every shifted
/// value is non-negative, sums the shifted values with compensated
/// summation, and normalizes. When the sum is indistinguishable from zero
/// (within [`MAX_ULP_DISTANCE`] ULPs — a fully converged population)
/// every individual gets probability `1/N` instead.
pub(crate) fn proportional(fitness: &[f64]) -> Vec<f64> {
    let n = fitness.len();
    debug_assert!(n > 0);

    let min = fitness.iter().copied().fold(f64::INFINITY, f64::min);
    let worst = min.min(0.0);
    let sum = math::sum(fitness) - worst * n as f64;

    if ulp_distance(sum, 0.0).unsigned_abs() > MAX_ULP_DISTANCE {
        fitness.iter().map(|f| (f - worst) / sum).collect()
    } else {
        vec![1.0 / n as f64; n]
    }
}

/// Prefix sums of a probability vector (the cumulative distribution).
fn incremental(mut probabilities: Vec<f64>) -> Vec<f64> {
    let mut running = 0.0;
    for p in &mut probabilities {
        running += *p;
        *p = running;
    }
    probabilities
}

/// Index of the first cumulative entry exceeding `value`, clamped to the
/// last index so that rounding in the final prefix sum cannot push a draw
/// past the end. O(log N).
fn index_of(cumulative: &[f64], value: f64) -> usize {
    cumulative
        .partition_point(|&c| c <= value)
        .min(cumulative.len() - 1)
}

fn sums_to_one(probabilities: &[f64]) -> bool {
    let total = probabilities.iter().copied().collect::<KahanSum>().value();
    (total - 1.0).abs() <= SUM_TOLERANCE
}
