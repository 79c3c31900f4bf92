//! Error type shared by the selection and crossover operators.

use thiserror::Error;

/// Invalid-argument errors raised by the operator core.
///
/// Every variant is detected *before* any population or gene-sequence
/// mutation takes place, so a failed call never leaves partially-mutated
/// state behind. Numeric degeneracy (a population converged to equal
/// fitness) is deliberately not an error; it routes to the selector's
/// uniform fallback instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperatorError {
    /// Selection was asked to draw from an empty population.
    #[error("population must not be empty")]
    EmptyPopulation,

    /// Selection was asked to produce zero individuals.
    #[error("selection count must be greater than zero")]
    ZeroSelectionCount,

    /// An individual carries a NaN or infinite fitness value.
    ///
    /// Non-finite fitness would silently corrupt the probability vector,
    /// so it is rejected up front rather than propagated.
    #[error("fitness at index {index} is not finite: {value}")]
    NonFiniteFitness { index: usize, value: f64 },

    /// The two gene sequences handed to crossover differ in length.
    #[error("gene sequences must have equal length ({left} != {right})")]
    SequenceLengthMismatch { left: usize, right: usize },

    /// A recombination probability outside `[0, 1]`.
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// A crossover configured with zero cut points.
    #[error("number of crossover points must be at least 1")]
    ZeroCrossoverPoints,

    /// A single-point cut index past the end of the sequences.
    #[error("crossover index must be within [0, {length}], got {index}")]
    IndexOutOfBounds { index: usize, length: usize },
}
