//! Fitness-proportional (roulette-wheel) selection.

use super::probability::{proportional, ProbabilitySelector};

/// Fitness-proportional selection.
///
/// Each individual's selection probability is proportional to its fitness
/// after shifting by the worst value, so the probability vector from the
/// shared template is used unmodified. Over many draws the empirical
/// selection frequency of individual *i* converges to its probability
/// — the defining statistical property of this strategy.
///
/// **Warning**: susceptible to super-individual dominance when fitness
/// variance is high; a single outlier can absorb most of the probability
/// mass.
///
/// # Complexity
///
/// O(N) to build the probability vector, O(log N) per draw.
///
/// # Examples
///
/// ```
/// use evo_operators::selector::{RouletteWheelSelector, Selector};
/// use evo_operators::{random, Optimize};
///
/// let population: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
/// let mut rng = random::create_rng(42);
/// let parents = RouletteWheelSelector::new()
///     .select(&population, 2, Optimize::Maximize, &mut rng)
///     .unwrap();
/// assert_eq!(parents.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouletteWheelSelector;

impl RouletteWheelSelector {
    /// Creates a roulette-wheel selector.
    pub fn new() -> Self {
        Self
    }
}

impl ProbabilitySelector for RouletteWheelSelector {
    fn probabilities(&self, fitness: &[f64]) -> Vec<f64> {
        proportional(fitness)
    }
}
