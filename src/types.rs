//! Core trait definitions shared by the selection and crossover operators.
//!
//! [`Individual`] is the contract between the generic operators and
//! domain-specific solution representations: the operators only ever read
//! an individual's fitness and clone it into the parent set. Genotype
//! layout, evaluation, and the generational loop all live outside this
//! crate.

/// Marker trait for fitness values.
///
/// Fitness must be totally ordered over the values actually fed in and
/// cheaply copyable. Whether lower or higher is better is *not* part of
/// this trait; the caller states the direction per call via [`Optimize`].
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Projects the fitness onto `f64` for probability computation and
    /// statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in a population.
///
/// The operator core treats the genotype as opaque; it only needs the
/// fitness value and the ability to clone selected parents.
///
/// # Implementing
///
/// ```
/// use evo_operators::Individual;
///
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<u8>,
///     fitness: f64,
/// }
///
/// impl Individual for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { self.fitness }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the fitness of this individual.
    fn fitness(&self) -> Self::Fitness;
}

/// A bare fitness value can stand in for a full individual, which is
/// convenient for fitness-only pipelines and tests.
impl Individual for f64 {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        *self
    }
}

/// Optimization direction for a selection call.
///
/// Selection probabilities are always built so that *better* individuals
/// receive more probability mass; this flag tells the selector which end
/// of the fitness scale is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optimize {
    /// Lower fitness is better.
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl Optimize {
    /// Projects a raw fitness value so that larger projected values are
    /// always better, regardless of direction.
    pub(crate) fn ascending(self, fitness: f64) -> f64 {
        match self {
            Optimize::Maximize => fitness,
            Optimize::Minimize => -fitness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_orients_both_directions() {
        // Under either direction the better value projects higher.
        assert!(Optimize::Maximize.ascending(2.0) > Optimize::Maximize.ascending(1.0));
        assert!(Optimize::Minimize.ascending(1.0) > Optimize::Minimize.ascending(2.0));
    }

    #[test]
    fn f32_fitness_projects_to_f64() {
        let f: f32 = 1.5;
        assert_eq!(Fitness::to_f64(f), 1.5f64);
    }
}
