//! Operator core for evolutionary-computation engines.
//!
//! Provides the stochastic machinery an external evolution loop plugs
//! together each generation:
//!
//! - **Selection** ([`selector`]): converts a scored population into a
//!   probability vector and draws a fixed-size parent set with
//!   replacement. Fitness-proportional (roulette-wheel) selection with a
//!   ULP-based stability guard against converged populations.
//! - **Crossover** ([`crossover`]): exchanges contiguous gene segments
//!   between two parents in place, producing complementary offspring that
//!   preserve the pair's gene multiset. Single-point and n-point
//!   strategies over one shared swap template.
//! - **Streaming statistics** ([`stats`]): numerically stable online
//!   mean/variance (Welford) with an associative merge for combining
//!   per-shard accumulators.
//!
//! Genotype representation, fitness evaluation, mutation, and the
//! generational loop itself are external collaborators; the operators
//! here are pure functions of their inputs plus an injected random
//! source (any `rand::Rng`, see [`random`]).
//!
//! # Example
//!
//! ```
//! use evo_operators::crossover::{Crossover, SinglePointCrossover};
//! use evo_operators::selector::{RouletteWheelSelector, Selector};
//! use evo_operators::stats::Variance;
//! use evo_operators::{random, Optimize};
//!
//! let population: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
//! let mut rng = random::create_rng(42);
//!
//! // Draw four parents, fitness-proportionally.
//! let parents = RouletteWheelSelector::new()
//!     .select(&population, 4, Optimize::Maximize, &mut rng)
//!     .unwrap();
//!
//! // Recombine a pair of gene sequences in place.
//! let mut a = vec![0u8, 1, 2, 3];
//! let mut b = vec![4u8, 5, 6, 7];
//! let offspring = SinglePointCrossover::new(0.9)
//!     .unwrap()
//!     .crossover(&mut a, &mut b, &mut rng)
//!     .unwrap();
//! assert!(offspring == 0 || offspring == 2);
//!
//! // Characterize the fitness distribution.
//! let stats: Variance = parents.into_iter().collect();
//! assert_eq!(stats.count(), 4);
//! assert!(stats.variance() >= 0.0);
//! ```

pub mod crossover;
pub mod error;
pub mod math;
pub mod random;
pub mod selector;
pub mod stats;
mod types;

pub use error::OperatorError;
pub use types::{Fitness, Individual, Optimize};
