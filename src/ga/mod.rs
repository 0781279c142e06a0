//! Genetic algorithm for the travelling salesman problem.
//!
//! A generational GA over city permutations. Each generation breeds a full
//! replacement population: two parents are picked by the configured
//! [`Selection`] strategy, recombined by the configured [`Crossover`]
//! operator, and mutated by a random swap with probability
//! `mutation_rate`. The best tour ever seen is tracked outside the
//! population, so it survives even when replacement discards it.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, operators)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final best tour with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover operators and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), *Applying Adaptive Algorithms to Epistatic Domains* (order crossover)

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
