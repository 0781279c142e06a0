//! Metaheuristic solvers for the travelling salesman problem.
//!
//! All solvers work on an explicit [`DistanceMatrix`] (asymmetric costs
//! allowed) and return the best closed tour they find within their
//! iteration budget:
//!
//! - **Genetic Algorithm (GA)**: Population-based evolutionary search
//!   with pluggable selection and crossover operators.
//! - **Simulated Annealing (SA)**: Single-solution trajectory search with
//!   Metropolis acceptance and geometric cooling.
//! - **Tabu Search (TS)**: Best-improvement sweeps over the pairwise-swap
//!   neighborhood with short-term memory of visited tours.
//!
//! Every engine is deterministic under a fixed seed, so runs can be
//! reproduced and compared parameter-for-parameter.
//!
//! # Quick Start
//!
//! ```
//! use tsp_metaheur::ga::{GaConfig, GaRunner};
//! use tsp_metaheur::DistanceMatrix;
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ])?;
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_generations(100)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&matrix, &config)?;
//! assert_eq!(result.best.len(), 4);
//! assert!(result.best_distance > 0.0);
//! # Ok::<(), tsp_metaheur::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod matrix;
pub mod random;
pub mod sa;
pub mod tabu;
pub mod tour;

pub use error::Error;
pub use matrix::DistanceMatrix;
pub use tour::Tour;
