//! Simulated annealing for the travelling salesman problem.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Each iteration proposes a random city swap and
//! accepts worsening moves with a probability that decays as the
//! temperature cools geometrically, allowing the search to escape
//! local optima.
//!
//! # Key Types
//!
//! - [`SaConfig`]: Temperature schedule and iteration budget
//! - [`SaRunner`]: Executes the Metropolis loop
//! - [`SaResult`]: Final best tour with acceptance statistics
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
