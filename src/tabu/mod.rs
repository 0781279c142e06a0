//! Tabu search for the travelling salesman problem.
//!
//! A single-solution trajectory metaheuristic that always moves to the
//! best swap neighbor, worse or not, while a FIFO memory of recently
//! visited tours forbids immediate backtracking. The memory prevents
//! cycling and pushes the search into new regions of the tour space.
//!
//! # Key Types
//!
//! - [`TabuConfig`]: Iteration budget and memory size
//! - [`TabuMemory`]: Bounded FIFO of recently visited tours
//! - [`TabuRunner`]: Executes the best-improvement sweep loop
//! - [`TabuResult`]: Final best tour with iteration statistics
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{TabuResult, TabuRunner};
