//! SA execution loop.

use super::config::SaConfig;
use crate::error::Error;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::{random_tour, Tour};
use rand::Rng;

/// Below this temperature the Metropolis test is skipped entirely and only
/// strictly improving moves are accepted. Geometric cooling can underflow
/// the temperature into the subnormal range, where `exp(-delta / t)`
/// degenerates to 0/0 for equal-cost moves.
const TEMPERATURE_FLOOR: f64 = f64::MIN_POSITIVE;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Length of the best tour.
    pub best_distance: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the final cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Executes the simulated annealing loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::sa::{SaConfig, SaRunner};
/// use tsp_metaheur::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ])?;
/// let config = SaConfig::default().with_iterations(10).with_seed(42);
/// let result = SaRunner::run(&matrix, &config)?;
/// assert_eq!(result.best_distance, 10.0);
/// # Ok::<(), tsp_metaheur::Error>(())
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealing engine on a distance matrix.
    ///
    /// Starts from a random tour and performs one candidate swap per
    /// iteration, accepting it by the Metropolis criterion. The
    /// temperature is multiplied by `cooling_rate` after every iteration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the configuration fails
    /// [`SaConfig::validate`].
    pub fn run(matrix: &DistanceMatrix, config: &SaConfig) -> Result<SaResult, Error> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.dim();

        let mut current = random_tour(n, &mut rng);
        let mut current_distance = matrix.tour_distance(&current);
        let mut best = current.clone();
        let mut best_distance = current_distance;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for _ in 0..config.iterations {
            let neighbor = swap_neighbor(&current, &mut rng);
            let neighbor_distance = matrix.tour_distance(&neighbor);
            let delta = neighbor_distance - current_distance;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature >= TEMPERATURE_FLOOR {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = neighbor;
                current_distance = neighbor_distance;
                accepted_moves += 1;

                if current_distance < best_distance {
                    best = current.clone();
                    best_distance = current_distance;
                }
            }

            temperature *= config.cooling_rate;
        }

        Ok(SaResult {
            best,
            best_distance,
            iterations: config.iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}

/// Copy of `tour` with two random distinct positions swapped.
fn swap_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Tour {
    let mut neighbor = tour.to_vec();
    let indices = rand::seq::index::sample(rng, neighbor.len(), 2);
    neighbor.swap(indices.index(0), indices.index(1));
    neighbor
}
