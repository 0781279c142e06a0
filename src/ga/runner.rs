//! GA generational loop.
//!
//! [`GaRunner`] orchestrates the full evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! wholesale replacement → repeat.

use super::config::GaConfig;
use super::operators::swap_mutation;
use crate::error::Error;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::{random_tour, Tour};
use rand::Rng;

/// Result of a GA run.
///
/// Contains the best tour found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Length of the best tour.
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best distance after initialization and after each generation
    /// (`generations + 1` entries).
    pub distance_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, GaRunner};
/// use tsp_metaheur::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ])?;
/// let config = GaConfig::default().with_generations(10).with_seed(42);
/// let result = GaRunner::run(&matrix, &config)?;
/// assert_eq!(result.best_distance, 10.0);
/// # Ok::<(), tsp_metaheur::Error>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic engine on a distance matrix.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the configuration fails
    /// [`GaConfig::validate`].
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult, Error> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.dim();

        // 1. Initialize and evaluate the population
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| random_tour(n, &mut rng))
            .collect();
        let mut distances = evaluate(matrix, &population);

        // 2. Track the best tour outside the population: replacement is
        //    wholesale, so the population itself may lose it.
        let (initial_best, mut best_distance) = find_best(&distances);
        let mut best = population[initial_best].clone();

        let mut distance_history = Vec::with_capacity(config.generations + 1);
        distance_history.push(best_distance);

        // 3. Generational loop
        for _ in 0..config.generations {
            let mut next_gen: Vec<Tour> = Vec::with_capacity(config.population_size);

            for _ in 0..config.population_size {
                let p1 = config.selection.select(&distances, &mut rng);
                let p2 = config.selection.select(&distances, &mut rng);

                let mut child =
                    config
                        .crossover
                        .apply(&population[p1], &population[p2], &mut rng);

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    swap_mutation(&mut child, &mut rng);
                }

                next_gen.push(child);
            }

            population = next_gen;
            distances = evaluate(matrix, &population);

            let (gen_best, gen_best_distance) = find_best(&distances);
            if gen_best_distance < best_distance {
                best = population[gen_best].clone();
                best_distance = gen_best_distance;
            }

            distance_history.push(best_distance);
        }

        Ok(GaResult {
            best,
            best_distance,
            generations: config.generations,
            distance_history,
        })
    }
}

/// Tour distance of every individual.
fn evaluate(matrix: &DistanceMatrix, population: &[Tour]) -> Vec<f64> {
    population
        .iter()
        .map(|tour| matrix.tour_distance(tour))
        .collect()
}

/// Index and value of the smallest distance.
fn find_best(distances: &[f64]) -> (usize, f64) {
    distances
        .iter()
        .copied()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .expect("population must not be empty")
}
