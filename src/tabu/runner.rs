//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial tour
//! 2. At each iteration:
//!    a. Enumerate every pairwise-swap neighbor of the current tour
//!    b. Skip neighbors held in the tabu memory, evaluate the rest
//!    c. Move to the shortest admissible neighbor, even if it is worse
//!    d. Record the new tour in the tabu memory, update the global best
//! 3. Stop after the iteration budget, or fail if every neighbor is tabu
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::error::Error;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use crate::tour::{random_tour, Tour};

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Tour,
    /// Length of the best tour.
    pub best_distance: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found (0 if the initial
    /// tour was never improved).
    pub best_iteration: usize,
}

/// Executes the tabu search loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::tabu::{TabuConfig, TabuRunner};
/// use tsp_metaheur::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ])?;
/// let config = TabuConfig::default()
///     .with_iterations(10)
///     .with_tabu_size(1)
///     .with_seed(42);
/// let result = TabuRunner::run(&matrix, &config)?;
/// assert_eq!(result.best_distance, 10.0);
/// # Ok::<(), tsp_metaheur::Error>(())
/// ```
pub struct TabuRunner;

impl TabuRunner {
    /// Runs tabu search on a distance matrix.
    ///
    /// The move is unconditional: the search always relocates to the
    /// shortest non-tabu neighbor, which is what lets it climb out of
    /// local optima while the memory blocks immediate backtracking.
    ///
    /// # Errors
    /// Returns [`Error::ExhaustedNeighborhood`] if an iteration finds
    /// every swap neighbor tabu. Small instances hit this quickly when
    /// `tabu_size` is large enough to cover the whole neighborhood.
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<TabuResult, Error> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = matrix.dim();

        let mut current = random_tour(n, &mut rng);
        let mut best = current.clone();
        let mut best_distance = matrix.tour_distance(&best);
        let mut best_iteration = 0;

        let mut memory = TabuMemory::new(config.tabu_size);

        for iteration in 0..config.iterations {
            let (neighbor, neighbor_distance) =
                best_admissible_neighbor(matrix, &current, &memory)
                    .ok_or(Error::ExhaustedNeighborhood { iteration })?;

            current = neighbor;

            if neighbor_distance < best_distance {
                best = current.clone();
                best_distance = neighbor_distance;
                best_iteration = iteration;
            }

            memory.push(current.clone());
        }

        Ok(TabuResult {
            best,
            best_distance,
            iterations: config.iterations,
            best_iteration,
        })
    }
}

/// Shortest non-tabu pairwise-swap neighbor of `current`, or `None` when
/// the memory blocks the entire neighborhood.
///
/// Swaps are applied to a scratch tour and undone after each probe, so
/// only the winning neighbor is ever cloned. Membership is tested before
/// the distance so tabu tours are never evaluated. Ties keep the
/// first neighbor found in `(i, j)` order.
fn best_admissible_neighbor(
    matrix: &DistanceMatrix,
    current: &[usize],
    memory: &TabuMemory,
) -> Option<(Tour, f64)> {
    let n = current.len();
    let mut scratch = current.to_vec();
    let mut best: Option<(Tour, f64)> = None;

    for i in 0..n {
        for j in (i + 1)..n {
            scratch.swap(i, j);
            if !memory.contains(&scratch) {
                let distance = matrix.tour_distance(&scratch);
                match best {
                    Some((_, best_distance)) if distance >= best_distance => {}
                    _ => best = Some((scratch.clone(), distance)),
                }
            }
            scratch.swap(i, j);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_valid_tour(tour: &[usize], n: usize) -> bool {
        let cities: HashSet<usize> = tour.iter().copied().collect();
        tour.len() == n && cities.len() == n && tour.iter().all(|&c| c < n)
    }

    fn two_city_matrix() -> DistanceMatrix {
        DistanceMatrix::new(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap()
    }

    fn unit_square_matrix() -> DistanceMatrix {
        let s = std::f64::consts::SQRT_2;
        DistanceMatrix::new(vec![
            vec![0.0, 1.0, s, 1.0],
            vec![1.0, 0.0, 1.0, s],
            vec![s, 1.0, 0.0, 1.0],
            vec![1.0, s, 1.0, 0.0],
        ])
        .unwrap()
    }

    fn six_city_matrix() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0.0, 2.0, 9.0, 10.0, 3.0, 6.0],
            vec![2.0, 0.0, 6.0, 4.0, 8.0, 5.0],
            vec![9.0, 6.0, 0.0, 8.0, 2.0, 7.0],
            vec![10.0, 4.0, 8.0, 0.0, 5.0, 3.0],
            vec![3.0, 8.0, 2.0, 5.0, 0.0, 4.0],
            vec![6.0, 5.0, 7.0, 3.0, 4.0, 0.0],
        ])
        .unwrap()
    }

    // ---- Configuration ----

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.tabu_size, 20);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_iterations(1000)
            .with_tabu_size(10)
            .with_seed(123);

        assert_eq!(config.iterations, 1000);
        assert_eq!(config.tabu_size, 10);
        assert_eq!(config.seed, Some(123));
    }

    // ---- Solution quality ----

    #[test]
    fn test_tabu_finds_unit_square_perimeter() {
        let matrix = unit_square_matrix();
        for seed in 0..5 {
            let config = TabuConfig::default()
                .with_iterations(50)
                .with_tabu_size(5)
                .with_seed(seed);

            let result = TabuRunner::run(&matrix, &config).unwrap();

            // Iteration 0 sees the whole neighborhood, and every crossing
            // tour has a perimeter tour one swap away, so the best-improvement
            // move lands on the optimum immediately.
            assert!(
                (result.best_distance - 4.0).abs() < 1e-9,
                "seed {seed}: expected the perimeter tour, got {}",
                result.best_distance
            );
            assert_eq!(result.best_iteration, 0);
            assert!(is_valid_tour(&result.best, 4));
        }
    }

    #[test]
    fn test_tabu_best_no_worse_than_initial() {
        let matrix = six_city_matrix();
        for seed in 0..5 {
            // The runner's first draw builds the initial tour, so the same
            // seed reproduces it here.
            let mut rng = create_rng(seed);
            let initial = random_tour(6, &mut rng);
            let initial_distance = matrix.tour_distance(&initial);

            let config = TabuConfig::default()
                .with_iterations(10)
                .with_tabu_size(4)
                .with_seed(seed);
            let result = TabuRunner::run(&matrix, &config).unwrap();

            assert!(
                result.best_distance <= initial_distance,
                "seed {seed}: best {} worse than initial {}",
                result.best_distance,
                initial_distance
            );
            assert!((matrix.tour_distance(&result.best) - result.best_distance).abs() < 1e-9);
        }
    }

    // ---- Exhaustion ----

    #[test]
    fn test_tabu_exhausts_when_memory_covers_neighborhood() {
        // Two cities have exactly one swap neighbor per tour. A memory big
        // enough for both tours blocks the third move deterministically:
        // iteration 0 and 1 visit both tours, iteration 2 has nowhere to go.
        let matrix = two_city_matrix();
        for seed in 0..5 {
            let config = TabuConfig::default()
                .with_iterations(10)
                .with_tabu_size(2)
                .with_seed(seed);

            let err = TabuRunner::run(&matrix, &config).unwrap_err();

            assert_eq!(
                err,
                Error::ExhaustedNeighborhood { iteration: 2 },
                "seed {seed}: expected exhaustion at iteration 2"
            );
        }
    }

    #[test]
    fn test_tabu_budget_can_end_before_exhaustion() {
        let matrix = two_city_matrix();
        let config = TabuConfig::default()
            .with_iterations(2)
            .with_tabu_size(2)
            .with_seed(42);

        let result = TabuRunner::run(&matrix, &config).unwrap();

        assert!((result.best_distance - 10.0).abs() < 1e-12);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_tabu_zero_size_is_steepest_descent() {
        // An empty memory admits every neighbor, so the search oscillates
        // between the two tours forever instead of exhausting.
        let matrix = two_city_matrix();
        let config = TabuConfig::default()
            .with_iterations(100)
            .with_tabu_size(0)
            .with_seed(42);

        let result = TabuRunner::run(&matrix, &config).unwrap();

        assert!((result.best_distance - 10.0).abs() < 1e-12);
        assert_eq!(result.iterations, 100);
    }

    #[test]
    fn test_tabu_size_one_never_exhausts_two_cities() {
        let matrix = two_city_matrix();
        let config = TabuConfig::default()
            .with_iterations(100)
            .with_tabu_size(1)
            .with_seed(42);

        let result = TabuRunner::run(&matrix, &config).unwrap();
        assert!((result.best_distance - 10.0).abs() < 1e-12);
    }

    // ---- Bookkeeping ----

    #[test]
    fn test_tabu_zero_iterations_returns_initial_tour() {
        let matrix = six_city_matrix();
        let config = TabuConfig::default().with_iterations(0).with_seed(42);

        let result = TabuRunner::run(&matrix, &config).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_iteration, 0);
        assert!(is_valid_tour(&result.best, 6));
        assert!((matrix.tour_distance(&result.best) - result.best_distance).abs() < 1e-12);
    }

    #[test]
    fn test_tabu_deterministic_per_seed() {
        let matrix = six_city_matrix();
        let config = TabuConfig::default()
            .with_iterations(30)
            .with_tabu_size(6)
            .with_seed(123);

        let a = TabuRunner::run(&matrix, &config).unwrap();
        let b = TabuRunner::run(&matrix, &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_distance, b.best_distance);
        assert_eq!(a.best_iteration, b.best_iteration);
    }

    // ---- Neighborhood scan ----

    #[test]
    fn test_best_admissible_neighbor_skips_tabu_tours() {
        let matrix = unit_square_matrix();
        let current = vec![0, 1, 2, 3]; // the perimeter tour

        let mut memory = TabuMemory::new(10);
        let open = best_admissible_neighbor(&matrix, &current, &memory)
            .expect("empty memory admits every neighbor");

        // Make the unrestricted winner tabu; the scan must return a
        // different (no better) neighbor.
        memory.push(open.0.clone());
        let blocked = best_admissible_neighbor(&matrix, &current, &memory)
            .expect("five admissible neighbors remain");

        assert_ne!(blocked.0, open.0);
        assert!(blocked.1 >= open.1);
    }

    #[test]
    fn test_best_admissible_neighbor_none_when_all_tabu() {
        let matrix = two_city_matrix();
        let current = vec![0, 1];

        let mut memory = TabuMemory::new(10);
        memory.push(vec![1, 0]);

        assert!(best_admissible_neighbor(&matrix, &current, &memory).is_none());
    }

    #[test]
    fn test_best_admissible_neighbor_picks_strict_minimum() {
        let matrix = unit_square_matrix();
        // A crossing tour: its neighborhood contains perimeter tours.
        let current = vec![0, 2, 1, 3];
        let memory = TabuMemory::new(10);

        let (neighbor, distance) =
            best_admissible_neighbor(&matrix, &current, &memory).unwrap();

        assert!((distance - 4.0).abs() < 1e-9);
        assert!(is_valid_tour(&neighbor, 4));
    }
}
