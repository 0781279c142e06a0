//! Parent selection strategies.
//!
//! Selection operates on the tour distances of the current population
//! (lower is better) and returns the index of the chosen parent.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Candidates drawn per tournament, clamped to the population size.
const TOURNAMENT_SIZE: usize = 3;

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimization** (shorter tour = better).
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::Selection;
///
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Tournament);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Draw three distinct individuals, keep the shortest tour.
    ///
    /// Populations of two draw both individuals, so the shorter tour
    /// always wins.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament,

    /// Distance-proportionate (roulette wheel) draw on weights
    /// `1 / distance`.
    ///
    /// A non-finite or non-positive total weight (a zero-length tour
    /// makes its weight infinite) falls back to a uniform draw.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,

    /// Rank-weighted draw over the population sorted by ascending
    /// distance, where sorted position `i` carries weight `i + 1`.
    ///
    /// The largest weight sits on the last sorted position, so this
    /// weighting leans toward the longer tours of the population.
    ///
    /// # Complexity
    /// O(n log n) per selection (sort)
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament
    }
}

impl Selection {
    /// Picks a parent index given the population's tour distances.
    ///
    /// # Panics
    /// Panics if `distances` is empty.
    pub fn select<R: Rng>(&self, distances: &[f64], rng: &mut R) -> usize {
        assert!(
            !distances.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament => tournament(distances, rng),
            Selection::Roulette => roulette(distances, rng),
            Selection::Rank => rank(distances, rng),
        }
    }
}

/// Tournament selection: draw distinct candidates, return the shortest.
fn tournament<R: Rng>(distances: &[f64], rng: &mut R) -> usize {
    let n = distances.len();
    let k = TOURNAMENT_SIZE.min(n);

    rand::seq::index::sample(rng, n, k)
        .into_iter()
        .min_by(|&a, &b| {
            distances[a]
                .partial_cmp(&distances[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("tournament draws at least one candidate")
}

/// Roulette wheel on inverse distances.
fn roulette<R: Rng>(distances: &[f64], rng: &mut R) -> usize {
    let n = distances.len();

    let weights: Vec<f64> = distances.iter().map(|&d| 1.0 / d).collect();
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / total;
        if threshold <= cumulative {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank-weighted selection over the ascending-distance order.
///
/// Sorted position `i` gets weight `i + 1` out of `n * (n + 1) / 2`, so
/// the walk lands on later (longer) tours more often.
fn rank<R: Rng>(distances: &[f64], rng: &mut R) -> usize {
    let n = distances.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        distances[a]
            .partial_cmp(&distances[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (position, &index) in order.iter().enumerate() {
        cumulative += (position + 1) as f64 / total;
        if threshold <= cumulative {
            return index;
        }
    }

    order[n - 1] // floating-point fallback
}
