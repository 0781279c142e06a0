//! Tour representation and construction.

use rand::seq::SliceRandom;
use rand::Rng;

/// A tour visits every city exactly once and closes back to its start.
///
/// Represented as a permutation of the city indices `0..n` in visiting
/// order; the closing leg is implicit.
pub type Tour = Vec<usize>;

/// Builds a uniformly random tour over `n` cities.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    tour.shuffle(rng);
    tour
}
