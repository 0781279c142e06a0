//! Permutation crossover and mutation operators.
//!
//! All operators take parent tours as `&[usize]` permutations of `0..n`
//! and produce children that are again valid permutations.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX, Davis 1985): keeps one parent segment in
//!   place, fills the rest in donor order
//! - [`uniform_crossover`]: per-position coin flips
//! - [`one_point_crossover`]: prefix split
//! - [`two_point_crossover`]: segment split, equivalent to OX
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two distinct random positions in O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::tour::Tour;
use rand::Rng;

/// Crossover operator for recombining two parent tours.
///
/// Every operator guarantees a valid permutation child from two valid
/// permutation parents of equal length.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::Crossover;
///
/// let cx = Crossover::default();
/// assert_eq!(cx, Crossover::Order);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// Order crossover (OX): one segment of the first parent stays in
    /// place, the rest fills left to right from the second parent.
    Order,

    /// Per-position coin flip on the first parent's city, gaps filled
    /// left to right from the second parent.
    Uniform,

    /// Single cut: the first parent's prefix, then the second parent's
    /// remaining cities in its order.
    OnePoint,

    /// Segment between two cuts from the first parent, rest from the
    /// second. Same mechanics as [`Crossover::Order`].
    TwoPoint,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::Order
    }
}

impl Crossover {
    /// Produces one child tour from two parents.
    ///
    /// # Panics
    /// Panics if the parents differ in length or have fewer than two
    /// cities.
    pub fn apply<R: Rng>(&self, parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
        match self {
            Crossover::Order => order_crossover(parent1, parent2, rng),
            Crossover::Uniform => uniform_crossover(parent1, parent2, rng),
            Crossover::OnePoint => one_point_crossover(parent1, parent2, rng),
            Crossover::TwoPoint => two_point_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Draw two distinct cut points `start < end`
/// 2. Copy `parent1[start..end]` to the child at the same positions
/// 3. Fill the remaining positions left to right with `parent2`'s cities,
///    in their `parent2` order, skipping cities already present
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or have fewer than two cities.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    check_parents(parent1, parent2);
    let (start, end) = distinct_cut_points(parent1.len(), rng);
    segment_fill(parent1, parent2, start, end)
}

/// Uniform crossover for permutations.
///
/// A fair coin is flipped for every position; heads keeps `parent1`'s
/// city there unless it was already placed. The remaining positions fill
/// left to right with `parent2`'s unused cities in `parent2` order.
///
/// # Panics
/// Panics if the parents differ in length or have fewer than two cities.
pub fn uniform_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    check_parents(parent1, parent2);
    let n = parent1.len();

    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];
    for i in 0..n {
        // The coin is flipped even when the city turns out to be a
        // duplicate, so draws stay position-aligned.
        if rng.random_bool(0.5) && !used[parent1[i]] {
            child[i] = parent1[i];
            used[parent1[i]] = true;
        }
    }

    fill_remaining(&mut child, parent2, &used);
    child
}

/// One-point crossover for permutations.
///
/// Cuts strictly inside the tour: the child takes `parent1`'s prefix up
/// to the cut, then `parent2`'s remaining cities in `parent2` order. Two
/// cities leave exactly one possible cut.
///
/// # Panics
/// Panics if the parents differ in length or have fewer than two cities.
pub fn one_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    check_parents(parent1, parent2);
    let n = parent1.len();

    let cut = rng.random_range(1..=(n - 2).max(1));

    let mut child = Vec::with_capacity(n);
    let mut used = vec![false; n];
    for &city in &parent1[..cut] {
        child.push(city);
        used[city] = true;
    }
    child.extend(parent2.iter().copied().filter(|&city| !used[city]));
    child
}

/// Two-point crossover for permutations.
///
/// Copies the segment between two distinct cut points from the first
/// parent and fills the rest from the second in its order, which is
/// exactly the [`order_crossover`] construction. Both names are kept so
/// either can be requested by configuration.
///
/// # Panics
/// Panics if the parents differ in length or have fewer than two cities.
pub fn two_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    order_crossover(parent1, parent2, rng)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let picks = rand::seq::index::sample(rng, n, 2);
    tour.swap(picks.index(0), picks.index(1));
}

// ============================================================================
// Helpers
// ============================================================================

fn check_parents(parent1: &[usize], parent2: &[usize]) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(parent1.len() >= 2, "parents must have at least two cities");
}

/// Draw two distinct cut points and return them ordered.
fn distinct_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = rand::seq::index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Copy `template[start..end]` into a child at the same positions, then
/// fill the gaps from `donor`.
fn segment_fill(template: &[usize], donor: &[usize], start: usize, end: usize) -> Tour {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        used[template[i]] = true;
    }

    fill_remaining(&mut child, donor, &used);
    child
}

/// Fill sentinel slots left to right with `donor`'s unused cities in
/// `donor` order.
fn fill_remaining(child: &mut [usize], donor: &[usize], used: &[bool]) {
    let mut fill = donor.iter().copied().filter(|&city| !used[city]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = fill.next().expect("donor covers every unused city");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
