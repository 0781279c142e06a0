//! Tabu search configuration.

/// Configuration parameters for tabu search.
///
/// Every field combination is valid. `tabu_size` of 0 keeps no history,
/// which degenerates the search into plain steepest descent.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tabu_size(30);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tabu_size, 30);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Number of iterations (one neighborhood sweep each).
    pub iterations: usize,
    /// How many recently visited tours stay tabu.
    pub tabu_size: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            tabu_size: 20,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets how many visited tours the tabu memory retains.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
