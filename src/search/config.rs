//! Local search configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for [`TwoOptSearch`](super::TwoOptSearch).
///
/// The defaults give the classic bounds: `n²` sweeps, a restart after
/// `n² / 4` consecutive sweeps without improvement, and at most two restarts.
///
/// # Examples
///
/// ```
/// use tsp_ls::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(500)
///     .with_max_stagnation_resets(3)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, Some(500));
/// assert_eq!(config.max_stagnation_resets, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard ceiling on full sweeps (None for `n²`).
    pub max_iterations: Option<usize>,
    /// Stagnation threshold is `max_iterations / stagnation_divisor`.
    pub stagnation_divisor: usize,
    /// Number of stagnation-triggered restarts that ends the search.
    pub max_stagnation_resets: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
    /// Whether to record the per-sweep distance history.
    pub record_history: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            stagnation_divisor: 4,
            max_stagnation_resets: 2,
            seed: None,
            record_history: true,
        }
    }
}

impl SearchConfig {
    /// Sets the maximum number of sweeps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Sets the divisor applied to `max_iterations` for the stagnation threshold.
    pub fn with_stagnation_divisor(mut self, divisor: usize) -> Self {
        self.stagnation_divisor = divisor;
        self
    }

    /// Sets the number of restarts after which the search stops.
    pub fn with_max_stagnation_resets(mut self, n: usize) -> Self {
        self.max_stagnation_resets = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables history recording.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

/// Iteration bounds resolved for a concrete problem size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    /// Maximum number of full sweeps.
    pub max_iterations: usize,
    /// Consecutive non-improving sweeps that trigger a restart.
    pub max_stagnation: usize,
    /// Restarts after which the search stops.
    pub max_stagnation_resets: usize,
}

impl SearchBounds {
    /// Resolves the bounds for `n` cities.
    ///
    /// A zero `stagnation_divisor` is treated as 1.
    ///
    /// ```
    /// use tsp_ls::search::{SearchBounds, SearchConfig};
    ///
    /// let b = SearchBounds::resolve(10, &SearchConfig::default());
    /// assert_eq!(b.max_iterations, 100);
    /// assert_eq!(b.max_stagnation, 25);
    /// assert_eq!(b.max_stagnation_resets, 2);
    /// ```
    pub fn resolve(n: usize, config: &SearchConfig) -> Self {
        let max_iterations = config.max_iterations.unwrap_or(n * n);
        Self {
            max_iterations,
            max_stagnation: max_iterations / config.stagnation_divisor.max(1),
            max_stagnation_resets: config.max_stagnation_resets,
        }
    }
}
