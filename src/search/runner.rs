//! 2-opt local search with stagnation restarts.
//!
//! # Algorithm
//!
//! 1. Degenerate input (no matrix, fewer than two cities, all-zero entries)
//!    returns distance 0 without searching.
//! 2. Start from a random route and score it.
//! 3. While fewer than `max_iterations` sweeps have run and fewer than
//!    `max_stagnation_resets` restarts have happened:
//!    a. **Sweep**: for every `1 ≤ i < n-1`, `i < k < n` (i outer, k inner),
//!    reverse `[i..=k]`. A neighbor strictly shorter than the held route
//!    replaces it at once, and the rest of the sweep compares against it.
//!    b. **Stagnation**: a sweep without improvement increments the
//!    stagnation counter; reaching `max_stagnation` replaces the route with
//!    a fresh random one and counts a restart. An improving sweep resets
//!    the counter.
//! 4. Return the distance of the held route.
//!
//! Position 0 never moves within a descent; only restarts change the
//! starting city.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::config::{SearchBounds, SearchConfig};
use crate::constructive::random_route;
use crate::distance::DistanceMatrix;
use crate::evaluation::route_distance;
use crate::local_search::two_opt_swap;
use crate::models::Route;

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Open-path distance of the route held when the search stopped.
    pub distance: f64,
    /// Route held when the search stopped (None for degenerate input).
    pub route: Option<Route>,
    /// Shortest distance held at any point of the run.
    pub best_seen: f64,
    /// Full sweeps executed.
    pub iterations: usize,
    /// Stagnation-triggered restarts.
    pub restarts: usize,
    /// Held distance at the end of each sweep (empty when disabled).
    pub history: Vec<f64>,
    /// Sweep indices at which a restart replaced the route.
    pub restart_iterations: Vec<usize>,
}

impl SearchResult {
    fn degenerate() -> Self {
        Self {
            distance: 0.0,
            route: None,
            best_seen: 0.0,
            iterations: 0,
            restarts: 0,
            history: Vec::new(),
            restart_iterations: Vec::new(),
        }
    }
}

/// Mutable state of one search run.
struct SearchState {
    route: Route,
    best_distance: f64,
    best_seen: f64,
    iterations: usize,
    stagnation: usize,
    stagnation_resets: usize,
}

impl SearchState {
    fn new(route: Route, distances: &DistanceMatrix) -> Self {
        let best_distance = route_distance(&route, distances);
        Self {
            route,
            best_distance,
            best_seen: best_distance,
            iterations: 0,
            stagnation: 0,
            stagnation_resets: 0,
        }
    }

    /// One full 2-opt sweep. Returns `true` if any move was accepted.
    fn sweep(&mut self, distances: &DistanceMatrix) -> bool {
        let n = self.route.len();
        let mut improved = false;

        for i in 1..n - 1 {
            for k in i + 1..n {
                let candidate = two_opt_swap(&self.route, i, k);
                let candidate_distance = route_distance(&candidate, distances);
                if candidate_distance < self.best_distance {
                    trace!(
                        event = "improve",
                        iteration = self.iterations,
                        i,
                        k,
                        distance = candidate_distance,
                    );
                    self.route = candidate;
                    self.best_distance = candidate_distance;
                    self.best_seen = self.best_seen.min(candidate_distance);
                    improved = true;
                    debug_assert!(self.route.is_permutation());
                }
            }
        }

        improved
    }

    fn restart(&mut self, route: Route, distances: &DistanceMatrix) {
        self.stagnation = 0;
        self.stagnation_resets += 1;
        self.best_distance = route_distance(&route, distances);
        self.best_seen = self.best_seen.min(self.best_distance);
        self.route = route;
    }
}

/// 2-opt local search runner.
pub struct TwoOptSearch;

impl TwoOptSearch {
    /// Runs the search with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_ls::distance::DistanceMatrix;
    /// use tsp_ls::search::{SearchConfig, TwoOptSearch};
    ///
    /// let dm = DistanceMatrix::from_rows(&[
    ///     vec![0.0, 10.0, 15.0, 20.0],
    ///     vec![10.0, 0.0, 35.0, 25.0],
    ///     vec![15.0, 35.0, 0.0, 30.0],
    ///     vec![20.0, 25.0, 30.0, 0.0],
    /// ]).expect("square");
    ///
    /// let result = TwoOptSearch::run(Some(&dm), &SearchConfig::default().with_seed(42));
    /// assert!(result.distance >= 50.0);
    /// assert!(result.route.expect("searched").is_permutation());
    /// ```
    pub fn run(distances: Option<&DistanceMatrix>, config: &SearchConfig) -> SearchResult {
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(distances, config, &mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        distances: Option<&DistanceMatrix>,
        config: &SearchConfig,
        rng: &mut R,
    ) -> SearchResult {
        let Some(dm) = distances.filter(|dm| dm.size() > 1 && !dm.is_all_zero()) else {
            debug!(
                event = "degenerate_input",
                cities = distances.map_or(0, DistanceMatrix::size),
            );
            return SearchResult::degenerate();
        };

        let n = dm.size();
        let bounds = SearchBounds::resolve(n, config);

        info!(
            event = "search_start",
            cities = n,
            max_iterations = bounds.max_iterations,
            max_stagnation = bounds.max_stagnation,
            max_stagnation_resets = bounds.max_stagnation_resets,
        );

        let mut state = SearchState::new(random_route(n, rng), dm);
        let mut history = Vec::new();
        let mut restart_iterations = Vec::new();

        while state.iterations < bounds.max_iterations
            && state.stagnation_resets < bounds.max_stagnation_resets
        {
            if state.sweep(dm) {
                state.stagnation = 0;
            } else {
                state.stagnation += 1;
                if state.stagnation >= bounds.max_stagnation {
                    let abandoned = state.best_distance;
                    state.restart(random_route(n, rng), dm);
                    restart_iterations.push(state.iterations);
                    debug!(
                        event = "restart",
                        iteration = state.iterations,
                        restart = state.stagnation_resets,
                        abandoned_distance = abandoned,
                        distance = state.best_distance,
                    );
                }
            }

            state.iterations += 1;
            if config.record_history {
                history.push(state.best_distance);
            }
        }

        info!(
            event = "search_end",
            iterations = state.iterations,
            restarts = state.stagnation_resets,
            distance = state.best_distance,
            best_seen = state.best_seen,
        );

        SearchResult {
            distance: state.best_distance,
            route: Some(state.route),
            best_seen: state.best_seen,
            iterations: state.iterations,
            restarts: state.stagnation_resets,
            history,
            restart_iterations,
        }
    }
}
