//! Randomized 2-opt local search.
//!
//! - [`TwoOptSearch`] — Sweep/restart search over one random start
//! - [`multi_start`] — Keep the best of several independent runs
//! - [`tsp_ls`] — Checked entry point over raw rows
//!
//! # Examples
//!
//! ```
//! use tsp_ls::search::tsp_ls;
//!
//! let rows = vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ];
//! let distance = tsp_ls(Some(rows.as_slice()), Some(42)).expect("square matrix");
//! assert!(distance >= 50.0);
//! assert_eq!(tsp_ls(None, None).expect("absent is valid"), 0.0);
//! ```

mod config;
mod runner;

pub use config::{SearchBounds, SearchConfig};
pub use runner::{SearchResult, TwoOptSearch};

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Runs the default search over raw rows and returns the route distance.
///
/// Absent, empty, single-city, and all-zero matrices give 0.
///
/// # Errors
///
/// Returns a [`MatrixError`](crate::error::MatrixError) if the rows are not
/// square or contain NaN.
pub fn tsp_ls(rows: Option<&[Vec<f64>]>, seed: Option<u64>) -> Result<f64> {
    let matrix = rows.map(DistanceMatrix::from_rows).transpose()?;
    let config = SearchConfig {
        seed,
        record_history: false,
        ..SearchConfig::default()
    };
    Ok(TwoOptSearch::run(matrix.as_ref(), &config).distance)
}

/// Runs `starts` independent searches and returns the one with the shortest
/// distance. Ties keep the earliest run.
///
/// With a seed `s`, run `i` uses seed `s + i` (wrapping); without one, each
/// run draws its own OS entropy. `starts = 0` is treated as 1.
///
/// ```
/// use tsp_ls::distance::DistanceMatrix;
/// use tsp_ls::search::{multi_start, SearchConfig};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 9.0],
///     vec![1.0, 0.0, 1.0],
///     vec![9.0, 1.0, 0.0],
/// ]).expect("square");
/// let best = multi_start(Some(&dm), &SearchConfig::default().with_seed(1), 8);
/// assert!(best.distance >= 2.0);
/// ```
pub fn multi_start(
    distances: Option<&DistanceMatrix>,
    config: &SearchConfig,
    starts: usize,
) -> SearchResult {
    let run_config = |i: usize| SearchConfig {
        seed: config.seed.map(|s| s.wrapping_add(i as u64)),
        ..config.clone()
    };

    let mut best = TwoOptSearch::run(distances, &run_config(0));
    for i in 1..starts.max(1) {
        let candidate = TwoOptSearch::run(distances, &run_config(i));
        if candidate.distance < best.distance {
            debug!(
                event = "multi_start_improve",
                start = i,
                distance = candidate.distance,
            );
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    fn four_city_rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ]
    }

    #[test]
    fn test_tsp_ls_degenerate() {
        assert_eq!(tsp_ls(None, Some(1)), Ok(0.0));
        assert_eq!(tsp_ls(Some(&[][..]), Some(1)), Ok(0.0));
        assert_eq!(tsp_ls(Some(&[vec![0.0]][..]), Some(1)), Ok(0.0));
        let zeros = vec![vec![0.0; 6]; 6];
        assert_eq!(tsp_ls(Some(zeros.as_slice()), Some(1)), Ok(0.0));
    }

    #[test]
    fn test_tsp_ls_rejects_ragged() {
        let rows = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0], vec![2.0, 1.0, 0.0]];
        assert_eq!(
            tsp_ls(Some(rows.as_slice()), Some(1)),
            Err(MatrixError::NotSquare {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_tsp_ls_matches_runner() {
        let rows = four_city_rows();
        let dm = DistanceMatrix::from_rows(&rows).expect("valid");
        let direct = TwoOptSearch::run(Some(&dm), &SearchConfig::default().with_seed(5));
        assert_eq!(tsp_ls(Some(rows.as_slice()), Some(5)), Ok(direct.distance));
    }

    #[test]
    fn test_multi_start_no_worse_than_first() {
        let dm = DistanceMatrix::from_rows(&four_city_rows()).expect("valid");
        let config = SearchConfig::default().with_seed(100);
        let single = TwoOptSearch::run(Some(&dm), &config);
        let best = multi_start(Some(&dm), &config, 10);
        assert!(best.distance <= single.distance);
    }

    #[test]
    fn test_multi_start_finds_optimum() {
        // Optimal open path is 2→0→1→3 (or its reverse) = 50
        let dm = DistanceMatrix::from_rows(&four_city_rows()).expect("valid");
        let best = multi_start(Some(&dm), &SearchConfig::default().with_seed(0), 200);
        assert_eq!(best.distance, 50.0);
    }

    #[test]
    fn test_multi_start_zero_starts() {
        let dm = DistanceMatrix::from_rows(&four_city_rows()).expect("valid");
        let config = SearchConfig::default().with_seed(3);
        assert_eq!(
            multi_start(Some(&dm), &config, 0),
            TwoOptSearch::run(Some(&dm), &config)
        );
    }

    #[test]
    fn test_multi_start_degenerate() {
        let best = multi_start(None, &SearchConfig::default(), 4);
        assert_eq!(best.distance, 0.0);
        assert!(best.route.is_none());
    }
}
