//! Random route construction.
//!
//! # Algorithm
//!
//! Fisher–Yates shuffle of the identity sequence: for each position `i` from
//! `n-1` down to `1`, swap position `i` with a uniformly random `j ∈ [0, i]`.
//! Every permutation is equally likely.
//!
//! # Complexity
//!
//! O(n) time, n random draws.

use rand::Rng;

use crate::models::Route;

/// Generates a uniformly random route over cities `0..n`.
///
/// Draws only from `rng`, so a seeded generator gives reproducible routes.
/// `n = 0` and `n = 1` return the trivial route without drawing.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tsp_ls::constructive::random_route;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let route = random_route(5, &mut rng);
/// assert_eq!(route.len(), 5);
/// assert!(route.is_permutation());
/// ```
pub fn random_route<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Route {
    let mut cities: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        cities.swap(i, j);
    }
    Route::new(cities)
}
