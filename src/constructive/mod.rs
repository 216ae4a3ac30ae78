//! Constructive heuristics for initial routes.
//!
//! - [`random_route`] — Uniform random permutation (Fisher–Yates)

mod random;

pub use random::random_route;
