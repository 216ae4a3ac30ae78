//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered visiting sequence over cities `0..n`.
///
/// A route produced by this crate is always a permutation: every city index
/// appears exactly once. Routes are values; operators return new routes
/// instead of mutating their input.
///
/// # Examples
///
/// ```
/// use tsp_ls::models::Route;
///
/// let route = Route::new(vec![2, 0, 1]);
/// assert_eq!(route.cities(), &[2, 0, 1]);
/// assert!(route.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    cities: Vec<usize>,
}

impl Route {
    /// Creates a route from a city sequence.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// The identity route `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// Returns the city sequence.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Returns the number of cities in this route.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the route has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Consumes the route and returns the city sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.cities
    }

    /// Returns `true` if each of `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.cities.len()];
        for &c in &self.cities {
            match seen.get_mut(c) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl From<Vec<usize>> for Route {
    fn from(cities: Vec<usize>) -> Self {
        Self::new(cities)
    }
}
