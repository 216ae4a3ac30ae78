//! 2-opt segment reversal.
//!
//! # Move
//!
//! Reversing the segment `[i..=k]` of a route removes the edges
//! `(r[i-1], r[i])` and `(r[k], r[k+1])` and reconnects the path as
//! `(r[i-1], r[k])` and `(r[i], r[k+1])`:
//!
//! ```text
//! before: ... r[i-1] → r[i] → r[i+1] → ... → r[k] → r[k+1] ...
//! after:  ... r[i-1] → r[k] → r[k-1] → ... → r[i] → r[k+1] ...
//! ```
//!
//! Applying the same move twice restores the original route.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::Route;

/// Returns a copy of `route` with the segment `[i..=k]` reversed.
///
/// Cities outside the segment keep their positions. The input is not
/// modified.
///
/// # Panics
///
/// Panics unless `i < k < route.len()`.
///
/// # Examples
///
/// ```
/// use tsp_ls::local_search::two_opt_swap;
/// use tsp_ls::models::Route;
///
/// let route = Route::new(vec![0, 1, 2, 3, 4]);
/// assert_eq!(two_opt_swap(&route, 1, 3).cities(), &[0, 3, 2, 1, 4]);
/// ```
pub fn two_opt_swap(route: &Route, i: usize, k: usize) -> Route {
    assert!(
        i < k && k < route.len(),
        "invalid 2-opt segment [{i}, {k}] for route of length {}",
        route.len()
    );
    let mut cities = route.cities().to_vec();
    cities[i..=k].reverse();
    Route::new(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reverses_inner_segment() {
        let route = Route::new(vec![0, 1, 2, 3, 4]);
        assert_eq!(two_opt_swap(&route, 1, 3).cities(), &[0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_input_untouched() {
        let route = Route::new(vec![4, 3, 2, 1, 0]);
        let _ = two_opt_swap(&route, 0, 4);
        assert_eq!(route.cities(), &[4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_full_reversal() {
        let route = Route::new(vec![0, 1, 2]);
        assert_eq!(two_opt_swap(&route, 0, 2).cities(), &[2, 1, 0]);
    }

    #[test]
    fn test_adjacent_pair() {
        let route = Route::new(vec![5, 6, 7, 8]);
        assert_eq!(two_opt_swap(&route, 2, 3).cities(), &[5, 6, 8, 7]);
    }

    #[test]
    #[should_panic(expected = "invalid 2-opt segment")]
    fn test_rejects_equal_indices() {
        two_opt_swap(&Route::identity(4), 2, 2);
    }

    #[test]
    #[should_panic(expected = "invalid 2-opt segment")]
    fn test_rejects_k_past_end() {
        two_opt_swap(&Route::identity(4), 1, 4);
    }

    fn route_and_segment() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
        (2usize..40)
            .prop_flat_map(|n| (Just(n), 0..n - 1))
            .prop_flat_map(|(n, i)| (Just(n), Just(i), i + 1..n))
            .prop_flat_map(|(n, i, k)| {
                (Just((0..n).collect::<Vec<_>>()).prop_shuffle(), Just(i), Just(k))
            })
    }

    proptest! {
        #[test]
        fn prop_swap_is_involution((cities, i, k) in route_and_segment()) {
            let route = Route::new(cities);
            let twice = two_opt_swap(&two_opt_swap(&route, i, k), i, k);
            prop_assert_eq!(twice, route);
        }

        #[test]
        fn prop_swap_keeps_permutation((cities, i, k) in route_and_segment()) {
            let swapped = two_opt_swap(&Route::new(cities.clone()), i, k);
            prop_assert!(swapped.is_permutation());
            prop_assert_eq!(&swapped.cities()[..i], &cities[..i]);
            prop_assert_eq!(&swapped.cities()[k + 1..], &cities[k + 1..]);
        }
    }
}
