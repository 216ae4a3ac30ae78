//! Open-path route length.

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Computes the open-path length of a route: `route[0] → ... → route[n-1]`.
///
/// The closing edge back to `route[0]` is not counted. Routes with fewer
/// than two cities have length zero.
///
/// # Panics
///
/// Panics if the route holds a city index outside the matrix.
///
/// # Examples
///
/// ```
/// use tsp_ls::distance::DistanceMatrix;
/// use tsp_ls::evaluation::route_distance;
/// use tsp_ls::models::Route;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ]).expect("square");
/// assert_eq!(route_distance(&Route::new(vec![0, 1, 2]), &dm), 3.0);
/// ```
pub fn route_distance(route: &Route, distances: &DistanceMatrix) -> f64 {
    route
        .cities()
        .windows(2)
        .map(|edge| distances.get(edge[0], edge[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_three_cities() {
        let dm = sample();
        let d = route_distance(&Route::new(vec![0, 1, 2]), &dm);
        assert_eq!(d, dm.get(0, 1) + dm.get(1, 2));
    }

    #[test]
    fn test_excludes_closing_edge() {
        let dm = sample();
        // 1→0→2→3 = 10 + 15 + 30, no 3→1 edge
        assert_eq!(route_distance(&Route::new(vec![1, 0, 2, 3]), &dm), 55.0);
    }

    #[test]
    fn test_single_and_empty() {
        let dm = sample();
        assert_eq!(route_distance(&Route::new(vec![2]), &dm), 0.0);
        assert_eq!(route_distance(&Route::new(vec![]), &dm), 0.0);
    }

    #[test]
    fn test_asymmetric_direction() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 3.0);
        dm.set(1, 0, 8.0);
        assert_eq!(route_distance(&Route::new(vec![0, 1]), &dm), 3.0);
        assert_eq!(route_distance(&Route::new(vec![1, 0]), &dm), 8.0);
    }

    #[test]
    #[should_panic]
    fn test_index_outside_matrix() {
        let dm = DistanceMatrix::new(2);
        route_distance(&Route::new(vec![0, 5]), &dm);
    }
}
