//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of edges (i-1, i) and (j, j+1) in a tour, including the
//! legs to and from the depot, compute the change in distance from reversing
//! the segment between them:
//!
//! ```text
//! delta = d(r[i-1], r[j]) + d(r[i], r[j+1]) - d(r[i-1], r[i]) - d(r[j], r[j+1])
//! ```
//!
//! If delta < 0, reverse the segment [i..=j] and accept the improvement.
//! Passes repeat until one finds no improvement or the pass bound is hit
//! (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt improvement to a single tour (given as matrix indices).
///
/// The tour is assumed to start and end at `depot`. Returns the improved
/// sequence and its total distance. The result is never longer than the
/// input.
///
/// # Arguments
///
/// * `route`: Ordered matrix indices (excluding depot)
/// * `depot`: Depot matrix index
/// * `distances`: Distance matrix
/// * `max_passes`: Pass bound; `None` runs until no move improves
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::local_search::{route_distance, two_opt_improve};
///
/// let dm = DistanceMatrix::from_locations(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 0.1),
///     Coordinate::new(0.0, 0.2),
///     Coordinate::new(0.0, 0.3),
/// ]);
///
/// // Zig-zag order: 1, 3, 2
/// let (improved, dist) = two_opt_improve(&[1, 3, 2], 0, &dm, None);
/// assert!(dist <= route_distance(&[1, 3, 2], 0, &dm));
/// assert!((dist - route_distance(&[1, 2, 3], 0, &dm)).abs() < 1e-9);
/// ```
pub fn two_opt_improve(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    max_passes: Option<usize>,
) -> (Vec<usize>, f64) {
    if route.len() < 2 {
        return (route.to_vec(), route_distance(route, depot, distances));
    }

    let mut current = route.to_vec();
    let n = current.len();
    let mut passes = 0;
    let mut improved = true;

    while improved && max_passes.map_or(true, |max| passes < max) {
        improved = false;
        passes += 1;

        for i in 0..n - 1 {
            for j in i + 1..n {
                let delta = two_opt_delta(&current, depot, distances, i, j);
                if delta < -IMPROVEMENT_EPS {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let dist = route_distance(&current, depot, distances);
    (current, dist)
}

/// Computes the distance change from reversing `route[i..=j]`.
///
/// Before: ...-prev_i - route[i] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - ... - route[i] - next_j-...
///
/// Assumes symmetric distances so the reversed interior keeps its length.
fn two_opt_delta(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { depot } else { route[i - 1] };
    let next_j = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}

/// Computes the total distance of a tour: `depot → route[0] → ... → route[n-1] → depot`.
///
/// An empty tour has length zero.
pub fn route_distance(route: &[usize], depot: usize, distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let inner: f64 = route
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();
    distances.get(depot, first) + inner + distances.get(last, depot)
}
