//! Nearest-neighbor tour construction.
//!
//! Builds a single tour greedily: starting from the depot, always visit the
//! nearest unvisited location.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations in the tour.

use crate::distance::DistanceMatrix;

/// Orders `candidates` into a tour using the nearest-neighbor heuristic.
///
/// Starts at `depot` and repeatedly appends the unvisited candidate closest
/// to the current position. Equal distances go to the candidate that
/// appears first in `candidates`, so the result is deterministic. The depot
/// itself is not included in the returned tour.
///
/// # Arguments
///
/// * `candidates`: Matrix indices to visit (order only matters for ties)
/// * `depot`: Matrix index of the depot
/// * `distances`: Distance matrix
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 0.3),
///     Coordinate::new(0.0, 0.1),
///     Coordinate::new(0.0, 0.2),
/// ]);
/// assert_eq!(nearest_neighbor_tour(&[1, 2, 3], 0, &dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour(
    candidates: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
) -> Vec<usize> {
    let mut unvisited = candidates.to_vec();
    let mut tour = Vec::with_capacity(unvisited.len());
    let mut current = depot;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        // `nearest_neighbor` keeps the first of equal minima; remove that one.
        if let Some(pos) = unvisited.iter().position(|&c| c == next) {
            unvisited.remove(pos);
        }
        tour.push(next);
        current = next;
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_nn_empty() {
        let dm = DistanceMatrix::from_locations(&[Coordinate::new(0.0, 0.0)]);
        assert!(nearest_neighbor_tour(&[], 0, &dm).is_empty());
    }

    #[test]
    fn test_nn_single() {
        let dm = DistanceMatrix::from_locations(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
        ]);
        assert_eq!(nearest_neighbor_tour(&[1], 0, &dm), vec![1]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_locations(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),  // far
            Coordinate::new(0.0, 0.01), // near
        ]);
        assert_eq!(nearest_neighbor_tour(&[1, 2], 0, &dm), vec![2, 1]);
    }

    #[test]
    fn test_nn_ties_follow_input_order() {
        // Two stops equidistant from the depot on opposite sides.
        let dm = DistanceMatrix::from_locations(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.1),
            Coordinate::new(0.0, -0.1),
        ]);
        assert_eq!(nearest_neighbor_tour(&[1, 2], 0, &dm), vec![1, 2]);
        assert_eq!(nearest_neighbor_tour(&[2, 1], 0, &dm), vec![2, 1]);
    }

    #[test]
    fn test_nn_duplicate_locations_are_distinct() {
        let dm = DistanceMatrix::from_locations(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.1),
            Coordinate::new(0.0, 0.1),
        ]);
        let tour = nearest_neighbor_tour(&[1, 2], 0, &dm);
        assert_eq!(tour, vec![1, 2]);
    }
}
