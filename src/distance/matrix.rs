//! Dense distance matrix.

use crate::models::{Coordinate, Depot, Stop};

use super::haversine_km;

/// Kilometre distances between every pair of locations, row-major.
///
/// [`around_depot`](Self::around_depot) lays locations out as
/// `[depot, stops...]`: index [`DistanceMatrix::DEPOT`] is the depot and stop
/// `k` sits at index `k + 1`.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(0.0, 2.0),
/// ]);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 2) - 2.0 * dm.get(0, 1)).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    km: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Index of the depot in a matrix built by [`around_depot`](Self::around_depot).
    pub const DEPOT: usize = 0;

    /// Haversine distances between every pair of `locations`.
    ///
    /// Each pair is computed once and mirrored, so the result is exactly
    /// symmetric with a zero diagonal.
    pub fn from_locations(locations: &[Coordinate]) -> Self {
        let size = locations.len();
        let mut km = vec![0.0; size * size];
        for (i, a) in locations.iter().enumerate() {
            for (j, b) in locations.iter().enumerate().skip(i + 1) {
                let d = haversine_km(a, b);
                km[i * size + j] = d;
                km[j * size + i] = d;
            }
        }
        Self { km, size }
    }

    /// Matrix over the depot followed by `stops` in input order.
    pub fn around_depot(depot: &Depot, stops: &[Stop]) -> Self {
        let locations: Vec<Coordinate> = std::iter::once(depot.coordinate())
            .chain(stops.iter().map(Stop::coordinate))
            .collect();
        Self::from_locations(&locations)
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.km[from * self.size + to]
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Matrix indices of the stops in a matrix built by
    /// [`around_depot`](Self::around_depot).
    pub fn stop_indices(&self) -> Vec<usize> {
        (Self::DEPOT + 1..self.size).collect()
    }

    /// The nearest of `candidates` to `from`; ties go to the one listed
    /// first. `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equator_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.3),
            Coordinate::new(0.0, 0.8),
        ]
    }

    #[test]
    fn test_from_locations_is_symmetric() {
        let points = equator_points();
        let dm = DistanceMatrix::from_locations(&points);
        assert_eq!(dm.size(), 3);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
        assert_eq!(dm.get(0, 1), haversine_km(&points[0], &points[1]));
        assert!(dm.get(0, 1) < dm.get(0, 2));
    }

    #[test]
    fn test_around_depot_layout() {
        let depot = Depot::new(Coordinate::new(0.0, 0.0));
        let stops = vec![
            Stop::new(7, Coordinate::new(0.0, 0.8), 1.0),
            Stop::new(3, Coordinate::new(0.0, 0.3), 1.0),
        ];
        let dm = DistanceMatrix::around_depot(&depot, &stops);
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.stop_indices(), vec![1, 2]);
        assert!(dm.get(DistanceMatrix::DEPOT, 2) < dm.get(DistanceMatrix::DEPOT, 1));
    }

    #[test]
    fn test_no_stops() {
        let dm = DistanceMatrix::around_depot(&Depot::new(Coordinate::new(1.0, 1.0)), &[]);
        assert_eq!(dm.size(), 1);
        assert!(dm.stop_indices().is_empty());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_locations(&equator_points());
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        // East and west of the depot at equal distance.
        let dm = DistanceMatrix::from_locations(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.1),
            Coordinate::new(0.0, -0.1),
        ]);
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }
}
