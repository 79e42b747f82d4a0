//! Single-route sequencing: nearest-neighbor construction followed by 2-opt.

use tracing::trace;

use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::local_search::{route_distance, two_opt_improve};
use crate::models::{Depot, Stop};

/// One vehicle's stops in visiting order.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedStops {
    /// Permutation of the input stops.
    pub stops: Vec<Stop>,
    /// Length of depot → stops → depot after 2-opt.
    pub distance_km: f64,
    /// Length of the nearest-neighbor tour before 2-opt.
    pub construction_distance_km: f64,
}

/// Orders a vehicle's stops into a short depot round trip.
///
/// Builds a nearest-neighbor tour from the depot, then improves it with
/// 2-opt (bounded by `max_two_opt_passes`, if given). The output is always
/// a permutation of `stops`; zero or one stop is returned unchanged.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot, Stop};
/// use fleet_routing::sequencer::sequence_stops;
///
/// let depot = Depot::new(Coordinate::new(0.0, 0.0));
/// let stops = vec![
///     Stop::new(1, Coordinate::new(0.0, 0.3), 1.0),
///     Stop::new(2, Coordinate::new(0.0, 0.1), 1.0),
///     Stop::new(3, Coordinate::new(0.0, 0.2), 1.0),
/// ];
/// let seq = sequence_stops(&depot, &stops, None);
/// let ids: Vec<u64> = seq.stops.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, vec![2, 3, 1]);
/// assert!(seq.distance_km <= seq.construction_distance_km);
/// ```
pub fn sequence_stops(
    depot: &Depot,
    stops: &[Stop],
    max_two_opt_passes: Option<usize>,
) -> SequencedStops {
    let distances = DistanceMatrix::around_depot(depot, stops);
    let depot_index = DistanceMatrix::DEPOT;

    let tour = nearest_neighbor_tour(&distances.stop_indices(), depot_index, &distances);
    let construction_distance_km = route_distance(&tour, depot_index, &distances);
    let (tour, distance_km) =
        two_opt_improve(&tour, depot_index, &distances, max_two_opt_passes);

    trace!(
        locations = distances.size(),
        construction_distance_km,
        distance_km,
        "sequenced route"
    );

    SequencedStops {
        stops: tour.into_iter().map(|i| stops[i - 1].clone()).collect(),
        distance_km,
        construction_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::path_distance_km;
    use crate::models::Coordinate;

    fn depot() -> Depot {
        Depot::new(Coordinate::new(9.9281, -84.0907))
    }

    #[test]
    fn test_sequence_empty() {
        let seq = sequence_stops(&depot(), &[], None);
        assert!(seq.stops.is_empty());
        assert_eq!(seq.distance_km, 0.0);
        assert_eq!(seq.construction_distance_km, 0.0);
    }

    #[test]
    fn test_sequence_single_is_round_trip() {
        let stop = Stop::new(1, Coordinate::new(9.93, -84.085), 5.0);
        let seq = sequence_stops(&depot(), std::slice::from_ref(&stop), None);
        assert_eq!(seq.stops, vec![stop.clone()]);
        let expected = 2.0 * depot().coordinate().distance_km(&stop.coordinate());
        assert!((seq.distance_km - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sequence_distance_matches_path() {
        let stops = vec![
            Stop::new(1, Coordinate::new(9.9300, -84.0850), 5.0),
            Stop::new(2, Coordinate::new(9.9250, -84.0900), 3.0),
            Stop::new(3, Coordinate::new(9.9400, -84.0950), 4.0),
            Stop::new(4, Coordinate::new(9.9150, -84.0800), 2.0),
        ];
        let seq = sequence_stops(&depot(), &stops, None);

        let mut path = vec![depot().coordinate()];
        path.extend(seq.stops.iter().map(Stop::coordinate));
        path.push(depot().coordinate());
        assert!((seq.distance_km - path_distance_km(&path)).abs() < 1e-9);

        let mut ids: Vec<u64> = seq.stops.iter().map(Stop::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sequence_keeps_duplicate_coordinates() {
        let here = Coordinate::new(9.93, -84.08);
        let stops = vec![Stop::new(1, here, 1.0), Stop::new(2, here, 1.0)];
        let seq = sequence_stops(&depot(), &stops, None);
        assert_eq!(seq.stops.len(), 2);
        assert_ne!(seq.stops[0].id(), seq.stops[1].id());
    }
}
