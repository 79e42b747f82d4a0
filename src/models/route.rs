//! Route type.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Depot, Stop};

/// An ordered sequence of stops served by a single vehicle.
///
/// A route starts and ends at the depot; the depot is not stored in
/// [`Route::stops`]. Routes are produced by the optimizer and expose no
/// setters.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot, Route, Stop};
///
/// let depot = Depot::new(Coordinate::new(0.0, 0.0));
/// let stops = vec![Stop::new(1, Coordinate::new(0.0, 1.0), 2.0)];
/// let route = Route::new(7, stops, 222.4, 449.0);
/// assert_eq!(route.vehicle_id(), 7);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.path(&depot).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    vehicle_id: u64,
    #[serde(rename = "orderedStops")]
    stops: Vec<Stop>,
    total_distance_km: f64,
    estimated_time_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    construction_distance_km: Option<f64>,
}

impl Route {
    /// Creates a route from an already sequenced list of stops.
    pub fn new(
        vehicle_id: u64,
        stops: Vec<Stop>,
        total_distance_km: f64,
        estimated_time_minutes: f64,
    ) -> Self {
        Self {
            vehicle_id,
            stops,
            total_distance_km,
            estimated_time_minutes,
            construction_distance_km: None,
        }
    }

    /// Records the tour length before local search improved it.
    pub fn with_construction_distance(mut self, km: f64) -> Self {
        self.construction_distance_km = Some(km);
        self
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> u64 {
        self.vehicle_id
    }

    /// Returns the stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the number of stops (excluding depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the stop IDs in visiting order.
    pub fn stop_ids(&self) -> Vec<u64> {
        self.stops.iter().map(|s| s.id()).collect()
    }

    /// Sum of stop weights carried on this route.
    pub fn load(&self) -> f64 {
        self.stops.iter().map(|s| s.weight()).sum()
    }

    /// Length of depot → stops → depot in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Driving plus service time in minutes.
    pub fn estimated_time_minutes(&self) -> f64 {
        self.estimated_time_minutes
    }

    /// Nearest-neighbor tour length before 2-opt, if recorded.
    pub fn construction_distance_km(&self) -> Option<f64> {
        self.construction_distance_km
    }

    /// Kilometres saved by local search (zero if not recorded).
    pub fn improvement_km(&self) -> f64 {
        self.construction_distance_km
            .map(|before| (before - self.total_distance_km).max(0.0))
            .unwrap_or(0.0)
    }

    /// Full polyline for map drawing: depot, every stop, depot.
    pub fn path(&self, depot: &Depot) -> Vec<Coordinate> {
        let mut path = Vec::with_capacity(self.stops.len() + 2);
        path.push(depot.coordinate());
        path.extend(self.stops.iter().map(|s| s.coordinate()));
        path.push(depot.coordinate());
        path
    }
}
