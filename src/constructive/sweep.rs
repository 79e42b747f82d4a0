//! Sweep partitioning.
//!
//! # Algorithm
//!
//! Sorts stops by polar angle around the depot, then walks the sorted list
//! handing consecutive stops to one vehicle at a time. Nearby stops tend to
//! share an angle, so each vehicle receives a geographic wedge.
//!
//! Stops that cannot be placed during the walk get one best-fit repair pass
//! over every vehicle's remaining capacity; whatever still does not fit is
//! returned as unassigned.
//!
//! # Complexity
//!
//! O(n log n + n·m) for n stops and m vehicles.
//!
//! # Reference
//!
//! Gillett, B.E. & Miller, L.R. (1974). "A Heuristic Algorithm for the
//! Vehicle-Dispatch Problem", *Operations Research* 22(2), 340-349.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::distance::haversine_km;
use crate::models::{Coordinate, Depot, Stop, Vehicle};

/// Slack on the balanced fill target; capacity itself is never relaxed.
const TARGET_EPS: f64 = 1e-9;

/// When the sweep stops filling a vehicle and moves to the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SweepFill {
    /// Fill each vehicle towards its capacity-proportional share of the
    /// total demand, spreading the work across the fleet.
    #[default]
    Balanced,
    /// Fill each vehicle up to its capacity before opening the next.
    Greedy,
}

/// Stops grouped per vehicle by [`sweep_partition`].
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// One cluster per input vehicle, in vehicle order (possibly empty).
    pub clusters: Vec<Vec<Stop>>,
    /// Stops no vehicle had room for, in input order.
    pub unassigned: Vec<Stop>,
}

impl Partition {
    /// Total number of stops placed in clusters.
    pub fn num_assigned(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }
}

/// Polar angle of `point` around `origin`, normalized to `[0, 2π)`.
///
/// Latitude offset is the y axis and longitude offset the x axis, so due
/// east is 0 and due north is π/2.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::constructive::polar_angle;
///
/// let origin = Coordinate::new(0.0, 0.0);
/// assert_eq!(polar_angle(&origin, &Coordinate::new(0.0, 1.0)), 0.0);
/// let south = polar_angle(&origin, &Coordinate::new(-1.0, 0.0));
/// assert!((south - 1.5 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn polar_angle(origin: &Coordinate, point: &Coordinate) -> f64 {
    let dy = point.latitude - origin.latitude;
    let dx = point.longitude - origin.longitude;
    let angle = dy.atan2(dx);
    if angle < 0.0 {
        // -0.0 and tiny negatives must not round up to TAU itself.
        let wrapped = angle + TAU;
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    } else {
        angle
    }
}

/// Indices of `stops` sorted by angle, then distance from the depot, then
/// input position.
fn angular_order(depot: &Coordinate, stops: &[Stop]) -> Vec<usize> {
    let mut keyed: Vec<(f64, f64, usize)> = stops
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let c = s.coordinate();
            (polar_angle(depot, &c), haversine_km(depot, &c), i)
        })
        .collect();
    keyed.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.total_cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });
    keyed.into_iter().map(|(_, _, i)| i).collect()
}

/// Orders all stops into a single tour by sweeping around the depot.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot, Stop};
/// use fleet_routing::constructive::sweep_order;
///
/// let depot = Depot::new(Coordinate::new(0.0, 0.0));
/// let stops = vec![
///     Stop::new(1, Coordinate::new(1.0, 0.0), 1.0),  // north
///     Stop::new(2, Coordinate::new(0.0, -1.0), 1.0), // west
///     Stop::new(3, Coordinate::new(0.0, 1.0), 1.0),  // east
/// ];
/// let ids: Vec<u64> = sweep_order(&depot, &stops).iter().map(|s| s.id()).collect();
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn sweep_order(depot: &Depot, stops: &[Stop]) -> Vec<Stop> {
    angular_order(&depot.coordinate(), stops)
        .into_iter()
        .map(|i| stops[i].clone())
        .collect()
}

/// Splits stops among vehicles by angular sweep, respecting capacity.
///
/// Vehicles are filled in the order given. No cluster ever exceeds its
/// vehicle's capacity, and every input stop ends up in exactly one cluster
/// or in [`Partition::unassigned`].
///
/// # Arguments
///
/// * `depot`: Sweep origin
/// * `stops`: Stops to distribute
/// * `vehicles`: Fleet, each with its own capacity
/// * `fill`: Rule deciding when a vehicle is considered full
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot, Stop, Vehicle};
/// use fleet_routing::constructive::{sweep_partition, SweepFill};
///
/// let depot = Depot::new(Coordinate::new(0.0, 0.0));
/// let stops = vec![
///     Stop::new(1, Coordinate::new(0.1, 0.1), 1.0),
///     Stop::new(2, Coordinate::new(-0.1, -0.1), 1.0),
/// ];
/// let vehicles = vec![Vehicle::new(1, 1.0)];
///
/// let partition = sweep_partition(&depot, &stops, &vehicles, SweepFill::Balanced);
/// assert_eq!(partition.clusters[0].len(), 1);
/// assert_eq!(partition.unassigned.len(), 1);
/// ```
pub fn sweep_partition(
    depot: &Depot,
    stops: &[Stop],
    vehicles: &[Vehicle],
    fill: SweepFill,
) -> Partition {
    if vehicles.is_empty() || stops.is_empty() {
        return Partition {
            clusters: vec![Vec::new(); vehicles.len()],
            unassigned: stops.to_vec(),
        };
    }

    let order = angular_order(&depot.coordinate(), stops);
    let max_capacity = vehicles
        .iter()
        .map(Vehicle::capacity)
        .fold(0.0, f64::max);
    // Stops no vehicle can carry do not count towards the balanced share.
    let total_demand: f64 = stops
        .iter()
        .map(Stop::weight)
        .filter(|&w| w <= max_capacity)
        .sum();
    let total_capacity: f64 = vehicles.iter().map(Vehicle::capacity).sum();
    let share = (total_demand / total_capacity).min(1.0);
    let last = vehicles.len() - 1;

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); vehicles.len()];
    let mut loads = vec![0.0; vehicles.len()];
    let mut held: Vec<usize> = Vec::new();
    let mut rejected: Vec<usize> = Vec::new();
    let mut current = 0;

    for idx in order {
        let weight = stops[idx].weight();
        if weight > max_capacity {
            trace!(stop_id = stops[idx].id(), weight, "stop exceeds every vehicle");
            rejected.push(idx);
            continue;
        }

        loop {
            let capacity = vehicles[current].capacity();
            let load = loads[current];
            let fits = load + weight <= capacity;

            if current == last {
                if fits {
                    members[current].push(idx);
                    loads[current] += weight;
                } else {
                    held.push(idx);
                }
                break;
            }

            let accept = fits
                && match fill {
                    SweepFill::Greedy => true,
                    SweepFill::Balanced => {
                        let target = capacity * share;
                        members[current].is_empty()
                            || load + weight <= target + TARGET_EPS
                            || load + weight - target <= target - load
                    }
                };

            if accept {
                members[current].push(idx);
                loads[current] += weight;
                break;
            }

            trace!(
                vehicle_id = vehicles[current].id(),
                load,
                stops = members[current].len(),
                "vehicle closed"
            );
            current += 1;
        }
    }

    // Best-fit repair: tightest remaining room that still takes the stop.
    for idx in held {
        let weight = stops[idx].weight();
        let best = (0..vehicles.len())
            .filter(|&v| loads[v] + weight <= vehicles[v].capacity())
            .map(|v| (v, vehicles[v].capacity() - loads[v]))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match best {
            Some((v, _)) => {
                members[v].push(idx);
                loads[v] += weight;
            }
            None => rejected.push(idx),
        }
    }

    rejected.sort_unstable();
    let clusters: Vec<Vec<Stop>> = members
        .into_iter()
        .map(|m| m.into_iter().map(|i| stops[i].clone()).collect())
        .collect();
    let unassigned: Vec<Stop> = rejected.into_iter().map(|i| stops[i].clone()).collect();

    debug!(
        stops = stops.len(),
        vehicles = vehicles.len(),
        unassigned = unassigned.len(),
        "sweep partition done"
    );

    Partition {
        clusters,
        unassigned,
    }
}
