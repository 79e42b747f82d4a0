//! Multi-vehicle route planning.
//!
//! [`RouteOptimizer`] ties the pieces together: validation, sweep
//! partitioning, per-vehicle sequencing and time estimation. It holds only
//! its configuration, so one instance can serve any number of requests from
//! any thread.

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::constructive::sweep_partition;
use crate::error::Result;
use crate::evaluation::RouteEvaluator;
use crate::models::{Depot, Plan, Stop, Vehicle};
use crate::sequencer::{sequence_stops, SequencedStops};
use crate::validate::validate_inputs;

/// Plans capacity-feasible delivery routes for a fleet.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot, Stop, Vehicle};
/// use fleet_routing::optimizer::RouteOptimizer;
///
/// let depot = Depot::new(Coordinate::new(9.9281, -84.0907));
/// let clients = vec![
///     Stop::new(1, Coordinate::new(9.9300, -84.0850), 5.0),
///     Stop::new(2, Coordinate::new(9.9250, -84.0900), 3.0),
///     Stop::new(3, Coordinate::new(9.9100, -84.0950), 4.0),
/// ];
/// let vehicles = vec![Vehicle::new(1, 10.0), Vehicle::new(2, 10.0)];
///
/// let optimizer = RouteOptimizer::default();
/// let plan = optimizer.optimize_multiple_routes(&clients, &vehicles, &depot).unwrap();
/// assert_eq!(plan.num_served(), 3);
/// assert!(plan.unassigned().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer, rejecting out-of-range configuration.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Splits `clients` among `vehicles` and sequences each vehicle's stops.
    ///
    /// Returns one route per vehicle that received at least one stop, in
    /// vehicle order; vehicles left without stops are omitted. Stops that fit
    /// no vehicle are listed in [`Plan::unassigned`]. With no clients or no
    /// vehicles the plan has no routes.
    ///
    /// # Errors
    ///
    /// Fails with the first malformed record; see
    /// [`validate_inputs`](crate::validate::validate_inputs).
    pub fn optimize_multiple_routes(
        &self,
        clients: &[Stop],
        vehicles: &[Vehicle],
        depot: &Depot,
    ) -> Result<Plan> {
        validate_inputs(depot, clients, vehicles)?;
        if clients.is_empty() {
            return Ok(Plan::empty());
        }
        debug!(
            clients = clients.len(),
            vehicles = vehicles.len(),
            "optimizing routes"
        );

        let partition = sweep_partition(depot, clients, vehicles, self.config.sweep_fill);
        let evaluator = RouteEvaluator::new(&self.config);

        let routes: Vec<_> = vehicles
            .iter()
            .zip(partition.clusters)
            .filter(|(_, cluster)| !cluster.is_empty())
            .map(|(vehicle, cluster)| {
                let sequenced = self.sequence(depot, &cluster);
                let route = evaluator.build_route(vehicle, sequenced);
                debug!(
                    vehicle_id = route.vehicle_id(),
                    stops = route.len(),
                    load = route.load(),
                    distance_km = route.total_distance_km(),
                    minutes = route.estimated_time_minutes(),
                    "route planned"
                );
                route
            })
            .collect();

        if !partition.unassigned.is_empty() {
            debug!(
                unassigned = partition.unassigned.len(),
                "demand exceeds fleet capacity"
            );
        }

        Ok(Plan::new(routes, partition.unassigned))
    }

    /// Orders one vehicle's stops with nearest neighbor and bounded 2-opt.
    pub fn sequence(&self, depot: &Depot, stops: &[Stop]) -> SequencedStops {
        sequence_stops(depot, stops, self.config.max_two_opt_passes)
    }

    /// Time estimate for a route of the given length and stop count.
    pub fn estimate_time_minutes(&self, distance_km: f64, stops: usize) -> f64 {
        RouteEvaluator::new(&self.config).estimate_time_minutes(distance_km, stops)
    }
}
