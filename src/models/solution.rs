//! Multi-vehicle plan type.

use serde::{Deserialize, Serialize};

use super::{Route, Stop};
use crate::report::{generate_optimization_report, OptimizationReport};

/// The result of planning a fleet: one route per used vehicle plus the stops
/// that could not be placed within capacity.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Plan, Route};
///
/// let plan = Plan::new(vec![Route::new(1, Vec::new(), 0.0, 0.0)], Vec::new());
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.num_unassigned(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    routes: Vec<Route>,
    unassigned: Vec<Stop>,
}

impl Plan {
    /// Creates a plan from routes and leftover stops.
    pub fn new(routes: Vec<Route>, unassigned: Vec<Stop>) -> Self {
        Self { routes, unassigned }
    }

    /// Creates a plan with no routes and no leftovers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the stops that did not fit any vehicle.
    pub fn unassigned(&self) -> &[Stop] {
        &self.unassigned
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns the number of unassigned stops.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Unrounded total distance across all routes.
    pub fn total_distance_km(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance_km()).sum()
    }

    /// Returns `true` when every stop was assigned.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Aggregates the routes into a fleet report.
    pub fn report(&self) -> OptimizationReport {
        generate_optimization_report(&self.routes)
    }

    /// Splits the plan into routes and unassigned stops.
    pub fn into_parts(self) -> (Vec<Route>, Vec<Stop>) {
        (self.routes, self.unassigned)
    }
}
