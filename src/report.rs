//! Fleet-wide report aggregation.

use serde::{Deserialize, Serialize};

use crate::models::Route;

/// Summary figures over a set of routes.
///
/// Always recomputed from routes by [`generate_optimization_report`]; never
/// updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    /// Number of routes with at least one stop.
    pub total_routes: usize,
    /// Number of stops across all routes.
    pub total_deliveries: usize,
    /// Sum of route distances, rounded to two decimals.
    pub total_distance_km: f64,
    /// Sum of route time estimates.
    pub total_time_minutes: f64,
    /// `total_deliveries / total_routes`, or 0 when there are no routes.
    pub average_deliveries_per_route: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Aggregates per-route metrics into fleet totals.
///
/// Empty routes do not count towards `total_routes`. An empty input gives an
/// all-zero report.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Route, Stop};
/// use fleet_routing::report::generate_optimization_report;
///
/// let stop = |id| Stop::new(id, Coordinate::new(0.0, 0.0), 1.0);
/// let routes = vec![
///     Route::new(1, vec![stop(1), stop(2)], 10.004, 30.0),
///     Route::new(2, vec![stop(3)], 5.0, 15.0),
/// ];
/// let report = generate_optimization_report(&routes);
/// assert_eq!(report.total_routes, 2);
/// assert_eq!(report.total_deliveries, 3);
/// assert_eq!(report.total_distance_km, 15.0);
/// assert_eq!(report.average_deliveries_per_route, 1.5);
///
/// assert_eq!(generate_optimization_report(&[]).average_deliveries_per_route, 0.0);
/// ```
pub fn generate_optimization_report(routes: &[Route]) -> OptimizationReport {
    let total_routes = routes.iter().filter(|r| !r.is_empty()).count();
    let total_deliveries: usize = routes.iter().map(Route::len).sum();
    let total_distance: f64 = routes.iter().map(Route::total_distance_km).sum();
    let total_time_minutes: f64 = routes.iter().map(Route::estimated_time_minutes).sum();
    let average_deliveries_per_route = if total_routes == 0 {
        0.0
    } else {
        total_deliveries as f64 / total_routes as f64
    };

    OptimizationReport {
        total_routes,
        total_deliveries,
        total_distance_km: round2(total_distance),
        total_time_minutes,
        average_deliveries_per_route,
    }
}
