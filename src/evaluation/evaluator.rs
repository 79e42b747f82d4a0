//! Route evaluator that turns sequenced stops into timed routes.

use crate::config::OptimizerConfig;
use crate::models::{Route, Vehicle};
use crate::sequencer::SequencedStops;

/// Computes travel-time estimates and assembles [`Route`] values.
///
/// Time is `distance / average_speed * 60 + service_minutes * stops`.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::OptimizerConfig;
/// use fleet_routing::evaluation::RouteEvaluator;
///
/// let config = OptimizerConfig::default(); // 30 km/h, 5 min per stop
/// let evaluator = RouteEvaluator::new(&config);
/// assert!((evaluator.estimate_time_minutes(15.0, 2) - 40.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    config: &'a OptimizerConfig,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator reading speed and service time from `config`.
    pub fn new(config: &'a OptimizerConfig) -> Self {
        Self { config }
    }

    /// Driving time at average speed plus per-stop service time, in minutes.
    pub fn estimate_time_minutes(&self, distance_km: f64, stops: usize) -> f64 {
        let driving = distance_km / self.config.average_speed_kmh * 60.0;
        driving + self.config.service_minutes_per_stop * stops as f64
    }

    /// Builds the route for `vehicle` from an already sequenced stop list.
    pub fn build_route(&self, vehicle: &Vehicle, sequenced: SequencedStops) -> Route {
        let minutes = self.estimate_time_minutes(sequenced.distance_km, sequenced.stops.len());
        Route::new(
            vehicle.id(),
            sequenced.stops,
            sequenced.distance_km,
            minutes,
        )
        .with_construction_distance(sequenced.construction_distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Stop};

    #[test]
    fn test_time_zero_for_empty_route() {
        let config = OptimizerConfig::default();
        let eval = RouteEvaluator::new(&config);
        assert_eq!(eval.estimate_time_minutes(0.0, 0), 0.0);
    }

    #[test]
    fn test_time_uses_configured_speed() {
        let config = OptimizerConfig::default()
            .with_average_speed_kmh(40.0)
            .with_service_minutes_per_stop(0.0);
        let eval = RouteEvaluator::new(&config);
        assert!((eval.estimate_time_minutes(20.0, 3) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_build_route() {
        let config = OptimizerConfig::default();
        let eval = RouteEvaluator::new(&config);
        let sequenced = SequencedStops {
            stops: vec![
                Stop::new(1, Coordinate::new(0.0, 0.1), 2.0),
                Stop::new(2, Coordinate::new(0.0, 0.2), 3.0),
            ],
            distance_km: 6.0,
            construction_distance_km: 7.5,
        };
        let route = eval.build_route(&Vehicle::new(9, 10.0), sequenced);
        assert_eq!(route.vehicle_id(), 9);
        assert_eq!(route.stop_ids(), vec![1, 2]);
        assert_eq!(route.total_distance_km(), 6.0);
        // 6 km at 30 km/h = 12 min, plus 2 × 5 min service.
        assert!((route.estimated_time_minutes() - 22.0).abs() < 1e-10);
        assert!((route.improvement_km() - 1.5).abs() < 1e-12);
    }
}
