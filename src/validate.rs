//! Fail-fast input validation.

use std::collections::HashSet;

use crate::error::{Result, RoutingError};
use crate::models::{Coordinate, Depot, Stop, Vehicle};

fn check_coordinate(record: impl FnOnce() -> String, c: &Coordinate) -> Result<()> {
    if c.is_valid() {
        Ok(())
    } else {
        Err(RoutingError::InvalidCoordinate {
            record: record(),
            latitude: c.latitude,
            longitude: c.longitude,
        })
    }
}

/// Checks an optimization request before any work is done.
///
/// Rejects, naming the first offending record:
/// - NaN, infinite or out-of-range coordinates (depot or stop)
/// - negative or non-finite stop weights
/// - zero, negative or non-finite vehicle capacities
/// - repeated stop or vehicle identifiers
///
/// Empty stop or vehicle lists are valid.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot, Stop, Vehicle};
/// use fleet_routing::validate::validate_inputs;
/// use fleet_routing::RoutingError;
///
/// let depot = Depot::new(Coordinate::new(9.9281, -84.0907));
/// let stops = vec![Stop::new(1, Coordinate::new(9.93, -84.085), -2.0)];
/// let err = validate_inputs(&depot, &stops, &[Vehicle::new(1, 10.0)]).unwrap_err();
/// assert_eq!(err, RoutingError::InvalidWeight { stop_id: 1, weight: -2.0 });
/// ```
pub fn validate_inputs(depot: &Depot, stops: &[Stop], vehicles: &[Vehicle]) -> Result<()> {
    check_coordinate(|| "depot".to_string(), &depot.coordinate())?;

    let mut stop_ids = HashSet::with_capacity(stops.len());
    for stop in stops {
        check_coordinate(|| format!("stop {}", stop.id()), &stop.coordinate())?;
        let weight = stop.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(RoutingError::InvalidWeight {
                stop_id: stop.id(),
                weight,
            });
        }
        if !stop_ids.insert(stop.id()) {
            return Err(RoutingError::DuplicateStopId(stop.id()));
        }
    }

    let mut vehicle_ids = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        let capacity = vehicle.capacity();
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(RoutingError::InvalidCapacity {
                vehicle_id: vehicle.id(),
                capacity,
            });
        }
        if !vehicle_ids.insert(vehicle.id()) {
            return Err(RoutingError::DuplicateVehicleId(vehicle.id()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depot() -> Depot {
        Depot::new(Coordinate::new(9.9281, -84.0907))
    }

    fn stop(id: u64) -> Stop {
        Stop::new(id, Coordinate::new(9.93, -84.085), 1.0)
    }

    #[test]
    fn test_valid_request() {
        let vehicles = vec![Vehicle::new(1, 15.0), Vehicle::new(2, 20.0)];
        assert!(validate_inputs(&depot(), &[stop(1), stop(2)], &vehicles).is_ok());
    }

    #[test]
    fn test_empty_request_is_valid() {
        assert!(validate_inputs(&depot(), &[], &[]).is_ok());
    }

    #[test]
    fn test_rejects_bad_depot() {
        let bad = Depot::new(Coordinate::new(f64::NAN, 0.0));
        let err = validate_inputs(&bad, &[], &[]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidCoordinate { ref record, .. } if record == "depot"));
    }

    #[test]
    fn test_rejects_out_of_range_stop() {
        let stops = vec![stop(1), Stop::new(8, Coordinate::new(10.0, -200.0), 1.0)];
        let err = validate_inputs(&depot(), &stops, &[]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidCoordinate {
                record: "stop 8".into(),
                latitude: 10.0,
                longitude: -200.0,
            }
        );
    }

    #[test]
    fn test_rejects_nan_weight() {
        let stops = vec![Stop::new(3, Coordinate::new(9.9, -84.0), f64::NAN)];
        let err = validate_inputs(&depot(), &stops, &[]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidWeight { stop_id: 3, .. }));
    }

    #[test]
    fn test_zero_weight_is_allowed() {
        let stops = vec![Stop::new(3, Coordinate::new(9.9, -84.0), 0.0)];
        assert!(validate_inputs(&depot(), &stops, &[]).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let err = validate_inputs(&depot(), &[], &[Vehicle::new(4, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidCapacity {
                vehicle_id: 4,
                capacity: 0.0
            }
        );
        let err = validate_inputs(&depot(), &[], &[Vehicle::new(5, -3.0)]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidCapacity { vehicle_id: 5, .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = validate_inputs(&depot(), &[stop(1), stop(1)], &[]).unwrap_err();
        assert_eq!(err, RoutingError::DuplicateStopId(1));

        let vehicles = vec![Vehicle::new(2, 1.0), Vehicle::new(2, 1.0)];
        let err = validate_inputs(&depot(), &[], &vehicles).unwrap_err();
        assert_eq!(err, RoutingError::DuplicateVehicleId(2));
    }
}
