//! Error type for rejected input.
//!
//! Only malformed input is an error. Infeasible demand is reported through
//! [`Plan::unassigned`](crate::models::Plan::unassigned) and empty input
//! yields an empty plan.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Reasons an optimization request is rejected before any work is done.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Latitude/longitude is NaN, infinite or out of range.
    #[error("invalid coordinate for {record}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Human-readable record name, e.g. `stop 7` or `depot`.
        record: String,
        /// Offending latitude.
        latitude: f64,
        /// Offending longitude.
        longitude: f64,
    },
    /// Stop weight is negative or non-finite.
    #[error("invalid weight {weight} for stop {stop_id}")]
    InvalidWeight {
        /// Stop identifier.
        stop_id: u64,
        /// Offending weight.
        weight: f64,
    },
    /// Vehicle capacity is zero, negative or non-finite.
    #[error("invalid capacity {capacity} for vehicle {vehicle_id}")]
    InvalidCapacity {
        /// Vehicle identifier.
        vehicle_id: u64,
        /// Offending capacity.
        capacity: f64,
    },
    /// Two stops share the same identifier.
    #[error("duplicate stop id {0}")]
    DuplicateStopId(u64),
    /// Two vehicles share the same identifier.
    #[error("duplicate vehicle id {0}")]
    DuplicateVehicleId(u64),
    /// A distance handed to the tariff is negative or non-finite.
    #[error("invalid distance {0} km")]
    InvalidDistance(f64),
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
