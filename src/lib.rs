//! # fleet-routing
//!
//! Capacitated multi-vehicle delivery planning on geographic coordinates.
//! Stops are partitioned among vehicles by a polar sweep around the depot,
//! then each vehicle's stops are sequenced with nearest neighbor followed by
//! 2-opt.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Coordinate, Depot, Stop, Vehicle, Route, Plan)
//! - [`distance`]: Haversine distance and distance matrix
//! - [`constructive`]: Nearest-neighbor tour and sweep partition
//! - [`local_search`]: 2-opt improvement
//! - [`sequencer`]: Visiting order for one vehicle
//! - [`evaluation`]: Time estimates and route assembly
//! - [`optimizer`]: Multi-vehicle orchestration
//! - [`report`]: Fleet-wide summary
//! - [`pricing`]: Distance-based delivery tariff
//!
//! ## Example
//!
//! ```
//! use fleet_routing::models::{Coordinate, Depot, Stop, Vehicle};
//! use fleet_routing::optimizer::RouteOptimizer;
//!
//! let depot = Depot::new(Coordinate::new(9.9281, -84.0907));
//! let stops = vec![
//!     Stop::new(1, Coordinate::new(9.9350, -84.0850), 1.0),
//!     Stop::new(2, Coordinate::new(9.9200, -84.0950), 1.0),
//! ];
//! let vehicles = vec![Vehicle::new(1, 5.0)];
//!
//! let plan = RouteOptimizer::default()
//!     .optimize_multiple_routes(&stops, &vehicles, &depot)
//!     .unwrap();
//! assert_eq!(plan.num_routes(), 1);
//! assert!(plan.is_complete());
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod pricing;
pub mod report;
pub mod sequencer;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use error::{Result, RoutingError};
