//! Domain model types for fleet delivery planning.
//!
//! Provides the plain records exchanged with the surrounding application:
//! coordinates and the depot, weighted delivery stops, capacity-limited
//! vehicles, sequenced routes, and the multi-vehicle plan.

mod coordinate;
mod route;
mod solution;
mod stop;
mod vehicle;

pub use coordinate::{Coordinate, Depot};
pub use route::Route;
pub use solution::Plan;
pub use stop::Stop;
pub use vehicle::Vehicle;
