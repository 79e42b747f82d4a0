//! Constructive heuristics.
//!
//! - [`nearest_neighbor_tour`]: Greedy nearest-neighbor tour for one vehicle, O(n²)
//! - [`sweep_partition`]: Polar-angle sweep clustering across a fleet (Gillett & Miller, 1974), O(n log n)
//! - [`sweep_order`]: Single-tour ordering by polar angle

mod nearest_neighbor;
mod sweep;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use sweep::{polar_angle, sweep_order, sweep_partition, Partition, SweepFill};
