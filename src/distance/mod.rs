//! Distance model.
//!
//! Haversine great-circle distances and a dense matrix cache over them.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, path_distance_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
