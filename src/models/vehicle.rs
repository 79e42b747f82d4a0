//! Vehicle type with a load capacity.

use serde::{Deserialize, Serialize};

/// A delivery vehicle.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Vehicle;
///
/// let v = Vehicle::new(1, 15.0).with_name("Vehiculo 1");
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.capacity(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: u64,
    #[serde(default)]
    name: String,
    capacity: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: u64, capacity: f64) -> Self {
        Self {
            id,
            name: String::new(),
            capacity,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load in demand units.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}
