//! Delivery stop type.

use serde::{Deserialize, Serialize};

use super::Coordinate;

fn default_weight() -> f64 {
    1.0
}

/// A client delivery location with a demand weight.
///
/// Stops are supplied by the caller and are never modified by the optimizer.
/// Records without a `weight` field deserialize with weight 1.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Stop};
///
/// let s = Stop::new(1, Coordinate::new(9.93, -84.085), 5.0).with_name("Cliente A");
/// assert_eq!(s.id(), 1);
/// assert_eq!(s.weight(), 5.0);
/// assert_eq!(s.name(), "Cliente A");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: u64,
    #[serde(flatten)]
    coordinate: Coordinate,
    #[serde(default)]
    name: String,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Stop {
    /// Creates an unnamed stop.
    pub fn new(id: u64, coordinate: Coordinate, weight: f64) -> Self {
        Self {
            id,
            coordinate,
            name: String::new(),
            weight,
            address: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a free-text street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Stop identifier, unique within a request.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Delivery location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Demand units consumed from the vehicle's capacity.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Street address, if provided.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}
