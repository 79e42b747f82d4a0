//! Geographic coordinate and depot types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Construction is unchecked so records can be deserialized as-is; use
/// [`Coordinate::is_valid`] or [`validate_inputs`](crate::validate::validate_inputs)
/// before handing coordinates to the optimizer.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
///
/// let c = Coordinate::new(9.9281, -84.0907);
/// assert!(c.is_valid());
/// assert!(!Coordinate::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in [-90, 90].
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in [-180, 180].
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        crate::distance::haversine_km(self, other)
    }
}

/// The fixed start and end location of every route.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Coordinate, Depot};
///
/// let depot = Depot::new(Coordinate::new(9.9281, -84.0907)).with_name("Central");
/// assert_eq!(depot.name(), Some("Central"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    #[serde(flatten)]
    coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Depot {
    /// Creates an unnamed depot.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            name: None,
        }
    }

    /// Sets a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Depot location.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<Coordinate> for Depot {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}
