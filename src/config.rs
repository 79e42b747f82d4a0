//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::SweepFill;
use crate::error::{Result, RoutingError};

/// Tuning knobs for [`RouteOptimizer`](crate::optimizer::RouteOptimizer).
///
/// Deserializes from partial records: missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_average_speed_kmh(40.0)
///     .with_max_two_opt_passes(50);
/// assert_eq!(config.average_speed_kmh, 40.0);
/// assert_eq!(config.service_minutes_per_stop, 5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Average driving speed used for time estimates.
    pub average_speed_kmh: f64,
    /// Fixed handling time added per delivered stop.
    pub service_minutes_per_stop: f64,
    /// Upper bound on 2-opt passes per route; `None` runs to a local optimum.
    pub max_two_opt_passes: Option<usize>,
    /// How the sweep decides when a vehicle is full.
    pub sweep_fill: SweepFill,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 30.0,
            service_minutes_per_stop: 5.0,
            max_two_opt_passes: None,
            sweep_fill: SweepFill::Balanced,
        }
    }
}

impl OptimizerConfig {
    /// Sets the average driving speed.
    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    /// Sets the per-stop service time.
    pub fn with_service_minutes_per_stop(mut self, minutes: f64) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    /// Bounds the number of 2-opt passes.
    pub fn with_max_two_opt_passes(mut self, passes: usize) -> Self {
        self.max_two_opt_passes = Some(passes);
        self
    }

    /// Selects the sweep fill rule.
    pub fn with_sweep_fill(mut self, fill: SweepFill) -> Self {
        self.sweep_fill = fill;
        self
    }

    /// Checks that speed is positive and service time non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "average_speed_kmh must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        if !self.service_minutes_per_stop.is_finite() || self.service_minutes_per_stop < 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "service_minutes_per_stop must be non-negative, got {}",
                self.service_minutes_per_stop
            )));
        }
        Ok(())
    }
}
