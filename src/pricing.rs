//! Distance-based delivery tariff.
//!
//! A flat fee covers the first kilometres; every kilometre beyond that is
//! charged at a fixed rate. Rush-hour and express surcharges multiply the
//! subtotal.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Surcharge flags for a single delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingOptions {
    /// Express delivery.
    pub express: bool,
    /// Ordered during rush hour (see [`is_rush_hour`]).
    pub rush_hour: bool,
}

/// Priced delivery with its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    /// Distance priced, in kilometres.
    pub distance_km: f64,
    /// Flat part of the fee.
    pub base: f64,
    /// Kilometres charged beyond the flat allowance.
    pub extra_km: f64,
    /// `extra_km * per_extra_km`.
    pub extra_cost: f64,
    /// Rush-hour multiplier applied (1 when not in rush hour).
    pub rush_multiplier: f64,
    /// Express multiplier applied (1 when not express).
    pub express_multiplier: f64,
    /// Final price, rounded to two decimals.
    pub price: f64,
}

/// Rates for pricing deliveries by distance.
///
/// # Examples
///
/// ```
/// use fleet_routing::pricing::{ShippingOptions, ShippingTariff};
///
/// let tariff = ShippingTariff::default();
/// let normal = ShippingOptions::default();
/// assert_eq!(tariff.price(6.93, normal).unwrap(), 2000.0);
/// assert_eq!(tariff.price(11.04, normal).unwrap(), 2208.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingTariff {
    /// Fee covering the first `included_km`.
    pub flat_rate: f64,
    /// Kilometres covered by the flat fee.
    pub included_km: f64,
    /// Charge per kilometre beyond `included_km`.
    pub per_extra_km: f64,
    /// Multiplier during rush hour.
    pub rush_multiplier: f64,
    /// Multiplier for express deliveries.
    pub express_multiplier: f64,
}

impl Default for ShippingTariff {
    fn default() -> Self {
        Self {
            flat_rate: 2000.0,
            included_km: 10.0,
            per_extra_km: 200.0,
            rush_multiplier: 1.5,
            express_multiplier: 2.0,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl ShippingTariff {
    /// Sets the flat fee and the distance it covers.
    pub fn with_flat_rate(mut self, fee: f64, included_km: f64) -> Self {
        self.flat_rate = fee;
        self.included_km = included_km;
        self
    }

    /// Sets the per-kilometre charge beyond the flat allowance.
    pub fn with_per_extra_km(mut self, rate: f64) -> Self {
        self.per_extra_km = rate;
        self
    }

    /// Sets the rush-hour and express multipliers.
    pub fn with_multipliers(mut self, rush: f64, express: f64) -> Self {
        self.rush_multiplier = rush;
        self.express_multiplier = express;
        self
    }

    /// Prices a delivery and returns the breakdown.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidDistance`] for negative or non-finite distances.
    pub fn quote(&self, distance_km: f64, options: ShippingOptions) -> Result<ShippingQuote> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(RoutingError::InvalidDistance(distance_km));
        }

        let extra_km = (distance_km - self.included_km).max(0.0);
        let extra_cost = extra_km * self.per_extra_km;
        let rush_multiplier = if options.rush_hour {
            self.rush_multiplier
        } else {
            1.0
        };
        let express_multiplier = if options.express {
            self.express_multiplier
        } else {
            1.0
        };
        let price = round2((self.flat_rate + extra_cost) * rush_multiplier * express_multiplier);

        Ok(ShippingQuote {
            distance_km,
            base: self.flat_rate,
            extra_km,
            extra_cost,
            rush_multiplier,
            express_multiplier,
            price,
        })
    }

    /// Prices a delivery.
    pub fn price(&self, distance_km: f64, options: ShippingOptions) -> Result<f64> {
        self.quote(distance_km, options).map(|q| q.price)
    }
}

/// Returns `true` for hours in the 16:00–20:00 rush window.
pub fn is_rush_hour(hour: u8) -> bool {
    (16..20).contains(&hour)
}
