//! Browser bindings (`wasm` feature).
//!
//! Plain JS objects go in and come out; records use the same field names as
//! the dashboard (`lat`/`lon` are accepted for coordinates).

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::OptimizerConfig;
use crate::error::RoutingError;
use crate::models::{Depot, Plan, Route, Stop, Vehicle};
use crate::optimizer::RouteOptimizer;
use crate::pricing::{ShippingOptions, ShippingTariff};
use crate::report::{generate_optimization_report, OptimizationReport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse<'a> {
    routes: &'a [Route],
    unassigned: &'a [Stop],
    report: OptimizationReport,
}

fn to_js_error(e: RoutingError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn optional<T>(value: JsValue) -> Result<T, JsValue>
where
    T: Default + serde::de::DeserializeOwned,
{
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

/// Plans routes for `vehicles` around `depot`.
///
/// Returns `{ routes, unassigned, report }`. `config` may be omitted.
#[wasm_bindgen(js_name = optimizeMultipleRoutes)]
pub fn optimize_multiple_routes(
    clients: JsValue,
    vehicles: JsValue,
    depot: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let clients: Vec<Stop> = serde_wasm_bindgen::from_value(clients)?;
    let vehicles: Vec<Vehicle> = serde_wasm_bindgen::from_value(vehicles)?;
    let depot: Depot = serde_wasm_bindgen::from_value(depot)?;
    let config: OptimizerConfig = optional(config)?;

    let optimizer = RouteOptimizer::new(config).map_err(to_js_error)?;
    let plan: Plan = optimizer
        .optimize_multiple_routes(&clients, &vehicles, &depot)
        .map_err(to_js_error)?;

    let response = PlanResponse {
        routes: plan.routes(),
        unassigned: plan.unassigned(),
        report: plan.report(),
    };
    Ok(serde_wasm_bindgen::to_value(&response)?)
}

/// Summarizes routes previously returned by `optimizeMultipleRoutes`.
#[wasm_bindgen(js_name = generateOptimizationReport)]
pub fn optimization_report(routes: JsValue) -> Result<JsValue, JsValue> {
    let routes: Vec<Route> = serde_wasm_bindgen::from_value(routes)?;
    Ok(serde_wasm_bindgen::to_value(&generate_optimization_report(
        &routes,
    ))?)
}

/// Price of a delivery over `distance_km`. `options` and `tariff` may be omitted.
#[wasm_bindgen(js_name = shippingPrice)]
pub fn shipping_price(distance_km: f64, options: JsValue, tariff: JsValue) -> Result<f64, JsValue> {
    let options: ShippingOptions = optional(options)?;
    let tariff: ShippingTariff = optional(tariff)?;
    tariff.price(distance_km, options).map_err(to_js_error)
}

/// Quotes a delivery over `distance_km`. `options` and `tariff` may be omitted.
#[wasm_bindgen(js_name = shippingQuote)]
pub fn shipping_quote(
    distance_km: f64,
    options: JsValue,
    tariff: JsValue,
) -> Result<JsValue, JsValue> {
    let options: ShippingOptions = optional(options)?;
    let tariff: ShippingTariff = optional(tariff)?;
    let quote = tariff.quote(distance_km, options).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&quote)?)
}
