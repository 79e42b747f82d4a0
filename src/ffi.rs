//! C ABI bindings (`ffi` feature).
//!
//! Every entry point takes a NUL-terminated JSON request and returns a
//! NUL-terminated JSON envelope, `{"ok": true, "result": ...}` or
//! `{"ok": false, "error": "..."}`. Returned strings must be released with
//! [`fleet_routing_free_string`]. Panics never cross the boundary.

use std::ffi::{CStr, CString};
use std::panic::catch_unwind;

use libc::c_char;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::OptimizerConfig;
use crate::models::{Depot, Route, Stop, Vehicle};
use crate::optimizer::RouteOptimizer;
use crate::pricing::{ShippingOptions, ShippingTariff};
use crate::report::{generate_optimization_report, OptimizationReport};

#[derive(Deserialize)]
struct OptimizeRequest {
    clients: Vec<Stop>,
    vehicles: Vec<Vehicle>,
    depot: Depot,
    #[serde(default)]
    config: OptimizerConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OptimizeResponse {
    routes: Vec<Route>,
    unassigned: Vec<Stop>,
    report: OptimizationReport,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRequest {
    distance_km: f64,
    #[serde(default)]
    options: ShippingOptions,
    #[serde(default)]
    tariff: ShippingTariff,
}

fn optimize_json(request: &str) -> Result<Value, String> {
    let request: OptimizeRequest = serde_json::from_str(request).map_err(|e| e.to_string())?;
    let optimizer = RouteOptimizer::new(request.config).map_err(|e| e.to_string())?;
    let plan = optimizer
        .optimize_multiple_routes(&request.clients, &request.vehicles, &request.depot)
        .map_err(|e| e.to_string())?;
    let report = plan.report();
    let (routes, unassigned) = plan.into_parts();
    serde_json::to_value(OptimizeResponse {
        routes,
        unassigned,
        report,
    })
    .map_err(|e| e.to_string())
}

fn report_json(request: &str) -> Result<Value, String> {
    let routes: Vec<Route> = serde_json::from_str(request).map_err(|e| e.to_string())?;
    serde_json::to_value(generate_optimization_report(&routes)).map_err(|e| e.to_string())
}

fn quote_json(request: &str) -> Result<Value, String> {
    let request: QuoteRequest = serde_json::from_str(request).map_err(|e| e.to_string())?;
    let quote = request
        .tariff
        .quote(request.distance_km, request.options)
        .map_err(|e| e.to_string())?;
    serde_json::to_value(quote).map_err(|e| e.to_string())
}

fn envelope(result: Result<Value, String>) -> String {
    match result {
        Ok(result) => json!({ "ok": true, "result": result }).to_string(),
        Err(error) => json!({ "ok": false, "error": error }).to_string(),
    }
}

/// Reads the request, runs `handler` and hands ownership of the reply to C.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string.
unsafe fn call(request: *const c_char, handler: fn(&str) -> Result<Value, String>) -> *mut c_char {
    let reply = if request.is_null() {
        envelope(Err("null request".to_string()))
    } else {
        let text = CStr::from_ptr(request).to_string_lossy().into_owned();
        catch_unwind(|| envelope(handler(&text)))
            .unwrap_or_else(|_| envelope(Err("internal panic".to_string())))
    };
    CString::new(reply)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Plans routes. Request: `{clients, vehicles, depot, config?}`.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn fleet_routing_optimize(request: *const c_char) -> *mut c_char {
    call(request, optimize_json)
}

/// Aggregates a JSON array of routes into a report.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn fleet_routing_report(request: *const c_char) -> *mut c_char {
    call(request, report_json)
}

/// Prices a delivery. Request: `{distanceKm, options?, tariff?}`.
///
/// # Safety
///
/// `request` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn fleet_routing_quote(request: *const c_char) -> *mut c_char {
    call(request, quote_json)
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `reply` must be null or a pointer previously returned by one of the
/// `fleet_routing_*` functions, not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fleet_routing_free_string(reply: *mut c_char) {
    if !reply.is_null() {
        drop(CString::from_raw(reply));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(
        f: unsafe extern "C" fn(*const c_char) -> *mut c_char,
        request: &str,
    ) -> Value {
        let request = CString::new(request).unwrap();
        unsafe {
            let reply = f(request.as_ptr());
            let text = CStr::from_ptr(reply).to_str().unwrap().to_owned();
            fleet_routing_free_string(reply);
            serde_json::from_str(&text).unwrap()
        }
    }

    #[test]
    fn test_optimize_over_c_abi() {
        let reply = roundtrip(
            fleet_routing_optimize,
            r#"{
                "depot": {"lat": 9.9281, "lon": -84.0907, "name": "Central"},
                "clients": [
                    {"id": 1, "lat": 9.93, "lon": -84.085, "weight": 1},
                    {"id": 2, "lat": 9.925, "lon": -84.09, "weight": 1}
                ],
                "vehicles": [{"id": 1, "capacity": 1}]
            }"#,
        );
        assert_eq!(reply["ok"], true);
        assert_eq!(reply["result"]["routes"].as_array().unwrap().len(), 1);
        assert_eq!(reply["result"]["unassigned"].as_array().unwrap().len(), 1);
        assert_eq!(reply["result"]["report"]["totalDeliveries"], 1);
    }

    #[test]
    fn test_errors_come_back_as_envelope() {
        let reply = roundtrip(
            fleet_routing_optimize,
            r#"{"depot": {"lat": 0, "lon": 0}, "clients": [], "vehicles": [{"id": 1, "capacity": -1}]}"#,
        );
        assert_eq!(reply["ok"], false);
        assert!(reply["error"].as_str().unwrap().contains("vehicle 1"));

        let reply = roundtrip(fleet_routing_report, "not json");
        assert_eq!(reply["ok"], false);
    }

    #[test]
    fn test_quote_over_c_abi() {
        let reply = roundtrip(fleet_routing_quote, r#"{"distanceKm": 11.04}"#);
        assert_eq!(reply["result"]["price"], 2208.0);
    }

    #[test]
    fn test_null_request() {
        let reply = unsafe { fleet_routing_optimize(std::ptr::null()) };
        let text = unsafe { CStr::from_ptr(reply) }.to_str().unwrap().to_owned();
        unsafe { fleet_routing_free_string(reply) };
        assert!(text.contains("null request"));
    }
}
