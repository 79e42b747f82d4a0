//! Great-circle distance on a spherical earth.

use crate::models::Coordinate;

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// Symmetric and zero for identical points. Coordinates must already be
/// valid; out-of-range input yields a meaningless (but finite) number.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::distance::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// // One degree of longitude on the equator.
/// assert!((haversine_km(&a, &b) - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let s1 = (dlat / 2.0).sin();
    let s2 = (dlon / 2.0).sin();
    let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
    // Rounding can push h a hair past 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Length of an explicit path, summing each consecutive leg.
///
/// Paths with fewer than two points have length zero.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Coordinate;
/// use fleet_routing::distance::{haversine_km, path_distance_km};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// let d = path_distance_km(&[a, b, a]);
/// assert!((d - 2.0 * haversine_km(&a, &b)).abs() < 1e-9);
/// ```
pub fn path_distance_km(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|w| haversine_km(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    #[test]
    fn test_zero_for_same_point() {
        let c = Coordinate::new(9.9281, -84.0907);
        assert_eq!(haversine_km(&c, &c), 0.0);
    }

    #[test]
    fn test_known_city_pair() {
        // San Jose to Cartago, roughly 20 km apart.
        let sj = Coordinate::new(9.9281, -84.0907);
        let cartago = Coordinate::new(9.8644, -83.9194);
        let d = haversine_km(&sj, &cartago);
        assert!(d > 19.0 && d < 21.0, "got {d}");
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((haversine_km(&a, &b) - half).abs() < 1e-6);
    }

    #[test]
    fn test_path_distance_short_paths() {
        assert_eq!(path_distance_km(&[]), 0.0);
        assert_eq!(path_distance_km(&[Coordinate::new(1.0, 1.0)]), 0.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in coordinate(), b in coordinate()) {
            let ab = haversine_km(&a, &b);
            let ba = haversine_km(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-9);
            prop_assert!(ab >= 0.0);
        }

        #[test]
        fn prop_self_distance_zero(a in coordinate()) {
            prop_assert!(haversine_km(&a, &a).abs() < 1e-9);
        }

        #[test]
        fn prop_triangle_inequality(a in coordinate(), b in coordinate(), c in coordinate()) {
            let direct = haversine_km(&a, &c);
            let detour = haversine_km(&a, &b) + haversine_km(&b, &c);
            prop_assert!(direct <= detour + 1e-3);
        }
    }
}
