/// Earth's radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Straight-line (Haversine) distance between two points in meters
///
/// Used as a display fallback while the road-route distance is still being
/// resolved, and in tests as a sanity bound on route lengths.
#[inline]
pub fn straight_line_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
