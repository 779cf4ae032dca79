//! Observer geometry: great-circle distance, bearing, and lateral angle.

/// Earth radius in feet (6371 km) for Haversine calculations.
pub const EARTH_RADIUS_FT: f64 = 20_902_230.97;

/// Great-circle distance between two points in feet (Haversine formula).
pub fn haversine_distance_ft(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_FT * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing from point 1 to point 2, degrees 0-360.
///
/// A zero-length vector (identical points) yields 0.0 rather than an
/// undefined result.
pub fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    if y.abs() < f64::EPSILON && x.abs() < f64::EPSILON {
        return 0.0;
    }
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Acoustic path length: straight line from aircraft to ground observer.
pub fn slant_distance_ft(altitude_ft: f64, horizontal_ft: f64) -> f64 {
    altitude_ft.hypot(horizontal_ft)
}

/// Lateral angle from the aircraft's track to a ground observer, 0-90.
///
/// Bearing aircraft-to-observer, absolute difference from heading wrapped to
/// <= 180, clamped to the attenuation table domain.
pub fn observer_angle(
    observer_lat: f64,
    observer_lon: f64,
    aircraft_lat: f64,
    aircraft_lon: f64,
    heading_deg: f64,
) -> f64 {
    let bearing_to_observer = bearing_deg(aircraft_lat, aircraft_lon, observer_lat, observer_lon);

    let mut angle_diff = (bearing_to_observer - heading_deg).abs() % 360.0;
    if angle_diff > 180.0 {
        angle_diff = 360.0 - angle_diff;
    }

    angle_diff.min(90.0)
}
