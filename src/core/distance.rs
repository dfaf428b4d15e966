/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle (Haversine) distance between two points in kilometers
///
/// Inputs are not range-checked; out-of-range degrees go straight into the
/// trigonometry and yield a defined but meaningless distance.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two optional positions, `None` if either is missing
#[inline]
pub fn distance_between(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<f64> {
    let ((lat1, lon1), (lat2, lon2)) = (a?, b?);
    Some(haversine_distance(lat1, lon1, lat2, lon2))
}
