use crate::models::ProfileSnapshot;
use crate::core::{distance::distance_between, NEUTRAL_SCORE};

/// Radius used when a profile doesn't state a max distance
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Calculate location score (0-1)
///
/// The most restrictive of the two radii governs. Beyond it the score is 0,
/// inside it the score falls linearly from 1 at distance 0.
/// Missing coordinates on either side score neutral.
pub fn location_score(a: &ProfileSnapshot, b: &ProfileSnapshot) -> f64 {
    location_score_at(distance_between(a.coordinate(), b.coordinate()), a, b)
}

/// Location score for an already computed distance, `None` if a coordinate is missing
pub fn location_score_at(distance_km: Option<f64>, a: &ProfileSnapshot, b: &ProfileSnapshot) -> f64 {
    let Some(distance_km) = distance_km else {
        return NEUTRAL_SCORE;
    };

    let limit_km = effective_max_distance(a).min(effective_max_distance(b));
    distance_score(distance_km, limit_km)
}

/// A profile's max acceptable distance, falling back to the default radius
#[inline]
pub fn effective_max_distance(profile: &ProfileSnapshot) -> f64 {
    profile.max_distance_km().unwrap_or(DEFAULT_MAX_DISTANCE_KM)
}

/// Score a distance against a radius: 0 outside, linear decay inside
#[inline]
pub fn distance_score(distance_km: f64, limit_km: f64) -> f64 {
    if distance_km > limit_km {
        return 0.0;
    }

    // f64::max drops NaN, so a zero radius at distance zero lands on 0
    (1.0 - distance_km / limit_km).max(0.0)
}
