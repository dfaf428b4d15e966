// Unit tests for Lume Compat

use lume_compat::core::{
    age::age_score,
    distance::haversine_distance,
    interests::interest_score,
    location::{location_score, DEFAULT_MAX_DISTANCE_KM},
    preference::preference_score,
    is_age_in_range, is_gender_accepted, NEUTRAL_SCORE,
};
use lume_compat::models::{AgeRange, Coordinate, GenderPreference, MatchPreferences, ProfileSnapshot};
use std::collections::HashSet;

fn located(lat: f64, lon: f64, max_distance_km: Option<f64>) -> ProfileSnapshot {
    ProfileSnapshot {
        location: Some(Coordinate::new(lat, lon)),
        preferences: Some(MatchPreferences {
            max_distance_km,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn interests(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_haversine_distance_zero() {
    let points = [(40.7128, -74.0060), (0.0, 0.0), (-89.9, 179.9), (51.5074, -0.1278)];
    for (lat, lon) in points {
        assert_eq!(haversine_distance(lat, lon, lat, lon), 0.0);
    }
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan_lat = 40.7580;
    let manhattan_lon = -73.9855;
    let brooklyn_lat = 40.6782;
    let brooklyn_lon = -73.9442;

    let distance = haversine_distance(manhattan_lat, manhattan_lon, brooklyn_lat, brooklyn_lon);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_symmetry() {
    let pairs = [
        ((40.7128, -74.0060), (34.0522, -118.2437)),
        ((-33.8688, 151.2093), (51.5074, -0.1278)),
        ((10.0, 170.0), (-10.0, -170.0)),
    ];
    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let forward = haversine_distance(lat1, lon1, lat2, lon2);
        let backward = haversine_distance(lat2, lon2, lat1, lon1);
        assert!((forward - backward).abs() < 1e-9);
    }
}

#[test]
fn test_out_of_range_coordinates_do_not_panic() {
    let distance = haversine_distance(200.0, 400.0, -200.0, -400.0);
    assert!(distance.is_finite());
}

#[test]
fn test_location_ten_km_apart() {
    // One degree of latitude is R * pi / 180 km; move 10 km north
    let ten_km_in_degrees = 10.0 / (6371.0 * std::f64::consts::PI / 180.0);
    let a = located(40.0, -74.0, Some(50.0));
    let b = located(40.0 + ten_km_in_degrees, -74.0, Some(50.0));

    let score = location_score(&a, &b);
    assert!((score - 0.8).abs() < 1e-9, "expected 0.8, got {}", score);
}

#[test]
fn test_location_score_bounded_and_zero_past_limit() {
    let origin = located(40.0, -74.0, None);
    for step in 0..200 {
        let other = located(40.0 + step as f64 * 0.01, -74.0, None);
        let score = location_score(&origin, &other);
        assert!((0.0..=1.0).contains(&score));

        let distance = haversine_distance(40.0, -74.0, 40.0 + step as f64 * 0.01, -74.0);
        if distance > DEFAULT_MAX_DISTANCE_KM {
            assert_eq!(score, 0.0);
        }
    }
}

#[test]
fn test_location_missing_coordinate_neutral() {
    let a = located(40.0, -74.0, Some(50.0));
    let b = ProfileSnapshot::default();
    assert_eq!(location_score(&a, &b), NEUTRAL_SCORE);
}

#[test]
fn test_age_one_side_without_preferences() {
    let a = ProfileSnapshot {
        age: Some(30),
        ..Default::default()
    };
    let b = ProfileSnapshot {
        age: Some(28),
        preferences: Some(MatchPreferences {
            age_range: AgeRange::between(25, 35),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(age_score(&a, &b), 0.5);
    assert_eq!(age_score(&b, &a), 0.5);
}

#[test]
fn test_age_empty_range_accepts() {
    let with_empty_range = |age| ProfileSnapshot {
        age: Some(age),
        preferences: Some(MatchPreferences::default()),
        ..Default::default()
    };

    assert_eq!(age_score(&with_empty_range(19), &with_empty_range(70)), 1.0);
    assert!(is_age_in_range(Some(-5), Some(&AgeRange::default())));
}

#[test]
fn test_interest_scenarios() {
    let a = interests(&["hiking", "music"]);
    let b = interests(&["music", "cooking"]);
    let c = interests(&["surfing"]);

    assert!((interest_score(Some(&a), Some(&b)) - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(interest_score(Some(&a), Some(&b)), interest_score(Some(&b), Some(&a)));
    assert_eq!(interest_score(Some(&b), Some(&b)), 1.0);
    assert_eq!(interest_score(Some(&a), Some(&c)), 0.0);
    assert_eq!(interest_score(None, None), NEUTRAL_SCORE);
}

#[test]
fn test_preference_both_any() {
    let with_pref = |gender: &str, pref: &str| ProfileSnapshot {
        gender: Some(gender.to_string()),
        preferences: Some(MatchPreferences {
            preferred_gender: Some(GenderPreference::new(pref)),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(preference_score(&with_pref("male", "ANY"), &with_pref("male", "any")), 1.0);
    assert_eq!(preference_score(&with_pref("female", "Any"), &with_pref("male", "ANY")), 1.0);
}

#[test]
fn test_gender_accepted_case_insensitive() {
    let pref = GenderPreference::new("Female");
    assert!(is_gender_accepted(Some("female"), Some(&pref)));
    assert!(is_gender_accepted(Some("FEMALE"), Some(&pref)));
    assert!(!is_gender_accepted(Some("male"), Some(&pref)));
    assert!(is_gender_accepted(Some("male"), None));
}
