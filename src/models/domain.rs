use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Gender preference value meaning "no restriction"
pub const ANY_GENDER: &str = "ANY";

/// Geographic position in degrees. Either component may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Both components as `(lat, lon)`, or `None` if either is missing
    pub fn resolved(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Accepted age range. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(rename = "minAge")]
    pub min_age: Option<i32>,
    #[serde(rename = "maxAge")]
    pub max_age: Option<i32>,
}

impl AgeRange {
    pub fn new(min_age: Option<i32>, max_age: Option<i32>) -> Self {
        Self { min_age, max_age }
    }

    pub fn between(min_age: i32, max_age: i32) -> Self {
        Self::new(Some(min_age), Some(max_age))
    }

    /// True when neither bound is set
    pub fn is_unrestricted(&self) -> bool {
        self.min_age.is_none() && self.max_age.is_none()
    }
}

/// Gender a profile wants to be matched with.
///
/// Free-form; `"ANY"` (any casing) accepts every gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenderPreference(pub String);

impl GenderPreference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn any() -> Self {
        Self(ANY_GENDER.to_string())
    }

    pub fn is_any(&self) -> bool {
        self.0.to_lowercase() == ANY_GENDER.to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A profile's stated matching preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPreferences {
    #[serde(rename = "ageRange", default)]
    pub age_range: AgeRange,
    #[serde(rename = "preferredGender")]
    pub preferred_gender: Option<GenderPreference>,
    /// Falls back to the default radius when unset
    #[serde(rename = "maxDistanceKm")]
    pub max_distance_km: Option<f64>,
}

/// Everything the scorer knows about one side of a pair.
///
/// Built fresh by the caller for each scoring call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub location: Option<Coordinate>,
    pub interests: Option<HashSet<String>>,
    pub preferences: Option<MatchPreferences>,
}

impl ProfileSnapshot {
    /// Resolved coordinate, if the location and both components are present
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        self.location.as_ref().and_then(Coordinate::resolved)
    }

    /// The preference record's age range, `None` when there is no record
    pub fn age_range(&self) -> Option<&AgeRange> {
        self.preferences.as_ref().map(|p| &p.age_range)
    }

    /// The preference record's max distance, `None` when unset or no record
    pub fn max_distance_km(&self) -> Option<f64> {
        self.preferences.as_ref().and_then(|p| p.max_distance_km)
    }
}

/// Per-factor scores, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub location: f64,
    pub age: f64,
    pub interest: f64,
    pub preference: f64,
}

/// Result of scoring one pair of profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: f64,
    pub factors: FactorScores,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}

impl CompatibilityScore {
    /// Result for a pair where one side is missing entirely
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub location: f64,
    pub age: f64,
    pub interests: f64,
    pub preference: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.location + self.age + self.interests + self.preference
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.30,
            age: 0.20,
            interests: 0.30,
            preference: 0.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((ScoringWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_resolved() {
        assert_eq!(Coordinate::new(1.0, 2.0).resolved(), Some((1.0, 2.0)));

        let partial = Coordinate {
            latitude: Some(1.0),
            longitude: None,
        };
        assert_eq!(partial.resolved(), None);
    }

    #[test]
    fn test_gender_preference_any_is_case_insensitive() {
        assert!(GenderPreference::new("any").is_any());
        assert!(GenderPreference::new("Any").is_any());
        assert!(!GenderPreference::new("female").is_any());
        assert!(!GenderPreference::new("ÀNY").is_any());
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let json = r#"{
            "userId": "u1",
            "age": 29,
            "location": {"latitude": 52.52},
            "interests": ["hiking"],
            "preferences": {"preferredGender": "ANY"}
        }"#;

        let profile: ProfileSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(profile.age, Some(29));
        assert_eq!(profile.gender, None);
        assert_eq!(profile.coordinate(), None);
        let prefs = profile.preferences.as_ref().unwrap();
        assert!(prefs.age_range.is_unrestricted());
        assert_eq!(prefs.max_distance_km, None);
    }

    #[test]
    fn test_absent_preference_record_has_no_age_range() {
        let profile = ProfileSnapshot::default();
        assert!(profile.age_range().is_none());
        assert!(profile.max_distance_km().is_none());
    }
}
