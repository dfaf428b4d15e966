//! Lume Compat - Pairwise compatibility scoring for Lume dating app
//!
//! This library scores how well two user profiles fit each other. Four
//! independent factors (location, age, interests, gender preference) are
//! each scored in [0, 1] and combined with fixed weights into one overall
//! score. Missing data resolves to a neutral 0.5 per factor.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    haversine_distance, is_age_in_range, is_gender_accepted, score_pair, CompatibilityScorer,
    ScoringError,
};
pub use crate::models::{
    AgeRange, CompatibilityScore, Coordinate, FactorScores, GenderPreference, MatchPreferences,
    ProfileSnapshot, ScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(haversine_distance(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
        assert_eq!(score_pair(None, None).overall, 0.0);
    }
}
