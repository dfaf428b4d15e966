// Core algorithm exports
pub mod age;
pub mod distance;
pub mod interests;
pub mod location;
pub mod preference;
pub mod scoring;

pub use age::{age_score, is_age_in_range};
pub use distance::{distance_between, haversine_distance};
pub use interests::{interest_score, jaccard_similarity, shared_interests};
pub use location::{location_score, DEFAULT_MAX_DISTANCE_KM};
pub use preference::{is_gender_accepted, preference_score};
pub use scoring::{calculate_factor_scores, score_pair, CompatibilityScorer, ScoringError};

/// Factor score used when there isn't enough data to compare
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Combine a two-way check: 1.0 both, `one_way` for exactly one, 0.0 neither
#[inline]
pub(crate) fn mutual_score(forward: bool, backward: bool, one_way: f64) -> f64 {
    match (forward, backward) {
        (true, true) => 1.0,
        (false, false) => 0.0,
        _ => one_way,
    }
}
