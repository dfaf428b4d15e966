use rayon::prelude::*;
use thiserror::Error;
use crate::models::{CompatibilityScore, FactorScores, ProfileSnapshot, ScoringWeights};
use crate::core::{
    age::age_score,
    distance::distance_between,
    interests::{interest_score, shared_interests},
    location::location_score_at,
    preference::preference_score,
};

/// Tolerance allowed when checking that weights sum to 1
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors raised when building a scorer
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Invalid weight for {factor}: {value} (must be finite and non-negative)")]
    InvalidWeight { factor: &'static str, value: f64 },

    #[error("Weights must sum to 1.0, got {0}")]
    WeightSum(f64),
}

/// Calculate the four factor scores for a pair of profiles
pub fn calculate_factor_scores(a: &ProfileSnapshot, b: &ProfileSnapshot) -> FactorScores {
    factor_scores_at(distance_between(a.coordinate(), b.coordinate()), a, b)
}

fn factor_scores_at(distance_km: Option<f64>, a: &ProfileSnapshot, b: &ProfileSnapshot) -> FactorScores {
    FactorScores {
        location: location_score_at(distance_km, a, b),
        age: age_score(a, b),
        interest: interest_score(a.interests.as_ref(), b.interests.as_ref()),
        preference: preference_score(a, b),
    }
}

/// Score a pair of profiles with the default weights
///
/// Scoring formula:
/// overall = (
///     location * 0.30 +
///     age * 0.20 +
///     interest * 0.30 +
///     preference * 0.20
/// )
///
/// A missing profile on either side short-circuits to a zero score.
pub fn score_pair(a: Option<&ProfileSnapshot>, b: Option<&ProfileSnapshot>) -> CompatibilityScore {
    score_pair_with(a, b, &ScoringWeights::default())
}

fn score_pair_with(
    a: Option<&ProfileSnapshot>,
    b: Option<&ProfileSnapshot>,
    weights: &ScoringWeights,
) -> CompatibilityScore {
    let (Some(a), Some(b)) = (a, b) else {
        return CompatibilityScore::zero();
    };

    let distance_km = distance_between(a.coordinate(), b.coordinate());
    let factors = factor_scores_at(distance_km, a, b);
    let overall = factors.location * weights.location
        + factors.age * weights.age
        + factors.interest * weights.interests
        + factors.preference * weights.preference;

    CompatibilityScore {
        overall: overall.clamp(0.0, 1.0),
        factors,
        distance_km,
        shared_interests: shared_interests(a.interests.as_ref(), b.interests.as_ref()),
    }
}

/// Pairwise compatibility scorer with validated weights
///
/// Stateless apart from its weights; share it freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    /// Create a scorer, rejecting weights that don't form a convex combination
    pub fn new(weights: ScoringWeights) -> Result<Self, ScoringError> {
        let factors = [
            ("location", weights.location),
            ("age", weights.age),
            ("interests", weights.interests),
            ("preference", weights.preference),
        ];
        for (factor, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight { factor, value });
            }
        }

        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::WeightSum(sum));
        }

        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a pair of profiles
    pub fn score_pair(
        &self,
        a: Option<&ProfileSnapshot>,
        b: Option<&ProfileSnapshot>,
    ) -> CompatibilityScore {
        score_pair_with(a, b, &self.weights)
    }

    /// Score one subject against each candidate in parallel
    ///
    /// Results line up with `candidates`; nothing is sorted or dropped.
    pub fn score_batch(
        &self,
        subject: &ProfileSnapshot,
        candidates: &[ProfileSnapshot],
    ) -> Vec<CompatibilityScore> {
        candidates
            .par_iter()
            .map(|candidate| self.score_pair(Some(subject), Some(candidate)))
            .collect()
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
