// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, CompatibilityScore, Coordinate, FactorScores, GenderPreference, MatchPreferences,
    ProfileSnapshot, ScoringWeights, ANY_GENDER,
};
pub use requests::{ScoreBatchRequest, ScorePairRequest};
pub use responses::{CandidateScore, ErrorResponse, HealthResponse, ScoreBatchResponse};
