use serde::{Deserialize, Serialize};
use crate::models::domain::CompatibilityScore;

/// Score of one candidate in a batch, in request order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub score: CompatibilityScore,
}

/// Response for the batch scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBatchResponse {
    pub results: Vec<CandidateScore>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
