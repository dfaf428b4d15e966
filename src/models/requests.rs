use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::ProfileSnapshot;

/// Request to score a single pair of profiles
///
/// Either profile may be omitted; the pair then scores 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    #[serde(alias = "profile_a", rename = "profileA", default)]
    pub profile_a: Option<ProfileSnapshot>,
    #[serde(alias = "profile_b", rename = "profileB", default)]
    pub profile_b: Option<ProfileSnapshot>,
}

/// Request to score one subject against many candidates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreBatchRequest {
    pub subject: ProfileSnapshot,
    #[validate(length(min = 1))]
    pub candidates: Vec<ProfileSnapshot>,
}
