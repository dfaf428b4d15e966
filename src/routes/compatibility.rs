use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    CandidateScore, ErrorResponse, HealthResponse, ScoreBatchRequest, ScoreBatchResponse,
    ScorePairRequest,
};
use crate::core::CompatibilityScorer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: CompatibilityScorer,
    pub max_batch_candidates: usize,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/batch", web::post().to(score_batch));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single pair of profiles
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "age": 30, "gender": "female", ... },
///   "profileB": { "age": 32, "gender": "male", ... }
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let score = state
        .scorer
        .score_pair(req.profile_a.as_ref(), req.profile_b.as_ref());

    tracing::debug!(
        "Scored pair {:?} / {:?}: overall={:.3}",
        req.profile_a.as_ref().and_then(|p| p.user_id.as_deref()),
        req.profile_b.as_ref().and_then(|p| p.user_id.as_deref()),
        score.overall
    );

    HttpResponse::Ok().json(score)
}

/// Score one subject against a list of candidates
///
/// POST /api/v1/compatibility/batch
///
/// Results come back in request order; ranking is left to the caller.
async fn score_batch(
    state: web::Data<AppState>,
    req: web::Json<ScoreBatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score_batch request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let total_candidates = req.candidates.len();
    if total_candidates > state.max_batch_candidates {
        tracing::info!(
            "Rejected batch of {} candidates (max {})",
            total_candidates,
            state.max_batch_candidates
        );
        return bad_request(
            "Too many candidates",
            format!("At most {} candidates per batch", state.max_batch_candidates),
        );
    }

    tracing::info!(
        "Scoring {} candidates for subject {:?}",
        total_candidates,
        req.subject.user_id
    );

    let scorer = state.scorer;
    let ScoreBatchRequest { subject, candidates } = req.into_inner();

    // Keep the rayon work off the async workers
    let scored = tokio::task::spawn_blocking(move || {
        let scores = scorer.score_batch(&subject, &candidates);
        candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, score)| CandidateScore {
                user_id: candidate.user_id,
                score,
            })
            .collect::<Vec<_>>()
    })
    .await;

    match scored {
        Ok(results) => HttpResponse::Ok().json(ScoreBatchResponse {
            results,
            total_candidates,
        }),
        Err(e) => {
            tracing::error!("Batch scoring task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Batch scoring failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}
