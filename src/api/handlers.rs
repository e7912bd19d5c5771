use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::request_id::RequestId;
use crate::models::Program;
use crate::services::{top_n_from_signed, Recommendation, RecommendationStatus, Recommender};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    /// Falls back to the configured default when absent; zero or negative
    /// yields no programs
    pub top_n: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ScoredProgramResponse {
    pub program: Program,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: RecommendationStatus,
    pub message: String,
    pub programs: Vec<ScoredProgramResponse>,
}

impl From<&Recommendation<'_>> for RecommendationResponse {
    fn from(recommendation: &Recommendation<'_>) -> Self {
        Self {
            status: recommendation.status,
            message: recommendation.status.message().to_string(),
            programs: recommendation
                .programs
                .iter()
                .map(|scored| ScoredProgramResponse {
                    program: scored.program.clone(),
                    score: scored.score,
                })
                .collect(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get all programs in catalog order
pub async fn get_programs(State(state): State<AppState>) -> Json<Vec<Program>> {
    let inner = state.inner.read().await;
    Json(inner.catalog.programs().to_vec())
}

/// Append a program to the catalog
pub async fn add_program(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(program): Json<Program>,
) -> AppResult<(StatusCode, Json<Program>)> {
    program.validate()?;

    let mut inner = state.inner.write().await;
    inner.catalog.add_program(program.clone());

    tracing::info!(
        request_id = %request_id,
        name = %program.name,
        catalog_size = inner.catalog.len(),
        "Program added to catalog"
    );

    Ok((StatusCode::CREATED, Json(program)))
}

/// Rank catalog programs against the requested categories
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let top_n = request
        .top_n
        .map(top_n_from_signed)
        .unwrap_or(state.default_top_n);

    tracing::info!(
        request_id = %request_id,
        categories = ?request.preferred_categories,
        top_n,
        "Processing recommendation request"
    );

    let inner = state.inner.read().await;
    let recommendation = Recommender::new(&inner.catalog)
        .with_vectorizer(state.vectorizer())
        .generate_recommendations(request.preferred_categories.as_slice(), top_n);

    tracing::info!(
        request_id = %request_id,
        status = recommendation.status.code(),
        returned = recommendation.len(),
        "Recommendation completed"
    );

    Json(RecommendationResponse::from(&recommendation))
}
