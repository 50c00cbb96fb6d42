//! Axum route handler for the recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::project::Project;
use crate::recommend::matcher::recommend;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub intent: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub project: Project,
}

/// POST /api/recommend
///
/// A missing or unparseable body is treated like an empty intent.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Option<Json<RecommendRequest>>,
) -> Result<Json<RecommendResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let intent = request.intent.unwrap_or_default();

    let best = recommend(&state.catalog, &intent)?;
    debug!(
        "Recommended project {} (score {})",
        best.project.id, best.score
    );

    Ok(Json(RecommendResponse {
        project: best.project.clone(),
    }))
}
