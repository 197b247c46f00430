//! Lookup Routes - Definition suggestions
//!
//! Always answers 200 for a non-blank word; an empty candidate list tells
//! the client to ask for the meaning manually.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::LookupResponse;
use crate::AppState;

/// Suggest definitions for a word
#[utoipa::path(
    get,
    path = "/lexicard/lookup/{word}",
    params(("word" = String, Path, description = "Word to look up")),
    responses(
        (status = 200, description = "Candidates from the first dictionary with results", body = LookupResponse),
        (status = 400, description = "Blank word")
    ),
    tag = "Lookup"
)]
pub async fn lookup_definitions(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<LookupResponse>, (StatusCode, String)> {
    let word = word.trim();
    if word.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "word must not be empty".to_string()));
    }

    let report = state.lookup.lookup_report(word).await;

    tracing::info!(
        word = %report.word,
        source = report.source.as_deref().unwrap_or("none"),
        candidates = report.candidates.len(),
        "Definition lookup completed"
    );

    Ok(Json(report.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/lexicard/lookup/:word", get(lookup_definitions))
}
