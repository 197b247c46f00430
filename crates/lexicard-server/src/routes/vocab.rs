//! Vocab Routes - Flashcard entries
//!
//! HTTP handlers that delegate to VocabService for business logic.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use lexicard::SubjectFilter;

use super::domain_error;
use crate::models::{CreateVocabRequest, VocabEntryResponse, VocabListResponse, VocabQuery};
use crate::AppState;

/// List vocab entries, newest first
#[utoipa::path(
    get,
    path = "/lexicard/vocab",
    params(VocabQuery),
    responses(
        (status = 200, description = "Entries matching the subject filter", body = VocabListResponse),
        (status = 400, description = "Invalid subject"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Vocab"
)]
pub async fn list_vocab(
    State(state): State<AppState>,
    Query(query): Query<VocabQuery>,
) -> Result<Json<VocabListResponse>, (StatusCode, String)> {
    let filter: SubjectFilter = query
        .subject
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(domain_error)?;

    let snapshot = state
        .vocab_service
        .list(filter)
        .await
        .map_err(domain_error)?;

    Ok(Json(snapshot.into()))
}

/// Add a vocab entry
#[utoipa::path(
    post,
    path = "/lexicard/vocab",
    request_body = CreateVocabRequest,
    responses(
        (status = 201, description = "Entry created", body = VocabEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Vocab"
)]
pub async fn create_vocab(
    State(state): State<AppState>,
    Json(payload): Json<CreateVocabRequest>,
) -> Result<(StatusCode, Json<VocabEntryResponse>), (StatusCode, String)> {
    let entry = state
        .vocab_service
        .add(payload.into())
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/lexicard/vocab", get(list_vocab).post(create_vocab))
}
