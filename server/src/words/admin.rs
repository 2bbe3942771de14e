use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::AdminAuth;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::VoteStats;

use super::crud::{WordRequest, WordsResponse};

/// GET /api/admin/stats — Vote totals and the full list sorted by votes
/// descending.
pub async fn get_stats(State(state): State<AppState>, _auth: AdminAuth) -> Json<VoteStats> {
    Json(state.store.stats())
}

/// POST /api/admin/words — Add a word directly. Unlike the public propose,
/// a duplicate is rejected here instead of being counted as a vote.
pub async fn add_word(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Json(req): Json<WordRequest>,
) -> Result<(StatusCode, Json<WordsResponse>), ApiError> {
    let word = req
        .word
        .ok_or_else(|| ApiError::Validation("Word is required".to_string()))?;

    let words = state.store.add_word(&word)?;

    Ok((
        StatusCode::CREATED,
        Json(WordsResponse {
            success: true,
            words,
        }),
    ))
}

/// DELETE /api/admin/words/{word} — Remove a word from the active list.
pub async fn delete_word(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(word): Path<String>,
) -> Result<Json<WordsResponse>, ApiError> {
    let words = state
        .store
        .delete_word(&word)
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    Ok(Json(WordsResponse {
        success: true,
        words,
    }))
}
