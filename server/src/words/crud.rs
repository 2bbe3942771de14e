use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::Word;

// --- Request/response types ---

#[derive(Debug, Deserialize)]
pub struct WordRequest {
    pub word: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub success: bool,
    pub words: Vec<Word>,
}

impl WordsResponse {
    fn ok(words: Vec<Word>) -> Json<Self> {
        Json(Self {
            success: true,
            words,
        })
    }
}

// --- Handlers ---

/// GET /api/words — Full snapshot of the active list.
pub async fn list_words(State(state): State<AppState>) -> Json<Vec<Word>> {
    Json(state.store.get_words())
}

/// POST /api/words/vote — Vote for an existing word.
pub async fn vote_word(
    State(state): State<AppState>,
    Json(req): Json<WordRequest>,
) -> Result<Json<WordsResponse>, ApiError> {
    let word = req
        .word
        .ok_or_else(|| ApiError::Validation("Word is required".to_string()))?;

    let words = state
        .store
        .vote(&word)
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    Ok(WordsResponse::ok(words))
}

/// POST /api/words/propose — Propose a word: new words join at one vote,
/// an already-proposed word gets a vote instead.
pub async fn propose_word(
    State(state): State<AppState>,
    Json(req): Json<WordRequest>,
) -> Result<Json<WordsResponse>, ApiError> {
    let word = req
        .word
        .ok_or_else(|| ApiError::Validation("Word is required".to_string()))?;

    let words = state
        .store
        .propose(&word)
        .ok_or_else(|| ApiError::Validation("Invalid word".to_string()))?;

    Ok(WordsResponse::ok(words))
}

/// POST /api/words/reset — Set every word of the active list back to one
/// vote. Never fails; an empty list still broadcasts its (empty) snapshot.
pub async fn reset_votes(State(state): State<AppState>) -> Json<WordsResponse> {
    WordsResponse::ok(state.store.reset_all_votes())
}
