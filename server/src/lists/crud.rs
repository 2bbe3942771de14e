use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AdminAuth;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{ListMeta, ListsOverview, Word};

// --- Request/response types ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateListRequest {
    pub name: String,
    /// When set, the new list starts as a value copy of the active list's
    /// current entries.
    pub copy_from_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub list_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveResponse {
    pub success: bool,
    pub words: Vec<Word>,
    pub active_list_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListResponse {
    pub success: bool,
    pub lists: Vec<ListMeta>,
    pub active_list_id: String,
}

// --- Handlers ---

/// GET /api/lists — All lists in creation order plus the active id. Public:
/// the voting page shows which ballot is live.
pub async fn list_lists(State(state): State<AppState>) -> Json<ListsOverview> {
    Json(state.store.list_all())
}

/// POST /api/lists — Create a list, empty or copied from the active one.
pub async fn create_list(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Json(req): Json<CreateListRequest>,
) -> (StatusCode, Json<ListMeta>) {
    let meta = state.store.create_list(&req.name, req.copy_from_active);
    (StatusCode::CREATED, Json(meta))
}

/// PUT /api/lists/active — Swap which list the board shows. Broadcasts the
/// new active list's words to every subscriber.
pub async fn set_active_list(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<SetActiveResponse>, ApiError> {
    let list_id = req
        .list_id
        .ok_or_else(|| ApiError::Validation("List id is required".to_string()))?;

    let words = state
        .store
        .set_active_list(&list_id)
        .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;

    Ok(Json(SetActiveResponse {
        success: true,
        words,
        active_list_id: list_id,
    }))
}

/// DELETE /api/lists/{id} — Delete a list. The sole remaining list can
/// never be deleted; deleting the active list promotes a replacement
/// before this returns.
pub async fn delete_list(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<DeleteListResponse>, ApiError> {
    let overview = state.store.delete_list(&id)?;

    Ok(Json(DeleteListResponse {
        success: true,
        lists: overview.lists,
        active_list_id: overview.active_list_id,
    }))
}
