use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::auth::AdminSecret;
use crate::lists::crud as lists_crud;
use crate::state::AppState;
use crate::words::{admin as words_admin, crud as words_crud};
use crate::ws::handler as ws_handler;

use axum::Json;

/// Inject the admin secret into request extensions so the AdminAuth
/// extractor can find it.
async fn inject_admin_secret(
    axum::extract::State(state): axum::extract::State<AppState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    req.extensions_mut()
        .insert(AdminSecret(state.admin_password.clone()));
    next.run(req).await
}

/// Build the full axum Router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Public word routes: snapshot, vote, propose, reset
    let word_routes = Router::new()
        .route("/api/words", axum::routing::get(words_crud::list_words))
        .route(
            "/api/words/vote",
            axum::routing::post(words_crud::vote_word),
        )
        .route(
            "/api/words/propose",
            axum::routing::post(words_crud::propose_word),
        )
        .route(
            "/api/words/reset",
            axum::routing::post(words_crud::reset_votes),
        );

    // Admin routes (X-Admin-Password header required — AdminAuth extractor
    // checks it)
    let admin_routes = Router::new()
        .route("/api/admin/stats", axum::routing::get(words_admin::get_stats))
        .route("/api/admin/words", axum::routing::post(words_admin::add_word))
        .route(
            "/api/admin/words/{word}",
            axum::routing::delete(words_admin::delete_word),
        );

    // List management. Note: /api/lists/active MUST come before
    // /api/lists/{id} to avoid path param conflict.
    let list_routes = Router::new()
        .route("/api/lists", axum::routing::get(lists_crud::list_lists))
        .route("/api/lists", axum::routing::post(lists_crud::create_list))
        .route(
            "/api/lists/active",
            axum::routing::put(lists_crud::set_active_list),
        )
        .route(
            "/api/lists/{id}",
            axum::routing::delete(lists_crud::delete_list),
        );

    // WebSocket endpoint (anonymous subscribers)
    let ws_routes = Router::new().route("/ws", axum::routing::get(ws_handler::ws_upgrade));

    // Health check
    let health = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(word_routes)
        .merge(admin_routes)
        .merge(list_routes)
        .merge(ws_routes)
        .merge(health)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            inject_admin_secret,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Basic health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
