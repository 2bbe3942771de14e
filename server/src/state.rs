use std::sync::Arc;

use crate::store::WordStore;

/// Shared application state passed to all handlers via axum State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative word/list store plus its live subscribers.
    pub store: Arc<WordStore>,
    /// Shared admin password, compared verbatim against the request header.
    pub admin_password: Arc<String>,
}
