use axum::{
    extract::FromRequestParts,
    http::{header::HeaderName, request::Parts},
};
use std::sync::Arc;

use crate::error::ApiError;

/// Header carrying the shared admin secret, resent on every admin request.
pub static ADMIN_PASSWORD_HEADER: HeaderName = HeaderName::from_static("x-admin-password");

/// Configured admin password, injected into request extensions by the
/// router middleware so the extractor can reach it.
#[derive(Clone)]
pub struct AdminSecret(pub Arc<String>);

/// Admin gate: extracting this succeeds only when the request carried the
/// correct `X-Admin-Password` header. There is no session state beyond
/// exact equality with the configured secret.
pub struct AdminAuth;

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let secret = parts
            .extensions
            .get::<AdminSecret>()
            .ok_or(ApiError::Internal)?;

        let provided = parts
            .headers
            .get(&ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        if provided == secret.0.as_str() {
            Ok(AdminAuth)
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}
