use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use super::{AppState, ServerError};

/// Extractor that resolves a Bearer token to the id of its user.
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub token: String,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ServerError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ServerError::Unauthorized("Invalid authorization header format".to_string())
            })?;

        match state.tokens.resolve(token).await {
            Some(user_id) => Ok(AuthUser {
                user_id,
                token: token.to_string(),
            }),
            None => Err(ServerError::Unauthorized(
                "Invalid or expired token".to_string(),
            )),
        }
    }
}
