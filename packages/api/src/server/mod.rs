//! # HTTP server: axum routes for authentication and profile updates
//!
//! [`build_router`] returns a [`Router`] with paths relative to the API base;
//! the web binary nests it under `/api`.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /auth/register` | [`auth::register`] |
//! | `POST /auth/login` | [`auth::login`] |
//! | `GET /auth/me` | [`auth::me`] |
//! | `POST /auth/logout` | [`auth::logout`] |
//! | `PUT /auth/profile` | [`profile::update_profile`] |
//!
//! Protected routes take an [`AuthUser`], which resolves the bearer token
//! through the [`TokenRegistry`]. Every failure is a [`ServerError`], rendered
//! as `{ "success": false, "error": "..." }` with a matching status.

pub mod auth;
mod extract;
pub mod profile;

pub use extract::AuthUser;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::auth::TokenRegistry;
use crate::db::{MemoryUserRepository, RepositoryError, UserRepository};
use crate::models::ApiResponse;

/// Shared state handed to every handler.
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub tokens: TokenRegistry,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            tokens: TokenRegistry::new(),
        }
    }

    /// State backed by a fresh [`MemoryUserRepository`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryUserRepository::new()))
    }
}

/// Server settings read from the environment.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// `BIND_ADDR`; `None` lets the launcher pick its default.
    pub bind_addr: Option<SocketAddr>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = std::env::var("BIND_ADDR").ok().and_then(|raw| {
            raw.parse()
                .map_err(|e| tracing::warn!("Ignoring invalid BIND_ADDR {:?}: {}", raw, e))
                .ok()
        });
        Self { bind_addr }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("User not found")]
    UserNotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServerError::UserNotFound => StatusCode::NOT_FOUND,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ServerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(message) => ServerError::Conflict(message),
            RepositoryError::Storage(_) => ServerError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(ApiResponse::<()>::err(self.to_string()))).into_response()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/profile", put(profile::update_profile))
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(ServerError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServerError::Unauthorized("x".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ServerError::UserNotFound.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_envelope() {
        let (state, token) = test_support::seeded_state().await;

        let response = test_support::call(
            &state,
            axum::http::Method::PUT,
            "/auth/profile",
            Some(&token),
            Some(serde_json::json!({ "skills": "go" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test_support::body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().is_some_and(|m| m.contains("skills")));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_non_json_login_body_is_json_envelope() {
        let (state, _) = test_support::seeded_state().await;
        let request = axum::http::Request::builder()
            .method(axum::http::Method::POST)
            .uri("/auth/login")
            .body(axum::body::Body::from("email=ada"))
            .unwrap();

        let response = tower::ServiceExt::oneshot(build_router(state), request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test_support::body_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[test]
    fn test_repository_conflict_maps_to_conflict() {
        let err: ServerError = RepositoryError::Conflict("taken".to_string()).into();
        assert!(matches!(err, ServerError::Conflict(ref m) if m == "taken"));
    }
}
