use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use store::User;

use super::{AppState, AuthUser, ServerError};
use crate::auth::{hash_password, validate_password, verify_password};
use crate::models::{ApiResponse, AuthSession, LoginRequest, RegisterRequest, UserRecord};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /auth/register
#[tracing::instrument(skip(state, payload))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AuthSession>>), ServerError> {
    let Json(req) = payload?;
    let email = req.email.trim().to_lowercase();
    let name = req.name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerError::BadRequest("Invalid email address".to_string()));
    }
    validate_password(&req.password).map_err(ServerError::BadRequest)?;
    if name.is_empty() {
        return Err(ServerError::BadRequest("Name is required".to_string()));
    }

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ServerError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&req.password).map_err(ServerError::Internal)?;
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        email,
        skills: Vec::new(),
        availability: None,
    };
    state
        .users
        .insert(UserRecord::new(user.clone(), Some(password_hash)))
        .await?;

    let token = state.tokens.issue(&user.id).await;
    tracing::info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AuthSession { token, user })),
    ))
}

/// POST /auth/login
#[tracing::instrument(skip(state, payload))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AuthSession>>, ServerError> {
    let Json(req) = payload?;
    let email = req.email.trim().to_lowercase();

    let Some(record) = state.users.find_by_email(&email).await? else {
        return Err(ServerError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };
    let Some(ref hash) = record.password_hash else {
        return Err(ServerError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    match verify_password(&req.password, hash) {
        Ok(true) => {}
        Ok(false) => return Err(ServerError::Unauthorized(INVALID_CREDENTIALS.to_string())),
        Err(e) => {
            tracing::error!("Password verification error: {}", e);
            return Err(ServerError::Internal("Internal server error".to_string()));
        }
    }

    let user = record.to_user();
    let token = state.tokens.issue(&user.id).await;
    Ok(Json(ApiResponse::ok(AuthSession { token, user })))
}

/// GET /auth/me
#[tracing::instrument(skip(state, auth), fields(user_id = %auth.user_id))]
pub async fn me(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ServerError> {
    let record = state
        .users
        .find_by_id(&auth.user_id)
        .await?
        .ok_or(ServerError::UserNotFound)?;
    Ok(Json(ApiResponse::ok(record.to_user())))
}

/// POST /auth/logout
///
/// Revokes the bearer token the request was made with.
#[tracing::instrument(skip(state, auth), fields(user_id = %auth.user_id))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Json<ApiResponse<bool>> {
    state.tokens.revoke(&auth.token).await;
    tracing::debug!("Token revoked");
    Json(ApiResponse::ok(true))
}
