use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use store::User;

use super::{AppState, AuthUser, ServerError};
use crate::models::{ApiResponse, ProfilePatch};

/// PUT /auth/profile
///
/// Applies the patch to the caller's own record and returns the full user.
#[tracing::instrument(skip(state, auth, payload), fields(user_id = %auth.user_id))]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<ApiResponse<User>>, ServerError> {
    let Json(patch) = payload?;
    let mut record = state
        .users
        .find_by_id(&auth.user_id)
        .await?
        .ok_or(ServerError::UserNotFound)?;

    record.apply(patch);
    let user = record.to_user();
    state.users.save(record).await?;

    tracing::debug!("Updated profile");
    Ok(Json(ApiResponse::ok(user)))
}
