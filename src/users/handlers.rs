use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{handlers::is_valid_email, jwt::AuthUser},
    error::{is_unique_violation, ApiError},
    state::AppState,
    users::{
        dto::{EditUserRequest, UserProfile},
        repo::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let row = User::find_by_id(&state.db, user.id).await?.ok_or_else(|| {
        warn!(user_id = %user.id, "token subject has no user row");
        ApiError::Authentication("user not found".into())
    })?;
    Ok(Json(UserProfile::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn edit_user(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<EditUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let email = payload.email.as_deref().map(str::trim);
    if let Some(email) = email {
        if !is_valid_email(email) {
            return Err(ApiError::Validation("invalid email".into()));
        }
    }

    let updated = match User::update_profile(
        &state.db,
        user.id,
        email,
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
    )
    .await
    {
        Ok(row) => row,
        // Same unique index as signup, same client-visible outcome
        Err(e) if is_unique_violation(&e) => {
            warn!(user_id = %user.id, "profile edit with taken email");
            return Err(ApiError::Forbidden("credentials already taken".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let row = updated.ok_or_else(|| {
        warn!(user_id = %user.id, "token subject has no user row");
        ApiError::Authentication("user not found".into())
    })?;

    info!(user_id = %row.id, "profile updated");
    Ok(Json(UserProfile::from(row)))
}
