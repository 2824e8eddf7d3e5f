use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    bookmarks::{
        dto::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest},
        repo::Bookmark,
    },
    error::ApiError,
    state::AppState,
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", post(create_bookmark))
        .route("/bookmarks", get(list_bookmarks))
        .route("/bookmarks/:id", get(get_bookmark))
        .route("/bookmarks/:id", patch(edit_bookmark))
        .route("/bookmarks/:id", delete(delete_bookmark))
}

#[instrument(skip(state, payload))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }
    if payload.link.trim().is_empty() {
        return Err(ApiError::Validation("link is required".into()));
    }

    let bookmark = Bookmark::create(
        &state.db,
        user.id,
        &payload.title,
        &payload.link,
        payload.description.as_deref(),
    )
    .await?;

    info!(user_id = %user.id, bookmark_id = %bookmark.id, "bookmark created");
    Ok((StatusCode::CREATED, Json(BookmarkResponse::from(bookmark))))
}

#[instrument(skip(state))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let bookmarks = Bookmark::list_by_owner(&state.db, user.id).await?;
    Ok(Json(
        bookmarks.into_iter().map(BookmarkResponse::from).collect(),
    ))
}

#[instrument(skip(state))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = Bookmark::find_owned(&state.db, user.id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("bookmark not found".into()))?;
    Ok(Json(BookmarkResponse::from(bookmark)))
}

#[instrument(skip(state, payload))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = Bookmark::update_owned(
        &state.db,
        user.id,
        id,
        payload.title.as_deref(),
        payload.link.as_deref(),
        payload.description.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("bookmark not found".into()))?;

    info!(user_id = %user.id, bookmark_id = %bookmark.id, "bookmark updated");
    Ok(Json(BookmarkResponse::from(bookmark)))
}

#[instrument(skip(state))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !Bookmark::delete_owned(&state.db, user.id, id).await? {
        return Err(ApiError::NotFound("bookmark not found".into()));
    }
    info!(user_id = %user.id, bookmark_id = %id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}
