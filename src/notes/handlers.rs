// src/notes/handlers.rs

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::{
    CreateNoteRequest, Note, NoteSummary, ProfileResponse, UpdateNoteRequest, UserSummary,
};
use super::store;
use super::validators::{CreateNoteValidator, UpdateNoteValidator};
use crate::auth::AuthedUser;
use crate::common::{generate_note_id, ApiError, AppState, Validator};

/// `GET /profile` - The caller's account summary and their notes.
pub async fn list_notes(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let notes = store::list_notes_by_email(&state.db, &authed.email)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Database error listing notes");
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(ProfileResponse {
        user: UserSummary {
            name: authed.fullname,
            email: authed.email,
        },
        notes: notes.into_iter().map(NoteSummary::from).collect(),
    }))
}

/// `POST /profile/addnote` - Create a note.
///
/// The owner email comes from the request body, matching the longstanding
/// client contract; the caller only has to be authenticated.
pub async fn add_note(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(body): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let validation = CreateNoteValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();
    let id = generate_note_id();

    let note = store::insert_note(
        &state.db,
        &id,
        &body.email,
        &body.title,
        &body.description,
        body.image.as_deref(),
    )
    .await
    .map_err(|e| {
        error!(error = %e, note_id = %id, user_id = %authed.id, "Database error creating note");
        ApiError::DatabaseError(e)
    })?;

    info!(note_id = %note.id, user_id = %authed.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// `PUT /profile/:id` - Partially update a note owned by the caller.
pub async fn update_note(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let validation = UpdateNoteValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();

    let updated = store::update_note(
        &state.db,
        &id,
        &authed.email,
        body.title.as_deref(),
        body.description.as_deref(),
        body.email.as_deref(),
        body.image.as_deref(),
    )
    .await
    .map_err(|e| {
        error!(error = %e, note_id = %id, user_id = %authed.id, "Database error updating note");
        ApiError::DatabaseError(e)
    })?;

    let note = updated.ok_or_else(|| {
        warn!(note_id = %id, user_id = %authed.id, "Update rejected: note missing or owned by someone else");
        ApiError::ResourceNotFound("Note not found.".to_string())
    })?;

    info!(note_id = %note.id, user_id = %authed.id, "Note updated");

    Ok((StatusCode::RESET_CONTENT, Json(note)))
}

/// `DELETE /profile/:id` - Delete a note owned by the caller.
pub async fn delete_note(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let state = state_lock.read().await.clone();

    let deleted = store::delete_note(&state.db, &id, &authed.email)
        .await
        .map_err(|e| {
            error!(error = %e, note_id = %id, user_id = %authed.id, "Database error deleting note");
            ApiError::DatabaseError(e)
        })?;

    if !deleted {
        warn!(note_id = %id, user_id = %authed.id, "Delete rejected: note missing or owned by someone else");
        return Err(ApiError::ResourceNotFound("Note not found.".to_string()));
    }

    info!(note_id = %id, user_id = %authed.id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
