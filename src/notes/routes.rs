// src/notes/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

/// Create the notes router. All routes require authentication via the
/// `AuthedUser` extractor on each handler.
pub fn notes_routes() -> Router {
    Router::new()
        .route("/profile", get(handlers::list_notes))
        .route("/profile/addnote", post(handlers::add_note))
        .route(
            "/profile/:id",
            put(handlers::update_note).delete(handlers::delete_note),
        )
}
