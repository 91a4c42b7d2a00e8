//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the auth router: service status plus the session lifecycle.
pub fn auth_routes() -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::home)
                .post(handlers::home)
                .put(handlers::home)
                .delete(handlers::home),
        )
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
}
