//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::{store, tokens};
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor.
///
/// Reads the `Authorization: Bearer <token>` header, verifies the token and
/// loads the user behind its `sub` claim. Protected handlers take this as an
/// argument; rejection happens before the handler body runs.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub fullname: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("application state missing".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = bearer_token(parts.headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()))
            .ok_or_else(|| {
                warn!("Authentication failed: missing or malformed Authorization header");
                ApiError::MissingAuthHeader(
                    "Authorization header with Bearer token required.".to_string(),
                )
            })?;

        let claims = tokens::verify_token(token, &app_state.jwt_secret).map_err(|e| {
            warn!(error = %e, "Authentication failed: bearer token rejected");
            ApiError::InvalidOrExpiredToken("Invalid or expired token.".to_string())
        })?;

        let user = store::find_user_by_id(&app_state.db, &claims.sub)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %claims.sub, "Database error during user lookup in authentication");
                ApiError::DatabaseError(e)
            })?;

        match user {
            Some(user) => {
                debug!(
                    user_id = %user.id,
                    email = %safe_email_log(&user.email),
                    "User authenticated"
                );
                Ok(AuthedUser {
                    id: user.id,
                    fullname: user.fullname,
                    email: user.email,
                })
            }
            None => {
                warn!(user_id = %claims.sub, "Authentication failed: user behind token no longer exists");
                Err(ApiError::UserNotFound("User not found.".to_string()))
            }
        }
    }
}

/// Extract the token portion of an `Authorization: Bearer <token>` value.
/// Anything without the exact `Bearer ` prefix is treated as absent.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header.and_then(|value| value.strip_prefix("Bearer "))
}
