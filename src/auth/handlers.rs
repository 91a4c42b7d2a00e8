//! Authentication handlers

use axum::{
    extract::Extension,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::extractors::bearer_token;
use super::models::{LoginRequest, RegisterRequest, TokenPair};
use super::validators::RegisterValidator;
use super::{store, tokens};
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState, Validator};

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 10;

/// `GET|POST|PUT|DELETE /` - Service status, no auth required.
pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Notes API is up and running." }))
}

/// `POST /register` - Create a user account.
///
/// The password is bcrypt-hashed before it is persisted; the plaintext never
/// reaches the database. A mismatched confirmation aborts before any write.
pub async fn register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let validation = RegisterValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    if body.password != body.confirm_password {
        return Err(ApiError::PasswordMismatch(
            "Password does not match!".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(&body.password, BCRYPT_COST).map_err(|e| {
        error!(error = %e, "Password hashing failed");
        ApiError::InternalServer("Failed to process password".to_string())
    })?;

    let state = state_lock.read().await.clone();
    let id = generate_user_id();

    store::create_user(
        &state.db,
        &id,
        &body.fullname,
        &body.email,
        &password_hash,
        &body.phone,
    )
    .await
    .map_err(|e| {
        error!(error = %e, user_id = %id, "Database error creating user");
        ApiError::DatabaseError(e)
    })?;

    info!(user_id = %id, email = %safe_email_log(&body.email), "User registered");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "User created successfully." })),
    ))
}

/// `POST /login` - Verify credentials and return a refresh/access token pair.
///
/// The two failure messages are deliberately distinct; clients key off them.
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenPair>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = store::find_user_by_email(&state.db, &body.email)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error during login lookup");
            ApiError::DatabaseError(e)
        })?
        .ok_or_else(|| {
            warn!(email = %safe_email_log(&body.email), "Login failed: unknown email");
            ApiError::Unauthorized("Incorrect Email".to_string())
        })?;

    let password_ok = bcrypt::verify(&body.password, &user.password_hash).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Password verification failed");
        ApiError::InternalServer("Failed to verify password".to_string())
    })?;

    if !password_ok {
        warn!(user_id = %user.id, "Login failed: wrong password");
        return Err(ApiError::Unauthorized("Incorrect password".to_string()));
    }

    let pair = tokens::issue_token_pair(
        &user.id,
        &state.jwt_secret,
        state.access_token_ttl_mins,
        state.refresh_token_ttl_hours,
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user.id, "Token issuance failed");
        ApiError::InternalServer("Failed to issue tokens".to_string())
    })?;

    info!(user_id = %user.id, "Login successful");

    Ok(Json(pair))
}

/// `POST /logout` - Stateless logout.
///
/// Checks that the presented bearer token is a valid refresh token and tells
/// the client to discard its copy. Nothing is revoked server-side; the token
/// stays cryptographically valid until it expires.
pub async fn logout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let state = state_lock.read().await.clone();

    let token = bearer_token(headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()))
        .ok_or_else(|| {
            warn!("Logout failed: missing or malformed Authorization header");
            ApiError::MissingAuthHeader(
                "Authorization header with Bearer token required.".to_string(),
            )
        })?;

    tokens::verify_refresh_token(token, &state.jwt_secret).map_err(|e| {
        warn!(error = %e, "Logout rejected: refresh token validation failed");
        ApiError::InvalidOrExpiredToken("Invalid or expired refresh token.".to_string())
    })?;

    info!("User logged out");

    Ok((
        StatusCode::RESET_CONTENT,
        Json(serde_json::json!({ "message": "User logged out successfully." })),
    ))
}
