//! Token issuance and verification.
//!
//! Tokens are HS256-signed JWTs. Nothing is persisted server-side: a token
//! is valid as long as its signature checks out and `exp` has not passed.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::models::{Claims, TokenPair, TokenType};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid or expired token")]
    InvalidOrExpired,
    #[error("token is not a refresh token")]
    NotRefresh,
    #[error("token encoding failed: {0}")]
    Encode(String),
}

/// Issue a refresh/access token pair for a user id.
pub fn issue_token_pair(
    user_id: &str,
    secret: &str,
    access_ttl_mins: i64,
    refresh_ttl_hours: i64,
) -> Result<TokenPair, TokenError> {
    let refresh = sign_token(
        user_id,
        TokenType::Refresh,
        Duration::hours(refresh_ttl_hours),
        secret,
    )?;
    let access = sign_token(
        user_id,
        TokenType::Access,
        Duration::minutes(access_ttl_mins),
        secret,
    )?;
    Ok(TokenPair { refresh, access })
}

fn sign_token(
    user_id: &str,
    token_type: TokenType,
    ttl: Duration,
    secret: &str,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        token_type,
        iat: now.timestamp() as usize,
        exp: (now + ttl).timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encode(e.to_string()))
}

/// Verify signature and expiry. Access and refresh tokens are accepted
/// interchangeably here; request authentication does not care which kind
/// the client presents.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| TokenError::InvalidOrExpired)
}

/// Verify a token and additionally require the refresh flavor. Logout goes
/// through here; an access token is rejected even when otherwise valid.
pub fn verify_refresh_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let claims = verify_token(token, secret)?;
    if claims.token_type != TokenType::Refresh {
        return Err(TokenError::NotRefresh);
    }
    Ok(claims)
}
