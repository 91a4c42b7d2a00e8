//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Discriminates the two token flavors in the `token_type` claim. Access
/// tokens are short-lived; refresh tokens live longer and are the only kind
/// logout accepts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by every signed token.
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub token_type: TokenType,
    pub iat: usize,
    pub exp: usize,
}

/// Token pair returned by a successful login.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenPair {
    pub refresh: String,
    pub access: String,
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub created_at: Option<String>,
}

/// POST /register request body
#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// POST /login request body
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
