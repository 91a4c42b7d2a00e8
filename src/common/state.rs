// Application state shared across all modules

use sqlx::SqlitePool;

/// Application state containing the database pool and token configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: String,
    pub access_token_ttl_mins: i64,
    pub refresh_token_ttl_hours: i64,
}
