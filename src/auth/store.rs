//! User persistence queries.

use sqlx::SqlitePool;

use super::models::User;

/// Insert a new user row and return the stored record.
pub async fn create_user(
    pool: &SqlitePool,
    id: &str,
    fullname: &str,
    email: &str,
    password_hash: &str,
    phone: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, fullname, email, password_hash, phone) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(fullname)
    .bind(email)
    .bind(password_hash)
    .bind(phone)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Look up a user by email. Emails are not unique at the storage level;
/// the earliest registration wins.
pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ? ORDER BY rowid LIMIT 1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Look up a user by id.
pub async fn find_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
