// src/notes/store.rs
//
// Note persistence queries. Updates and deletes are scoped to the owning
// email in the WHERE clause; a note belonging to someone else is
// indistinguishable from a missing one.

use sqlx::SqlitePool;

use super::models::Note;

/// Insert a new note row and return the stored record.
pub async fn insert_note(
    pool: &SqlitePool,
    id: &str,
    email: &str,
    title: &str,
    description: &str,
    image: Option<&str>,
) -> Result<Note, sqlx::Error> {
    sqlx::query("INSERT INTO notes (id, email, title, description, image) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(email)
        .bind(title)
        .bind(description)
        .bind(image)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// All notes owned by an email, oldest first.
pub async fn list_notes_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE email = ? ORDER BY rowid")
        .bind(email)
        .fetch_all(pool)
        .await
}

/// Partial update scoped to the owning email. Returns the updated note, or
/// None when no row matched.
pub async fn update_note(
    pool: &SqlitePool,
    id: &str,
    owner_email: &str,
    title: Option<&str>,
    description: Option<&str>,
    email: Option<&str>,
    image: Option<&str>,
) -> Result<Option<Note>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE notes SET
            title = COALESCE(?, title),
            description = COALESCE(?, description),
            email = COALESCE(?, email),
            image = COALESCE(?, image)
        WHERE id = ? AND email = ?
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(email)
    .bind(image)
    .bind(id)
    .bind(owner_email)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .map(Some)
}

/// Delete scoped to the owning email. Returns false when no row matched.
pub async fn delete_note(
    pool: &SqlitePool,
    id: &str,
    owner_email: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ? AND email = ?")
        .bind(id)
        .bind(owner_email)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::migrations::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same in-memory database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn insert_then_list_in_insertion_order() {
        let pool = test_pool().await;

        insert_note(&pool, "N_AAA001", "ada@example.com", "First", "one", None)
            .await
            .unwrap();
        insert_note(
            &pool,
            "N_AAA002",
            "ada@example.com",
            "Second",
            "two",
            Some("https://img.example.com/2.png"),
        )
        .await
        .unwrap();
        insert_note(&pool, "N_BBB001", "grace@example.com", "Other", "theirs", None)
            .await
            .unwrap();

        let notes = list_notes_by_email(&pool, "ada@example.com").await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "First");
        assert_eq!(notes[1].title, "Second");
        assert_eq!(
            notes[1].image.as_deref(),
            Some("https://img.example.com/2.png")
        );
    }

    #[tokio::test]
    async fn update_keeps_omitted_fields() {
        let pool = test_pool().await;
        insert_note(&pool, "N_AAA001", "ada@example.com", "Title", "body", None)
            .await
            .unwrap();

        let updated = update_note(
            &pool,
            "N_AAA001",
            "ada@example.com",
            Some("New title"),
            None,
            None,
            None,
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.description, "body");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn update_scoped_to_owner() {
        let pool = test_pool().await;
        insert_note(&pool, "N_AAA001", "ada@example.com", "Title", "body", None)
            .await
            .unwrap();

        let result = update_note(
            &pool,
            "N_AAA001",
            "grace@example.com",
            Some("Hijacked"),
            None,
            None,
            None,
        )
        .await
        .unwrap();
        assert!(result.is_none());

        let notes = list_notes_by_email(&pool, "ada@example.com").await.unwrap();
        assert_eq!(notes[0].title, "Title");
    }

    #[tokio::test]
    async fn delete_scoped_to_owner() {
        let pool = test_pool().await;
        insert_note(&pool, "N_AAA001", "ada@example.com", "Title", "body", None)
            .await
            .unwrap();

        assert!(!delete_note(&pool, "N_AAA001", "grace@example.com")
            .await
            .unwrap());
        assert!(delete_note(&pool, "N_AAA001", "ada@example.com")
            .await
            .unwrap());
        assert!(!delete_note(&pool, "N_AAA001", "ada@example.com")
            .await
            .unwrap());
    }
}
