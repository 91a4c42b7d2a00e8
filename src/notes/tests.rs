//! Tests for notes module
//!
//! These tests verify note CRUD behavior including:
//! - Create/list/update/delete handler flows
//! - Ownership scoping on update and delete
//! - Note validators

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Extension, Path},
        http::StatusCode,
        response::{IntoResponse, Json},
    };
    use sqlx::sqlite::SqlitePoolOptions;
    use tokio::sync::RwLock;

    use super::super::handlers;
    use super::super::models::{CreateNoteRequest, Note, UpdateNoteRequest};
    use super::super::validators::{CreateNoteValidator, UpdateNoteValidator};
    use crate::auth::AuthedUser;
    use crate::common::migrations::run_migrations;
    use crate::common::{ApiError, AppState, Validator};

    // A single connection keeps every query on the same in-memory database.
    async fn test_state() -> Arc<RwLock<AppState>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();

        Arc::new(RwLock::new(AppState {
            db: pool,
            jwt_secret: "test_secret_key".to_string(),
            access_token_ttl_mins: 15,
            refresh_token_ttl_hours: 24,
        }))
    }

    fn ada() -> AuthedUser {
        AuthedUser {
            id: "U_ADA001".to_string(),
            fullname: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn grace() -> AuthedUser {
        AuthedUser {
            id: "U_GRACE1".to_string(),
            fullname: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        }
    }

    fn note_body(email: &str, title: &str) -> CreateNoteRequest {
        CreateNoteRequest {
            title: title.to_string(),
            description: "Some descriptive text".to_string(),
            email: email.to_string(),
            image: None,
        }
    }

    async fn create_note(state: &Arc<RwLock<AppState>>, owner: AuthedUser, title: &str) -> Note {
        let email = owner.email.clone();
        let (status, Json(note)) = handlers::add_note(
            Extension(state.clone()),
            owner,
            Json(note_body(&email, title)),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        note
    }

    #[tokio::test]
    async fn created_note_shows_up_in_listing() {
        let state = test_state().await;
        let note = create_note(&state, ada(), "Groceries").await;

        assert!(note.id.starts_with("N_"));
        assert_eq!(note.email, "ada@example.com");

        let Json(profile) = handlers::list_notes(Extension(state), ada()).await.unwrap();
        assert_eq!(profile.user.name, "Ada Lovelace");
        assert_eq!(profile.user.email, "ada@example.com");
        assert_eq!(profile.notes.len(), 1);
        assert_eq!(profile.notes[0].id, note.id);
        assert_eq!(profile.notes[0].title, "Groceries");
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_caller() {
        let state = test_state().await;
        create_note(&state, ada(), "Hers").await;
        create_note(&state, grace(), "Theirs").await;

        let Json(profile) = handlers::list_notes(Extension(state), ada()).await.unwrap();
        assert_eq!(profile.notes.len(), 1);
        assert_eq!(profile.notes[0].title, "Hers");
    }

    #[tokio::test]
    async fn empty_listing_still_carries_the_account_summary() {
        let state = test_state().await;

        let Json(profile) = handlers::list_notes(Extension(state), ada()).await.unwrap();
        assert!(profile.notes.is_empty());
        assert_eq!(profile.user.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn profile_serializes_with_client_key_casing() {
        let state = test_state().await;
        create_note(&state, ada(), "Groceries").await;

        let Json(profile) = handlers::list_notes(Extension(state), ada()).await.unwrap();
        let value = serde_json::to_value(&profile).unwrap();

        assert!(value.get("User").is_some());
        assert!(value.get("Notes").is_some());
        assert_eq!(value["User"]["Name"], "Ada Lovelace");
        assert_eq!(value["User"]["Email"], "ada@example.com");
        assert_eq!(value["Notes"][0]["title"], "Groceries");
    }

    #[tokio::test]
    async fn add_note_reports_field_level_errors() {
        let state = test_state().await;

        let err = handlers::add_note(
            Extension(state),
            ada(),
            Json(CreateNoteRequest {
                title: "".to_string(),
                description: "d".repeat(256),
                email: "not-an-email".to_string(),
                image: None,
            }),
        )
        .await
        .unwrap_err();

        match err {
            ApiError::ValidationFailed(errors) => {
                assert!(errors.iter().any(|e| e.field == "title"));
                assert!(errors.iter().any(|e| e.field == "description"));
                assert!(errors.iter().any(|e| e.field == "email"));
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_changes_only_named_fields() {
        let state = test_state().await;
        let note = create_note(&state, ada(), "Original").await;

        let (status, Json(updated)) = handlers::update_note(
            Extension(state),
            ada(),
            Path(note.id.clone()),
            Json(UpdateNoteRequest {
                title: Some("Renamed".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::RESET_CONTENT);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "Some descriptive text");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn update_of_another_users_note_is_not_found() {
        let state = test_state().await;
        let note = create_note(&state, ada(), "Hers").await;

        let err = handlers::update_note(
            Extension(state.clone()),
            grace(),
            Path(note.id.clone()),
            Json(UpdateNoteRequest {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::ResourceNotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let Json(profile) = handlers::list_notes(Extension(state), ada()).await.unwrap();
        assert_eq!(profile.notes[0].title, "Hers");
    }

    #[tokio::test]
    async fn update_of_missing_note_is_not_found() {
        let state = test_state().await;

        let err = handlers::update_note(
            Extension(state),
            ada(),
            Path("N_MISSIN".to_string()),
            Json(UpdateNoteRequest {
                title: Some("Anything".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::ResourceNotFound(_)));
    }

    #[tokio::test]
    async fn update_with_no_fields_is_rejected() {
        let state = test_state().await;
        let note = create_note(&state, ada(), "Original").await;

        let err = handlers::update_note(
            Extension(state),
            ada(),
            Path(note.id),
            Json(UpdateNoteRequest::default()),
        )
        .await
        .unwrap_err();

        match err {
            ApiError::ValidationFailed(errors) => {
                assert!(errors.iter().any(|e| e.field == "body"));
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_removes_the_note() {
        let state = test_state().await;
        let note = create_note(&state, ada(), "Disposable").await;

        let status = handlers::delete_note(Extension(state.clone()), ada(), Path(note.id.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(profile) = handlers::list_notes(Extension(state.clone()), ada())
            .await
            .unwrap();
        assert!(profile.notes.is_empty());

        // Deleting again reports the note as gone.
        let err = handlers::delete_note(Extension(state), ada(), Path(note.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ResourceNotFound(_)));
    }

    #[tokio::test]
    async fn delete_of_another_users_note_is_not_found() {
        let state = test_state().await;
        let note = create_note(&state, ada(), "Hers").await;

        let err = handlers::delete_note(Extension(state.clone()), grace(), Path(note.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ResourceNotFound(_)));

        let Json(profile) = handlers::list_notes(Extension(state), ada()).await.unwrap();
        assert_eq!(profile.notes.len(), 1);
    }

    #[test]
    fn create_validator_enforces_field_caps() {
        let result = CreateNoteValidator.validate(&CreateNoteRequest {
            title: "t".repeat(51),
            description: "d".repeat(256),
            email: "e".repeat(95) + "@x.com",
            image: None,
        });

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
        assert!(result.errors.iter().any(|e| e.field == "description"));
        assert!(result.errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn create_validator_accepts_valid_body() {
        let result = CreateNoteValidator.validate(&note_body("ada@example.com", "Groceries"));
        assert!(result.is_valid);
    }

    #[test]
    fn update_validator_rejects_blank_provided_fields() {
        let result = UpdateNoteValidator.validate(&UpdateNoteRequest {
            title: Some("   ".to_string()),
            ..Default::default()
        });

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn update_validator_accepts_single_field() {
        let result = UpdateNoteValidator.validate(&UpdateNoteRequest {
            description: Some("New body".to_string()),
            ..Default::default()
        });
        assert!(result.is_valid);
    }
}
