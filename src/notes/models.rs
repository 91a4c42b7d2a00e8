// src/notes/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Note database model. Create and update responses return this full shape,
/// owner email included.
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct Note {
    pub id: String,
    pub email: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

/// POST /profile/addnote request body
#[derive(Deserialize, Debug)]
pub struct CreateNoteRequest {
    pub title: String,
    pub description: String,
    pub email: String,
    pub image: Option<String>,
}

/// PUT /profile/:id request body. Every field is optional; omitted fields
/// keep their stored value.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// GET /profile response: the resolved account summary plus its notes.
/// Key casing matches what the longstanding web client expects.
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    #[serde(rename = "User")]
    pub user: UserSummary,
    #[serde(rename = "Notes")]
    pub notes: Vec<NoteSummary>,
}

#[derive(Serialize, Debug)]
pub struct UserSummary {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

/// Listing shape: the owner email is omitted, the caller already knows
/// whose notes these are.
#[derive(Serialize, Debug)]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<Note> for NoteSummary {
    fn from(note: Note) -> Self {
        NoteSummary {
            id: note.id,
            title: note.title,
            description: note.description,
            image: note.image,
        }
    }
}
