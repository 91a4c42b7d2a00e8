// src/notes/validators.rs

use super::models::{CreateNoteRequest, UpdateNoteRequest};
use crate::auth::validators::email_regex;
use crate::common::{ValidationResult, Validator};

// Field caps mirror the storage schema.
const TITLE_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 255;
const EMAIL_MAX: usize = 100;

pub struct CreateNoteValidator;

impl Validator<CreateNoteRequest> for CreateNoteValidator {
    fn validate(&self, data: &CreateNoteRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        } else if data.title.len() > TITLE_MAX {
            result.add_error("title", "Title must be at most 50 characters");
        }

        if data.description.trim().is_empty() {
            result.add_error("description", "Description is required");
        } else if data.description.len() > DESCRIPTION_MAX {
            result.add_error("description", "Description must be at most 255 characters");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if data.email.len() > EMAIL_MAX {
            result.add_error("email", "Email must be at most 100 characters");
        } else if !email_regex().is_match(&data.email) {
            result.add_error("email", "Enter a valid email address");
        }

        result
    }
}

pub struct UpdateNoteValidator;

impl Validator<UpdateNoteRequest> for UpdateNoteValidator {
    fn validate(&self, data: &UpdateNoteRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.is_none()
            && data.description.is_none()
            && data.email.is_none()
            && data.image.is_none()
        {
            result.add_error("body", "At least one field must be provided");
            return result;
        }

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                result.add_error("title", "Title cannot be empty");
            } else if title.len() > TITLE_MAX {
                result.add_error("title", "Title must be at most 50 characters");
            }
        }

        if let Some(description) = &data.description {
            if description.trim().is_empty() {
                result.add_error("description", "Description cannot be empty");
            } else if description.len() > DESCRIPTION_MAX {
                result.add_error("description", "Description must be at most 255 characters");
            }
        }

        if let Some(email) = &data.email {
            if email.trim().is_empty() {
                result.add_error("email", "Email cannot be empty");
            } else if email.len() > EMAIL_MAX {
                result.add_error("email", "Email must be at most 100 characters");
            } else if !email_regex().is_match(email) {
                result.add_error("email", "Enter a valid email address");
            }
        }

        result
    }
}
