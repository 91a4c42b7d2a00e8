//! Request validators for registration.

use regex::Regex;
use std::sync::OnceLock;

use super::models::RegisterRequest;
use crate::common::{ValidationResult, Validator};

// Field caps mirror the storage schema.
const FULLNAME_MAX: usize = 100;
const EMAIL_MAX: usize = 100;
const PHONE_MAX: usize = 10;
const PASSWORD_MAX: usize = 100;

/// Shared email shape check. Deliberately loose: one `@`, a dot somewhere
/// in the domain, no whitespace.
pub(crate) fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub struct RegisterValidator;

impl Validator<RegisterRequest> for RegisterValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.fullname.trim().is_empty() {
            result.add_error("fullname", "Full name is required");
        } else if data.fullname.len() > FULLNAME_MAX {
            result.add_error("fullname", "Full name must be at most 100 characters");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if data.email.len() > EMAIL_MAX {
            result.add_error("email", "Email must be at most 100 characters");
        } else if !email_regex().is_match(&data.email) {
            result.add_error("email", "Enter a valid email address");
        }

        if data.phone.trim().is_empty() {
            result.add_error("phone", "Phone number is required");
        } else if data.phone.len() > PHONE_MAX {
            result.add_error("phone", "Phone number must be at most 10 characters");
        }

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        } else if data.password.len() > PASSWORD_MAX {
            result.add_error("password", "Password must be at most 100 characters");
        }

        if data.confirm_password.is_empty() {
            result.add_error("confirm_password", "Password confirmation is required");
        }

        result
    }
}
