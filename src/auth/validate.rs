use crate::auth::error::FieldError;
use regex::Regex;

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Trim and lowercase an email so lookups and inserts agree on one spelling.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// Validation outcome is an explicit list of field errors; callers branch
/// on its emptiness.
#[must_use]
pub fn validate_registration(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !valid_email(email.trim()) {
        errors.push(FieldError::new("email", "Incorrect email"));
    }

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.push(FieldError::new(
            "password",
            "Minimal password length is 6 symbols",
        ));
    }

    errors
}

#[must_use]
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !valid_email(email.trim()) {
        errors.push(FieldError::new("email", "Write correct email"));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "Write password"));
    }

    errors
}
