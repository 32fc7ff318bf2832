//! Validation logic for the login and registration forms.
//!
//! Kept apart from the components so the rules can be tested natively. Each
//! form validates every field and reports at most one error per field.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::RegisterRequest;
use std::collections::BTreeMap;
use thiserror::Error;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Validation errors that can occur during form validation.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Username must be no more than 30 characters")]
    UsernameTooLong,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
}

/// Form inputs that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    PasswordConfirm,
}

/// Per-field errors; empty when the form is valid.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be blank
/// - Email must look like `local@domain.tld` with no whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    let well_formed = EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email));
    if !well_formed {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates an optional username. Blank means "derive it from the email".
///
/// # Validation rules
/// - Between 3 and 30 characters when given
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Ok(());
    }

    let length = username.chars().count();
    if length < USERNAME_MIN_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }
    if length > USERNAME_MAX_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }

    Ok(())
}

/// Validates a new password.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Checks run before a login request is sent.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(err) = validate_email(email) {
        errors.insert(Field::Email, err);
    }
    if password.is_empty() {
        errors.insert(Field::Password, ValidationError::PasswordRequired);
    }
    errors
}

/// Checks run before a registration request is sent.
pub fn validate_registration(request: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if request.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, ValidationError::FirstNameRequired);
    }
    if request.last_name.trim().is_empty() {
        errors.insert(Field::LastName, ValidationError::LastNameRequired);
    }

    let checks = [
        (Field::Email, validate_email(&request.email)),
        (
            Field::Username,
            validate_username(request.username.as_deref().unwrap_or_default()),
        ),
        (Field::Password, validate_password(&request.password)),
        (
            Field::PasswordConfirm,
            validate_confirm_password(&request.password_confirm, &request.password),
        ),
    ];
    for (field, result) in checks {
        if let Err(err) = result {
            errors.insert(field, err);
        }
    }

    errors
}
