//! Typed-in values of the sign-in and registration forms.
//!
//! The public guard swaps a form for its placeholder while the request is in
//! flight, which unmounts the form. Keeping the inputs in stores lets them
//! reappear after a rejected attempt.

use super::AuthState;
use shared::models::RegisterRequest;
use yewdux::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct RegisterDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional; blank means "derive it from the email".
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegisterDraft {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: Some(self.username.clone()).filter(|name| !name.trim().is_empty()),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Whether a form unmounting now should keep its draft.
///
/// Only the placeholder swap during a request unmounts a form while the
/// store is loading; leaving the page any other way discards the input.
pub fn keeps_draft(state: &AuthState) -> bool {
    state.is_loading
}
