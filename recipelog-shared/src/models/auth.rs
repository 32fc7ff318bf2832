use serde::{Deserialize, Serialize};

use super::User;

/// Credentials posted to `/auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Registration data as collected by the client.
///
/// The username is optional here; [`RegisterRequest::into_payload`] fills it in
/// from the email address before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired username, if the user chose one.
    pub username: Option<String>,
    /// Account email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub password_confirm: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl RegisterRequest {
    /// The username that will be submitted: the explicit one when non-empty,
    /// otherwise the local part of the email address.
    #[must_use]
    pub fn effective_username(&self) -> String {
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => username.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Build the body posted to `/auth/register/`.
    #[must_use]
    pub fn into_payload(self) -> RegistrationPayload {
        RegistrationPayload {
            username: self.effective_username(),
            email: self.email,
            password: self.password,
            password_confirm: self.password_confirm,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Body posted to `/auth/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// Response to a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The signed-in account.
    pub user: User,
    /// Short-lived access token.
    pub access: String,
    /// Longer-lived refresh token.
    pub refresh: String,
    /// Human-readable status line.
    #[serde(default)]
    pub message: Option<String>,
}

/// Body posted to `/auth/token/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Response from `/auth/token/refresh/`.
///
/// `refresh` is only present when the server rotates refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body posted to `/auth/logout/` so the server can revoke the refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutRequest {
    pub refresh: String,
}

/// Body posted to `/auth/change-password/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Response from `/auth/profile/update/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic acknowledgement returned by endpoints without a payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
