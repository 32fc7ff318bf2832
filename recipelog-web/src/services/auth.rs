//! Authentication service.
//!
//! Wraps the `auth/*` endpoints and mirrors the session into
//! [`SessionStorage`](crate::storage::SessionStorage). Nothing here returns an error to the caller: every
//! failure is folded into an [`AuthOutcome`] with a displayable message.

use crate::api::{
    ApiError, CHANGE_PASSWORD_ENDPOINT, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, PROFILE_ENDPOINT,
    PROFILE_UPDATE_ENDPOINT, REGISTER_ENDPOINT, RecipeLogClient,
};
use crate::storage::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use log::{debug, error, warn};
use shared::models::{
    AuthResponse, ChangePasswordRequest, LoginRequest, LogoutRequest, MessageResponse,
    ProfileUpdate, ProfileUpdateResponse, RegisterRequest, User, first_validation_error,
    message_field,
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const PROFILE_UPDATE_FAILED: &str = "Profile update failed";
pub const PASSWORD_CHANGE_FAILED: &str = "Password change failed";
pub const PROFILE_FETCH_FAILED: &str = "Failed to fetch profile";

/// Result of an auth operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn succeeded(user: Option<User>) -> Self {
        Self {
            success: true,
            user,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(message.into()),
        }
    }
}

/// Auth operations against the remote API.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: RecipeLogClient,
}

impl AuthService {
    pub fn new(client: RecipeLogClient) -> Self {
        Self { client }
    }

    /// Service over the shared browser client.
    pub fn shared() -> Self {
        Self::new(RecipeLogClient::shared())
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self
            .client
            .post::<_, AuthResponse>(LOGIN_ENDPOINT, &request)
            .await
        {
            Ok(response) => {
                debug!("Signed in as {}", response.user.username);
                self.persist_session(&response);
                AuthOutcome::succeeded(Some(response.user))
            }
            Err(err) => {
                warn!("Login failed: {err}");
                AuthOutcome::failed(message_or(&err, LOGIN_FAILED))
            }
        }
    }

    /// Register a new account. A missing or empty username is derived from
    /// the email local part.
    pub async fn register(&self, request: RegisterRequest) -> AuthOutcome {
        let payload = request.into_payload();

        match self
            .client
            .post::<_, AuthResponse>(REGISTER_ENDPOINT, &payload)
            .await
        {
            Ok(response) => {
                debug!("Registered {}", response.user.username);
                self.persist_session(&response);
                AuthOutcome::succeeded(Some(response.user))
            }
            Err(err) => {
                warn!("Registration failed: {err}");
                let message = err
                    .body()
                    .and_then(first_validation_error)
                    .unwrap_or_else(|| REGISTRATION_FAILED.to_string());
                AuthOutcome::failed(message)
            }
        }
    }

    /// Revoke the refresh token server-side, then forget the session.
    ///
    /// The local session is cleared even when the revoke call fails.
    pub async fn logout(&self) {
        let storage = self.client.storage();
        if let Some(refresh) = storage.get(REFRESH_TOKEN_KEY) {
            let request = LogoutRequest { refresh };
            if let Err(err) = self
                .client
                .post::<_, MessageResponse>(LOGOUT_ENDPOINT, &request)
                .await
            {
                error!("Logout error: {err}");
            }
        }
        storage.clear_session();
    }

    /// A session needs both an access token and a cached user.
    pub fn is_authenticated(&self) -> bool {
        let storage = self.client.storage();
        let present = |key: &str| storage.get(key).is_some_and(|value| !value.is_empty());
        present(ACCESS_TOKEN_KEY) && present(USER_KEY)
    }

    pub fn current_user(&self) -> Option<User> {
        let raw = self.client.storage().get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Ignoring unreadable stored user: {err}");
                None
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.client.storage().get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.client.storage().get(REFRESH_TOKEN_KEY)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> AuthOutcome {
        match self
            .client
            .put::<_, ProfileUpdateResponse>(PROFILE_UPDATE_ENDPOINT, update)
            .await
        {
            Ok(response) => {
                self.store_user(&response.user);
                AuthOutcome::succeeded(Some(response.user))
            }
            Err(err) => {
                warn!("Profile update failed: {err}");
                AuthOutcome::failed(message_or(&err, PROFILE_UPDATE_FAILED))
            }
        }
    }

    pub async fn change_password(&self, current: &str, new: &str) -> AuthOutcome {
        let request = ChangePasswordRequest {
            old_password: current.to_string(),
            new_password: new.to_string(),
        };

        match self
            .client
            .post::<_, MessageResponse>(CHANGE_PASSWORD_ENDPOINT, &request)
            .await
        {
            Ok(_) => AuthOutcome::succeeded(None),
            Err(err) => {
                warn!("Password change failed: {err}");
                AuthOutcome::failed(message_or(&err, PASSWORD_CHANGE_FAILED))
            }
        }
    }

    /// Fetch the signed-in user from the server. Storage is left untouched.
    pub async fn get_profile(&self) -> AuthOutcome {
        match self.client.get::<User>(PROFILE_ENDPOINT).await {
            Ok(user) => AuthOutcome::succeeded(Some(user)),
            Err(err) => {
                warn!("Profile fetch failed: {err}");
                AuthOutcome::failed(PROFILE_FETCH_FAILED)
            }
        }
    }

    fn persist_session(&self, response: &AuthResponse) {
        let storage = self.client.storage();
        storage.set(ACCESS_TOKEN_KEY, &response.access);
        storage.set(REFRESH_TOKEN_KEY, &response.refresh);
        self.store_user(&response.user);
    }

    fn store_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.client.storage().set(USER_KEY, &json),
            Err(err) => error!("Unable to serialize user {}: {err}", user.id),
        }
    }
}

/// The server's `error` or `message` field, else `fallback`.
fn message_or(err: &ApiError, fallback: &str) -> String {
    err.body()
        .and_then(message_field)
        .unwrap_or_else(|| fallback.to_string())
}
