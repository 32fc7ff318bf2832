//! Async auth actions that drive the [`AuthState`] store.
//!
//! Each action dispatches its start transition, awaits the service and then
//! dispatches the matching success or failure. Overlapping calls are not
//! serialized; whichever resolves last wins.

use crate::models::{AuthAction, AuthState};
use crate::services::auth::{LOGIN_FAILED, REGISTRATION_FAILED};
use crate::services::{AuthOutcome, AuthService};
use shared::models::{ProfileUpdate, RegisterRequest, User};
use std::fmt;
use yew::hook;
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

/// Store dispatch paired with the service it calls.
#[derive(Clone)]
pub struct AuthActions {
    dispatch: Dispatch<AuthState>,
    service: AuthService,
}

impl fmt::Debug for AuthActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthActions")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl AuthActions {
    pub fn new(dispatch: Dispatch<AuthState>, service: AuthService) -> Self {
        Self { dispatch, service }
    }

    /// Hydrate the store from the persisted session.
    pub fn load_user(&self) {
        let user = if self.service.is_authenticated() {
            self.service.current_user()
        } else {
            None
        };
        self.dispatch.apply(AuthAction::LoadUser(user));
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        self.dispatch.apply(AuthAction::LoginStart);
        let outcome = self.service.login(email, password).await;
        self.dispatch.apply(match (&outcome.user, outcome.success) {
            (Some(user), true) => AuthAction::LoginSuccess(user.clone()),
            _ => AuthAction::LoginFailure(failure_message(&outcome, LOGIN_FAILED)),
        });
        outcome
    }

    pub async fn register(&self, request: RegisterRequest) -> AuthOutcome {
        self.dispatch.apply(AuthAction::RegisterStart);
        let outcome = self.service.register(request).await;
        self.dispatch.apply(match (&outcome.user, outcome.success) {
            (Some(user), true) => AuthAction::RegisterSuccess(user.clone()),
            _ => AuthAction::RegisterFailure(failure_message(&outcome, REGISTRATION_FAILED)),
        });
        outcome
    }

    pub async fn logout(&self) {
        self.service.logout().await;
        self.dispatch.apply(AuthAction::Logout);
    }

    pub fn update_user(&self, user: User) {
        self.dispatch.apply(AuthAction::UpdateUser(user));
    }

    pub fn clear_error(&self) {
        self.dispatch.apply(AuthAction::ClearError);
    }

    /// Save profile changes and reflect the returned user in the store.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> AuthOutcome {
        let outcome = self.service.update_profile(update).await;
        if let (Some(user), true) = (&outcome.user, outcome.success) {
            self.update_user(user.clone());
        }
        outcome
    }
}

fn failure_message(outcome: &AuthOutcome, fallback: &str) -> String {
    outcome
        .error
        .clone()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Auth actions bound to the surrounding `YewduxRoot` and the shared client.
#[hook]
pub fn use_auth_actions() -> AuthActions {
    AuthActions::new(use_dispatch::<AuthState>(), AuthService::shared())
}
