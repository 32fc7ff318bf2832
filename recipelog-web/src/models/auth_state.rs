//! Global authentication state and its transitions.

use shared::models::User;
use std::rc::Rc;
use yewdux::Store;
use yewdux::prelude::Reducer;

/// Session state shared by every component through `yewdux`.
///
/// `is_loading` starts out `true` until the persisted session has been read.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
            error: None,
        }
    }
}

/// Every transition the auth store knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStart,
    LoginSuccess(User),
    LoginFailure(String),
    RegisterStart,
    RegisterSuccess(User),
    RegisterFailure(String),
    Logout,
    /// Hydrate from storage; `None` when no session is persisted.
    LoadUser(Option<User>),
    UpdateUser(User),
    ClearError,
}

impl AuthState {
    /// Derived from `user`, so it can never disagree with it.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Apply a single action.
    #[must_use]
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginStart | AuthAction::RegisterStart => Self {
                is_loading: true,
                error: None,
                ..self
            },
            AuthAction::LoginSuccess(user) | AuthAction::RegisterSuccess(user) => Self {
                user: Some(user),
                is_loading: false,
                error: None,
            },
            AuthAction::LoginFailure(error) | AuthAction::RegisterFailure(error) => Self {
                user: None,
                is_loading: false,
                error: Some(error),
            },
            AuthAction::Logout => Self {
                user: None,
                is_loading: false,
                error: None,
            },
            AuthAction::LoadUser(user) => Self {
                user,
                is_loading: false,
                ..self
            },
            AuthAction::UpdateUser(user) => Self {
                user: Some(user),
                ..self
            },
            AuthAction::ClearError => Self { error: None, ..self },
        }
    }
}

impl Reducer<AuthState> for AuthAction {
    fn apply(self, state: Rc<AuthState>) -> Rc<AuthState> {
        Rc::new(Rc::unwrap_or_clone(state).reduce(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::UserProfile;

    fn user(username: &str) -> User {
        let joined = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        User {
            id: 1,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: String::new(),
            last_name: String::new(),
            date_joined: joined,
            profile: Some(UserProfile {
                bio: String::new(),
                avatar: None,
                created_at: joined,
                updated_at: joined,
            }),
        }
    }

    fn signed_in() -> AuthState {
        AuthState::default().reduce(AuthAction::LoadUser(Some(user("julia"))))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = AuthState::default();
        assert!(state.is_loading);
        assert!(!state.is_authenticated());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_start_clears_error_and_keeps_user() {
        let state = AuthState {
            error: Some("old".to_string()),
            ..signed_in()
        };

        for action in [AuthAction::LoginStart, AuthAction::RegisterStart] {
            let next = state.clone().reduce(action);
            assert!(next.is_loading);
            assert!(next.error.is_none());
            assert_eq!(next.user, state.user);
        }
    }

    #[test]
    fn test_success_sets_user() {
        let next = AuthState::default()
            .reduce(AuthAction::LoginStart)
            .reduce(AuthAction::LoginSuccess(user("julia")));
        assert!(next.is_authenticated());
        assert!(!next.is_loading);
        assert!(next.error.is_none());

        let next = AuthState::default().reduce(AuthAction::RegisterSuccess(user("jacques")));
        assert_eq!(next.user.map(|user| user.username), Some("jacques".to_string()));
    }

    #[test]
    fn test_failure_clears_user_and_records_error() {
        let next = signed_in()
            .reduce(AuthAction::LoginStart)
            .reduce(AuthAction::LoginFailure("Login failed".to_string()));
        assert!(!next.is_authenticated());
        assert!(!next.is_loading);
        assert_eq!(next.error.as_deref(), Some("Login failed"));

        let next = AuthState::default().reduce(AuthAction::RegisterFailure("taken".to_string()));
        assert_eq!(next.error.as_deref(), Some("taken"));
        assert!(!next.is_loading);
    }

    #[test]
    fn test_logout_resets() {
        let state = AuthState {
            error: Some("stale".to_string()),
            ..signed_in()
        };
        let next = state.reduce(AuthAction::Logout);
        assert_eq!(
            next,
            AuthState {
                user: None,
                is_loading: false,
                error: None,
            }
        );
    }

    #[test]
    fn test_load_user_keeps_error() {
        let state = AuthState {
            error: Some("kept".to_string()),
            ..AuthState::default()
        };
        let next = state.reduce(AuthAction::LoadUser(None));
        assert!(!next.is_loading);
        assert!(!next.is_authenticated());
        assert_eq!(next.error.as_deref(), Some("kept"));
    }

    #[test]
    fn test_update_user_touches_only_user() {
        let state = AuthState {
            is_loading: true,
            error: Some("kept".to_string()),
            ..signed_in()
        };
        let next = state.reduce(AuthAction::UpdateUser(user("julie")));
        assert_eq!(next.user.map(|user| user.username), Some("julie".to_string()));
        assert!(next.is_loading);
        assert_eq!(next.error.as_deref(), Some("kept"));
    }

    #[test]
    fn test_clear_error_touches_only_error() {
        let state = AuthState {
            error: Some("gone".to_string()),
            ..signed_in()
        };
        let next = state.clone().reduce(AuthAction::ClearError);
        assert!(next.error.is_none());
        assert_eq!(next.user, state.user);
        assert_eq!(next.is_loading, state.is_loading);
    }

    #[test]
    fn test_reducer_applies_through_rc() {
        let state = Rc::new(AuthState::default());
        let next = AuthAction::LoadUser(Some(user("julia"))).apply(state);
        assert!(next.is_authenticated());
        assert!(!next.is_loading);
    }
}
