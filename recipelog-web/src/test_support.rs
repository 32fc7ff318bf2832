//! In-process stand-in for the Recipe Log API used by the native test suite.

use crate::api::RecipeLogClient;
use crate::config::FrontendConfig;
use crate::navigation::testing::RecordingLocation;
use crate::storage::MemoryStorage;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::models::User;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};

pub const EMAIL: &str = "julia@example.com";
pub const PASSWORD: &str = "correct-horse";
pub const DISABLED_EMAIL: &str = "disabled@example.com";
/// Account whose profile row was never created; the API sends `"profile": null`.
pub const LEGACY_EMAIL: &str = "legacy@example.com";
pub const ACCESS: &str = "access-1";
pub const REFRESH: &str = "refresh-1";
pub const EXPIRED_ACCESS: &str = "access-expired";
pub const REFRESHED_ACCESS: &str = "access-2";
pub const ROTATED_REFRESH: &str = "refresh-2";
pub const REVOKED_REFRESH: &str = "refresh-revoked";

/// Everything the mock saw, for assertions.
#[derive(Debug, Default)]
pub struct Recorded {
    pub refresh_calls: usize,
    pub logout_tokens: Vec<String>,
    pub registered_usernames: Vec<String>,
    pub profile_authorizations: Vec<Option<String>>,
    pub guarded_hits: usize,
}

/// Behaviour switches for a mock instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockOptions {
    pub rotate_refresh: bool,
    pub fail_logout: bool,
}

#[derive(Clone)]
struct MockState {
    options: MockOptions,
    recorded: Arc<Mutex<Recorded>>,
}

pub struct MockServer {
    pub base_url: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockServer {
    pub async fn start() -> Self {
        Self::start_with(MockOptions::default()).await
    }

    pub async fn start_with(options: MockOptions) -> Self {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = MockState {
            options,
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/api/auth/login/", post(login))
            .route("/api/auth/register/", post(register))
            .route("/api/auth/logout/", post(logout))
            .route("/api/auth/token/refresh/", post(refresh))
            .route("/api/auth/profile/", get(profile))
            .route("/api/auth/profile/update/", put(update_profile))
            .route("/api/auth/change-password/", post(change_password))
            .route("/api/always-unauthorized/", get(always_unauthorized))
            .route("/api/broken/", get(broken))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            recorded,
        }
    }

    pub fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap()
    }

    /// Client bound to this server with fresh in-memory storage at `path`.
    pub fn client_at(&self, path: &str) -> (RecipeLogClient, Rc<MemoryStorage>, Rc<RecordingLocation>) {
        let storage = Rc::new(MemoryStorage::new());
        let location = Rc::new(RecordingLocation::at(path));
        let client = RecipeLogClient::new(
            &FrontendConfig::with_base_url(&self.base_url),
            storage.clone(),
            location.clone(),
        );
        (client, storage, location)
    }

    pub fn client(&self) -> (RecipeLogClient, Rc<MemoryStorage>, Rc<RecordingLocation>) {
        self.client_at("/recipes")
    }
}

pub fn user_json() -> Value {
    json!({
        "id": 42,
        "username": "julia",
        "email": EMAIL,
        "first_name": "Julia",
        "last_name": "Child",
        "date_joined": "2024-03-01T09:30:00Z",
        "profile": {
            "bio": "",
            "avatar": null,
            "created_at": "2024-03-01T09:30:00Z",
            "updated_at": "2024-03-01T09:30:00Z"
        }
    })
}

pub fn sample_user() -> User {
    serde_json::from_value(user_json()).unwrap()
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn is_authorized(headers: &HeaderMap) -> bool {
    matches!(
        bearer(headers).as_deref(),
        Some(value) if value == format!("Bearer {ACCESS}") || value == format!("Bearer {REFRESHED_ACCESS}")
    )
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Given token not valid for any token type" })),
    )
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if email == DISABLED_EMAIL {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "This account has been disabled" })),
        );
    }
    if email == LEGACY_EMAIL && password == PASSWORD {
        let mut user = user_json();
        user["email"] = json!(LEGACY_EMAIL);
        user["profile"] = Value::Null;
        return (
            StatusCode::OK,
            Json(json!({ "user": user, "access": ACCESS, "refresh": REFRESH })),
        );
    }
    if email != EMAIL || password != PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "non_field_errors": ["Invalid email or password."] })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "user": user_json(),
            "access": ACCESS,
            "refresh": REFRESH,
            "message": "Login successful"
        })),
    )
}

async fn register(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or_default().to_string();
    state
        .recorded
        .lock()
        .unwrap()
        .registered_usernames
        .push(username.clone());

    if body["email"] == EMAIL {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "email": ["A user with this email already exists."],
                "username": ["A user with this username already exists."]
            })),
        );
    }

    let mut user = user_json();
    user["id"] = json!(43);
    user["username"] = json!(username);
    user["email"] = body["email"].clone();
    user["first_name"] = body["first_name"].clone();
    user["last_name"] = body["last_name"].clone();

    (
        StatusCode::CREATED,
        Json(json!({
            "user": user,
            "access": ACCESS,
            "refresh": REFRESH,
            "message": "User registered successfully"
        })),
    )
}

async fn logout(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let token = body["refresh"].as_str().unwrap_or_default().to_string();
    state.recorded.lock().unwrap().logout_tokens.push(token);

    if state.options.fail_logout {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Invalid token" })),
        );
    }
    (StatusCode::OK, Json(json!({ "message": "Logout successful" })))
}

async fn refresh(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.recorded.lock().unwrap().refresh_calls += 1;

    let token = body["refresh"].as_str().unwrap_or_default();
    if token != REFRESH && token != ROTATED_REFRESH {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Token is invalid or expired", "code": "token_not_valid" })),
        );
    }

    let body = if state.options.rotate_refresh {
        json!({ "access": REFRESHED_ACCESS, "refresh": ROTATED_REFRESH })
    } else {
        json!({ "access": REFRESHED_ACCESS })
    };
    (StatusCode::OK, Json(body))
}

async fn profile(State(state): State<MockState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    state
        .recorded
        .lock()
        .unwrap()
        .profile_authorizations
        .push(bearer(&headers));

    if !is_authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(user_json()))
}

async fn update_profile(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !is_authorized(&headers) {
        return unauthorized();
    }
    if body["username"] == "" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "username": ["This field may not be blank."] })),
        );
    }

    let mut user = user_json();
    if let Some(update) = body.as_object() {
        for (key, value) in update {
            user[key] = value.clone();
        }
    }
    (
        StatusCode::OK,
        Json(json!({ "user": user, "message": "Profile updated successfully" })),
    )
}

async fn change_password(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !is_authorized(&headers) {
        return unauthorized();
    }
    if body["old_password"] != PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "old_password": ["Old password is incorrect."] })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Password changed successfully" })),
    )
}

async fn always_unauthorized(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    state.recorded.lock().unwrap().guarded_hits += 1;
    unauthorized()
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "upstream unavailable")
}
