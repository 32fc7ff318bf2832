use crate::config::FrontendConfig;
use crate::navigation::{BrowserLocation, PageLocation};
use crate::routes::MainRoute;
use crate::storage::{ACCESS_TOKEN_KEY, BrowserStorage, REFRESH_TOKEN_KEY, SessionStorage};
use log::{debug, warn};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::models::{TokenRefreshRequest, TokenRefreshResponse};
use std::rc::Rc;
use thiserror::Error;
use yew_router::Routable;

pub const LOGIN_ENDPOINT: &str = "auth/login/";
pub const REGISTER_ENDPOINT: &str = "auth/register/";
pub const LOGOUT_ENDPOINT: &str = "auth/logout/";
pub const TOKEN_REFRESH_ENDPOINT: &str = "auth/token/refresh/";
pub const PROFILE_ENDPOINT: &str = "auth/profile/";
pub const PROFILE_UPDATE_ENDPOINT: &str = "auth/profile/update/";
pub const CHANGE_PASSWORD_ENDPOINT: &str = "auth/change-password/";

thread_local! {
    static SHARED_CLIENT: OnceCell<RecipeLogClient> = const { OnceCell::new() };
}

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response, or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with {status}")]
    Status {
        status: StatusCode,
        /// Decoded response body; non-JSON bodies are kept as a JSON string.
        body: Option<Value>,
    },
}

impl ApiError {
    #[cfg(test)]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::Status { status, .. } => Some(*status),
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Transport(_) => None,
            Self::Status { body, .. } => body.as_ref(),
        }
    }
}

/// API client for the Recipe Log REST service.
///
/// Requests carry the stored access token. A 401 triggers a single refresh
/// through `auth/token/refresh/` followed by one replay of the request; when
/// the refresh itself fails the session is cleared and the page is sent to the
/// login view.
#[derive(Clone, Debug)]
pub struct RecipeLogClient {
    base_url: String,
    client: Client,
    storage: Rc<dyn SessionStorage>,
    location: Rc<dyn PageLocation>,
}

impl RecipeLogClient {
    /// Create a new API client against `config`'s base URL.
    pub fn new(
        config: &FrontendConfig,
        storage: Rc<dyn SessionStorage>,
        location: Rc<dyn PageLocation>,
    ) -> Self {
        Self {
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
            storage,
            location,
        }
    }

    /// The per-thread client backed by `localStorage` and `window.location`.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                Self::new(
                    &FrontendConfig::default(),
                    Rc::new(BrowserStorage),
                    Rc::new(BrowserLocation),
                )
            })
            .clone()
        })
    }

    pub fn storage(&self) -> &Rc<dyn SessionStorage> {
        &self.storage
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.storage.get(ACCESS_TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send the request built by `build`, refreshing credentials once on a 401.
    ///
    /// `build` must not attach credentials itself. The replay after a refresh
    /// is final: if it is rejected again the error goes straight to the caller.
    async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = self.authorize(build()).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return ensure_success(response).await;
        }

        let Some(refresh_token) = self.storage.get(REFRESH_TOKEN_KEY) else {
            return ensure_success(response).await;
        };

        match self.refresh_access_token(&refresh_token).await {
            Ok(access_token) => {
                debug!("Access token refreshed, replaying request");
                let replayed = build().bearer_auth(access_token).send().await?;
                ensure_success(replayed).await
            }
            Err(err) => {
                warn!("Token refresh failed, ending session: {err}");
                self.end_session();
                ensure_success(response).await
            }
        }
    }

    /// Exchange `refresh_token` for a new access token and store the result.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ApiError> {
        let url = self.api_url(TOKEN_REFRESH_ENDPOINT);
        let request = TokenRefreshRequest {
            refresh: refresh_token.to_string(),
        };
        let response = self.client.post(url).json(&request).send().await?;
        let tokens: TokenRefreshResponse = ensure_success(response).await?.json().await?;

        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access);
        if let Some(rotated) = tokens.refresh.as_deref() {
            self.storage.set(REFRESH_TOKEN_KEY, rotated);
        }
        Ok(tokens.access)
    }

    fn end_session(&self) {
        self.storage.clear_session();
        let login_path = MainRoute::Login.to_path();
        if self.location.pathname() != login_path {
            self.location.assign(&login_path);
        }
    }

    /// `GET` a JSON resource.
    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// `POST` a JSON body and decode the JSON answer.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// `PUT` a JSON body and decode the JSON answer.
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || self.client.put(url.clone()).json(body))
            .await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into [`ApiError::Status`], keeping its body.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = if text.is_empty() {
        None
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(value),
            Err(_) => Some(Value::String(text)),
        }
    };
    Err(ApiError::Status { status, body })
}
