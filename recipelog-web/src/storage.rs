//! Persistent session storage.
//!
//! The session mirror lives under three fixed keys. Tokens are stored as raw
//! strings and the user record as JSON, so the values stay readable by anything
//! else inspecting `localStorage`.

use gloo_storage::{LocalStorage, Storage};
use log::warn;
use std::fmt;

/// Key holding the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Key holding the JSON-serialized user.
pub const USER_KEY: &str = "user";

/// Every key that makes up a session.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// String key/value store backing the session.
///
/// Writes never fail from the caller's point of view; backends log and drop
/// values they cannot persist.
pub trait SessionStorage: fmt::Debug {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);

    /// Whether `key` currently holds a value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove every session key.
    fn clear_session(&self) {
        for key in SESSION_KEYS {
            self.remove(key);
        }
    }
}

/// Browser `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            warn!("Unable to persist {key} to local storage");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
