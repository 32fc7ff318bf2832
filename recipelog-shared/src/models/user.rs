use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile details embedded in every [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Free-form biography, empty when unset.
    #[serde(default)]
    pub bio: String,

    /// Reference to the uploaded avatar, if any.
    #[serde(default)]
    pub avatar: Option<String>,

    /// When the profile was created.
    pub created_at: DateTime<Utc>,

    /// When the profile was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Represents an account as returned by the API.
///
/// The record is owned by the server; the client only caches it and replaces
/// it wholesale after a profile update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Numeric identifier assigned by the server.
    pub id: i64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// Given name.
    #[serde(default)]
    pub first_name: String,

    /// Family name.
    #[serde(default)]
    pub last_name: String,

    /// When the account was created.
    pub date_joined: DateTime<Utc>,

    /// Embedded profile; `null` for accounts created before profiles existed.
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl User {
    /// Returns "first last", skipping whichever half is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Partial update sent to `PUT /auth/profile/update/`.
///
/// Only the populated fields are serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
