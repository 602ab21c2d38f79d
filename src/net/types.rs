//! Shared wire types for the remote ERP API.
//!
//! DESIGN
//! ======
//! Every endpoint response is decoded into an explicit serde type here or in
//! the owning service module. Fields the server may omit are `Option`; enum
//! strings the server may extend are caught by `#[serde(other)]` variants so
//! a new value degrades gracefully instead of failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level attached to a user account.
///
/// Unrecognized role strings from the server deserialize to `Unknown`,
/// which ranks below every real role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Rank used for role-hierarchy checks: ADMIN=3, MANAGER=2, USER=1,
    /// anything unrecognized=0.
    pub fn rank(self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Manager => 2,
            Role::User => 1,
            Role::Unknown => 0,
        }
    }

    /// Whether this role satisfies a requirement for `required`.
    pub fn satisfies(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

/// An authenticated user account. Replaced wholesale on refresh, never
/// partially mutated client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Envelope used by the auth endpoints: `{ status, token, data: { user } }`.
///
/// Some deployments return the user at the top level instead of under
/// `data`, so both spots are modeled and `user()` checks them in order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub data: Option<AuthData>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Nested payload of an [`AuthResponse`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthData {
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    /// The user carried by this response, preferring the `data` envelope.
    pub fn into_user(self) -> Option<User> {
        match self.data.and_then(|d| d.user) {
            Some(user) => Some(user),
            None => self.user,
        }
    }
}

/// Generic `{ data: ... }` envelope many endpoints wrap their payloads in.
/// A missing `data` key reads as `None`; no `Default` is required of `T`.
#[derive(Clone, Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// Error body shape returned by the API on non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract a human-readable message from a raw error body, preferring
    /// `message` over `error`, falling back to `fallback` when the body is
    /// not JSON or carries neither field.
    pub fn extract(body: &str, fallback: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| fallback.to_owned())
    }
}
