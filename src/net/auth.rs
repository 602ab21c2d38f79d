//! Auth client: login, registration, session refresh, profile updates.
//!
//! ERROR HANDLING
//! ==============
//! Auth operations resolve to typed results and leave the session
//! consistent on every path: a failed login/register clears it, a 401 on
//! the current-user call clears it, and logout clears it even when the
//! server call fails. Nothing here panics on a bad response.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use crate::net::client::{ApiClient, ApiError, HttpClient, Method};
use crate::net::types::{AuthResponse, Role, User};
use crate::state::session::SessionStore;
use crate::util::browser;

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";
const PROFILE_FALLBACK: &str = "Profile update failed";

/// Fields for a new account. Role and contact fields are optional; the
/// server fills defaults.
#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial profile update; only the set fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the `/api/auth` endpoints, updating the session store on each
/// call's outcome.
#[derive(Clone)]
pub struct AuthApi<C> {
    api: ApiClient<C>,
}

impl<C: HttpClient> AuthApi<C> {
    pub fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    pub fn session(&self) -> SessionStore {
        self.api.session()
    }

    /// Sign in with credentials.
    ///
    /// A 2xx response carrying both a token and a user authenticates the
    /// session; any other outcome (bad status, missing fields, transport
    /// failure) clears it. The loading flag is always dropped before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns the typed failure; the session is already cleared by then.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.session().set_loading(true);
        let result = self
            .authenticate("/api/auth/login", &LoginPayload { email, password }, LOGIN_FALLBACK)
            .await;
        if result.is_err() {
            self.session().clear();
        }
        self.session().set_loading(false);
        result
    }

    /// Create an account and sign in. Same session contract as [`login`].
    ///
    /// # Errors
    ///
    /// Returns the typed failure; the session is already cleared by then.
    ///
    /// [`login`]: AuthApi::login
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.session().set_loading(true);
        let result = self
            .authenticate("/api/auth/register", registration, REGISTER_FALLBACK)
            .await;
        if result.is_err() {
            self.session().clear();
        }
        self.session().set_loading(false);
        result
    }

    async fn authenticate<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
        fallback: &str,
    ) -> Result<User, ApiError> {
        let response = self.api.send_json(Method::Post, endpoint, payload).await?;
        if !response.ok() {
            return Err(response.into_error(fallback));
        }
        let auth: AuthResponse = response.json()?;
        let token = auth.token.clone().filter(|t| !t.is_empty());
        match (token, auth.into_user()) {
            (Some(token), Some(user)) => {
                self.session().login(token, user.clone());
                Ok(user)
            }
            _ => Err(ApiError::Decode(
                "auth response missing token or user".to_owned(),
            )),
        }
    }

    /// Fetch the current user and refresh the stored one.
    ///
    /// Skips the network entirely when no token is held. A 401 invalidates
    /// the session; any other failure returns `None` and leaves the session
    /// untouched.
    pub async fn current_user(&self) -> Option<User> {
        self.session().token()?;
        let response = match self.api.get("/api/auth/me").await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("current-user fetch failed: {e}");
                return None;
            }
        };
        if response.status == 401 {
            self.session().clear();
            return None;
        }
        if !response.ok() {
            return None;
        }
        let user = Self::decode_user(&response.body)?;
        self.session().set_user(user.clone());
        Some(user)
    }

    /// Update the signed-in user's profile and return the server's echo.
    ///
    /// Deliberately does not touch the stored user; callers refresh via
    /// [`current_user`] when they want the new profile reflected.
    ///
    /// # Errors
    ///
    /// Returns the typed failure for the caller to display.
    ///
    /// [`current_user`]: AuthApi::current_user
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let response = self
            .api
            .send_json(Method::Patch, "/api/auth/me", update)
            .await?;
        if !response.ok() {
            return Err(response.into_error(PROFILE_FALLBACK));
        }
        Self::decode_user(&response.body)
            .ok_or_else(|| ApiError::Decode("profile response missing user".to_owned()))
    }

    /// Sign out: best-effort server invalidation, then an unconditional
    /// session clear and redirect to the sign-in page. A failing server
    /// call is logged, never surfaced, and never blocks the local logout.
    pub async fn logout(&self) {
        match self.api.request(Method::Post, "/api/auth/logout", &[], None).await {
            Ok(response) if !response.ok() => {
                log::warn!("server logout returned {}", response.status);
            }
            Err(e) => log::warn!("server logout failed: {e}"),
            Ok(_) => {}
        }
        self.session().clear();
        browser::redirect_to_login();
    }

    /// Synchronous session check, no network.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Whether the current user's role ranks at or above `required`. A
    /// signed-out session ranks as `Unknown`.
    pub fn has_role(&self, required: Role) -> bool {
        self.session().snapshot().role().satisfies(required)
    }

    /// Tolerant decode of a user payload: enveloped `{data:{user}}` or
    /// `{user}` first, then a bare user object.
    fn decode_user(body: &str) -> Option<User> {
        if let Some(user) =
            serde_json::from_str::<AuthResponse>(body).ok().and_then(AuthResponse::into_user)
        {
            return Some(user);
        }
        serde_json::from_str::<User>(body).ok()
    }
}
