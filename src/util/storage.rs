//! Session persistence in `localStorage`.
//!
//! The token/user pair is stored as one JSON document under a fixed key so a
//! page reload resumes the signed-in session. Requires a browser
//! environment; the native build (unit tests) gets no-op stubs.

use crate::net::types::User;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "erp_console_session";

#[cfg(target_arch = "wasm32")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PersistedSession {
    token: String,
    user: User,
}

/// Load the persisted session, if any. Corrupt or missing entries read as
/// no session.
pub fn load_session() -> Option<(String, User)> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        let persisted: PersistedSession = serde_json::from_str(&raw).ok()?;
        Some((persisted.token, persisted.user))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist the token/user pair. Storage failures (quota, private mode) are
/// ignored; the in-memory session stays authoritative.
pub fn save_session(token: &str, user: &User) {
    #[cfg(target_arch = "wasm32")]
    {
        let persisted = PersistedSession {
            token: token.to_owned(),
            user: user.clone(),
        };
        if let Ok(raw) = serde_json::to_string(&persisted) {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, user);
    }
}

/// Remove the persisted session.
pub fn clear_session() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
