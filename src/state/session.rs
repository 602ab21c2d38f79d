//! Session state: bearer token, current user, and loading flag.
//!
//! DESIGN
//! ======
//! `SessionState` is a plain value with no reactivity so its transitions can
//! be tested directly. `SessionStore` wraps it in an `RwSignal` provided via
//! context, so every view observing the session re-renders on change, and
//! mirrors token/user changes to `localStorage` so a reload resumes the
//! session. Authentication is derived, never stored: the session is
//! authenticated iff both a non-empty token and a user are present.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::storage;

/// Snapshot of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// True iff both a non-empty token and a user are held.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }

    /// Role of the current user, `Unknown` when signed out.
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Unknown, |u| u.role)
    }
}

/// Shared handle to the session signal. Created once at startup and provided
/// via context; cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    /// Fresh, signed-out store.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Store seeded from the persisted session, if one survives in
    /// `localStorage` from a previous page load.
    pub fn restore() -> Self {
        let store = Self::new();
        if let Some((token, user)) = storage::load_session() {
            store.state.update(|s| {
                s.token = Some(token);
                s.user = Some(user);
            });
        }
        store
    }

    /// The underlying signal, for reactive reads in views.
    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Non-reactive snapshot for use inside async service code.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Current bearer token, if held.
    pub fn token(&self) -> Option<String> {
        self.snapshot().token
    }

    /// Current user, if signed in.
    pub fn user(&self) -> Option<User> {
        self.snapshot().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    /// Record a successful authentication: token and user land together so
    /// no observer ever sees one without the other.
    pub fn login(&self, token: String, user: User) {
        storage::save_session(&token, &user);
        self.state.update(|s| {
            s.token = Some(token);
            s.user = Some(user);
        });
    }

    /// Replace the user only, keeping the current token. Used when the
    /// current-user endpoint returns a fresher profile.
    pub fn set_user(&self, user: User) {
        if let Some(token) = self.token() {
            storage::save_session(&token, &user);
        }
        self.state.update(|s| s.user = Some(user));
    }

    /// Drop token and user, signing the session out. The loading flag is
    /// left alone; callers manage it around their own async work.
    pub fn clear(&self) {
        storage::clear_session();
        self.state.update(|s| {
            s.token = None;
            s.user = None;
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
