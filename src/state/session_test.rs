use super::*;

fn user(name: &str) -> User {
    User {
        id: "u-1".to_owned(),
        name: name.to_owned(),
        email: "a@b.com".to_owned(),
        role: Role::User,
        department: None,
        position: None,
        phone: None,
    }
}

// =============================================================
// SessionState invariant: authenticated iff token AND user
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn token_alone_is_not_authenticated() {
    let state = SessionState {
        token: Some("t1".to_owned()),
        ..SessionState::default()
    };
    assert!(!state.is_authenticated());
}

#[test]
fn user_alone_is_not_authenticated() {
    let state = SessionState {
        user: Some(user("A")),
        ..SessionState::default()
    };
    assert!(!state.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = SessionState {
        token: Some(String::new()),
        user: Some(user("A")),
        ..SessionState::default()
    };
    assert!(!state.is_authenticated());
}

#[test]
fn token_and_user_together_are_authenticated() {
    let state = SessionState {
        token: Some("t1".to_owned()),
        user: Some(user("A")),
        ..SessionState::default()
    };
    assert!(state.is_authenticated());
}

#[test]
fn role_is_unknown_when_signed_out() {
    assert_eq!(SessionState::default().role(), Role::Unknown);
}

// =============================================================
// SessionStore mutators
// =============================================================

#[test]
fn login_sets_token_and_user_atomically() {
    let store = SessionStore::new();
    store.login("t1".to_owned(), user("A"));

    let state = store.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.expect("user").name, "A");
}

#[test]
fn set_user_replaces_user_and_keeps_token() {
    let store = SessionStore::new();
    store.login("t1".to_owned(), user("A"));
    store.set_user(user("B"));

    let state = store.snapshot();
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.expect("user").name, "B");
}

#[test]
fn set_user_without_token_stays_unauthenticated() {
    let store = SessionStore::new();
    store.set_user(user("A"));
    assert!(!store.is_authenticated());
}

#[test]
fn clear_drops_token_and_user() {
    let store = SessionStore::new();
    store.login("t1".to_owned(), user("A"));
    store.clear();

    let state = store.snapshot();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn loading_flag_toggles_without_touching_identity() {
    let store = SessionStore::new();
    store.login("t1".to_owned(), user("A"));

    store.set_loading(true);
    assert!(store.snapshot().loading);
    assert!(store.is_authenticated());

    store.set_loading(false);
    assert!(!store.snapshot().loading);
}

#[test]
fn restore_off_browser_starts_signed_out() {
    // Native builds have no localStorage, so restore yields a fresh store.
    let store = SessionStore::restore();
    assert!(!store.is_authenticated());
}
