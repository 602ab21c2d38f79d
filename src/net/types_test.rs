use super::*;

// =============================================================
// Role ranking
// =============================================================

#[test]
fn role_ranks_follow_hierarchy() {
    assert_eq!(Role::Admin.rank(), 3);
    assert_eq!(Role::Manager.rank(), 2);
    assert_eq!(Role::User.rank(), 1);
    assert_eq!(Role::Unknown.rank(), 0);
}

#[test]
fn manager_satisfies_user_requirement() {
    assert!(Role::Manager.satisfies(Role::User));
}

#[test]
fn user_does_not_satisfy_admin_requirement() {
    assert!(!Role::User.satisfies(Role::Admin));
}

#[test]
fn unknown_role_satisfies_nothing_real() {
    assert!(!Role::Unknown.satisfies(Role::User));
    assert!(!Role::Unknown.satisfies(Role::Manager));
    assert!(!Role::Unknown.satisfies(Role::Admin));
}

#[test]
fn unknown_requirement_ranks_as_zero() {
    // A real role clears an unrecognized requirement.
    assert!(Role::User.satisfies(Role::Unknown));
}

#[test]
fn unrecognized_role_string_deserializes_to_unknown() {
    let user: User = serde_json::from_str(
        r#"{"id":"1","name":"A","email":"a@b.com","role":"SUPERVISOR"}"#,
    )
    .expect("user");
    assert_eq!(user.role, Role::Unknown);
}

// =============================================================
// AuthResponse user extraction
// =============================================================

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

#[test]
fn auth_response_prefers_enveloped_user() {
    let resp = AuthResponse {
        data: Some(AuthData { user: Some(user("enveloped")) }),
        user: Some(user("top-level")),
        ..AuthResponse::default()
    };
    assert_eq!(resp.into_user().expect("user").name, "enveloped");
}

#[test]
fn auth_response_falls_back_to_top_level_user() {
    let resp = AuthResponse {
        user: Some(user("top-level")),
        ..AuthResponse::default()
    };
    assert_eq!(resp.into_user().expect("user").name, "top-level");
}

#[test]
fn auth_response_without_user_yields_none() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"status":"ok","token":"t1"}"#).expect("response");
    assert!(resp.into_user().is_none());
}

// =============================================================
// Data envelope
// =============================================================

#[test]
fn envelope_decodes_payload_without_a_default_impl() {
    // User deliberately has no Default; the envelope must not demand one.
    let envelope: DataEnvelope<Vec<User>> = serde_json::from_str(
        r#"{"data":[{"id":"1","name":"A","email":"a@b.com","role":"USER"}]}"#,
    )
    .expect("envelope");
    assert_eq!(envelope.data.expect("data")[0].name, "A");
}

#[test]
fn envelope_with_missing_data_key_reads_as_none() {
    let envelope: DataEnvelope<Vec<User>> =
        serde_json::from_str(r#"{"status":"ok"}"#).expect("envelope");
    assert!(envelope.data.is_none());
}

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn error_body_prefers_message_then_error() {
    assert_eq!(
        ErrorBody::extract(r#"{"message":"m1","error":"m2"}"#, "fallback"),
        "m1"
    );
    assert_eq!(ErrorBody::extract(r#"{"error":"m2"}"#, "fallback"), "m2");
}

#[test]
fn error_body_falls_back_on_non_json() {
    assert_eq!(ErrorBody::extract("<html>502</html>", "fallback"), "fallback");
    assert_eq!(ErrorBody::extract("{}", "fallback"), "fallback");
}
