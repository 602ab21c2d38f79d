use super::*;
use crate::net::fake::FakeHttp;
use futures::executor::block_on;

fn client(http: FakeHttp) -> ApiClient<FakeHttp> {
    ApiClient::new(
        http,
        ApiConfig::with_base_url("http://localhost:5001"),
        SessionStore::new(),
    )
}

fn caller_headers(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(n, v)| ((*n).to_owned(), (*v).to_owned()))
        .collect()
}

// =============================================================
// URL resolution
// =============================================================

#[test]
fn relative_endpoint_is_prefixed_exactly_once() {
    assert_eq!(
        resolve_url("http://localhost:5001", "/api/auth/me"),
        "http://localhost:5001/api/auth/me"
    );
}

#[test]
fn bare_endpoint_gains_a_separating_slash() {
    assert_eq!(
        resolve_url("http://localhost:5001", "api/auth/me"),
        "http://localhost:5001/api/auth/me"
    );
}

#[test]
fn absolute_url_is_not_rewritten() {
    assert_eq!(
        resolve_url("http://localhost:5001", "https://other.example.com/x"),
        "https://other.example.com/x"
    );
    assert_eq!(
        resolve_url("http://localhost:5001", "http://other.example.com/x"),
        "http://other.example.com/x"
    );
}

// =============================================================
// Header merging
// =============================================================

#[test]
fn default_content_type_is_json() {
    let headers = merge_headers(None, &[]);
    assert_eq!(
        headers,
        vec![("Content-Type".to_owned(), "application/json".to_owned())]
    );
}

#[test]
fn token_adds_bearer_authorization() {
    let headers = merge_headers(Some("t1"), &[]);
    assert!(
        headers
            .iter()
            .any(|(n, v)| n == "Authorization" && v == "Bearer t1")
    );
}

#[test]
fn empty_token_adds_no_authorization() {
    let headers = merge_headers(Some(""), &[]);
    assert!(headers.iter().all(|(n, _)| n != "Authorization"));
}

#[test]
fn caller_headers_win_on_conflict() {
    let headers = merge_headers(None, &caller_headers(&[("content-type", "text/plain")]));
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].1, "text/plain");
}

#[test]
fn caller_headers_extend_defaults() {
    let headers = merge_headers(Some("t1"), &caller_headers(&[("X-Request-Id", "r-1")]));
    assert_eq!(headers.len(), 3);
    assert!(headers.iter().any(|(n, v)| n == "X-Request-Id" && v == "r-1"));
}

// =============================================================
// ApiClient::request
// =============================================================

#[test]
fn request_attaches_token_from_session() {
    let http = FakeHttp::new();
    http.push_response(200, "{}");
    let api = client(http.clone());
    api.session().login(
        "t9".to_owned(),
        crate::net::types::User {
            id: "1".to_owned(),
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            role: crate::net::types::Role::User,
            department: None,
            position: None,
            phone: None,
        },
    );

    let response = block_on(api.get("/api/auth/me")).expect("response");

    assert!(response.ok());
    let sent = http.only_request();
    assert_eq!(sent.url, "http://localhost:5001/api/auth/me");
    assert_eq!(sent.header("Authorization"), Some("Bearer t9"));
}

#[test]
fn request_without_token_has_no_authorization_header() {
    let http = FakeHttp::new();
    http.push_response(200, "{}");
    let api = client(http.clone());

    block_on(api.get("/api/auth/login")).expect("response");

    assert_eq!(http.only_request().header("Authorization"), None);
}

#[test]
fn non_2xx_status_is_returned_not_an_error() {
    let http = FakeHttp::new();
    http.push_response(404, r#"{"message":"not found"}"#);
    let api = client(http.clone());

    let response = block_on(api.get("/api/purchase/orders/42")).expect("response");

    assert!(!response.ok());
    assert_eq!(response.status, 404);
}

#[test]
fn into_error_extracts_server_message() {
    let response = ApiResponse {
        status: 422,
        body: r#"{"message":"bad supplier"}"#.to_owned(),
    };
    match response.into_error("request failed") {
        ApiError::Status { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "bad supplier");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn gloo_client_fails_off_browser() {
    let result = block_on(GlooClient.send(ApiRequest {
        method: Method::Get,
        url: "http://localhost:5001/api/auth/me".to_owned(),
        headers: vec![],
        body: None,
    }));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
