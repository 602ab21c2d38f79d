use super::*;
use crate::config::ApiConfig;
use crate::net::fake::FakeHttp;
use crate::state::session::SessionStore;
use futures::executor::block_on;

fn dashboard_api(http: FakeHttp) -> DashboardApi<FakeHttp> {
    let session = SessionStore::new();
    session.login(
        "t1".to_owned(),
        crate::net::types::User {
            id: "u-1".to_owned(),
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            role: crate::net::types::Role::Admin,
            department: None,
            position: None,
            phone: None,
        },
    );
    DashboardApi::new(ApiClient::new(
        http,
        ApiConfig::with_base_url("http://localhost:5001"),
        session,
    ))
}

#[test]
fn stats_unwrap_envelope_and_default_missing_fields() {
    let http = FakeHttp::new();
    http.push_response(200, r#"{"data":{"totalOrders":42,"monthlyRevenue":9000.5}}"#);
    let api = dashboard_api(http.clone());

    let stats = block_on(api.stats()).expect("stats");

    assert_eq!(stats.total_orders, 42);
    assert_eq!(stats.pending_orders, 0);
    assert!((stats.monthly_revenue - 9000.5).abs() < f64::EPSILON);

    let sent = http.only_request();
    assert_eq!(sent.url, "http://localhost:5001/api/dashboard/stats");
    assert_eq!(sent.header("Authorization"), Some("Bearer t1"));
}

#[test]
fn recent_orders_accept_bare_array() {
    let http = FakeHttp::new();
    http.push_response(
        200,
        r#"[{"id":"po-1","orderNumber":"PO-1","supplier":"Acme","totalAmount":10.0,"status":"PENDING"}]"#,
    );
    let api = dashboard_api(http);

    let orders = block_on(api.recent_orders()).expect("orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].supplier, "Acme");
}

#[test]
fn work_orders_tolerate_missing_optional_fields() {
    let http = FakeHttp::new();
    http.push_response(200, r#"{"data":[{"id":"wo-1","title":"Fix press"}]}"#);
    let api = dashboard_api(http);

    let orders = block_on(api.work_orders()).expect("orders");
    assert_eq!(orders[0].assignee, None);
    assert_eq!(orders[0].due_date, None);
}

#[test]
fn one_widget_failing_does_not_affect_another() {
    let http = FakeHttp::new();
    http.push_response(500, "oops");
    http.push_response(200, r#"{"data":[]}"#);
    let api = dashboard_api(http);

    assert!(matches!(
        block_on(api.stats()),
        Err(ApiError::Status { status: 500, .. })
    ));
    // The next widget's fetch still succeeds on its own.
    assert!(block_on(api.recent_orders()).expect("orders").is_empty());
}
