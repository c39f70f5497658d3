mod support;

use portal_core::config::PortalConfig;
use portal_core::error::PortalError;
use portal_core::gateway::PortalApi;
use portal_core::model::{Credentials, ExpenseRequest, RunTasksRequest};
use portal_infrastructure::HttpPortalGateway;
use support::{StubResponse, StubServer};

fn gateway(server: &StubServer, token: Option<&str>) -> HttpPortalGateway {
    let config = PortalConfig::default().with_base_url(server.base_url());
    HttpPortalGateway::new(config, token.map(str::to_string))
}

#[tokio::test]
async fn test_me_sends_session_cookie() {
    let server = StubServer::start().await;
    server.route(
        "GET",
        "/api/me",
        StubResponse::json(
            200,
            r#"{"username":"alice","department":"Finance","modules":["finance"]}"#,
        ),
    );

    let user = gateway(&server, Some("tok-1")).me().await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.modules, vec!["finance"]);

    let requests = server.requests_to("/api/me");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("cookie"), Some("session=tok-1"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_401_becomes_redirect() {
    let server = StubServer::start().await;
    server.route("GET", "/api/me", StubResponse::json(401, r#"{"error":"login required"}"#));
    server.route("GET", "/api/modules", StubResponse::json(401, "{}"));
    server.route("GET", "/api/office/feed", StubResponse::json(401, "{}"));

    let gw = gateway(&server, None);
    for err in [
        gw.me().await.unwrap_err(),
        gw.modules().await.unwrap_err(),
        gw.office_feed().await.unwrap_err(),
    ] {
        assert_eq!(err.redirect_target(), Some("/login.html"));
    }
}

#[tokio::test]
async fn test_modules_failure_other_than_401_is_empty_list() {
    let server = StubServer::start().await;
    server.route("GET", "/api/modules", StubResponse::text(500, "boom"));

    let modules = gateway(&server, None).modules().await.unwrap();
    assert!(modules.is_empty());
}

#[tokio::test]
async fn test_server_error_text_is_surfaced_verbatim() {
    let server = StubServer::start().await;
    server.route(
        "POST",
        "/api/run",
        StubResponse::json(400, r#"{"error":"Unknown tasks: office:nope"}"#),
    );

    let err = gateway(&server, None)
        .run_tasks(&RunTasksRequest {
            tasks: vec!["office:nope".to_string()],
        })
        .await
        .unwrap_err();
    assert_eq!(err, PortalError::request(400, "Unknown tasks: office:nope"));
    assert_eq!(err.to_string(), "Unknown tasks: office:nope");
}

#[tokio::test]
async fn test_expense_body_on_the_wire() {
    let server = StubServer::start().await;
    server.route(
        "POST",
        "/api/finance/expense",
        StubResponse::json(200, r#"{"expense":{"id":1,"status":"pending"}}"#),
    );

    let request = ExpenseRequest::from_form("travel", "120", "taxi").unwrap();
    gateway(&server, None).submit_expense(&request).await.unwrap();

    let posted = server.requests_to("/api/finance/expense");
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].method, "POST");
    let body: serde_json::Value = serde_json::from_str(&posted[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"expense":{"type":"travel","amount":120,"description":"taxi"}})
    );
}

#[tokio::test]
async fn test_list_endpoints_unwrap_items() {
    let server = StubServer::start().await;
    server.route(
        "GET",
        "/api/finance/expenses",
        StubResponse::json(
            200,
            r#"{"items":[{"expense":{"type":"travel","amount":120},"status":"pending","next_approver":"manager"}]}"#,
        ),
    );
    server.route("GET", "/api/oa/approvals", StubResponse::json(200, "{}"));

    let gw = gateway(&server, None);
    let expenses = gw.list_expenses().await.unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].next_approver.as_deref(), Some("manager"));
    assert!(gw.list_approvals().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_captures_cookie_and_401_is_not_a_redirect() {
    let server = StubServer::start().await;
    server.route(
        "POST",
        "/api/login",
        StubResponse::json(200, r#"{"ok":true,"modules":["office"]}"#)
            .with_header("Set-Cookie", "session=fresh; HttpOnly; Path=/"),
    );
    server.route("GET", "/api/me", StubResponse::json(200, r#"{"username":"bob"}"#));

    let gw = gateway(&server, None);
    let login = gw
        .login(&Credentials {
            username: "bob".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert!(login.ok);
    assert_eq!(login.session_token.as_deref(), Some("fresh"));
    assert_eq!(gw.session_token().as_deref(), Some("fresh"));

    gw.me().await.unwrap();
    assert_eq!(
        server.requests_to("/api/me")[0].header("cookie"),
        Some("session=fresh")
    );

    let failing = StubServer::start().await;
    failing.route(
        "POST",
        "/api/login",
        StubResponse::json(401, r#"{"error":"Invalid credentials"}"#),
    );
    let err = gateway(&failing, None)
        .login(&Credentials {
            username: "bob".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(!err.is_unauthenticated());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_logout_clears_session_even_on_failure() {
    let server = StubServer::start().await;
    server.route("POST", "/api/logout", StubResponse::text(500, ""));

    let gw = gateway(&server, Some("old"));
    let err = gw.logout().await.unwrap_err();
    assert_eq!(err, PortalError::request(500, "Internal Server Error"));
    assert!(gw.session_token().is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let config = PortalConfig::default().with_base_url("http://127.0.0.1:1");
    let gw = HttpPortalGateway::new(config, None);
    assert!(gw.me().await.unwrap_err().is_transport());
}

#[tokio::test]
async fn test_logout_with_expired_session_is_unauthenticated() {
    let server = StubServer::start().await;
    server.route("POST", "/api/logout", StubResponse::json(401, "{}"));

    let gw = gateway(&server, Some("stale"));
    let err = gw.logout().await.unwrap_err();
    assert!(err.is_unauthenticated());
    assert!(gw.session_token().is_none());
}
