use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use staff_registry::workforce::{merge_into, DirectoryClient, DirectoryError, EmployeeRegistry, Position};

const USERS: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "company": {"name": "Romaguera-Crona"}},
    {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "company": {"name": "Deckow-Crist"}},
    {"id": 3, "name": "Clementine", "email": "Nathan@yesenia.net", "company": {"name": "Romaguera-Jacobson"}}
]"#;

const MISSING_COMPANY: &str = r#"[
    {"name": "Leanne Graham", "email": "Sincere@april.biz", "company": {"name": "Romaguera-Crona"}},
    {"name": "Ervin Howell", "email": "Shanna@melissa.tv"}
]"#;

async fn spawn_directory() -> SocketAddr {
    let app = Router::new()
        .route("/users", get(|| async { USERS }))
        .route("/users/missing-company", get(|| async { MISSING_COMPANY }))
        .route("/users/garbage", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/users/unavailable",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test directory serves");
    });
    addr
}

fn client() -> DirectoryClient {
    DirectoryClient::new(Duration::from_secs(5)).expect("client builds")
}

#[tokio::test]
async fn fetch_translates_directory_users() {
    let addr = spawn_directory().await;
    let employees = client()
        .fetch_employees(&format!("http://{addr}/users"))
        .await
        .expect("fetch succeeds");

    assert_eq!(employees.len(), 3);
    assert_eq!(employees[0].first_name(), "Leanne");
    assert_eq!(employees[0].last_name(), "Graham");
    assert_eq!(employees[0].organization(), "Romaguera-Crona");
    assert_eq!(employees[2].last_name(), "");
    assert!(employees
        .iter()
        .all(|employee| employee.position() == Position::Programista
            && employee.compensation() == 8_000.0));

    let mut registry = EmployeeRegistry::new();
    let outcome = merge_into(&mut registry, employees);
    assert_eq!(outcome.added, 3);
    assert_eq!(registry.len(), 3);
}

#[tokio::test]
async fn malformed_entry_fails_the_whole_fetch() {
    let addr = spawn_directory().await;
    let result = client()
        .fetch_employees(&format!("http://{addr}/users/missing-company"))
        .await;

    assert!(matches!(result, Err(DirectoryError::MissingCompany)));
}

#[tokio::test]
async fn non_json_body_is_a_payload_error() {
    let addr = spawn_directory().await;
    let error = client()
        .fetch_employees(&format!("http://{addr}/users/garbage"))
        .await
        .expect_err("payload rejected");

    assert!(matches!(error, DirectoryError::Payload(_)));
    assert!(!error.is_upstream());
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let addr = spawn_directory().await;
    let error = client()
        .fetch_employees(&format!("http://{addr}/users/unavailable"))
        .await
        .expect_err("status rejected");

    match error {
        DirectoryError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "try later");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_directory_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);

    let error = client()
        .fetch_employees(&format!("http://{addr}/users"))
        .await
        .expect_err("connection refused");

    assert!(matches!(error, DirectoryError::Transport(_)));
    assert!(error.is_upstream());
}
