//! User-then-admin dashboard resolution.

mod common;

use cinedeck::api::{resolve_dashboard, DashboardView};
use common::*;

#[tokio::test]
async fn user_dashboard_needs_one_request() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/dashboard/user", MockResponse::json(user_dashboard_json()))
        .await;

    let response = resolve_dashboard(&client_for(&backend), "access-123").await;
    assert!(matches!(
        response.data(),
        Some(DashboardView::User(user)) if user.username == "alice"
    ));

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("authorization"), Some("Bearer access-123"));
}

#[tokio::test]
async fn forbidden_user_dashboard_falls_back_to_admin_once() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/dashboard/user", MockResponse::error(403, "Not enough permissions"))
        .await;
    backend
        .enqueue("/dashboard/admin", MockResponse::json(admin_dashboard_json()))
        .await;

    let response = resolve_dashboard(&client_for(&backend), "access-123").await;
    match response.data() {
        Some(DashboardView::Admin(admin)) => {
            assert_eq!(admin.system_stats.total_users, 42);
            assert_eq!(admin.system_stats.active_penalties, 3);
        }
        other => panic!("expected admin dashboard, got {other:?}"),
    }

    let paths: Vec<_> = backend
        .captured_requests()
        .await
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(paths, vec!["/dashboard/user", "/dashboard/admin"]);
}

#[tokio::test]
async fn forbidden_twice_is_an_error_without_third_request() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/dashboard/user", MockResponse::error(403, "Not enough permissions"))
        .await;
    backend
        .enqueue("/dashboard/admin", MockResponse::error(403, "Not enough permissions"))
        .await;

    let response = resolve_dashboard(&client_for(&backend), "access-123").await;
    assert_eq!(response.error(), Some("Failed to load dashboard"));
    assert_eq!(backend.captured_requests().await.len(), 2);
}

#[tokio::test]
async fn other_user_failure_does_not_try_admin() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/dashboard/user", MockResponse::error(401, "Could not validate credentials"))
        .await;

    let response = resolve_dashboard(&client_for(&backend), "expired").await;
    assert_eq!(response.error(), Some("Failed to load dashboard"));
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn server_error_does_not_try_admin() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/dashboard/user", MockResponse::text(500, "Internal Server Error"))
        .await;

    let response = resolve_dashboard(&client_for(&backend), "access-123").await;
    assert_eq!(response.error(), Some("Failed to load dashboard"));
    assert_eq!(backend.requests_to("/dashboard/admin").await.len(), 0);
}

#[tokio::test]
async fn admin_failure_after_forbidden_is_an_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/dashboard/user", MockResponse::error(403, "Not enough permissions"))
        .await;
    backend
        .enqueue("/dashboard/admin", MockResponse::error(500, "database down"))
        .await;

    let response = resolve_dashboard(&client_for(&backend), "access-123").await;
    assert_eq!(response.error(), Some("Failed to load dashboard"));
    assert_eq!(backend.captured_requests().await.len(), 2);
}
