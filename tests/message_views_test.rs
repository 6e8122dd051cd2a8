//! Message view tests
//!
//! Exercises /messages/new, /messages/{id}, /messages/{id}/delete,
//! /messages/{id}/like, and /messages/{id}/unlike through an HTTP test
//! client.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use warbler::models::message;

#[tokio::test]
async fn test_add_message() {
    let pool = common::test_pool().await;
    let u = common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let server = common::test_server(&pool);
    common::login_as(&server, "testuser", "testuser").await;

    let resp = server.post("/messages/new").form(&[("text", "Hello")]).await;

    // Make sure it redirects
    assert_eq!(resp.status_code(), StatusCode::FOUND);

    let messages = message::messages_for_user(&pool, u.id).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "Hello");
}

#[tokio::test]
async fn test_add_message_requires_login() {
    let pool = common::test_pool().await;
    common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let server = common::test_server(&pool);

    let resp = server.post("/messages/new").form(&[("text", "Hello")]).await;
    assert_eq!(resp.status_code(), StatusCode::FOUND);

    let landing = common::follow_redirect(&server, &resp).await;
    assert!(landing.text().contains("Access unauthorized"));
}

#[tokio::test]
async fn test_add_message_too_long() {
    let pool = common::test_pool().await;
    let u = common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let server = common::test_server(&pool);
    common::login_as(&server, "testuser", "testuser").await;

    let text = "x".repeat(141);
    let resp = server.post("/messages/new").form(&[("text", text.as_str())]).await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(message::messages_for_user(&pool, u.id).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_show_message() {
    let pool = common::test_pool().await;
    let u = common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let server = common::test_server(&pool);
    common::login_as(&server, "testuser", "testuser").await;

    server.post("/messages/new").form(&[("text", "Hello")]).await;
    let m = message::messages_for_user(&pool, u.id).await.unwrap().remove(0);

    let resp = server.get(&format!("/messages/{}", m.id)).await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    let html = resp.text();
    assert!(html.contains("Hello"));
    assert!(html.contains(r#"id="messages""#));

    // Missing message id is a 404
    let resp = server.get("/messages/66666666").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_message() {
    let pool = common::test_pool().await;
    let u = common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let server = common::test_server(&pool);
    common::login_as(&server, "testuser", "testuser").await;

    server.post("/messages/new").form(&[("text", "Hello")]).await;
    let m = message::messages_for_user(&pool, u.id).await.unwrap().remove(0);

    let resp = server.post(&format!("/messages/{}/delete", m.id)).await;
    assert_eq!(resp.status_code(), StatusCode::FOUND);

    let page = common::follow_redirect(&server, &resp).await;
    assert_eq!(page.status_code(), StatusCode::OK);
    let html = page.text();
    assert!(html.contains("user-show"));
    assert!(!html.contains("Hello"));
    assert!(message::get_message(&pool, m.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_message_not_owner() {
    let pool = common::test_pool().await;
    common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let u2 = common::signup_user(&pool, "testuser2", "test2@test.com", "testuser2").await;
    let m2 = message::create_message(&pool, u2.id, "TestMessage2").await.unwrap();

    let server = common::test_server(&pool);
    common::login_as(&server, "testuser", "testuser").await;

    let resp = server.post(&format!("/messages/{}/delete", m2.id)).await;
    assert_eq!(resp.status_code(), StatusCode::FOUND);

    let landing = common::follow_redirect(&server, &resp).await;
    assert!(landing.text().contains("Access unauthorized."));

    // The message was not deleted
    assert!(message::get_message(&pool, m2.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_like_and_unlike_warble() {
    let pool = common::test_pool().await;
    let u = common::signup_user(&pool, "testuser", "test@test.com", "testuser").await;
    let server = common::test_server(&pool);
    common::login_as(&server, "testuser", "testuser").await;

    server.post("/messages/new").form(&[("text", "Hello")]).await;
    let m = message::messages_for_user(&pool, u.id).await.unwrap().remove(0);
    assert_eq!(common::count_likes(&pool).await, 0);

    let resp = server.post(&format!("/messages/{}/like", m.id)).await;
    assert_eq!(resp.status_code(), StatusCode::FOUND);
    assert_eq!(common::count_likes(&pool).await, 1);

    // Liking again keeps exactly one row
    server.post(&format!("/messages/{}/like", m.id)).await;
    assert_eq!(common::count_likes(&pool).await, 1);

    let resp = server.post(&format!("/messages/{}/unlike", m.id)).await;
    assert_eq!(resp.status_code(), StatusCode::FOUND);
    assert_eq!(common::count_likes(&pool).await, 0);

    // Unliking with no row present is a no-op
    let resp = server.post(&format!("/messages/{}/unlike", m.id)).await;
    assert_eq!(resp.status_code(), StatusCode::FOUND);
    assert_eq!(common::count_likes(&pool).await, 0);
}
