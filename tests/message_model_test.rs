//! Message model tests
//!
//! Covers the basic message model, the like relationship and its
//! idempotence, and the cascade when a message is deleted.

mod common;

use pretty_assertions::assert_eq;
use warbler::models::{like, message, user};

#[tokio::test]
async fn test_message_model() {
    let pool = common::test_pool().await;
    let u = user::create_user(&pool, "testuser", "test@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();

    let m = message::create_message(&pool, u.id, "testText").await.unwrap();

    let authored = message::messages_for_user(&pool, u.id).await.unwrap();
    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0].user_id, u.id);
    assert_eq!(m.to_string(), format!("Message: {}, testText, {}", m.id, u.id));
}

#[tokio::test]
async fn test_message_like() {
    let pool = common::test_pool().await;
    let u1 = user::create_user(&pool, "testuser", "test@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();
    let u2 = common::signup_user(&pool, "testuser42", "test_42@test.com", "HASHED_PASSWORD").await;

    let m2 = message::create_message(&pool, u2.id, "testText2").await.unwrap();

    like::like_message(&pool, u1.id, m2.id).await.unwrap();

    let liked = like::liked_messages(&pool, u1.id).await.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, m2.id);

    let row = like::get_like(&pool, u1.id, m2.id).await.unwrap().unwrap();
    assert_eq!(row.user_id, u1.id);
    assert_eq!(row.message_id, m2.id);

    like::unlike_message(&pool, u1.id, m2.id).await.unwrap();
    assert_eq!(like::liked_messages(&pool, u1.id).await.unwrap().len(), 0);
    assert_eq!(common::count_likes(&pool).await, 0);
}

#[tokio::test]
async fn test_like_twice_keeps_one_row() {
    let pool = common::test_pool().await;
    let u = user::create_user(&pool, "testuser", "test@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();
    let m = message::create_message(&pool, u.id, "testText").await.unwrap();

    like::like_message(&pool, u.id, m.id).await.unwrap();
    like::like_message(&pool, u.id, m.id).await.unwrap();

    assert_eq!(common::count_likes(&pool).await, 1);
}

#[tokio::test]
async fn test_unlike_without_like_is_noop() {
    let pool = common::test_pool().await;
    let u = user::create_user(&pool, "testuser", "test@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();
    let m = message::create_message(&pool, u.id, "testText").await.unwrap();

    // No like exists; unliking must not error and must change nothing
    like::unlike_message(&pool, u.id, m.id).await.unwrap();
    assert_eq!(common::count_likes(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_message_cascades_likes() {
    let pool = common::test_pool().await;
    let u = user::create_user(&pool, "testuser", "test@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();
    let m = message::create_message(&pool, u.id, "testText").await.unwrap();
    like::like_message(&pool, u.id, m.id).await.unwrap();

    message::delete_message(&pool, m.id).await.unwrap();

    assert!(message::get_message(&pool, m.id).await.unwrap().is_none());
    assert_eq!(common::count_likes(&pool).await, 0);
}

#[tokio::test]
async fn test_feed_contains_own_and_followed_messages() {
    let pool = common::test_pool().await;
    let u1 = user::create_user(&pool, "testuser1", "test1@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();
    let u2 = user::create_user(&pool, "testuser2", "test2@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();
    let u3 = user::create_user(&pool, "testuser3", "test3@test.com", "HASHED_PASSWORD", None)
        .await
        .unwrap();

    message::create_message(&pool, u1.id, "mine").await.unwrap();
    message::create_message(&pool, u2.id, "followed").await.unwrap();
    message::create_message(&pool, u3.id, "stranger").await.unwrap();

    warbler::models::follows::follow(&pool, u1.id, u2.id).await.unwrap();

    let feed = message::feed_for_user(&pool, u1.id).await.unwrap();
    let texts: Vec<&str> = feed.iter().map(|m| m.text.as_str()).collect();
    assert!(texts.contains(&"mine"));
    assert!(texts.contains(&"followed"));
    assert!(!texts.contains(&"stranger"));
}
