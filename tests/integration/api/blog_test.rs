//! Blog API integration tests
//!
//! Posts, ownership rules and comments through the HTTP surface.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{register_user, TestApp, TestUser};

async fn create_post(app: &TestApp, author: &TestUser, title: &str) -> Value {
    let response = app
        .post(
            "/api/blog",
            json!({"title": title, "content": "Body text", "tags": ["rust"]}),
            Some(&author.token),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);
    response.body["data"].clone()
}

#[tokio::test]
async fn test_create_post_sets_author_and_defaults() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;

    let post = create_post(&app, &ada, "First post").await;

    assert_eq!(post["title"], "First post");
    assert_eq!(post["authorId"], ada.id.as_str());
    assert_eq!(post["published"], true);
    assert_eq!(post["excerpt"], "");
    assert_eq!(post["tags"], json!(["rust"]));
    assert_eq!(post["author"]["username"], "ada");
    assert!(post.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_post_ignores_client_author() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let bob = register_user(&app, "bob").await;

    let response = app
        .post(
            "/api/blog",
            json!({"title": "T", "content": "C", "authorId": bob.id}),
            Some(&ada.token),
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["data"]["authorId"], ada.id.as_str());
}

#[tokio::test]
async fn test_create_post_requires_title_and_content() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;

    let response = app
        .post("/api/blog", json!({"title": "Only title"}), Some(&ada.token))
        .await;

    assert_failure!(
        response,
        StatusCode::BAD_REQUEST,
        "Please provide all required fields"
    );
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::new();

    let response = app
        .post("/api/blog", json!({"title": "T", "content": "C"}), None)
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    create_post(&app, &ada, "Older").await;
    create_post(&app, &ada, "Newer").await;

    let response = app.get("/api/blog").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["count"], 2);
    let titles: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_empty_blog_list() {
    let app = TestApp::new();

    let response = app.get("/api/blog").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["count"], 0);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_get_post_includes_comments() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let bob = register_user(&app, "bob").await;
    let post = create_post(&app, &ada, "Commented").await;
    let id = post["id"].as_str().unwrap();

    app.post(
        &format!("/api/blog/{}/comments", id),
        json!({"body": "Nice"}),
        Some(&bob.token),
    )
    .await;

    let response = app.get(&format!("/api/blog/{}", id)).await;

    assert_status!(response, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["title"], "Commented");
    assert_eq!(data["author"]["email"], "ada@example.com");
    assert_eq!(data["comments"].as_array().unwrap().len(), 1);
    assert_eq!(data["comments"][0]["body"], "Nice");
    assert_eq!(data["comments"][0]["author"]["username"], "bob");
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::new();

    let missing = app
        .get(&format!("/api/blog/{}", uuid::Uuid::new_v4()))
        .await;
    let malformed = app.get("/api/blog/not-a-uuid").await;

    assert_failure!(missing, StatusCode::NOT_FOUND, "Blog post not found");
    assert_failure!(malformed, StatusCode::NOT_FOUND, "Blog post not found");
}

#[tokio::test]
async fn test_update_post_by_author() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let post = create_post(&app, &ada, "Draft").await;
    let id = post["id"].as_str().unwrap();

    let response = app
        .put(
            &format!("/api/blog/{}", id),
            json!({"title": "Final", "published": false}),
            &ada.token,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["title"], "Final");
    assert_eq!(data["published"], false);
    assert_eq!(data["content"], "Body text");
    assert_eq!(data["authorId"], ada.id.as_str());
    assert_eq!(data["createdAt"], post["createdAt"]);
}

#[tokio::test]
async fn test_update_post_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let mallory = register_user(&app, "mallory").await;
    let post = create_post(&app, &ada, "Mine").await;
    let id = post["id"].as_str().unwrap();

    let response = app
        .put(
            &format!("/api/blog/{}", id),
            json!({"title": "Hijacked"}),
            &mallory.token,
        )
        .await;
    assert_failure!(
        response,
        StatusCode::FORBIDDEN,
        "Not authorized to update this blog post"
    );

    let unchanged = app.get(&format!("/api/blog/{}", id)).await;
    assert_eq!(unchanged.body["data"]["title"], "Mine");
}

#[tokio::test]
async fn test_update_missing_post_is_not_found_before_ownership() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;

    let response = app
        .put(
            &format!("/api/blog/{}", uuid::Uuid::new_v4()),
            json!({"title": "x"}),
            &ada.token,
        )
        .await;

    assert_failure!(response, StatusCode::NOT_FOUND, "Blog post not found");
}

#[tokio::test]
async fn test_delete_post_removes_its_comments() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let keep = create_post(&app, &ada, "Keep").await;
    let doomed = create_post(&app, &ada, "Drop").await;
    let keep_id = keep["id"].as_str().unwrap();
    let drop_id = doomed["id"].as_str().unwrap();

    for id in [keep_id, drop_id] {
        app.post(
            &format!("/api/blog/{}/comments", id),
            json!({"body": "hello"}),
            Some(&ada.token),
        )
        .await;
    }

    let response = app.delete(&format!("/api/blog/{}", drop_id), &ada.token).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Blog post and associated comments deleted successfully"
    );

    let gone = app.get(&format!("/api/blog/{}", drop_id)).await;
    assert_status!(gone, StatusCode::NOT_FOUND);

    let orphaned = app.get(&format!("/api/blog/{}/comments", drop_id)).await;
    assert_eq!(orphaned.body["count"], 0);

    let kept = app.get(&format!("/api/blog/{}/comments", keep_id)).await;
    assert_eq!(kept.body["count"], 1);
}

#[tokio::test]
async fn test_delete_post_succeeds_when_comment_purge_fails() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let post = create_post(&app, &ada, "Doomed").await;
    let id = post["id"].as_str().unwrap();

    app.store.set_comment_purge_failure(true);
    let response = app.delete(&format!("/api/blog/{}", id), &ada.token).await;

    assert_status!(response, StatusCode::OK);
    let gone = app.get(&format!("/api/blog/{}", id)).await;
    assert_status!(gone, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let mallory = register_user(&app, "mallory").await;
    let post = create_post(&app, &ada, "Mine").await;
    let id = post["id"].as_str().unwrap();

    let response = app.delete(&format!("/api/blog/{}", id), &mallory.token).await;

    assert_failure!(
        response,
        StatusCode::FORBIDDEN,
        "Not authorized to delete this blog post"
    );
    let still_there = app.get(&format!("/api/blog/{}", id)).await;
    assert_status!(still_there, StatusCode::OK);
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;

    let response = app
        .post(
            &format!("/api/blog/{}/comments", uuid::Uuid::new_v4()),
            json!({"body": "hello?"}),
            Some(&ada.token),
        )
        .await;

    assert_failure!(response, StatusCode::NOT_FOUND, "Blog post not found");
}

#[tokio::test]
async fn test_comment_requires_body() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let post = create_post(&app, &ada, "Quiet").await;

    let response = app
        .post(
            &format!("/api/blog/{}/comments", post["id"].as_str().unwrap()),
            json!({"body": "   "}),
            Some(&ada.token),
        )
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_comment_returns_author() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;
    let bob = register_user(&app, "bob").await;
    let post = create_post(&app, &ada, "Hello").await;
    let id = post["id"].as_str().unwrap();

    let response = app
        .post(
            &format!("/api/blog/{}/comments", id),
            json!({"body": "First!"}),
            Some(&bob.token),
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["body"], "First!");
    assert_eq!(data["postId"], id);
    assert_eq!(data["authorId"], bob.id.as_str());
    assert_eq!(data["author"], json!({"id": bob.id, "username": "bob"}));
}

#[tokio::test]
async fn test_list_comments_for_unknown_post_is_empty() {
    let app = TestApp::new();

    let unknown = app
        .get(&format!("/api/blog/{}/comments", uuid::Uuid::new_v4()))
        .await;
    let malformed = app.get("/api/blog/nope/comments").await;

    for response in [unknown, malformed] {
        assert_status!(response, StatusCode::OK);
        assert_eq!(response.body["count"], 0);
        assert_eq!(response.body["data"], json!([]));
    }
}
