//! PostgreSQL store tests

use assert_matches::assert_matches;
use uuid::Uuid;

use crate::common::database::create_test_store;
use portfolio_api::backend::store::{
    BlogStore, ContactStore, PgStore, ProjectStore, StoreError, UserStore,
};
use portfolio_api::shared::models::{
    BlogPostPatch, NewBlogPost, NewComment, NewContactMessage, NewProject, NewUser, ProjectPatch,
    User,
};

async fn insert_unique_user(store: &PgStore) -> User {
    let tag = Uuid::new_v4().simple().to_string();
    store
        .insert_user(NewUser {
            username: format!("user_{}", tag),
            email: format!("user_{}@example.com", tag),
            password_hash: "$2b$04$placeholderplaceholderplaceholderpl".to_string(),
        })
        .await
        .expect("insert user")
}

fn new_post(author_id: Uuid, title: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        content: "Body".to_string(),
        excerpt: String::new(),
        tags: vec!["rust".to_string(), "sql".to_string()],
        published: true,
        author_id,
    }
}

#[tokio::test]
#[ignore] // Requires PostgreSQL at DATABASE_URL
async fn test_migrations_are_idempotent() {
    let store = create_test_store().await;
    assert!(store.migrate().await.is_ok());

    for table in ["users", "blog_posts", "comments", "projects", "contact_messages"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(store.pool())
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
#[ignore] // Requires PostgreSQL at DATABASE_URL
async fn test_duplicate_user_is_reported() {
    let store = create_test_store().await;
    let user = insert_unique_user(&store).await;

    let result = store
        .insert_user(NewUser {
            username: format!("{}_other", user.username),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        })
        .await;
    assert_matches!(result, Err(StoreError::Duplicate { .. }));

    let found = store
        .find_user_by_email_or_username("nobody@example.com", &user.username)
        .await
        .unwrap()
        .expect("found by username");
    assert_eq!(found.id, user.id);
    assert_eq!(found.password_hash, user.password_hash);
}

#[tokio::test]
#[ignore] // Requires PostgreSQL at DATABASE_URL
async fn test_post_lifecycle_with_comments() {
    let store = create_test_store().await;
    let author = insert_unique_user(&store).await;

    let post = store.insert_post(new_post(author.id, "Stored")).await.unwrap();
    assert_eq!(post.tags, vec!["rust", "sql"]);

    let view = store.find_post_view(post.id).await.unwrap().expect("view");
    assert_eq!(view.author.as_ref().map(|a| a.id), Some(author.id));

    let updated = store
        .update_post(
            post.id,
            BlogPostPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("updated");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "Body");
    assert!(updated.updated_at >= post.updated_at);

    for body in ["one", "two"] {
        store
            .insert_comment(NewComment {
                body: body.to_string(),
                author_id: author.id,
                post_id: post.id,
            })
            .await
            .unwrap();
    }
    let comments = store.list_comments(post.id).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment.body, "two");
    assert_eq!(
        comments[0].author.as_ref().map(|a| a.username.as_str()),
        Some(author.username.as_str())
    );

    assert!(store.delete_post(post.id).await.unwrap());
    assert_eq!(store.delete_comments_for_post(post.id).await.unwrap(), 2);
    assert!(store.find_post(post.id).await.unwrap().is_none());
    assert!(!store.delete_post(post.id).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires PostgreSQL at DATABASE_URL
async fn test_project_update_and_delete() {
    let store = create_test_store().await;
    let owner = insert_unique_user(&store).await;

    let project = store
        .insert_project(NewProject {
            title: "Stored project".to_string(),
            description: String::new(),
            image_url: String::new(),
            repo_url: "https://example.com/repo".to_string(),
            live_url: String::new(),
            technologies: vec!["rust".to_string()],
            owner_id: owner.id,
        })
        .await
        .unwrap();

    let updated = store
        .update_project(
            project.id,
            ProjectPatch {
                live_url: Some("https://live.example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("updated");
    assert_eq!(updated.live_url, "https://live.example.com");
    assert_eq!(updated.repo_url, "https://example.com/repo");

    let view = store.find_project_view(project.id).await.unwrap().expect("view");
    assert_eq!(view.owner.map(|o| o.email), Some(owner.email));

    assert!(store.delete_project(project.id).await.unwrap());
    assert!(store
        .update_project(project.id, ProjectPatch::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore] // Requires PostgreSQL at DATABASE_URL
async fn test_contact_message_defaults_unread() {
    let store = create_test_store().await;

    let message = store
        .insert_message(NewContactMessage {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            message: format!("hello {}", Uuid::new_v4()),
        })
        .await
        .unwrap();
    assert!(!message.read);

    let all = store.list_messages().await.unwrap();
    assert!(all.iter().any(|m| m.id == message.id));
}

#[tokio::test]
#[ignore] // Requires PostgreSQL at DATABASE_URL
async fn test_equal_timestamps_list_later_insert_first() {
    let store = create_test_store().await;
    let stamp = chrono::Utc::now() + chrono::Duration::days(365);

    let mut ids = Vec::new();
    for label in ["first", "second"] {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, message, created_at, updated_at) \
             VALUES ($1, 'Grace', 'grace@example.com', $2, $3, $3)",
        )
        .bind(id)
        .bind(label)
        .bind(stamp)
        .execute(store.pool())
        .await
        .unwrap();
        ids.push(id);
    }

    let listed: Vec<Uuid> = store
        .list_messages()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .filter(|id| ids.contains(id))
        .collect();
    assert_eq!(listed, vec![ids[1], ids[0]]);

    sqlx::query("DELETE FROM contact_messages WHERE id = ANY($1)")
        .bind(&ids)
        .execute(store.pool())
        .await
        .unwrap();
}
