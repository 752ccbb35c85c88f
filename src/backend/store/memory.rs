//! In-process store
//!
//! Keeps every collection in vectors behind one `RwLock`. Each trait call
//! takes the lock once, so a single write is atomic just like a single
//! document write in a real store. Used by the test suite and handy for
//! running the API without a database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::store::{
    BlogStore, ContactStore, ProjectStore, StoreError, StoreResult, UserStore,
};
use crate::shared::models::{
    AuthorSummary, BlogPost, BlogPostPatch, BlogPostView, Comment, CommentAuthor, CommentView,
    ContactMessage, NewBlogPost, NewComment, NewContactMessage, NewProject, NewUser, Project,
    ProjectPatch, ProjectView, User,
};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    posts: Vec<BlogPost>,
    comments: Vec<Comment>,
    projects: Vec<Project>,
    messages: Vec<ContactMessage>,
}

impl Collections {
    fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn post_view(&self, post: &BlogPost) -> BlogPostView {
        BlogPostView {
            author: self.user(post.author_id).map(AuthorSummary::from),
            post: post.clone(),
        }
    }

    fn comment_view(&self, comment: &Comment) -> CommentView {
        CommentView {
            author: self.user(comment.author_id).map(CommentAuthor::from),
            comment: comment.clone(),
        }
    }

    fn project_view(&self, project: &Project) -> ProjectView {
        ProjectView {
            owner: self.user(project.owner_id).map(AuthorSummary::from),
            project: project.clone(),
        }
    }
}

/// Sort newest first; ties keep the later insertion in front
fn newest_first<T>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().rev().collect();
    sorted.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    sorted
}

/// Store that lives entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
    fail_comment_purge: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `delete_comments_for_post` fail, to exercise the non-atomic
    /// cascade on post deletion
    pub fn set_comment_purge_failure(&self, fail: bool) {
        self.fail_comment_purge.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut data = self.data.write().await;

        if data.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate {
                constraint: "users_email_key".to_string(),
            });
        }
        if data.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate {
                constraint: "users_username_key".to_string(),
            });
        }

        let record = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        data.users.push(record.clone());
        Ok(record)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.data.read().await.user(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> StoreResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data
            .users
            .iter()
            .find(|u| u.email == email || u.username == username)
            .cloned())
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn list_posts(&self) -> StoreResult<Vec<BlogPostView>> {
        let data = self.data.read().await;
        Ok(newest_first(&data.posts, |p| p.created_at)
            .into_iter()
            .map(|p| data.post_view(p))
            .collect())
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<BlogPost>> {
        let data = self.data.read().await;
        Ok(data.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_post_view(&self, id: Uuid) -> StoreResult<Option<BlogPostView>> {
        let data = self.data.read().await;
        Ok(data
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| data.post_view(p)))
    }

    async fn insert_post(&self, post: NewBlogPost) -> StoreResult<BlogPost> {
        let now = Utc::now();
        let record = BlogPost {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            author_id: post.author_id,
            tags: post.tags,
            published: post.published,
            created_at: now,
            updated_at: now,
        };
        self.data.write().await.posts.push(record.clone());
        Ok(record)
    }

    async fn update_post(&self, id: Uuid, patch: BlogPostPatch) -> StoreResult<Option<BlogPost>> {
        let mut data = self.data.write().await;
        Ok(data.posts.iter_mut().find(|p| p.id == id).map(|post| {
            patch.apply_to(post);
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let mut data = self.data.write().await;
        let before = data.posts.len();
        data.posts.retain(|p| p.id != id);
        Ok(data.posts.len() != before)
    }

    async fn list_comments(&self, post_id: Uuid) -> StoreResult<Vec<CommentView>> {
        let data = self.data.read().await;
        let comments: Vec<Comment> = data
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        Ok(newest_first(&comments, |c| c.created_at)
            .into_iter()
            .map(|c| data.comment_view(c))
            .collect())
    }

    async fn find_comment_view(&self, id: Uuid) -> StoreResult<Option<CommentView>> {
        let data = self.data.read().await;
        Ok(data
            .comments
            .iter()
            .find(|c| c.id == id)
            .map(|c| data.comment_view(c)))
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        let now = Utc::now();
        let record = Comment {
            id: Uuid::new_v4(),
            body: comment.body,
            author_id: comment.author_id,
            post_id: comment.post_id,
            created_at: now,
            updated_at: now,
        };
        self.data.write().await.comments.push(record.clone());
        Ok(record)
    }

    async fn delete_comments_for_post(&self, post_id: Uuid) -> StoreResult<u64> {
        if self.fail_comment_purge.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }

        let mut data = self.data.write().await;
        let before = data.comments.len();
        data.comments.retain(|c| c.post_id != post_id);
        Ok((before - data.comments.len()) as u64)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self) -> StoreResult<Vec<ProjectView>> {
        let data = self.data.read().await;
        Ok(newest_first(&data.projects, |p| p.created_at)
            .into_iter()
            .map(|p| data.project_view(p))
            .collect())
    }

    async fn find_project(&self, id: Uuid) -> StoreResult<Option<Project>> {
        let data = self.data.read().await;
        Ok(data.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn find_project_view(&self, id: Uuid) -> StoreResult<Option<ProjectView>> {
        let data = self.data.read().await;
        Ok(data
            .projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| data.project_view(p)))
    }

    async fn insert_project(&self, project: NewProject) -> StoreResult<Project> {
        let now = Utc::now();
        let record = Project {
            id: Uuid::new_v4(),
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            repo_url: project.repo_url,
            live_url: project.live_url,
            technologies: project.technologies,
            owner_id: project.owner_id,
            created_at: now,
            updated_at: now,
        };
        self.data.write().await.projects.push(record.clone());
        Ok(record)
    }

    async fn update_project(
        &self,
        id: Uuid,
        patch: ProjectPatch,
    ) -> StoreResult<Option<Project>> {
        let mut data = self.data.write().await;
        Ok(data.projects.iter_mut().find(|p| p.id == id).map(|project| {
            patch.apply_to(project);
            project.updated_at = Utc::now();
            project.clone()
        }))
    }

    async fn delete_project(&self, id: Uuid) -> StoreResult<bool> {
        let mut data = self.data.write().await;
        let before = data.projects.len();
        data.projects.retain(|p| p.id != id);
        Ok(data.projects.len() != before)
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert_message(&self, message: NewContactMessage) -> StoreResult<ContactMessage> {
        let now = Utc::now();
        let record = ContactMessage {
            id: Uuid::new_v4(),
            name: message.name,
            email: message.email,
            message: message.message,
            read: false,
            created_at: now,
            updated_at: now,
        };
        self.data.write().await.messages.push(record.clone());
        Ok(record)
    }

    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        let data = self.data.read().await;
        Ok(newest_first(&data.messages, |m| m.created_at)
            .into_iter()
            .cloned()
            .collect())
    }
}
