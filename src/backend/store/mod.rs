//! Store Module
//!
//! Persistence for every collection, behind async traits so the services
//! never see a driver type.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - Store traits and StoreError
//! ├── postgres.rs  - sqlx/PostgreSQL implementation
//! └── memory.rs    - In-process implementation (tests, embedding)
//! ```
//!
//! # Consistency
//!
//! Each method is a single read or a single write. Nothing here spans two
//! writes in one transaction; in particular deleting a post and deleting its
//! comments are two separate calls.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::models::{
    BlogPost, BlogPostPatch, BlogPostView, Comment, CommentView, ContactMessage, NewBlogPost,
    NewComment, NewContactMessage, NewProject, NewUser, Project, ProjectPatch, ProjectView, User,
};

/// In-process implementation
pub mod memory;

/// PostgreSQL implementation
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors surfaced by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("duplicate value violates {constraint}")]
    Duplicate {
        /// Name of the violated constraint or field
        constraint: String,
    },

    /// Any other driver failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// User accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; a taken username or email is `StoreError::Duplicate`
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// First user matching either the email or the username
    async fn find_user_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> StoreResult<Option<User>>;
}

/// Blog posts and their comments
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Every post with its author summary, newest first
    async fn list_posts(&self) -> StoreResult<Vec<BlogPostView>>;

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<BlogPost>>;

    async fn find_post_view(&self, id: Uuid) -> StoreResult<Option<BlogPostView>>;

    async fn insert_post(&self, post: NewBlogPost) -> StoreResult<BlogPost>;

    /// Merge the patch and refresh `updated_at`; `None` if the post is gone
    async fn update_post(&self, id: Uuid, patch: BlogPostPatch) -> StoreResult<Option<BlogPost>>;

    /// Returns whether a post was removed
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;

    /// Comments of one post with commenter usernames, newest first
    async fn list_comments(&self, post_id: Uuid) -> StoreResult<Vec<CommentView>>;

    async fn find_comment_view(&self, id: Uuid) -> StoreResult<Option<CommentView>>;

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment>;

    /// Remove every comment of a post; returns how many were removed
    async fn delete_comments_for_post(&self, post_id: Uuid) -> StoreResult<u64>;
}

/// Portfolio projects
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Every project with its owner summary, newest first
    async fn list_projects(&self) -> StoreResult<Vec<ProjectView>>;

    async fn find_project(&self, id: Uuid) -> StoreResult<Option<Project>>;

    async fn find_project_view(&self, id: Uuid) -> StoreResult<Option<ProjectView>>;

    async fn insert_project(&self, project: NewProject) -> StoreResult<Project>;

    /// Merge the patch and refresh `updated_at`; `None` if the project is gone
    async fn update_project(&self, id: Uuid, patch: ProjectPatch)
        -> StoreResult<Option<Project>>;

    /// Returns whether a project was removed
    async fn delete_project(&self, id: Uuid) -> StoreResult<bool>;
}

/// Contact form submissions
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_message(&self, message: NewContactMessage) -> StoreResult<ContactMessage>;

    /// Every message, newest first
    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>>;
}

/// Everything the application needs from persistence
pub trait Store: UserStore + BlogStore + ProjectStore + ContactStore {}

impl<T> Store for T where T: UserStore + BlogStore + ProjectStore + ContactStore {}
