//! Domain records, joined read views and request payloads
//!
//! Records derive `sqlx::FromRow` so the PostgreSQL store can map rows
//! directly; views flatten a record and add the joined owner summary.
//! Wire names are camelCase throughout.

pub mod blog;
pub mod contact;
pub mod project;
pub mod user;

pub use blog::{
    BlogPost, BlogPostDetail, BlogPostPatch, BlogPostView, Comment, CommentView,
    CreateBlogPostRequest, CreateCommentRequest, NewBlogPost, NewComment, UpdateBlogPostRequest,
};
pub use contact::{ContactMessage, ContactRequest, NewContactMessage};
pub use project::{
    CreateProjectRequest, NewProject, Project, ProjectPatch, ProjectView, UpdateProjectRequest,
};
pub use user::{AuthorSummary, CommentAuthor, NewUser, PublicUser, User};
