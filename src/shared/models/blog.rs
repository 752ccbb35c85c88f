//! Blog posts, comments and their request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::models::user::{AuthorSummary, CommentAuthor};
use crate::shared::validation::{reject_blank, require_all};

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: Uuid,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a blog post
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub author_id: Uuid,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl BlogPostPatch {
    /// Merge the patch into a stored post
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
    }
}

/// A blog post with its author's summary joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostView {
    #[serde(flatten)]
    pub post: BlogPost,
    pub author: Option<AuthorSummary>,
}

/// A single blog post with its comments, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub view: BlogPostView,
    pub comments: Vec<CommentView>,
}

/// A stored comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub body: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
}

/// A comment with the commenter's username joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: Option<CommentAuthor>,
}

/// Body of `POST /api/blog`
///
/// Any author field sent by the client is ignored; the author is always the
/// authenticated caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl CreateBlogPostRequest {
    /// Validate required fields and stamp the author
    pub fn into_new(self, author_id: Uuid) -> Result<NewBlogPost, SharedError> {
        require_all(&[
            ("title", self.title.as_deref()),
            ("content", self.content.as_deref()),
        ])?;

        Ok(NewBlogPost {
            title: self.title.unwrap_or_default().trim().to_string(),
            content: self.content.unwrap_or_default(),
            excerpt: self.excerpt.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            published: self.published.unwrap_or(true),
            author_id,
        })
    }
}

/// Body of `PUT /api/blog/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl UpdateBlogPostRequest {
    /// Validate the patch; required fields may be omitted but not blanked
    pub fn into_patch(self) -> Result<BlogPostPatch, SharedError> {
        reject_blank("title", self.title.as_deref())?;
        reject_blank("content", self.content.as_deref())?;

        Ok(BlogPostPatch {
            title: self.title.map(|t| t.trim().to_string()),
            content: self.content,
            excerpt: self.excerpt,
            tags: self.tags,
            published: self.published,
        })
    }
}

/// Body of `POST /api/blog/{postId}/comments`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub body: Option<String>,
}

impl CreateCommentRequest {
    /// Validate the body and stamp the author and parent post
    pub fn into_new(self, post_id: Uuid, author_id: Uuid) -> Result<NewComment, SharedError> {
        require_all(&[("body", self.body.as_deref())])?;

        Ok(NewComment {
            body: self.body.unwrap_or_default().trim().to_string(),
            author_id,
            post_id,
        })
    }
}
