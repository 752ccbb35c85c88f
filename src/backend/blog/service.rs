/**
 * Blog Service
 *
 * CRUD over blog posts and their comments. Every update and delete loads
 * the post first, answers `NotFound` if it is gone and only then checks
 * that the caller is the author.
 *
 * # Deleting a post
 *
 * The post is removed first and its comments second, as two separate store
 * calls. If removing the comments fails the error is logged and the delete
 * still counts as a success; the orphaned comments stay behind.
 */

use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::ownership::ensure_owner;
use crate::backend::store::BlogStore;
use crate::shared::models::{
    BlogPost, BlogPostDetail, BlogPostView, CommentView, CreateBlogPostRequest,
    CreateCommentRequest, UpdateBlogPostRequest,
};

pub const POST_NOT_FOUND: &str = "Blog post not found";
pub const POST_DELETED: &str = "Blog post and associated comments deleted successfully";

async fn load_post<S>(store: &S, id: Uuid) -> Result<BlogPost, ApiError>
where
    S: BlogStore + ?Sized,
{
    store
        .find_post(id)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))
}

async fn load_post_view<S>(store: &S, id: Uuid) -> Result<BlogPostView, ApiError>
where
    S: BlogStore + ?Sized,
{
    store
        .find_post_view(id)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))
}

/// Every post, newest first, with its author
pub async fn list_posts<S>(store: &S) -> Result<Vec<BlogPostView>, ApiError>
where
    S: BlogStore + ?Sized,
{
    Ok(store.list_posts().await?)
}

/// One post with its author and comments
pub async fn get_post<S>(store: &S, id: Uuid) -> Result<BlogPostDetail, ApiError>
where
    S: BlogStore + ?Sized,
{
    let view = load_post_view(store, id).await?;
    let comments = store.list_comments(id).await?;
    Ok(BlogPostDetail { view, comments })
}

pub async fn create_post<S>(
    store: &S,
    request: CreateBlogPostRequest,
    author_id: Uuid,
) -> Result<BlogPostView, ApiError>
where
    S: BlogStore + ?Sized,
{
    let new_post = request.into_new(author_id)?;
    let post = store.insert_post(new_post).await?;
    tracing::info!("Blog post {} created by {}", post.id, author_id);

    load_post_view(store, post.id).await
}

pub async fn update_post<S>(
    store: &S,
    id: Uuid,
    request: UpdateBlogPostRequest,
    caller: Uuid,
) -> Result<BlogPostView, ApiError>
where
    S: BlogStore + ?Sized,
{
    let post = load_post(store, id).await?;
    ensure_owner(post.author_id, caller, "update this blog post")?;

    let patch = request.into_patch()?;
    store
        .update_post(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))?;
    tracing::info!("Blog post {} updated by {}", id, caller);

    load_post_view(store, id).await
}

pub async fn delete_post<S>(store: &S, id: Uuid, caller: Uuid) -> Result<(), ApiError>
where
    S: BlogStore + ?Sized,
{
    let post = load_post(store, id).await?;
    ensure_owner(post.author_id, caller, "delete this blog post")?;

    if !store.delete_post(id).await? {
        return Err(ApiError::not_found(POST_NOT_FOUND));
    }

    match store.delete_comments_for_post(id).await {
        Ok(removed) => {
            tracing::info!("Blog post {} deleted by {} with {} comments", id, caller, removed);
        }
        Err(e) => {
            tracing::warn!("Blog post {} deleted but its comments were not: {}", id, e);
        }
    }

    Ok(())
}

/// Comments of one post, newest first; an unknown post has none
pub async fn list_comments<S>(store: &S, post_id: Uuid) -> Result<Vec<CommentView>, ApiError>
where
    S: BlogStore + ?Sized,
{
    Ok(store.list_comments(post_id).await?)
}

pub async fn create_comment<S>(
    store: &S,
    post_id: Uuid,
    request: CreateCommentRequest,
    author_id: Uuid,
) -> Result<CommentView, ApiError>
where
    S: BlogStore + ?Sized,
{
    load_post(store, post_id).await?;

    let new_comment = request.into_new(post_id, author_id)?;
    let comment = store.insert_comment(new_comment).await?;
    tracing::info!("Comment {} added to post {} by {}", comment.id, post_id, author_id);

    store
        .find_comment_view(comment.id)
        .await?
        .ok_or_else(|| ApiError::internal(format!("comment {} vanished after insert", comment.id)))
}
