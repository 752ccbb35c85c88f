/**
 * Blog Handlers
 *
 * HTTP handlers for `/api/blog` and `/api/blog/{id}/comments`. Reads are
 * public; writes run behind the auth guard and take the caller from
 * `AuthUser`.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::blog::service::{self, POST_DELETED, POST_NOT_FOUND};
use crate::backend::error::ApiError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::store::Store;
use crate::shared::models::{
    BlogPostDetail, BlogPostView, CommentView, CreateBlogPostRequest, CreateCommentRequest,
    UpdateBlogPostRequest,
};
use crate::shared::ApiResponse;

/// `GET /api/blog`
pub async fn list_posts(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<ApiResponse<Vec<BlogPostView>>>, ApiError> {
    let posts = service::list_posts(store.as_ref()).await?;
    Ok(Json(ApiResponse::list(posts)))
}

/// `GET /api/blog/{id}`
pub async fn get_post(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BlogPostDetail>>, ApiError> {
    let id = parse_id(&id, POST_NOT_FOUND)?;
    let detail = service::get_post(store.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// `POST /api/blog`
pub async fn create_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateBlogPostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BlogPostView>>), ApiError> {
    let view = service::create_post(store.as_ref(), request, user.id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(view))))
}

/// `PUT /api/blog/{id}` (author only)
pub async fn update_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateBlogPostRequest>,
) -> Result<Json<ApiResponse<BlogPostView>>, ApiError> {
    let id = parse_id(&id, POST_NOT_FOUND)?;
    let view = service::update_post(store.as_ref(), id, request, user.id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// `DELETE /api/blog/{id}` (author only)
pub async fn delete_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = parse_id(&id, POST_NOT_FOUND)?;
    service::delete_post(store.as_ref(), id, user.id).await?;
    Ok(Json(ApiResponse::message_only(POST_DELETED)))
}

/// `GET /api/blog/{id}/comments`
pub async fn list_comments(
    State(store): State<Arc<dyn Store>>,
    Path(post_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<CommentView>>>, ApiError> {
    let comments = match uuid::Uuid::parse_str(&post_id) {
        Ok(post_id) => service::list_comments(store.as_ref(), post_id).await?,
        Err(_) => Vec::new(),
    };
    Ok(Json(ApiResponse::list(comments)))
}

/// `POST /api/blog/{id}/comments`
pub async fn create_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    ApiJson(request): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentView>>), ApiError> {
    let post_id = parse_id(&post_id, POST_NOT_FOUND)?;
    let comment = service::create_comment(store.as_ref(), post_id, request, user.id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}
