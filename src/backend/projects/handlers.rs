/**
 * Project Handlers
 *
 * HTTP handlers for `/api/projects`. Listing and single reads are public
 * and join the owner summary; create, update and delete require a token and
 * return the plain project record.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::ApiError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::projects::service::{self, PROJECT_DELETED, PROJECT_NOT_FOUND};
use crate::backend::store::Store;
use crate::shared::models::{CreateProjectRequest, Project, ProjectView, UpdateProjectRequest};
use crate::shared::ApiResponse;

/// `GET /api/projects`
pub async fn list_projects(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<ApiResponse<Vec<ProjectView>>>, ApiError> {
    let projects = service::list_projects(store.as_ref()).await?;
    Ok(Json(ApiResponse::list(projects)))
}

/// `GET /api/projects/{id}`
pub async fn get_project(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProjectView>>, ApiError> {
    let id = parse_id(&id, PROJECT_NOT_FOUND)?;
    let project = service::get_project(store.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// `POST /api/projects`
pub async fn create_project(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    let project = service::create_project(store.as_ref(), request, user.id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

/// `PUT /api/projects/{id}` (owner only)
pub async fn update_project(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let id = parse_id(&id, PROJECT_NOT_FOUND)?;
    let project = service::update_project(store.as_ref(), id, request, user.id).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// `DELETE /api/projects/{id}` (owner only)
pub async fn delete_project(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = parse_id(&id, PROJECT_NOT_FOUND)?;
    service::delete_project(store.as_ref(), id, user.id).await?;
    Ok(Json(ApiResponse::message_only(PROJECT_DELETED)))
}
