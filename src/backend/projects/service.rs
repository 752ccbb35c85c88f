//! Project service: CRUD over portfolio projects with owner-only writes.

use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::ownership::ensure_owner;
use crate::backend::store::ProjectStore;
use crate::shared::models::{CreateProjectRequest, Project, ProjectView, UpdateProjectRequest};

pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const PROJECT_DELETED: &str = "Project deleted successfully";

async fn load_project<S>(store: &S, id: Uuid) -> Result<Project, ApiError>
where
    S: ProjectStore + ?Sized,
{
    store
        .find_project(id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))
}

pub async fn list_projects<S>(store: &S) -> Result<Vec<ProjectView>, ApiError>
where
    S: ProjectStore + ?Sized,
{
    Ok(store.list_projects().await?)
}

pub async fn get_project<S>(store: &S, id: Uuid) -> Result<ProjectView, ApiError>
where
    S: ProjectStore + ?Sized,
{
    store
        .find_project_view(id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))
}

/// Insert a project owned by the caller; returns the plain record
pub async fn create_project<S>(
    store: &S,
    request: CreateProjectRequest,
    owner_id: Uuid,
) -> Result<Project, ApiError>
where
    S: ProjectStore + ?Sized,
{
    let new_project = request.into_new(owner_id)?;
    let project = store.insert_project(new_project).await?;
    tracing::info!("Project {} created by {}", project.id, owner_id);
    Ok(project)
}

pub async fn update_project<S>(
    store: &S,
    id: Uuid,
    request: UpdateProjectRequest,
    caller: Uuid,
) -> Result<Project, ApiError>
where
    S: ProjectStore + ?Sized,
{
    let project = load_project(store, id).await?;
    ensure_owner(project.owner_id, caller, "update this project")?;

    let patch = request.into_patch()?;
    let updated = store
        .update_project(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;
    tracing::info!("Project {} updated by {}", id, caller);
    Ok(updated)
}

pub async fn delete_project<S>(store: &S, id: Uuid, caller: Uuid) -> Result<(), ApiError>
where
    S: ProjectStore + ?Sized,
{
    let project = load_project(store, id).await?;
    ensure_owner(project.owner_id, caller, "delete this project")?;

    if !store.delete_project(id).await? {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }
    tracing::info!("Project {} deleted by {}", id, caller);
    Ok(())
}
