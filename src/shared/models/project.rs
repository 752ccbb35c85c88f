//! Portfolio projects and their request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::models::user::AuthorSummary;
use crate::shared::validation::{reject_blank, require_all};

/// A stored portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
    pub technologies: Vec<String>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
    pub technologies: Vec<String>,
    pub owner_id: Uuid,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl ProjectPatch {
    /// Merge the patch into a stored project
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(repo_url) = self.repo_url {
            project.repo_url = repo_url;
        }
        if let Some(live_url) = self.live_url {
            project.live_url = live_url;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
    }
}

/// A project with its owner's summary joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub owner: Option<AuthorSummary>,
}

/// Body of `POST /api/projects`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl CreateProjectRequest {
    /// Validate the title and stamp the owner
    pub fn into_new(self, owner_id: Uuid) -> Result<NewProject, SharedError> {
        require_all(&[("title", self.title.as_deref())])?;

        Ok(NewProject {
            title: self.title.unwrap_or_default().trim().to_string(),
            description: self.description.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            repo_url: self.repo_url.unwrap_or_default(),
            live_url: self.live_url.unwrap_or_default(),
            technologies: self.technologies.unwrap_or_default(),
            owner_id,
        })
    }
}

/// Body of `PUT /api/projects/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl UpdateProjectRequest {
    /// Validate the patch; the title may be omitted but not blanked
    pub fn into_patch(self) -> Result<ProjectPatch, SharedError> {
        reject_blank("title", self.title.as_deref())?;

        Ok(ProjectPatch {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description,
            image_url: self.image_url,
            repo_url: self.repo_url,
            live_url: self.live_url,
            technologies: self.technologies,
        })
    }
}
