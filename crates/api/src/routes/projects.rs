//! Project showcase routes.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::project::{CreateProjectRequest, Project};
use persistence::repositories::{NewProject, ProjectRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// List all showcase projects.
///
/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects: Vec<Project> = repo.list_all().await?.into_iter().map(Into::into).collect();
    Ok(Json(projects))
}

/// Add a showcase project.
///
/// POST /api/projects
///
/// Requires the shared admin password.
pub async fn create_project(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    request.validate()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project: Project = repo
        .create(NewProject {
            title: &request.title,
            description: &request.description,
            author: &request.author,
            status: &request.status,
        })
        .await?
        .into();

    info!(project_id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}
