//! Project API endpoints.
//!
//! The detail endpoint takes no authentication and bumps the view counter;
//! listing, updating and deleting are owner-only, enforced by the core.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::projects;
use crate::db::models::{CreateProjectRequest, Project, UpdateProjectRequest, User};
use crate::AppState;

use super::error::{ApiError, ValidationErrorBuilder};
use super::validation::{validate_limit, validate_link, validate_name, validate_text, validate_uuid};

const DEFAULT_RECENT_LIMIT: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// Validate a CreateProjectRequest
fn validate_create_request(req: &CreateProjectRequest) -> Result<(), ApiError> {
    let mut errors = ValidationErrorBuilder::new();

    if let Err(e) = validate_name(&req.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_text(&req.overview) {
        errors.add("overview", e);
    }
    if let Err(e) = validate_link(&req.github_link) {
        errors.add("github_link", e);
    }
    if let Err(e) = validate_link(&req.live_site) {
        errors.add("live_site", e);
    }

    errors.finish()
}

/// Validate an UpdateProjectRequest
fn validate_update_request(req: &UpdateProjectRequest) -> Result<(), ApiError> {
    let mut errors = ValidationErrorBuilder::new();

    if let Some(ref name) = req.name {
        if let Err(e) = validate_name(name) {
            errors.add("name", e);
        }
    }
    if let Some(ref overview) = req.overview {
        if let Err(e) = validate_text(overview) {
            errors.add("overview", e);
        }
    }
    if let Err(e) = validate_link(&req.github_link) {
        errors.add("github_link", e);
    }
    if let Err(e) = validate_link(&req.live_site) {
        errors.add("live_site", e);
    }

    errors.finish()
}

/// List the caller's most recent projects (dashboard view)
pub async fn list_recent(
    State(state): State<Arc<AppState>>,
    user: User,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    if let Err(e) = validate_limit(limit) {
        return Err(ApiError::validation_field("limit", e));
    }

    let projects = projects::list_own(&state.store, Some(&user.id), Some(limit)).await?;
    Ok(Json(projects))
}

/// List all of the caller's projects
pub async fn list_all(
    State(state): State<Arc<AppState>>,
    user: User,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = projects::list_own(&state.store, Some(&user.id), None).await?;
    Ok(Json(projects))
}

/// Create a new project
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    user: User,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    validate_create_request(&req)?;

    let project = projects::create(&state.store, Some(&user.id), req).await?;

    tracing::info!(project = %project.id, owner = %project.owner_id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// Public project detail. No authentication; every hit counts a view.
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    if let Err(e) = validate_uuid(&id, "project_id") {
        return Err(ApiError::validation_field("project_id", e));
    }

    let project = projects::get_detail(&state.store, &id).await?;
    Ok(Json(project))
}

/// Update a project (owner only)
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    user: User,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    if let Err(e) = validate_uuid(&id, "project_id") {
        return Err(ApiError::validation_field("project_id", e));
    }
    validate_update_request(&req)?;

    let project = projects::update(&state.store, Some(&user.id), &id, req).await?;
    Ok(Json(project))
}

/// Delete a project and its tasks (owner only)
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    user: User,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Err(e) = validate_uuid(&id, "project_id") {
        return Err(ApiError::validation_field("project_id", e));
    }

    projects::delete(&state.store, Some(&user.id), &id).await?;

    tracing::info!(project = %id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
