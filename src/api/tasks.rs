//! Task API endpoints. A task lives under a project; the project's owner
//! is the only caller allowed to create or list them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::core::tasks;
use crate::db::models::{CreateTaskRequest, Task, User};
use crate::AppState;

use super::error::{ApiError, ValidationErrorBuilder};
use super::validation::{validate_name, validate_text, validate_uuid};

fn validate_create_request(req: &CreateTaskRequest) -> Result<(), ApiError> {
    let mut errors = ValidationErrorBuilder::new();

    if let Err(e) = validate_uuid(&req.project_id, "project_id") {
        errors.add("project_id", e);
    }
    if let Err(e) = validate_name(&req.title) {
        errors.add("title", e);
    }
    if let Some(ref overview) = req.overview {
        if let Err(e) = validate_text(overview) {
            errors.add("overview", e);
        }
    }

    errors.finish()
}

/// Create a task under one of the caller's projects
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    user: User,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    validate_create_request(&req)?;

    let task = tasks::create(&state.store, &state.store, Some(&user.id), req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// List a project's tasks (project owner only)
pub async fn list_project_tasks(
    State(state): State<Arc<AppState>>,
    user: User,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError> {
    if let Err(e) = validate_uuid(&project_id, "project_id") {
        return Err(ApiError::validation_field("project_id", e));
    }

    let tasks =
        tasks::list_for_project(&state.store, &state.store, Some(&user.id), &project_id).await?;
    Ok(Json(tasks))
}
