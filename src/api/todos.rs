//! Todo API endpoints. Everything here is owner-scoped, including
//! fetch-by-id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::core::todos;
use crate::db::models::{CreateTodoRequest, Todo, UpdateTodoRequest, User};
use crate::AppState;

use super::error::{ApiError, ValidationErrorBuilder};
use super::validation::{validate_name, validate_text, validate_uuid};

fn validate_create_request(req: &CreateTodoRequest) -> Result<(), ApiError> {
    let mut errors = ValidationErrorBuilder::new();

    if let Err(e) = validate_name(&req.task) {
        errors.add("task", e);
    }
    if let Some(ref description) = req.description {
        if let Err(e) = validate_text(description) {
            errors.add("description", e);
        }
    }
    if let Some(ref note) = req.note {
        if let Err(e) = validate_text(note) {
            errors.add("note", e);
        }
    }

    errors.finish()
}

fn validate_update_request(req: &UpdateTodoRequest) -> Result<(), ApiError> {
    let mut errors = ValidationErrorBuilder::new();

    if let Some(ref task) = req.task {
        if let Err(e) = validate_name(task) {
            errors.add("task", e);
        }
    }
    if let Some(ref description) = req.description {
        if let Err(e) = validate_text(description) {
            errors.add("description", e);
        }
    }
    if let Some(ref note) = req.note {
        if let Err(e) = validate_text(note) {
            errors.add("note", e);
        }
    }

    errors.finish()
}

/// List the caller's todos, newest first
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    user: User,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = todos::list_own(&state.store, Some(&user.id)).await?;
    Ok(Json(todos))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    user: User,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    validate_create_request(&req)?;

    let todo = todos::create(&state.store, Some(&user.id), req).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Fetch one todo (owner only)
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    user: User,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    if let Err(e) = validate_uuid(&id, "todo_id") {
        return Err(ApiError::validation_field("todo_id", e));
    }

    let todo = todos::get(&state.store, Some(&user.id), &id).await?;
    Ok(Json(todo))
}

/// Update a todo (owner only)
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    user: User,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    if let Err(e) = validate_uuid(&id, "todo_id") {
        return Err(ApiError::validation_field("todo_id", e));
    }
    validate_update_request(&req)?;

    let todo = todos::update(&state.store, Some(&user.id), &id, req).await?;
    Ok(Json(todo))
}

/// Delete a todo (owner only)
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    user: User,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Err(e) = validate_uuid(&id, "todo_id") {
        return Err(ApiError::validation_field("todo_id", e));
    }

    todos::delete(&state.store, Some(&user.id), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
