pub mod auth;
mod error;
mod projects;
mod tasks;
mod todos;
mod validation;

pub use error::{ApiError, ErrorCode};

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me));

    // Authorization is enforced per handler: everything takes the User
    // extractor except the public project detail view.
    let api_routes = Router::new()
        // Projects
        .route("/projects", get(projects::list_recent))
        .route("/projects", post(projects::create_project))
        .route("/projects/all", get(projects::list_all))
        .route("/projects/:id", get(projects::get_project))
        .route("/projects/:id", put(projects::update_project))
        .route("/projects/:id", delete(projects::delete_project))
        .route("/projects/:id/tasks", get(tasks::list_project_tasks))
        // Tasks
        .route("/tasks", post(tasks::create_task))
        // Todos
        .route("/todos", get(todos::list_todos))
        .route("/todos", post(todos::create_todo))
        .route("/todos/:id", get(todos::get_todo))
        .route("/todos/:id", put(todos::update_todo))
        .route("/todos/:id", delete(todos::delete_todo));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
