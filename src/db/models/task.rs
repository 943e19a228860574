//! Task model and DTOs. Tasks are checklist items nested under a project;
//! access is decided by the owning project.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::TaskStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub overview: Option<String>,
    pub status: String,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    pub fn status_enum(&self) -> Option<TaskStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub project_id: String,
    pub title: String,
    pub overview: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
}
