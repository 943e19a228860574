//! Todo model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::{Priority, WorkStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: String,
    pub owner_id: String,
    pub task: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub priority: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Todo {
    pub fn priority_enum(&self) -> Option<Priority> {
        self.priority.parse().ok()
    }

    pub fn status_enum(&self) -> Option<WorkStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub task: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub task: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}
