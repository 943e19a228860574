//! Persistent-store collaborator interfaces.
//!
//! The policy layer owns these traits; `db::store` implements them on
//! SQLite and the test double in `core::testing` implements them in
//! memory. Stores generate ids and timestamps on insert and return the
//! stored row, so callers never re-read after a write. Failures are opaque
//! to the policy and surface as `CoreError::Store`.

use async_trait::async_trait;

use crate::db::models::{
    Priority, Project, Task, TaskStatus, Todo, UpdateProjectRequest, UpdateTodoRequest, WorkStatus,
};

pub type StoreResult<T> = anyhow::Result<T>;

/// A validated project record ready for insertion. Defaults have already
/// been applied by the policy layer.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub overview: String,
    pub status: WorkStatus,
    pub timeline: String,
    pub github_link: String,
    pub live_site: String,
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub task: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub priority: Priority,
    pub status: WorkStatus,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub project_id: String,
    pub title: String,
    pub overview: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<String>,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Project>>;

    /// Owner's projects, newest first, optionally truncated.
    async fn list_by_owner(&self, owner_id: &str, limit: Option<i64>)
        -> StoreResult<Vec<Project>>;

    async fn insert(&self, owner_id: &str, new: NewProject) -> StoreResult<Project>;

    /// Apply the supplied fields only; `None` leaves a column untouched.
    /// Returns `None` when the id does not resolve.
    async fn update_by_id(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> StoreResult<Option<Project>>;

    /// Atomic increment-and-fetch of `view_count`. Must be a single store
    /// operation, not a read followed by a write.
    async fn increment_views(&self, id: &str) -> StoreResult<Option<Project>>;

    /// Returns whether a row was removed. Dependent tasks go with it.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>>;

    async fn list_by_owner(&self, owner_id: &str) -> StoreResult<Vec<Todo>>;

    async fn insert(&self, owner_id: &str, new: NewTodo) -> StoreResult<Todo>;

    async fn update_by_id(&self, id: &str, patch: &UpdateTodoRequest)
        -> StoreResult<Option<Todo>>;

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert(&self, new: NewTask) -> StoreResult<Task>;

    /// The project's tasks, newest first.
    async fn list_by_project(&self, project_id: &str) -> StoreResult<Vec<Task>>;
}
