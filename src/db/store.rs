//! SQLite implementation of the store collaborator traits.
//!
//! Partial updates use COALESCE so unsupplied fields keep their stored
//! value; the view counter uses a single `UPDATE ... RETURNING` so
//! concurrent readers cannot lose increments. Task cleanup on project
//! delete rides on the schema's `ON DELETE CASCADE`.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::store::{
    NewProject, NewTask, NewTodo, ProjectStore, StoreResult, TaskStore, TodoStore,
};
use crate::db::models::{Project, Task, Todo, UpdateProjectRequest, UpdateTodoRequest};
use crate::db::DbPool;

#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for SqliteStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_owner(
        &self,
        owner_id: &str,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Project>> {
        // LIMIT -1 means "no limit" in SQLite.
        let rows = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE owner_id = ? ORDER BY created_at DESC LIMIT ?",
        )
        .bind(owner_id)
        .bind(limit.unwrap_or(-1))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, owner_id: &str, new: NewProject) -> StoreResult<Project> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (id, name, overview, status, timeline, owner_id, github_link, live_site, view_count, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&new.name)
        .bind(&new.overview)
        .bind(new.status.to_string())
        .bind(&new.timeline)
        .bind(owner_id)
        .bind(&new.github_link)
        .bind(&new.live_site)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_by_id(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> StoreResult<Option<Project>> {
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                name = COALESCE(?, name),
                overview = COALESCE(?, overview),
                status = COALESCE(?, status),
                timeline = COALESCE(?, timeline),
                github_link = COALESCE(?, github_link),
                live_site = COALESCE(?, live_site),
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&patch.name)
        .bind(&patch.overview)
        .bind(&patch.status)
        .bind(&patch.timeline)
        .bind(&patch.github_link)
        .bind(&patch.live_site)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn increment_views(&self, id: &str) -> StoreResult<Option<Project>> {
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, Project>(
            "UPDATE projects SET view_count = view_count + 1, updated_at = ? WHERE id = ? RETURNING *",
        )
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        let row = sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_owner(&self, owner_id: &str) -> StoreResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, Todo>(
            "SELECT * FROM todos WHERE owner_id = ? ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, owner_id: &str, new: NewTodo) -> StoreResult<Todo> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos
                (id, owner_id, task, description, note, priority, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(owner_id)
        .bind(&new.task)
        .bind(&new.description)
        .bind(&new.note)
        .bind(new.priority.to_string())
        .bind(new.status.to_string())
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_by_id(
        &self,
        id: &str,
        patch: &UpdateTodoRequest,
    ) -> StoreResult<Option<Todo>> {
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos SET
                task = COALESCE(?, task),
                description = COALESCE(?, description),
                note = COALESCE(?, note),
                priority = COALESCE(?, priority),
                status = COALESCE(?, status),
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&patch.task)
        .bind(&patch.description)
        .bind(&patch.note)
        .bind(&patch.priority)
        .bind(&patch.status)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn insert(&self, new: NewTask) -> StoreResult<Task> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let row = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks
                (id, project_id, title, overview, status, due_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&new.project_id)
        .bind(&new.title)
        .bind(&new.overview)
        .bind(new.status.to_string())
        .bind(&new.due_date)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_by_project(&self, project_id: &str) -> StoreResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE project_id = ? ORDER BY created_at DESC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
