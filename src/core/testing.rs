//! In-memory store double for policy tests.
//!
//! Rows live in insertion order inside a mutex, so "newest first" falls out
//! of reverse iteration and the view-count increment is naturally atomic.
//! Deleting a project cascades to its tasks, mirroring the SQLite schema.

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::db::models::{Project, Task, Todo, UpdateProjectRequest, UpdateTodoRequest};

use super::store::{
    NewProject, NewTask, NewTodo, ProjectStore, StoreResult, TaskStore, TodoStore,
};

#[derive(Default)]
pub struct MemoryStore {
    projects: Mutex<Vec<Project>>,
    todos: Mutex<Vec<Todo>>,
    tasks: Mutex<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Project>> {
        Ok(self.projects.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn list_by_owner(
        &self,
        owner_id: &str,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Project>> {
        let mut rows: Vec<Project> = self
            .projects
            .lock()
            .iter()
            .rev()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        if let Some(limit) = limit {
            rows.truncate(limit.max(0) as usize);
        }
        Ok(rows)
    }

    async fn insert(&self, owner_id: &str, new: NewProject) -> StoreResult<Project> {
        let ts = now();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            overview: new.overview,
            status: new.status.to_string(),
            timeline: new.timeline,
            owner_id: owner_id.to_string(),
            github_link: new.github_link,
            live_site: new.live_site,
            view_count: 0,
            created_at: ts.clone(),
            updated_at: ts,
        };
        self.projects.lock().push(project.clone());
        Ok(project)
    }

    async fn update_by_id(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> StoreResult<Option<Project>> {
        let mut rows = self.projects.lock();
        let Some(p) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            p.name = name.clone();
        }
        if let Some(overview) = &patch.overview {
            p.overview = overview.clone();
        }
        if let Some(status) = &patch.status {
            p.status = status.clone();
        }
        if let Some(timeline) = &patch.timeline {
            p.timeline = timeline.clone();
        }
        if let Some(github_link) = &patch.github_link {
            p.github_link = github_link.clone();
        }
        if let Some(live_site) = &patch.live_site {
            p.live_site = live_site.clone();
        }
        p.updated_at = now();
        Ok(Some(p.clone()))
    }

    async fn increment_views(&self, id: &str) -> StoreResult<Option<Project>> {
        let mut rows = self.projects.lock();
        let Some(p) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        p.view_count += 1;
        p.updated_at = now();
        Ok(Some(p.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut rows = self.projects.lock();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        let removed = rows.len() < before;
        if removed {
            self.tasks.lock().retain(|t| t.project_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        Ok(self.todos.lock().iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> StoreResult<Vec<Todo>> {
        Ok(self
            .todos
            .lock()
            .iter()
            .rev()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, owner_id: &str, new: NewTodo) -> StoreResult<Todo> {
        let ts = now();
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            task: new.task,
            description: new.description,
            note: new.note,
            priority: new.priority.to_string(),
            status: new.status.to_string(),
            created_at: ts.clone(),
            updated_at: ts,
        };
        self.todos.lock().push(todo.clone());
        Ok(todo)
    }

    async fn update_by_id(
        &self,
        id: &str,
        patch: &UpdateTodoRequest,
    ) -> StoreResult<Option<Todo>> {
        let mut rows = self.todos.lock();
        let Some(t) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(task) = &patch.task {
            t.task = task.clone();
        }
        if let Some(description) = &patch.description {
            t.description = Some(description.clone());
        }
        if let Some(note) = &patch.note {
            t.note = Some(note.clone());
        }
        if let Some(priority) = &patch.priority {
            t.priority = priority.clone();
        }
        if let Some(status) = &patch.status {
            t.status = status.clone();
        }
        t.updated_at = now();
        Ok(Some(t.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut rows = self.todos.lock();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert(&self, new: NewTask) -> StoreResult<Task> {
        let ts = now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            project_id: new.project_id,
            title: new.title,
            overview: new.overview,
            status: new.status.to_string(),
            due_date: new.due_date,
            created_at: ts.clone(),
            updated_at: ts,
        };
        self.tasks.lock().push(task.clone());
        Ok(task)
    }

    async fn list_by_project(&self, project_id: &str) -> StoreResult<Vec<Task>> {
        Ok(self
            .tasks
            .lock()
            .iter()
            .rev()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }
}
