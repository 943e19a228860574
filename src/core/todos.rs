//! Todo lifecycle operations. Unlike projects, every todo read is
//! owner-scoped, including fetch-by-id.

use crate::db::models::{CreateTodoRequest, Priority, Todo, UpdateTodoRequest, WorkStatus};

use super::error::CoreError;
use super::policy::{check_owner, require_caller, CallerId};
use super::store::{NewTodo, TodoStore};

pub async fn create<S: TodoStore>(
    store: &S,
    caller: CallerId<'_>,
    req: CreateTodoRequest,
) -> Result<Todo, CoreError> {
    let owner = require_caller(caller)?;

    if req.task.trim().is_empty() {
        return Err(CoreError::validation("task", "Task is required"));
    }
    let priority: Priority = super::parse_field("priority", req.priority.as_deref())?;
    let status: WorkStatus = super::parse_field("status", req.status.as_deref())?;

    let new = NewTodo {
        task: req.task,
        description: req.description,
        note: req.note,
        priority,
        status,
    };
    Ok(store.insert(owner, new).await?)
}

pub async fn get<S: TodoStore>(
    store: &S,
    caller: CallerId<'_>,
    id: &str,
) -> Result<Todo, CoreError> {
    let todo = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound("todo"))?;
    check_owner(caller, &todo.owner_id)?;
    Ok(todo)
}

pub async fn list_own<S: TodoStore>(
    store: &S,
    caller: CallerId<'_>,
) -> Result<Vec<Todo>, CoreError> {
    let owner = require_caller(caller)?;
    Ok(store.list_by_owner(owner).await?)
}

pub async fn update<S: TodoStore>(
    store: &S,
    caller: CallerId<'_>,
    id: &str,
    req: UpdateTodoRequest,
) -> Result<Todo, CoreError> {
    validate_patch(&req)?;

    let existing = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound("todo"))?;
    check_owner(caller, &existing.owner_id)?;

    store
        .update_by_id(id, &req)
        .await?
        .ok_or(CoreError::NotFound("todo"))
}

pub async fn delete<S: TodoStore>(
    store: &S,
    caller: CallerId<'_>,
    id: &str,
) -> Result<(), CoreError> {
    let existing = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound("todo"))?;
    check_owner(caller, &existing.owner_id)?;

    if store.delete_by_id(id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound("todo"))
    }
}

fn validate_patch(req: &UpdateTodoRequest) -> Result<(), CoreError> {
    if let Some(task) = &req.task {
        if task.trim().is_empty() {
            return Err(CoreError::validation("task", "Task cannot be empty"));
        }
    }
    if let Some(priority) = &req.priority {
        priority
            .parse::<Priority>()
            .map_err(|message| CoreError::Validation { field: "priority", message })?;
    }
    if let Some(status) = &req.status {
        status
            .parse::<WorkStatus>()
            .map_err(|message| CoreError::Validation { field: "status", message })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MemoryStore;

    fn new_todo(task: &str) -> CreateTodoRequest {
        CreateTodoRequest {
            task: task.to_string(),
            description: None,
            note: None,
            priority: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let store = MemoryStore::new();
        let t = create(&store, Some("u1"), new_todo("Write docs")).await.unwrap();

        assert_eq!(t.owner_id, "u1");
        assert_eq!(t.priority, "medium");
        assert_eq!(t.status, "active");
        assert!(t.description.is_none());
    }

    #[tokio::test]
    async fn test_create_empty_task_persists_nothing() {
        let store = MemoryStore::new();
        let err = create(&store, Some("u1"), new_todo("")).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "task", .. }));
        assert!(list_own(&store, Some("u1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_priority() {
        let store = MemoryStore::new();
        let mut req = new_todo("Write docs");
        req.priority = Some("urgent".to_string());
        let err = create(&store, Some("u1"), req).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "priority", .. }));
    }

    #[tokio::test]
    async fn test_list_never_leaks_other_owners() {
        let store = MemoryStore::new();
        create(&store, Some("u1"), new_todo("Mine 1")).await.unwrap();
        create(&store, Some("u2"), new_todo("Theirs")).await.unwrap();
        create(&store, Some("u1"), new_todo("Mine 2")).await.unwrap();

        let mine = list_own(&store, Some("u1")).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|t| t.owner_id == "u1"));
        // Newest first.
        assert_eq!(mine[0].task, "Mine 2");

        let theirs = list_own(&store, Some("u2")).await.unwrap();
        assert_eq!(theirs.len(), 1);
    }

    #[tokio::test]
    async fn test_get_is_owner_scoped() {
        let store = MemoryStore::new();
        let t = create(&store, Some("u1"), new_todo("Mine")).await.unwrap();

        assert!(get(&store, Some("u1"), &t.id).await.is_ok());
        assert!(matches!(
            get(&store, Some("u2"), &t.id).await.unwrap_err(),
            CoreError::Forbidden
        ));
        assert!(matches!(
            get(&store, None, &t.id).await.unwrap_err(),
            CoreError::Unauthenticated
        ));
        assert!(matches!(
            get(&store, Some("u1"), "missing").await.unwrap_err(),
            CoreError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_update_owner_checks_and_patch() {
        let store = MemoryStore::new();
        let t = create(&store, Some("u1"), new_todo("Write docs")).await.unwrap();

        let patch = UpdateTodoRequest {
            status: Some("done".to_string()),
            note: Some("shipped".to_string()),
            ..Default::default()
        };
        let err = update(&store, Some("u2"), &t.id, patch.clone()).await.unwrap_err();
        assert!(matches!(err, CoreError::Forbidden));

        let updated = update(&store, Some("u1"), &t.id, patch).await.unwrap();
        assert_eq!(updated.status, "done");
        assert_eq!(updated.note.as_deref(), Some("shipped"));
        assert_eq!(updated.task, "Write docs");
        assert_eq!(updated.owner_id, "u1");
        assert_eq!(updated.created_at, t.created_at);
    }

    #[tokio::test]
    async fn test_delete_owner_checked_and_terminal() {
        let store = MemoryStore::new();
        let t = create(&store, Some("u1"), new_todo("Temp")).await.unwrap();

        assert!(matches!(
            delete(&store, Some("u2"), &t.id).await.unwrap_err(),
            CoreError::Forbidden
        ));
        delete(&store, Some("u1"), &t.id).await.unwrap();
        assert!(matches!(
            get(&store, Some("u1"), &t.id).await.unwrap_err(),
            CoreError::NotFound(_)
        ));
    }
}
