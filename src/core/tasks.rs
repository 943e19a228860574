//! Task operations. Tasks carry no owner of their own: access follows the
//! project they belong to, so every check is a fresh read of that project.

use crate::db::models::{CreateTaskRequest, Task, TaskStatus};

use super::error::CoreError;
use super::policy::{check_owner, require_caller, CallerId};
use super::store::{NewTask, ProjectStore, TaskStore};

pub async fn create<P: ProjectStore, T: TaskStore>(
    projects: &P,
    tasks: &T,
    caller: CallerId<'_>,
    req: CreateTaskRequest,
) -> Result<Task, CoreError> {
    require_caller(caller)?;

    if req.title.trim().is_empty() {
        return Err(CoreError::validation("title", "Title is required"));
    }
    let status: TaskStatus = super::parse_field("status", req.status.as_deref())?;

    let project = projects
        .find_by_id(&req.project_id)
        .await?
        .ok_or(CoreError::NotFound("project"))?;
    check_owner(caller, &project.owner_id)?;

    let new = NewTask {
        project_id: project.id,
        title: req.title,
        overview: req.overview,
        status,
        due_date: req.due_date,
    };
    Ok(tasks.insert(new).await?)
}

pub async fn list_for_project<P: ProjectStore, T: TaskStore>(
    projects: &P,
    tasks: &T,
    caller: CallerId<'_>,
    project_id: &str,
) -> Result<Vec<Task>, CoreError> {
    let project = projects
        .find_by_id(project_id)
        .await?
        .ok_or(CoreError::NotFound("project"))?;
    check_owner(caller, &project.owner_id)?;

    Ok(tasks.list_by_project(project_id).await?)
}
