//! Project lifecycle operations.
//!
//! Single-project detail is the one public read in the whole API: anyone
//! may fetch a project by id, and doing so counts a view. Every other
//! operation is owner-scoped.

use crate::db::models::{CreateProjectRequest, Project, UpdateProjectRequest, WorkStatus};

use super::error::CoreError;
use super::policy::{check_owner, require_caller, CallerId};
use super::store::{NewProject, ProjectStore};

pub async fn create<S: ProjectStore>(
    store: &S,
    caller: CallerId<'_>,
    req: CreateProjectRequest,
) -> Result<Project, CoreError> {
    let owner = require_caller(caller)?;

    if req.name.trim().is_empty() {
        return Err(CoreError::validation("name", "Name is required"));
    }
    if req.overview.trim().is_empty() {
        return Err(CoreError::validation("overview", "Overview is required"));
    }
    let status: WorkStatus = super::parse_field("status", req.status.as_deref())?;

    let new = NewProject {
        name: req.name,
        overview: req.overview,
        status,
        timeline: req.timeline.unwrap_or_default(),
        github_link: req.github_link.unwrap_or_default(),
        live_site: req.live_site.unwrap_or_default(),
    };
    Ok(store.insert(owner, new).await?)
}

/// Public detail fetch. Counts the view with a single atomic
/// increment-and-fetch so concurrent readers never lose updates.
pub async fn get_detail<S: ProjectStore>(store: &S, id: &str) -> Result<Project, CoreError> {
    store
        .increment_views(id)
        .await?
        .ok_or(CoreError::NotFound("project"))
}

pub async fn list_own<S: ProjectStore>(
    store: &S,
    caller: CallerId<'_>,
    limit: Option<i64>,
) -> Result<Vec<Project>, CoreError> {
    let owner = require_caller(caller)?;
    Ok(store.list_by_owner(owner, limit).await?)
}

pub async fn update<S: ProjectStore>(
    store: &S,
    caller: CallerId<'_>,
    id: &str,
    req: UpdateProjectRequest,
) -> Result<Project, CoreError> {
    validate_patch(&req)?;

    // Authorization always runs against a fresh read, never a cached row.
    let existing = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound("project"))?;
    check_owner(caller, &existing.owner_id)?;

    store
        .update_by_id(id, &req)
        .await?
        .ok_or(CoreError::NotFound("project"))
}

pub async fn delete<S: ProjectStore>(
    store: &S,
    caller: CallerId<'_>,
    id: &str,
) -> Result<(), CoreError> {
    let existing = store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound("project"))?;
    check_owner(caller, &existing.owner_id)?;

    if store.delete_by_id(id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound("project"))
    }
}

fn validate_patch(req: &UpdateProjectRequest) -> Result<(), CoreError> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(CoreError::validation("name", "Name cannot be empty"));
        }
    }
    if let Some(overview) = &req.overview {
        if overview.trim().is_empty() {
            return Err(CoreError::validation("overview", "Overview cannot be empty"));
        }
    }
    if let Some(status) = &req.status {
        status
            .parse::<WorkStatus>()
            .map_err(|message| CoreError::Validation { field: "status", message })?;
    }
    Ok(())
}
