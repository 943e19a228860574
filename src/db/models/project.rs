//! Project model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::common::WorkStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Markdown body describing the project.
    pub overview: String,
    pub status: String,
    pub timeline: String,
    pub owner_id: String,
    pub github_link: String,
    pub live_site: String,
    /// Incremented on every public detail fetch.
    pub view_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    pub fn status_enum(&self) -> Option<WorkStatus> {
        self.status.parse().ok()
    }
}

/// Creation payload. The owner is taken from the session, never from the
/// body; unknown fields in the incoming JSON are dropped by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub overview: String,
    pub status: Option<String>,
    pub timeline: Option<String>,
    pub github_link: Option<String>,
    pub live_site: Option<String>,
}

/// Partial update: only supplied fields change. `owner_id`, `id` and
/// `created_at` cannot be expressed here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub overview: Option<String>,
    pub status: Option<String>,
    pub timeline: Option<String>,
    pub github_link: Option<String>,
    pub live_site: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_drops_owner_field() {
        // Payloads that try to smuggle immutable fields still deserialize;
        // the extra keys simply vanish.
        let req: UpdateProjectRequest = serde_json::from_str(
            r#"{"name":"Alpha","owner_id":"someone-else","id":"forged","created_at":"1970-01-01"}"#,
        )
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Alpha"));
        assert!(req.overview.is_none());
    }

    #[test]
    fn test_create_request_requires_name_and_overview_fields() {
        assert!(serde_json::from_str::<CreateProjectRequest>(r#"{"overview":"x"}"#).is_err());
        assert!(serde_json::from_str::<CreateProjectRequest>(r#"{"name":"x"}"#).is_err());
    }
}
