//! Input validation for API requests.
//!
//! Wire-format checks only: id shapes, lengths, URL fields. Required-field
//! and status-vocabulary checks live in the core operations, which reject
//! before anything touches the store.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating HTTP/HTTPS URLs (project links)
    static ref HTTP_URL_REGEX: Regex = Regex::new(
        r"^https?://[a-zA-Z0-9][-a-zA-Z0-9]*(\.[a-zA-Z0-9][-a-zA-Z0-9]*)*(:\d+)?(/[-a-zA-Z0-9_%&=+@~.#?]*)*/?$"
    ).unwrap();
}

/// Validate an id path segment (all ids are UUIDs)
pub fn validate_uuid(id: &str, field_name: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err(format!("{} is required", field_name));
    }

    if uuid::Uuid::parse_str(id).is_err() {
        return Err(format!("Invalid {} format", field_name));
    }

    Ok(())
}

/// Validate a project or task name/title
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.len() > 120 {
        return Err("Name is too long (max 120 characters)".to_string());
    }
    Ok(())
}

/// Validate a free-form text body (overview, description, note)
pub fn validate_text(text: &str) -> Result<(), String> {
    if text.len() > 20_000 {
        return Err("Text is too long (max 20000 characters)".to_string());
    }
    Ok(())
}

/// Validate an optional link field. Empty string is treated as "no link",
/// matching the stored default.
pub fn validate_link(link: &Option<String>) -> Result<(), String> {
    if let Some(url) = link {
        if url.is_empty() {
            return Ok(());
        }
        if url.len() > 2048 {
            return Err("Link is too long (max 2048 characters)".to_string());
        }
        if !HTTP_URL_REGEX.is_match(url) {
            return Err("Link must be an HTTP(S) URL".to_string());
        }
    }
    Ok(())
}

/// Validate a ?limit= query value
pub fn validate_limit(limit: i64) -> Result<(), String> {
    if limit < 1 || limit > 100 {
        return Err("Limit must be between 1 and 100".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000", "project_id").is_ok());
        assert!(validate_uuid("", "project_id").is_err());
        assert!(validate_uuid("not-a-uuid", "project_id").is_err());
    }

    #[test]
    fn test_validate_name_length() {
        assert!(validate_name("Alpha").is_ok());
        assert!(validate_name(&"x".repeat(120)).is_ok());
        assert!(validate_name(&"x".repeat(121)).is_err());
    }

    #[test]
    fn test_validate_link() {
        assert!(validate_link(&None).is_ok());
        assert!(validate_link(&Some(String::new())).is_ok());
        assert!(validate_link(&Some("https://github.com/u1/alpha".to_string())).is_ok());
        assert!(validate_link(&Some("http://example.com:8080/path".to_string())).is_ok());
        assert!(validate_link(&Some("ftp://example.com".to_string())).is_err());
        assert!(validate_link(&Some("not a url".to_string())).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(100).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(101).is_err());
        assert!(validate_limit(-5).is_err());
    }
}
