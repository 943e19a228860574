//! Registration, login and session handling.
//!
//! Sessions are bearer tokens: a random 32-byte value handed out once at
//! login, stored server-side only as a SHA-256 digest. Requests may carry
//! the token in an `Authorization: Bearer` header or in the session
//! cookie; both resolve through the same lookup.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::db::models::{LoginRequest, LoginResponse, RegisterRequest, Session, User, UserResponse};
use crate::db::DbPool;
use crate::AppState;

use super::error::ApiError;

/// Name of the session cookie set at login.
pub const SESSION_COOKIE: &str = "taskdock_session";

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Generate a random session token
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

/// Hash a token for storage
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns None if valid, or Some(error_message) if invalid
fn validate_password(password: &str) -> Option<String> {
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

/// Register a new account. Email uniqueness is enforced here and by the
/// UNIQUE constraint underneath.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if request.email.is_empty() || !request.email.contains('@') {
        return Err(ApiError::validation_field("email", "Invalid email address"));
    }
    if request.name.trim().is_empty() {
        return Err(ApiError::validation_field("name", "Name is required"));
    }
    if let Some(error) = validate_password(&request.password) {
        return Err(ApiError::validation_field("password", error));
    }

    let existing: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&request.email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::conflict("An account with this email already exists"));
    }

    let id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {}", e)))?;

    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, password_hash, name, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&id)
    .bind(&request.email)
    .bind(&password_hash)
    .bind(&request.name)
    .bind(&now)
    .bind(&now)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Registered user {}", user.email);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login endpoint
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&request.email)
        .fetch_optional(&state.db)
        .await?;

    let user = user.ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = generate_token();
    let token_hash = hash_token(&token);

    let ttl_days = state.config.auth.session_ttl_days;
    let expires_at = (chrono::Utc::now() + chrono::Duration::days(ttl_days)).to_rfc3339();

    let session_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    sqlx::query(
        "INSERT INTO sessions (id, user_id, token_hash, expires_at, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&session_id)
    .bind(&user.id)
    .bind(&token_hash)
    .bind(&expires_at)
    .bind(&now)
    .execute(&state.db)
    .await?;

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            token,
            user: UserResponse::from(user),
        }),
    ))
}

/// Revoke the current session
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    if let Some(token) = extract_token(&headers, &jar) {
        let token_hash = hash_token(&token);
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(&token_hash)
            .execute(&state.db)
            .await?;
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((jar, StatusCode::NO_CONTENT))
}

/// Current user endpoint
pub async fn me(user: User) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

/// Extract the session token from the Authorization header or the cookie
fn extract_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    if let Some(auth_header) = headers.get("Authorization").and_then(|h| h.to_str().ok()) {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Resolve a token to its user. Expired or unknown sessions are anonymous.
pub async fn get_current_user(pool: &DbPool, token: &str) -> Result<User, ApiError> {
    let token_hash = hash_token(token);
    let session: Option<Session> = sqlx::query_as("SELECT * FROM sessions WHERE token_hash = ?")
        .bind(&token_hash)
        .fetch_optional(pool)
        .await?;

    let session = session.ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

    let expired = chrono::DateTime::parse_from_rfc3339(&session.expires_at)
        .map(|t| t <= chrono::Utc::now())
        .unwrap_or(true);
    if expired {
        return Err(ApiError::unauthorized("Session expired"));
    }

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&session.user_id)
        .fetch_optional(pool)
        .await?;

    user.ok_or_else(|| ApiError::unauthorized("Not authenticated"))
}

/// Extractor for the current authenticated user
#[async_trait]
impl FromRequestParts<Arc<AppState>> for User {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = extract_token(&parts.headers, &jar)
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;
        get_current_user(&state.db, &token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("correct horse battery", "not-a-hash"));
    }

    #[test]
    fn test_tokens_are_unique_and_digested() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        // The stored digest never matches the raw token.
        assert_ne!(hash_token(&a), a);
        assert_eq!(hash_token(&a), hash_token(&a));
    }

    #[test]
    fn test_validate_password_minimum() {
        assert!(validate_password("short").is_some());
        assert!(validate_password("long enough").is_none());
    }

    #[test]
    fn test_extract_token_prefers_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer abc123".parse().unwrap());
        headers.insert("Cookie", format!("{}=cookie-token", SESSION_COOKIE).parse().unwrap());
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(extract_token(&headers, &jar).as_deref(), Some("abc123"));

        let mut cookie_only = HeaderMap::new();
        cookie_only.insert("Cookie", format!("{}=cookie-token", SESSION_COOKIE).parse().unwrap());
        let jar = CookieJar::from_headers(&cookie_only);
        assert_eq!(
            extract_token(&cookie_only, &jar).as_deref(),
            Some("cookie-token")
        );

        let empty = HeaderMap::new();
        let jar = CookieJar::from_headers(&empty);
        assert!(extract_token(&empty, &jar).is_none());
    }
}
