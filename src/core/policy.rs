//! The ownership check applied uniformly across every resource kind.
//!
//! An operation is allowed when it is a public read, or when a caller is
//! present and equals the stored owner reference. Identity comparison is
//! exact string equality on opaque ids; there is no role or token that
//! overrides it.

use super::error::CoreError;

/// Identity of the authenticated actor, or `None` for anonymous requests.
pub type CallerId<'a> = Option<&'a str>;

/// Require an authenticated caller, returning its id.
pub fn require_caller(caller: CallerId<'_>) -> Result<&str, CoreError> {
    caller.ok_or(CoreError::Unauthenticated)
}

/// Require that the caller is the stored owner.
///
/// Anonymous callers fail with `Unauthenticated`; authenticated non-owners
/// fail with `Forbidden`. The two are never conflated.
pub fn check_owner(caller: CallerId<'_>, owner_id: &str) -> Result<(), CoreError> {
    let caller = require_caller(caller)?;
    if caller == owner_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_unauthenticated() {
        assert!(matches!(
            check_owner(None, "u1"),
            Err(CoreError::Unauthenticated)
        ));
        assert!(matches!(require_caller(None), Err(CoreError::Unauthenticated)));
    }

    #[test]
    fn test_owner_is_allowed() {
        assert!(check_owner(Some("u1"), "u1").is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        assert!(matches!(
            check_owner(Some("u2"), "u1"),
            Err(CoreError::Forbidden)
        ));
    }

    #[test]
    fn test_comparison_is_exact() {
        // No prefix/suffix or case slack on opaque ids.
        assert!(check_owner(Some("U1"), "u1").is_err());
        assert!(check_owner(Some("u1 "), "u1").is_err());
        assert!(check_owner(Some(""), "").is_ok());
    }
}
