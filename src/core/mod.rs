//! Ownership and lifecycle policy.
//!
//! Everything here is transport-independent: operations take the caller
//! identity (or its absence) and a store collaborator, decide whether the
//! request may proceed, and compute the resulting state. No HTTP types, no
//! logging, no retries; every failure propagates with its kind intact so
//! the handler layer can map it to a status code.

pub mod error;
pub mod policy;
pub mod projects;
pub mod store;
pub mod tasks;
pub mod todos;

#[cfg(test)]
pub(crate) mod testing;

pub use error::CoreError;
pub use policy::{check_owner, require_caller, CallerId};

/// Parse an optional status/priority value, falling back to the type's
/// default when absent. Unknown values are a validation failure, never
/// stored.
pub(crate) fn parse_field<T>(field: &'static str, raw: Option<&str>) -> Result<T, CoreError>
where
    T: Default + std::str::FromStr<Err = String>,
{
    match raw {
        None => Ok(T::default()),
        Some(s) => s.parse().map_err(|message| CoreError::Validation { field, message }),
    }
}
