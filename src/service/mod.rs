// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed accessor.
//!
//! This module contains [`EnvAccessor`] and a set of free functions that read
//! the process environment directly, for startup code that has no need to
//! choose a source.

pub mod accessor;

// Re-export commonly used types
pub use accessor::EnvAccessor;

use crate::domain::{EnvScalar, Result, ValidationRule};

/// Reads `name` from the process environment as `T`.
///
/// See [`EnvAccessor::get`].
pub fn get<T: EnvScalar>(name: &str) -> Result<T> {
    EnvAccessor::new().get(name)
}

/// Reads `name` from the process environment as `T`, falling back to
/// `default` when it is missing or malformed.
///
/// # Examples
///
/// ```rust
/// let workers = hexenv::get_with_default("HEXENV_DOC_UNSET_WORKERS", 4_usize);
/// assert_eq!(workers, 4);
/// ```
pub fn get_with_default<T: EnvScalar>(name: &str, default: T) -> T {
    EnvAccessor::new().get_or(name, default)
}

/// Reads `name` from the process environment as `T`, falling back to the
/// zero value of `T`.
pub fn get_or_zero<T: EnvScalar>(name: &str) -> T {
    EnvAccessor::new().get_or_zero(name)
}

/// Reads `name` from the process environment as `T` and checks it against
/// `rule`.
///
/// See [`EnvAccessor::get_and_validate`].
pub fn get_and_validate<T, R>(name: &str, rule: R) -> Result<T>
where
    T: EnvScalar,
    R: ValidationRule<T>,
{
    EnvAccessor::new().get_and_validate(name, rule)
}
