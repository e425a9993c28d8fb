// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for environment variable access.
//!
//! This module defines the errors that can occur when looking up, parsing, or
//! validating an environment variable. All errors use `thiserror` and carry the
//! name of the variable they concern.

use thiserror::Error;

/// The boxed error produced by an underlying scalar parser.
pub type ParseCause = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for environment variable operations.
///
/// The display text of each variant is stable and is matched verbatim by
/// existing callers, so it must not change.
///
/// # Examples
///
/// ```
/// use hexenv::domain::errors::EnvError;
///
/// let error = EnvError::NotSet {
///     name: "DATABASE_URL".to_string(),
/// };
/// assert_eq!(error.to_string(), "\"DATABASE_URL\" is not set");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// The variable is absent from the environment.
    #[error("{name:?} is not set")]
    NotSet {
        /// The variable that was not set
        name: String,
    },

    /// The variable is present but its value could not be converted.
    #[error("parsing {value:?} as {target_type}: {source}")]
    ParseError {
        /// The variable being parsed
        name: String,
        /// The raw value found in the environment
        value: String,
        /// The name of the requested scalar type
        target_type: &'static str,
        /// The underlying parser error
        source: ParseCause,
    },

    /// A lookup failed before validation could be attempted.
    #[error("could not parse {name:?}: {source}")]
    RetrievalError {
        /// The variable being retrieved
        name: String,
        /// The lookup failure
        source: Box<EnvError>,
    },

    /// The variable parsed but was rejected by a validation rule.
    #[error("{name:?} failed validation: {reason}")]
    ValidationError {
        /// The variable that failed validation
        name: String,
        /// The reason reported by the rule
        reason: String,
    },
}

/// The category of an [`EnvError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`EnvError::NotSet`].
    NotSet,
    /// See [`EnvError::ParseError`].
    Parse,
    /// See [`EnvError::RetrievalError`].
    Retrieval,
    /// See [`EnvError::ValidationError`].
    Validation,
}

impl EnvError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::NotSet { .. } => ErrorKind::NotSet,
            EnvError::ParseError { .. } => ErrorKind::Parse,
            EnvError::RetrievalError { .. } => ErrorKind::Retrieval,
            EnvError::ValidationError { .. } => ErrorKind::Validation,
        }
    }

    /// Returns the name of the variable this error concerns.
    pub fn name(&self) -> &str {
        match self {
            EnvError::NotSet { name }
            | EnvError::ParseError { name, .. }
            | EnvError::RetrievalError { name, .. }
            | EnvError::ValidationError { name, .. } => name,
        }
    }

    /// Wraps a lookup failure as a [`EnvError::RetrievalError`].
    pub(crate) fn retrieval(name: &str, cause: EnvError) -> Self {
        EnvError::RetrievalError {
            name: name.to_string(),
            source: Box::new(cause),
        }
    }
}

/// The error returned when a value is not a recognised boolean literal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid syntax, expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
pub struct ParseBoolLiteralError;

/// The error returned when a variable holds bytes that are not valid Unicode.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("value is not valid unicode")]
pub struct NotUnicodeError;

/// The error returned when an unsigned value carries a sign prefix.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid syntax, unsigned values take no sign")]
pub struct UnsignedSignError;

/// A specialized Result type for environment variable operations.
pub type Result<T> = std::result::Result<T, EnvError>;
