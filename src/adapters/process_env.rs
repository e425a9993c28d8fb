// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment source adapter.
//!
//! This module provides an adapter that reads variables from the environment
//! of the current process at call time.

use crate::domain::errors::NotUnicodeError;
use crate::domain::{EnvError, Result};
use crate::ports::EnvSource;
use std::env::{self, VarError};

/// Environment source backed by the current process environment.
///
/// Every lookup reads the live environment, so changes made with
/// [`std::env::set_var`] are visible to the next call. An optional prefix is
/// prepended to every requested name.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::ProcessEnv;
/// use hexenv::ports::EnvSource;
///
/// // Read variables by their exact names
/// let source = ProcessEnv::new();
///
/// // Read `MYAPP_PORT` when asked for `PORT`
/// let source = ProcessEnv::with_prefix("MYAPP_");
/// assert_eq!(source.qualify("PORT"), "MYAPP_PORT");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessEnv {
    /// Optional prefix prepended to every variable name
    prefix: Option<String>,
}

impl ProcessEnv {
    /// Creates a source that reads variables by their exact names.
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates a source that prepends `prefix` to every requested name.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to prepend (e.g., "APP_")
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the configured prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the variable name actually read for `name`.
    pub fn qualify(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn lookup(&self, name: &str) -> Result<Option<String>> {
        let qualified = self.qualify(name);

        match env::var(&qualified) {
            Ok(value) => {
                tracing::trace!("Read environment variable '{}'", qualified);
                Ok(Some(value))
            }
            Err(VarError::NotPresent) => {
                tracing::trace!("Environment variable '{}' is not present", qualified);
                Ok(None)
            }
            Err(VarError::NotUnicode(raw)) => Err(EnvError::ParseError {
                name: name.to_string(),
                value: raw.to_string_lossy().into_owned(),
                target_type: "unicode text",
                source: Box::new(NotUnicodeError),
            }),
        }
    }
}
