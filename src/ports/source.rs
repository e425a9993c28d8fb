// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvSource` trait, the port through which the
//! accessor reads raw variable text. The process environment is the usual
//! source, but anything that maps names to text can implement it.

use crate::domain::Result;

/// A read-only table of environment variables.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so an accessor can be shared across
/// threads. Sources never mutate the table they read.
///
/// # Examples
///
/// ```rust
/// use hexenv::ports::EnvSource;
/// use hexenv::domain::Result;
///
/// struct Fixed;
///
/// impl EnvSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn lookup(&self, name: &str) -> Result<Option<String>> {
///         Ok((name == "PORT").then(|| "8080".to_string()))
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.lookup("PORT").unwrap().as_deref(), Some("8080"));
/// assert!(source.lookup("HOST").unwrap().is_none());
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns a short identifier for this source, used in log events.
    fn name(&self) -> &str;

    /// Returns the raw text of the variable `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - The variable is set
    /// * `Ok(None)` - The variable is not set
    /// * `Err(EnvError)` - The variable is set but its text cannot be read
    fn lookup(&self, name: &str) -> Result<Option<String>>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, name: &str) -> Result<Option<String>> {
        (**self).lookup(name)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, name: &str) -> Result<Option<String>> {
        (**self).lookup(name)
    }
}
