// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to environment variables.
//!
//! This crate reads a single environment variable, converts it to one of a
//! small, closed set of scalar types and optionally validates the result. It is
//! meant for application startup and configuration code.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Scalar types, validation rules and errors (`EnvScalar`, `ValidationRule`, `EnvError`)
//! - **Ports**: The trait through which the environment table is read (`EnvSource`)
//! - **Adapters**: Implementations for the process environment and in-memory maps
//! - **Service**: The typed accessor that ties lookup, parsing and validation together
//!
//! # Supported Types
//!
//! | Type | Accepted text |
//! |---|---|
//! | `String` | anything |
//! | `bool` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `isize` | base-10 integer with optional sign |
//! | `usize` | base-10 non-negative integer |
//! | `f64` | decimal or scientific notation |
//!
//! # Feature Flags
//!
//! - `email`: Enable the `valid_email` rule (default)
//! - `url`: Enable the `valid_url` rule (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use hexenv::prelude::*;
//!
//! # fn main() -> hexenv::domain::Result<()> {
//! let env = EnvAccessor::from_source(
//!     MapEnv::new()
//!         .with_var("APP_ENV", "staging")
//!         .with_var("MAX_CONNECTIONS", "64"),
//! );
//!
//! let app_env: String = env.get_and_validate(
//!     "APP_ENV",
//!     within(["development", "staging", "production"]),
//! )?;
//! let max_connections: usize = env.get_and_validate("MAX_CONNECTIONS", between(1, 1024))?;
//! let debug: bool = env.get_or("DEBUG", false);
//!
//! assert_eq!(app_env, "staging");
//! assert_eq!(max_connections, 64);
//! assert!(!debug);
//! # Ok(())
//! # }
//! ```
//!
//! The free functions [`get`], [`get_with_default`], [`get_or_zero`] and
//! [`get_and_validate`] do the same against the process environment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use service::{get, get_and_validate, get_or_zero, get_with_default};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{MapEnv, ProcessEnv};
    pub use crate::domain::rules::{between, greater_than, less_than, within};
    pub use crate::domain::{EnvError, EnvScalar, ErrorKind, Result, ValidationRule};
    pub use crate::ports::EnvSource;
    pub use crate::service::EnvAccessor;

    #[cfg(feature = "email")]
    pub use crate::domain::rules::valid_email;
    #[cfg(feature = "url")]
    pub use crate::domain::rules::valid_url;
}
