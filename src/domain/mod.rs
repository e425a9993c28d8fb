// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the error taxonomy, the closed set of scalar types a
//! variable can be read as, and the validation rules applied after parsing.
//! It does not touch the process environment.

pub mod errors;
pub mod rules;
pub mod scalar;

// Re-export commonly used types
pub use errors::{EnvError, ErrorKind, Result};
pub use rules::ValidationRule;
pub use scalar::{EnvScalar, OrderedScalar};
