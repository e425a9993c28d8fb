// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait (port) through which the accessor reads the
//! environment table. Adapters in the adapters layer implement it.

pub mod source;

pub use source::EnvSource;
