// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing environment source implementations.
//!
//! Each adapter implements the `EnvSource` trait from the ports layer.

pub mod map_env;
pub mod process_env;

pub use map_env::MapEnv;
pub use process_env::ProcessEnv;
