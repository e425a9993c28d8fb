// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities for tests that touch the process environment.
//!
//! Tests run in parallel within one process, so every test must use variable
//! names no other test uses.

use std::env;

/// Sets environment variables and removes them again on drop.
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    /// Creates a guard that owns no variables yet.
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    /// Sets `key` to `value` and remembers it for cleanup.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        env::set_var(key, value);
        self.keys.push(key.to_string());
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
