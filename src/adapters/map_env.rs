// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment source adapter.

use crate::domain::Result;
use crate::ports::EnvSource;
use std::collections::HashMap;

/// Environment source backed by an owned map of variables.
///
/// Useful in tests, and for embedding applications that receive their
/// environment as data rather than from the process.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MapEnv;
/// use hexenv::ports::EnvSource;
///
/// let source = MapEnv::new()
///     .with_var("PORT", "8080")
///     .with_var("DEBUG", "true");
///
/// assert_eq!(source.lookup("PORT").unwrap().as_deref(), Some("8080"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable to the source.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, name: &str) -> Result<Option<String>> {
        Ok(self.vars.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let source = MapEnv::new().with_var("KEY", "value");
        assert_eq!(source.lookup("KEY").unwrap().as_deref(), Some("value"));
        assert!(source.lookup("key").unwrap().is_none());
    }

    #[test]
    fn test_map_env_set_and_remove() {
        let mut source = MapEnv::new();
        source.set("KEY", "one");
        source.set("KEY", "two");
        assert_eq!(source.lookup("KEY").unwrap().as_deref(), Some("two"));

        source.remove("KEY");
        assert!(source.lookup("KEY").unwrap().is_none());
    }

    #[test]
    fn test_map_env_from_iterator() {
        let source: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(source.lookup("B").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_map_env_from_hash_map() {
        let mut vars = HashMap::new();
        vars.insert("HOST".to_string(), "localhost".to_string());
        let source = MapEnv::from(vars);
        assert_eq!(source.name(), "map");
        assert_eq!(source.lookup("HOST").unwrap().as_deref(), Some("localhost"));
    }
}
