// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed environment variable accessor.
//!
//! This module provides [`EnvAccessor`], which looks a variable up in an
//! [`EnvSource`], converts it to a requested [`EnvScalar`] type and optionally
//! checks it against a [`ValidationRule`].

use crate::adapters::ProcessEnv;
use crate::domain::{EnvError, EnvScalar, Result, ValidationRule};
use crate::ports::EnvSource;

/// Reads typed values from an environment source.
///
/// The accessor holds no state besides its source; every call reads the
/// source afresh. It can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MapEnv;
/// use hexenv::domain::rules::greater_than;
/// use hexenv::service::EnvAccessor;
///
/// # fn main() -> hexenv::domain::Result<()> {
/// let env = EnvAccessor::from_source(
///     MapEnv::new()
///         .with_var("PORT", "8080")
///         .with_var("WORKERS", "abc"),
/// );
///
/// let port: usize = env.get_and_validate("PORT", greater_than(1024))?;
/// assert_eq!(port, 8080);
///
/// // Malformed and missing values both fall back to the default
/// assert_eq!(env.get_or("WORKERS", 4_usize), 4);
/// assert_eq!(env.get_or("THREADS", 2_usize), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnvAccessor<S = ProcessEnv> {
    source: S,
}

impl EnvAccessor<ProcessEnv> {
    /// Creates an accessor over the process environment.
    pub fn new() -> Self {
        Self {
            source: ProcessEnv::new(),
        }
    }

    /// Creates an accessor over the process environment that prepends
    /// `prefix` to every variable name.
    ///
    /// Error messages name the variable as it was requested, without the
    /// prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            source: ProcessEnv::with_prefix(prefix),
        }
    }
}

impl<S: EnvSource> EnvAccessor<S> {
    /// Creates an accessor over an arbitrary source.
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the accessor, returning the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Looks up `name` and parses it as `T`.
    ///
    /// # Errors
    ///
    /// * [`EnvError::NotSet`] - The variable is absent
    /// * [`EnvError::ParseError`] - The value cannot be converted to `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MapEnv;
    /// use hexenv::service::EnvAccessor;
    ///
    /// let env = EnvAccessor::from_source(MapEnv::new().with_var("DEBUG", "true"));
    ///
    /// assert_eq!(env.get::<bool>("DEBUG").unwrap(), true);
    /// assert_eq!(
    ///     env.get::<bool>("VERBOSE").unwrap_err().to_string(),
    ///     "\"VERBOSE\" is not set"
    /// );
    /// ```
    pub fn get<T: EnvScalar>(&self, name: &str) -> Result<T> {
        self.resolve(name).inspect_err(|error| {
            if let EnvError::ParseError { source, .. } = error {
                tracing::debug!(
                    "Could not parse '{}' from source '{}' as {}: {}",
                    name,
                    self.source.name(),
                    T::TYPE_NAME,
                    source
                );
            }
        })
    }

    /// Looks up `name` as `T`, returning `default` on any failure.
    ///
    /// A missing variable and a malformed one are treated the same, and
    /// neither is logged.
    pub fn get_or<T: EnvScalar>(&self, name: &str, default: T) -> T {
        self.resolve(name).unwrap_or(default)
    }

    /// Looks up `name` as `T`, returning the zero value of `T` on any failure.
    pub fn get_or_zero<T: EnvScalar>(&self, name: &str) -> T {
        self.resolve(name).unwrap_or_else(|_| T::zero())
    }

    fn resolve<T: EnvScalar>(&self, name: &str) -> Result<T> {
        let raw = self
            .source
            .lookup(name)?
            .ok_or_else(|| EnvError::NotSet {
                name: name.to_string(),
            })?;

        T::parse_env(&raw).map_err(|source| EnvError::ParseError {
            name: name.to_string(),
            value: raw.clone(),
            target_type: T::TYPE_NAME,
            source,
        })
    }

    /// Looks up `name` as `T` and checks it against `rule`.
    ///
    /// Retrieval is checked first; the rule only ever sees a parsed value.
    ///
    /// # Errors
    ///
    /// * [`EnvError::RetrievalError`] - The lookup failed, wrapping the cause
    /// * [`EnvError::ValidationError`] - The rule rejected the value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexenv::adapters::MapEnv;
    /// use hexenv::domain::rules::greater_than;
    /// use hexenv::service::EnvAccessor;
    ///
    /// let env = EnvAccessor::from_source(MapEnv::new().with_var("INT_VAR", "5"));
    ///
    /// let result: hexenv::domain::Result<isize> =
    ///     env.get_and_validate("INT_VAR", greater_than(10));
    /// assert_eq!(
    ///     result.unwrap_err().to_string(),
    ///     "\"INT_VAR\" failed validation: must be greater than 10"
    /// );
    /// ```
    pub fn get_and_validate<T, R>(&self, name: &str, rule: R) -> Result<T>
    where
        T: EnvScalar,
        R: ValidationRule<T>,
    {
        let value = self
            .get::<T>(name)
            .map_err(|cause| EnvError::retrieval(name, cause))?;

        rule.evaluate(&value).map_err(|reason| {
            tracing::debug!("Variable '{}' failed validation: {}", name, reason);
            EnvError::ValidationError {
                name: name.to_string(),
                reason,
            }
        })?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapEnv;
    use crate::domain::rules::{between, greater_than, less_than, within};
    use crate::domain::ErrorKind;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn accessor(vars: &[(&str, &str)]) -> EnvAccessor<MapEnv> {
        EnvAccessor::from_source(vars.iter().copied().collect())
    }

    #[test]
    fn test_get_each_scalar_type() {
        let env = accessor(&[
            ("STRING_VAR", "abc"),
            ("BOOL_VAR", "true"),
            ("INT_VAR", "42"),
            ("UINT_VAR", "1"),
            ("FLOAT_VAR", "2.5"),
        ]);

        assert_eq!(env.get::<String>("STRING_VAR").unwrap(), "abc");
        assert!(env.get::<bool>("BOOL_VAR").unwrap());
        assert_eq!(env.get::<isize>("INT_VAR").unwrap(), 42);
        assert_eq!(env.get::<usize>("UINT_VAR").unwrap(), 1);
        assert_eq!(env.get::<f64>("FLOAT_VAR").unwrap(), 2.5);
    }

    #[test]
    fn test_get_not_set() {
        let env = accessor(&[]);
        let error = env.get::<isize>("NOT_SET").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotSet);
        assert_eq!(error.to_string(), "\"NOT_SET\" is not set");
    }

    #[test]
    fn test_get_parse_error() {
        let env = accessor(&[("INT_VAR", "abc"), ("UINT_VAR", "-1")]);

        let error = env.get::<isize>("INT_VAR").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert_eq!(
            error.to_string(),
            "parsing \"abc\" as isize: invalid digit found in string"
        );

        let error = env.get::<usize>("UINT_VAR").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_get_or() {
        let env = accessor(&[("INT_VAR", "3"), ("BAD_VAR", "abc")]);
        assert_eq!(env.get_or("INT_VAR", 20_isize), 3);
        assert_eq!(env.get_or("BAD_VAR", 10_isize), 10);
        assert_eq!(env.get_or("NOT_SET", "abc".to_string()), "abc");
    }

    #[test]
    fn test_get_or_zero() {
        let env = accessor(&[("BAD_VAR", "abc")]);
        assert_eq!(env.get_or_zero::<isize>("BAD_VAR"), 0);
        assert_eq!(env.get_or_zero::<String>("NOT_SET"), "");
        assert!(!env.get_or_zero::<bool>("NOT_SET"));
        assert_eq!(env.get_or_zero::<String>("BAD_VAR"), "abc");
    }

    #[test]
    fn test_fallbacks_are_silent() {
        let env = accessor(&[("BAD_VAR", "abc")]);
        let logs = with_captured_logs(|| {
            assert_eq!(env.get_or("BAD_VAR", 10_isize), 10);
            assert_eq!(env.get_or_zero::<usize>("BAD_VAR"), 0);
            assert_eq!(env.get_or("NOT_SET", 1.5_f64), 1.5);
        });
        assert_eq!(logs, "");
    }

    #[test]
    fn test_get_logs_parse_failures() {
        let env = accessor(&[("BAD_VAR", "abc")]);
        let logs = with_captured_logs(|| {
            assert!(env.get::<isize>("BAD_VAR").is_err());
        });
        assert!(logs.contains("Could not parse 'BAD_VAR' from source 'map' as isize"));
    }

    #[test]
    fn test_get_and_validate_passes() {
        let env = accessor(&[("INT_VAR", "3")]);
        let value: isize = env.get_and_validate("INT_VAR", greater_than(2)).unwrap();
        assert_eq!(value, 3);
        let value: isize = env.get_and_validate("INT_VAR", less_than(4)).unwrap();
        assert_eq!(value, 3);
        let value: isize = env.get_and_validate("INT_VAR", between(0, 10)).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_get_and_validate_rejects() {
        let env = accessor(&[("INT_VAR", "5")]);
        let error = env
            .get_and_validate::<isize, _>("INT_VAR", greater_than(10))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(
            error.to_string(),
            "\"INT_VAR\" failed validation: must be greater than 10"
        );
    }

    #[test]
    fn test_get_and_validate_not_set() {
        let env = accessor(&[]);
        let error = env
            .get_and_validate::<isize, _>("NOT_SET", greater_than(0))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Retrieval);
        assert_eq!(
            error.to_string(),
            "could not parse \"NOT_SET\": \"NOT_SET\" is not set"
        );
    }

    #[test]
    fn test_get_and_validate_parse_error_skips_rule() {
        let env = accessor(&[("INT_VAR", "abc")]);
        let rule = |_: &isize| -> std::result::Result<(), String> {
            panic!("rule must not run on an unparseable value")
        };
        let error = env.get_and_validate("INT_VAR", rule).unwrap_err();
        assert_eq!(
            error.to_string(),
            "could not parse \"INT_VAR\": parsing \"abc\" as isize: invalid digit found in string"
        );
    }

    #[test]
    fn test_get_and_validate_within() {
        let env = accessor(&[("STRING_VAR", "develop")]);
        let error = env
            .get_and_validate::<String, _>(
                "STRING_VAR",
                within(["development", "testing", "staging", "production"]),
            )
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "\"STRING_VAR\" failed validation: develop not within [development testing staging production]"
        );
    }

    #[test]
    fn test_source_accessors() {
        let env = accessor(&[("A", "1")]);
        assert_eq!(env.source().name(), "map");
        let source = env.into_source();
        assert_eq!(source.lookup("A").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_accessor_over_boxed_source() {
        let boxed: Box<dyn EnvSource> = Box::new(MapEnv::new().with_var("A", "7"));
        let env = EnvAccessor::from_source(boxed);
        assert_eq!(env.get::<usize>("A").unwrap(), 7);
    }
}
