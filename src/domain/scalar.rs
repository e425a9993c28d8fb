// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of scalar types an environment variable can be read as.
//!
//! Five types are supported: `String`, `bool`, `isize`, `usize` and `f64`.
//! The [`EnvScalar`] trait is sealed, so the set cannot be extended from
//! outside this crate.

use crate::domain::errors::{ParseBoolLiteralError, ParseCause, UnsignedSignError};
use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for bool {}
    impl Sealed for isize {}
    impl Sealed for usize {}
    impl Sealed for f64 {}
}

/// A scalar type that an environment variable can be converted into.
///
/// Each implementation provides the conversion from the raw variable text, the
/// zero value returned by the zero-defaulting lookups, and the type name used
/// in error messages.
///
/// # Examples
///
/// ```
/// use hexenv::domain::EnvScalar;
///
/// assert_eq!(usize::parse_env("8080").unwrap(), 8080);
/// assert_eq!(bool::parse_env("T").unwrap(), true);
/// assert_eq!(f64::zero(), 0.0);
/// ```
pub trait EnvScalar:
    sealed::Sealed + Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The name used for this type in error messages.
    const TYPE_NAME: &'static str;

    /// Returns the zero value of this type.
    fn zero() -> Self;

    /// Converts the raw text of a variable into this type.
    fn parse_env(raw: &str) -> std::result::Result<Self, ParseCause>;
}

/// A scalar type with a total enough ordering to support range rules.
///
/// Implemented for the numeric scalars `isize`, `usize` and `f64`.
pub trait OrderedScalar: EnvScalar + PartialOrd {}

impl OrderedScalar for isize {}
impl OrderedScalar for usize {}
impl OrderedScalar for f64 {}

impl EnvScalar for String {
    const TYPE_NAME: &'static str = "string";

    fn zero() -> Self {
        String::new()
    }

    fn parse_env(raw: &str) -> std::result::Result<Self, ParseCause> {
        Ok(raw.to_string())
    }
}

impl EnvScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn parse_env(raw: &str) -> std::result::Result<Self, ParseCause> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ParseBoolLiteralError.into()),
        }
    }
}

impl EnvScalar for isize {
    const TYPE_NAME: &'static str = "isize";

    fn zero() -> Self {
        0
    }

    fn parse_env(raw: &str) -> std::result::Result<Self, ParseCause> {
        Ok(raw.parse::<isize>()?)
    }
}

impl EnvScalar for usize {
    const TYPE_NAME: &'static str = "usize";

    fn zero() -> Self {
        0
    }

    fn parse_env(raw: &str) -> std::result::Result<Self, ParseCause> {
        // std accepts a leading '+' for unsigned types.
        if raw.starts_with('+') {
            return Err(UnsignedSignError.into());
        }
        // Parse at 64 bits first so 32-bit targets report narrowing separately.
        let wide = raw.parse::<u64>()?;
        Ok(usize::try_from(wide)?)
    }
}

impl EnvScalar for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn zero() -> Self {
        0.0
    }

    fn parse_env(raw: &str) -> std::result::Result<Self, ParseCause> {
        Ok(raw.parse::<f64>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(String::parse_env("abc").unwrap(), "abc");
        assert_eq!(String::parse_env("").unwrap(), "");
        assert_eq!(String::parse_env("  spaces  ").unwrap(), "  spaces  ");
    }

    #[test]
    fn test_bool_true_literals() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(bool::parse_env(raw).unwrap(), "Failed for value: {}", raw);
        }
    }

    #[test]
    fn test_bool_false_literals() {
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!bool::parse_env(raw).unwrap(), "Failed for value: {}", raw);
        }
    }

    #[test]
    fn test_bool_rejects_other_spellings() {
        for raw in ["yes", "no", "on", "off", "tRuE", "", " true", "2"] {
            assert!(bool::parse_env(raw).is_err(), "Accepted value: {:?}", raw);
        }
    }

    #[test]
    fn test_isize() {
        assert_eq!(isize::parse_env("42").unwrap(), 42);
        assert_eq!(isize::parse_env("-42").unwrap(), -42);
        assert_eq!(isize::parse_env("+7").unwrap(), 7);
        assert!(isize::parse_env("2.75").is_err());
        assert!(isize::parse_env("abc").is_err());
        assert!(isize::parse_env(" 1").is_err());
    }

    #[test]
    fn test_isize_out_of_range() {
        let too_big = format!("{}0", isize::MAX);
        assert!(isize::parse_env(&too_big).is_err());
    }

    #[test]
    fn test_usize() {
        assert_eq!(usize::parse_env("1").unwrap(), 1);
        assert_eq!(usize::parse_env("0").unwrap(), 0);
        assert!(usize::parse_env("-1").is_err());
        assert!(usize::parse_env("18446744073709551616").is_err());
    }

    #[test]
    fn test_usize_rejects_sign_prefix() {
        for raw in ["+1", "+0", "+", "-0"] {
            assert!(usize::parse_env(raw).is_err(), "Accepted value: {:?}", raw);
        }
        let error = usize::parse_env("+1").unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid syntax, unsigned values take no sign"
        );
    }

    #[test]
    fn test_f64() {
        assert_eq!(f64::parse_env("2.75").unwrap(), 2.75);
        assert_eq!(f64::parse_env("-2.5e3").unwrap(), -2500.0);
        assert_eq!(f64::parse_env("7").unwrap(), 7.0);
        assert!(f64::parse_env("not_a_float").is_err());
        assert!(f64::parse_env("1.2.3").is_err());
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(String::zero(), "");
        assert!(!bool::zero());
        assert_eq!(isize::zero(), 0);
        assert_eq!(usize::zero(), 0);
        assert_eq!(f64::zero(), 0.0);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(String::TYPE_NAME, "string");
        assert_eq!(bool::TYPE_NAME, "bool");
        assert_eq!(isize::TYPE_NAME, "isize");
        assert_eq!(usize::TYPE_NAME, "usize");
        assert_eq!(f64::TYPE_NAME, "f64");
    }
}
