// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation rules applied to parsed environment variables.
//!
//! A rule is a small value object implementing [`ValidationRule`]. It either
//! accepts a value or returns a human-readable reason for rejecting it. The
//! accessor wraps that reason into a [`ValidationError`](crate::domain::EnvError::ValidationError).
//!
//! Closures of the form `Fn(&T) -> Result<(), String>` are rules as well:
//!
//! ```
//! use hexenv::domain::ValidationRule;
//!
//! let even = |value: &isize| {
//!     if value % 2 == 0 {
//!         Ok(())
//!     } else {
//!         Err(format!("{} is not even", value))
//!     }
//! };
//! assert!(even.evaluate(&4).is_ok());
//! assert_eq!(even.evaluate(&3).unwrap_err(), "3 is not even");
//! ```

use crate::domain::scalar::{EnvScalar, OrderedScalar};
use std::fmt;

/// A predicate over a scalar value with a failure reason.
pub trait ValidationRule<T: EnvScalar> {
    /// Checks `value`, returning the reason it is invalid on failure.
    fn evaluate(&self, value: &T) -> std::result::Result<(), String>;
}

impl<T, F> ValidationRule<T> for F
where
    T: EnvScalar,
    F: Fn(&T) -> std::result::Result<(), String>,
{
    fn evaluate(&self, value: &T) -> std::result::Result<(), String> {
        self(value)
    }
}

/// Accepts values strictly greater than a bound.
#[derive(Clone, Debug, PartialEq)]
pub struct GreaterThan<T> {
    bound: T,
}

/// Creates a rule accepting values strictly greater than `bound`.
///
/// # Examples
///
/// ```
/// use hexenv::domain::rules::{greater_than, ValidationRule};
///
/// let rule = greater_than(10_isize);
/// assert!(rule.evaluate(&11).is_ok());
/// assert_eq!(rule.evaluate(&10).unwrap_err(), "must be greater than 10");
/// ```
pub fn greater_than<T: OrderedScalar>(bound: T) -> GreaterThan<T> {
    GreaterThan { bound }
}

impl<T: OrderedScalar> ValidationRule<T> for GreaterThan<T> {
    fn evaluate(&self, value: &T) -> std::result::Result<(), String> {
        if *value > self.bound {
            Ok(())
        } else {
            Err(format!("must be greater than {}", self.bound))
        }
    }
}

/// Accepts values strictly less than a bound.
#[derive(Clone, Debug, PartialEq)]
pub struct LessThan<T> {
    bound: T,
}

/// Creates a rule accepting values strictly less than `bound`.
pub fn less_than<T: OrderedScalar>(bound: T) -> LessThan<T> {
    LessThan { bound }
}

impl<T: OrderedScalar> ValidationRule<T> for LessThan<T> {
    fn evaluate(&self, value: &T) -> std::result::Result<(), String> {
        if *value < self.bound {
            Ok(())
        } else {
            Err(format!("must be less than {}", self.bound))
        }
    }
}

/// Accepts values inside a closed interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

/// Creates a rule accepting `min <= value <= max`.
///
/// # Examples
///
/// ```
/// use hexenv::domain::rules::{between, ValidationRule};
///
/// let rule = between(0.5, 1.5);
/// assert!(rule.evaluate(&0.5).is_ok());
/// assert!(rule.evaluate(&1.5).is_ok());
/// assert_eq!(rule.evaluate(&2.0).unwrap_err(), "must be between 0.5 and 1.5");
/// ```
pub fn between<T: OrderedScalar>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

impl<T: OrderedScalar> ValidationRule<T> for Between<T> {
    fn evaluate(&self, value: &T) -> std::result::Result<(), String> {
        if *value < self.min || *value > self.max {
            Err(format!("must be between {} and {}", self.min, self.max))
        } else {
            Ok(())
        }
    }
}

/// Accepts values equal to one element of a fixed set.
///
/// Text sets may be built from `&str` elements and still validate `String`
/// variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Within<T> {
    allowed: Vec<T>,
}

/// Creates a rule accepting any value equal to an element of `values`.
///
/// # Examples
///
/// ```
/// use hexenv::domain::rules::{within, ValidationRule};
///
/// let rule = within(["development", "production"]);
/// assert!(rule.evaluate(&"production".to_string()).is_ok());
/// assert_eq!(
///     rule.evaluate(&"staging".to_string()).unwrap_err(),
///     "staging not within [development production]"
/// );
/// ```
pub fn within<T, I>(values: I) -> Within<T>
where
    I: IntoIterator<Item = T>,
{
    Within {
        allowed: values.into_iter().collect(),
    }
}

impl<T> Within<T> {
    fn reject(&self, value: &impl fmt::Display) -> String
    where
        T: fmt::Display,
    {
        let allowed = self
            .allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} not within [{}]", value, allowed)
    }
}

impl<T: EnvScalar> ValidationRule<T> for Within<T> {
    fn evaluate(&self, value: &T) -> std::result::Result<(), String> {
        if self.allowed.contains(value) {
            Ok(())
        } else {
            Err(self.reject(value))
        }
    }
}

impl ValidationRule<String> for Within<&str> {
    fn evaluate(&self, value: &String) -> std::result::Result<(), String> {
        if self.allowed.contains(&value.as_str()) {
            Ok(())
        } else {
            Err(self.reject(value))
        }
    }
}

/// Accepts text that is a single RFC 5322 mailbox.
///
/// Three forms are recognised: a bare address (`john@example.com`), an
/// angle address with an optional display name (`John Doe <john@example.com>`,
/// `<john@example.com>`), and either of those with a quoted local part
/// (`"john doe"@example.com`). Lists of addresses are rejected.
#[cfg(feature = "email")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidEmail;

/// Creates a rule accepting a single mailbox address.
///
/// # Examples
///
/// ```
/// use hexenv::domain::rules::{valid_email, ValidationRule};
///
/// assert!(valid_email().evaluate(&"test@abc.com".to_string()).is_ok());
/// assert!(valid_email()
///     .evaluate(&"John Doe <john@example.com>".to_string())
///     .is_ok());
/// assert_eq!(
///     valid_email().evaluate(&"not-valid".to_string()).unwrap_err(),
///     "not-valid is not a valid email"
/// );
/// ```
#[cfg(feature = "email")]
pub fn valid_email() -> ValidEmail {
    ValidEmail
}

#[cfg(feature = "email")]
impl ValidationRule<String> for ValidEmail {
    fn evaluate(&self, value: &String) -> std::result::Result<(), String> {
        if is_mailbox(value) {
            Ok(())
        } else {
            Err(format!("{} is not a valid email", value))
        }
    }
}

/// Splits `name-addr` into its display name and addr-spec, then checks both.
#[cfg(feature = "email")]
fn is_mailbox(raw: &str) -> bool {
    let raw = raw.trim();
    let addr_spec = match raw.strip_suffix('>') {
        Some(head) => match head.rfind('<') {
            Some(open) if is_display_name(&head[..open]) => &head[open + 1..],
            _ => return false,
        },
        None => raw,
    };

    email_address::EmailAddress::is_valid(addr_spec)
}

/// Returns true for an empty name or a phrase of atoms and quoted strings.
#[cfg(feature = "email")]
fn is_display_name(name: &str) -> bool {
    const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~.";

    let mut chars = name.trim().chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => loop {
                match chars.next() {
                    Some('"') => break,
                    Some('\\') => {
                        if chars.next().is_none() {
                            return false;
                        }
                    }
                    Some(_) => {}
                    None => return false,
                }
            },
            c if c.is_whitespace() => {}
            c if c.is_alphanumeric() || ATEXT_SPECIALS.contains(c) => {}
            _ => return false,
        }
    }
    true
}

/// Accepts text that is a syntactically well-formed URL reference.
///
/// Absolute URLs must carry a scheme the `url` crate can parse. Relative
/// references such as `/abc/efg` are accepted as long as their first path
/// segment has no colon. Reachability is not checked.
#[cfg(feature = "url")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidUrl;

/// Creates a rule accepting well-formed URLs.
///
/// # Examples
///
/// ```
/// use hexenv::domain::rules::{valid_url, ValidationRule};
///
/// assert!(valid_url()
///     .evaluate(&"http://localhost:8080/abc/efg".to_string())
///     .is_ok());
/// assert!(valid_url().evaluate(&"/abc/efg".to_string()).is_ok());
/// assert!(valid_url().evaluate(&"http://192.168.0.%31/".to_string()).is_err());
/// ```
#[cfg(feature = "url")]
pub fn valid_url() -> ValidUrl {
    ValidUrl
}

#[cfg(feature = "url")]
impl ValidationRule<String> for ValidUrl {
    fn evaluate(&self, value: &String) -> std::result::Result<(), String> {
        if is_url_reference(value) {
            Ok(())
        } else {
            Err(format!("{} is not a valid url", value))
        }
    }
}

/// Base that scheme-less references are resolved against.
#[cfg(feature = "url")]
const RELATIVE_BASE: &str = "http://relative.invalid/";

#[cfg(feature = "url")]
fn is_url_reference(raw: &str) -> bool {
    if raw.bytes().any(|b| b.is_ascii_control())
        || has_malformed_escape(raw)
        || host_has_escaped_ascii(raw)
    {
        return false;
    }

    if has_scheme(raw) {
        return url::Url::parse(raw).is_ok();
    }

    let first_segment = raw.split(['/', '?', '#']).next().unwrap_or("");
    if first_segment.contains(':') {
        return false;
    }
    url::Url::parse(RELATIVE_BASE)
        .and_then(|base| base.join(raw))
        .is_ok()
}

/// Returns true when `raw` starts with `scheme ":"`.
#[cfg(feature = "url")]
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Returns true when a `%` outside the query is not followed by two hex digits.
///
/// The query is left to the application, so its escapes are not checked.
#[cfg(feature = "url")]
fn has_malformed_escape(raw: &str) -> bool {
    let (before_fragment, fragment) = match raw.split_once('#') {
        Some((head, fragment)) => (head, fragment),
        None => (raw, ""),
    };
    let before_query = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(head, _)| head);

    [before_query, fragment].iter().any(|part| {
        let bytes = part.as_bytes();
        bytes.iter().enumerate().any(|(i, &b)| {
            b == b'%'
                && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        })
    })
}

/// Returns true when the authority's host percent-encodes an ASCII byte.
///
/// Escapes in a host are only meaningful for non-ASCII bytes, and bracketed
/// IPv6 literals may carry an escaped zone id, so those are left alone.
#[cfg(feature = "url")]
fn host_has_escaped_ascii(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    if host.starts_with('[') {
        return false;
    }

    host.as_bytes().windows(3).any(|window| {
        window[0] == b'%'
            && std::str::from_utf8(&window[1..])
                .ok()
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .is_some_and(|byte| byte.is_ascii())
    })
}
