//! # Routematch
//!
//! Matches a request path against a single route pattern and reports the
//! params it bound.
//!
//! Patterns are `/`-separated segments, each one of:
//!
//! * literal text, which must equal the url segment exactly
//! * `*`, which accepts any one url segment
//! * `**`, which accepts any number of url segments (see below)
//! * `:name`, which binds any one url segment to `name`
//! * `:name:type`, which binds a url segment only if it parses as `type`,
//!   one of `byte ubyte short ushort int uint long ulong float double
//!   bool uuid`
//!
//! Empty segments are ignored in both patterns and urls, and a url query
//! string is dropped before matching.
//!
//! ```rust
//! let result = routematch::matches("/bank/12345/balance", "/bank/:account-id:int/balance")?;
//! assert!(result.is_match());
//! assert_eq!(result.get("account-id"), Some("12345"));
//!
//! let result = routematch::matches("/bank/savings/balance", "/bank/:account-id:int/balance")?;
//! assert!(!result.is_match());
//! assert!(result.bindings().is_empty());
//! # Ok::<(), routematch::Error>(())
//! ```
//!
//! ## Multi-segment wildcards
//!
//! A trailing `**` accepts whatever is left of the url, including nothing,
//! and a pattern that starts with `**` accepts every url. A `**` in the
//! middle of a pattern drops url segments one at a time until the next
//! pattern segment accepts one. This is a single forward scan, not a
//! search: once the segment after the `**` has matched, the wildcard is
//! finished, even if a later mismatch could have been avoided by letting
//! the wildcard take more.
//!
//! ```rust
//! # use routematch::matches;
//! assert!(matches("/a/x/y/b", "/a/**/b")?.is_match());
//! assert!(!matches("/a/b/b/c", "/a/**/b/c")?.is_match());
//! # Ok::<(), routematch::Error>(())
//! ```
//!
//! ## Errors
//!
//! A url that does not match is an ordinary [`MatchResult`]. An
//! [`Error`] is returned only for a malformed pattern (`:` with no name)
//! or when either input has more segments than the [`Matcher`] allows
//! ([`DEFAULT_MAX_SEGMENTS`] by default).
//!
//! Patterns that are matched more than once can be classified up front
//! with [`Matcher::compile`] or [`str::parse`] into a [`Pattern`].
#![forbid(unsafe_code)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    unused_qualifications
)]

mod bindings;
pub use bindings::{Binding, Bindings};

mod error;
pub use error::{Error, Input};

mod match_result;
pub use match_result::MatchResult;

mod matcher;
pub use matcher::{Matcher, DEFAULT_MAX_SEGMENTS};

mod param_type;
pub use param_type::ParamType;

mod pattern;
pub use pattern::Pattern;

mod segment;
pub use segment::Segment;

mod segments;
pub use segments::Segments;

/// Matches `url` against `pattern` with the default [`Matcher`].
///
/// Returns a non-matching [`MatchResult`] when the url does not fit the
/// pattern, and an [`Error`] when the pattern is malformed or either input
/// has more than [`DEFAULT_MAX_SEGMENTS`] segments.
pub fn matches<'url>(url: &'url str, pattern: &str) -> Result<MatchResult<'static, 'url>, Error> {
    Matcher::default().matches(url, pattern)
}
