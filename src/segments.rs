use crate::{error::Input, Error};
use std::iter::FusedIterator;

/// Lazily splits a path or pattern into its non-empty `/`-delimited
/// segments, stopping at the first `?`.
///
/// ```
/// let segments: Vec<_> = routematch::Segments::new("//users/andrew/?tab=1").collect();
/// assert_eq!(segments, ["users", "andrew"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

#[inline]
fn next_delimiter(s: &str) -> Option<usize> {
    #[cfg(feature = "memchr")]
    return memchr::memchr2(b'/', b'?', s.as_bytes());
    #[cfg(not(feature = "memchr"))]
    return s.find(['/', '?']);
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches('/');
        if rest.is_empty() || rest.starts_with('?') {
            self.rest = "";
            return None;
        }

        let (segment, rest) = match next_delimiter(rest) {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };

        self.rest = rest;
        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}

/// Collects the segments of `input`, failing instead of growing past
/// `max_segments`.
pub(crate) fn split(input: &str, max_segments: usize, kind: Input) -> Result<Vec<&str>, Error> {
    let mut segments = Vec::new();
    for segment in Segments::new(input) {
        if segments.len() == max_segments {
            return Err(Error::TooManySegments {
                max: max_segments,
                input: kind,
            });
        }
        segments.push(segment);
    }
    Ok(segments)
}
