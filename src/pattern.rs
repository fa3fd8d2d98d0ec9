use crate::{
    error::Input, matcher::match_segments, segments, Error, MatchResult, Segment,
    DEFAULT_MAX_SEGMENTS,
};
use smartstring::alias::String as SmartString;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A classified route pattern
///
/// This contains both an optional source string and an ordered sequence
/// of [`Segment`]s. Classifying once up front means a malformed pattern
/// is reported when the route table is built, and repeated matches skip
/// the work. Matching a [`Pattern`] behaves exactly like matching its
/// source string with [`crate::matches`].
#[derive(Eq, Debug, Clone)]
pub struct Pattern {
    source: Option<SmartString>,
    segments: Vec<Segment>,
    max_segments: usize,
}

/// Patterns are equal when they have the same segments and the same url
/// segment limit. The source string is not compared.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments && self.max_segments == other.max_segments
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            f.write_fmt(format_args!("/{segment}"))?;
        }
        Ok(())
    }
}

impl Pattern {
    pub(crate) fn parse_with_limit(source: &str, max_segments: usize) -> Result<Self, Error> {
        let segments = segments::split(source, max_segments, Input::Pattern)?
            .into_iter()
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "log")]
        log::trace!("classified {source:?} as {segments:?}");

        Ok(Self {
            source: Some(SmartString::from(source)),
            segments,
            max_segments,
        })
    }

    /// Builds a pattern from already classified segments.
    ///
    /// Fails if there are more than [`DEFAULT_MAX_SEGMENTS`] of them, or if
    /// any segment would not read back as itself from pattern text: an
    /// exact segment that is empty, contains `/` or `?`, or looks like a
    /// wildcard or param, or a param with an empty or `:`-containing name.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, Error> {
        if segments.len() > DEFAULT_MAX_SEGMENTS {
            return Err(Error::TooManySegments {
                max: DEFAULT_MAX_SEGMENTS,
                input: Input::Pattern,
            });
        }

        for segment in &segments {
            let text = segment.to_string();
            if text.contains(['/', '?']) {
                return Err(Error::syntax(&text, "segments cannot contain / or ?"));
            }

            if Segment::parse(&text)? != *segment {
                return Err(Error::syntax(&text, "segment does not parse back as itself"));
            }
        }

        Ok(Self {
            source: None,
            segments,
            max_segments: DEFAULT_MAX_SEGMENTS,
        })
    }

    /// Retrieve a reference to the original pattern string, if this
    /// pattern was parsed from one. Patterns built with
    /// [`Pattern::from_segments`] return None.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Slice accessor for the component [`Segment`]s in this Pattern
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    /// the segment limit urls are checked against
    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    /// Matches a url against this pattern. Param names in the result
    /// borrow from this pattern and values borrow from `url`.
    pub fn matches<'url>(&self, url: &'url str) -> Result<MatchResult<'_, 'url>, Error> {
        let url_segments = segments::split(url, self.max_segments, Input::Url)?;
        let result = match_segments(&self.segments, &url_segments);

        #[cfg(feature = "log")]
        log::trace!("{self} against {url:?}: {result:?}");

        Ok(result)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse_with_limit(source, DEFAULT_MAX_SEGMENTS)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Matcher, ParamType};

    #[test]
    fn parsing() {
        let pattern: Pattern = "/users//:id:INT/**/".parse().unwrap();
        assert_eq!(pattern.source(), Some("/users//:id:INT/**/"));
        assert_eq!(
            pattern.segments(),
            [
                Segment::Exact("users".into()),
                Segment::Param {
                    name: "id".into(),
                    kind: Some(ParamType::Int)
                },
                Segment::MultiWildcard,
            ]
        );
        assert_eq!(pattern.to_string(), "/users/:id:int/**");
        assert_eq!("".parse::<Pattern>().unwrap().to_string(), "/");
    }

    #[test]
    fn equality_ignores_source() {
        let a: Pattern = "/a/:b".parse().unwrap();
        let b: Pattern = "a/:b/".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, "/a/:c".parse::<Pattern>().unwrap());
    }

    #[test]
    fn equality_includes_limit() {
        let default: Pattern = "/a/**".parse().unwrap();
        let narrow = Matcher::with_max_segments(2).compile("/a/**").unwrap();
        assert_ne!(default, narrow);
        assert_eq!(narrow, Matcher::with_max_segments(2).compile("a/**/").unwrap());
        assert_eq!(default, Matcher::new().compile("/a/**").unwrap());
    }

    #[test]
    fn syntax_errors() {
        assert!("/users/:".parse::<Pattern>().unwrap_err().is_syntax());
        assert!(Pattern::try_from("/users/::int").unwrap_err().is_syntax());
        assert!(Pattern::try_from(String::from("/a/:")).is_err());
    }

    #[test]
    fn pattern_capacity() {
        let matcher = Matcher::with_max_segments(2);
        assert!(matcher.compile("/a/b").is_ok());
        assert_eq!(
            matcher.compile("/a/b/c").unwrap_err(),
            Error::TooManySegments {
                max: 2,
                input: Input::Pattern
            }
        );
    }

    #[test]
    fn url_capacity() {
        let pattern = Matcher::with_max_segments(2).compile("/**").unwrap();
        assert_eq!(pattern.max_segments(), 2);
        assert!(pattern.matches("/a/b").unwrap().is_match());
        assert_eq!(
            pattern.matches("/a/b/c").unwrap_err(),
            Error::TooManySegments {
                max: 2,
                input: Input::Url
            }
        );
    }

    #[test]
    fn from_segments() {
        let pattern = Pattern::from_segments(vec![
            Segment::Exact("users".into()),
            Segment::Wildcard,
        ])
        .unwrap();
        assert_eq!(pattern.source(), None);
        assert_eq!(pattern.to_string(), "/users/*");
        assert!(pattern.matches("/users/andrew").unwrap().is_match());

        assert!(Pattern::from_segments(vec![Segment::Exact("a/b".into())])
            .unwrap_err()
            .is_syntax());
        assert!(Pattern::from_segments(vec![Segment::Exact("".into())])
            .unwrap_err()
            .is_syntax());
        assert!(Pattern::from_segments(vec![Segment::Exact("a?b".into())])
            .unwrap_err()
            .is_syntax());
    }

    #[test]
    fn from_segments_must_read_back() {
        // `*`, `**` and `:x` written as exact text would be read as wildcards or params
        for text in ["*", "**", ":x"] {
            let err = Pattern::from_segments(vec![Segment::Exact(text.into())]).unwrap_err();
            assert!(err.is_syntax(), "{text}");
        }

        for name in ["", "a:b"] {
            let err = Pattern::from_segments(vec![Segment::Param {
                name: name.into(),
                kind: None,
            }])
            .unwrap_err();
            assert!(err.is_syntax(), "{name:?}");
        }

        // tags are stored lower-cased by the parser
        assert!(Pattern::from_segments(vec![Segment::Param {
            name: "n".into(),
            kind: Some(ParamType::Unsupported("INT".into())),
        }])
        .is_err());

        let pattern = Pattern::from_segments(vec![
            Segment::Exact("***".into()),
            Segment::Param {
                name: "id".into(),
                kind: Some(ParamType::Int),
            },
            Segment::MultiWildcard,
        ])
        .unwrap();
        assert_eq!(pattern, pattern.to_string().parse::<Pattern>().unwrap());
        assert!(!pattern.matches("/zzz/1").unwrap().is_match());
        assert!(pattern.matches("/***/1/x").unwrap().is_match());
        assert!(Pattern::from_segments(vec![Segment::Wildcard; 65])
            .unwrap_err()
            .is_capacity());
    }
}
