use crate::{Bindings, Error, MatchResult, Pattern, Segment};

/// The segment limit used unless a [`Matcher`] says otherwise
pub const DEFAULT_MAX_SEGMENTS: usize = 64;

/// Matching configuration.
///
/// The only knob is the maximum number of segments accepted in either a
/// pattern or a url. Inputs over the limit are reported as
/// [`Error::TooManySegments`] instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    max_segments: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_segments(max_segments: usize) -> Self {
        Self { max_segments }
    }

    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    /// Classifies `pattern` once so that it can be matched repeatedly.
    pub fn compile(&self, pattern: &str) -> Result<Pattern, Error> {
        Pattern::parse_with_limit(pattern, self.max_segments)
    }

    /// Matches `url` against a pattern string. Pattern errors are reported
    /// before the url is looked at.
    pub fn matches<'url>(
        &self,
        url: &'url str,
        pattern: &str,
    ) -> Result<MatchResult<'static, 'url>, Error> {
        let pattern = self.compile(pattern)?;
        Ok(pattern.matches(url)?.into_owned_names())
    }
}

/// Walks url segments and pattern segments in lock-step.
///
/// A `**` that is not the last pattern segment is stepped over, and url
/// segments are then dropped one at a time until the following pattern
/// segment accepts one. There is no backtracking: once a segment after
/// the `**` has matched, the wildcard is done.
pub(crate) fn match_segments<'pattern, 'url>(
    pattern: &'pattern [Segment],
    url: &[&'url str],
) -> MatchResult<'pattern, 'url> {
    if let Some(Segment::MultiWildcard) = pattern.first() {
        #[cfg(feature = "log")]
        log::trace!("leading ** matches {url:?}");
        return MatchResult::matched(Bindings::new());
    }

    let mut bindings = Bindings::new();
    let (mut p, mut u) = (0, 0);
    let mut absorbing = false;

    while let (Some(segment), Some(&value)) = (pattern.get(p), url.get(u)) {
        #[cfg(feature = "log")]
        log::trace!("{segment} against {value:?}, absorbing: {absorbing}");

        match segment {
            Segment::MultiWildcard if p + 1 == pattern.len() => {
                return MatchResult::matched(bindings);
            }

            Segment::MultiWildcard => {
                p += 1;
                absorbing = true;
            }

            Segment::Param { name, .. } if segment.accepts(value) => {
                bindings.push(name, value);
                p += 1;
                u += 1;
                absorbing = false;
            }

            _ if segment.accepts(value) => {
                p += 1;
                u += 1;
                absorbing = false;
            }

            _ if absorbing => u += 1,

            _ => {
                #[cfg(feature = "log")]
                log::trace!("{segment} rejected {value:?}");
                return MatchResult::no_match();
            }
        }
    }

    if u == url.len() && matches!(&pattern[p..], [] | [Segment::MultiWildcard]) {
        MatchResult::matched(bindings)
    } else {
        #[cfg(feature = "log")]
        log::trace!("leftover url {:?}, leftover pattern {:?}", &url[u..], &pattern[p..]);
        MatchResult::no_match()
    }
}
