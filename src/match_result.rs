use crate::Bindings;

/// The outcome of matching a url against a pattern.
///
/// A failed match never carries bindings, even if some params were bound
/// before the mismatch was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult<'pattern, 'url> {
    matched: bool,
    bindings: Bindings<'pattern, 'url>,
}

impl<'pattern, 'url> MatchResult<'pattern, 'url> {
    pub(crate) fn matched(bindings: Bindings<'pattern, 'url>) -> Self {
        Self {
            matched: true,
            bindings,
        }
    }

    /// a failed match
    pub fn no_match() -> Self {
        Self::default()
    }

    /// did the url match the pattern
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// Returns the [`Bindings`] for this match. Always empty when
    /// [`MatchResult::is_match`] is false.
    pub fn bindings(&self) -> &Bindings<'pattern, 'url> {
        &self.bindings
    }

    pub fn into_bindings(self) -> Bindings<'pattern, 'url> {
        self.bindings
    }

    /// the first value bound to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name)
    }

    pub(crate) fn into_owned_names(self) -> MatchResult<'static, 'url> {
        MatchResult {
            matched: self.matched,
            bindings: self.bindings.into_owned_names(),
        }
    }

    pub fn into_owned(self) -> MatchResult<'static, 'static> {
        MatchResult {
            matched: self.matched,
            bindings: self.bindings.into_owned(),
        }
    }
}

impl<'pattern, 'url> From<MatchResult<'pattern, 'url>> for Option<Bindings<'pattern, 'url>> {
    fn from(result: MatchResult<'pattern, 'url>) -> Self {
        result.matched.then_some(result.bindings)
    }
}
