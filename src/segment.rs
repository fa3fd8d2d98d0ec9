use crate::{Error, ParamType};
use smartstring::alias::String as SmartString;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// One classified segment of a [`Pattern`](crate::Pattern)
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Segment {
    /// literal text, compared by exact equality
    Exact(SmartString),

    /// `*`: exactly one url segment
    Wildcard,

    /// `**`: any number of url segments, including none
    MultiWildcard,

    /// `:name` or `:name:type`
    Param {
        name: SmartString,
        kind: Option<ParamType>,
    },
}

impl Segment {
    /// Classifies a single pattern segment. The input must not contain `/`.
    pub fn parse(section: &str) -> Result<Self, Error> {
        match (section.as_bytes().first(), section.len()) {
            (Some(b'*'), 1) => Ok(Self::Wildcard),
            (Some(b'*'), 2) if section == "**" => Ok(Self::MultiWildcard),
            (Some(b':'), 1) => Err(Error::syntax(section, "params must be named")),
            (Some(b':'), _) => {
                let (name, kind) = match section[1..].split_once(':') {
                    Some((name, tag)) => (name, Some(ParamType::from_tag(tag))),
                    None => (&section[1..], None),
                };

                if name.is_empty() {
                    return Err(Error::syntax(section, "params must be named"));
                }

                Ok(Self::Param {
                    name: SmartString::from(name),
                    kind,
                })
            }
            (None, _) => Err(Error::syntax(section, "segments cannot be empty")),
            _ => Ok(Self::Exact(SmartString::from(section))),
        }
    }

    /// Whether this segment would accept `value` in its position. Only
    /// [`Segment::Exact`], [`Segment::Wildcard`] and [`Segment::Param`]
    /// consume url segments; a [`Segment::MultiWildcard`] never
    /// accepts one directly.
    pub(crate) fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Exact(text) => text.as_str() == value,
            Self::Wildcard => true,
            Self::MultiWildcard => false,
            Self::Param { kind: None, .. } => true,
            Self::Param {
                kind: Some(kind), ..
            } => kind.accepts(value),
        }
    }
}

impl FromStr for Segment {
    type Err = Error;

    fn from_str(section: &str) -> Result<Self, Self::Err> {
        Self::parse(section)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => f.write_str(s),
            Self::Wildcard => f.write_str("*"),
            Self::MultiWildcard => f.write_str("**"),
            Self::Param { name, kind: None } => f.write_fmt(format_args!(":{name}")),
            Self::Param {
                name,
                kind: Some(kind),
            } => f.write_fmt(format_args!(":{name}:{kind}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn param(name: &str, kind: Option<ParamType>) -> Segment {
        Segment::Param {
            name: name.into(),
            kind,
        }
    }

    #[test]
    fn classification() {
        assert_eq!(Segment::parse("*").unwrap(), Segment::Wildcard);
        assert_eq!(Segment::parse("**").unwrap(), Segment::MultiWildcard);
        assert_eq!(Segment::parse("***").unwrap(), Segment::Exact("***".into()));
        assert_eq!(Segment::parse("*a").unwrap(), Segment::Exact("*a".into()));
        assert_eq!(Segment::parse("users").unwrap(), Segment::Exact("users".into()));
        assert_eq!(Segment::parse("a:b").unwrap(), Segment::Exact("a:b".into()));
        assert_eq!(Segment::parse(":id").unwrap(), param("id", None));
        assert_eq!(
            Segment::parse(":account-id:int").unwrap(),
            param("account-id", Some(ParamType::Int))
        );
        assert_eq!(
            Segment::parse(":id:Bool").unwrap(),
            param("id", Some(ParamType::Bool))
        );
    }

    #[test]
    fn odd_type_tags_are_not_errors() {
        assert_eq!(
            Segment::parse(":id:").unwrap(),
            param("id", Some(ParamType::Unsupported("".into())))
        );
        assert_eq!(
            Segment::parse(":id:int:x").unwrap(),
            param("id", Some(ParamType::Unsupported("int:x".into())))
        );
    }

    #[test]
    fn nameless_params() {
        for section in [":", "::", "::int"] {
            let err = Segment::parse(section).unwrap_err();
            assert!(err.is_syntax());
            assert!(err.to_string().contains("params must be named"));
        }
    }

    #[test]
    fn accepts() {
        assert!(Segment::parse("users").unwrap().accepts("users"));
        assert!(!Segment::parse("users").unwrap().accepts("Users"));
        assert!(Segment::Wildcard.accepts("anything"));
        assert!(!Segment::MultiWildcard.accepts("anything"));
        assert!(Segment::parse(":n").unwrap().accepts("anything"));
        assert!(Segment::parse(":n:int").unwrap().accepts("-4"));
        assert!(!Segment::parse(":n:int").unwrap().accepts("four"));
        assert!(!Segment::parse(":n:money").unwrap().accepts("4"));
    }

    #[test]
    fn display() {
        for section in ["users", "*", "**", ":id", ":id:int", ":id:money"] {
            assert_eq!(Segment::parse(section).unwrap().to_string(), section);
        }
        assert_eq!(Segment::parse(":id:INT").unwrap().to_string(), ":id:int");
    }
}
