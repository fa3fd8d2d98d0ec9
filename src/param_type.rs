use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// The type tag of a typed param, as in `:id:int`
///
/// A typed param only accepts url segments that parse as its type. The
/// segment text is still what gets bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// `byte`, an `i8`
    Byte,
    /// `ubyte`, a `u8`
    UByte,
    /// `short`, an `i16`
    Short,
    /// `ushort`, a `u16`
    UShort,
    /// `int`, an `i32`
    Int,
    /// `uint`, a `u32`
    UInt,
    /// `long`, an `i64`
    Long,
    /// `ulong`, a `u64`
    ULong,
    /// `float`, an `f32`
    Float,
    /// `double`, an `f64`
    Double,
    /// `bool`
    Bool,
    /// `uuid`
    Uuid,
    /// Any other tag. Nothing is ever accepted.
    Unsupported(SmartString),
}

impl ParamType {
    /// Looks up a tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match &*tag.to_ascii_lowercase() {
            "byte" => Self::Byte,
            "ubyte" => Self::UByte,
            "short" => Self::Short,
            "ushort" => Self::UShort,
            "int" => Self::Int,
            "uint" => Self::UInt,
            "long" => Self::Long,
            "ulong" => Self::ULong,
            "float" => Self::Float,
            "double" => Self::Double,
            "bool" => Self::Bool,
            "uuid" => Self::Uuid,
            other => Self::Unsupported(SmartString::from(other)),
        }
    }

    /// The lower-cased tag as written after the second `:`
    pub fn tag(&self) -> &str {
        match self {
            Self::Byte => "byte",
            Self::UByte => "ubyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Uuid => "uuid",
            Self::Unsupported(tag) => tag.as_str(),
        }
    }

    /// Whether `value` can be read as this type
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Byte => value.parse::<i8>().is_ok(),
            Self::UByte => value.parse::<u8>().is_ok(),
            Self::Short => value.parse::<i16>().is_ok(),
            Self::UShort => value.parse::<u16>().is_ok(),
            Self::Int => value.parse::<i32>().is_ok(),
            Self::UInt => value.parse::<u32>().is_ok(),
            Self::Long => value.parse::<i64>().is_ok(),
            Self::ULong => value.parse::<u64>().is_ok(),
            Self::Float => value.parse::<f32>().is_ok(),
            Self::Double => value.parse::<f64>().is_ok(),
            Self::Bool => value.parse::<bool>().is_ok(),
            Self::Uuid => Uuid::parse_str(value).is_ok(),
            Self::Unsupported(_) => false,
        }
    }
}

impl Display for ParamType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
