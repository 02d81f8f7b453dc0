//! Value kind descriptors.

use std::fmt;

/// The active tag of a [`Value`](crate::Value).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Boolean,
    /// Owned text.
    String,
    /// Non-owning reference to an external blob.
    Blob,
    /// Non-owning reference to an external object.
    Object,
}

/// How a value of a given kind behaves when copied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The payload is duplicated.
    Copied,
    /// Only the handle is duplicated; both copies alias one resource.
    Aliased,
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValueKind; 6] = [
        Self::Integer,
        Self::Double,
        Self::Boolean,
        Self::String,
        Self::Blob,
        Self::Object,
    ];

    /// Returns the definition-string token character for this kind.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Integer => 'n',
            Self::Double => 'v',
            Self::Boolean => 'b',
            Self::String => 's',
            Self::Blob => 'B',
            Self::Object => 'O',
        }
    }

    /// Looks up the kind named by a definition-string token character.
    ///
    /// Returns `None` for the any-token `?`, the wildcard `.`, and
    /// anything else.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'n' => Some(Self::Integer),
            'v' => Some(Self::Double),
            'b' => Some(Self::Boolean),
            's' => Some(Self::String),
            'B' => Some(Self::Blob),
            'O' => Some(Self::Object),
            _ => None,
        }
    }

    /// Returns the copy semantics of this kind.
    #[must_use]
    pub const fn ownership(self) -> Ownership {
        match self {
            Self::Integer | Self::Double | Self::Boolean | Self::String => Ownership::Copied,
            Self::Blob | Self::Object => Ownership::Aliased,
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Blob => "blob",
            Self::Object => "object",
        }
    }
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
