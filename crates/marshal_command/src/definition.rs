//! Method definition strings and signature matching.
//!
//! A definition names a method and the arguments it takes:
//!
//! ```text
//! Set(v,v)      two arguments
//! Get()         no arguments
//! Log(s,.)      one argument, then any number more
//! ```
//!
//! Token characters are `b` (boolean), `n` (integer), `v` (double),
//! `s` (string), `B` (blob), `O` (object) and `?` (any). The wildcard `.`
//! stands in for the rest of the list.
//!
//! [`matches_definition`] checks argument *count* only; the declared kinds
//! are not compared with the supplied values. [`Definition::matches_strict`]
//! additionally checks kinds.

use std::fmt;

use marshal_foundation::{Error, Result, Value, ValueKind, ValueSeq};
use tracing::debug;

/// One parameter position in a definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeToken {
    /// A value of exactly this kind.
    Kind(ValueKind),
    /// A value of any kind (`?`).
    Any,
}

impl TypeToken {
    /// Looks up the token for a definition character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Self::Any),
            _ => match ValueKind::from_token(c) {
                Some(kind) => Some(Self::Kind(kind)),
                None => None,
            },
        }
    }

    /// Returns the definition character for this token.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Kind(kind) => kind.token(),
            Self::Any => '?',
        }
    }

    /// Returns true if `value` may be passed at this position.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Kind(kind) => value.kind() == kind,
            Self::Any => true,
        }
    }
}

/// Checks a call against a definition string, counting positions only.
///
/// Returns `Ok(false)` when the name differs (case-sensitive) or the
/// argument count does not fit. A wildcard accepts every count at or past
/// the point where it appears.
///
/// # Errors
///
/// Returns a parse error if `definition` contains no `(`.
pub fn matches_definition(name: &str, args: &ValueSeq, definition: &str) -> Result<bool> {
    let open = definition
        .find('(')
        .ok_or_else(|| Error::parse_error("missing '('", definition))?;

    if &definition[..open] != name {
        return Ok(false);
    }

    let matched = walk_positions(definition, open, args.len());
    debug!(definition, args = args.len(), matched, "definition match");
    Ok(matched)
}

/// Steps through the parameter list two characters at a time (token plus
/// separator), stopping at `)` or the end of the string.
fn walk_positions(definition: &str, open: usize, arg_count: usize) -> bool {
    let bytes = definition.as_bytes();
    let mut pos = open + 1;
    let mut consumed = 0;

    while let Some(&b) = bytes.get(pos) {
        match b {
            b')' => break,
            b'.' => return true,
            _ => {
                if arg_count <= consumed {
                    return false;
                }
                consumed += 1;
                pos += 2;
            }
        }
    }

    arg_count <= consumed
}

/// A validated, structured definition.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Definition {
    source: String,
    open: usize,
    params: Vec<TypeToken>,
    variadic: bool,
}

impl Definition {
    /// Parses and validates a definition string.
    ///
    /// Unlike [`matches_definition`], this rejects anything outside the
    /// grammar: unknown token characters, missing separators, whitespace,
    /// text after `)` and an empty method name.
    ///
    /// # Errors
    ///
    /// Returns a parse error describing the first problem found.
    pub fn parse(definition: &str) -> Result<Self> {
        let fail = |message: String| Error::parse_error(message, definition);

        let open = definition
            .find('(')
            .ok_or_else(|| fail("missing '('".to_string()))?;
        if open == 0 {
            return Err(fail("missing method name".to_string()));
        }

        let list = &definition[open + 1..];
        let close = list
            .find(')')
            .ok_or_else(|| fail("missing ')'".to_string()))?;
        if close + 1 != list.len() {
            return Err(fail("unexpected text after ')'".to_string()));
        }

        let mut params = Vec::new();
        let mut variadic = false;
        let body = &list[..close];
        if !body.is_empty() {
            let items: Vec<&str> = body.split(',').collect();
            for (i, item) in items.iter().enumerate() {
                let mut chars = item.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(fail(format!("expected one token character, found {item:?}")));
                };
                if c == '.' {
                    if i + 1 != items.len() {
                        return Err(fail("wildcard must be last".to_string()));
                    }
                    variadic = true;
                } else {
                    let token = TypeToken::from_char(c)
                        .ok_or_else(|| fail(format!("unknown type token {c:?}")))?;
                    params.push(token);
                }
            }
        }

        Ok(Self {
            source: definition.to_owned(),
            open,
            params,
            variadic,
        })
    }

    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.source[..self.open]
    }

    /// Returns the fixed parameter positions.
    #[must_use]
    pub fn params(&self) -> &[TypeToken] {
        &self.params
    }

    /// Returns true if the definition ends with the wildcard.
    #[must_use]
    pub const fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Returns the original definition string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Checks a call by name and argument count.
    #[must_use]
    pub fn matches(&self, name: &str, args: &ValueSeq) -> bool {
        self.name() == name && walk_positions(&self.source, self.open, args.len())
    }

    /// Checks a call by name, argument count, and the kind of every value
    /// in a fixed position. Values covered by the wildcard are not checked.
    #[must_use]
    pub fn matches_strict(&self, name: &str, args: &ValueSeq) -> bool {
        self.matches(name, args)
            && self
                .params
                .iter()
                .zip(args.iter())
                .all(|(token, value)| token.accepts(value))
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Definition({})", self.source)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
