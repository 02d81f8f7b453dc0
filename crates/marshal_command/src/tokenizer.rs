//! Argument string tokenization.
//!
//! Converts a comma-separated argument string into typed values.
//!
//! ```text
//! "\"String 1\", 2, 3.3, \"4\", False"
//!   → [String("String 1"), Integer(2), Double(3.3), String("4"), Boolean(false)]
//! ```
//!
//! Classification rules, applied per token:
//!
//! - Quoted text is always a string, commas inside quotes included.
//!   There is no escape for an embedded quote.
//! - Text made only of digits, spaces, at most one `-` and at most one `.`
//!   is a number, provided any `-` comes before the `.`: an integer without
//!   the `.`, a double with it. A second punctuation character makes the
//!   token a string. Conversion is permissive (see
//!   [`numeric`](crate::numeric)), so `-` alone becomes `0`.
//! - `true` / `false` in any case (surrounding spaces ignored) is a boolean.
//! - Anything else is a string holding the raw, untrimmed token text.
//!
//! The tokenizer never fails.

use marshal_foundation::{Value, ValueSeq};
use tracing::trace;

use crate::numeric;

/// A numeric argument whose text was not fully consumed by the conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LossyNumber {
    /// Position of the argument in the output sequence.
    pub index: usize,
    /// The raw token text.
    pub text: String,
}

/// Values produced by a tokenization, plus any lossy numeric conversions.
#[derive(Clone, Debug, Default)]
pub struct TokenizeReport {
    /// The parsed arguments.
    pub values: ValueSeq,
    /// Numeric arguments that converted with ignored or missing digits.
    pub lossy: Vec<LossyNumber>,
}

impl TokenizeReport {
    /// Returns true if every numeric argument converted exactly.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lossy.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InQuote,
}

/// Per-token classification, updated as characters are scanned.
#[derive(Clone, Copy, Debug)]
struct TokenFlags {
    numeric: bool,
    decimal: bool,
    minus: bool,
    quoted: bool,
    /// Byte offset just past the first opening quote.
    quote_start: Option<usize>,
    /// Byte offset of the most recent closing quote.
    quote_end: Option<usize>,
}

impl TokenFlags {
    const fn new() -> Self {
        Self {
            numeric: true,
            decimal: false,
            minus: false,
            quoted: false,
            quote_start: None,
            quote_end: None,
        }
    }

    fn open_quote(&mut self, after: usize) {
        self.quoted = true;
        self.numeric = false;
        if self.quote_start.is_none() {
            self.quote_start = Some(after);
        }
    }

    // One `-` and one `.` are allowed, the sign first
    fn observe(&mut self, ch: char) {
        match ch {
            '.' if self.decimal => self.numeric = false,
            '.' => self.decimal = true,
            '-' if self.minus || self.decimal => self.numeric = false,
            '-' => self.minus = true,
            '0'..='9' | ' ' => {}
            _ => self.numeric = false,
        }
    }
}

/// Tokenizes argument strings.
pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    /// Tokenizes an argument string into a new sequence.
    ///
    /// An empty string yields an empty sequence.
    #[must_use]
    pub fn tokenize(input: &str) -> ValueSeq {
        Self::tokenize_with_report(input).values
    }

    /// Tokenizes an argument string, also reporting lossy numeric conversions.
    #[must_use]
    pub fn tokenize_with_report(input: &str) -> TokenizeReport {
        let mut values = ValueSeq::new();
        let lossy = Self::tokenize_into(input, &mut values);
        TokenizeReport { values, lossy }
    }

    /// Appends the arguments in `input` to `out`.
    ///
    /// Returns the lossy numeric conversions, indexed by their position in
    /// `out`.
    pub fn tokenize_into(input: &str, out: &mut ValueSeq) -> Vec<LossyNumber> {
        let mut lossy = Vec::new();
        if input.is_empty() {
            return lossy;
        }

        let mut state = ScanState::Scanning;
        let mut flags = TokenFlags::new();
        let mut start = 0;

        // A trailing separator flushes the final token
        let sentinel = std::iter::once((input.len(), ','));
        for (pos, ch) in input.char_indices().chain(sentinel) {
            match state {
                ScanState::InQuote => {
                    if ch == '"' {
                        flags.quote_end = Some(pos);
                        state = ScanState::Scanning;
                    }
                }
                ScanState::Scanning => match ch {
                    '"' => {
                        flags.open_quote(pos + 1);
                        state = ScanState::InQuote;
                    }
                    ',' => {
                        let value = Self::reduce(input, start, pos, flags, out.len(), &mut lossy);
                        out.append(value);
                        start = pos + 1;
                        flags = TokenFlags::new();
                    }
                    _ => flags.observe(ch),
                },
            }
        }

        // An unterminated quote swallowed the separator; keep what it held
        if state == ScanState::InQuote {
            let value = Self::reduce(input, start, input.len(), flags, out.len(), &mut lossy);
            out.append(value);
        }

        lossy
    }

    /// Turns the token `input[start..end]` into a value.
    fn reduce(
        input: &str,
        start: usize,
        end: usize,
        flags: TokenFlags,
        index: usize,
        lossy: &mut Vec<LossyNumber>,
    ) -> Value {
        let raw = &input[start..end];

        let value = if flags.numeric && !raw.is_empty() {
            let (value, exact) = if flags.decimal {
                let parsed = numeric::parse_double(raw);
                (Value::Double(parsed.value), parsed.exact)
            } else {
                let parsed = numeric::parse_integer(raw);
                (Value::Integer(parsed.value), parsed.exact)
            };
            if !exact {
                lossy.push(LossyNumber {
                    index,
                    text: raw.to_owned(),
                });
            }
            value
        } else if flags.quoted {
            let interior_start = flags.quote_start.unwrap_or(start);
            let interior_end = flags.quote_end.unwrap_or(end).max(interior_start);
            Value::from(&input[interior_start..interior_end])
        } else {
            let word = raw.trim();
            if word.eq_ignore_ascii_case("true") {
                Value::Boolean(true)
            } else if word.eq_ignore_ascii_case("false") {
                Value::Boolean(false)
            } else {
                Value::from(raw)
            }
        };

        trace!(index, token = raw, ?value, "argument");
        value
    }
}
