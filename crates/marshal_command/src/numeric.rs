//! Permissive number parsing with C-locale `strtoll`/`strtod` semantics.
//!
//! Leading whitespace is skipped, an optional sign is accepted, the longest
//! valid prefix is converted and anything after it is ignored. Text with no
//! digits converts to zero. Integer overflow saturates.
//!
//! Each parser also reports whether the conversion was exact: at least one
//! digit was read and nothing but whitespace followed the number.

/// The outcome of a permissive parse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed<T> {
    /// The converted number (zero when nothing parsed).
    pub value: T,
    /// False when digits were missing or trailing text was ignored.
    pub exact: bool,
}

/// Parses a 64-bit integer the way `strtoll(text, NULL, 10)` does.
#[must_use]
pub fn parse_integer(text: &str) -> Parsed<i64> {
    let trimmed = skip_space(text);
    let bytes = trimmed.as_bytes();
    let (negative, mut pos) = sign(bytes);
    let digits_start = pos;

    // Accumulate toward the sign so i64::MIN is reachable
    let mut acc: i64 = 0;
    let mut saturated = false;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        if !saturated {
            let digit = i64::from(b - b'0');
            let next = acc.checked_mul(10).and_then(|n| {
                if negative {
                    n.checked_sub(digit)
                } else {
                    n.checked_add(digit)
                }
            });
            match next {
                Some(n) => acc = n,
                None => {
                    acc = if negative { i64::MIN } else { i64::MAX };
                    saturated = true;
                }
            }
        }
        pos += 1;
    }

    let has_digits = pos > digits_start;
    Parsed {
        value: if has_digits { acc } else { 0 },
        exact: has_digits && is_blank(&trimmed[pos..]),
    }
}

/// Parses a 64-bit float the way `strtod(text, NULL)` does in the C locale.
///
/// Hexadecimal floats, `inf` and `nan` are not recognized.
#[must_use]
pub fn parse_double(text: &str) -> Parsed<f64> {
    let trimmed = skip_space(text);
    let bytes = trimmed.as_bytes();
    let (_, mut pos) = sign(bytes);

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return Parsed {
            value: 0.0,
            exact: false,
        };
    }

    // Exponent only counts when at least one digit follows
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let (_, sign_len) = sign(&bytes[pos + 1..]);
        let exp_digits = count_digits(&bytes[pos + 1 + sign_len..]);
        if exp_digits > 0 {
            pos += 1 + sign_len + exp_digits;
        }
    }

    let value = trimmed[..pos].parse::<f64>().unwrap_or(0.0);
    Parsed {
        value,
        exact: is_blank(&trimmed[pos..]),
    }
}

fn skip_space(text: &str) -> &str {
    text.trim_start_matches(is_c_space)
}

fn is_blank(text: &str) -> bool {
    text.chars().all(is_c_space)
}

const fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Returns (negative, bytes consumed by the sign).
fn sign(bytes: &[u8]) -> (bool, usize) {
    match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
