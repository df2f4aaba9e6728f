//! Tokenizer for inspector-style property strings.
//!
//! A property string is a comma-separated list of segments, where each
//! segment is either a bare value or a `key=value` pair:
//!
//! ```text
//! Auto{flow=horizontal, gap=10px, dimensions={w-100px, h-fill}}
//! ```
//!
//! Commas inside `(...)`, `{...}` or `[...]` never split a segment, so
//! composite values such as a corner radius bundle survive as one token.
//!
//! # Example
//!
//! ```rust
//! use boxwind_lexer::{tokenize, Token};
//!
//! let tokens = tokenize(Some("clip, corner-radius=(tl=4px, br=8px)"));
//! assert_eq!(tokens, vec![
//!     Token::bare("clip"),
//!     Token::pair("corner-radius", "(tl=4px, br=8px)"),
//! ]);
//! ```
//!
//! # Segment Rules
//!
//! - Segments are trimmed; empty segments are dropped
//! - Exactly one `=` outside any group makes a [`Token::KeyValue`]
//! - No `=`, or more than one, makes a [`Token::Bare`]; the owning parser
//!   decides whether an ambiguous segment can be reinterpreted

mod literal;
mod numeric;

pub use literal::parse_bool;
pub use numeric::{format_magnitude, parse_numeric, NumericLiteral, Unit};

use std::fmt;

/// One unit of a property string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A value with no key: `clip`, `#ff0000`, `w-100px`.
    Bare(String),
    /// A `key=value` pair, both sides trimmed.
    KeyValue { key: String, value: String },
}

impl Token {
    /// Creates a bare token.
    pub fn bare(text: impl Into<String>) -> Self {
        Token::Bare(text.into())
    }

    /// Creates a key/value token.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Token::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Builds a token from an already trimmed, non-empty segment.
    fn from_segment(segment: &str) -> Self {
        let mut depth = 0usize;
        let mut split_at = None;
        let mut equals = 0;

        for (idx, c) in segment.char_indices() {
            match c {
                '(' | '{' | '[' => depth += 1,
                ')' | '}' | ']' => depth = depth.saturating_sub(1),
                '=' if depth == 0 => {
                    equals += 1;
                    split_at.get_or_insert(idx);
                }
                _ => {}
            }
        }

        match split_at {
            Some(idx) if equals == 1 => Token::KeyValue {
                key: segment[..idx].trim().to_string(),
                value: segment[idx + 1..].trim().to_string(),
            },
            _ => Token::Bare(segment.to_string()),
        }
    }

    /// Returns the key for a pair, `None` for a bare token.
    pub fn key(&self) -> Option<&str> {
        match self {
            Token::KeyValue { key, .. } => Some(key),
            Token::Bare(_) => None,
        }
    }

    /// Returns the value for a pair or the text of a bare token.
    pub fn text(&self) -> &str {
        match self {
            Token::Bare(text) => text,
            Token::KeyValue { value, .. } => value,
        }
    }

    /// Returns `true` if this is a bare token.
    pub fn is_bare(&self) -> bool {
        matches!(self, Token::Bare(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bare(text) => write!(f, "{}", text),
            Token::KeyValue { key, value } => write!(f, "{}={}", key, value),
        }
    }
}

/// Streaming tokenizer over a property string.
///
/// Yields one [`Token`] per non-empty top-level segment, in source order.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next top-level comma in `rest`, or its length.
    fn segment_end(rest: &str) -> usize {
        let mut depth = 0usize;
        for (idx, c) in rest.char_indices() {
            match c {
                '(' | '{' | '[' => depth += 1,
                ')' | '}' | ']' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => return idx,
                _ => {}
            }
        }
        rest.len()
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            let end = Self::segment_end(rest);
            let segment = rest[..end].trim();
            // Skip past the comma as well; overshooting the end stops the loop.
            self.pos += end + 1;

            if !segment.is_empty() {
                return Some(Token::from_segment(segment));
            }
        }
        None
    }
}

/// Splits a raw property string into tokens.
///
/// Absent, empty and whitespace-only input all produce an empty sequence.
/// Whether that absence is acceptable is up to the domain parser.
pub fn tokenize(input: Option<&str>) -> Vec<Token> {
    match input {
        Some(text) => Tokenizer::new(text).collect(),
        None => Vec::new(),
    }
}

fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Returns the inner text of a value wholly wrapped in one group.
///
/// `(a, b)`, `{a, b}` and `[a, b]` qualify; `(a)(b)` does not, because the
/// first group closes before the end of the value.
///
/// ```rust
/// use boxwind_lexer::strip_group;
///
/// assert_eq!(strip_group("{w-100px, h-50px}"), Some("w-100px, h-50px"));
/// assert_eq!(strip_group("(a)(b)"), None);
/// assert_eq!(strip_group("10px"), None);
/// ```
pub fn strip_group(value: &str) -> Option<&str> {
    let value = value.trim();
    let opener = value.chars().next()?;
    let closer = closer_for(opener)?;
    if value.len() < 2 || !value.ends_with(closer) {
        return None;
    }

    let mut depth = 0usize;
    let last = value.len() - closer.len_utf8();
    for (idx, c) in value.char_indices() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && idx != last {
                    return None;
                }
            }
            _ => {}
        }
    }

    Some(&value[opener.len_utf8()..last])
}

/// Recognizes a named wrapper such as `Auto{...}` and returns its content.
///
/// The name is matched case-insensitively and may be followed by
/// whitespace before the group.
///
/// ```rust
/// use boxwind_lexer::strip_wrapper;
///
/// assert_eq!(strip_wrapper("Auto{flow=vertical}", "Auto"), Some("flow=vertical"));
/// assert_eq!(strip_wrapper("auto { gap=4px }", "Auto"), Some(" gap=4px "));
/// assert_eq!(strip_wrapper("Automatic{x}", "Auto"), None);
/// ```
pub fn strip_wrapper<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let value = value.trim();
    let head = value.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    strip_group(&value[name.len()..])
}
