//! Numeric literal extraction.
//!
//! Property values such as `100px`, `-90deg`, `37.5%` or a plain `12` are
//! split into a magnitude and an optional unit before a parser decides
//! whether that unit is acceptable for the field.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(-?(?:\d+(?:\.\d*)?|\.\d+))(px|deg|%)?$")
        .expect("numeric literal pattern is valid")
});

/// Unit suffix recognized on a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `px`
    Px,
    /// `deg`
    Deg,
    /// `%`
    Percent,
}

impl Unit {
    /// Returns the suffix as written in property strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Deg => "deg",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A magnitude with an optional unit, e.g. `100px` or `45`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLiteral {
    /// The parsed number, sign included.
    pub magnitude: f64,
    /// The unit suffix, `None` for a bare number.
    pub unit: Option<Unit>,
}

impl NumericLiteral {
    /// Returns `true` if the magnitude has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.magnitude.fract() == 0.0
    }

    /// Returns `true` for a bare number or one suffixed with `px`.
    pub fn is_pixels(&self) -> bool {
        matches!(self.unit, None | Some(Unit::Px))
    }
}

/// Parses a numeric literal, returning `None` for anything that is not one.
///
/// ```rust
/// use boxwind_lexer::{parse_numeric, Unit};
///
/// let width = parse_numeric("100px").unwrap();
/// assert_eq!(width.magnitude, 100.0);
/// assert_eq!(width.unit, Some(Unit::Px));
///
/// assert_eq!(parse_numeric("12").unwrap().unit, None);
/// assert!(parse_numeric("12em").is_none());
/// ```
pub fn parse_numeric(value: &str) -> Option<NumericLiteral> {
    let caps = NUMERIC.captures(value.trim())?;
    let magnitude = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = caps
        .get(2)
        .map(|m| match m.as_str().to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "deg" => Unit::Deg,
            _ => Unit::Percent,
        });
    Some(NumericLiteral { magnitude, unit })
}

/// Renders a magnitude the way class tokens spell it: `10`, `10.5`, `-4`.
pub fn format_magnitude(magnitude: f64) -> String {
    if magnitude.fract() == 0.0 && magnitude.abs() < 1e15 {
        format!("{}", magnitude as i64)
    } else {
        format!("{}", magnitude)
    }
}
