//! Value grammars shared by several properties.
//!
//! Each helper returns the *fragment* that follows a class prefix, e.g.
//! `[12px]` for `gap-[12px]`, or `None` when the value is malformed for the
//! field. Callers decide how to report that.

use boxwind_lexer::{format_magnitude, parse_numeric, NumericLiteral, Unit};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is valid")
});

static PALETTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:(?:slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal",
        r"|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)-(?:50|[1-9]00|950)",
        r"|white|black|transparent|current|inherit)$",
    ))
    .expect("palette pattern is valid")
});

static LAYER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^layer-[a-z0-9][a-z0-9-]*$").expect("layer pattern is valid"));

static CLASS_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\[\]#/._%()-]+$").expect("class pattern is valid"));

static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*/[1-9][0-9]*$").expect("fraction pattern is valid"));

static ARBITRARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[[^\[\]\s]+\]$").expect("arbitrary pattern is valid"));

/// Sizing keywords a dimension passes through untouched.
const SIZE_KEYWORDS: &[&str] = &[
    "auto", "full", "screen", "fit", "min", "max", "px", "svw", "lvw", "dvw", "svh", "lvh", "dvh",
];

/// Returns the magnitude of a pixel value (`12px` or a bare `12`).
pub fn pixels(value: &str) -> Option<f64> {
    parse_numeric(value)
        .filter(NumericLiteral::is_pixels)
        .map(|n| n.magnitude)
}

/// Renders a pixel value as `[Npx]`.
pub fn pixel_fragment(value: &str) -> Option<String> {
    pixels(value).map(|px| format!("[{}px]", format_magnitude(px)))
}

/// Renders a pixel or percent value as `[Npx]` / `[N%]`.
pub fn length_fragment(value: &str) -> Option<String> {
    let literal = parse_numeric(value)?;
    let magnitude = format_magnitude(literal.magnitude);
    match literal.unit {
        None | Some(Unit::Px) => Some(format!("[{}px]", magnitude)),
        Some(Unit::Percent) => Some(format!("[{}%]", magnitude)),
        Some(Unit::Deg) => None,
    }
}

/// Parses a 0..=100 percentage (`50`, `50%`, `37.5%`).
///
/// Integers render as `N`, decimals as `[N%]`, so the caller can prefix
/// either with `opacity-`.
pub fn percent(value: &str) -> Option<String> {
    let literal = parse_numeric(value)?;
    if !matches!(literal.unit, None | Some(Unit::Percent)) {
        return None;
    }
    if !(0.0..=100.0).contains(&literal.magnitude) {
        return None;
    }
    let magnitude = format_magnitude(literal.magnitude);
    if literal.is_integer() {
        Some(magnitude)
    } else {
        Some(format!("[{}%]", magnitude))
    }
}

/// Returns `true` for a fraction such as `1/2`.
pub fn is_fraction(value: &str) -> bool {
    FRACTION.is_match(value)
}

/// Returns `true` for a sizing keyword or an arbitrary `[...]` value.
pub fn is_pass_through(value: &str) -> bool {
    SIZE_KEYWORDS.contains(&value) || ARBITRARY.is_match(value)
}

/// A color as accepted by fill and stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// `#rgb` or `#rrggbb`, stored lowercased with the `#`.
    Hex(String),
    /// A palette shade such as `blue-500`, or `white`/`black`/...
    Palette(String),
    /// A semantic alias such as `layer-surface`.
    Layer(String),
    /// A complete class token already carrying the prefix.
    Class(String),
}

impl ColorValue {
    /// Recognizes a color for a class `prefix` (`bg` or `border`).
    ///
    /// ```rust
    /// use boxwind::ColorValue;
    ///
    /// let red = ColorValue::parse("#FF0000", "bg").unwrap();
    /// assert_eq!(red.class("bg"), "bg-[#ff0000]");
    /// let sky = ColorValue::parse("sky-300", "border").unwrap();
    /// assert_eq!(sky.class("border"), "border-sky-300");
    /// assert!(ColorValue::parse("reddish", "bg").is_none());
    /// ```
    pub fn parse(value: &str, prefix: &str) -> Option<Self> {
        let value = value.trim();
        if HEX.is_match(value) {
            return Some(ColorValue::Hex(value.to_ascii_lowercase()));
        }
        if PALETTE.is_match(value) {
            return Some(ColorValue::Palette(value.to_string()));
        }
        if LAYER.is_match(value) {
            return Some(ColorValue::Layer(value.to_string()));
        }
        let tail = value.strip_prefix(prefix)?.strip_prefix('-')?;
        CLASS_TAIL
            .is_match(tail)
            .then(|| ColorValue::Class(value.to_string()))
    }

    /// Renders the class token for `prefix`.
    pub fn class(&self, prefix: &str) -> String {
        match self {
            ColorValue::Hex(hex) => format!("{}-[{}]", prefix, hex),
            ColorValue::Palette(name) | ColorValue::Layer(name) => format!("{}-{}", prefix, name),
            ColorValue::Class(class) => class.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_values() {
        assert_eq!(pixel_fragment("12px").as_deref(), Some("[12px]"));
        assert_eq!(pixel_fragment("12").as_deref(), Some("[12px]"));
        assert_eq!(pixel_fragment("1.5px").as_deref(), Some("[1.5px]"));
        assert_eq!(pixel_fragment("12%"), None);
        assert_eq!(pixel_fragment("fill"), None);
    }

    #[test]
    fn length_values() {
        assert_eq!(length_fragment("40%").as_deref(), Some("[40%]"));
        assert_eq!(length_fragment("-8px").as_deref(), Some("[-8px]"));
        assert_eq!(length_fragment("8deg"), None);
    }

    #[test]
    fn percent_values() {
        assert_eq!(percent("50").as_deref(), Some("50"));
        assert_eq!(percent("50%").as_deref(), Some("50"));
        assert_eq!(percent("0").as_deref(), Some("0"));
        assert_eq!(percent("100%").as_deref(), Some("100"));
        assert_eq!(percent("37.5%").as_deref(), Some("[37.5%]"));
        assert_eq!(percent("101"), None);
        assert_eq!(percent("-1"), None);
        assert_eq!(percent("50px"), None);
        assert_eq!(percent("half"), None);
    }

    #[test]
    fn fractions_and_pass_through() {
        assert!(is_fraction("1/2"));
        assert!(is_fraction("2/3"));
        assert!(!is_fraction("0/2"));
        assert!(!is_fraction("1/"));
        assert!(is_pass_through("screen"));
        assert!(is_pass_through("[50vw]"));
        assert!(!is_pass_through("[50 vw]"));
        assert!(!is_pass_through("wide"));
    }

    #[test]
    fn colors() {
        assert_eq!(
            ColorValue::parse("#ABC", "bg"),
            Some(ColorValue::Hex("#abc".into()))
        );
        assert_eq!(
            ColorValue::parse("#12345g", "bg"),
            None
        );
        assert_eq!(
            ColorValue::parse("white", "border").map(|c| c.class("border")),
            Some("border-white".into())
        );
        assert_eq!(
            ColorValue::parse("blue-950", "bg").map(|c| c.class("bg")),
            Some("bg-blue-950".into())
        );
        assert_eq!(ColorValue::parse("blue-550", "bg"), None);
        assert_eq!(
            ColorValue::parse("layer-surface", "bg").map(|c| c.class("bg")),
            Some("bg-layer-surface".into())
        );
        assert_eq!(
            ColorValue::parse("bg-brand-primary", "bg").map(|c| c.class("bg")),
            Some("bg-brand-primary".into())
        );
        assert_eq!(ColorValue::parse("bg-brand-primary", "border"), None);
        assert_eq!(ColorValue::parse("bg-", "bg"), None);
    }
}
