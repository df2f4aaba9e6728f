//! Appearance property: visibility, opacity and corner radius.

use boxwind_lexer::{
    format_magnitude, parse_bool, parse_numeric, strip_group, tokenize, Token, Unit,
};

use crate::diagnostics::{Diagnostics, Property};
use crate::result::{ClassSet, ParseResult};
use crate::value::percent;

/// Translates an appearance property string.
///
/// Visibility and opacity are required once anything is written; a missing
/// one is reported as an error and its default is used. Leaving the whole
/// property out is only a warning, since the defaults need no class.
///
/// ```rust
/// use boxwind::appearance::parse_appearance;
///
/// let result = parse_appearance(Some("visible=true, opacity=80, radius=(4px, 4px, 0, 0)"));
/// assert_eq!(
///     result.classes,
///     vec!["opacity-80", "rounded-tl-[4px]", "rounded-tr-[4px]", "rounded-br-none", "rounded-bl-none"]
/// );
/// assert!(result.errors.is_empty());
/// ```
pub fn parse_appearance(input: Option<&str>) -> ParseResult {
    let tokens = tokenize(input);
    let mut parser = AppearanceParser::new();

    if tokens.is_empty() {
        parser
            .diag
            .warn("no appearance given; defaults applied (visible, opacity 100)");
        return parser.diag.finish(parser.classes);
    }

    for token in &tokens {
        parser.token(token);
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Positional order inside a bundle.
    const ORDER: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Corner::TopLeft => &["top-left", "tl", "↖"],
            Corner::TopRight => &["top-right", "tr", "↗"],
            Corner::BottomRight => &["bottom-right", "br", "↘"],
            Corner::BottomLeft => &["bottom-left", "bl", "↙"],
        }
    }

    fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ORDER
            .into_iter()
            .find(|corner| corner.aliases().contains(&name.as_str()))
    }

    /// Splits `tl-4px` or `↖-4px` into corner and value.
    fn split_item(text: &str) -> Option<(Self, &str)> {
        Self::ORDER.into_iter().find_map(|corner| {
            corner.aliases().iter().find_map(|alias| {
                let head = text.get(..alias.len())?;
                if !head.eq_ignore_ascii_case(alias) {
                    return None;
                }
                let value = text[alias.len()..].strip_prefix('-')?;
                Some((corner, value))
            })
        })
    }

    fn short(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomRight => "br",
            Corner::BottomLeft => "bl",
        }
    }

    fn concern(self) -> &'static str {
        match self {
            Corner::TopLeft => "radius-tl",
            Corner::TopRight => "radius-tr",
            Corner::BottomRight => "radius-br",
            Corner::BottomLeft => "radius-bl",
        }
    }
}

/// Renders a radius as the fragment after `rounded-` / `rounded-tl-`.
fn radius_fragment(value: &str) -> Option<String> {
    let literal = parse_numeric(value)?;
    if literal.magnitude < 0.0 {
        return None;
    }
    let magnitude = format_magnitude(literal.magnitude);
    match literal.unit {
        _ if literal.magnitude == 0.0 => Some("none".to_string()),
        None | Some(Unit::Px) => Some(format!("[{}px]", magnitude)),
        Some(Unit::Percent) => Some(format!("[{}%]", magnitude)),
        Some(Unit::Deg) => None,
    }
}

fn corner_key(key: &str) -> Option<Corner> {
    ["radius-", "corner-radius-", "rounded-"]
        .iter()
        .find_map(|prefix| key.strip_prefix(prefix))
        .and_then(Corner::parse)
}

fn visibility_value(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "visible" => Some(true),
        "hidden" | "invisible" => Some(false),
        other => parse_bool(other),
    }
}

struct AppearanceParser {
    classes: ClassSet,
    diag: Diagnostics,
    visibility_seen: bool,
    opacity_seen: bool,
}

impl AppearanceParser {
    fn new() -> Self {
        Self {
            classes: ClassSet::new(),
            diag: Diagnostics::new(Property::Appearance),
            visibility_seen: false,
            opacity_seen: false,
        }
    }

    fn token(&mut self, token: &Token) {
        match token {
            Token::Bare(text) => match text.to_ascii_lowercase().as_str() {
                "visible" => self.visibility(true),
                "hidden" | "invisible" => self.visibility(false),
                "corner-smoothing" | "smoothing" => self.smoothing(),
                _ => self
                    .diag
                    .warn(format_args!("unrecognized token '{}'", text)),
            },
            Token::KeyValue { key, value } => {
                let key = key.to_ascii_lowercase();
                match key.as_str() {
                    "visible" | "visibility" => match visibility_value(value) {
                        Some(visible) => self.visibility(visible),
                        None => {
                            self.visibility_seen = true;
                            self.diag
                                .error(format_args!("invalid visibility '{}'", value));
                        }
                    },
                    "opacity" => self.opacity(value),
                    "radius" | "corner-radius" | "rounded" => self.radius(value),
                    "corner-smoothing" | "smoothing" => self.smoothing(),
                    _ => match corner_key(&key) {
                        Some(corner) => self.corner(corner, value),
                        None => self.diag.warn(format_args!("unknown key '{}'", key)),
                    },
                }
            }
        }
    }

    fn visibility(&mut self, visible: bool) {
        self.visibility_seen = true;
        if visible {
            self.classes.remove("visibility");
        } else {
            self.classes.insert("visibility", "invisible");
        }
    }

    fn opacity(&mut self, value: &str) {
        self.opacity_seen = true;
        match percent(value) {
            Some(fragment) => {
                let previous = self.classes.insert("opacity", format!("opacity-{}", fragment));
                self.diag
                    .superseded("opacity", previous, &self.classes, "opacity");
            }
            None => self.diag.error(format_args!(
                "invalid opacity '{}', expected 0 to 100",
                value
            )),
        }
    }

    fn radius(&mut self, value: &str) {
        match strip_group(value) {
            Some(inner) => self.bundle(inner),
            None => match radius_fragment(value) {
                Some(fragment) => {
                    for corner in Corner::ORDER {
                        self.classes.remove(corner.concern());
                    }
                    let previous = self.classes.insert("radius", format!("rounded-{}", fragment));
                    self.diag
                        .superseded("corner radius", previous, &self.classes, "radius");
                }
                None => self
                    .diag
                    .error(format_args!("invalid corner radius '{}'", value)),
            },
        }
    }

    /// Parses a collapsed `(...)` bundle of per-corner values.
    fn bundle(&mut self, inner: &str) {
        let mut position = 0;
        for token in tokenize(Some(inner)) {
            match &token {
                Token::KeyValue { key, value } => match Corner::parse(key) {
                    Some(corner) => self.corner(corner, strip_group(value).unwrap_or(value)),
                    None => self
                        .diag
                        .warn(format_args!("unknown corner '{}'", key)),
                },
                Token::Bare(text) => {
                    if let Some(nested) = strip_group(text) {
                        self.bundle(nested);
                    } else if let Some((corner, value)) = Corner::split_item(text) {
                        self.corner(corner, value);
                    } else if let Some(corner) = Corner::ORDER.get(position).copied() {
                        position += 1;
                        self.corner(corner, text);
                    } else {
                        self.diag.warn(format_args!(
                            "corner radius takes at most four values; '{}' was ignored",
                            text
                        ));
                    }
                }
            }
        }
    }

    fn corner(&mut self, corner: Corner, value: &str) {
        let Some(fragment) = radius_fragment(value) else {
            self.diag.error(format_args!(
                "invalid {} corner radius '{}'",
                corner.short(),
                value
            ));
            return;
        };
        if self.classes.remove("radius").is_some() {
            self.diag.warn(format_args!(
                "{} corner radius replaces the earlier all-corner radius",
                corner.short()
            ));
        }
        let previous = self.classes.insert(
            corner.concern(),
            format!("rounded-{}-{}", corner.short(), fragment),
        );
        self.diag
            .superseded(corner.concern(), previous, &self.classes, corner.concern());
    }

    fn smoothing(&mut self) {
        self.diag
            .warn("corner smoothing has no utility class and was ignored");
    }

    fn finish(mut self) -> ParseResult {
        if !self.visibility_seen {
            self.diag
                .error("missing visibility; defaults to visible");
        }
        if !self.opacity_seen {
            self.diag.error("missing opacity; defaults to 100");
        }
        if !self.classes.contains("opacity") {
            self.classes.insert("opacity", "opacity-100");
        }
        self.diag.finish(self.classes)
    }
}
