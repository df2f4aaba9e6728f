//! Stroke property: border color, opacity, position, weight and style.

use boxwind_lexer::{format_magnitude, strip_group, tokenize, Token};

use crate::diagnostics::{Diagnostics, Property};
use crate::result::{ClassSet, ParseResult};
use crate::value::{percent, pixels, ColorValue};

/// Translates a stroke property string.
///
/// Stroke is entirely optional: absent input yields an empty result with no
/// diagnostics. Once written, a color and a weight are both required.
///
/// ```rust
/// use boxwind::stroke::parse_stroke;
///
/// let result = parse_stroke(Some("color=#ff0000, weight=(1, 0, 2, 0), position=center"));
/// assert_eq!(
///     result.classes,
///     vec!["border-[#ff0000]", "border-t", "border-r-0", "border-b-2", "border-l-0"]
/// );
/// assert!(result.errors.is_empty());
/// ```
pub fn parse_stroke(input: Option<&str>) -> ParseResult {
    let tokens = tokenize(input);
    let mut parser = StrokeParser::new();
    if tokens.is_empty() {
        return parser.diag.finish(parser.classes);
    }
    for token in &tokens {
        parser.token(token);
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Positional order inside a bundle.
    const ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Side::Top => &["top", "t", "↑"],
            Side::Right => &["right", "r", "→"],
            Side::Bottom => &["bottom", "b", "↓"],
            Side::Left => &["left", "l", "←"],
        }
    }

    fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ORDER
            .into_iter()
            .find(|side| side.aliases().contains(&name.as_str()))
    }

    /// Splits `t-2px` or `↑-2px` into side and value.
    fn split_item(text: &str) -> Option<(Self, &str)> {
        Self::ORDER.into_iter().find_map(|side| {
            side.aliases().iter().find_map(|alias| {
                let head = text.get(..alias.len())?;
                if !head.eq_ignore_ascii_case(alias) {
                    return None;
                }
                Some((side, text[alias.len()..].strip_prefix('-')?))
            })
        })
    }

    fn short(self) -> &'static str {
        match self {
            Side::Top => "t",
            Side::Right => "r",
            Side::Bottom => "b",
            Side::Left => "l",
        }
    }

    fn concern(self) -> &'static str {
        match self {
            Side::Top => "weight-t",
            Side::Right => "weight-r",
            Side::Bottom => "weight-b",
            Side::Left => "weight-l",
        }
    }
}

/// Spells a border width class: `border`, `border-2`, `border-t-[3px]`.
fn weight_class(prefix: &str, value: &str) -> Option<String> {
    let px = pixels(value).filter(|px| *px >= 0.0)?;
    Some(match px {
        _ if px == 1.0 => prefix.to_string(),
        _ if [0.0, 2.0, 4.0, 8.0].contains(&px) => format!("{}-{}", prefix, format_magnitude(px)),
        _ => format!("{}-[{}px]", prefix, format_magnitude(px)),
    })
}

struct StrokeParser {
    classes: ClassSet,
    diag: Diagnostics,
}

impl StrokeParser {
    fn new() -> Self {
        Self {
            classes: ClassSet::new(),
            diag: Diagnostics::new(Property::Stroke),
        }
    }

    fn token(&mut self, token: &Token) {
        match token {
            Token::Bare(text) => {
                if pixels(text).is_some() {
                    self.uniform(text);
                } else if ColorValue::parse(text, "border").is_some() {
                    self.color(text);
                } else {
                    self.diag
                        .warn(format_args!("unrecognized token '{}'", text));
                }
            }
            Token::KeyValue { key, value } => {
                let key = key.to_ascii_lowercase();
                match key.as_str() {
                    "color" => self.color(value),
                    "opacity" => self.opacity(value),
                    "position" | "align" => self.position(value),
                    "weight" | "width" => self.weight(value),
                    "style" => self.style(value),
                    _ => {
                        let side = key
                            .strip_prefix("weight-")
                            .or_else(|| key.strip_prefix("width-"))
                            .and_then(Side::parse);
                        match side {
                            Some(side) => self.side(side, value),
                            None => self.diag.warn(format_args!("unknown key '{}'", key)),
                        }
                    }
                }
            }
        }
    }

    fn color(&mut self, value: &str) {
        match ColorValue::parse(value, "border") {
            Some(color) => {
                let previous = self.classes.insert("color", color.class("border"));
                self.diag
                    .superseded("stroke color", previous, &self.classes, "color");
            }
            None => self
                .diag
                .error(format_args!("invalid stroke color '{}'", value)),
        }
    }

    fn opacity(&mut self, value: &str) {
        match percent(value) {
            Some(fragment) => {
                let previous = self
                    .classes
                    .insert("opacity", format!("border-opacity-{}", fragment));
                self.diag
                    .superseded("stroke opacity", previous, &self.classes, "opacity");
            }
            None => self.diag.error(format_args!(
                "invalid stroke opacity '{}', expected 0 to 100",
                value
            )),
        }
    }

    fn position(&mut self, value: &str) {
        if !matches!(value.trim().to_ascii_lowercase().as_str(), "center" | "centered") {
            self.diag.error(format_args!(
                "unsupported stroke position '{}', only center is available",
                value
            ));
        }
    }

    fn weight(&mut self, value: &str) {
        match strip_group(value) {
            Some(inner) => self.bundle(inner),
            None => self.uniform(value),
        }
    }

    fn uniform(&mut self, value: &str) {
        let Some(class) = weight_class("border", value) else {
            self.diag
                .error(format_args!("invalid stroke weight '{}'", value));
            return;
        };
        for side in Side::ORDER {
            self.classes.remove(side.concern());
        }
        let previous = self.classes.insert("weight", class);
        self.diag
            .superseded("stroke weight", previous, &self.classes, "weight");
    }

    /// Parses a collapsed `(...)` bundle of per-side weights.
    fn bundle(&mut self, inner: &str) {
        let mut position = 0;
        for token in tokenize(Some(inner)) {
            match &token {
                Token::KeyValue { key, value } => match Side::parse(key) {
                    Some(side) => self.side(side, value),
                    None => self.diag.warn(format_args!("unknown side '{}'", key)),
                },
                Token::Bare(text) => {
                    if let Some(nested) = strip_group(text) {
                        self.bundle(nested);
                    } else if let Some((side, value)) = Side::split_item(text) {
                        self.side(side, value);
                    } else if let Some(side) = Side::ORDER.get(position).copied() {
                        position += 1;
                        self.side(side, text);
                    } else {
                        self.diag.warn(format_args!(
                            "stroke weight takes at most four values; '{}' was ignored",
                            text
                        ));
                    }
                }
            }
        }
    }

    fn side(&mut self, side: Side, value: &str) {
        let prefix = format!("border-{}", side.short());
        let Some(class) = weight_class(&prefix, value) else {
            self.diag.error(format_args!(
                "invalid {} stroke weight '{}'",
                side.short(),
                value
            ));
            return;
        };
        if self.classes.remove("weight").is_some() {
            self.diag.warn(format_args!(
                "{} stroke weight replaces the earlier uniform weight",
                side.short()
            ));
        }
        let previous = self.classes.insert(side.concern(), class);
        self.diag
            .superseded(side.concern(), previous, &self.classes, side.concern());
    }

    fn style(&mut self, value: &str) {
        let style = value.trim().to_ascii_lowercase();
        if matches!(style.as_str(), "solid" | "dashed" | "dotted" | "double" | "none") {
            let previous = self.classes.insert("style", format!("border-{}", style));
            self.diag
                .superseded("stroke style", previous, &self.classes, "style");
        } else {
            self.diag
                .error(format_args!("invalid stroke style '{}'", value));
        }
    }

    fn finish(mut self) -> ParseResult {
        if !self.classes.contains("color") {
            self.diag.error("missing stroke color");
        }
        let weighted = self.classes.contains("weight")
            || Side::ORDER
                .iter()
                .any(|side| self.classes.contains(side.concern()));
        if !weighted {
            self.diag.error("missing stroke weight");
        }
        self.diag.finish(self.classes)
    }
}
