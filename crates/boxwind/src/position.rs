//! Position property: detachment, rotation and mirroring, constraints and
//! z-order.
//!
//! The `ignore-auto-layout` flag is read before anything else, so tokens
//! gated on it (edges, offsets, constraints) behave the same wherever the
//! flag appears in the string.

use boxwind_lexer::{
    format_magnitude, parse_bool, parse_numeric, strip_group, tokenize, Token, Unit,
};
use tracing::trace;

use crate::diagnostics::{Diagnostics, Property};
use crate::result::{ClassSet, ParseResult};
use crate::value::length_fragment;

/// Output of [`parse_position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionResult {
    pub result: ParseResult,
    /// The element leaves normal flow and belongs in the top-level layer.
    pub is_fixed: bool,
}

/// Rotation amounts with a named utility class.
const ROTATE_STEPS: [i64; 8] = [1, 2, 3, 6, 12, 45, 90, 180];

/// z-index values with a named utility class.
const Z_STEPS: [u64; 6] = [0, 10, 20, 30, 40, 50];

/// Translates a position property string.
///
/// ```rust
/// use boxwind::position::parse_position;
///
/// let position = parse_position(Some("ignore-auto-layout=true, rotation=r-90"));
/// assert!(position.is_fixed);
/// assert_eq!(position.result.classes, vec!["fixed", "rotate-90", "z-50"]);
/// ```
pub fn parse_position(input: Option<&str>) -> PositionResult {
    let tokens = tokenize(input);
    let mut parser = PositionParser::new();
    parser.scan_flag(&tokens);
    for token in &tokens {
        parser.token(token);
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn concern(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    /// Classes for a constraint on this axis, `None` if it does not apply.
    fn constraint(self, value: &str) -> Option<Vec<&'static str>> {
        let classes = match (self, value.trim().to_ascii_lowercase().as_str()) {
            (Axis::Horizontal, "left") => vec!["left-0"],
            (Axis::Horizontal, "right") => vec!["right-0"],
            (Axis::Horizontal, "stretch" | "left-right") => vec!["left-0", "right-0"],
            (Axis::Horizontal, "center") => vec!["left-1/2", "-translate-x-1/2"],
            (Axis::Horizontal, "scale") => vec!["w-full"],
            (Axis::Vertical, "top") => vec!["top-0"],
            (Axis::Vertical, "bottom") => vec!["bottom-0"],
            (Axis::Vertical, "stretch" | "top-bottom") => vec!["top-0", "bottom-0"],
            (Axis::Vertical, "center") => vec!["top-1/2", "-translate-y-1/2"],
            (Axis::Vertical, "scale") => vec!["h-full"],
            _ => return None,
        };
        Some(classes)
    }
}

fn is_flag_key(key: &str) -> bool {
    matches!(key, "ignore-auto-layout" | "ignore-layout" | "detached")
}

struct PositionParser {
    classes: ClassSet,
    diag: Diagnostics,
    detached: bool,
    flag_seen: bool,
    rotation_seen: bool,
}

impl PositionParser {
    fn new() -> Self {
        Self {
            classes: ClassSet::new(),
            diag: Diagnostics::new(Property::Position),
            detached: false,
            flag_seen: false,
            rotation_seen: false,
        }
    }

    fn scan_flag(&mut self, tokens: &[Token]) {
        for token in tokens {
            match token {
                Token::Bare(text) if is_flag_key(&text.to_ascii_lowercase()) => {
                    self.flag_seen = true;
                    self.detached = true;
                }
                Token::KeyValue { key, value } if is_flag_key(&key.to_ascii_lowercase()) => {
                    self.flag_seen = true;
                    match parse_bool(value) {
                        Some(flag) => self.detached = flag,
                        None => self
                            .diag
                            .error(format_args!("invalid {} value '{}'", key, value)),
                    }
                }
                _ => {}
            }
        }
        trace!(detached = self.detached, "position flag resolved");
    }

    fn token(&mut self, token: &Token) {
        match token {
            Token::Bare(text) => self.bare(text, token),
            Token::KeyValue { key, value } => self.pair(&key.to_ascii_lowercase(), value, token),
        }
    }

    /// Reports `token` unless the element is detached; returns whether to go on.
    fn detached_only(&mut self, token: &Token) -> bool {
        if !self.detached {
            self.diag.error(format_args!(
                "'{}' requires ignore-auto-layout=true and was ignored",
                token
            ));
        }
        self.detached
    }

    fn bare(&mut self, text: &str, token: &Token) {
        let lower = text.to_ascii_lowercase();
        if is_flag_key(&lower) {
            return;
        }
        if matches!(lower.as_str(), "left" | "right" | "top" | "bottom") {
            if self.detached_only(token) {
                self.edge(&lower);
            }
            return;
        }
        if !self.rotation_item(text) {
            self.diag
                .warn(format_args!("unrecognized token '{}'", text));
        } else {
            self.rotation_seen = true;
        }
    }

    fn pair(&mut self, key: &str, value: &str, token: &Token) {
        match key {
            _ if is_flag_key(key) => {}
            "rotation" | "rotate" => self.rotation(value),
            "align" | "alignment" => {
                if self.detached_only(token) {
                    self.edge(value);
                }
            }
            "x" => {
                if self.detached_only(token) {
                    self.offset(Axis::Horizontal, value);
                }
            }
            "y" => {
                if self.detached_only(token) {
                    self.offset(Axis::Vertical, value);
                }
            }
            "constraint-x" | "horizontal-constraint" => {
                if self.detached_only(token) {
                    self.constrain(Axis::Horizontal, value);
                }
            }
            "constraint-y" | "vertical-constraint" => {
                if self.detached_only(token) {
                    self.constrain(Axis::Vertical, value);
                }
            }
            "constraints" => {
                if self.detached_only(token) {
                    self.constraints(value);
                }
            }
            "z" | "z-index" | "z-order" => self.z_order(value),
            _ => self.diag.warn(format_args!("unknown key '{}'", key)),
        }
    }

    fn rotation(&mut self, value: &str) {
        self.rotation_seen = true;
        let items = match strip_group(value) {
            Some(inner) => tokenize(Some(inner)),
            None => vec![Token::bare(value)],
        };
        for item in items {
            match &item {
                Token::Bare(text) => {
                    if let Some(inner) = strip_group(text) {
                        self.rotation(inner);
                    } else if !self.rotation_item(text) {
                        self.diag
                            .error(format_args!("invalid rotation '{}'", text));
                    }
                }
                Token::KeyValue { .. } => self
                    .diag
                    .error(format_args!("invalid rotation '{}'", item)),
            }
        }
    }

    /// Applies one rotation or mirroring item; `false` if it is not one.
    fn rotation_item(&mut self, text: &str) -> bool {
        let lower = text.trim().to_ascii_lowercase();
        match lower.as_str() {
            "none" => {
                self.classes.remove("rotate");
                return true;
            }
            "flip-h" | "flip-x" | "mirror-h" | "horizontal" => {
                self.classes.insert("flip-x", "-scale-x-100");
                return true;
            }
            "flip-v" | "flip-y" | "mirror-v" | "vertical" => {
                self.classes.insert("flip-y", "-scale-y-100");
                return true;
            }
            _ => {}
        }

        let degrees = lower.strip_prefix("r-").unwrap_or(&lower);
        let Some(literal) = parse_numeric(degrees) else {
            return false;
        };
        if !matches!(literal.unit, None | Some(Unit::Deg)) {
            return false;
        }

        match rotate_class(literal.magnitude) {
            Some(class) => {
                let previous = self.classes.insert("rotate", class);
                self.diag
                    .superseded("rotation", previous, &self.classes, "rotate");
            }
            None => {
                self.classes.remove("rotate");
            }
        }
        true
    }

    fn edge(&mut self, value: &str) {
        let (axis, class) = match value.trim().to_ascii_lowercase().as_str() {
            "left" => (Axis::Horizontal, "left-0"),
            "right" => (Axis::Horizontal, "right-0"),
            "top" => (Axis::Vertical, "top-0"),
            "bottom" => (Axis::Vertical, "bottom-0"),
            _ => {
                self.diag
                    .error(format_args!("invalid alignment '{}'", value));
                return;
            }
        };
        self.place(axis, vec![class.to_string()]);
    }

    fn offset(&mut self, axis: Axis, value: &str) {
        let prefix = match axis {
            Axis::Horizontal => "left",
            Axis::Vertical => "top",
        };
        match length_fragment(value) {
            Some(fragment) => self.place(axis, vec![format!("{}-{}", prefix, fragment)]),
            None => self.diag.error(format_args!(
                "invalid {} offset '{}'",
                if axis == Axis::Horizontal { "x" } else { "y" },
                value
            )),
        }
    }

    fn constrain(&mut self, axis: Axis, value: &str) {
        match axis.constraint(value) {
            Some(classes) => self.place(axis, classes.into_iter().map(String::from).collect()),
            None => self.diag.error(format_args!(
                "invalid {} constraint '{}'",
                axis.concern(),
                value
            )),
        }
    }

    fn constraints(&mut self, value: &str) {
        let inner = strip_group(value).unwrap_or(value);
        for token in tokenize(Some(inner)) {
            match &token {
                Token::KeyValue { key, value } => match key.to_ascii_lowercase().as_str() {
                    "x" | "horizontal" => self.constrain(Axis::Horizontal, value),
                    "y" | "vertical" => self.constrain(Axis::Vertical, value),
                    _ => self
                        .diag
                        .warn(format_args!("unknown constraint '{}'", token)),
                },
                Token::Bare(_) => self
                    .diag
                    .warn(format_args!("unknown constraint '{}'", token)),
            }
        }
    }

    /// One concern per axis; the classes are kept together.
    fn place(&mut self, axis: Axis, classes: Vec<String>) {
        let previous = self.classes.set(axis.concern(), classes);
        self.diag.superseded(
            &format!("{} placement", axis.concern()),
            previous,
            &self.classes,
            axis.concern(),
        );
    }

    fn z_order(&mut self, value: &str) {
        match z_class(value) {
            Some(class) => {
                let previous = self.classes.insert("z", class);
                self.diag.superseded("z-order", previous, &self.classes, "z");
            }
            None => self
                .diag
                .error(format_args!("invalid z-order '{}'", value)),
        }
    }

    fn finish(mut self) -> PositionResult {
        if !self.flag_seen {
            self.diag
                .error("missing ignore-auto-layout flag; defaults to false");
        }
        if !self.rotation_seen {
            self.diag
                .error("missing rotation; use rotation=none for no rotation");
        }

        if self.detached {
            self.classes.prepend("position", "fixed");
            if !self.classes.contains("z") {
                self.classes.insert("z", "z-50");
            }
        } else if self.classes.contains("z") {
            self.classes.prepend("position", "relative");
            self.diag
                .warn("z-order without ignore-auto-layout; added relative positioning");
        }

        PositionResult {
            is_fixed: self.detached,
            result: self.diag.finish(self.classes),
        }
    }
}

/// Normalizes an angle into (-180, 180] and spells its class.
fn rotate_class(degrees: f64) -> Option<String> {
    let mut angle = degrees % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle <= -180.0 {
        angle += 360.0;
    }
    if angle == 0.0 {
        return None;
    }

    let whole = angle.fract() == 0.0;
    let magnitude = angle.abs() as i64;
    Some(match (whole && ROTATE_STEPS.contains(&magnitude), angle < 0.0) {
        (true, false) => format!("rotate-{}", magnitude),
        (true, true) => format!("-rotate-{}", magnitude),
        (false, _) => format!("rotate-[{}deg]", format_magnitude(angle)),
    })
}

fn z_class(value: &str) -> Option<String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
        return Some("z-auto".to_string());
    }
    let z: i64 = value.parse().ok()?;
    Some(match (Z_STEPS.contains(&z.unsigned_abs()), z < 0) {
        (true, false) => format!("z-{}", z),
        (true, true) => format!("-z-{}", z.unsigned_abs()),
        (false, _) => format!("z-[{}]", z),
    })
}
