//! Layout property: sizing, clipping, and either standard spacing or
//! auto-layout flex settings.
//!
//! The mode is decided once, before any token is looked at:
//!
//! 1. `Auto{...}` (or `Standard{...}`) wrapping the whole string
//! 2. an `Auto` / `Standard` marker, bare or as `mode=...`
//! 3. inference from auto-only keywords (`flow=`, `gap=`, `fill`, `hug`,
//!    `↓ → ↵ ↔`), with a warning asking for an explicit mode
//!
//! Tokens that only make sense in the other mode are reported as errors and
//! contribute nothing.

use boxwind_lexer::{parse_bool, strip_group, strip_wrapper, tokenize, Token};
use tracing::trace;

use crate::diagnostics::{Diagnostics, Property};
use crate::result::{ClassSet, ParseResult};
use crate::value::{is_fraction, is_pass_through, length_fragment, pixel_fragment};

/// Layout mode, fixed for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Block layout with optional child spacing.
    Standard,
    /// Flex layout: flow, alignment, gap, padding.
    Auto,
    /// No layout input at all.
    Unknown,
}

/// Output of [`parse_layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    pub mode: LayoutMode,
    pub result: ParseResult,
}

/// Translates a layout property string.
///
/// ```rust
/// use boxwind::layout::{parse_layout, LayoutMode};
///
/// let layout = parse_layout(Some("Auto{flow=vertical, gap=8px, w-fill, h-hug}"));
/// assert_eq!(layout.mode, LayoutMode::Auto);
/// assert_eq!(
///     layout.result.classes,
///     vec!["flex", "flex-col", "gap-[8px]", "w-full", "h-auto"]
/// );
/// ```
pub fn parse_layout(input: Option<&str>) -> LayoutResult {
    let mut diag = Diagnostics::new(Property::Layout);
    let (mode, tokens) = resolve_mode(input, &mut diag);
    trace!(?mode, tokens = tokens.len(), "layout mode resolved");

    let mut parser = LayoutParser::new(mode, diag);
    for token in &tokens {
        parser.token(token);
    }
    LayoutResult {
        mode,
        result: parser.finish(),
    }
}

fn resolve_mode(input: Option<&str>, diag: &mut Diagnostics) -> (LayoutMode, Vec<Token>) {
    let raw = match input.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return (LayoutMode::Unknown, Vec::new()),
    };

    if let Some(inner) = strip_wrapper(raw, "Auto") {
        return (LayoutMode::Auto, tokenize(Some(inner)));
    }
    if let Some(inner) = strip_wrapper(raw, "Standard") {
        return (LayoutMode::Standard, tokenize(Some(inner)));
    }

    let tokens = tokenize(Some(raw));
    let leading = tokens
        .first()
        .and_then(leading_wrapper)
        .map(|(mode, inner)| (mode, tokenize(Some(inner))));
    if let Some((mode, mut merged)) = leading {
        diag.warn(
            "mode wrapper does not enclose the whole value; \
             tokens after it were read as part of the layout",
        );
        merged.extend(tokens.into_iter().skip(1));
        return (mode, merged);
    }

    if tokens.iter().any(|t| is_marker(t, "auto")) {
        return (LayoutMode::Auto, tokens);
    }
    if tokens.iter().any(|t| is_marker(t, "standard")) {
        return (LayoutMode::Standard, tokens);
    }

    if tokens.iter().any(hints_auto) {
        diag.warn(
            "no layout mode given; inferred Auto from auto-layout keywords, \
             write Auto{...} to be explicit",
        );
        (LayoutMode::Auto, tokens)
    } else {
        diag.warn(
            "no layout mode given; assuming Standard, \
             write Auto{...} or mode=Standard to be explicit",
        );
        (LayoutMode::Standard, tokens)
    }
}

/// A wrapper such as `Auto{flow=row}` leading a longer value.
fn leading_wrapper(token: &Token) -> Option<(LayoutMode, &str)> {
    let Token::Bare(text) = token else {
        return None;
    };
    if let Some(inner) = strip_wrapper(text, "Auto") {
        return Some((LayoutMode::Auto, inner));
    }
    strip_wrapper(text, "Standard").map(|inner| (LayoutMode::Standard, inner))
}

fn is_marker(token: &Token, name: &str) -> bool {
    match token {
        Token::Bare(text) => text.eq_ignore_ascii_case(name),
        Token::KeyValue { key, value } => {
            key.eq_ignore_ascii_case("mode") && value.eq_ignore_ascii_case(name)
        }
    }
}

fn hints_auto(token: &Token) -> bool {
    if let Some(key) = token.key() {
        if key.eq_ignore_ascii_case("flow") || key.eq_ignore_ascii_case("gap") {
            return true;
        }
    }
    let text = token.text().to_ascii_lowercase();
    text.contains("fill")
        || text.contains("hug")
        || ['↓', '→', '↵', '↔'].iter().any(|m| text.contains(*m))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
}

impl Dimension {
    const BARE_PREFIXES: [(&'static str, Dimension); 6] = [
        ("min-w-", Dimension::MinWidth),
        ("max-w-", Dimension::MaxWidth),
        ("min-h-", Dimension::MinHeight),
        ("max-h-", Dimension::MaxHeight),
        ("w-", Dimension::Width),
        ("h-", Dimension::Height),
    ];

    fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "w" | "width" => Dimension::Width,
            "h" | "height" => Dimension::Height,
            "min-w" | "min-width" => Dimension::MinWidth,
            "max-w" | "max-width" => Dimension::MaxWidth,
            "min-h" | "min-height" => Dimension::MinHeight,
            "max-h" | "max-height" => Dimension::MaxHeight,
            _ => return None,
        })
    }

    /// Splits a bare item such as `min-w-200px` into dimension and value.
    fn split_item(text: &str) -> Option<(Self, &str)> {
        Self::BARE_PREFIXES.iter().find_map(|(prefix, dim)| {
            let head = text.get(..prefix.len())?;
            head.eq_ignore_ascii_case(prefix)
                .then(|| (*dim, &text[prefix.len()..]))
        })
    }

    fn prefix(self) -> &'static str {
        match self {
            Dimension::Width => "w",
            Dimension::Height => "h",
            Dimension::MinWidth => "min-w",
            Dimension::MaxWidth => "max-w",
            Dimension::MinHeight => "min-h",
            Dimension::MaxHeight => "max-h",
        }
    }

    fn concern(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::MinWidth => "min-width",
            Dimension::MaxWidth => "max-width",
            Dimension::MinHeight => "min-height",
            Dimension::MaxHeight => "max-height",
        }
    }

    fn auto_only(self) -> bool {
        !matches!(self, Dimension::Width | Dimension::Height)
    }
}

fn size_fragment(value: &str) -> Option<String> {
    match value.to_ascii_lowercase().as_str() {
        "fill" => Some("full".to_string()),
        "hug" => Some("auto".to_string()),
        _ => length_fragment(value)
            .filter(|fragment| !fragment.starts_with("[-"))
            .or_else(|| (is_fraction(value) || is_pass_through(value)).then(|| value.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Start,
    Center,
    End,
}

impl Place {
    fn as_str(self) -> &'static str {
        match self {
            Place::Start => "start",
            Place::Center => "center",
            Place::End => "end",
        }
    }
}

/// One cell of the 3×3 alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Alignment {
    vertical: Place,
    horizontal: Place,
}

impl Alignment {
    fn parse(value: &str) -> Option<Self> {
        use Place::*;
        let (vertical, horizontal) = match value.trim().to_ascii_lowercase().as_str() {
            "top-left" => (Start, Start),
            "top-center" | "top" => (Start, Center),
            "top-right" => (Start, End),
            "center-left" | "left" => (Center, Start),
            "center" => (Center, Center),
            "center-right" | "right" => (Center, End),
            "bottom-left" => (End, Start),
            "bottom-center" | "bottom" => (End, Center),
            "bottom-right" => (End, End),
            _ => return None,
        };
        Some(Self {
            vertical,
            horizontal,
        })
    }

    /// Returns `(main axis, cross axis)` for a flow direction.
    fn axes(self, flow: Option<Flow>) -> (Place, Place) {
        match flow {
            Some(Flow::Column) => (self.vertical, self.horizontal),
            Some(Flow::Row) | None => (self.horizontal, self.vertical),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
}

impl Padding {
    const ALL: [Padding; 7] = [
        Padding::All,
        Padding::X,
        Padding::Y,
        Padding::Top,
        Padding::Right,
        Padding::Bottom,
        Padding::Left,
    ];

    fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "padding" | "p" => Padding::All,
            "padding-x" | "px" | "padding-horizontal" => Padding::X,
            "padding-y" | "py" | "padding-vertical" => Padding::Y,
            "padding-top" | "pt" => Padding::Top,
            "padding-right" | "pr" => Padding::Right,
            "padding-bottom" | "pb" => Padding::Bottom,
            "padding-left" | "pl" => Padding::Left,
            _ => return None,
        })
    }

    /// Keys accepted inside a `padding=(...)` group.
    fn from_group_key(key: &str) -> Option<Self> {
        Some(match key {
            "all" => Padding::All,
            "x" | "horizontal" => Padding::X,
            "y" | "vertical" => Padding::Y,
            "top" | "t" => Padding::Top,
            "right" | "r" => Padding::Right,
            "bottom" | "b" => Padding::Bottom,
            "left" | "l" => Padding::Left,
            _ => return Self::from_key(key),
        })
    }

    fn prefix(self) -> &'static str {
        match self {
            Padding::All => "p",
            Padding::X => "px",
            Padding::Y => "py",
            Padding::Top => "pt",
            Padding::Right => "pr",
            Padding::Bottom => "pb",
            Padding::Left => "pl",
        }
    }

    fn concern(self) -> &'static str {
        match self {
            Padding::All => "padding",
            Padding::X => "padding-x",
            Padding::Y => "padding-y",
            Padding::Top => "padding-top",
            Padding::Right => "padding-right",
            Padding::Bottom => "padding-bottom",
            Padding::Left => "padding-left",
        }
    }

    /// Entries a new value of `self` replaces, besides itself.
    fn broader(self) -> &'static [Padding] {
        match self {
            Padding::All => &[
                Padding::X,
                Padding::Y,
                Padding::Top,
                Padding::Right,
                Padding::Bottom,
                Padding::Left,
            ],
            Padding::X | Padding::Y => &[Padding::All],
            Padding::Top | Padding::Bottom => &[Padding::Y, Padding::All],
            Padding::Left | Padding::Right => &[Padding::X, Padding::All],
        }
    }
}

const AUTO_CONCERNS: [&str; 4] = ["flow", "wrap", "gap", "justify"];

struct LayoutParser {
    mode: LayoutMode,
    classes: ClassSet,
    diag: Diagnostics,
    width_seen: bool,
    height_seen: bool,
    flow: Option<Flow>,
    flow_seen: bool,
    alignment: Option<Alignment>,
    alignment_seen: bool,
    gap_seen: bool,
    gap_between: bool,
    baseline: bool,
}

impl LayoutParser {
    fn new(mode: LayoutMode, diag: Diagnostics) -> Self {
        Self {
            mode,
            classes: ClassSet::new(),
            diag,
            width_seen: false,
            height_seen: false,
            flow: None,
            flow_seen: false,
            alignment: None,
            alignment_seen: false,
            gap_seen: false,
            gap_between: false,
            baseline: false,
        }
    }

    fn token(&mut self, token: &Token) {
        trace!(%token, "layout token");
        match token {
            Token::Bare(text) => self.bare(text, token),
            Token::KeyValue { key, value } => self.pair(&key.to_ascii_lowercase(), value, token),
        }
    }

    /// Reports `token` when the mode is not Auto; returns whether to go on.
    fn auto_only(&mut self, token: &Token) -> bool {
        if self.mode == LayoutMode::Auto {
            return true;
        }
        self.diag
            .error(format_args!("'{}' only applies to Auto layout and was ignored", token));
        false
    }

    fn bare(&mut self, text: &str, token: &Token) {
        let lower = text.to_ascii_lowercase();
        match lower.as_str() {
            "auto" | "standard" => {}
            "clip" | "clip-content" => self.clip(true),
            "↓" | "→" | "↵" => {
                if self.auto_only(token) {
                    self.flow(&lower);
                }
            }
            "↔" => {
                if self.auto_only(token) {
                    self.gap("auto");
                }
            }
            _ if is_setting(&lower) => {
                if self.auto_only(token) {
                    self.setting(&lower, None);
                }
            }
            _ if Alignment::parse(&lower).is_some() => {
                if self.auto_only(token) {
                    self.align(text);
                }
            }
            _ => match Dimension::split_item(text) {
                Some((dim, value)) => self.dimension(dim, value, token),
                None => self
                    .diag
                    .warn(format_args!("unrecognized token '{}'", text)),
            },
        }
    }

    fn pair(&mut self, key: &str, value: &str, token: &Token) {
        match key {
            "mode" => {
                if !value.eq_ignore_ascii_case("auto") && !value.eq_ignore_ascii_case("standard") {
                    self.diag
                        .warn(format_args!("unknown layout mode '{}'", value));
                }
            }
            "dimensions" | "size" => self.dimensions(value),
            "clip" | "clip-content" => match clip_value(value) {
                Some(clip) => self.clip(clip),
                None => self
                    .diag
                    .error(format_args!("invalid clip content value '{}'", value)),
            },
            "space-y" | "vertical-spacing" => self.spacing("space-y", value, token),
            "space-x" | "horizontal-spacing" => self.spacing("space-x", value, token),
            "flow" => {
                if self.auto_only(token) {
                    self.flow(value);
                }
            }
            "align" | "alignment" => {
                if self.auto_only(token) {
                    self.align(value);
                }
            }
            "gap" => {
                if self.auto_only(token) {
                    self.gap(value);
                }
            }
            "settings" => {
                if self.auto_only(token) {
                    self.settings(value);
                }
            }
            _ if is_setting(key) => {
                if self.auto_only(token) {
                    self.setting(key, Some(value));
                }
            }
            _ => {
                if let Some(side) = Padding::from_key(key) {
                    if self.auto_only(token) {
                        self.padding(side, value);
                    }
                } else if let Some(dim) = Dimension::from_key(key) {
                    self.dimension(dim, value, token);
                } else {
                    self.diag.warn(format_args!("unknown key '{}'", key));
                }
            }
        }
    }

    fn dimensions(&mut self, value: &str) {
        let inner = strip_group(value).unwrap_or(value);
        for token in tokenize(Some(inner)) {
            let item = match &token {
                Token::Bare(text) => Dimension::split_item(text),
                Token::KeyValue { key, value } => {
                    Dimension::from_key(&key.to_ascii_lowercase()).map(|dim| (dim, value.as_str()))
                }
            };
            match item {
                Some((dim, value)) => self.dimension(dim, value, &token),
                None => self
                    .diag
                    .warn(format_args!("unrecognized dimension '{}'", token)),
            }
        }
    }

    fn dimension(&mut self, dim: Dimension, value: &str, token: &Token) {
        if dim.auto_only() && !self.auto_only(token) {
            return;
        }
        match dim {
            Dimension::Width => self.width_seen = true,
            Dimension::Height => self.height_seen = true,
            _ => {}
        }
        match size_fragment(value) {
            Some(fragment) => {
                let previous = self
                    .classes
                    .insert(dim.concern(), format!("{}-{}", dim.prefix(), fragment));
                self.diag
                    .superseded(dim.concern(), previous, &self.classes, dim.concern());
            }
            None => self
                .diag
                .error(format_args!("invalid {} '{}'", dim.concern(), value)),
        }
    }

    fn clip(&mut self, clip: bool) {
        if clip {
            self.classes.insert("clip", "overflow-hidden");
        } else {
            self.classes.remove("clip");
        }
    }

    fn spacing(&mut self, prefix: &'static str, value: &str, token: &Token) {
        if self.mode == LayoutMode::Auto {
            self.diag.error(format_args!(
                "'{}' only applies to Standard layout and was ignored",
                token
            ));
            return;
        }
        match pixel_fragment(value).filter(|f| !f.starts_with("[-")) {
            Some(fragment) => {
                let previous = self.classes.insert(prefix, format!("{}-{}", prefix, fragment));
                self.diag.superseded(prefix, previous, &self.classes, prefix);
            }
            None => self
                .diag
                .error(format_args!("invalid {} '{}', expected pixels", prefix, value)),
        }
    }

    fn flow(&mut self, value: &str) {
        self.flow_seen = true;
        match value.trim().to_ascii_lowercase().as_str() {
            "vertical" | "column" | "↓" => {
                if self.classes.remove("wrap").is_some() {
                    self.diag
                        .warn("vertical flow cannot wrap; the earlier wrap was removed");
                }
                self.set_flow(Flow::Column);
            }
            "horizontal" | "row" | "→" => self.set_flow(Flow::Row),
            "wrap" | "↵" => {
                if self.flow == Some(Flow::Row) {
                    self.classes.insert("wrap", "flex-wrap");
                } else {
                    self.diag
                        .error("wrap requires horizontal flow to be set before it");
                }
            }
            _ => self.diag.error(format_args!("invalid flow '{}'", value)),
        }
    }

    fn set_flow(&mut self, flow: Flow) {
        let class = match flow {
            Flow::Row => "flex-row",
            Flow::Column => "flex-col",
        };
        let previous = self.classes.insert("flow", class);
        self.diag.superseded("flow", previous, &self.classes, "flow");
        self.flow = Some(flow);
    }

    fn align(&mut self, value: &str) {
        self.alignment_seen = true;
        match Alignment::parse(value) {
            Some(alignment) => {
                if self.alignment.is_some_and(|current| current != alignment) {
                    self.diag
                        .warn("alignment set more than once; the last value wins");
                }
                self.alignment = Some(alignment);
            }
            None => self
                .diag
                .error(format_args!("invalid alignment '{}'", value)),
        }
    }

    fn gap(&mut self, value: &str) {
        self.gap_seen = true;
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "space-between" | "↔" => {
                self.classes.remove("gap");
                self.gap_between = true;
            }
            _ => match pixel_fragment(value).filter(|f| !f.starts_with("[-")) {
                Some(fragment) => {
                    let previous = self.classes.insert("gap", format!("gap-{}", fragment));
                    self.diag.superseded("gap", previous, &self.classes, "gap");
                    self.gap_between = false;
                }
                None => self.diag.error(format_args!("invalid gap '{}'", value)),
            },
        }
    }

    fn padding(&mut self, side: Padding, value: &str) {
        if let Some(inner) = strip_group(value) {
            for token in tokenize(Some(inner)) {
                match &token {
                    Token::KeyValue { key, value } => {
                        match Padding::from_group_key(&key.to_ascii_lowercase()) {
                            Some(entry) => self.padding(entry, value),
                            None => self
                                .diag
                                .warn(format_args!("unknown padding entry '{}'", token)),
                        }
                    }
                    Token::Bare(text) => self.padding(side, text),
                }
            }
            return;
        }

        let Some(fragment) = pixel_fragment(value).filter(|f| !f.starts_with("[-")) else {
            self.diag.error(format_args!(
                "invalid {} '{}', expected pixels",
                side.concern(),
                value
            ));
            return;
        };

        for broader in side.broader() {
            if self.classes.remove(broader.concern()).is_some() && side != Padding::All {
                self.diag.warn(format_args!(
                    "{} replaces the earlier {} value",
                    side.concern(),
                    broader.concern()
                ));
            }
        }
        let previous = self
            .classes
            .insert(side.concern(), format!("{}-{}", side.prefix(), fragment));
        self.diag
            .superseded(side.concern(), previous, &self.classes, side.concern());
    }

    fn settings(&mut self, value: &str) {
        let inner = strip_group(value).unwrap_or(value);
        for token in tokenize(Some(inner)) {
            match &token {
                Token::Bare(text) if is_setting(&text.to_ascii_lowercase()) => {
                    self.setting(&text.to_ascii_lowercase(), None)
                }
                Token::KeyValue { key, value } if is_setting(&key.to_ascii_lowercase()) => {
                    self.setting(&key.to_ascii_lowercase(), Some(value))
                }
                _ => self
                    .diag
                    .warn(format_args!("unknown setting '{}'", token)),
            }
        }
    }

    fn setting(&mut self, name: &str, value: Option<&str>) {
        match name {
            "strokes-included" | "canvas-stacking" => {
                self.diag
                    .warn(format_args!("setting '{}' is not supported and was ignored", name));
            }
            _ => match value.map_or(Some(true), parse_bool) {
                Some(enabled) => self.baseline = enabled,
                None => self.diag.error(format_args!(
                    "invalid {} value '{}'",
                    name,
                    value.unwrap_or_default()
                )),
            },
        }
    }

    fn finish(mut self) -> ParseResult {
        if self.mode == LayoutMode::Auto {
            self.resolve_alignment();
        }

        match (self.width_seen, self.height_seen) {
            (false, false) => self
                .diag
                .error("missing dimensions; width and height are required"),
            (false, true) => self.diag.error("missing width"),
            (true, false) => self.diag.error("missing height"),
            (true, true) => {}
        }

        if self.mode == LayoutMode::Auto {
            if !self.flow_seen {
                self.diag.error("missing flow; Auto layout requires one");
            }
            if !self.alignment_seen {
                self.diag
                    .warn("no alignment given; children align top-left");
            }
            if !self.gap_seen {
                self.diag.warn("no gap given; defaults to 0");
            }

            let produced = AUTO_CONCERNS.iter().any(|c| self.classes.contains(c))
                || self.classes.contains("items")
                || Padding::ALL
                    .iter()
                    .any(|p| self.classes.contains(p.concern()));
            if produced {
                self.classes.prepend("display", "flex");
            }
        }

        self.diag.finish(self.classes)
    }

    fn resolve_alignment(&mut self) {
        let (main, cross) = match self.alignment {
            Some(alignment) => {
                let (main, cross) = alignment.axes(self.flow);
                (Some(main), Some(cross))
            }
            None => (None, None),
        };

        if self.gap_between {
            self.classes.insert("justify", "justify-between");
        } else if let Some(main) = main {
            self.classes
                .insert("justify", format!("justify-{}", main.as_str()));
        }

        if self.baseline {
            self.classes.insert("items", "items-baseline");
        } else if let Some(cross) = cross {
            self.classes
                .insert("items", format!("items-{}", cross.as_str()));
        }
    }
}

fn is_setting(name: &str) -> bool {
    matches!(
        name,
        "text-baseline"
            | "baseline"
            | "align-text-baseline"
            | "strokes-included"
            | "canvas-stacking"
    )
}

fn clip_value(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "clip" | "hidden" => Some(true),
        "visible" => Some(false),
        other => parse_bool(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(input: &str) -> LayoutResult {
        parse_layout(Some(input))
    }

    mod mode {
        use super::*;

        #[test]
        fn absent_input_is_unknown_with_one_error() {
            let result = parse_layout(None);
            assert_eq!(result.mode, LayoutMode::Unknown);
            assert!(result.result.classes.is_empty());
            assert_eq!(result.result.errors.len(), 1);
            assert!(result.result.errors[0].contains("dimensions"));
            assert!(result.result.warnings.is_empty());
        }

        #[test]
        fn wrapper_is_explicit() {
            let result = layout("Auto{flow=vertical, w-10px, h-10px, align=center, gap=0}");
            assert_eq!(result.mode, LayoutMode::Auto);
            assert!(result.result.warnings.is_empty());
            assert!(result.result.errors.is_empty());
        }

        #[test]
        fn standard_wrapper_is_explicit() {
            let result = layout("Standard{w-10px, h-10px}");
            assert_eq!(result.mode, LayoutMode::Standard);
            assert!(result.result.warnings.is_empty());
        }

        #[test]
        fn leading_wrapper_sets_mode() {
            let result = layout("Auto{flow=row}, w-1px, h-1px");
            assert_eq!(result.mode, LayoutMode::Auto);
            assert!(result.result.has_class("flex-row"));
            assert!(result.result.has_class("w-[1px]"));
            assert!(result.result.warnings[0].contains("wrapper does not enclose"));
            assert!(!result
                .result
                .warnings
                .iter()
                .any(|w| w.contains("unrecognized")));
        }

        #[test]
        fn marker_tokens() {
            assert_eq!(layout("Auto, w-1px, h-1px").mode, LayoutMode::Auto);
            assert_eq!(layout("mode=auto, w-1px, h-1px").mode, LayoutMode::Auto);
            assert_eq!(layout("mode=Standard, w-1px, h-1px").mode, LayoutMode::Standard);
        }

        #[test]
        fn inference_warns() {
            let result = layout("flow=row, w-1px, h-1px");
            assert_eq!(result.mode, LayoutMode::Auto);
            assert!(result.result.warnings[0].contains("Auto{...}"));

            let result = layout("w-fill, h-10px");
            assert_eq!(result.mode, LayoutMode::Auto);

            let result = layout("→, w-1px, h-1px");
            assert_eq!(result.mode, LayoutMode::Auto);

            let result = layout("w-1px, h-1px");
            assert_eq!(result.mode, LayoutMode::Standard);
            assert!(result.result.warnings[0].contains("explicit"));
        }

        #[test]
        fn unknown_mode_value_warns() {
            let result = layout("mode=grid, w-1px, h-1px");
            assert!(result
                .result
                .warnings
                .iter()
                .any(|w| w.contains("unknown layout mode 'grid'")));
        }
    }

    mod dimensions {
        use super::*;

        #[test]
        fn grouped_dimensions() {
            let result = layout("Standard{dimensions={w-100px,h-50px}}");
            assert_eq!(result.result.classes, vec!["w-[100px]", "h-[50px]"]);
            assert!(result.result.errors.is_empty());
        }

        #[test]
        fn value_forms() {
            let result = layout("Standard{w=1/2, height=screen}");
            assert_eq!(result.result.classes, vec!["w-1/2", "h-screen"]);

            let result = layout("Auto{w-fill, h-hug, flow=row}");
            assert!(result.result.has_class("w-full"));
            assert!(result.result.has_class("h-auto"));

            let result = layout("Standard{w-50%, h-[20vh]}");
            assert_eq!(result.result.classes, vec!["w-[50%]", "h-[20vh]"]);
        }

        #[test]
        fn malformed_dimension_counts_as_present() {
            let result = layout("Standard{w-wide, h-10px}");
            assert_eq!(result.result.errors, vec!["layout: invalid width 'wide'"]);
            assert_eq!(result.result.classes, vec!["h-[10px]"]);
        }

        #[test]
        fn missing_one_side() {
            let result = layout("Standard{w-10px}");
            assert_eq!(result.result.errors, vec!["layout: missing height"]);
        }

        #[test]
        fn min_max_are_auto_only() {
            let result = layout("Standard{w-10px, h-10px, min-w-5px}");
            assert_eq!(result.result.errors.len(), 1);
            assert!(!result.result.has_class("min-w-[5px]"));

            let result = layout("Auto{flow=row, w-10px, h-10px, max-h-40px}");
            assert!(result.result.has_class("max-h-[40px]"));
        }

        #[test]
        fn last_width_wins() {
            let result = layout("Standard{w-10px, w-20px, h-1px}");
            assert_eq!(result.result.classes, vec!["w-[20px]", "h-[1px]"]);
            assert_eq!(result.result.warnings.len(), 1);
        }
    }

    mod standard {
        use super::*;

        #[test]
        fn spacing_and_clip() {
            let result = layout("Standard{w-1px, h-1px, space-y=8px, horizontal-spacing=4, clip}");
            assert_eq!(
                result.result.classes,
                vec!["w-[1px]", "h-[1px]", "space-y-[8px]", "space-x-[4px]", "overflow-hidden"]
            );
        }

        #[test]
        fn clip_false_removes() {
            let result = layout("Standard{w-1px, h-1px, clip, clip-content=visible}");
            assert!(!result.result.has_class("overflow-hidden"));
            let result = layout("Standard{w-1px, h-1px, clip=hidden}");
            assert!(result.result.has_class("overflow-hidden"));
        }

        #[test]
        fn spacing_rejects_percent() {
            let result = layout("Standard{w-1px, h-1px, space-y=10%}");
            assert_eq!(result.result.errors.len(), 1);
        }

        #[test]
        fn auto_tokens_are_excluded() {
            let result = layout("Standard{w-1px, h-1px, align=center, padding=4px}");
            assert_eq!(result.result.errors.len(), 2);
            assert_eq!(result.result.classes, vec!["w-[1px]", "h-[1px]"]);
        }
    }

    mod auto {
        use super::*;

        #[test]
        fn flow_gap_and_flex() {
            let result = layout("Auto{flow=horizontal,gap=10px}");
            assert!(result.result.has_class("flex-row"));
            assert!(result.result.has_class("flex"));
            assert!(result.result.has_class("gap-[10px]"));
            assert_eq!(result.result.classes[0], "flex");
            assert!(result.result.errors.iter().any(|e| e.contains("dimensions")));
        }

        #[test]
        fn spacing_is_excluded() {
            let result = layout("Auto{flow=row, w-1px, h-1px, space-x=4px}");
            assert!(!result.result.has_class("space-x-[4px]"));
            assert!(result.result.errors[0].contains("Standard"));
        }

        #[test]
        fn wrap_requires_horizontal_first() {
            let result = layout("Auto{↵, flow=row, w-1px, h-1px}");
            assert!(result.result.errors.iter().any(|e| e.contains("wrap")));
            assert!(!result.result.has_class("flex-wrap"));

            let result = layout("Auto{→, ↵, w-1px, h-1px}");
            assert!(result.result.has_class("flex-wrap"));
        }

        #[test]
        fn vertical_drops_wrap() {
            let result = layout("Auto{flow=row, flow=wrap, flow=column, w-1px, h-1px}");
            assert!(!result.result.has_class("flex-wrap"));
            assert!(result.result.has_class("flex-col"));
            assert!(!result.result.has_class("flex-row"));
            assert!(result.result.warnings.iter().any(|w| w.contains("wrap")));
        }

        #[test]
        fn missing_flow_is_an_error() {
            let result = layout("Auto{w-1px, h-1px, gap=4px}");
            assert!(result.result.errors.iter().any(|e| e.contains("missing flow")));
        }

        #[test]
        fn alignment_follows_the_flow() {
            let row = layout("Auto{flow=row, align=top-right, w-1px, h-1px}");
            assert!(row.result.has_class("justify-end"));
            assert!(row.result.has_class("items-start"));

            let column = layout("Auto{align=top-right, flow=column, w-1px, h-1px}");
            assert!(column.result.has_class("justify-start"));
            assert!(column.result.has_class("items-end"));
        }

        #[test]
        fn later_alignment_replaces() {
            let result = layout("Auto{flow=row, bottom-left, center, w-1px, h-1px}");
            assert!(result.result.has_class("justify-center"));
            assert!(result.result.has_class("items-center"));
            assert!(!result.result.has_class("items-end"));
        }

        #[test]
        fn gap_auto_takes_justify() {
            let result = layout("Auto{flow=row, align=center, gap=auto, w-1px, h-1px}");
            assert!(result.result.has_class("justify-between"));
            assert!(!result.result.has_class("justify-center"));
            assert!(result.result.has_class("items-center"));
        }

        #[test]
        fn padding_precedence() {
            let result = layout("Auto{flow=row, padding=8px, px=4px, pl=2px, w-1px, h-1px}");
            assert!(!result.result.has_class("p-[8px]"));
            assert!(!result.result.has_class("px-[4px]"));
            assert!(result.result.has_class("pl-[2px]"));
            assert_eq!(result.result.warnings.iter().filter(|w| w.contains("replaces")).count(), 2);

            let result = layout("Auto{flow=row, pt=2px, padding=8px, w-1px, h-1px}");
            assert!(result.result.has_class("p-[8px]"));
            assert!(!result.result.has_class("pt-[2px]"));
        }

        #[test]
        fn padding_group() {
            let result = layout("Auto{flow=row, padding=(x=8px, top=2px), w-1px, h-1px}");
            assert!(result.result.has_class("px-[8px]"));
            assert!(result.result.has_class("pt-[2px]"));

            let result = layout("Auto{flow=row, padding=(x=8px, left=2px), w-1px, h-1px}");
            assert!(!result.result.has_class("px-[8px]"));
            assert!(result.result.has_class("pl-[2px]"));

            let result = layout("Auto{flow=row, padding=(y=8px, l=2px), w-1px, h-1px}");
            assert!(result.result.has_class("py-[8px]"));
            assert!(result.result.has_class("pl-[2px]"));
        }

        #[test]
        fn settings() {
            let result = layout(
                "Auto{flow=row, center, settings=(text-baseline, strokes-included), w-1px, h-1px}",
            );
            assert!(result.result.has_class("items-baseline"));
            assert!(!result.result.has_class("items-center"));
            assert!(result
                .result
                .warnings
                .iter()
                .any(|w| w.contains("strokes-included")));

            let result = layout("Auto{flow=row, canvas-stacking, w-1px, h-1px}");
            assert!(result.result.errors.is_empty());
            assert!(result.result.warnings.iter().any(|w| w.contains("canvas-stacking")));
        }

        #[test]
        fn no_flex_without_auto_features() {
            let result = layout("Auto{w-1px, h-1px}");
            assert!(!result.result.has_class("flex"));
        }

        #[test]
        fn unknown_tokens_warn() {
            let result = layout("Auto{flow=row, sparkle, color=red, w-1px, h-1px}");
            assert!(result.result.errors.is_empty());
            assert!(result.result.warnings.iter().any(|w| w.contains("'sparkle'")));
            assert!(result.result.warnings.iter().any(|w| w.contains("'color'")));
        }
    }
}
