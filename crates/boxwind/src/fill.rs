//! Fill property: solid color or background image, plus fill opacity.

use boxwind_lexer::{tokenize, Token};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{Diagnostics, Property};
use crate::result::{ClassSet, ParseResult};
use crate::value::{percent, ColorValue};

/// Image presentation classes seeded by the first accepted URL.
const PRESENTATION: [(&str, &str); 3] = [
    ("bg-size", "bg-cover"),
    ("bg-position", "bg-center"),
    ("bg-repeat", "bg-no-repeat"),
];

/// A bare token read as a URL: root-relative, or with a scheme.
static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:/|[A-Za-z][A-Za-z0-9+.-]*://)\S").expect("bare url pattern is valid")
});

/// Translates a fill property string.
///
/// An absent fill is valid and produces nothing. Once anything is written,
/// the type (given or inferred from a color or URL) and the opacity are
/// required.
///
/// ```rust
/// use boxwind::fill::parse_fill;
///
/// let result = parse_fill(Some("type=solid, color=#3B82F6, opacity=90"));
/// assert_eq!(result.classes, vec!["bg-[#3b82f6]", "bg-opacity-90"]);
/// assert!(result.errors.is_empty());
/// ```
pub fn parse_fill(input: Option<&str>) -> ParseResult {
    let tokens = tokenize(input);
    let mut parser = FillParser::new();
    if tokens.is_empty() {
        return parser.diag.finish(parser.classes);
    }
    for token in &tokens {
        parser.token(token);
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillType {
    Solid,
    Image,
}

impl FillType {
    fn as_str(self) -> &'static str {
        match self {
            FillType::Solid => "solid",
            FillType::Image => "image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Explicit,
    Inferred,
}

/// Normalizes an image reference for use inside `bg-[url(...)]`.
fn image_url(value: &str) -> Option<String> {
    let mut url = value.trim();
    let wrapped = url
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("url("));
    if wrapped && url.len() > 4 && url.ends_with(')') {
        url = url[4..url.len() - 1].trim();
    }
    for quote in ['"', '\''] {
        if url.len() >= 2 && url.starts_with(quote) && url.ends_with(quote) {
            url = &url[1..url.len() - 1];
            break;
        }
    }
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(url.split_whitespace().collect::<Vec<_>>().join("_"))
}

struct FillParser {
    classes: ClassSet,
    diag: Diagnostics,
    kind: Option<(FillType, Source)>,
    opacity_seen: bool,
    seeded: bool,
}

impl FillParser {
    fn new() -> Self {
        Self {
            classes: ClassSet::new(),
            diag: Diagnostics::new(Property::Fill),
            kind: None,
            opacity_seen: false,
            seeded: false,
        }
    }

    fn token(&mut self, token: &Token) {
        match token {
            Token::Bare(text) => self.bare(text),
            Token::KeyValue { key, value } => match key.to_ascii_lowercase().as_str() {
                "type" => self.set_type(value),
                "color" | "fill" => self.color(value),
                "opacity" => self.opacity(value),
                "url" | "image" | "src" => self.url(value),
                other => self.diag.warn(format_args!("unknown key '{}'", other)),
            },
        }
    }

    fn bare(&mut self, text: &str) {
        if ColorValue::parse(text, "bg").is_some() {
            self.color(text);
            return;
        }
        let lower = text.to_ascii_lowercase();
        if lower.starts_with("url(") || BARE_URL.is_match(text.trim()) {
            self.url(text);
            return;
        }
        // A URL with its own `=` arrives bare; split at the first one.
        if let Some((key, rest)) = text.split_once('=') {
            if matches!(key.trim().to_ascii_lowercase().as_str(), "url" | "image" | "src") {
                self.url(rest);
                return;
            }
        }
        self.diag
            .warn(format_args!("unrecognized token '{}'", text));
    }

    fn set_type(&mut self, value: &str) {
        let kind = match value.trim().to_ascii_lowercase().as_str() {
            "solid" => FillType::Solid,
            "image" => FillType::Image,
            _ => {
                self.diag
                    .error(format_args!("invalid fill type '{}'", value));
                return;
            }
        };

        match kind {
            FillType::Image => {
                if self.classes.remove("color").is_some() {
                    self.diag
                        .warn("type=image discards the earlier fill color");
                }
            }
            FillType::Solid => {
                if self.classes.remove("url").is_some() {
                    for (concern, _) in PRESENTATION {
                        self.classes.remove(concern);
                    }
                    self.seeded = false;
                    self.diag
                        .warn("type=solid discards the earlier image url");
                }
            }
        }
        if self.kind.is_some_and(|(current, _)| current != kind) {
            self.diag
                .warn(format_args!("fill type changed to {}", kind.as_str()));
        }
        self.kind = Some((kind, Source::Explicit));
    }

    fn color(&mut self, value: &str) {
        if matches!(self.kind, Some((FillType::Image, _))) {
            self.diag.error(format_args!(
                "color '{}' does not apply to an image fill and was ignored",
                value
            ));
            return;
        }
        let Some(color) = ColorValue::parse(value, "bg") else {
            self.diag
                .error(format_args!("invalid fill color '{}'", value));
            return;
        };
        if self.kind.is_none() {
            self.kind = Some((FillType::Solid, Source::Inferred));
        }
        let previous = self.classes.insert("color", color.class("bg"));
        self.diag
            .superseded("fill color", previous, &self.classes, "color");
    }

    fn opacity(&mut self, value: &str) {
        self.opacity_seen = true;
        match percent(value) {
            Some(fragment) => {
                let previous = self
                    .classes
                    .insert("opacity", format!("bg-opacity-{}", fragment));
                self.diag
                    .superseded("fill opacity", previous, &self.classes, "opacity");
            }
            None => self.diag.error(format_args!(
                "invalid fill opacity '{}', expected 0 to 100",
                value
            )),
        }
    }

    fn url(&mut self, value: &str) {
        let Some(url) = image_url(value) else {
            self.diag
                .error(format_args!("invalid image url '{}'", value));
            return;
        };

        match self.kind {
            Some((FillType::Solid, Source::Explicit)) => {
                self.diag.error(format_args!(
                    "image url '{}' does not apply to a solid fill and was ignored",
                    url
                ));
                return;
            }
            Some((FillType::Solid, Source::Inferred)) => {
                self.classes.remove("color");
                self.diag
                    .warn("image url turns the fill into an image; the color was discarded");
                self.kind = Some((FillType::Image, Source::Inferred));
            }
            None => self.kind = Some((FillType::Image, Source::Inferred)),
            Some((FillType::Image, _)) => {}
        }

        let previous = self.classes.insert("url", format!("bg-[url({})]", url));
        self.diag
            .superseded("image url", previous, &self.classes, "url");

        if !self.seeded {
            for (concern, class) in PRESENTATION {
                self.classes.insert(concern, class);
            }
            self.seeded = true;
        }
    }

    fn finish(mut self) -> ParseResult {
        match self.kind {
            None => self.diag.error("missing fill type"),
            Some((kind, Source::Inferred)) => self.diag.warn(format_args!(
                "fill type not given; inferred {}",
                kind.as_str()
            )),
            Some((_, Source::Explicit)) => {}
        }

        match self.kind.map(|(kind, _)| kind) {
            Some(FillType::Solid) if !self.classes.contains("color") => {
                self.diag.error("solid fill requires a color")
            }
            Some(FillType::Image) if !self.classes.contains("url") => {
                self.diag.error("image fill requires a url")
            }
            _ => {}
        }

        if !self.opacity_seen {
            self.diag.error("missing fill opacity; defaults to 100");
        }
        if !self.classes.contains("opacity") {
            self.classes.insert("opacity", "bg-opacity-100");
        }
        self.diag.finish(self.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(input: &str) -> ParseResult {
        parse_fill(Some(input))
    }

    #[test]
    fn absent_input_is_empty() {
        assert!(parse_fill(None).is_empty());
        assert!(parse_fill(Some("")).is_empty());
    }

    #[test]
    fn image_without_url() {
        let result = fill("type=image, opacity=80");
        assert_eq!(result.errors, vec!["fill: image fill requires a url"]);
        assert_eq!(result.classes, vec!["bg-opacity-80"]);
    }

    #[test]
    fn bare_color_infers_solid() {
        let result = fill("red-500, opacity=100");
        assert_eq!(result.classes, vec!["bg-red-500", "bg-opacity-100"]);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings, vec!["fill: fill type not given; inferred solid"]);
    }

    #[test]
    fn color_forms() {
        assert!(fill("type=solid, color=#FFF, opacity=1").has_class("bg-[#fff]"));
        assert!(fill("type=solid, fill=layer-surface, opacity=1").has_class("bg-layer-surface"));
        assert!(fill("type=solid, bg-brand, opacity=1").has_class("bg-brand"));
    }

    #[test]
    fn last_color_wins() {
        let result = fill("type=solid, color=#ff0000, color=blue-500, opacity=100");
        assert_eq!(result.classes, vec!["bg-blue-500", "bg-opacity-100"]);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn invalid_color_reports_both_problems() {
        let result = fill("type=solid, color=reddish, opacity=100");
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn switching_to_image_discards_color() {
        let result = fill("color=#000, type=image, url=/a.png, opacity=100");
        assert!(!result.has_class("bg-[#000]"));
        assert!(result.has_class("bg-[url(/a.png)]"));
        assert!(result.warnings.iter().any(|w| w.contains("discards")));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn url_promotes_inferred_solid() {
        let result = fill("#000, url(\"/images/hero banner.png\"), opacity=100");
        assert_eq!(
            result.classes,
            vec![
                "bg-[url(/images/hero_banner.png)]",
                "bg-cover",
                "bg-center",
                "bg-no-repeat",
                "bg-opacity-100",
            ]
        );
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn url_with_explicit_solid_is_dropped() {
        let result = fill("type=solid, color=#000, url=/a.png, opacity=100");
        assert!(!result.classes.iter().any(|c| c.contains("url")));
        assert!(!result.has_class("bg-cover"));
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn ambiguous_url_is_reinterpreted() {
        let result = fill("type=image, url=https://x.test/a.png?w=200, opacity=100");
        assert!(result.has_class("bg-[url(https://x.test/a.png?w=200)]"));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn presentation_seeded_once() {
        let result = fill("type=image, src='/a.png', image=/b.png, opacity=100");
        assert_eq!(
            result.classes,
            vec!["bg-cover", "bg-center", "bg-no-repeat", "bg-[url(/b.png)]", "bg-opacity-100"]
        );
    }

    #[test]
    fn solid_after_image_discards_url() {
        let result = fill("type=image, url=/a.png, type=solid, color=white, opacity=100");
        assert_eq!(result.classes, vec!["bg-white", "bg-opacity-100"]);
    }

    #[test]
    fn color_on_image_is_an_error() {
        let result = fill("type=image, url=/a.png, color=#000, opacity=100");
        assert_eq!(result.errors.len(), 1);
        assert!(!result.has_class("bg-[#000]"));
    }

    #[test]
    fn missing_type_and_opacity() {
        let result = fill("sparkles");
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.classes, vec!["bg-opacity-100"]);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn image_after_solid_seeds_presentation_again() {
        let result = fill(
            "type=image, url=/a.png, type=solid, type=image, url=/b.png, opacity=100",
        );
        assert_eq!(
            result.classes,
            vec!["bg-[url(/b.png)]", "bg-cover", "bg-center", "bg-no-repeat", "bg-opacity-100"]
        );
        assert!(result.errors.is_empty());
    }

    #[test]
    fn bare_paths_are_urls() {
        let result = fill("type=image, /images/hero.png, opacity=100");
        assert!(result.has_class("bg-[url(/images/hero.png)]"));
        assert!(result.has_class("bg-cover"));
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());

        let result = fill("https://cdn.example.com/a.png, opacity=50");
        assert!(result.has_class("bg-[url(https://cdn.example.com/a.png)]"));
        assert_eq!(result.warnings, vec!["fill: fill type not given; inferred image"]);
    }
}
