//! Combining the five property parsers into one class list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::appearance::parse_appearance;
use crate::fill::parse_fill;
use crate::layout::parse_layout;
use crate::position::parse_position;
use crate::result::{dedup_ordered, ParseResult};
use crate::stroke::parse_stroke;

/// The five inspector sections of one element, each an optional property
/// string.
///
/// Deserializes from YAML or JSON with every field optional:
///
/// ```yaml
/// layout: Auto{flow=vertical, gap=8px, w-fill, h-hug}
/// position: ignore-auto-layout=false, rotation=none
/// appearance: visible, opacity=100, radius=8px
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl StyleProps {
    /// Creates props with every section absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = Some(appearance.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }
}

/// Merged output of all five parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Class tokens in first-seen order across all properties.
    pub classes: Vec<String>,
    /// Taken from the position property.
    pub is_fixed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl AggregateResult {
    /// Joins the classes for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Returns `true` if any property reported an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Runs every property parser from empty state and merges the results.
///
/// ```rust
/// use boxwind::{translate, StyleProps};
///
/// let props = StyleProps::new()
///     .with_layout("Standard{w-100px, h-50px}")
///     .with_position("ignore-auto-layout=true, rotation=none")
///     .with_appearance("visible, opacity=100");
///
/// let result = translate(&props);
/// assert!(result.is_fixed);
/// assert_eq!(result.class_attr(), "w-[100px] h-[50px] fixed z-50 opacity-100");
/// assert!(!result.has_errors());
/// ```
pub fn translate(props: &StyleProps) -> AggregateResult {
    let layout = parse_layout(props.layout.as_deref());
    let position = parse_position(props.position.as_deref());
    let parts: [ParseResult; 5] = [
        layout.result,
        position.result,
        parse_appearance(props.appearance.as_deref()),
        parse_fill(props.fill.as_deref()),
        parse_stroke(props.stroke.as_deref()),
    ];

    let mut classes = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for part in parts {
        classes.extend(part.classes);
        errors.extend(part.errors);
        warnings.extend(part.warnings);
    }

    let result = AggregateResult {
        classes: dedup_ordered(classes),
        is_fixed: position.is_fixed,
        errors,
        warnings,
    };
    debug!(
        classes = result.classes.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        is_fixed = result.is_fixed,
        "translated style props"
    );
    result
}
