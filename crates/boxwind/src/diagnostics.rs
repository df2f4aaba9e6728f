//! Diagnostics recording for one parser invocation.

use std::fmt;

use tracing::debug;

use crate::result::{ClassSet, ParseResult};

/// The inspector section a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Layout,
    Position,
    Appearance,
    Fill,
    Stroke,
}

impl Property {
    /// Returns the lowercase name used as the message prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Layout => "layout",
            Property::Position => "position",
            Property::Appearance => "appearance",
            Property::Fill => "fill",
            Property::Stroke => "stroke",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects errors and warnings for a single property string.
///
/// Messages are prefixed with the property name so the aggregated report
/// stays readable once the five parsers are merged.
#[derive(Debug)]
pub(crate) struct Diagnostics {
    property: Property,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub(crate) fn new(property: Property) -> Self {
        Self {
            property,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, message: impl fmt::Display) {
        let message = format!("{}: {}", self.property, message);
        debug!(property = %self.property, severity = "error", "{}", message);
        self.errors.push(message);
    }

    pub(crate) fn warn(&mut self, message: impl fmt::Display) {
        let message = format!("{}: {}", self.property, message);
        debug!(property = %self.property, severity = "warning", "{}", message);
        self.warnings.push(message);
    }

    /// Reports a concern that was set twice when the earlier value differs.
    pub(crate) fn superseded(
        &mut self,
        what: &str,
        previous: Option<Vec<String>>,
        current: &ClassSet,
        concern: &str,
    ) {
        if let Some(previous) = previous {
            if current.get(concern) != Some(previous.as_slice()) {
                self.warn(format_args!("{} set more than once; the last value wins", what));
            }
        }
    }

    pub(crate) fn finish(self, classes: ClassSet) -> ParseResult {
        ParseResult {
            classes: classes.into_classes(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
