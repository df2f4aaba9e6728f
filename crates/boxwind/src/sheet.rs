//! Named collections of elements loaded from YAML or JSON.
//!
//! A sheet maps element names to their five property strings:
//!
//! ```yaml
//! card:
//!   layout: Auto{flow=vertical, gap=12px, w-320px, h-hug, align=top-left, padding=16px}
//!   position: ignore-auto-layout=false, rotation=none
//!   appearance: visible, opacity=100, radius=12px
//!   fill: type=solid, color=white, opacity=100
//!   stroke: color=slate-200, weight=1
//! toast:
//!   position: ignore-auto-layout=true, rotation=none, constraints=(x=center, y=bottom)
//! ```
//!
//! Elements are kept sorted by name so output is stable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{translate, AggregateResult, StyleProps};
use crate::error::{Result, SheetError};

/// A set of named elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    elements: BTreeMap<String, StyleProps>,
}

impl StyleSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a sheet from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document decodes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a sheet from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a sheet file: `.json` as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let sheet = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        debug!(path = %path.display(), elements = sheet.len(), "loaded style sheet");
        Ok(sheet)
    }

    /// Adds or replaces an element.
    pub fn insert(&mut self, name: impl Into<String>, props: StyleProps) -> Option<StyleProps> {
        self.elements.insert(name.into(), props)
    }

    pub fn get(&self, name: &str) -> Option<&StyleProps> {
        self.elements.get(name)
    }

    /// Element names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Translates every element, in name order.
    pub fn translate_all(&self) -> Vec<(&str, AggregateResult)> {
        self.elements
            .iter()
            .map(|(name, props)| (name.as_str(), translate(props)))
            .collect()
    }
}
