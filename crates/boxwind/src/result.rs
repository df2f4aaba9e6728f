//! Parse results and the per-concern class map.
//!
//! Domain parsers never splice a flat class list. While parsing they keep a
//! [`ClassSet`]: an ordered map from a *concern* (one visual aspect such as
//! `"border-color"` or `"padding-x"`) to the classes currently representing
//! it. Setting a concern again structurally removes the earlier classes.
//! The map is flattened exactly once, when the parser finishes.

use std::collections::HashSet;

use serde::Serialize;

/// Output of one domain parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Class tokens in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Violated contracts (missing, malformed or out-of-scope values).
    pub errors: Vec<String>,
    /// Advisory messages (defaults applied, unknown tokens, overrides).
    pub warnings: Vec<String>,
}

impl ParseResult {
    /// Returns `true` if no class and no diagnostic was produced.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Returns `true` if any error was reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if `class` is part of the output.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Ordered map from concern name to the classes currently representing it.
///
/// # Example
///
/// ```rust
/// use boxwind::ClassSet;
///
/// let mut set = ClassSet::new();
/// set.insert("border-color", "border-[#ff0000]");
/// set.insert("border-weight", "border-2");
/// let previous = set.insert("border-color", "border-blue-500");
///
/// assert_eq!(previous, Some(vec!["border-[#ff0000]".to_string()]));
/// assert_eq!(set.into_classes(), vec!["border-2", "border-blue-500"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    entries: Vec<(&'static str, Vec<String>)>,
}

impl ClassSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the classes for `concern`, returning the previous ones.
    ///
    /// The concern moves to the end of the order, the same position a
    /// freshly emitted class would take.
    pub fn set<I, S>(&mut self, concern: &'static str, classes: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let previous = self.remove(concern);
        self.entries
            .push((concern, classes.into_iter().map(Into::into).collect()));
        previous
    }

    /// Replaces `concern` with a single class.
    pub fn insert(
        &mut self,
        concern: &'static str,
        class: impl Into<String>,
    ) -> Option<Vec<String>> {
        self.set(concern, [class.into()])
    }

    /// Puts a single class for `concern` at the front of the order.
    pub fn prepend(&mut self, concern: &'static str, class: impl Into<String>) {
        self.remove(concern);
        self.entries.insert(0, (concern, vec![class.into()]));
    }

    /// Removes `concern`, returning its classes if it was set.
    pub fn remove(&mut self, concern: &str) -> Option<Vec<String>> {
        let idx = self.entries.iter().position(|(name, _)| *name == concern)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns `true` if `concern` currently has classes.
    pub fn contains(&self, concern: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == concern)
    }

    /// Returns the classes for `concern`.
    pub fn get(&self, concern: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == concern)
            .map(|(_, classes)| classes.as_slice())
    }

    /// Returns `true` if no concern is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the map into an ordered, duplicate-free class list.
    pub fn into_classes(self) -> Vec<String> {
        dedup_ordered(self.entries.into_iter().flat_map(|(_, classes)| classes))
    }
}

/// Removes duplicates while keeping the first occurrence of each class.
pub(crate) fn dedup_ordered<I>(classes: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    classes
        .into_iter()
        .filter(|class| seen.insert(class.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_moves_to_end() {
        let mut set = ClassSet::new();
        set.insert("a", "a-1");
        set.insert("b", "b-1");
        assert_eq!(set.insert("a", "a-2"), Some(vec!["a-1".to_string()]));
        assert_eq!(set.into_classes(), vec!["b-1", "a-2"]);
    }

    #[test]
    fn set_accepts_multiple_classes() {
        let mut set = ClassSet::new();
        set.set("center-x", ["left-1/2", "-translate-x-1/2"]);
        assert_eq!(
            set.get("center-x"),
            Some(&["left-1/2".to_string(), "-translate-x-1/2".to_string()][..])
        );
    }

    #[test]
    fn remove_and_contains() {
        let mut set = ClassSet::new();
        set.insert("clip", "overflow-hidden");
        assert!(set.contains("clip"));
        assert_eq!(set.remove("clip"), Some(vec!["overflow-hidden".to_string()]));
        assert!(!set.contains("clip"));
        assert_eq!(set.remove("clip"), None);
        assert!(set.is_empty());
    }

    #[test]
    fn prepend_goes_first() {
        let mut set = ClassSet::new();
        set.insert("flow", "flex-row");
        set.prepend("display", "flex");
        assert_eq!(set.into_classes(), vec!["flex", "flex-row"]);
    }

    #[test]
    fn flatten_removes_duplicates_across_concerns() {
        let mut set = ClassSet::new();
        set.insert("top", "top-0");
        set.set("vertical", ["top-0", "bottom-0"]);
        assert_eq!(set.into_classes(), vec!["top-0", "bottom-0"]);
    }

    #[test]
    fn parse_result_helpers() {
        let result = ParseResult {
            classes: vec!["flex".into()],
            errors: vec![],
            warnings: vec!["w".into()],
        };
        assert!(result.has_class("flex"));
        assert!(!result.has_class("grid"));
        assert!(!result.has_errors());
        assert!(!result.is_empty());
        assert!(ParseResult::default().is_empty());
    }
}
