//! Class behavior table
//!
//! Maps detection class labels to per-class behavior flags: whether a
//! class plausibly bears printed text (triggers the OCR path) and whether
//! it should render with a warning overlay color. Replaces the inline
//! pattern sets from earlier revisions with an explicit table that the
//! configuration layer can override.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Behavior flags for a detection class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassBehavior {
    /// Class plausibly carries printed text; eligible for OCR
    pub texty: bool,
    /// Class renders with the warning overlay color
    pub sensitive: bool,
}

/// Default classes eligible for the OCR path
pub const DEFAULT_TEXTY: &[&str] = &[
    "book",
    "bottle",
    "tv",
    "laptop",
    "cell phone",
    "remote",
    "keyboard",
    "stop sign",
    "bench",
    "backpack",
    "handbag",
    "suitcase",
    "cup",
    "wine glass",
    "chair",
    "monitor",
];

/// Default classes rendered with the warning color
pub const DEFAULT_SENSITIVE: &[&str] = &["person", "knife", "scissors", "bottle", "stop sign"];

/// Lookup table from class label to behavior flags.
///
/// Labels are matched case-insensitively; unknown classes get the default
/// (neither texty nor sensitive) behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassTable {
    entries: HashMap<String, ClassBehavior>,
}

impl Default for ClassTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for &class in DEFAULT_TEXTY {
            table.entry_mut(class).texty = true;
        }
        for &class in DEFAULT_SENSITIVE {
            table.entry_mut(class).sensitive = true;
        }
        table
    }
}

impl ClassTable {
    /// Create a table with no entries
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from explicit texty and sensitive class lists
    pub fn from_lists(texty: &[String], sensitive: &[String]) -> Self {
        let mut table = Self::empty();
        for class in texty {
            table.entry_mut(class).texty = true;
        }
        for class in sensitive {
            table.entry_mut(class).sensitive = true;
        }
        table
    }

    /// Look up the behavior for a class label
    pub fn behavior(&self, class: &str) -> ClassBehavior {
        self.entries
            .get(&class.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Number of classes with explicit behavior
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, class: &str) -> &mut ClassBehavior {
        self.entries.entry(class.to_lowercase()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_texty_classes() {
        let table = ClassTable::default();
        assert!(table.behavior("book").texty);
        assert!(table.behavior("stop sign").texty);
        assert!(!table.behavior("person").texty);
        assert!(!table.behavior("dog").texty);
    }

    #[test]
    fn test_default_table_sensitive_classes() {
        let table = ClassTable::default();
        assert!(table.behavior("knife").sensitive);
        assert!(table.behavior("person").sensitive);
        assert!(!table.behavior("book").sensitive);
    }

    #[test]
    fn test_bottle_is_both_texty_and_sensitive() {
        let behavior = ClassTable::default().behavior("bottle");
        assert!(behavior.texty);
        assert!(behavior.sensitive);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = ClassTable::default();
        assert!(table.behavior("Book").texty);
        assert!(table.behavior("STOP SIGN").texty);
    }

    #[test]
    fn test_unknown_class_gets_default_behavior() {
        let behavior = ClassTable::default().behavior("giraffe");
        assert_eq!(behavior, ClassBehavior::default());
    }

    #[test]
    fn test_from_lists() {
        let table = ClassTable::from_lists(
            &["badge".to_string()],
            &["badge".to_string(), "sign".to_string()],
        );
        assert!(table.behavior("badge").texty);
        assert!(table.behavior("badge").sensitive);
        assert!(!table.behavior("sign").texty);
        assert!(table.behavior("sign").sensitive);
        assert_eq!(table.len(), 2);
    }
}
