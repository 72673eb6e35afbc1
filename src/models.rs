// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- TEMPLATE STORE MODELS (FOR templates.json) ---
// These mirror the on-disk document exactly:
// { "templates": { "<name>": { "description": "...", "command": "..." } } }

/// A saved combination of project-creation choices: a ready-to-replay command
/// line (containing the literal `<project-name>` placeholder) plus an
/// optional human description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Free-form description. May be empty; an overwrite discards the old
    /// one even if the new one is empty.
    #[serde(default)]
    pub description: String,
    /// The fully composed, replayable command line.
    pub command: String,
}

/// The root document of the template store file.
///
/// A `BTreeMap` keeps serialization and listings name-sorted; the on-disk
/// key order is not significant.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatesFile {
    /// All saved templates, keyed by their unique user-supplied name.
    #[serde(default)]
    pub templates: BTreeMap<String, Template>,
}

// --- OPTION MODEL ---

/// The value of a single project-creation option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean switch (`--react`). Serialized only when `true`.
    Flag(bool),
    /// A valued option (`--database=sqlite`). Serialized only when non-empty.
    Value(String),
    /// Never given and never prompted for. Omitted from serialization.
    Unset,
}

impl OptionValue {
    /// Whether this value counts as "set" and must appear in a composed command.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Value(value) => !value.is_empty(),
            Self::Unset => false,
        }
    }
}

/// An insertion-ordered set of named options.
///
/// Entries serialize in insertion order, so composing the same set twice
/// yields the same command string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(String, OptionValue)>,
}

impl OptionSet {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends or replaces an option, preserving the position of an existing key.
    pub fn set(&mut self, name: &str, value: OptionValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Convenience for boolean switches.
    pub fn set_flag(&mut self, name: &str, enabled: bool) {
        self.set(name, OptionValue::Flag(enabled));
    }

    /// Convenience for valued options.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, OptionValue::Value(value.into()));
    }

    /// Looks up an option by name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether the named option exists and counts as set.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(OptionValue::is_set)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_set_preserves_insertion_order() {
        let mut options = OptionSet::new();
        options.set_flag("react", true);
        options.set_value("database", "sqlite");
        options.set_flag("typescript", false);

        let names: Vec<_> = options.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["react", "database", "typescript"]);
    }

    #[test]
    fn option_set_replaces_in_place() {
        let mut options = OptionSet::new();
        options.set_flag("react", false);
        options.set_value("database", "sqlite");
        options.set_flag("react", true);

        let names: Vec<_> = options.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["react", "database"]);
        assert!(options.is_set("react"));
    }

    #[test]
    fn unset_false_and_empty_are_not_set() {
        let mut options = OptionSet::new();
        options.set("a", OptionValue::Unset);
        options.set_flag("b", false);
        options.set_value("c", "");
        options.set_value("d", "x");

        assert!(!options.is_set("a"));
        assert!(!options.is_set("b"));
        assert!(!options.is_set("c"));
        assert!(options.is_set("d"));
        assert!(!options.is_set("missing"));
    }
}
