// src/core/catalog.rs

//! Read-only projection of the template store for human display.
//!
//! Truncation here is cosmetic only; stored data is never mutated by
//! anything in this module.

use crate::core::template_store::TemplateStore;

/// Maximum number of code points shown for a description or command before
/// the truncation marker is appended.
pub const MAX_DISPLAY_LENGTH: usize = 50;

/// Shown in place of an empty description.
const NO_DESCRIPTION: &str = "No description";

/// One display row of the template catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    /// The template's unique name.
    pub name: String,
    /// Truncated description (or a placeholder when empty).
    pub description: String,
    /// Truncated command line.
    pub command: String,
}

/// Returns display rows for every template, name-sorted.
pub fn list(store: &TemplateStore) -> Vec<CatalogRow> {
    store
        .templates()
        .iter()
        .map(|(name, template)| format_row(name, &template.description, &template.command))
        .collect()
}

/// Returns the display row for a single template, or `None` if absent.
pub fn get(store: &TemplateStore, name: &str) -> Option<CatalogRow> {
    store
        .get(name)
        .map(|template| format_row(name, &template.description, &template.command))
}

fn format_row(name: &str, description: &str, command: &str) -> CatalogRow {
    let description = if description.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        truncate(description, MAX_DISPLAY_LENGTH)
    };

    CatalogRow {
        name: name.to_string(),
        description,
        command: truncate(command, MAX_DISPLAY_LENGTH),
    }
}

/// Truncates to `max` code points (not bytes, so multi-byte text cannot be
/// split mid-character) and appends a `...` marker when anything was cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max).collect();
    truncated.push_str("...");
    truncated
}
