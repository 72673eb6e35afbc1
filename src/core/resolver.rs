// src/core/resolver.rs

//! Turns a stored template plus a concrete project name into the final,
//! executable command line.

use crate::constants::PROJECT_NAME_PLACEHOLDER;
use crate::core::template_store::TemplateStore;
use thiserror::Error;

/// Errors raised while resolving a template for replay.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No template with the requested name exists in the store.
    #[error("Template '{name}' not found.")]
    NotFound {
        /// The missing template name.
        name: String,
    },
}

/// Resolves a template into a runnable command line.
///
/// Every occurrence of the `<project-name>` placeholder is replaced verbatim
/// with `project_name`. No escaping is applied to the substituted value: the
/// project name is validated at the CLI boundary before it gets here, and
/// the stored command's own quoting is left untouched.
pub fn resolve(
    store: &TemplateStore,
    template_name: &str,
    project_name: &str,
) -> Result<String, ResolveError> {
    let template = store
        .get(template_name)
        .ok_or_else(|| ResolveError::NotFound {
            name: template_name.to_string(),
        })?;

    Ok(template
        .command
        .replace(PROJECT_NAME_PLACEHOLDER, project_name))
}
