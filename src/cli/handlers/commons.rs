// src/cli/handlers/commons.rs

// This module contains shared functions used by multiple handlers:
// input validation, the banner, and the prompt helpers around template and
// project names.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use lazy_static::lazy_static;
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::template_store::TemplateStore;

lazy_static! {
    // Letters, numbers, dashes, underscores, and periods.
    static ref NAME_RE: Regex = Regex::new(r"^[\p{L}\p{N}\-_.]+$").unwrap();
    // Same set plus whitespace; may be empty.
    static ref DESCRIPTION_RE: Regex = Regex::new(r"^[\p{L}\p{N}\-\s_.]*$").unwrap();
}

/// Rejections of user input, reported before any store mutation. These map
/// to the "invalid input" exit code, distinct from generic failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Template name contains characters outside the allowed set.
    #[error("The template name may only contain letters, numbers, dashes, underscores, and periods.")]
    InvalidTemplateName,
    /// Description contains characters outside the allowed set.
    #[error("The description may only contain letters, numbers, dashes, spaces, underscores, and periods.")]
    InvalidDescription,
    /// Project name contains characters outside the allowed set.
    #[error("The name may only contain letters, numbers, dashes, underscores, and periods.")]
    InvalidProjectName,
    /// Unknown database driver given via `--database`.
    #[error("Invalid database driver [{driver}]. Valid options are: {valid}.")]
    InvalidDatabase {
        /// The rejected driver name.
        driver: String,
        /// Comma-separated list of accepted drivers.
        valid: String,
    },
    /// Template-name collision that the user declined to overwrite.
    #[error("A template with this name already exists. Please choose a different name.")]
    TemplateAlreadyExists,
    /// A template name was required but not given (non-interactive run).
    #[error("The template name is required.")]
    TemplateNameRequired,
    /// A project name was required but not given (non-interactive run).
    #[error("The project name is required.")]
    ProjectNameRequired,
}

/// Validates a template name against the allowed character set.
pub fn validate_template_name(name: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTemplateName)
    }
}

/// Validates a template description. Empty descriptions are fine.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if DESCRIPTION_RE.is_match(description) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDescription)
    }
}

/// Validates a project name against the allowed character set.
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidProjectName)
    }
}

/// Prints the stencil banner shown before interactive flows.
pub fn print_banner() {
    let banner = r"
        _                  _ _
    ___| |_ ___ _ __   ___(_) |
   / __| __/ _ \ '_ \ / __| | |
   \__ \ ||  __/ | | | (__| | |
   |___/\__\___|_| |_|\___|_|_|
";
    println!("{}", banner.blue());
}

/// Returns the installation directory for a project name, `"."` meaning the
/// current directory itself.
pub fn installation_directory(name: &str) -> PathBuf {
    if name == "." {
        PathBuf::from(".")
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(name)
    }
}

/// Whether the target directory (or a file of the same name) already exists.
/// The current directory itself never counts as a collision.
pub fn project_exists(directory: &Path) -> bool {
    if directory == Path::new(".") {
        return false;
    }
    directory.exists()
}

/// Prompts for a template name, looping until it passes validation.
///
/// Existing template names are offered in the placeholder as a hint, the way
/// the interactive flow has always done.
pub fn prompt_template_name(store: &TemplateStore, prompt: &str) -> Result<String> {
    let placeholder = if store.is_empty() {
        "E.g. template1, or-any-name-u-want".to_string()
    } else {
        let mut names: Vec<_> = store.templates().keys().cloned().take(3).collect();
        let more = store.templates().len() > 3;
        if more {
            names.push("...".to_string());
        }
        format!("E.g. {}", names.join(", "))
    };

    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{prompt} ({placeholder})"))
            .allow_empty(true)
            .interact_text()?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            println!("{}", "The template name is required.".yellow());
            continue;
        }
        match validate_template_name(trimmed) {
            Ok(()) => return Ok(trimmed.to_string()),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

/// Prompts for a project name, looping until it passes validation and (unless
/// `force`) does not collide with an existing directory.
pub fn prompt_project_name(force: bool) -> Result<String> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("What is the name of your project? (E.g. example-app)")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = input.trim();

        if trimmed.is_empty() {
            println!("{}", "The project name is required.".yellow());
            continue;
        }
        if let Err(e) = validate_project_name(trimmed) {
            println!("{}", e.to_string().yellow());
            continue;
        }
        if !force && project_exists(&installation_directory(trimmed)) {
            println!("{}", "Application already exists.".yellow());
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

/// Prints the interactive "no templates yet" hint.
pub fn warn_no_templates() {
    println!(
        "{}",
        "No templates found. Create one using `stencil template:new <template-name>`".yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_allow_the_documented_character_set() {
        assert!(validate_template_name("my-template_1.2").is_ok());
        assert!(validate_template_name("émilie").is_ok());
        assert!(validate_template_name("шаблон9").is_ok());
    }

    #[test]
    fn template_names_reject_spaces_and_punctuation() {
        assert_eq!(
            validate_template_name("bad name!"),
            Err(ValidationError::InvalidTemplateName)
        );
        assert!(validate_template_name("semi;colon").is_err());
        assert!(validate_template_name("").is_err());
    }

    #[test]
    fn descriptions_allow_spaces_and_may_be_empty() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("A react starter with ssr and dark mode").is_ok());
        assert_eq!(
            validate_description("no! punctuation?"),
            Err(ValidationError::InvalidDescription)
        );
    }

    #[test]
    fn project_names_follow_the_same_rule_as_template_names() {
        assert!(validate_project_name("example-app").is_ok());
        assert!(validate_project_name("bad name!").is_err());
        assert!(validate_project_name("shell`injection`").is_err());
    }

    #[test]
    fn current_directory_is_never_a_collision() {
        assert!(!project_exists(Path::new(".")));
    }
}
