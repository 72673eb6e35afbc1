// src/cli/handlers/remove.rs

//! # Handler for the `template:remove` command
//!
//! Removes a single saved template, or all of them with `--all`. Bulk
//! removal is irreversible and only ever runs after an interactive
//! confirmation; without one (`--no-interaction`) it cancels and leaves
//! the store untouched.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::{
    cli::args::RemoveArgs,
    cli::handlers::commons::{self, ValidationError},
    core::{resolver::ResolveError, template_store::TemplateStore},
};

/// The main handler for the `template:remove` command.
pub fn handle(mut args: RemoveArgs) -> Result<()> {
    let interactive = !args.no_interaction;
    if interactive {
        commons::print_banner();
    }

    let mut store = TemplateStore::load()?;
    run(&mut args, &mut store, interactive)
}

fn run(args: &mut RemoveArgs, store: &mut TemplateStore, interactive: bool) -> Result<()> {
    if store.is_empty() {
        println!("No saved templates found.");
        return Ok(());
    }

    if args.all {
        // The reset itself is unconditional; the decision happens here.
        // Suppressing prompts is not consent, so a non-interactive run
        // cancels rather than assuming it.
        let confirmed = interactive
            && Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Are you sure you want to remove all saved templates? This action is irreversible.")
                .default(false)
                .interact()?;
        if !confirmed {
            println!("\nOperation cancelled.");
            return Ok(());
        }

        println!("\nRemoving all saved templates...");
        store.remove_all()?;
        println!(
            "{} All saved templates removed successfully.",
            "✔".green()
        );
        return Ok(());
    }

    let name = match args.template_name.take() {
        Some(name) => name,
        None if interactive => commons::prompt_template_name(
            store,
            "What is the name of the template you want to remove?",
        )?,
        None => return Err(ValidationError::TemplateNameRequired.into()),
    };

    // Existence is checked before any mutation; a miss leaves the store as it was.
    if !store.contains(&name) {
        return Err(ResolveError::NotFound { name }.into());
    }

    println!("\nRemoving a saved template...");
    store.remove(&name)?;
    println!(
        "{} Template '{}' removed successfully.",
        "✔".green(),
        name.cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn store_with_two_templates(path: std::path::PathBuf) -> TemplateStore {
        let mut store = TemplateStore::load_from(path).unwrap();
        store
            .save("t1", "", "stencil new <project-name> --no-interaction")
            .unwrap();
        store
            .save("t2", "", "stencil new <project-name> --git --no-interaction")
            .unwrap();
        store
    }

    #[test]
    fn non_interactive_bulk_removal_cancels_and_leaves_the_store_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");
        let mut store = store_with_two_templates(path.clone());
        let before = fs::read_to_string(&path).unwrap();

        let mut args = RemoveArgs {
            all: true,
            no_interaction: true,
            ..Default::default()
        };
        run(&mut args, &mut store, false).unwrap();

        assert!(store.contains("t1"));
        assert!(store.contains("t2"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn non_interactive_single_removal_still_works() {
        let dir = tempdir().unwrap();
        let mut store = store_with_two_templates(dir.path().join("templates.json"));

        let mut args = RemoveArgs {
            template_name: Some("t1".to_string()),
            no_interaction: true,
            ..Default::default()
        };
        run(&mut args, &mut store, false).unwrap();

        assert!(!store.contains("t1"));
        assert!(store.contains("t2"));
    }

    #[test]
    fn removing_a_missing_template_fails_before_any_mutation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");
        let mut store = store_with_two_templates(path.clone());
        let before = fs::read_to_string(&path).unwrap();

        let mut args = RemoveArgs {
            template_name: Some("missing".to_string()),
            no_interaction: true,
            ..Default::default()
        };
        let err = run(&mut args, &mut store, false).unwrap_err();

        assert!(err.downcast_ref::<ResolveError>().is_some());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn missing_name_without_interaction_is_a_validation_error() {
        let dir = tempdir().unwrap();
        let mut store = store_with_two_templates(dir.path().join("templates.json"));

        let mut args = RemoveArgs {
            no_interaction: true,
            ..Default::default()
        };
        let err = run(&mut args, &mut store, false).unwrap_err();
        assert!(err.downcast_ref::<ValidationError>().is_some());
    }
}
