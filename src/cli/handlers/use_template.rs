// src/cli/handlers/use_template.rs

//! # Handler for the `use` command
//!
//! Resolves a saved template against a concrete project name and replays the
//! resulting command line through the executor. The project name is
//! validated (and the target directory checked) before anything runs.

use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::env;

use crate::{
    cli::args::UseArgs,
    cli::handlers::commons::{self, ValidationError},
    core::{resolver, template_store::TemplateStore},
    system::executor,
};

/// The main handler for the `use` command.
pub fn handle(mut args: UseArgs) -> Result<()> {
    let interactive = !args.no_interaction;
    if interactive {
        commons::print_banner();
    }

    let store = TemplateStore::load()?;
    if store.is_empty() {
        if interactive {
            commons::warn_no_templates();
        }
        return Ok(());
    }

    let template_name = match args.template_name.take() {
        Some(name) => name,
        None if interactive => commons::prompt_template_name(
            &store,
            "What is the name of the template you want to use?",
        )?,
        None => return Err(ValidationError::TemplateNameRequired.into()),
    };

    let project_name = match args.project_name.take() {
        Some(name) => {
            commons::validate_project_name(&name)?;
            name
        }
        None if interactive => commons::prompt_project_name(args.force)?,
        None => return Err(ValidationError::ProjectNameRequired.into()),
    };

    if !args.force && commons::project_exists(&commons::installation_directory(&project_name)) {
        return Err(anyhow!("Application already exists!"));
    }

    // Lookup fails before anything is executed.
    let command = resolver::resolve(&store, &template_name, &project_name)?;
    log::debug!("Replaying template '{}': {}", template_name, command);

    executor::execute_command(&command, &env::current_dir()?, &HashMap::new())?;
    Ok(())
}
