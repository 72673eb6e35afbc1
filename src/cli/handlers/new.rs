// src/cli/handlers/new.rs

//! # Handlers for `new` and `template:new`
//!
//! Both commands share one option surface and one interactive cascade
//! (starter kit, auth provider, optional features, testing framework,
//! database). `new` runs the scaffold; `template:new` runs the same
//! collection flow but, instead of creating a project, composes the
//! replayable command line and saves it under a name.

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::{
    cli::args::{NewArgs, ProjectOptionArgs, TemplateNewArgs},
    cli::handlers::commons::{self, ValidationError},
    core::{composer, template_store::TemplateStore},
    system::executor,
};

/// Database drivers accepted by `--database`.
const DATABASE_DRIVERS: &[&str] = &["sqlite", "mysql", "mariadb", "postgres"];

lazy_static! {
    // Plain or scoped npm package names.
    static ref PACKAGE_RE: Regex =
        Regex::new(r"^(@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$").unwrap();
}

/// The main handler for the `new` command: create a project.
pub fn handle(mut args: NewArgs) -> Result<()> {
    let interactive = !args.no_interaction;
    if interactive {
        commons::print_banner();
    }

    let name = match args.name.take() {
        Some(raw) => {
            let name = raw.trim_end_matches(['/', '\\']).to_string();
            commons::validate_project_name(&name)?;
            name
        }
        None if interactive => commons::prompt_project_name(args.options.force)?,
        None => return Err(ValidationError::ProjectNameRequired.into()),
    };

    let directory = commons::installation_directory(&name);
    if !args.options.force && commons::project_exists(&directory) {
        return Err(anyhow!("Application already exists!"));
    }
    if args.options.force && name == "." {
        return Err(anyhow!(
            "Cannot use --force option when using current directory for installation!"
        ));
    }

    gather_options(&mut args.options, interactive)?;
    validate_database_option(&args.options)?;

    create_project(&name, &args.options, interactive)
}

/// The main handler for the `template:new` command: collect the same choices
/// as `new`, compose them into a single command, and save it.
pub fn handle_template(mut args: TemplateNewArgs) -> Result<()> {
    let interactive = !args.no_interaction;
    if interactive {
        commons::print_banner();
    }

    let mut store = TemplateStore::load()?;

    let (template_name, overwrite_confirmed) =
        resolve_template_name(args.template_name.take(), &store, interactive)?;
    let template_description =
        resolve_template_description(args.template_description.take(), interactive)?;

    gather_options(&mut args.options, interactive)?;
    validate_database_option(&args.options)?;

    let command = composer::compose(&args.options.to_option_set());

    // Name collisions must be consciously overwritten. Nothing has mutated
    // the store up to this point, so declining loses no data.
    if store.contains(&template_name) && !overwrite_confirmed {
        let proceed = interactive
            && Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("A template with this name already exists. Would you like to overwrite it?")
                .default(false)
                .interact()?;
        if !proceed {
            return Err(ValidationError::TemplateAlreadyExists.into());
        }
    }

    store
        .save(&template_name, &template_description, &command)
        .with_context(|| "Could not save the template store.")?;

    println!(
        "  {} Template {} created successfully.",
        " INFO ".on_blue().white(),
        format!("[{template_name}]").bold()
    );
    println!(
        "  {} You can now use this template by running {}",
        "➜".bright_black(),
        format!("stencil use {template_name} <project-name>").bold()
    );
    Ok(())
}

// --- Template naming ---

/// Resolves the template name from the argument or interactively.
///
/// Returns the name plus whether an overwrite of an existing entry was
/// already confirmed during prompting (so the caller does not ask twice).
fn resolve_template_name(
    from_args: Option<String>,
    store: &TemplateStore,
    interactive: bool,
) -> Result<(String, bool)> {
    if let Some(name) = from_args {
        commons::validate_template_name(&name)?;
        return Ok((name, false));
    }
    if !interactive {
        return Err(ValidationError::TemplateNameRequired.into());
    }

    loop {
        let name = commons::prompt_template_name(store, "What is the name of this template?")?;
        if !store.contains(&name) {
            return Ok((name, false));
        }
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("A template with this name already exists. Would you like to overwrite it?")
            .default(false)
            .interact()?;
        if overwrite {
            return Ok((name, true));
        }
        println!(
            "{}",
            "A template with this name already exists. Please choose a different name.".yellow()
        );
    }
}

fn resolve_template_description(
    from_args: Option<String>,
    interactive: bool,
) -> Result<String> {
    if let Some(description) = from_args {
        commons::validate_description(&description)?;
        return Ok(description);
    }
    if !interactive {
        return Ok(String::new());
    }

    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Provide a description for this template (Not required)")
            .allow_empty(true)
            .interact_text()?;
        let trimmed = input.trim();
        match commons::validate_description(trimmed) {
            Ok(()) => return Ok(trimmed.to_string()),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

// --- The interactive option cascade ---

/// Fills anything not decided by flags through prompts. Non-interactive runs
/// (replays, `--no-interaction`) keep the flags exactly as given.
fn gather_options(options: &mut ProjectOptionArgs, interactive: bool) -> Result<()> {
    if !interactive {
        return Ok(());
    }

    if !uses_starter_kit(options) {
        let kits = [
            "None",
            "React Starter Kit",
            "Vue Starter Kit",
            "Svelte Starter Kit",
            "Custom starter (provide your own package)",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which starter kit would you like to install?")
            .items(&kits)
            .default(0)
            .interact()?;
        match selection {
            1 => options.react = true,
            2 => options.vue = true,
            3 => options.svelte = true,
            4 => options.custom_starter = Some(prompt_custom_starter()?),
            _ => {}
        }
    }

    if uses_starter_kit(options) && !options.workos {
        let providers = [
            "Built-in email/password authentication",
            "WorkOS (Requires WorkOS account)",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which authentication provider do you prefer?")
            .items(&providers)
            .default(0)
            .interact()?;
        options.workos = selection == 1;
    }

    if options.react || options.vue || options.svelte {
        let features = [
            "Dark mode",
            "Server-side rendering",
            "TypeScript",
            "ESLint with Prettier",
        ];
        let defaults = [options.dark, options.ssr, options.typescript, options.eslint];
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Would you like any optional features?")
            .items(&features)
            .defaults(&defaults)
            .interact()?;
        options.dark = picked.contains(&0);
        options.ssr = picked.contains(&1);
        options.typescript = picked.contains(&2);
        options.eslint = picked.contains(&3);
    }

    if uses_starter_kit(options) && !options.vitest && !options.playwright {
        let frameworks = ["Vitest", "Playwright"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which testing framework do you prefer?")
            .items(&frameworks)
            .default(0)
            .interact()?;
        if selection == 0 {
            options.vitest = true;
        } else {
            options.playwright = true;
        }
    }

    if options.database.is_none() {
        let databases = ["SQLite", "MySQL", "MariaDB", "PostgreSQL"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which database will your application use?")
            .items(&databases)
            .default(0)
            .interact()?;
        options.database = DATABASE_DRIVERS.get(selection).map(|s| (*s).to_string());
    }

    Ok(())
}

fn uses_starter_kit(options: &ProjectOptionArgs) -> bool {
    options.react || options.vue || options.svelte || options.custom_starter.is_some()
}

fn prompt_custom_starter() -> Result<String> {
    println!(
        "{} Your custom starter must be an `npm create` compatible package published on the npm registry.",
        "INFO".blue()
    );
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Provide the npm package for the starter kit (E.g. create-acme-app)")
            .interact_text()?;
        let trimmed = input.trim();
        if PACKAGE_RE.is_match(trimmed) {
            return Ok(trimmed.to_string());
        }
        println!(
            "{}",
            "Please enter a valid npm package name (e.g., create-acme-app or @acme/create-app)."
                .yellow()
        );
    }
}

fn validate_database_option(options: &ProjectOptionArgs) -> Result<(), ValidationError> {
    if let Some(driver) = &options.database
        && !DATABASE_DRIVERS.contains(&driver.as_str())
    {
        return Err(ValidationError::InvalidDatabase {
            driver: driver.clone(),
            valid: DATABASE_DRIVERS.join(", "),
        });
    }
    Ok(())
}

// --- Project creation (thin glue over external commands) ---

fn create_project(name: &str, options: &ProjectOptionArgs, interactive: bool) -> Result<()> {
    let directory = commons::installation_directory(name);

    if options.force && directory != Path::new(".") && directory.exists() {
        fs::remove_dir_all(&directory)
            .with_context(|| format!("Could not remove existing directory '{}'", directory.display()))?;
    }

    let cwd = env::current_dir()?;
    let env_vars = HashMap::new();

    executor::execute_command(&create_project_command(name, options), &cwd, &env_vars)?;

    if let Some(database) = &options.database {
        println!(
            "  {} Set DB_CONNECTION={} in your environment file to finish database setup.",
            "INFO".blue(),
            database
        );
    }

    let mut followups: Vec<String> = Vec::new();
    if options.workos {
        followups.push("npm install @workos-inc/node".to_string());
    }
    if options.eslint {
        followups.push("npm install --save-dev eslint prettier".to_string());
    }
    if options.vitest {
        followups.push("npm install --save-dev vitest".to_string());
    } else if options.playwright {
        followups.push("npm install --save-dev @playwright/test".to_string());
    }
    executor::execute_commands(&followups, &directory, &env_vars)?;

    if options.git || options.github {
        create_repository(&directory, options)?;
    }
    if options.github {
        push_to_github(name, &directory, options)?;
    }

    let mut run_npm = options.npm;
    if !run_npm && interactive {
        run_npm = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Would you like to run npm install and npm run build?")
            .default(false)
            .interact()?;
    }
    if run_npm {
        executor::execute_commands(
            &["npm install".to_string(), "npm run build".to_string()],
            &directory,
            &env_vars,
        )?;
    }

    println!();
    println!(
        "  {} Application ready in {}. You can start your local development using:",
        " INFO ".on_blue().white(),
        format!("[{name}]").bold()
    );
    println!();
    println!("  {} {}", "➜".bright_black(), format!("cd {name}").bold());
    if run_npm {
        println!("  {} {}", "➜".bright_black(), "npm run dev".bold());
    } else {
        println!("  {} {}", "➜".bright_black(), "npm install && npm run dev".bold());
    }
    println!();
    Ok(())
}

/// Builds the base-skeleton creation command for the chosen starter kit.
fn create_project_command(name: &str, options: &ProjectOptionArgs) -> String {
    if let Some(package) = &options.custom_starter {
        return format!("npm create {package}@latest \"{name}\" -- --yes");
    }

    let kit = if options.react {
        "react"
    } else if options.vue {
        "vue"
    } else if options.svelte {
        "svelte"
    } else {
        "vanilla"
    };
    let template = if options.typescript {
        format!("{kit}-ts")
    } else {
        kit.to_string()
    };
    let tag = if options.dev { "next" } else { "latest" };

    format!("npm create vite@{tag} \"{name}\" -- --template {template} --yes")
}

fn create_repository(directory: &Path, options: &ProjectOptionArgs) -> Result<()> {
    let branch = options
        .branch
        .clone()
        .unwrap_or_else(default_branch);

    let commands = vec![
        "git init -q".to_string(),
        "git add .".to_string(),
        "git commit -q -m \"Set up a fresh stencil app\"".to_string(),
        format!("git branch -M {branch}"),
    ];
    executor::execute_commands(&commands, directory, &HashMap::new())?;
    Ok(())
}

/// Return the local machine's default Git branch if set or default to `main`.
fn default_branch() -> String {
    let output = std::process::Command::new("git")
        .args(["config", "--global", "init.defaultBranch"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let branch = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if branch.is_empty() { "main".to_string() } else { branch }
        }
        _ => "main".to_string(),
    }
}

fn push_to_github(name: &str, directory: &Path, options: &ProjectOptionArgs) -> Result<()> {
    let auth_ok = std::process::Command::new("gh")
        .args(["auth", "status"])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if !auth_ok {
        println!(
            "  {} Make sure the \"gh\" CLI tool is installed and that you're authenticated to GitHub. Skipping...",
            " WARN ".on_yellow().black()
        );
        return Ok(());
    }

    let repo = match &options.organization {
        Some(org) => format!("{org}/{name}"),
        None => name.to_string(),
    };

    let mut env_vars = HashMap::new();
    env_vars.insert("GIT_TERMINAL_PROMPT".to_string(), "0".to_string());

    executor::execute_command(
        &format!("gh repo create {repo} --source=. --push --private"),
        directory,
        &env_vars,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_validation_accepts_known_drivers() {
        for driver in DATABASE_DRIVERS {
            let options = ProjectOptionArgs {
                database: Some((*driver).to_string()),
                ..Default::default()
            };
            assert!(validate_database_option(&options).is_ok());
        }
    }

    #[test]
    fn database_validation_rejects_unknown_drivers() {
        let options = ProjectOptionArgs {
            database: Some("oracle".to_string()),
            ..Default::default()
        };
        let err = validate_database_option(&options).unwrap_err();
        assert!(err.to_string().contains("oracle"));
        assert!(err.to_string().contains("sqlite"));
    }

    #[test]
    fn skeleton_command_uses_the_selected_kit_and_typescript_variant() {
        let options = ProjectOptionArgs {
            react: true,
            typescript: true,
            ..Default::default()
        };
        assert_eq!(
            create_project_command("shop", &options),
            "npm create vite@latest \"shop\" -- --template react-ts --yes"
        );
    }

    #[test]
    fn skeleton_command_falls_back_to_vanilla() {
        let options = ProjectOptionArgs::default();
        assert_eq!(
            create_project_command("shop", &options),
            "npm create vite@latest \"shop\" -- --template vanilla --yes"
        );
    }

    #[test]
    fn skeleton_command_prefers_a_custom_starter() {
        let options = ProjectOptionArgs {
            custom_starter: Some("@acme/create-app".to_string()),
            react: true,
            ..Default::default()
        };
        assert_eq!(
            create_project_command("shop", &options),
            "npm create @acme/create-app@latest \"shop\" -- --yes"
        );
    }

    #[test]
    fn composed_template_command_reflects_the_flags() {
        let options = ProjectOptionArgs {
            react: true,
            typescript: true,
            database: Some("sqlite".to_string()),
            ..Default::default()
        };
        assert_eq!(
            composer::compose(&options.to_option_set()),
            "stencil new <project-name> --database=sqlite --react --typescript --no-interaction"
        );
    }

    #[test]
    fn package_name_validation() {
        assert!(PACKAGE_RE.is_match("create-acme-app"));
        assert!(PACKAGE_RE.is_match("@acme/create-app"));
        assert!(!PACKAGE_RE.is_match("Not A Package"));
        assert!(!PACKAGE_RE.is_match("acme/"));
    }
}
