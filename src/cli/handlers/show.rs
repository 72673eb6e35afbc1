// src/cli/handlers/show.rs

//! # Handler for the `template:show` command (alias: `templates`)
//!
//! Read-only: prints where the store lives and an aligned table of saved
//! templates, with long descriptions/commands truncated for display only.

use anyhow::Result;
use colored::Colorize;
use dialoguer::console::measure_text_width;

use crate::{
    cli::args::ShowArgs,
    cli::handlers::commons,
    core::{
        catalog::{self, CatalogRow},
        resolver::ResolveError,
        template_store::TemplateStore,
    },
};

/// The main handler for the `template:show` command.
pub fn handle(args: ShowArgs) -> Result<()> {
    let store = TemplateStore::load()?;
    if store.is_empty() {
        commons::warn_no_templates();
        return Ok(());
    }

    println!(
        "\nTemplates are saved in {}\n",
        store.path().display().to_string().cyan()
    );

    let rows = match &args.template {
        Some(name) => {
            let row = catalog::get(&store, name).ok_or_else(|| ResolveError::NotFound {
                name: name.clone(),
            })?;
            vec![row]
        }
        None => catalog::list(&store),
    };

    print_table(&rows);

    println!(
        "\nUse a template by calling {}",
        "`stencil use <template-name> <project-name>`".cyan()
    );
    Ok(())
}

/// Prints rows as an aligned three-column table.
fn print_table(rows: &[CatalogRow]) {
    let headers = ("Template Name", "Description", "Command");

    let name_width = column_width(headers.0, rows.iter().map(|row| row.name.as_str()));
    let desc_width = column_width(headers.1, rows.iter().map(|row| row.description.as_str()));

    println!(
        "  {}  {}  {}",
        pad(headers.0, name_width).bold(),
        pad(headers.1, desc_width).bold(),
        headers.2.bold()
    );
    println!(
        "  {}  {}  {}",
        "-".repeat(name_width),
        "-".repeat(desc_width),
        "-".repeat(headers.2.len())
    );

    for row in rows {
        println!(
            "  {}  {}  {}",
            pad(&row.name, name_width).cyan(),
            pad(&row.description, desc_width),
            row.command
        );
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(measure_text_width)
        .chain(std::iter::once(measure_text_width(header)))
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(measure_text_width(text));
    format!("{}{}", text, " ".repeat(padding))
}
