// src/cli/mod.rs

//! The clap surface and the dispatch from parsed subcommands to handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod args;
pub mod handlers;

use args::{NewArgs, RemoveArgs, ShowArgs, TemplateNewArgs, UseArgs};

/// stencil: scaffold web-application projects and save your favorite
/// combinations of choices as named, replayable templates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// All stencil subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new web application.
    New(NewArgs),

    /// Create and save a custom starter template.
    ///
    /// Mimics the `new` prompts to collect all configuration options, but
    /// instead of creating a project it assembles your choices into a
    /// command you can replay later.
    #[command(name = "template:new")]
    TemplateNew(TemplateNewArgs),

    /// Use a saved template to create a new project.
    Use(UseArgs),

    /// Show all saved templates.
    #[command(name = "template:show", alias = "templates")]
    TemplateShow(ShowArgs),

    /// Remove a saved template you no longer need.
    #[command(name = "template:remove")]
    TemplateRemove(RemoveArgs),
}

/// Routes a parsed command line to its handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    log::debug!("Dispatching command: {:?}", cli.command);
    match cli.command {
        Commands::New(args) => handlers::new::handle(args),
        Commands::TemplateNew(args) => handlers::new::handle_template(args),
        Commands::Use(args) => handlers::use_template::handle(args),
        Commands::TemplateShow(args) => handlers::show::handle(args),
        Commands::TemplateRemove(args) => handlers::remove::handle(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_subcommands_and_the_templates_alias_parse() {
        assert!(matches!(
            Cli::try_parse_from(["stencil", "template:new", "t1"]).unwrap().command,
            Commands::TemplateNew(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["stencil", "templates"]).unwrap().command,
            Commands::TemplateShow(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["stencil", "template:remove", "--all"]).unwrap().command,
            Commands::TemplateRemove(RemoveArgs { all: true, .. })
        ));
    }

    #[test]
    fn replayed_command_lines_parse_without_interaction() {
        let cli = Cli::try_parse_from([
            "stencil",
            "new",
            "shop",
            "--react",
            "--database=sqlite",
            "--no-interaction",
        ])
        .unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("shop"));
                assert!(args.options.react);
                assert_eq!(args.options.database.as_deref(), Some("sqlite"));
                assert!(args.no_interaction);
            }
            other => panic!("expected `new`, parsed {other:?}"),
        }
    }

    #[test]
    fn use_takes_template_then_project_name() {
        let cli =
            Cli::try_parse_from(["stencil", "use", "t1", "shop", "--force"]).unwrap();
        match cli.command {
            Commands::Use(args) => {
                assert_eq!(args.template_name.as_deref(), Some("t1"));
                assert_eq!(args.project_name.as_deref(), Some("shop"));
                assert!(args.force);
            }
            other => panic!("expected `use`, parsed {other:?}"),
        }
    }
}
