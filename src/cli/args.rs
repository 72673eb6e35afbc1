// src/cli/args.rs

use clap::Args;

use crate::models::{OptionSet, OptionValue};

/// The full project-creation option surface, shared by `new` and
/// `template:new` so a saved template can replay any choice the interactive
/// flow offers.
///
/// `to_option_set` is the single source of truth for the canonical option
/// order; golden command strings depend on it, so new options are appended,
/// never reordered.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectOptionArgs {
    /// Install the latest "development" release of the base skeleton.
    #[arg(long)]
    pub dev: bool,

    /// Initialize a Git repository.
    #[arg(long)]
    pub git: bool,

    /// The branch that should be created for a new repository.
    #[arg(long)]
    pub branch: Option<String>,

    /// Create a new repository on GitHub.
    #[arg(long)]
    pub github: bool,

    /// The GitHub organization to create the new repository for.
    #[arg(long)]
    pub organization: Option<String>,

    /// The database driver your application will use.
    #[arg(long)]
    pub database: Option<String>,

    /// Install the React starter kit.
    #[arg(long)]
    pub react: bool,

    /// Install the Vue starter kit.
    #[arg(long)]
    pub vue: bool,

    /// Install the Svelte starter kit.
    #[arg(long)]
    pub svelte: bool,

    /// Custom starter (provide your own `npm create` package).
    #[arg(long = "custom-starter")]
    pub custom_starter: Option<String>,

    /// Scaffold the starter kit with TypeScript support.
    #[arg(long)]
    pub typescript: bool,

    /// Scaffold the starter kit with ESLint and Prettier support.
    #[arg(long)]
    pub eslint: bool,

    /// Scaffold the starter kit with server-side rendering support.
    #[arg(long)]
    pub ssr: bool,

    /// Scaffold the starter kit with dark mode support.
    #[arg(long)]
    pub dark: bool,

    /// Use WorkOS for authentication.
    #[arg(long)]
    pub workos: bool,

    /// Install the Vitest testing framework.
    #[arg(long)]
    pub vitest: bool,

    /// Install the Playwright testing framework.
    #[arg(long)]
    pub playwright: bool,

    /// Install and build NPM dependencies.
    #[arg(long)]
    pub npm: bool,

    /// Force install even if the directory already exists.
    #[arg(long, short)]
    pub force: bool,
}

impl ProjectOptionArgs {
    /// Builds the option set in canonical definition order.
    pub fn to_option_set(&self) -> OptionSet {
        let mut options = OptionSet::new();
        options.set_flag("dev", self.dev);
        options.set_flag("git", self.git);
        options.set("branch", optional_value(&self.branch));
        options.set_flag("github", self.github);
        options.set("organization", optional_value(&self.organization));
        options.set("database", optional_value(&self.database));
        options.set_flag("react", self.react);
        options.set_flag("vue", self.vue);
        options.set_flag("svelte", self.svelte);
        options.set("custom-starter", optional_value(&self.custom_starter));
        options.set_flag("typescript", self.typescript);
        options.set_flag("eslint", self.eslint);
        options.set_flag("ssr", self.ssr);
        options.set_flag("dark", self.dark);
        options.set_flag("workos", self.workos);
        options.set_flag("vitest", self.vitest);
        options.set_flag("playwright", self.playwright);
        options.set_flag("npm", self.npm);
        options.set_flag("force", self.force);
        options
    }
}

fn optional_value(value: &Option<String>) -> OptionValue {
    match value {
        Some(v) => OptionValue::Value(v.clone()),
        None => OptionValue::Unset,
    }
}

/// Arguments for `stencil new`.
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// The name of the project to create. Asked interactively if omitted.
    pub name: Option<String>,

    #[command(flatten)]
    pub options: ProjectOptionArgs,

    /// Do not ask for user input; replayed templates always pass this.
    #[arg(long = "no-interaction")]
    pub no_interaction: bool,
}

/// Arguments for `stencil template:new`.
#[derive(Args, Debug, Default)]
pub struct TemplateNewArgs {
    /// The name this template will be saved under.
    #[arg(value_name = "TEMPLATE-NAME")]
    pub template_name: Option<String>,

    /// An optional description shown in template listings.
    #[arg(value_name = "TEMPLATE-DESCRIPTION")]
    pub template_description: Option<String>,

    #[command(flatten)]
    pub options: ProjectOptionArgs,

    /// Do not ask for user input, use defaults for unspecified values.
    #[arg(long = "no-interaction")]
    pub no_interaction: bool,
}

/// Arguments for `stencil use`.
#[derive(Args, Debug, Default)]
pub struct UseArgs {
    /// The name of the template to use.
    #[arg(value_name = "TEMPLATE-NAME")]
    pub template_name: Option<String>,

    /// The name of the project to create.
    #[arg(value_name = "PROJECT-NAME")]
    pub project_name: Option<String>,

    /// Force install even if the directory already exists.
    #[arg(long, short)]
    pub force: bool,

    /// Do not ask for user input.
    #[arg(long = "no-interaction")]
    pub no_interaction: bool,
}

/// Arguments for `stencil template:show`.
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Show a specific template instead of all of them.
    pub template: Option<String>,
}

/// Arguments for `stencil template:remove`.
#[derive(Args, Debug, Default)]
pub struct RemoveArgs {
    /// The name of the template to remove.
    #[arg(value_name = "TEMPLATE-NAME")]
    pub template_name: Option<String>,

    /// Remove all saved templates.
    #[arg(long, short)]
    pub all: bool,

    /// Do not ask for user input.
    #[arg(long = "no-interaction")]
    pub no_interaction: bool,
}
