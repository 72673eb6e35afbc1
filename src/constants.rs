// src/constants.rs

/// The program name used as the first word of every composed command.
pub const TOOL_NAME: &str = "stencil";

/// The subcommand literal that composed commands replay (`stencil new ...`).
pub const NEW_SUBCOMMAND: &str = "new";

/// The literal token embedded in stored commands in place of the eventual
/// project name. Replaced verbatim at replay time.
pub const PROJECT_NAME_PLACEHOLDER: &str = "<project-name>";

/// The flag appended to every composed command so a replay never re-prompts.
pub const NO_INTERACTION_FLAG: &str = "--no-interaction";

/// The name of the template store file (in ~/.config/stencil/).
pub const TEMPLATES_FILENAME: &str = "templates.json";
