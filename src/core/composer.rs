// src/core/composer.rs

//! Turns an [`OptionSet`] into the single canonical command line that
//! re-creates a project with exactly those choices.
//!
//! Composition is pure and never fails: options are walked in their
//! definition order (never hash order), unset values are skipped, and valued
//! options are shell-quoted so the result always splits back into the
//! original arguments.

use crate::constants::{NEW_SUBCOMMAND, NO_INTERACTION_FLAG, PROJECT_NAME_PLACEHOLDER, TOOL_NAME};
use crate::models::{OptionSet, OptionValue};
use std::borrow::Cow;

/// Composes the canonical, replayable command string for the given options.
///
/// The result has the fixed shape
/// `stencil new <project-name> [--flag | --name=value]... --no-interaction`,
/// with the placeholder token left literal. Substitution of the real project
/// name happens at replay time, in the resolver.
pub fn compose(options: &OptionSet) -> String {
    let mut parts: Vec<Cow<'_, str>> = vec![
        Cow::Borrowed(TOOL_NAME),
        Cow::Borrowed(NEW_SUBCOMMAND),
        Cow::Borrowed(PROJECT_NAME_PLACEHOLDER),
    ];

    for (name, value) in options.iter() {
        match value {
            // Unset, disabled, and empty options are not part of the command.
            OptionValue::Unset | OptionValue::Flag(false) => {}
            OptionValue::Value(v) if v.is_empty() => {}
            OptionValue::Flag(true) => parts.push(Cow::Owned(format!("--{name}"))),
            OptionValue::Value(v) => parts.push(Cow::Owned(format!("--{name}={}", quote_value(v)))),
        }
    }

    parts.push(Cow::Borrowed(NO_INTERACTION_FLAG));
    parts.join(" ")
}

/// Quotes a single option value so it survives shell-style word splitting as
/// one argument. Composition must never fail, so the one input `shlex`
/// refuses (an embedded NUL byte) is stripped before quoting.
fn quote_value(value: &str) -> String {
    let cleaned: Cow<'_, str> = if value.contains('\0') {
        Cow::Owned(value.replace('\0', ""))
    } else {
        Cow::Borrowed(value)
    };

    match shlex::try_quote(&cleaned) {
        Ok(quoted) => quoted.into_owned(),
        // Unreachable once NUL bytes are stripped; quote the empty string
        // rather than emit a malformed token.
        Err(_) => String::from("''"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_options() -> OptionSet {
        let mut options = OptionSet::new();
        options.set_flag("git", true);
        options.set_value("branch", "main");
        options.set_value("database", "sqlite");
        options.set_flag("react", true);
        options.set_flag("typescript", false);
        options.set_value("organization", "");
        options.set("custom-starter", OptionValue::Unset);
        options
    }

    #[test]
    fn compose_skips_unset_false_and_empty() {
        let command = compose(&sample_options());
        assert_eq!(
            command,
            "stencil new <project-name> --git --branch=main --database=sqlite --react --no-interaction"
        );
    }

    #[test]
    fn compose_is_deterministic() {
        let options = sample_options();
        assert_eq!(compose(&options), compose(&options));
    }

    #[test]
    fn compose_of_empty_set_is_the_bare_skeleton_command() {
        assert_eq!(
            compose(&OptionSet::new()),
            "stencil new <project-name> --no-interaction"
        );
    }

    #[test]
    fn quoted_values_round_trip_through_word_splitting() {
        let mut options = OptionSet::new();
        options.set_value("organization", "acme web tools");
        options.set_value("branch", "it's-main");

        let command = compose(&options);
        let words = shlex::split(&command).expect("composed command must be splittable");

        assert!(words.contains(&"--organization=acme web tools".to_string()));
        assert!(words.contains(&"--branch=it's-main".to_string()));
    }

    #[test]
    fn nul_bytes_never_produce_a_malformed_command() {
        let mut options = OptionSet::new();
        options.set_value("branch", "odd\0name");

        let command = compose(&options);
        let words = shlex::split(&command).expect("composed command must be splittable");
        assert!(words.contains(&"--branch=oddname".to_string()));
    }

    #[test]
    fn trailing_no_interaction_flag_is_always_last() {
        let command = compose(&sample_options());
        assert!(command.ends_with(" --no-interaction"));
    }
}
