// src/cli/handlers/mod.rs

//! One module per subcommand, plus shared helpers in `commons`.

pub mod commons;
pub mod new;
pub mod remove;
pub mod show;
pub mod use_template;
