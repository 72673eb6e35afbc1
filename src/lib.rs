//! stencil: a command-line scaffolder for web applications with reusable,
//! replayable project templates.

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
