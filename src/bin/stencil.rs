// src/bin/stencil.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use stencil::{
    cli::{self, Cli},
    cli::handlers::commons::ValidationError,
    core::resolver::ResolveError,
    system::executor::ExecutionError,
};

/// Exit code for rejected input: bad names, unknown templates, declined
/// overwrites. Distinct from `1`, the generic failure code.
const EXIT_INVALID: i32 = 2;

/// The main entry point of the `stencil` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // --- Centralized Error Handling ---
        // A replayed or composed command that exited non-zero propagates its
        // own exit code; stencil does not swallow it.
        if let Some(exec_err) = e.downcast_ref::<ExecutionError>()
            && let ExecutionError::NonZeroExitStatus { code, .. } = exec_err
        {
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(code.unwrap_or(1));
        }

        // Invalid input (validation failures, unknown template names) gets
        // its own exit code, distinct from generic failure.
        let is_invalid = e.downcast_ref::<ValidationError>().is_some()
            || e.downcast_ref::<ResolveError>().is_some();

        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(if is_invalid { EXIT_INVALID } else { 1 });
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    cli::dispatch(cli)
}
