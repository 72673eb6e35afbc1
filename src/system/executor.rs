// src/system/executor.rs

//! Runs external command lines (scaffold steps, replayed templates) with
//! inherited stdio, so package managers and git keep their interactive
//! output. Commands are split shell-style but spawned directly, without an
//! intermediate shell, except for the Windows builtin fallback.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

/// Errors raised while executing an external command line.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The command line could not be split into words.
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    /// The program could not be spawned at all.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The command ran but exited non-zero. The child's exit code (when the
    /// platform reports one) propagates as stencil's own exit code.
    #[error("Command '{command}' exited with a non-zero error code.")]
    NonZeroExitStatus {
        /// The command line that failed.
        command: String,
        /// The child's exit code, if any.
        code: Option<i32>,
    },
}

/// Executes a single command line to completion, streaming its output.
pub fn execute_command(
    command_line: &str,
    cwd: &Path,
    env_vars: &HashMap<String, String>,
) -> Result<(), ExecutionError> {
    let trimmed_command = command_line.trim();
    if trimmed_command.is_empty() {
        return Ok(()); // An empty command is a success, not an error.
    }

    let parts = shlex::split(trimmed_command)
        .ok_or_else(|| ExecutionError::CommandParse(trimmed_command.to_string()))?;
    let Some((program, args)) = parts.split_first() else {
        return Ok(());
    };

    let clean_cwd = dunce::simplified(cwd);

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .current_dir(clean_cwd)
        .envs(env_vars)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    log::debug!("Executing: {}", trimmed_command);

    // Fallback logic for Windows built-in commands like `echo`.
    // We try to spawn directly first. If it fails with `NotFound`, we retry with `cmd /C`.
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound && cfg!(target_os = "windows") => {
            log::debug!("Command '{}' not found. Retrying with cmd /C.", program);
            StdCommand::new("cmd")
                .arg("/C")
                .arg(trimmed_command) // Pass the full, unparsed line to cmd
                .current_dir(clean_cwd)
                .envs(env_vars)
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()
                .map_err(|e| ExecutionError::CommandFailed(trimmed_command.to_string(), e))?
        }
        Err(e) => {
            return Err(ExecutionError::CommandFailed(trimmed_command.to_string(), e));
        }
    };

    let status = child
        .wait()
        .map_err(|e| ExecutionError::CommandFailed(trimmed_command.to_string(), e))?;

    if !status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: trimmed_command.to_string(),
            code: status.code(),
        });
    }
    Ok(())
}

/// Executes a sequence of command lines in order, stopping at the first
/// failure, like a shell `&&` chain but without invoking a shell.
pub fn execute_commands(
    command_lines: &[String],
    cwd: &Path,
    env_vars: &HashMap<String, String>,
) -> Result<(), ExecutionError> {
    for command_line in command_lines {
        execute_command(command_line, cwd, env_vars)?;
    }
    Ok(())
}
