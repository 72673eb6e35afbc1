// src/core/paths.rs

use crate::constants::TEMPLATES_FILENAME;
use lazy_static::lazy_static;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

lazy_static! {
    static ref STENCIL_CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Errors raised while resolving the configuration directory.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform config directory could not be determined at all.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The lock guarding the memoized path was poisoned.
    #[error("Config directory cache lock was poisoned.")]
    CachePoisoned,
}

/// Returns the path to the stencil configuration directory
/// (`%APPDATA%\stencil` on Windows, `~/.config/stencil` elsewhere) without
/// touching the filesystem. The store is created lazily on first save, so
/// resolving the path must not create directories as a side effect.
///
/// This function is memoized: the first call computes and caches the path,
/// subsequent calls return the cached value instantly.
pub fn config_dir() -> Result<PathBuf, PathError> {
    let mut cached_path_guard = STENCIL_CONFIG_DIR
        .lock()
        .map_err(|_| PathError::CachePoisoned)?;

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let config_path = dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)?
        .join("stencil");

    *cached_path_guard = Some(config_path.clone());
    Ok(config_path)
}

/// Returns the path to the global `templates.json` file.
/// This is the only file stencil keeps in its configuration directory.
pub fn templates_path() -> Result<PathBuf, PathError> {
    config_dir().map(|dir| dir.join(TEMPLATES_FILENAME))
}
