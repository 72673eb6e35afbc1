// src/core/template_store.rs

//! Durable mapping from template name to [`Template`], backed by a single
//! `templates.json` document under the user's config directory.
//!
//! There is no long-lived process and no in-memory cache across invocations:
//! every CLI invocation loads the file fresh, mutates the in-memory store,
//! and rewrites the whole document. Each rewrite goes through a temp file in
//! the same directory and an atomic rename, so a crash mid-write cannot
//! truncate the store. Concurrent invocations are not coordinated; the tool
//! is interactive and single-shot by nature.

use crate::core::paths::{self, PathError};
use crate::models::{Template, TemplatesFile};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised by template store operations.
///
/// An absent store file is NOT an error: it loads as an empty store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A filesystem I/O error occurred.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// The config directory could not be resolved or created.
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// The store document could not be serialized to JSON.
    #[error("Failed to serialize templates to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
    /// The rewritten store could not be renamed over the old file.
    #[error("Failed to replace template store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

type StoreResult<T> = Result<T, StoreError>;

/// The template store loaded into memory, together with the path it came
/// from (and will be written back to). Passed explicitly to each operation;
/// there is no ambient global.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    document: TemplatesFile,
    path: PathBuf,
}

impl TemplateStore {
    /// Loads the store from its fixed platform location.
    pub fn load() -> StoreResult<Self> {
        let path = paths::templates_path()?;
        Self::load_from(path)
    }

    /// Loads the store from an explicit path.
    ///
    /// A missing file is an empty store. An unreadable document (truncated
    /// by an interrupted legacy write, hand-edited into invalid JSON) is
    /// also treated as empty rather than bricking every template command;
    /// the parse failure is logged.
    pub fn load_from(path: PathBuf) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self {
                document: TemplatesFile::default(),
                path,
            });
        }

        let contents = fs::read_to_string(&path)?;
        let document = match serde_json::from_str::<TemplatesFile>(&contents) {
            Ok(document) => document,
            Err(e) => {
                log::warn!(
                    "Template store at '{}' is not valid JSON ({}). Treating it as empty.",
                    path.display(),
                    e
                );
                TemplatesFile::default()
            }
        };

        Ok(Self { document, path })
    }

    /// The file this store was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved templates, name-sorted.
    pub fn templates(&self) -> &BTreeMap<String, Template> {
        &self.document.templates
    }

    /// Whether the store holds no templates at all.
    pub fn is_empty(&self) -> bool {
        self.document.templates.is_empty()
    }

    /// Whether a template with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.document.templates.contains_key(name)
    }

    /// Looks up a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.document.templates.get(name)
    }

    /// Inserts or overwrites a template and rewrites the store file.
    ///
    /// Overwrite is unconditional here: an existing entry is replaced whole,
    /// including its description. The "are you sure" step for collisions
    /// belongs to the caller, before any mutation.
    pub fn save(
        &mut self,
        name: &str,
        description: &str,
        command: &str,
    ) -> StoreResult<()> {
        self.document.templates.insert(
            name.to_string(),
            Template {
                description: description.to_string(),
                command: command.to_string(),
            },
        );
        self.persist()
    }

    /// Removes a single template and rewrites the store file.
    ///
    /// Returns `false` (without touching the file) when the name was absent.
    /// Callers check existence first so they can report a proper not-found
    /// message; this is the backstop.
    pub fn remove(&mut self, name: &str) -> StoreResult<bool> {
        if self.document.templates.remove(name).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Removes every template and rewrites the store file.
    pub fn remove_all(&mut self) -> StoreResult<()> {
        self.document.templates.clear();
        self.persist()
    }

    /// Serializes the whole document and atomically replaces the store file.
    ///
    /// The temp file must live in the destination directory: rename is only
    /// atomic within one filesystem.
    fn persist(&self) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                if !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        let json = serde_json::to_string_pretty(&self.document)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        log::debug!("Template store rewritten at '{}'.", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> TemplateStore {
        TemplateStore::load_from(dir.join("templates.json")).unwrap()
    }

    #[test]
    fn absent_file_loads_as_empty_store() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.is_empty());
        assert_eq!(store.path(), dir.path().join("templates.json"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store
            .save(
                "t1",
                "",
                "stencil new <project-name> --react --no-interaction",
            )
            .unwrap();

        let reloaded = store_in(dir.path());
        let template = reloaded.get("t1").expect("t1 must exist after reload");
        assert_eq!(template.description, "");
        assert_eq!(
            template.command,
            "stencil new <project-name> --react --no-interaction"
        );
    }

    #[test]
    fn overwrite_keeps_only_the_latest_entry() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store
            .save("t1", "first description", "stencil new <project-name> --react --no-interaction")
            .unwrap();
        store
            .save("t1", "", "stencil new <project-name> --vue --no-interaction")
            .unwrap();

        let reloaded = store_in(dir.path());
        assert_eq!(reloaded.templates().len(), 1);
        let template = reloaded.get("t1").unwrap();
        // The old description is discarded even though the new one is empty.
        assert_eq!(template.description, "");
        assert_eq!(
            template.command,
            "stencil new <project-name> --vue --no-interaction"
        );
    }

    #[test]
    fn remove_deletes_only_the_named_template() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save("t1", "", "stencil new <project-name> --no-interaction").unwrap();
        store.save("t2", "", "stencil new <project-name> --git --no-interaction").unwrap();

        assert!(store.remove("t1").unwrap());

        let reloaded = store_in(dir.path());
        assert!(!reloaded.contains("t1"));
        assert!(reloaded.contains("t2"));
    }

    #[test]
    fn remove_of_missing_name_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save("t1", "", "stencil new <project-name> --no-interaction").unwrap();

        assert!(!store.remove("missing").unwrap());
        assert!(store.contains("t1"));
    }

    #[test]
    fn remove_all_leaves_an_empty_mapping_on_disk() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save("t1", "", "stencil new <project-name> --no-interaction").unwrap();
        store.save("t2", "", "stencil new <project-name> --git --no-interaction").unwrap();

        store.remove_all().unwrap();

        let reloaded = store_in(dir.path());
        assert!(reloaded.is_empty());
        // The file itself survives as an empty document.
        assert!(dir.path().join("templates.json").exists());
    }

    #[test]
    fn corrupt_store_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");
        fs::write(&path, "{ \"templates\": {").unwrap();

        let store = TemplateStore::load_from(path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn store_file_is_pretty_printed_json_with_a_templates_root() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store
            .save("shop", "react shop starter", "stencil new <project-name> --react --no-interaction")
            .unwrap();

        let raw = fs::read_to_string(dir.path().join("templates.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("templates").and_then(|t| t.get("shop")).is_some());
        // Pretty printing: the document spans multiple lines.
        assert!(raw.lines().count() > 1);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("config");
        let mut store = TemplateStore::load_from(nested.join("templates.json")).unwrap();
        store.save("t1", "", "stencil new <project-name> --no-interaction").unwrap();
        assert!(nested.join("templates.json").exists());
    }
}
