// src/core/mod.rs

//! The template lifecycle engine: command composition, the persisted
//! template store, replay resolution, and the display catalog.

pub mod catalog;
pub mod composer;
pub mod paths;
pub mod resolver;
pub mod template_store;
