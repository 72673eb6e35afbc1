// src/system/mod.rs

//! External-process plumbing.

pub mod executor;
