// src/config/mod.rs

//! Run-file loading and validation for fanrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a run file from disk (`loader.rs`).
//! - Validate basic invariants like non-empty command lists (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{CommandConfig, ConfigFile, DefaultSection, parse_duration};
pub use validate::validate_config;
