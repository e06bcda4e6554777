//! # ngsmith-core
//!
//! Core library for the ngsmith CLI, providing:
//! - Workspace manifest (`angular.json`) discovery and parsing
//! - Folder-to-project resolution
//! - `ng generate` command composition
//! - Layered user and workspace settings
//! - Shell dispatch for composed commands

pub mod discovery;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod paths;
pub mod resolve;
pub mod schematic;
pub mod settings;

pub use discovery::Workspace;
pub use error::{Error, Result};
pub use manifest::Manifest;
pub use resolve::ResolvedTarget;
pub use schematic::{ComponentOptions, GeneratorCommand, SchematicKind};
pub use settings::{Mode, Settings};
