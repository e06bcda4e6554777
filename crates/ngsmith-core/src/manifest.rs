//! Workspace manifest (`angular.json`) model and parsing
//!
//! Only the fields resolution consumes are modeled; everything else in
//! the file is ignored. Projects keep their declaration order so that
//! source-root matching is deterministic.

use std::fs;

use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// File name of the workspace manifest
pub const MANIFEST_FILE_NAME: &str = "angular.json";

/// Parsed workspace manifest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Declared projects, in declaration order
    #[serde(default)]
    pub projects: IndexMap<String, Project>,

    /// Project whose name is omitted from composed commands
    pub default_project: Option<String>,
}

/// A single project declaration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Declared base folder of the project's sources
    pub source_root: Option<String>,
}

impl Manifest {
    /// Read and parse a manifest file.
    ///
    /// The file is read once per invocation, never cached or watched.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| Error::manifest_read(path.as_str(), source))?;
        serde_json::from_str(&content).map_err(|source| Error::manifest_parse(path.as_str(), source))
    }
}
