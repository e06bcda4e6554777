//! Error types for ngsmith-core

use thiserror::Error;

/// Result type alias using ngsmith-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for ngsmith
#[derive(Error, Debug)]
pub enum Error {
    /// Workspace manifest could not be read
    #[error("Failed to read {path}: {source}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Workspace manifest is not valid JSON
    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No declared project owns the computed source root
    #[error("No project found with source root '{source_root}'")]
    NoMatchingProject { source_root: String },

    /// Target folder is not under the workspace root
    #[error("Folder {folder} is outside the workspace rooted at {workspace}")]
    FolderOutsideWorkspace { folder: String, workspace: String },

    /// Settings file given explicitly but absent
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: String },

    /// Settings content could not be used
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Angular CLI missing from PATH
    #[error("Angular CLI (ng) not found on PATH. Install it with: npm install -g @angular/cli")]
    NgNotFound,

    /// Generator command exited non-zero
    #[error("Generator command exited with status code {code}")]
    GeneratorFailed { code: i32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a ManifestRead error
    pub fn manifest_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ManifestRead {
            path: path.into(),
            source,
        }
    }

    /// Create a ManifestParse error
    pub fn manifest_parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ManifestParse {
            path: path.into(),
            source,
        }
    }

    /// Create a NoMatchingProject error
    pub fn no_matching_project(source_root: impl Into<String>) -> Self {
        Self::NoMatchingProject {
            source_root: source_root.into(),
        }
    }

    /// Create a FolderOutsideWorkspace error
    pub fn folder_outside_workspace(
        folder: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        Self::FolderOutsideWorkspace {
            folder: folder.into(),
            workspace: workspace.into(),
        }
    }

    /// Create a SettingsNotFound error
    pub fn settings_not_found(path: impl Into<String>) -> Self {
        Self::SettingsNotFound { path: path.into() }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }

    /// Create a GeneratorFailed error
    pub fn generator_failed(code: i32) -> Self {
        Self::GeneratorFailed { code }
    }
}
