//! Layered settings
//!
//! Settings come from two YAML files, merged per field with the nearer
//! one winning:
//! 1. User file: `~/.ngsmith/settings.yaml`
//! 2. Workspace file: `ngsmith.yaml` (searched upward from the
//!    workspace root, `.yml` accepted)
//!
//! An explicit settings path bypasses the hierarchy and loads that file
//! alone. Missing files are fine; malformed ones are an error naming
//! the file.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::schematic::ComponentOptions;

/// Workspace settings file names, in lookup order
const SETTINGS_FILE_NAMES: &[&str] = &["ngsmith.yaml", "ngsmith.yml"];

/// File name of the user-level settings inside `~/.ngsmith`
const USER_SETTINGS_FILE: &str = "settings.yaml";

/// Logging mode persisted in the user settings file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Debug-level diagnostics without passing -v
    Debug,
    /// Normal logging
    #[default]
    Prod,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Debug => "debug",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

/// On-disk settings document; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    /// Component generation flags
    pub component: ComponentOptions,

    /// Logging mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

/// Resolved settings together with the files they came from
#[derive(Debug, Clone)]
pub struct Settings {
    /// Merged component flags
    pub component: ComponentOptions,
    /// Effective logging mode
    pub mode: Mode,
    /// Contributing files, lowest precedence first
    pub sources: Vec<Utf8PathBuf>,
}

impl Settings {
    /// Load settings from an explicit file, or merge the user and
    /// workspace files.
    pub fn load(explicit: Option<&Utf8Path>, workspace_root: Option<&Utf8Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::settings_not_found(path.as_str()));
            }
            let file = read_settings_file(path)?;
            return Ok(Self::from_document(file, vec![path.to_path_buf()]));
        }

        let mut merged = SettingsFile::default();
        let mut sources = Vec::new();

        match user_settings_path() {
            Ok(user_path) => {
                if user_path.exists() {
                    merged = merge(merged, read_settings_file(&user_path)?);
                    sources.push(user_path);
                }
            }
            Err(e) => warn!("Skipping user settings: {}", e),
        }

        if let Some(root) = workspace_root {
            if let Some(workspace_path) = find_workspace_settings(root) {
                merged = merge(merged, read_settings_file(&workspace_path)?);
                sources.push(workspace_path);
            }
        }

        Ok(Self::from_document(merged, sources))
    }

    fn from_document(file: SettingsFile, sources: Vec<Utf8PathBuf>) -> Self {
        Self {
            component: file.component,
            mode: file.mode.unwrap_or_default(),
            sources,
        }
    }

    /// The resolved settings as a serializable document.
    pub fn document(&self) -> SettingsFile {
        SettingsFile {
            component: self.component.clone(),
            mode: Some(self.mode),
        }
    }
}

/// Persist the logging mode to the user settings file, creating it on
/// demand. Other fields already in the file are preserved.
pub fn persist_mode(mode: Mode) -> Result<Utf8PathBuf> {
    let path = user_settings_path()?;
    let mut file = if path.exists() {
        read_settings_file(&path)?
    } else {
        SettingsFile::default()
    };
    file.mode = Some(mode);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, serde_yaml_ng::to_string(&file)?)?;
    debug!("Mode '{}' saved to {}", mode, path);

    Ok(path)
}

/// Mode from the user settings file, defaulting to prod.
///
/// Runs before tracing is initialized, so read failures fall back to
/// the default silently.
pub fn persisted_mode() -> Mode {
    user_settings_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| read_settings_file(&path).ok())
        .and_then(|file| file.mode)
        .unwrap_or_default()
}

/// The user settings path (`~/.ngsmith/settings.yaml`).
///
/// $HOME takes precedence over the platform home lookup so tests and
/// containers can redirect it.
pub fn user_settings_path() -> Result<Utf8PathBuf> {
    let home = std::env::var("HOME")
        .ok()
        .map(std::path::PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(Error::HomeDirNotFound)?;
    let home = Utf8PathBuf::from_path_buf(home)
        .map_err(|_| Error::invalid_settings("home directory path is not valid UTF-8"))?;
    Ok(home.join(".ngsmith").join(USER_SETTINGS_FILE))
}

/// Find a workspace settings file in `root` or any parent directory.
fn find_workspace_settings(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut current = Some(root);
    while let Some(dir) = current {
        for name in SETTINGS_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("Workspace settings found at {}", candidate);
                return Some(candidate);
            }
        }
        current = dir.parent();
    }
    None
}

fn read_settings_file(path: &Utf8Path) -> Result<SettingsFile> {
    let content = fs::read_to_string(path)?;
    serde_yaml_ng::from_str(&content)
        .map_err(|e| Error::invalid_settings(format!("Failed to parse {}: {}", path, e)))
}

/// Merge two settings documents; overlay fields win when set.
fn merge(base: SettingsFile, overlay: SettingsFile) -> SettingsFile {
    SettingsFile {
        component: ComponentOptions {
            change_detection: overlay
                .component
                .change_detection
                .or(base.component.change_detection),
            display_block: overlay.component.display_block.or(base.component.display_block),
            inline_template: overlay
                .component
                .inline_template
                .or(base.component.inline_template),
            inline_style: overlay.component.inline_style.or(base.component.inline_style),
            prefix: overlay.component.prefix.or(base.component.prefix),
            style: overlay.component.style.or(base.component.style),
            view_encapsulation: overlay
                .component
                .view_encapsulation
                .or(base.component.view_encapsulation),
        },
        mode: overlay.mode.or(base.mode),
    }
}
